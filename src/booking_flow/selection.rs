use super::day_bookings::BookedSlotSet;
use super::slot_catalog::TimeSlot;

/// The slot-click state of the time dialog.
///
/// Either endpoint of a range may be clicked first; the pair is always kept
/// normalized with `start <= end` in catalog order, so once a range is formed
/// the machine no longer remembers which endpoint was clicked first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Empty,
    /// A single slot is chosen; start and end coincide on it.
    Anchored(TimeSlot),
    /// A normalized range with `start < end`.
    Ranged { start: TimeSlot, end: TimeSlot },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Selected,
    /// The attempted span touched a booked slot. The whole selection is
    /// dropped, never truncated to the valid part.
    Conflict,
}

impl Selection {
    /// Applies one slot click against the day's booked slots and returns the
    /// follow-up state. Conflicts clear the selection entirely.
    #[must_use]
    pub fn select(self, slot: TimeSlot, booked: &BookedSlotSet) -> (Selection, SelectOutcome) {
        let anchor = match self {
            Selection::Empty => {
                if booked.contains(slot) {
                    return (Selection::Empty, SelectOutcome::Conflict);
                }
                return (Selection::Anchored(slot), SelectOutcome::Selected);
            }
            Selection::Anchored(anchor) => anchor,
            Selection::Ranged { start, .. } => start,
        };
        if booked.blocks_span(anchor, slot) {
            return (Selection::Empty, SelectOutcome::Conflict);
        }
        if slot == anchor {
            return (Selection::Anchored(anchor), SelectOutcome::Selected);
        }
        let (start, end) = if anchor < slot { (anchor, slot) } else { (slot, anchor) };
        (Selection::Ranged { start, end }, SelectOutcome::Selected)
    }

    #[must_use]
    pub fn clear(self) -> Selection { Selection::Empty }

    /// The normalized `(start, end)` pair, present once an anchor exists.
    /// `start == end` denotes a single-slot booking.
    pub fn bounds(&self) -> Option<(TimeSlot, TimeSlot)> {
        match *self {
            Selection::Empty => None,
            Selection::Anchored(slot) => Some((slot, slot)),
            Selection::Ranged { start, end } => Some((start, end)),
        }
    }

    pub fn is_empty(&self) -> bool { matches!(self, Selection::Empty) }

    /// Whether `slot` lies inside the current inclusive selection, used by
    /// the dialog to highlight the picked span.
    pub fn covers(&self, slot: TimeSlot) -> bool {
        self.bounds().is_some_and(|(start, end)| start <= slot && slot <= end)
    }
}
