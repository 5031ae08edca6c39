use strum_macros::Display;

/// The fixed daily booking grid: one-hour slots from 07:00 to 18:00.
/// Every component compares slots by catalog position, never by label.
pub const TIME_SLOT_LABELS: [&str; 12] = [
    "07:00", "08:00", "09:00", "10:00", "11:00", "12:00",
    "13:00", "14:00", "15:00", "16:00", "17:00", "18:00",
];

/// One entry of the slot catalog, identified by its position in
/// [`TIME_SLOT_LABELS`]. Ordering follows catalog order, so range and
/// adjacency checks are plain index comparisons. On the wire a slot is
/// carried as its label.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot(usize);

impl TimeSlot {
    pub const COUNT: usize = TIME_SLOT_LABELS.len();

    /// Looks a slot up by its label, e.g. `"09:00"`.
    pub fn from_label(label: &str) -> Option<TimeSlot> {
        TIME_SLOT_LABELS.iter().position(|l| *l == label).map(TimeSlot)
    }

    pub fn label(self) -> &'static str { TIME_SLOT_LABELS[self.0] }
    pub fn index(self) -> usize { self.0 }

    /// All slots in catalog order.
    pub fn all() -> impl DoubleEndedIterator<Item = TimeSlot> {
        (0..Self::COUNT).map(TimeSlot)
    }

    /// The inclusive span between two slots, regardless of argument order.
    pub fn span(a: TimeSlot, b: TimeSlot) -> impl Iterator<Item = TimeSlot> {
        let (lo, hi) = if a.0 <= b.0 { (a.0, b.0) } else { (b.0, a.0) };
        (lo..=hi).map(TimeSlot)
    }
}

#[derive(Debug, Display)]
pub enum SlotParseError {
    UnknownLabel(String),
}

impl std::error::Error for SlotParseError {}

impl TryFrom<String> for TimeSlot {
    type Error = SlotParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TimeSlot::from_label(&value).ok_or(SlotParseError::UnknownLabel(value))
    }
}

impl From<TimeSlot> for String {
    fn from(value: TimeSlot) -> Self { String::from(value.label()) }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
