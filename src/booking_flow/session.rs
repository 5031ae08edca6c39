use super::contact::{ContactDetails, ContactErrors};
use super::day_bookings::{BookedSlotSet, fetch_booked_slots};
use super::month_availability::{DayAvailability, MonthAvailability, MonthLoadError, ViewedMonth};
use super::selection::{SelectOutcome, Selection};
use super::slot_catalog::TimeSlot;
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::create_booking_post::CreateBookingRequest;
use crate::http_handler::http_request::equipments_get::EquipmentsRequest;
use crate::http_handler::http_request::request_common::HTTPRequestType;
use crate::http_handler::{Equipment, HTTPError};
use crate::{error, event, info, warn};
use chrono::NaiveDate;
use std::sync::Arc;
use strum_macros::Display;

/// Redirect hook invoked after a successful booking. Injected so the engine
/// stays testable without a live router.
pub trait Navigate: Send + Sync {
    fn navigate(&self, path: &str);
}

/// State of the day dialog. Slot clicks are only processed while `Open`;
/// while `Loading`, selection is suspended until the fetch resolves.
#[derive(Debug, PartialEq, Eq)]
pub enum DayState {
    Closed,
    Loading { date: NaiveDate, token: u64 },
    Open { date: NaiveDate, booked: BookedSlotSet, selection: Selection },
    Failed { date: NaiveDate },
}

/// Handle for one day-open attempt. A loaded result is applied only if the
/// session is still waiting on this exact ticket; anything else is a stale
/// response from a day the user has already left and gets discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayTicket {
    date: NaiveDate,
    token: u64,
}

impl DayTicket {
    pub fn date(&self) -> NaiveDate { self.date }
}

#[derive(Debug, Display)]
pub enum OpenDayError {
    /// The month loader reports the day fully booked; it cannot be opened.
    DayFullyBooked,
    /// No month data is loaded. Unknown availability never counts as open.
    AvailabilityUnknown,
}

impl std::error::Error for OpenDayError {}

#[derive(Debug, Display)]
pub enum SlotClickError {
    /// No day dialog is open.
    NoOpenDay,
    /// The day's booked slots are still being fetched.
    LoadPending,
}

impl std::error::Error for SlotClickError {}

#[derive(Debug, Display)]
pub enum SubmitError {
    /// Start/end are not both set.
    IncompleteSelection,
    InvalidContact(ContactErrors),
    /// A confirmation is already outstanding; no duplicate request is sent.
    SubmissionInFlight,
    /// The backend rejected the booking, e.g. a race with another booker.
    /// All in-progress state is left untouched for correction and resubmit.
    Rejected(HTTPError),
}

impl std::error::Error for SubmitError {}

/// One user's booking flow for a single room: month availability, the day
/// dialog with its slot selection, contact details, the equipment pick, and
/// submission. Driven by a UI event loop; all mutation goes through `&mut`.
pub struct BookingSession {
    room_id: String,
    months: MonthAvailability,
    day: DayState,
    next_token: u64,
    contact: ContactDetails,
    equipments: Vec<Equipment>,
    selected_equipment: Vec<String>,
    submit_in_flight: bool,
    navigator: Option<Arc<dyn Navigate>>,
}

impl BookingSession {
    pub fn new(room_id: &str, initial_month: ViewedMonth) -> Self {
        Self {
            room_id: String::from(room_id),
            months: MonthAvailability::new(room_id, initial_month),
            day: DayState::Closed,
            next_token: 0,
            contact: ContactDetails::default(),
            equipments: Vec::new(),
            selected_equipment: Vec::new(),
            submit_in_flight: false,
            navigator: None,
        }
    }

    pub fn with_navigator(mut self, navigator: Arc<dyn Navigate>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    pub fn room_id(&self) -> &str { &self.room_id }
    pub fn months(&self) -> &MonthAvailability { &self.months }
    pub fn day(&self) -> &DayState { &self.day }
    pub fn contact(&self) -> &ContactDetails { &self.contact }
    pub fn contact_mut(&mut self) -> &mut ContactDetails { &mut self.contact }
    pub fn is_submitting(&self) -> bool { self.submit_in_flight }

    /// The current selection; `Empty` unless a day is open.
    pub fn selection(&self) -> Selection {
        match &self.day {
            DayState::Open { selection, .. } => *selection,
            _ => Selection::Empty,
        }
    }

    /// Switches the calendar one month back/forward or to an arbitrary
    /// month. Closes nothing, but the disabled-date set must be refreshed
    /// before days of the new month can be opened.
    pub fn show_month(&mut self, month: ViewedMonth) {
        self.months.show_month(month);
    }

    /// Refetches full-day occupancy for the viewed month.
    pub async fn refresh_month(&mut self, client: &HTTPClient) -> Result<(), MonthLoadError> {
        self.months.refresh(client).await
    }

    /// Retargets the whole flow to another room: month data is dropped and
    /// any open day dialog is force-closed.
    pub fn set_room(&mut self, room_id: &str) {
        if room_id != self.room_id {
            self.room_id = String::from(room_id);
            self.months.set_room(room_id);
            self.day = DayState::Closed;
        }
    }

    /// Loads the equipment inventory for the multi-select. Stale picks that
    /// no longer exist in the inventory are dropped.
    pub async fn load_equipments(&mut self, client: &HTTPClient) -> Result<(), HTTPError> {
        let response = EquipmentsRequest {}.send_request(client).await?;
        self.equipments = response.into_equipments();
        self.selected_equipment.retain(|id| self.equipments.iter().any(|e| e.id() == id));
        Ok(())
    }

    pub fn equipments(&self) -> &[Equipment] { &self.equipments }
    pub fn selected_equipment(&self) -> &[String] { &self.selected_equipment }

    /// Toggles one inventory item in or out of the pending pick.
    pub fn toggle_equipment(&mut self, equipment_id: &str) {
        if let Some(pos) = self.selected_equipment.iter().position(|id| id == equipment_id) {
            self.selected_equipment.remove(pos);
        } else if self.equipments.iter().any(|e| e.id() == equipment_id) {
            self.selected_equipment.push(String::from(equipment_id));
        } else {
            warn!("Ignoring unknown equipment id {equipment_id}");
        }
    }

    /// Opens the dialog for a non-disabled day. Any previous selection is
    /// gone unconditionally; the returned ticket must be resolved through
    /// [`Self::day_slots_loaded`] (or [`Self::load_day`]) before slot clicks
    /// are accepted.
    pub fn open_day(&mut self, date: NaiveDate) -> Result<DayTicket, OpenDayError> {
        match self.months.day_availability(date) {
            DayAvailability::FullyBooked => return Err(OpenDayError::DayFullyBooked),
            DayAvailability::Unknown => return Err(OpenDayError::AvailabilityUnknown),
            DayAvailability::Open => {}
        }
        self.next_token += 1;
        let ticket = DayTicket { date, token: self.next_token };
        self.day = DayState::Loading { date, token: ticket.token };
        Ok(ticket)
    }

    /// Applies the result of a day's booked-slot fetch. Results for any
    /// ticket other than the one currently awaited are discarded so a slow
    /// response can never leak into a day the user has since navigated to.
    pub fn day_slots_loaded(
        &mut self,
        ticket: DayTicket,
        result: Result<BookedSlotSet, HTTPError>,
    ) {
        match &self.day {
            DayState::Loading { date, token } if *token == ticket.token && *date == ticket.date => {
            }
            _ => {
                event!("Discarding stale slot data for {}", ticket.date);
                return;
            }
        }
        match result {
            Ok(booked) => {
                event!("Day {} has {} booked slot(s)", ticket.date, booked.len());
                self.day = DayState::Open {
                    date: ticket.date,
                    booked,
                    selection: Selection::Empty,
                };
            }
            Err(e) => {
                error!("Could not load time slots for {}: {e}", ticket.date);
                self.day = DayState::Failed { date: ticket.date };
            }
        }
    }

    /// Convenience wrapper: fetch the ticket's booked slots and apply them.
    pub async fn load_day(&mut self, client: &HTTPClient, ticket: DayTicket) {
        let result = fetch_booked_slots(client, &self.room_id, ticket.date).await;
        self.day_slots_loaded(ticket, result);
    }

    /// Closes the day dialog and drops its selection. A fetch still in
    /// flight for this day resolves against a stale ticket and is ignored.
    pub fn close_day(&mut self) {
        self.day = DayState::Closed;
    }

    /// One slot click in the open day dialog.
    pub fn select_slot(&mut self, slot: TimeSlot) -> Result<SelectOutcome, SlotClickError> {
        match &mut self.day {
            DayState::Open { booked, selection, .. } => {
                let (next, outcome) = selection.select(slot, booked);
                *selection = next;
                if outcome == SelectOutcome::Conflict {
                    warn!("Selected span touches a booked slot; selection cleared");
                }
                Ok(outcome)
            }
            DayState::Loading { .. } => Err(SlotClickError::LoadPending),
            DayState::Closed | DayState::Failed { .. } => Err(SlotClickError::NoOpenDay),
        }
    }

    pub fn clear_selection(&mut self) {
        if let DayState::Open { selection, .. } = &mut self.day {
            *selection = selection.clear();
        }
    }

    /// Confirms the booking: validates preconditions, assembles the payload
    /// and performs exactly one create call. Success clears the in-progress
    /// state, invalidates the month cache for the booked date and redirects
    /// through the injected navigator; failure leaves everything as it was.
    pub async fn submit(&mut self, client: &HTTPClient) -> Result<String, SubmitError> {
        if self.submit_in_flight {
            return Err(SubmitError::SubmissionInFlight);
        }
        let request = self.assemble_booking()?;
        let date = request.date;

        self.submit_in_flight = true;
        let result = request.send_request(client).await;
        self.submit_in_flight = false;

        match result {
            Ok(confirmation) => {
                self.finish_successful_booking(date);
                Ok(String::from(confirmation.id()))
            }
            Err(e) => {
                error!("Booking for {date} was rejected: {e}");
                Err(SubmitError::Rejected(e))
            }
        }
    }

    /// Builds the reservation payload once both selection bounds are present
    /// and the contact details validate.
    pub(crate) fn assemble_booking(&self) -> Result<CreateBookingRequest, SubmitError> {
        let (date, start, end) = match &self.day {
            DayState::Open { date, selection, .. } => match selection.bounds() {
                Some((start, end)) => (*date, start, end),
                None => return Err(SubmitError::IncompleteSelection),
            },
            _ => return Err(SubmitError::IncompleteSelection),
        };
        let contact_errors = self.contact.validate();
        if !contact_errors.is_valid() {
            return Err(SubmitError::InvalidContact(contact_errors));
        }
        Ok(CreateBookingRequest {
            room_id: self.room_id.clone(),
            date,
            start_time: start,
            end_time: end,
            status: CreateBookingRequest::PENDING,
            full_name: self.contact.name.clone(),
            email: self.contact.email.clone(),
            phone: self.contact.phone.clone(),
            equipment_ids: self.selected_equipment.clone(),
        })
    }

    /// Post-confirmation reset: the dialog closes, the form and the pick
    /// empty, the booked month refetches on next view, and the surface
    /// redirects home.
    pub(crate) fn finish_successful_booking(&mut self, date: NaiveDate) {
        info!("Booked room {} on {date}", self.room_id);
        self.day = DayState::Closed;
        self.contact.reset();
        self.selected_equipment.clear();
        self.months.invalidate_if_contains(date);
        if let Some(navigator) = &self.navigator {
            navigator.navigate("/");
        }
    }

    #[cfg(test)]
    pub(crate) fn months_mut(&mut self) -> &mut MonthAvailability { &mut self.months }

    #[cfg(test)]
    pub(crate) fn set_equipments_for_test(&mut self, equipments: Vec<Equipment>) {
        self.equipments = equipments;
    }
}
