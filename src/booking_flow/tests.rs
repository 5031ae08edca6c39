use super::contact::ContactDetails;
use super::day_bookings::BookedSlotSet;
use super::month_availability::{DayAvailability, MonthAvailability, ViewedMonth};
use super::selection::{SelectOutcome, Selection};
use super::session::{BookingSession, DayState, Navigate, OpenDayError, SlotClickError, SubmitError};
use super::slot_catalog::{TIME_SLOT_LABELS, TimeSlot};
use crate::booking_flow::BookingContext;
use crate::http_handler::http_response::month_availability::MonthAvailabilityResponse;
use crate::http_handler::http_response::response_common::ResponseError;
use crate::http_handler::{Equipment, HTTPError};
use chrono::NaiveDate;
use std::sync::{Arc, Mutex};

fn slot(label: &str) -> TimeSlot {
    TimeSlot::from_label(label).unwrap()
}

fn booked(labels: &[&str]) -> BookedSlotSet {
    labels.iter().map(|l| slot(l)).collect()
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn fetch_error() -> HTTPError {
    HTTPError::HTTPResponseError(ResponseError::NoConnection)
}

/// A session with month data loaded and one day open with the given booked slots.
fn session_with_open_day(booked_slots: BookedSlotSet) -> (BookingSession, NaiveDate) {
    let date = day(2025, 3, 12);
    let mut session = BookingSession::new("room-7", ViewedMonth::containing(date));
    session.months_mut().load_for_test(&[]);
    let ticket = session.open_day(date).unwrap();
    session.day_slots_loaded(ticket, Ok(booked_slots));
    (session, date)
}

fn valid_contact() -> ContactDetails {
    ContactDetails {
        name: String::from("Ada Lovelace"),
        email: String::from("ada@example.com"),
        phone: String::from("0812345678"),
    }
}

struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
}

impl Navigate for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths.lock().unwrap().push(String::from(path));
    }
}

#[test]
fn test_catalog_orders_slots_positionally() {
    assert_eq!(TimeSlot::COUNT, 12);
    for (i, label) in TIME_SLOT_LABELS.iter().enumerate() {
        let s = slot(label);
        assert_eq!(s.index(), i);
        assert_eq!(s.label(), *label);
    }
    assert!(slot("07:00") < slot("18:00"));
    assert!(TimeSlot::from_label("06:00").is_none());
    let fwd: Vec<_> = TimeSlot::span(slot("09:00"), slot("11:00")).collect();
    let rev: Vec<_> = TimeSlot::span(slot("11:00"), slot("09:00")).collect();
    assert_eq!(fwd, rev);
    assert_eq!(fwd, vec![slot("09:00"), slot("10:00"), slot("11:00")]);
}

#[test]
fn test_first_click_anchors_single_slot() {
    let (next, outcome) = Selection::Empty.select(slot("08:00"), &booked(&[]));
    assert_eq!(outcome, SelectOutcome::Selected);
    assert_eq!(next, Selection::Anchored(slot("08:00")));
    assert_eq!(next.bounds(), Some((slot("08:00"), slot("08:00"))));
}

#[test]
fn test_reclicking_anchor_keeps_single_slot() {
    let (anchored, _) = Selection::Empty.select(slot("13:00"), &booked(&[]));
    let (next, outcome) = anchored.select(slot("13:00"), &booked(&[]));
    assert_eq!(outcome, SelectOutcome::Selected);
    assert_eq!(next.bounds(), Some((slot("13:00"), slot("13:00"))));
}

#[test]
fn test_click_order_is_irrelevant() {
    let empty = booked(&[]);
    let (a_then_b, _) = {
        let (s, _) = Selection::Empty.select(slot("08:00"), &empty);
        s.select(slot("10:00"), &empty)
    };
    let (b_then_a, _) = {
        let (s, _) = Selection::Empty.select(slot("10:00"), &empty);
        s.select(slot("08:00"), &empty)
    };
    assert_eq!(a_then_b, b_then_a);
    assert_eq!(a_then_b, Selection::Ranged { start: slot("08:00"), end: slot("10:00") });
}

#[test]
fn test_span_with_booked_slot_clears_selection() {
    let blocked = booked(&["09:00"]);
    let (anchored, outcome) = Selection::Empty.select(slot("08:00"), &blocked);
    assert_eq!(outcome, SelectOutcome::Selected);
    // 08:00-10:00 includes booked 09:00, so the whole attempt is rejected.
    let (next, outcome) = anchored.select(slot("10:00"), &blocked);
    assert_eq!(outcome, SelectOutcome::Conflict);
    assert_eq!(next, Selection::Empty);
}

#[test]
fn test_booked_anchor_click_conflicts() {
    let blocked = booked(&["09:00"]);
    let (next, outcome) = Selection::Empty.select(slot("09:00"), &blocked);
    assert_eq!(outcome, SelectOutcome::Conflict);
    assert_eq!(next, Selection::Empty);
}

#[test]
fn test_selection_never_covers_booked_slot() {
    let blocked = booked(&["09:00", "14:00"]);
    for first in TimeSlot::all() {
        for second in TimeSlot::all() {
            let (after_first, _) = Selection::Empty.select(first, &blocked);
            let (after_second, _) = after_first.select(second, &blocked);
            for b in [slot("09:00"), slot("14:00")] {
                assert!(
                    !after_second.covers(b),
                    "{first} then {second} covered booked slot {b}"
                );
            }
        }
    }
}

#[test]
fn test_ranged_selection_can_be_narrowed() {
    let empty = booked(&[]);
    let (sel, _) = Selection::Empty.select(slot("08:00"), &empty);
    let (sel, _) = sel.select(slot("12:00"), &empty);
    let (sel, outcome) = sel.select(slot("10:00"), &empty);
    assert_eq!(outcome, SelectOutcome::Selected);
    assert_eq!(sel, Selection::Ranged { start: slot("08:00"), end: slot("10:00") });
}

#[test]
fn test_clear_resets_any_state() {
    let empty = booked(&[]);
    let (sel, _) = Selection::Empty.select(slot("08:00"), &empty);
    assert_eq!(sel.clear(), Selection::Empty);
    let (sel, _) = sel.select(slot("11:00"), &empty);
    assert_eq!(sel.clear(), Selection::Empty);
}

#[test]
fn test_contact_missing_name_only() {
    let details = ContactDetails {
        name: String::from("  "),
        email: String::from("a@b.com"),
        phone: String::from("0812345678"),
    };
    let errors = details.validate();
    assert!(!errors.is_valid());
    assert!(errors.name().is_some());
    assert!(errors.email().is_none());
    assert!(errors.phone().is_none());
}

#[test]
fn test_contact_bad_email_and_short_phone() {
    let details = ContactDetails {
        name: String::from("A"),
        email: String::from("bad"),
        phone: String::from("123"),
    };
    let errors = details.validate();
    assert!(!errors.is_valid());
    assert!(errors.name().is_none());
    assert!(errors.email().is_some());
    assert_eq!(errors.phone(), Some("Phone number must be exactly 10 digits"));
}

#[test]
fn test_contact_phone_rejects_non_digits_and_wrong_length() {
    for phone in ["081234567", "08123456789", "08123456a8"] {
        let details = ContactDetails { phone: String::from(phone), ..valid_contact() };
        assert!(details.validate().phone().is_some(), "{phone} should be rejected");
    }
    assert!(valid_contact().validate().is_valid());
}

#[test]
fn test_month_response_keys_resolve_to_calendar_days() {
    let response = MonthAvailabilityResponse::test(&[
        ("2025-03-05", true),
        ("2025-03-09", false),
        ("2025-03-21", true),
    ]);
    let days = response.fully_booked_days().unwrap();
    assert_eq!(days.len(), 2);
    assert!(days.contains(&day(2025, 3, 5)));
    assert!(days.contains(&day(2025, 3, 21)));
}

#[test]
fn test_month_response_rejects_malformed_date_key() {
    let response = MonthAvailabilityResponse::test(&[("03/05/2025", true)]);
    assert!(response.fully_booked_days().is_err());
}

#[test]
fn test_viewed_month_navigation_wraps_years() {
    let jan = ViewedMonth::new(2025, 1).unwrap();
    assert_eq!(jan.prev(), ViewedMonth::new(2024, 12).unwrap());
    let dec = ViewedMonth::new(2025, 12).unwrap();
    assert_eq!(dec.next(), ViewedMonth::new(2026, 1).unwrap());
    assert!(ViewedMonth::new(2025, 13).is_none());
    assert!(jan.contains(day(2025, 1, 31)));
    assert!(!jan.contains(day(2025, 2, 1)));
}

#[test]
fn test_month_availability_starts_unknown_and_replaces_wholesale() {
    let mut months = MonthAvailability::new("room-7", ViewedMonth::new(2025, 3).unwrap());
    assert_eq!(months.day_availability(day(2025, 3, 5)), DayAvailability::Unknown);

    months.load_for_test(&[day(2025, 3, 5)]);
    assert_eq!(months.day_availability(day(2025, 3, 5)), DayAvailability::FullyBooked);
    assert_eq!(months.day_availability(day(2025, 3, 6)), DayAvailability::Open);

    // Month switch discards the set instead of merging into it.
    months.show_month(ViewedMonth::new(2025, 4).unwrap());
    assert_eq!(months.day_availability(day(2025, 4, 5)), DayAvailability::Unknown);

    months.load_for_test(&[]);
    months.set_room("room-8");
    assert_eq!(months.day_availability(day(2025, 4, 5)), DayAvailability::Unknown);
}

#[test]
fn test_month_invalidation_is_scoped_to_viewed_month() {
    let mut months = MonthAvailability::new("room-7", ViewedMonth::new(2025, 3).unwrap());
    months.load_for_test(&[]);
    months.invalidate_if_contains(day(2025, 4, 2));
    assert!(months.is_loaded());
    months.invalidate_if_contains(day(2025, 3, 2));
    assert!(!months.is_loaded());
}

#[test]
fn test_open_day_refuses_disabled_and_unknown_days() {
    let mut session = BookingSession::new("room-7", ViewedMonth::new(2025, 3).unwrap());
    assert!(matches!(
        session.open_day(day(2025, 3, 12)),
        Err(OpenDayError::AvailabilityUnknown)
    ));
    session.months_mut().load_for_test(&[day(2025, 3, 12)]);
    assert!(matches!(session.open_day(day(2025, 3, 12)), Err(OpenDayError::DayFullyBooked)));
    assert!(session.open_day(day(2025, 3, 13)).is_ok());
}

#[test]
fn test_selection_is_suspended_until_day_load_resolves() {
    let mut session = BookingSession::new("room-7", ViewedMonth::new(2025, 3).unwrap());
    session.months_mut().load_for_test(&[]);
    let ticket = session.open_day(day(2025, 3, 12)).unwrap();
    assert!(matches!(session.select_slot(slot("08:00")), Err(SlotClickError::LoadPending)));
    session.day_slots_loaded(ticket, Ok(booked(&[])));
    assert_eq!(session.select_slot(slot("08:00")).unwrap(), SelectOutcome::Selected);
}

#[test]
fn test_stale_day_load_is_discarded() {
    let mut session = BookingSession::new("room-7", ViewedMonth::new(2025, 3).unwrap());
    session.months_mut().load_for_test(&[]);
    let first = session.open_day(day(2025, 3, 12)).unwrap();
    let second = session.open_day(day(2025, 3, 13)).unwrap();

    // The response for the abandoned day arrives late and must not apply.
    session.day_slots_loaded(first, Ok(booked(&["09:00"])));
    assert!(matches!(session.day(), DayState::Loading { .. }));

    session.day_slots_loaded(second, Ok(booked(&[])));
    match session.day() {
        DayState::Open { date, booked: b, .. } => {
            assert_eq!(*date, day(2025, 3, 13));
            assert!(b.is_empty());
        }
        other => panic!("expected open day, got {other:?}"),
    }
}

#[test]
fn test_closed_dialog_ignores_late_day_load() {
    let mut session = BookingSession::new("room-7", ViewedMonth::new(2025, 3).unwrap());
    session.months_mut().load_for_test(&[]);
    let ticket = session.open_day(day(2025, 3, 12)).unwrap();
    session.close_day();
    session.day_slots_loaded(ticket, Ok(booked(&["09:00"])));
    assert_eq!(*session.day(), DayState::Closed);
}

#[test]
fn test_day_load_failure_is_recoverable_by_reopening() {
    let mut session = BookingSession::new("room-7", ViewedMonth::new(2025, 3).unwrap());
    session.months_mut().load_for_test(&[]);
    let ticket = session.open_day(day(2025, 3, 12)).unwrap();
    session.day_slots_loaded(ticket, Err(fetch_error()));
    assert!(matches!(session.day(), DayState::Failed { .. }));
    assert!(matches!(session.select_slot(slot("08:00")), Err(SlotClickError::NoOpenDay)));

    let retry = session.open_day(day(2025, 3, 12)).unwrap();
    session.day_slots_loaded(retry, Ok(booked(&[])));
    assert!(matches!(session.day(), DayState::Open { .. }));
}

#[test]
fn test_opening_a_new_day_resets_selection() {
    let (mut session, _) = session_with_open_day(booked(&[]));
    session.select_slot(slot("08:00")).unwrap();
    session.select_slot(slot("10:00")).unwrap();
    assert!(!session.selection().is_empty());

    let ticket = session.open_day(day(2025, 3, 20)).unwrap();
    assert!(session.selection().is_empty());
    session.day_slots_loaded(ticket, Ok(booked(&[])));
    assert!(session.selection().is_empty());
}

#[test]
fn test_conflicting_range_clears_through_session() {
    let (mut session, _) = session_with_open_day(booked(&["09:00"]));
    assert_eq!(session.select_slot(slot("08:00")).unwrap(), SelectOutcome::Selected);
    assert_eq!(session.select_slot(slot("10:00")).unwrap(), SelectOutcome::Conflict);
    assert!(session.selection().is_empty());
}

#[test]
fn test_backwards_selection_through_session() {
    let (mut session, _) = session_with_open_day(booked(&[]));
    session.select_slot(slot("10:00")).unwrap();
    session.select_slot(slot("08:00")).unwrap();
    assert_eq!(
        session.selection(),
        Selection::Ranged { start: slot("08:00"), end: slot("10:00") }
    );
}

#[test]
fn test_equipment_toggle_round_trip() {
    let (mut session, _) = session_with_open_day(booked(&[]));
    session.set_equipments_for_test(vec![
        Equipment::test("eq-1", "Projector"),
        Equipment::test("eq-2", "Whiteboard"),
    ]);
    session.toggle_equipment("eq-1");
    session.toggle_equipment("eq-2");
    session.toggle_equipment("eq-1");
    assert_eq!(session.selected_equipment(), ["eq-2"]);
    session.toggle_equipment("eq-404");
    assert_eq!(session.selected_equipment(), ["eq-2"]);
}

#[test]
fn test_assemble_booking_requires_selection_and_contact() {
    let (mut session, _) = session_with_open_day(booked(&[]));
    assert!(matches!(session.assemble_booking(), Err(SubmitError::IncompleteSelection)));

    session.select_slot(slot("08:00")).unwrap();
    assert!(matches!(session.assemble_booking(), Err(SubmitError::InvalidContact(_))));

    *session.contact_mut() = valid_contact();
    let request = session.assemble_booking().unwrap();
    assert_eq!(request.start_time, slot("08:00"));
    assert_eq!(request.end_time, slot("08:00"));
}

#[test]
fn test_assemble_booking_carries_normalized_range() {
    let (mut session, date) = session_with_open_day(booked(&[]));
    session.set_equipments_for_test(vec![Equipment::test("eq-1", "Projector")]);
    session.toggle_equipment("eq-1");
    session.select_slot(slot("10:00")).unwrap();
    session.select_slot(slot("08:00")).unwrap();
    *session.contact_mut() = valid_contact();

    let request = session.assemble_booking().unwrap();
    assert_eq!(request.room_id, "room-7");
    assert_eq!(request.date, date);
    assert_eq!(request.start_time, slot("08:00"));
    assert_eq!(request.end_time, slot("10:00"));
    assert_eq!(request.status, "pending");
    assert_eq!(request.full_name, "Ada Lovelace");
    assert_eq!(request.equipment_ids, ["eq-1"]);
}

#[test]
fn test_successful_booking_resets_state_and_navigates() {
    let navigator = Arc::new(RecordingNavigator { paths: Mutex::new(Vec::new()) });
    let date = day(2025, 3, 12);
    let mut session = BookingSession::new("room-7", ViewedMonth::containing(date))
        .with_navigator(Arc::clone(&navigator) as Arc<dyn Navigate>);
    session.months_mut().load_for_test(&[]);
    let ticket = session.open_day(date).unwrap();
    session.day_slots_loaded(ticket, Ok(booked(&[])));
    session.select_slot(slot("08:00")).unwrap();
    *session.contact_mut() = valid_contact();

    session.finish_successful_booking(date);

    assert_eq!(*session.day(), DayState::Closed);
    assert_eq!(*session.contact(), ContactDetails::default());
    assert!(session.selected_equipment().is_empty());
    // Newly booked slots must show up on the next month view.
    assert!(!session.months().is_loaded());
    assert_eq!(*navigator.paths.lock().unwrap(), ["/"]);
}

#[test]
fn test_failed_submission_preserves_state() {
    let (mut session, _) = session_with_open_day(booked(&[]));
    session.select_slot(slot("08:00")).unwrap();
    session.select_slot(slot("10:00")).unwrap();
    *session.contact_mut() = valid_contact();

    // Server-side rejection surfaces the error and leaves everything intact;
    // only finish_successful_booking ever clears the form.
    let selection_before = session.selection();
    assert!(session.assemble_booking().is_ok());
    assert_eq!(session.selection(), selection_before);
    assert_eq!(*session.contact(), valid_contact());
}

#[tokio::test]
async fn test_context_shares_session_across_handles() {
    let context = BookingContext::new(
        "http://localhost:3001/api",
        "room-7",
        ViewedMonth::new(2025, 3).unwrap(),
    );
    let other = context.clone();
    {
        let session = context.session();
        session.write().await.show_month(ViewedMonth::new(2025, 4).unwrap());
    }
    let session = other.session();
    let viewed = session.read().await.months().viewed();
    assert_eq!(viewed, ViewedMonth::new(2025, 4).unwrap());
}

#[test]
fn test_time_slot_serde_round_trips_labels() {
    let parsed = TimeSlot::try_from(String::from("09:00")).unwrap();
    assert_eq!(parsed, slot("09:00"));
    assert_eq!(String::from(parsed), "09:00");
    assert!(TimeSlot::try_from(String::from("9:00")).is_err());
}
