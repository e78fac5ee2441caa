use std::sync::Arc;

use assert_matches::assert_matches;
use chrono::NaiveDate;
use futures::future::join_all;

use appointment_cell::models::*;
use appointment_cell::services::{AppointmentStore, BookingService};
use doctor_cell::services::DoctorRegistry;
use shared_config::BookingPolicy;
use shared_models::auth::UserRole;
use shared_utils::test_utils::TestUser;

// Dr. Rajesh Kumar (id "2") works Mon, Wed, Fri.
const KUMAR: &str = "2";

fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

fn today() -> NaiveDate {
    date("2030-01-01")
}

fn service(policy: BookingPolicy) -> (BookingService, Arc<AppointmentStore>) {
    let store = Arc::new(AppointmentStore::new());
    let registry = Arc::new(DoctorRegistry::with_mock_doctors());
    (BookingService::with_parts(registry, store.clone(), policy), store)
}

fn request(doctor_id: &str, on: &str, time: &str) -> BookAppointmentRequest {
    BookAppointmentRequest {
        doctor_id: doctor_id.to_string(),
        date: date(on),
        time: time.to_string(),
        reason: "Chest pain after exercise".to_string(),
    }
}

#[test]
fn test_booking_is_confirmed_and_attributed_to_user() {
    let (service, store) = service(BookingPolicy::Strict);
    let user = TestUser::patient("asha@example.com").to_user("pat-1");

    let appointment = service.book(&user, request(KUMAR, "2030-01-07", "10:00 AM"), today()).unwrap();

    assert_eq!(appointment.patient_id, "pat-1");
    assert_eq!(appointment.doctor_id, KUMAR);
    assert_eq!(appointment.status, AppointmentStatus::Confirmed);
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(appointment.id), Some(appointment));
}

#[test]
fn test_booking_becomes_visible_to_availability() {
    let (service, _store) = service(BookingPolicy::Strict);
    let user = TestUser::default().to_user("pat-1");

    let before = service.available_slots(KUMAR, Some(date("2030-01-07"))).unwrap();
    assert_eq!(before.len(), 14);

    service.book(&user, request(KUMAR, "2030-01-07", "10:00 AM"), today()).unwrap();

    let after = service.available_slots(KUMAR, Some(date("2030-01-07"))).unwrap();
    assert_eq!(after.len(), 13);
    assert!(after.iter().all(|s| s.time != "10:00 AM"));
}

#[test]
fn test_available_slots_for_unknown_doctor() {
    let (service, _store) = service(BookingPolicy::Strict);
    assert_matches!(
        service.available_slots("99", Some(date("2030-01-07"))),
        Err(AppointmentError::DoctorNotFound)
    );
    assert_eq!(service.available_slots(KUMAR, None).unwrap().len(), 0);
}

#[test]
fn test_strict_rejects_second_booking_of_same_slot() {
    let (service, store) = service(BookingPolicy::Strict);
    let first = TestUser::patient("a@example.com").to_user("pat-1");
    let second = TestUser::patient("b@example.com").to_user("pat-2");

    service.book(&first, request(KUMAR, "2030-01-07", "09:00 AM"), today()).unwrap();
    let result = service.book(&second, request(KUMAR, "2030-01-07", "09:00 AM"), today());

    assert_matches!(result, Err(AppointmentError::ConflictDetected));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_permissive_accepts_double_booking() {
    let (service, store) = service(BookingPolicy::Permissive);
    let user = TestUser::default().to_user("pat-1");

    service.book(&user, request(KUMAR, "2030-01-07", "09:00 AM"), today()).unwrap();
    service.book(&user, request(KUMAR, "2030-01-07", "09:00 AM"), today()).unwrap();

    assert_eq!(store.for_doctor(KUMAR).len(), 2);
}

#[test]
fn test_permissive_skips_registry_validation() {
    let (service, store) = service(BookingPolicy::Permissive);
    let user = TestUser::default().to_user("pat-1");

    // Tuesday, unknown label, unknown doctor: all accepted as submitted.
    service.book(&user, request(KUMAR, "2030-01-08", "07:00 PM"), today()).unwrap();
    service.book(&user, request("99", "2030-01-07", "09:00 AM"), today()).unwrap();

    assert_eq!(store.len(), 2);
}

#[test]
fn test_strict_rejects_day_doctor_does_not_work() {
    let (service, _store) = service(BookingPolicy::Strict);
    let user = TestUser::default().to_user("pat-1");

    let result = service.book(&user, request(KUMAR, "2030-01-08", "09:00 AM"), today());
    assert_matches!(result, Err(AppointmentError::DoctorNotAvailable { weekday }) if weekday == "Tue");
}

#[test]
fn test_strict_rejects_unknown_doctor_and_slot() {
    let (service, _store) = service(BookingPolicy::Strict);
    let user = TestUser::default().to_user("pat-1");

    assert_matches!(
        service.book(&user, request("99", "2030-01-07", "09:00 AM"), today()),
        Err(AppointmentError::DoctorNotFound)
    );
    assert_matches!(
        service.book(&user, request(KUMAR, "2030-01-07", "12:30 PM"), today()),
        Err(AppointmentError::InvalidTime(_))
    );
}

#[test]
fn test_strict_rejects_past_dates() {
    let (service, _store) = service(BookingPolicy::Strict);
    let user = TestUser::default().to_user("pat-1");

    assert_matches!(
        service.book(&user, request(KUMAR, "2024-01-01", "09:00 AM"), today()),
        Err(AppointmentError::InvalidTime(_))
    );
}

#[test]
fn test_reason_is_required() {
    let (service, store) = service(BookingPolicy::Permissive);
    let user = TestUser::default().to_user("pat-1");
    let mut req = request(KUMAR, "2030-01-07", "09:00 AM");
    req.reason = "   ".to_string();

    assert_matches!(service.book(&user, req, today()), Err(AppointmentError::ValidationError(_)));
    assert!(store.is_empty());
}

#[test]
fn test_cancelled_appointment_frees_slot_for_strict_booking() {
    let (service, store) = service(BookingPolicy::Strict);
    let user = TestUser::default().to_user("pat-1");

    store.append(Appointment::new(
        KUMAR,
        "pat-0",
        date("2030-01-07"),
        "09:00 AM",
        "Old booking",
        AppointmentStatus::Cancelled,
    ));

    service.book(&user, request(KUMAR, "2030-01-07", "09:00 AM"), today()).unwrap();
    assert_eq!(store.for_doctor(KUMAR).len(), 2);
}

#[test]
fn test_doctor_lookup_keeps_insertion_order_and_all_statuses() {
    let (service, store) = service(BookingPolicy::Strict);

    for (time, status) in [
        ("09:00 AM", AppointmentStatus::Confirmed),
        ("09:30 AM", AppointmentStatus::Cancelled),
        ("10:00 AM", AppointmentStatus::Pending),
    ] {
        store.append(Appointment::new(KUMAR, "pat-1", date("2030-01-07"), time, "Visit", status));
    }
    store.append(Appointment::new("3", "pat-1", date("2030-01-08"), "09:00 AM", "Visit", AppointmentStatus::Confirmed));

    let times: Vec<String> = service
        .appointments_for_doctor(KUMAR)
        .unwrap()
        .into_iter()
        .map(|a| a.time)
        .collect();
    assert_eq!(times, vec!["09:00 AM", "09:30 AM", "10:00 AM"]);
    assert_matches!(service.appointments_for_doctor("99"), Err(AppointmentError::DoctorNotFound));
}

#[test]
fn test_get_appointment_is_owner_only() {
    let (service, _store) = service(BookingPolicy::Strict);
    let owner = TestUser::patient("a@example.com").to_user("pat-1");
    let stranger = TestUser::new("Dr. Who", "who@example.com", UserRole::Doctor).to_user("doc-9");

    let appointment = service.book(&owner, request(KUMAR, "2030-01-09", "02:00 PM"), today()).unwrap();

    assert_eq!(service.get_appointment(appointment.id, &owner).unwrap(), appointment);
    assert_matches!(service.get_appointment(appointment.id, &stranger), Err(AppointmentError::Unauthorized));
    assert_matches!(
        service.get_appointment(uuid::Uuid::new_v4(), &owner),
        Err(AppointmentError::NotFound)
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_strict_bookings_claim_slot_once() {
    let store = Arc::new(AppointmentStore::new());
    let registry = Arc::new(DoctorRegistry::with_mock_doctors());

    let attempts = (0..16).map(|i| {
        let service = BookingService::with_parts(registry.clone(), store.clone(), BookingPolicy::Strict);
        tokio::spawn(async move {
            let user = TestUser::default().to_user(&format!("pat-{}", i));
            service.book(&user, request(KUMAR, "2030-01-07", "11:30 AM"), today())
        })
    });

    let results = join_all(attempts).await;
    let successes = results
        .into_iter()
        .map(|joined| joined.expect("booking task panicked"))
        .filter(Result::is_ok)
        .count();

    assert_eq!(successes, 1);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_store_submit_dispatches_on_policy() {
    let store = AppointmentStore::new();
    let make = || Appointment::new(KUMAR, "pat-1", date("2030-01-07"), "09:00 AM", "Visit", AppointmentStatus::Confirmed);

    store.submit(make(), BookingPolicy::Strict).unwrap();
    assert_matches!(store.submit(make(), BookingPolicy::Strict), Err(AppointmentError::ConflictDetected));
    store.submit(make(), BookingPolicy::Permissive).unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.for_patient("pat-1").len(), 2);
}
