//! Persistence integration tests
//!
//! The store must survive a process restart: every aggregate is written to
//! its own slot on mutation and rehydrated independently on load.

use shared::models::{ReservationDraft, ReservationStatus, UserProfileUpdate};
use tablenow_app::paths::StoragePaths;
use tablenow_app::storage::Storage;
use tablenow_app::store::AppStore;

fn open_store(dir: &std::path::Path) -> AppStore {
    let storage = Storage::open(StoragePaths::new(dir)).unwrap();
    AppStore::load(storage)
}

fn draft() -> ReservationDraft {
    ReservationDraft {
        restaurant_id: "1".into(),
        date: "2026-06-01".into(),
        time: "19:00".into(),
        party_size: 4,
        special_requests: "window table".into(),
        phone: "5551234567".into(),
        status: ReservationStatus::Confirmed,
    }
}

#[test]
fn state_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    let reservation_id = {
        let mut store = open_store(dir.path());
        store.toggle_favorite("7");
        store.toggle_favorite("12");
        store.update_user(UserProfileUpdate {
            name: Some("Grace".into()),
            ..Default::default()
        });
        store.add_reservation(draft()).id
    };

    // Fresh store over the same directory sees everything back
    let store = open_store(dir.path());
    assert!(store.is_favorite("7"));
    assert!(store.is_favorite("12"));
    assert_eq!(store.user().name, "Grace");
    assert_eq!(store.reservations().len(), 1);
    let reservation = &store.reservations()[0];
    assert_eq!(reservation.id, reservation_id);
    assert_eq!(reservation.party_size, 4);
    assert_eq!(reservation.special_requests, "window table");
}

#[test]
fn slots_are_independent() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store = open_store(dir.path());
        store.toggle_favorite("3");
        store.add_reservation(draft());
    }

    // Corrupting one slot must not take the others down with it
    let paths = StoragePaths::new(dir.path());
    std::fs::write(paths.favorites_file(), "%%% not json %%%").unwrap();

    let store = open_store(dir.path());
    assert!(store.favorites().is_empty());
    assert_eq!(store.reservations().len(), 1);
    assert_eq!(store.user().id, "user-001");
}

#[test]
fn slots_are_plain_json_documents() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store = open_store(dir.path());
        store.toggle_favorite("42");
        store.add_reservation(draft());
    }

    let paths = StoragePaths::new(dir.path());

    let favorites: Vec<String> =
        serde_json::from_str(&std::fs::read_to_string(paths.favorites_file()).unwrap()).unwrap();
    assert_eq!(favorites, vec!["42"]);

    let reservations: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(paths.reservations_file()).unwrap()).unwrap();
    assert_eq!(reservations.as_array().unwrap().len(), 1);
    assert_eq!(reservations[0]["restaurantId"], "1");
    assert_eq!(reservations[0]["status"], "confirmed");

    // User slot is only written once the profile mutates
    assert!(!paths.user_file().exists());
}

#[test]
fn cancellation_persists() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store = open_store(dir.path());
        let reservation = store.add_reservation(draft());
        store.cancel_reservation(&reservation.id);
    }

    let store = open_store(dir.path());
    assert_eq!(store.reservations().len(), 1);
    assert_eq!(store.reservations()[0].status, ReservationStatus::Cancelled);
}
