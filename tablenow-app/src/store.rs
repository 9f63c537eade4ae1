//! AppStore - reservation state machine
//!
//! Single source of truth for the three mutable aggregates: favorites,
//! reservations, and the user profile. Every mutating operation writes the
//! touched aggregate back to its storage slot before returning, so a
//! restarted process rehydrates exactly the state it last observed.
//!
//! The store is deliberately permissive: it accepts any syntactically-typed
//! input and treats lookups that miss as silent no-ops. Domain validation
//! (phone format, party size, booking windows) belongs to the booking layer.

use crate::storage::Storage;
use shared::models::{
    Reservation, ReservationDraft, ReservationStatus, ReservationUpdate, UserProfile,
    UserProfileUpdate,
};
use shared::{AppError, AppResult, util};

/// Mutable application state backed by slot storage
#[derive(Debug)]
pub struct AppStore {
    storage: Storage,
    favorites: Vec<String>,
    reservations: Vec<Reservation>,
    user: UserProfile,
}

impl AppStore {
    /// Rehydrate all three aggregates from storage.
    ///
    /// Missing or corrupt slots fall back to empty lists / the guest
    /// profile, so the store always starts in a usable state.
    pub fn load(storage: Storage) -> Self {
        let favorites = storage.load_favorites();
        let reservations = storage.load_reservations();
        let user = storage.load_user();
        tracing::info!(
            favorites = favorites.len(),
            reservations = reservations.len(),
            user = %user.id,
            "Store rehydrated"
        );
        Self {
            storage,
            favorites,
            reservations,
            user,
        }
    }

    // ============ Favorites ============

    /// Toggle membership of a restaurant in the favorites set.
    ///
    /// Accepts any id string; no error conditions. Persists the full set.
    pub fn toggle_favorite(&mut self, restaurant_id: &str) {
        match self.favorites.iter().position(|id| id == restaurant_id) {
            Some(index) => {
                self.favorites.remove(index);
            }
            None => self.favorites.push(restaurant_id.to_string()),
        }
        self.persist_favorites();
    }

    /// Pure membership query
    pub fn is_favorite(&self, restaurant_id: &str) -> bool {
        self.favorites.iter().any(|id| id == restaurant_id)
    }

    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    // ============ Reservations ============

    /// Create a reservation from a caller-supplied draft.
    ///
    /// Generates the id, reservation number, and creation timestamp, then
    /// appends and persists. Returns the full stored record. Never rejects
    /// malformed input; validation is the caller's responsibility.
    pub fn add_reservation(&mut self, draft: ReservationDraft) -> Reservation {
        let reservation = Reservation {
            id: util::reservation_id(),
            restaurant_id: draft.restaurant_id,
            date: draft.date,
            time: draft.time,
            party_size: draft.party_size,
            special_requests: draft.special_requests,
            phone: draft.phone,
            status: draft.status,
            reservation_number: util::reservation_number(),
            created_at: util::now_iso(),
        };
        tracing::info!(
            id = %reservation.id,
            number = %reservation.reservation_number,
            restaurant = %reservation.restaurant_id,
            "Reservation created"
        );
        self.reservations.push(reservation.clone());
        self.persist_reservations();
        reservation
    }

    /// Set the matching reservation's status to cancelled.
    ///
    /// Idempotent; a miss is a silent no-op, not an error.
    pub fn cancel_reservation(&mut self, reservation_id: &str) {
        let Some(reservation) = self
            .reservations
            .iter_mut()
            .find(|r| r.id == reservation_id)
        else {
            tracing::debug!(id = %reservation_id, "Cancel miss, ignoring");
            return;
        };
        reservation.status = ReservationStatus::Cancelled;
        self.persist_reservations();
    }

    /// Shallow-merge an update into the matching reservation.
    ///
    /// No field-level validation; a miss is a silent no-op.
    pub fn modify_reservation(&mut self, reservation_id: &str, update: ReservationUpdate) {
        let Some(reservation) = self
            .reservations
            .iter_mut()
            .find(|r| r.id == reservation_id)
        else {
            tracing::debug!(id = %reservation_id, "Modify miss, ignoring");
            return;
        };
        update.apply(reservation);
        self.persist_reservations();
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    // ============ User profile ============

    /// Shallow-merge an update into the profile and persist it
    pub fn update_user(&mut self, update: UserProfileUpdate) {
        update.apply(&mut self.user);
        self.persist_user();
    }

    /// Account deletion is not implemented; the operation is refused
    pub fn delete_account(&self) -> AppResult<()> {
        Err(AppError::unsupported("Account deletion is not available"))
    }

    pub fn user(&self) -> &UserProfile {
        &self.user
    }

    // ============ Persistence ============
    //
    // Write failures keep the in-memory state authoritative for the rest
    // of the session; they are logged, not surfaced.

    fn persist_favorites(&self) {
        if let Err(err) = self.storage.save_favorites(&self.favorites) {
            tracing::warn!(error = %err, "Failed to persist favorites");
        }
    }

    fn persist_reservations(&self) {
        if let Err(err) = self.storage.save_reservations(&self.reservations) {
            tracing::warn!(error = %err, "Failed to persist reservations");
        }
    }

    fn persist_user(&self) {
        if let Err(err) = self.storage.save_user(&self.user) {
            tracing::warn!(error = %err, "Failed to persist user profile");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::StoragePaths;

    fn temp_store() -> (tempfile::TempDir, AppStore) {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open(StoragePaths::new(dir.path())).unwrap();
        (dir, AppStore::load(storage))
    }

    fn draft() -> ReservationDraft {
        ReservationDraft {
            restaurant_id: "1".into(),
            date: "2026-06-01".into(),
            time: "19:00".into(),
            party_size: 2,
            special_requests: String::new(),
            phone: "5551234567".into(),
            status: ReservationStatus::Confirmed,
        }
    }

    #[test]
    fn test_toggle_favorite_twice_restores_state() {
        let (_dir, mut store) = temp_store();
        assert!(!store.is_favorite("1"));
        store.toggle_favorite("1");
        assert!(store.is_favorite("1"));
        store.toggle_favorite("1");
        assert!(!store.is_favorite("1"));
    }

    #[test]
    fn test_toggle_favorite_does_not_affect_others() {
        let (_dir, mut store) = temp_store();
        store.toggle_favorite("1");
        store.toggle_favorite("2");
        store.toggle_favorite("1");
        assert!(!store.is_favorite("1"));
        assert!(store.is_favorite("2"));
    }

    #[test]
    fn test_add_reservation_generates_fields() {
        let (_dir, mut store) = temp_store();
        let reservation = store.add_reservation(draft());

        assert_eq!(store.reservations().len(), 1);
        assert_eq!(reservation.restaurant_id, "1");
        assert_eq!(reservation.status, ReservationStatus::Confirmed);
        assert!(reservation.id.starts_with("res-"));
        assert!(!reservation.created_at.is_empty());

        // TN-YYYYMMDD-NNN with today's date
        let today = chrono::Utc::now().format("%Y%m%d").to_string();
        assert_eq!(&reservation.reservation_number[..3], "TN-");
        assert_eq!(&reservation.reservation_number[3..11], today.as_str());
        assert_eq!(reservation.reservation_number.len(), 15);
    }

    #[test]
    fn test_reservation_ids_never_collide() {
        let (_dir, mut store) = temp_store();
        let a = store.add_reservation(draft());
        let b = store.add_reservation(draft());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let (_dir, mut store) = temp_store();
        let reservation = store.add_reservation(draft());

        store.cancel_reservation(&reservation.id);
        store.cancel_reservation(&reservation.id);

        assert_eq!(store.reservations().len(), 1);
        let stored = &store.reservations()[0];
        assert_eq!(stored.status, ReservationStatus::Cancelled);
        assert_eq!(stored.date, "2026-06-01");
        assert_eq!(stored.time, "19:00");
        assert_eq!(stored.party_size, 2);
    }

    #[test]
    fn test_cancel_unknown_id_is_noop() {
        let (_dir, mut store) = temp_store();
        store.add_reservation(draft());
        store.cancel_reservation("res-does-not-exist");
        assert_eq!(store.reservations()[0].status, ReservationStatus::Confirmed);
    }

    #[test]
    fn test_modify_changes_only_targeted_field() {
        let (_dir, mut store) = temp_store();
        let first = store.add_reservation(draft());
        let second = store.add_reservation(draft());

        store.modify_reservation(
            &first.id,
            ReservationUpdate {
                party_size: Some(6),
                ..Default::default()
            },
        );

        let stored_first = store
            .reservations()
            .iter()
            .find(|r| r.id == first.id)
            .unwrap();
        let stored_second = store
            .reservations()
            .iter()
            .find(|r| r.id == second.id)
            .unwrap();
        assert_eq!(stored_first.party_size, 6);
        assert_eq!(stored_first.date, "2026-06-01");
        assert_eq!(stored_first.status, ReservationStatus::Confirmed);
        assert_eq!(stored_second.party_size, 2);
    }

    #[test]
    fn test_modify_is_permissive() {
        // Party size 0 and edits to a cancelled reservation are accepted
        // without touching status.
        let (_dir, mut store) = temp_store();
        let reservation = store.add_reservation(draft());
        store.cancel_reservation(&reservation.id);

        store.modify_reservation(
            &reservation.id,
            ReservationUpdate {
                party_size: Some(0),
                ..Default::default()
            },
        );

        let stored = &store.reservations()[0];
        assert_eq!(stored.party_size, 0);
        assert_eq!(stored.status, ReservationStatus::Cancelled);
    }

    #[test]
    fn test_update_user_merges_partial_fields() {
        let (_dir, mut store) = temp_store();
        store.update_user(UserProfileUpdate {
            name: Some("Ada Lovelace".into()),
            ..Default::default()
        });
        assert_eq!(store.user().name, "Ada Lovelace");
        assert_eq!(store.user().email, "guest@example.com");
    }

    #[test]
    fn test_delete_account_is_refused() {
        let (_dir, store) = temp_store();
        let err = store.delete_account().unwrap_err();
        assert_eq!(err.code, shared::error::ErrorCode::Unsupported);
    }
}
