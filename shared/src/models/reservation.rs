//! Reservation Model

use serde::{Deserialize, Serialize};

/// Reservation lifecycle status.
///
/// Non-cyclic: `Confirmed` moves to `Cancelled` via the cancel operation.
/// Nothing promotes `Confirmed` to `Completed` automatically; that
/// transition is manual (a caller may set it through a modify update).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Confirmed,
    Completed,
    Cancelled,
}

/// Reservation entity
///
/// `id` is the primary key, unique within a process lifetime.
/// `reservation_number` is a display identifier (`TN-<YYYYMMDD>-<NNN>`),
/// generated once and never regenerated; collisions are statistically rare
/// but permitted. `created_at` is immutable once set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: String,
    /// Foreign key into the catalog; not validated by the store
    pub restaurant_id: String,
    /// ISO date string; range validation is the caller's responsibility
    pub date: String,
    /// Free-form time string, e.g. "19:00"
    pub time: String,
    pub party_size: u32,
    pub special_requests: String,
    pub phone: String,
    pub status: ReservationStatus,
    pub reservation_number: String,
    pub created_at: String,
}

/// Create reservation payload: everything the caller supplies.
///
/// `id`, `reservation_number`, and `created_at` are generated by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDraft {
    pub restaurant_id: String,
    pub date: String,
    pub time: String,
    pub party_size: u32,
    pub special_requests: String,
    pub phone: String,
    pub status: ReservationStatus,
}

/// Update reservation payload: shallow-merged field by field.
///
/// Identity, reservation number, and creation timestamp are not updatable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationUpdate {
    pub restaurant_id: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub party_size: Option<u32>,
    pub special_requests: Option<String>,
    pub phone: Option<String>,
    pub status: Option<ReservationStatus>,
}

impl ReservationUpdate {
    /// Merge this update into a reservation, leaving `None` fields untouched
    pub fn apply(&self, reservation: &mut Reservation) {
        if let Some(restaurant_id) = &self.restaurant_id {
            reservation.restaurant_id = restaurant_id.clone();
        }
        if let Some(date) = &self.date {
            reservation.date = date.clone();
        }
        if let Some(time) = &self.time {
            reservation.time = time.clone();
        }
        if let Some(party_size) = self.party_size {
            reservation.party_size = party_size;
        }
        if let Some(special_requests) = &self.special_requests {
            reservation.special_requests = special_requests.clone();
        }
        if let Some(phone) = &self.phone {
            reservation.phone = phone.clone();
        }
        if let Some(status) = self.status {
            reservation.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Reservation {
        Reservation {
            id: "res-1".into(),
            restaurant_id: "1".into(),
            date: "2026-06-01".into(),
            time: "19:00".into(),
            party_size: 2,
            special_requests: String::new(),
            phone: "5551234567".into(),
            status: ReservationStatus::Confirmed,
            reservation_number: "TN-20260601-042".into(),
            created_at: "2026-05-20T10:00:00.000Z".into(),
        }
    }

    #[test]
    fn test_update_merges_only_present_fields() {
        let mut reservation = sample();
        let update = ReservationUpdate {
            party_size: Some(6),
            ..Default::default()
        };
        update.apply(&mut reservation);

        assert_eq!(reservation.party_size, 6);
        assert_eq!(reservation.date, "2026-06-01");
        assert_eq!(reservation.time, "19:00");
        assert_eq!(reservation.status, ReservationStatus::Confirmed);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&ReservationStatus::Cancelled).unwrap();
        assert_eq!(json, "\"cancelled\"");
    }
}
