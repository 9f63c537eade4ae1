//! Booking flow
//!
//! Caller-side boundary between user input and the permissive store. All
//! domain validation lives here: the store accepts whatever it is handed,
//! so a request must pass this layer before `add_reservation` is invoked.

use crate::store::AppStore;
use shared::models::{Reservation, ReservationDraft, ReservationStatus};
use thiserror::Error;
use validator::Validate;

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Please enter a valid phone number")]
    InvalidPhone,
}

/// User-supplied booking request
#[derive(Debug, Clone, Validate)]
pub struct BookingRequest {
    pub restaurant_id: String,
    /// ISO date, e.g. "2026-06-01"
    pub date: String,
    /// Slot time, e.g. "19:00"
    pub time: String,
    pub party_size: u32,
    pub special_requests: String,
    /// At least 10 characters, the original product's only phone rule
    #[validate(length(min = 10))]
    pub phone: String,
}

impl BookingRequest {
    fn into_draft(self) -> ReservationDraft {
        ReservationDraft {
            restaurant_id: self.restaurant_id,
            date: self.date,
            time: self.time,
            party_size: self.party_size,
            special_requests: self.special_requests,
            phone: self.phone,
            status: ReservationStatus::Confirmed,
        }
    }
}

/// Validate a request and create the reservation.
///
/// Returns the stored record (with generated id, number, and timestamp) so
/// the caller can display the confirmation immediately.
pub fn book(store: &mut AppStore, request: BookingRequest) -> Result<Reservation, BookingError> {
    request.validate().map_err(|_| BookingError::InvalidPhone)?;
    Ok(store.add_reservation(request.into_draft()))
}
