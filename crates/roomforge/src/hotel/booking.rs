//! Booking records.

use chrono::{NaiveDate, NaiveDateTime, Utc};
use roomforge_core::{RoomId, TravelTime};
use uuid::Uuid;

/// Guest details submitted with a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BookingRequest {
    pub guest_name: String,
    pub email: String,
    pub phone: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub special_requests: Option<String>,
}

impl BookingRequest {
    pub fn new(
        guest_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Self {
        Self {
            guest_name: guest_name.into(),
            email: email.into(),
            phone: phone.into(),
            check_in,
            check_out,
            special_requests: None,
        }
    }

    /// Attaches free-text requests. Blank text is dropped.
    pub fn with_special_requests(mut self, requests: impl Into<String>) -> Self {
        let requests = requests.into();
        self.special_requests = if requests.trim().is_empty() {
            None
        } else {
            Some(requests)
        };
        self
    }
}

/// A confirmed booking.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Booking {
    pub id: Uuid,
    pub guest_name: String,
    pub email: String,
    pub phone: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub special_requests: Option<String>,
    /// Booked rooms, in selection order.
    pub rooms: Vec<RoomId>,
    pub travel_time: TravelTime,
    pub created_at: NaiveDateTime,
}

impl Booking {
    pub(crate) fn confirm(
        request: BookingRequest,
        rooms: Vec<RoomId>,
        travel_time: TravelTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            guest_name: request.guest_name,
            email: request.email,
            phone: request.phone,
            check_in: request.check_in,
            check_out: request.check_out,
            special_requests: request.special_requests,
            rooms,
            travel_time,
            created_at: Utc::now().naive_utc(),
        }
    }

    /// Number of nights between check-in and check-out, zero if reversed.
    pub fn nights(&self) -> u64 {
        u64::try_from((self.check_out - self.check_in).num_days()).unwrap_or(0)
    }
}
