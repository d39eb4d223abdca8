//! Hotel inventory and the front-desk workflow.
//!
//! The hotel owns the room inventory and the confirmed bookings. Room
//! selections belong to the caller's session and are passed in explicitly.

mod booking;
mod selection;
mod stats;

#[cfg(test)]
mod tests;

pub use booking::{Booking, BookingRequest};
pub use selection::Selection;
pub use stats::OccupancyStats;

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use roomforge_config::{HotelLayoutConfig, RoomForgeConfig};
use roomforge_core::domain::MAX_FLOOR;
use roomforge_core::{Result, Room, RoomForgeError, RoomId, RoomSet, RoomStatus};
use roomforge_solver::{Allocation, RoomAllocator};
use tracing::{debug, info};

/// A hotel: its rooms, its bookings and the allocator used to place parties.
#[derive(Debug, Clone)]
pub struct Hotel {
    rooms: Vec<Room>,
    index: HashMap<RoomId, usize>,
    bookings: Vec<Booking>,
    allocator: RoomAllocator,
}

impl Hotel {
    /// Builds a hotel with every room available.
    ///
    /// Floors below the top get `rooms_per_floor` rooms numbered
    /// `floor * 100 + 1` upward; the top floor gets `top_floor_rooms`.
    ///
    /// # Example
    ///
    /// ```
    /// use roomforge::{Hotel, HotelLayoutConfig};
    ///
    /// let layout = HotelLayoutConfig { floors: 3, rooms_per_floor: 4, top_floor_rooms: 2 };
    /// let hotel = Hotel::from_layout(&layout).unwrap();
    /// assert_eq!(hotel.rooms().len(), 10);
    /// assert_eq!(hotel.rooms().last().unwrap().number(), 302);
    /// ```
    pub fn from_layout(layout: &HotelLayoutConfig) -> Result<Self> {
        if layout.floors == 0 || layout.floors > MAX_FLOOR {
            return Err(RoomForgeError::InvalidLayout(format!(
                "floors must be between 1 and {}, got {}",
                MAX_FLOOR, layout.floors
            )));
        }

        let mut rooms = Vec::with_capacity(layout.room_count() as usize);
        for floor in 1..=layout.floors {
            for n in 1..=layout.rooms_on_floor(floor) {
                let number = floor * 100 + n;
                let room = Room::new(RoomId::for_number(number), number, floor).map_err(|e| {
                    RoomForgeError::InvalidLayout(format!("floor {}: {}", floor, e))
                })?;
                rooms.push(room);
            }
        }

        Self::with_rooms(rooms, RoomAllocator::default())
    }

    /// Builds the standard 97-room hotel.
    pub fn standard() -> Result<Self> {
        Self::from_layout(&HotelLayoutConfig::default())
    }

    /// Builds a hotel from a full configuration, including allocator limits.
    pub fn with_config(config: &RoomForgeConfig) -> Result<Self> {
        let mut hotel = Self::from_layout(&config.hotel)?;
        hotel.allocator = RoomAllocator::new(config.allocator.clone());
        Ok(hotel)
    }

    /// Builds a hotel from an existing inventory.
    ///
    /// Room ids must be unique.
    pub fn with_rooms(rooms: Vec<Room>, allocator: RoomAllocator) -> Result<Self> {
        let mut index = HashMap::with_capacity(rooms.len());
        for (i, room) in rooms.iter().enumerate() {
            if index.insert(room.id().clone(), i).is_some() {
                return Err(RoomForgeError::DuplicateRoomId(room.id().clone()));
            }
        }

        info!(
            event = "hotel_created",
            room_count = rooms.len() as u64,
        );

        Ok(Self {
            rooms,
            index,
            bookings: Vec::new(),
            allocator,
        })
    }

    /// All rooms in inventory order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.index.get(id).map(|&i| &self.rooms[i])
    }

    pub fn allocator(&self) -> &RoomAllocator {
        &self.allocator
    }

    /// Confirmed bookings, oldest first.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Marks a room available or booked.
    pub fn set_room_status(&mut self, id: &RoomId, status: RoomStatus) -> Result<()> {
        let i = *self
            .index
            .get(id)
            .ok_or_else(|| RoomForgeError::UnknownRoom(id.clone()))?;
        self.rooms[i].set_status(status);
        debug!(event = "room_status", room = %id, status = %status);
        Ok(())
    }

    /// Returns the best room group for a party, empty when none fits.
    pub fn find_optimal_rooms(&self, party_size: usize) -> RoomSet {
        self.allocator.find_optimal_rooms(&self.rooms, party_size)
    }

    /// Allocates rooms for a party, reporting how the answer was found.
    pub fn allocate(&self, party_size: usize) -> Allocation {
        self.allocator.allocate(&self.rooms, party_size)
    }

    /// Returns a fresh selection holding the best room group for a party.
    pub fn select_optimal(&self, party_size: usize) -> Selection {
        Selection::from(self.find_optimal_rooms(party_size))
    }

    /// Books the selected rooms.
    ///
    /// Fails without touching anything if the selection is empty or any
    /// selected room is unknown or no longer available. On success the
    /// rooms are marked booked and the selection is cleared.
    pub fn create_booking(
        &mut self,
        selection: &mut Selection,
        request: BookingRequest,
    ) -> Result<Booking> {
        if selection.is_empty() {
            return Err(RoomForgeError::EmptySelection);
        }

        let mut slots = Vec::with_capacity(selection.len());
        for room in selection.rooms() {
            let i = *self
                .index
                .get(room.id())
                .ok_or_else(|| RoomForgeError::UnknownRoom(room.id().clone()))?;
            if !self.rooms[i].is_available() {
                return Err(RoomForgeError::RoomUnavailable(room.id().clone()));
            }
            slots.push(i);
        }

        for &i in &slots {
            self.rooms[i].set_status(RoomStatus::Booked);
        }

        let booking = Booking::confirm(request, selection.rooms().ids(), selection.travel_time());
        info!(
            event = "booking_created",
            guest = %booking.guest_name,
            rooms = %selection.rooms(),
            score = %booking.travel_time,
        );

        selection.clear();
        self.bookings.push(booking.clone());
        Ok(booking)
    }

    /// Resets the hotel, then books `percentage` percent of its rooms at
    /// random. Existing bookings are discarded.
    ///
    /// Books `floor(total * percentage / 100)` rooms.
    pub fn generate_random_occupancy<R: Rng + ?Sized>(
        &mut self,
        percentage: u8,
        rng: &mut R,
    ) -> Result<usize> {
        if percentage > 100 {
            return Err(RoomForgeError::InvalidOccupancy(percentage));
        }

        self.clear_rooms();

        let to_book = self.rooms.len() * percentage as usize / 100;
        let mut order: Vec<usize> = (0..self.rooms.len()).collect();
        order.shuffle(rng);
        for &i in order.iter().take(to_book) {
            self.rooms[i].set_status(RoomStatus::Booked);
        }

        info!(
            event = "occupancy_generated",
            percentage = percentage as u64,
            booked = to_book as u64,
        );
        Ok(to_book)
    }

    /// Makes every room available and discards all bookings.
    pub fn reset_all_rooms(&mut self) {
        self.clear_rooms();
        info!(event = "rooms_reset", room_count = self.rooms.len() as u64);
    }

    /// Current occupancy figures.
    pub fn stats(&self) -> OccupancyStats {
        OccupancyStats::collect(&self.rooms, self.bookings.len())
    }

    fn clear_rooms(&mut self) {
        for room in &mut self.rooms {
            room.set_status(RoomStatus::Available);
        }
        self.bookings.clear();
    }
}
