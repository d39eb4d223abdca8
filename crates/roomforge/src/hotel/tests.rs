//! Tests for the hotel workflow.

use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use roomforge_config::AllocatorConfig;
use roomforge_core::TravelTime;
use roomforge_solver::AllocationStrategy;
use roomforge_test::{booked, rooms};

use super::*;

fn request(guest: &str) -> BookingRequest {
    BookingRequest::new(
        guest,
        "guest@example.com",
        "555-0100",
        NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
        NaiveDate::from_ymd_opt(2026, 5, 4).unwrap(),
    )
}

fn id(number: u32) -> RoomId {
    RoomId::for_number(number)
}

mod inventory {
    use super::*;

    #[test]
    fn test_standard_layout() {
        let hotel = Hotel::standard().unwrap();
        assert_eq!(hotel.rooms().len(), 97);
        assert_eq!(hotel.rooms()[0].number(), 101);
        assert_eq!(hotel.rooms()[96].number(), 1007);
        assert_eq!(hotel.room(&id(1007)).unwrap().floor(), 10);
        assert!(hotel.room(&id(1008)).is_none());
        assert!(hotel.rooms().iter().all(Room::is_available));
        assert!(hotel.bookings().is_empty());
    }

    #[test]
    fn test_custom_layout() {
        let layout = HotelLayoutConfig {
            floors: 2,
            rooms_per_floor: 3,
            top_floor_rooms: 1,
        };
        let hotel = Hotel::from_layout(&layout).unwrap();
        let numbers: Vec<u32> = hotel.rooms().iter().map(Room::number).collect();
        assert_eq!(numbers, vec![101, 102, 103, 201]);
    }

    #[test]
    fn test_invalid_layouts() {
        let no_floors = HotelLayoutConfig {
            floors: 0,
            ..Default::default()
        };
        assert!(matches!(
            Hotel::from_layout(&no_floors),
            Err(RoomForgeError::InvalidLayout(_))
        ));

        let too_many_floors = HotelLayoutConfig {
            floors: 11,
            ..Default::default()
        };
        assert!(matches!(
            Hotel::from_layout(&too_many_floors),
            Err(RoomForgeError::InvalidLayout(_))
        ));

        let crowded = HotelLayoutConfig {
            floors: 2,
            rooms_per_floor: 101,
            top_floor_rooms: 1,
        };
        assert!(matches!(
            Hotel::from_layout(&crowded),
            Err(RoomForgeError::InvalidLayout(_))
        ));
    }

    #[test]
    fn test_duplicate_rooms_rejected() {
        let inventory = rooms(&[101, 102, 101]);
        let err = Hotel::with_rooms(inventory, RoomAllocator::default()).unwrap_err();
        assert_eq!(err, RoomForgeError::DuplicateRoomId(id(101)));
    }

    #[test]
    fn test_set_room_status() {
        let mut hotel = Hotel::standard().unwrap();
        hotel.set_room_status(&id(305), RoomStatus::Booked).unwrap();
        assert!(!hotel.room(&id(305)).unwrap().is_available());

        hotel.set_room_status(&id(305), RoomStatus::Available).unwrap();
        assert!(hotel.room(&id(305)).unwrap().is_available());

        assert_eq!(
            hotel.set_room_status(&id(1100), RoomStatus::Booked),
            Err(RoomForgeError::UnknownRoom(id(1100)))
        );
    }

    #[test]
    fn test_with_config_uses_allocator_limits() {
        let mut config = RoomForgeConfig::new().with_hotel(HotelLayoutConfig {
            floors: 1,
            rooms_per_floor: 10,
            top_floor_rooms: 4,
        });
        config.allocator = AllocatorConfig {
            max_party_size: 2,
            combination_limit: None,
        };

        let hotel = Hotel::with_config(&config).unwrap();
        assert_eq!(hotel.rooms().len(), 4);
        assert_eq!(hotel.allocator().max_party_size(), 2);
        assert!(hotel.find_optimal_rooms(3).is_empty());
        assert_eq!(hotel.find_optimal_rooms(2).numbers(), vec![101, 102]);
    }
}

mod selection {
    use super::*;

    #[test]
    fn test_select_only_available_rooms() {
        let mut selection = Selection::new();
        assert!(selection.select(&roomforge_test::room(101)));
        assert!(!selection.select(&booked(102)));
        assert!(!selection.select(&roomforge_test::room(101)));
        assert_eq!(selection.rooms().numbers(), vec![101]);
    }

    #[test]
    fn test_selection_caps_at_party_limit() {
        let mut selection = Selection::new();
        for r in rooms(&[101, 102, 103, 104, 105]) {
            assert!(selection.select(&r));
        }
        assert!(!selection.select(&roomforge_test::room(106)));
        assert_eq!(selection.len(), 5);
    }

    #[test]
    fn test_deselect_and_clear() {
        let mut selection = Selection::new();
        for r in rooms(&[103, 107, 201]) {
            selection.select(&r);
        }
        assert_eq!(selection.travel_time(), TravelTime::of(4 + 2 + 7 + 1));

        assert!(selection.deselect(&id(201)));
        assert!(!selection.deselect(&id(201)));
        assert_eq!(selection.travel_time(), TravelTime::of(4));

        selection.clear();
        assert!(selection.is_empty());
        assert_eq!(selection.travel_time(), TravelTime::ZERO);
    }

    #[test]
    fn test_select_optimal() {
        let mut hotel = Hotel::standard().unwrap();
        hotel.set_room_status(&id(102), RoomStatus::Booked).unwrap();

        let selection = hotel.select_optimal(2);
        assert_eq!(selection.rooms().numbers(), vec![103, 104]);
        assert!(hotel.select_optimal(0).is_empty());
        assert!(hotel.select_optimal(6).is_empty());
    }

    #[test]
    fn test_allocate_reports_strategy() {
        let hotel = Hotel::standard().unwrap();
        let allocation = hotel.allocate(4);
        assert_eq!(allocation.strategy, AllocationStrategy::SingleFloor);
        assert_eq!(allocation.rooms.numbers(), vec![101, 102, 103, 104]);
        assert_eq!(allocation.travel_time, TravelTime::of(3));
    }
}

mod booking {
    use super::*;

    #[test]
    fn test_create_booking() {
        let mut hotel = Hotel::standard().unwrap();
        let mut selection = hotel.select_optimal(3);

        let booking = hotel
            .create_booking(&mut selection, request("Ada").with_special_requests("late arrival"))
            .unwrap();

        assert_eq!(booking.guest_name, "Ada");
        assert_eq!(booking.rooms, vec![id(101), id(102), id(103)]);
        assert_eq!(booking.travel_time, TravelTime::of(2));
        assert_eq!(booking.special_requests.as_deref(), Some("late arrival"));
        assert_eq!(booking.nights(), 3);

        assert!(selection.is_empty());
        assert_eq!(hotel.bookings().len(), 1);
        assert_eq!(hotel.bookings()[0].id, booking.id);
        for n in [101, 102, 103] {
            assert!(!hotel.room(&id(n)).unwrap().is_available());
        }

        // Next party is placed around the booked rooms.
        assert_eq!(hotel.find_optimal_rooms(2).numbers(), vec![104, 105]);
    }

    #[test]
    fn test_empty_selection_rejected() {
        let mut hotel = Hotel::standard().unwrap();
        let mut selection = Selection::new();
        assert_eq!(
            hotel.create_booking(&mut selection, request("Ada")),
            Err(RoomForgeError::EmptySelection)
        );
        assert!(hotel.bookings().is_empty());
    }

    #[test]
    fn test_stale_selection_rejected_without_changes() {
        let mut hotel = Hotel::standard().unwrap();
        let mut first = hotel.select_optimal(2);
        let mut second = hotel.select_optimal(2);

        hotel.create_booking(&mut first, request("Ada")).unwrap();

        let err = hotel.create_booking(&mut second, request("Grace")).unwrap_err();
        assert_eq!(err, RoomForgeError::RoomUnavailable(id(101)));
        assert_eq!(second.len(), 2);
        assert_eq!(hotel.bookings().len(), 1);
        assert_eq!(hotel.stats().booked_rooms, 2);
    }

    #[test]
    fn test_partially_stale_selection_books_nothing() {
        let mut hotel = Hotel::standard().unwrap();
        let mut selection = Selection::new();
        selection.select(hotel.room(&id(201)).unwrap());
        selection.select(hotel.room(&id(202)).unwrap());
        hotel.set_room_status(&id(202), RoomStatus::Booked).unwrap();

        assert_eq!(
            hotel.create_booking(&mut selection, request("Ada")),
            Err(RoomForgeError::RoomUnavailable(id(202)))
        );
        assert!(hotel.room(&id(201)).unwrap().is_available());
    }

    #[test]
    fn test_unknown_room_rejected() {
        let mut hotel = Hotel::standard().unwrap();
        let mut selection = Selection::new();
        selection.select(&roomforge_test::room(1050));

        assert_eq!(
            hotel.create_booking(&mut selection, request("Ada")),
            Err(RoomForgeError::UnknownRoom(id(1050)))
        );
    }

    #[test]
    fn test_nights_handles_reversed_and_long_stays() {
        let mut hotel = Hotel::standard().unwrap();
        let mut selection = hotel.select_optimal(1);
        let mut booking = hotel.create_booking(&mut selection, request("Ada")).unwrap();

        std::mem::swap(&mut booking.check_in, &mut booking.check_out);
        assert_eq!(booking.nights(), 0);

        booking.check_in = NaiveDate::MIN;
        booking.check_out = NaiveDate::MAX;
        let span = (NaiveDate::MAX - NaiveDate::MIN).num_days();
        assert_eq!(booking.nights(), span as u64);
    }

    #[test]
    fn test_blank_special_requests_dropped() {
        let req = request("Ada").with_special_requests("   ");
        assert_eq!(req.special_requests, None);
    }
}

mod occupancy {
    use super::*;

    #[test]
    fn test_random_occupancy_books_floor_of_percentage() {
        let mut hotel = Hotel::standard().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let booked = hotel.generate_random_occupancy(50, &mut rng).unwrap();
        assert_eq!(booked, 48);
        assert_eq!(hotel.stats().booked_rooms, 48);

        assert_eq!(hotel.generate_random_occupancy(0, &mut rng).unwrap(), 0);
        assert_eq!(hotel.stats().booked_rooms, 0);

        assert_eq!(hotel.generate_random_occupancy(100, &mut rng).unwrap(), 97);
        assert!(hotel.find_optimal_rooms(1).is_empty());
    }

    #[test]
    fn test_random_occupancy_is_reproducible() {
        let mut a = Hotel::standard().unwrap();
        let mut b = Hotel::standard().unwrap();
        a.generate_random_occupancy(30, &mut ChaCha8Rng::seed_from_u64(7))
            .unwrap();
        b.generate_random_occupancy(30, &mut ChaCha8Rng::seed_from_u64(7))
            .unwrap();
        assert_eq!(a.rooms(), b.rooms());
    }

    #[test]
    fn test_invalid_percentage() {
        let mut hotel = Hotel::standard().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            hotel.generate_random_occupancy(101, &mut rng),
            Err(RoomForgeError::InvalidOccupancy(101))
        );
    }

    #[test]
    fn test_occupancy_clears_bookings() {
        let mut hotel = Hotel::standard().unwrap();
        let mut selection = hotel.select_optimal(2);
        hotel.create_booking(&mut selection, request("Ada")).unwrap();

        hotel
            .generate_random_occupancy(10, &mut ChaCha8Rng::seed_from_u64(3))
            .unwrap();
        assert!(hotel.bookings().is_empty());
        assert_eq!(hotel.stats().booked_rooms, 9);
    }

    #[test]
    fn test_reset_all_rooms() {
        let mut hotel = Hotel::standard().unwrap();
        let mut selection = hotel.select_optimal(5);
        hotel.create_booking(&mut selection, request("Ada")).unwrap();

        hotel.reset_all_rooms();
        assert!(hotel.bookings().is_empty());
        assert!(hotel.rooms().iter().all(Room::is_available));
    }
}

mod stats {
    use super::*;

    #[test]
    fn test_empty_hotel_stats() {
        let stats = Hotel::standard().unwrap().stats();
        assert_eq!(stats.total_rooms, 97);
        assert_eq!(stats.booked_rooms, 0);
        assert_eq!(stats.available_rooms, 97);
        assert_eq!(stats.occupancy_rate, 0);
        assert_eq!(stats.most_occupied_floor, 0);
        assert_eq!(stats.highest_floor_rate, 0);
        assert_eq!(stats.booking_count, 0);
    }

    #[test]
    fn test_most_occupied_floor_uses_rate() {
        let mut hotel = Hotel::standard().unwrap();
        // Three of ten on floor 2, three of seven on floor 10.
        for n in [201, 202, 203, 1001, 1002, 1003] {
            hotel.set_room_status(&id(n), RoomStatus::Booked).unwrap();
        }

        let stats = hotel.stats();
        assert_eq!(stats.booked_rooms, 6);
        assert_eq!(stats.available_rooms, 91);
        assert_eq!(stats.occupancy_rate, 6);
        assert_eq!(stats.most_occupied_floor, 10);
        assert_eq!(stats.highest_floor_rate, 43);
    }

    #[test]
    fn test_first_floor_wins_rate_tie() {
        let mut hotel = Hotel::standard().unwrap();
        for n in [301, 302, 501, 502] {
            hotel.set_room_status(&id(n), RoomStatus::Booked).unwrap();
        }

        let stats = hotel.stats();
        assert_eq!(stats.most_occupied_floor, 3);
        assert_eq!(stats.highest_floor_rate, 20);
    }

    #[test]
    fn test_booking_count() {
        let mut hotel = Hotel::standard().unwrap();
        let mut selection = hotel.select_optimal(1);
        hotel.create_booking(&mut selection, request("Ada")).unwrap();
        let mut selection = hotel.select_optimal(1);
        hotel.create_booking(&mut selection, request("Grace")).unwrap();

        let stats = hotel.stats();
        assert_eq!(stats.booking_count, 2);
        assert_eq!(stats.booked_rooms, 2);
        assert_eq!(stats.most_occupied_floor, 1);
        assert_eq!(stats.occupancy_rate, 2);
    }
}
