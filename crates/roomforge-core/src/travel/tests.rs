//! Tests for the travel-time metric.

use super::*;

fn room(number: u32) -> Room {
    Room::from_number(number).unwrap()
}

fn rooms(numbers: &[u32]) -> Vec<Room> {
    numbers.iter().map(|&n| room(n)).collect()
}

#[test]
fn test_empty_and_single_cost_nothing() {
    assert_eq!(travel_time(&[]), TravelTime::ZERO);
    assert_eq!(travel_time(&[room(507)]), TravelTime::ZERO);
    assert_eq!(travel_time(&[room(1007)]), TravelTime::ZERO);
}

#[test]
fn test_same_floor_is_position_distance() {
    assert_eq!(travel_time(&rooms(&[103, 107])), TravelTime::of(4));
    assert_eq!(travel_time(&rooms(&[101, 102])), TravelTime::of(1));
}

#[test]
fn test_cross_floor_routes_through_elevator() {
    // vertical 2 * 2 = 4, horizontal 5 + 2 = 7
    assert_eq!(travel_time(&rooms(&[105, 302])), TravelTime::of(11));
}

#[test]
fn test_input_order_does_not_matter() {
    let forward = rooms(&[101, 205, 203, 110, 1001]);
    let mut backward = forward.clone();
    backward.reverse();
    let mut shuffled = forward.clone();
    shuffled.swap(0, 3);
    shuffled.swap(1, 4);

    let expected = travel_time(&forward);
    assert_eq!(travel_time(&backward), expected);
    assert_eq!(travel_time(&shuffled), expected);
}

#[test]
fn test_sums_consecutive_pairs_in_sorted_order() {
    // Sorted: 101, 110, 203, 205
    // 101 -> 110: 9
    // 110 -> 203: 2 + (10 + 3) = 15
    // 203 -> 205: 2
    assert_eq!(travel_time(&rooms(&[205, 101, 203, 110])), TravelTime::of(26));
}

#[test]
fn test_top_floor_positions() {
    // 907 -> 1003: 2 + (7 + 3) = 12
    assert_eq!(travel_time(&rooms(&[1003, 907])), TravelTime::of(12));
}

#[test]
fn test_position_hundred_sorts_last_on_its_floor() {
    // Room 200 sits at position 100 on floor 1.
    let far = room(200);
    assert_eq!(far.floor(), 1);
    assert_eq!(far.position(), 100);

    // Sorted: 150, 200 -> 50; 200 -> 201: 2 + (100 + 1)
    assert_eq!(travel_time(&rooms(&[201, 200, 150])), TravelTime::of(153));
}

#[test]
fn test_borrowed_rooms_match_owned() {
    let owned = rooms(&[302, 105, 309]);
    let borrowed: Vec<&Room> = owned.iter().rev().collect();
    assert_eq!(travel_time_of(borrowed), travel_time(&owned));
}

#[test]
fn test_pair_cost_is_symmetric_on_one_floor() {
    let a = room(402);
    let b = room(409);
    assert_eq!(pair_cost(&a, &b), pair_cost(&b, &a));
    assert_eq!(pair_cost(&a, &b), TravelTime::of(7));
}

#[test]
fn test_travel_time_display() {
    assert_eq!(format!("{}", TravelTime::of(11)), "11min");
    assert_eq!(format!("{:?}", TravelTime::of(11)), "TravelTime(11)");
}

#[test]
fn test_travel_time_sum() {
    let total: TravelTime = [1, 2, 3].into_iter().map(TravelTime::of).sum();
    assert_eq!(total, TravelTime::of(6));
    assert_eq!(u64::from(total), 6);
}
