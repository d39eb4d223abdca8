//! Front Desk Demo
//!
//! Fills a hotel with random occupancy, finds the best rooms for a party
//! and optionally books them.
//!
//! ```text
//! front-desk --occupancy 60 --seed 7 --party-size 4 --book "Ada Lovelace"
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{Days, Local};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use roomforge::prelude::*;

#[derive(Parser)]
#[command(name = "front-desk")]
#[command(version)]
#[command(about = "Find and book the closest rooms for a party")]
struct Cli {
    /// Configuration file (TOML); defaults apply when missing
    #[arg(long, default_value = "roomforge.toml")]
    config: PathBuf,

    /// Share of rooms to mark booked before allocating (0-100)
    #[arg(long)]
    occupancy: Option<u8>,

    /// Seed for the random occupancy
    #[arg(long)]
    seed: Option<u64>,

    /// Number of rooms the party needs
    #[arg(short, long, default_value = "3")]
    party_size: usize,

    /// Book the allocated rooms for this guest
    #[arg(long, value_name = "GUEST")]
    book: Option<String>,
}

fn main() -> ExitCode {
    roomforge::console::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = RoomForgeConfig::load_or_default(&cli.config)?;
    let mut hotel = Hotel::with_config(&config)?;

    let percentage = cli
        .occupancy
        .unwrap_or(config.occupancy.default_percentage);
    let seed = cli
        .seed
        .or(config.occupancy.random_seed)
        .unwrap_or_else(rand::random);
    println!("Occupancy {}% with seed {}", percentage, seed);
    hotel.generate_random_occupancy(percentage, &mut ChaCha8Rng::seed_from_u64(seed))?;

    print_floors(&hotel);

    let allocation = hotel.allocate(cli.party_size);
    if allocation.is_empty() {
        println!("\nNo rooms available for a party of {}.", cli.party_size);
        return Ok(());
    }
    println!(
        "\nParty of {}: rooms {} ({}, {})",
        cli.party_size, allocation.rooms, allocation.travel_time, allocation.strategy
    );

    if let Some(guest) = cli.book {
        let mut selection = Selection::from(allocation.rooms);
        let check_in = Local::now().date_naive();
        let check_out = check_in
            .checked_add_days(Days::new(1))
            .unwrap_or(check_in);
        let email = format!("{}@example.com", guest.to_lowercase().replace(' ', "."));
        let request = BookingRequest::new(guest, email, "n/a", check_in, check_out);
        let booking = hotel.create_booking(&mut selection, request)?;
        println!("Booking {} confirmed for {}", booking.id, booking.guest_name);
    }

    let stats = hotel.stats();
    println!(
        "Occupancy {}% ({} of {} booked), busiest floor {} at {}%",
        stats.occupancy_rate,
        stats.booked_rooms,
        stats.total_rooms,
        stats.most_occupied_floor,
        stats.highest_floor_rate
    );
    Ok(())
}

// One line per floor, top floor first: '.' free, '#' booked.
fn print_floors(hotel: &Hotel) {
    let top = hotel.rooms().iter().map(Room::floor).max().unwrap_or(0);
    println!();
    for floor in (1..=top).rev() {
        let line: String = hotel
            .rooms()
            .iter()
            .filter(|r| r.floor() == floor)
            .map(|r| if r.is_available() { '.' } else { '#' })
            .collect();
        println!("{:>3} {}", floor, line);
    }
}
