//! Colorful console output for allocation events.
//!
//! Provides a custom `tracing` layer that formats allocator and front-desk
//! events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (allocation/phase start/end, bookings)
//! - **DEBUG**: New best room groups
//! - **TRACE**: Individual candidate evaluations

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static ALLOCATION_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "roomforge_solver=info,roomforge=info";

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the RoomForge banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(RoomForgeConsoleLayer)
            .try_init();
    });
}

// Marks the start of an allocation for elapsed time tracking.
fn mark_allocation_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    ALLOCATION_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since allocation start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = ALLOCATION_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
 ____                       _____
|  _ \ ___   ___  _ __ ___ |  ___|__  _ __ __ _  ___
| |_) / _ \ / _ \| '_ ` _ \| |_ / _ \| '__/ _` |/ _ \
|  _ < (_) | (_) | | | | | |  _| (_) | | | (_| |  __/
|_| \_\___/ \___/|_| |_| |_|_|  \___/|_|  \__, |\___|
                                          |___/
"#;

    let version_line = format!("                 v{} - Room Allocation Engine\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats allocation events with colors.
pub struct RoomForgeConsoleLayer;

impl<S: Subscriber> Layer<S> for RoomForgeConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        // Accept events from RoomForge crates
        if !target.starts_with("roomforge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let level = *metadata.level();
        let output = format_event(&visitor, level);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    phase: Option<String>,
    strategy: Option<String>,
    score: Option<String>,
    rooms: Option<String>,
    guest: Option<String>,
    message: Option<String>,
    phase_index: Option<u64>,
    steps: Option<u64>,
    speed: Option<u64>,
    duration_ms: Option<u64>,
    candidate_count: Option<u64>,
    party_size: Option<u64>,
    evaluations: Option<u64>,
    travel_time: Option<u64>,
    percentage: Option<u64>,
    booked: Option<u64>,
    accepted: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "phase" => self.phase = Some(s),
            "strategy" => self.strategy = Some(s),
            "score" => self.score = Some(s),
            "rooms" => self.rooms = Some(s),
            "guest" => self.guest = Some(s),
            "message" => self.message = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "phase_index" => self.phase_index = Some(value),
            "steps" => self.steps = Some(value),
            "speed" => self.speed = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "candidate_count" => self.candidate_count = Some(value),
            "party_size" => self.party_size = Some(value),
            "evaluations" => self.evaluations = Some(value),
            "travel_time" => self.travel_time = Some(value),
            "percentage" => self.percentage = Some(value),
            "booked" => self.booked = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "accepted" {
            self.accepted = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "phase" => self.phase = Some(value.to_string()),
            "strategy" => self.strategy = Some(value.to_string()),
            "score" => self.score = Some(value.to_string()),
            "rooms" => self.rooms = Some(value.to_string()),
            "guest" => self.guest = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "allocation_start" => format_allocation_start(v),
        "allocation_end" => format_allocation_end(v),
        "phase_start" => format_phase_start(v),
        "phase_end" => format_phase_end(v),
        "new_best" => format_new_best(v),
        "evaluate" => format_evaluate(v, level),
        "combination_limit" | "inconsistent_inventory" => format_warning(v),
        "booking_created" => format_booking(v),
        "occupancy_generated" => format_occupancy(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_allocation_start(v: &EventVisitor) -> String {
    mark_allocation_start();
    let candidates = v.candidate_count.unwrap_or(0);
    let party = v.party_size.unwrap_or(0);

    format!(
        "{} {} Allocating │ party of {} │ {} rooms available",
        format_elapsed(),
        "▶".bright_green().bold(),
        party.to_formatted_string(&Locale::en).bright_yellow(),
        candidates.to_formatted_string(&Locale::en).bright_yellow(),
    )
}

fn format_allocation_end(v: &EventVisitor) -> String {
    let strategy = v.strategy.as_deref().unwrap_or("Unknown");
    let score = v.score.as_deref().unwrap_or("N/A");
    let rooms = v.rooms.as_deref().unwrap_or("[]");
    let evaluations = v.evaluations.unwrap_or(0);
    let duration = v.duration_ms.unwrap_or(0);

    let status = if strategy == "Infeasible" {
        "NO ROOMS".bright_red().bold().to_string()
    } else {
        strategy.bright_green().bold().to_string()
    };

    format!(
        "{} {} Allocation complete │ {} │ {} │ {} │ {} evaluated │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        status,
        rooms.white().bold(),
        score.bright_yellow(),
        evaluations.to_formatted_string(&Locale::en).white(),
        format_duration_ms(duration).yellow(),
    )
}

fn format_phase_start(v: &EventVisitor) -> String {
    let phase = v.phase.as_deref().unwrap_or("Unknown");

    format!(
        "{} {} {} started",
        format_elapsed(),
        "▶".bright_blue(),
        phase.white().bold()
    )
}

fn format_phase_end(v: &EventVisitor) -> String {
    let phase = v.phase.as_deref().unwrap_or("Unknown");
    let steps = v.steps.unwrap_or(0);
    let speed = v.speed.unwrap_or(0);
    let score = v.score.as_deref().unwrap_or("N/A");
    let duration = v.duration_ms.unwrap_or(0);

    format!(
        "{} {} {} ended │ {} │ {} candidates │ {} candidates/s │ best {}",
        format_elapsed(),
        "◀".bright_blue(),
        phase.white().bold(),
        format_duration_ms(duration).yellow(),
        steps.to_formatted_string(&Locale::en).white(),
        speed
            .to_formatted_string(&Locale::en)
            .bright_magenta()
            .bold(),
        score.bright_yellow(),
    )
}

fn format_new_best(v: &EventVisitor) -> String {
    let time = v.travel_time.unwrap_or(0);
    let rooms = v.rooms.as_deref().unwrap_or("[]");

    format!(
        "{} {} New best {} │ {}",
        format_elapsed(),
        "⚡".bright_cyan(),
        rooms.white(),
        format_minutes(time).bright_yellow(),
    )
}

fn format_evaluate(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    let time = v.travel_time.unwrap_or(0);
    let icon = if v.accepted.unwrap_or(false) {
        "✓".bright_green().to_string()
    } else {
        "✗".bright_red().to_string()
    };

    format!(
        "{} {} Candidate │ {}",
        format_elapsed(),
        icon,
        format_minutes(time).bright_black(),
    )
}

fn format_warning(v: &EventVisitor) -> String {
    let message = v.message.as_deref().unwrap_or("warning");
    format!("{} {} {}", format_elapsed(), "!".bright_red().bold(), message.yellow())
}

fn format_booking(v: &EventVisitor) -> String {
    let guest = v.guest.as_deref().unwrap_or("guest");
    let rooms = v.rooms.as_deref().unwrap_or("[]");
    let score = v.score.as_deref().unwrap_or("N/A");

    format!(
        "{} {} Booked {} for {} │ {}",
        format_elapsed(),
        "✓".bright_green().bold(),
        rooms.white().bold(),
        guest.bright_white(),
        score.bright_yellow(),
    )
}

fn format_occupancy(v: &EventVisitor) -> String {
    let percentage = v.percentage.unwrap_or(0);
    let booked = v.booked.unwrap_or(0);

    format!(
        "{} {} Random occupancy │ {}% │ {} rooms booked",
        format_elapsed(),
        "◆".bright_magenta(),
        percentage,
        booked.to_formatted_string(&Locale::en).bright_yellow(),
    )
}

fn format_minutes(minutes: u64) -> String {
    format!("{}min", minutes.to_formatted_string(&Locale::en))
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visitor(event: &str) -> EventVisitor {
        EventVisitor {
            event: Some(event.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_duration_formatting() {
        assert_eq!(format_duration_ms(12), "12ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_unknown_event_is_silent() {
        assert!(format_event(&visitor("something_else"), Level::INFO).is_empty());
        assert!(format_event(&EventVisitor::default(), Level::INFO).is_empty());
    }

    #[test]
    fn test_evaluate_only_at_trace() {
        let v = EventVisitor {
            travel_time: Some(7),
            accepted: Some(true),
            ..visitor("evaluate")
        };
        assert!(format_event(&v, Level::DEBUG).is_empty());
        assert!(format_event(&v, Level::TRACE).contains("7min"));
    }

    #[test]
    fn test_new_best_keeps_minutes_together() {
        let v = EventVisitor {
            travel_time: Some(1_250),
            rooms: Some("[101, 910]".to_string()),
            ..visitor("new_best")
        };
        let line = format_event(&v, Level::DEBUG);
        assert!(line.contains("[101, 910]"));
        assert!(line.contains("1,250min"));
    }

    #[test]
    fn test_minutes_formatting() {
        assert_eq!(format_minutes(0), "0min");
        assert_eq!(format_minutes(12_345), "12,345min");
    }

    #[test]
    fn test_allocation_end_mentions_rooms_and_strategy() {
        let v = EventVisitor {
            strategy: Some("SingleFloor".to_string()),
            rooms: Some("[101, 102]".to_string()),
            score: Some("1min".to_string()),
            evaluations: Some(2),
            ..visitor("allocation_end")
        };
        let line = format_event(&v, Level::INFO);
        assert!(line.contains("SingleFloor"));
        assert!(line.contains("[101, 102]"));
        assert!(line.contains("1min"));
    }

    #[test]
    fn test_infeasible_allocation_end() {
        let v = EventVisitor {
            strategy: Some("Infeasible".to_string()),
            ..visitor("allocation_end")
        };
        assert!(format_event(&v, Level::INFO).contains("NO ROOMS"));
    }

    #[test]
    fn test_phase_end_formats_counts() {
        let v = EventVisitor {
            phase: Some("Exhaustive".to_string()),
            steps: Some(12_345),
            ..visitor("phase_end")
        };
        let line = format_event(&v, Level::INFO);
        assert!(line.contains("Exhaustive"));
        assert!(line.contains("12,345"));
    }
}
