//! Configuration system for RoomForge.
//!
//! Load hotel layout, allocator limits and occupancy simulation settings
//! from TOML or YAML files without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use roomforge_config::RoomForgeConfig;
//!
//! let config = RoomForgeConfig::from_toml_str(r#"
//!     [hotel]
//!     floors = 4
//!     rooms_per_floor = 6
//!     top_floor_rooms = 3
//!
//!     [allocator]
//!     max_party_size = 4
//!     combination_limit = 50000
//! "#).unwrap();
//!
//! assert_eq!(config.hotel.room_count(), 21);
//! assert_eq!(config.allocator.max_party_size, 4);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use roomforge_config::RoomForgeConfig;
//!
//! let config = RoomForgeConfig::load_or_default("roomforge.toml").unwrap();
//! // Proceeds with the standard 97-room hotel if the file doesn't exist
//! ```

use std::path::Path;

use roomforge_core::domain::{MAX_FLOOR, MAX_PARTY_SIZE};
use serde::{Deserialize, Serialize};
use thiserror::Error;


/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main RoomForge configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RoomForgeConfig {
    /// Hotel layout used to build the inventory.
    #[serde(default)]
    pub hotel: HotelLayoutConfig,

    /// Allocator limits.
    #[serde(default)]
    pub allocator: AllocatorConfig,

    /// Random occupancy simulation.
    #[serde(default)]
    pub occupancy: OccupancyConfig,
}

impl RoomForgeConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML or holds
    /// out-of-range values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults.
    ///
    /// Unreadable, malformed or out-of-range files are still errors.
    ///
    /// # Example
    ///
    /// ```
    /// use roomforge_config::RoomForgeConfig;
    ///
    /// let config = RoomForgeConfig::load_or_default("no-such-roomforge.toml").unwrap();
    /// assert_eq!(config, RoomForgeConfig::default());
    /// ```
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the hotel layout.
    pub fn with_hotel(mut self, hotel: HotelLayoutConfig) -> Self {
        self.hotel = hotel;
        self
    }

    /// Caps the number of combinations the exhaustive search may score.
    pub fn with_combination_limit(mut self, limit: u64) -> Self {
        self.allocator.combination_limit = Some(limit);
        self
    }

    /// Sets the random seed for occupancy simulation.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.occupancy.random_seed = Some(seed);
        self
    }

    /// Checks every section for out-of-range values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.hotel.validate()?;
        self.allocator.validate()?;
        self.occupancy.validate()
    }
}

/// Physical layout of the hotel.
///
/// Every floor below the top holds `rooms_per_floor` rooms; the top floor
/// holds `top_floor_rooms`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HotelLayoutConfig {
    /// Number of floors, counted from 1.
    #[serde(default = "default_floors")]
    pub floors: u32,

    /// Rooms on each floor below the top.
    #[serde(default = "default_rooms_per_floor")]
    pub rooms_per_floor: u32,

    /// Rooms on the top floor.
    #[serde(default = "default_top_floor_rooms")]
    pub top_floor_rooms: u32,
}

fn default_floors() -> u32 {
    10
}

fn default_rooms_per_floor() -> u32 {
    10
}

fn default_top_floor_rooms() -> u32 {
    7
}

impl Default for HotelLayoutConfig {
    fn default() -> Self {
        Self {
            floors: default_floors(),
            rooms_per_floor: default_rooms_per_floor(),
            top_floor_rooms: default_top_floor_rooms(),
        }
    }
}

impl HotelLayoutConfig {
    /// Returns the number of rooms on `floor`, or 0 outside the hotel.
    pub fn rooms_on_floor(&self, floor: u32) -> u32 {
        match floor {
            0 => 0,
            f if f < self.floors => self.rooms_per_floor,
            f if f == self.floors => self.top_floor_rooms,
            _ => 0,
        }
    }

    /// Returns the total number of rooms.
    pub fn room_count(&self) -> u32 {
        (1..=self.floors).map(|f| self.rooms_on_floor(f)).sum()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.floors == 0 || self.floors > MAX_FLOOR {
            return Err(ConfigError::Invalid(format!(
                "hotel.floors must be between 1 and {}, got {}",
                MAX_FLOOR, self.floors
            )));
        }
        for floor in 1..=self.floors {
            let max = if floor == MAX_FLOOR { 99 } else { 100 };
            if self.rooms_on_floor(floor) > max {
                return Err(ConfigError::Invalid(format!(
                    "floor {} cannot hold more than {} rooms",
                    floor, max
                )));
            }
        }
        Ok(())
    }
}

/// Allocator limits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AllocatorConfig {
    /// Largest party the allocator accepts. Requests above it yield nothing.
    #[serde(default = "default_max_party_size")]
    pub max_party_size: usize,

    /// Maximum number of combinations the exhaustive search scores
    /// (None = unlimited).
    #[serde(default)]
    pub combination_limit: Option<u64>,
}

fn default_max_party_size() -> usize {
    MAX_PARTY_SIZE
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            max_party_size: default_max_party_size(),
            combination_limit: None,
        }
    }
}

impl AllocatorConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_party_size == 0 || self.max_party_size > MAX_PARTY_SIZE {
            return Err(ConfigError::Invalid(format!(
                "allocator.max_party_size must be between 1 and {}, got {}",
                MAX_PARTY_SIZE, self.max_party_size
            )));
        }
        if self.combination_limit == Some(0) {
            return Err(ConfigError::Invalid(
                "allocator.combination_limit must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Random occupancy simulation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct OccupancyConfig {
    /// Random seed for reproducible occupancy.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Share of rooms to book, in percent.
    #[serde(default = "default_percentage")]
    pub default_percentage: u8,
}

fn default_percentage() -> u8 {
    50
}

impl Default for OccupancyConfig {
    fn default() -> Self {
        Self {
            random_seed: None,
            default_percentage: default_percentage(),
        }
    }
}

impl OccupancyConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.default_percentage > 100 {
            return Err(ConfigError::Invalid(format!(
                "occupancy.default_percentage must be at most 100, got {}",
                self.default_percentage
            )));
        }
        Ok(())
    }
}
