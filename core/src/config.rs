use core::fmt;
use core::ops::RangeInclusive;
use core::str::FromStr;
use core::time::Duration;
use serde::{Deserialize, Serialize};

use crate::*;

/// An sRGB color, written as `#RRGGBB`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    const fn from_hex(hex: u32) -> Self {
        Self::from_rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ConfigError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidColor(s.to_string());
        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let hex = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        Ok(Self::from_hex(hex))
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> core::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// The 21 visually distinct tile colors.
pub const DEFAULT_PALETTE: [Color; 21] = [
    Color::from_hex(0xFF6B6B),
    Color::from_hex(0x4ECDC4),
    Color::from_hex(0x556270),
    Color::from_hex(0xC7F464),
    Color::from_hex(0xC44D58),
    Color::from_hex(0xFFA600),
    Color::from_hex(0xB44CFF),
    Color::from_hex(0x2E86AB),
    Color::from_hex(0x3DA35D),
    Color::from_hex(0xF72585),
    Color::from_hex(0x4361EE),
    Color::from_hex(0x4CC9F0),
    Color::from_hex(0x43AA8B),
    Color::from_hex(0xF8961E),
    Color::from_hex(0x90BE6D),
    Color::from_hex(0x577590),
    Color::from_hex(0xE63946),
    Color::from_hex(0xA8DADC),
    Color::from_hex(0x457B9D),
    Color::from_hex(0xFFAFCC),
    Color::from_hex(0x06D6A0),
];

/// Longest delay a browser timer can wait, in milliseconds.
pub const MAX_TIMER_MS: u64 = i32::MAX as u64;

/// User-facing text. `{count}`, `{min}` and `{max}` are substituted when rendered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub title: String,
    pub prompt: String,
    pub go: String,
    pub showing: String,
    pub shuffling: String,
    pub guess: String,
    pub won: String,
    pub lost: String,
    pub invalid_range: String,
    pub busy: String,
    pub failed: String,
    pub game_stats: String,
    pub moves: String,
    pub time: String,
    pub score: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            title: "Memory Shuffle".into(),
            prompt: "How many buttons to create?".into(),
            go: "Go!".into(),
            showing: "Showing {count} buttons…".into(),
            shuffling: "Shuffling…".into(),
            guess: "Click the buttons in the original order.".into(),
            won: "Excellent memory!".into(),
            lost: "Wrong order!".into(),
            invalid_range: "Please enter a number between {min} and {max}.".into(),
            busy: "Please wait—shuffling in progress…".into(),
            failed: "Unexpected error. Please try again.".into(),
            game_stats: "Game Stats".into(),
            moves: "Moves".into(),
            time: "Time".into(),
            score: "Score".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub min_tiles: TileCount,
    pub max_tiles: TileCount,
    /// The display phase lasts this long per tile in the round.
    pub display_ms_per_tile: u64,
    pub scramble_interval_ms: u64,
    pub stopwatch_cadence_ms: u32,
    pub palette: Vec<Color>,
    pub messages: Messages,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_tiles: 3,
            max_tiles: 7,
            display_ms_per_tile: 1000,
            scramble_interval_ms: 2000,
            stopwatch_cadence_ms: 250,
            palette: DEFAULT_PALETTE.to_vec(),
            messages: Messages::default(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> core::result::Result<(), ConfigError> {
        if self.min_tiles == 0 || self.min_tiles > self.max_tiles {
            return Err(ConfigError::InvalidTileRange {
                min: self.min_tiles,
                max: self.max_tiles,
            });
        }

        if usize::from(self.max_tiles) > self.palette.len() {
            return Err(ConfigError::PaletteTooSmall {
                available: self.palette.len(),
                requested: self.max_tiles,
            });
        }

        let timings = [
            ("display_ms_per_tile", self.display_ms_per_tile),
            ("scramble_interval_ms", self.scramble_interval_ms),
            ("stopwatch_cadence_ms", self.stopwatch_cadence_ms.into()),
        ];
        for (field, ms) in timings {
            if !(1..=MAX_TIMER_MS).contains(&ms) {
                return Err(ConfigError::InvalidTiming {
                    field,
                    ms,
                    max: MAX_TIMER_MS,
                });
            }
        }

        for (i, color) in self.palette.iter().enumerate() {
            if self.palette[..i].contains(color) {
                return Err(ConfigError::DuplicateColor(color.to_string()));
            }
        }

        Ok(())
    }

    pub const fn tile_range(&self) -> RangeInclusive<TileCount> {
        self.min_tiles..=self.max_tiles
    }

    /// Validates a requested tile count against the configured bounds.
    pub fn check_tile_count(&self, count: i64) -> Result<TileCount> {
        TileCount::try_from(count)
            .ok()
            .filter(|count| self.tile_range().contains(count))
            .ok_or(GameError::TileCountOutOfRange {
                count,
                min: self.min_tiles,
                max: self.max_tiles,
            })
    }

    pub fn display_duration(&self, count: TileCount) -> Duration {
        Duration::from_millis(self.display_ms_per_tile.saturating_mul(count.into()))
    }

    pub const fn scramble_interval(&self) -> Duration {
        Duration::from_millis(self.scramble_interval_ms)
    }

    pub const fn stopwatch_cadence(&self) -> Duration {
        Duration::from_millis(self.stopwatch_cadence_ms as u64)
    }
}

/// Parses tile-count text the way a number input reports it: surrounding
/// whitespace is ignored and integral decimals such as `4.0` are accepted.
pub fn parse_tile_count(input: &str) -> Result<i64> {
    let input = input.trim();
    if let Ok(count) = input.parse::<i64>() {
        return Ok(count);
    }

    match input.parse::<f64>() {
        // `as` saturates, huge magnitudes still fail the bounds check later
        Ok(value) if value.is_finite() && value.fract() == 0.0 => Ok(value as i64),
        _ => Err(GameError::NotANumber),
    }
}
