//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! from the engine, the terminal renderer, and the input layer alike.
//!
//! # Board Dimensions
//!
//! The default playfield is 10 columns by 20 rows:
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn position**: horizontally centered, `y = 0`
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Host frame interval (~60 FPS) |
//! | `BASE_DROP_MS` | 1000 | Gravity interval at level 1 |
//! | `DROP_STEP_MS` | 100 | Interval decrease per level |
//! | `MIN_DROP_MS` | 100 | Gravity interval floor |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Color, Command, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//!
//! assert_eq!(Command::from_str("togglePause"), Some(Command::TogglePause));
//! assert_eq!(Color::new(0x3498db).to_string(), "#3498db");
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use std::fmt;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Host frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// How much faster gravity gets per level
pub const DROP_STEP_MS: u32 = 100;

/// Gravity never gets faster than this
pub const MIN_DROP_MS: u32 = 100;

/// Points for clearing 1, 2, 3 or 4 rows with a single lock.
///
/// Any other count scores nothing.
pub const LINE_SCORES: [u32; 4] = [100, 300, 500, 800];

/// Score needed per level under the score-driven level policy
pub const SCORE_PER_LEVEL: u32 = 1000;

/// Lines needed per level under the lines-driven level policy (default)
pub const DEFAULT_LINES_PER_LEVEL: u32 = 10;

/// Number of entries kept in the high-score table
pub const HIGH_SCORE_SLOTS: usize = 5;

/// The seven canonical polyomino kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in canonical order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("I"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Upper-case letter, as shown in the side panel
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }

    /// The color every piece of this kind is drawn and locked with
    pub fn color(&self) -> Color {
        match self {
            PieceKind::I => Color::new(0x3498db),
            PieceKind::T => Color::new(0x9b59b6),
            PieceKind::L => Color::new(0xe67e22),
            PieceKind::J => Color::new(0x2980b9),
            PieceKind::O => Color::new(0xe74c3c),
            PieceKind::S => Color::new(0x2ecc71),
            PieceKind::Z => Color::new(0xf1c40f),
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A 24-bit RGB color token stored in grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    /// Build from `0xRRGGBB`. Bits above 24 are dropped.
    pub const fn new(rgb: u32) -> Self {
        Self(rgb & 0x00ff_ffff)
    }

    pub const fn rgb(&self) -> u32 {
        self.0
    }

    pub const fn r(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(&self) -> u8 {
        self.0 as u8
    }

    /// Parse `#rrggbb` (the leading `#` is optional).
    ///
    /// ```
    /// use blockfall_types::Color;
    ///
    /// assert_eq!(Color::from_hex("#e74c3c"), Some(Color::new(0xe74c3c)));
    /// assert_eq!(Color::from_hex("nope"), None);
    /// ```
    pub fn from_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self::new)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// A cell on the game grid
///
/// - `None`: Empty cell
/// - `Some(Color)`: Locked block of that color
pub type Cell = Option<Color>;

/// Commands an input source can send to the engine
///
/// These are opaque to the engine's callers: keyboard keys, terminal mouse
/// drags and scripted tests all end up as one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell, locking it if it cannot move
    SoftDrop,
    /// Rotate piece 90° counter-clockwise
    Rotate,
    /// Pause or resume
    TogglePause,
    /// Discard the current game and start a new one
    Restart,
}

impl Command {
    /// Parse command from a camelCase or lowercase name
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("ROTATE"), Some(Command::Rotate));
    /// assert_eq!(Command::from_str("hardDrop"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "rotate" => Some(Command::Rotate),
            "togglepause" | "pause" => Some(Command::TogglePause),
            "restart" => Some(Command::Restart),
            _ => None,
        }
    }

    /// camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::Rotate => "rotate",
            Command::TogglePause => "togglePause",
            Command::Restart => "restart",
        }
    }
}

/// Lifecycle phase of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Running,
    Paused,
    /// Terminal until a restart
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::GameOver => "game_over",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_kind_roundtrip_through_letters() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_piece_colors_are_distinct() {
        let mut colors: Vec<u32> = PieceKind::ALL.iter().map(|k| k.color().rgb()).collect();
        colors.sort_unstable();
        colors.dedup();
        assert_eq!(colors.len(), 7);
    }

    #[test]
    fn test_color_channels() {
        let c = Color::new(0x12_34_56);
        assert_eq!((c.r(), c.g(), c.b()), (0x12, 0x34, 0x56));
        assert_eq!(Color::new(0xff_12_34_56).rgb(), 0x12_34_56);
        assert_eq!(c.to_string(), "#123456");
        assert_eq!(Color::from_hex("123456"), Some(c));
        assert_eq!(Color::from_hex("#12345"), None);
    }

    #[test]
    fn test_command_names() {
        for cmd in [
            Command::MoveLeft,
            Command::MoveRight,
            Command::SoftDrop,
            Command::Rotate,
            Command::TogglePause,
            Command::Restart,
        ] {
            assert_eq!(Command::from_str(cmd.as_str()), Some(cmd));
        }
    }

    #[test]
    fn test_phase_default_is_running() {
        assert_eq!(Phase::default(), Phase::Running);
        assert_eq!(Phase::GameOver.as_str(), "game_over");
    }
}
