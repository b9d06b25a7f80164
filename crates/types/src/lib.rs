//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no behavior beyond small conversions, making them
//! usable in any context (rules engine, terminal driver, serialized snapshots).
//!
//! # Coordinates
//!
//! The grid origin is the top-left cell. `x` grows to the right, `y` grows downwards.
//!
//! # Reference Configuration
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 10 | Grid columns |
//! | `DEFAULT_HEIGHT` | 16 | Grid rows |
//! | `DEFAULT_TICK_MS` | 500 | Minimum real time between gravity steps |
//! | `ROW_CLEAR_POINTS` | 100 | Score awarded per cleared row |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, Coord, Direction, PieceKind};
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(PieceKind::from_str("line"), Some(PieceKind::Line));
//!
//! // Shift a coordinate by a direction's unit vector
//! assert_eq!(Coord::new(5, 0).shifted(Direction::Left), Coord::new(4, 0));
//!
//! // Unknown commands are rejected at the boundary
//! assert_eq!(Command::from_str("softDrop"), Some(Command::SoftDrop));
//! assert_eq!(Command::from_str("hold"), None);
//! ```

/// Reference grid width in cells
pub const DEFAULT_WIDTH: u16 = 10;

/// Reference grid height in cells
pub const DEFAULT_HEIGHT: u16 = 16;

/// Reference gravity period in milliseconds
pub const DEFAULT_TICK_MS: u64 = 500;

/// Points awarded for each cleared row
pub const ROW_CLEAR_POINTS: u32 = 100;

/// Largest accepted grid dimension (either axis)
pub const MAX_DIMENSION: u16 = 1024;

/// A grid coordinate. `(0, 0)` is the top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by a relative offset
    pub const fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Translate by the unit vector of `direction`
    pub const fn shifted(self, direction: Direction) -> Self {
        self.offset(direction.delta())
    }
}

/// The seven tetromino piece kinds
///
/// Each kind carries a decorative color tag that only renderers care about:
/// - **L**: Orange
/// - **J**: Blue
/// - **Line**: Cyan, four in a row
/// - **Z**: Red
/// - **S**: Green (mirror of Z)
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    L,
    J,
    Line,
    Z,
    S,
    O,
    T,
}

impl PieceKind {
    /// Every kind, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::L,
        PieceKind::J,
        PieceKind::Line,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::O,
        PieceKind::T,
    ];

    /// Position of this kind in [`PieceKind::ALL`]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::L => 0,
            PieceKind::J => 1,
            PieceKind::Line => 2,
            PieceKind::Z => 3,
            PieceKind::S => 4,
            PieceKind::O => 5,
            PieceKind::T => 6,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("l"), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_str("LINE"), Some(PieceKind::Line));
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::Line));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "line" | "i" => Some(PieceKind::Line),
            "z" => Some(PieceKind::Z),
            "s" => Some(PieceKind::S),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::Line => "line",
            PieceKind::Z => "z",
            PieceKind::S => "s",
            PieceKind::O => "o",
            PieceKind::T => "t",
        }
    }

    /// Decorative color tag (irrelevant to the rules)
    pub const fn color(self) -> Rgb {
        match self {
            PieceKind::L => Rgb::new(255, 165, 0),
            PieceKind::J => Rgb::new(40, 90, 255),
            PieceKind::Line => Rgb::new(0, 220, 220),
            PieceKind::Z => Rgb::new(230, 40, 40),
            PieceKind::S => Rgb::new(40, 200, 70),
            PieceKind::O => Rgb::new(240, 220, 0),
            PieceKind::T => Rgb::new(170, 60, 220),
        }
    }
}

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Translation directions
///
/// `Up` exists for symmetry of the vocabulary; neither gravity nor player input uses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Left,
    Right,
    Down,
    Up,
}

impl Direction {
    /// All four directions
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Down,
        Direction::Up,
    ];

    /// Unit vector `(dx, dy)`
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Direction;
    ///
    /// assert_eq!(Direction::Left.delta(), (-1, 0));
    /// assert_eq!(Direction::Down.delta(), (0, 1));
    /// ```
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Up => (0, -1),
        }
    }
}

/// Player commands - the complete input vocabulary of the engine
///
/// Mapping raw key events to these is the job of the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell (may freeze it)
    SoftDrop,
    /// Advance to the next rotation state
    Rotate,
}

impl Command {
    /// Parse command from string
    ///
    /// Anything outside the vocabulary yields `None`, which callers treat as a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("ROTATE"), Some(Command::Rotate));
    /// assert_eq!(Command::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "rotate" => Some(Command::Rotate),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::Rotate => "rotate",
        }
    }
}

/// Engine-side event emitted after a gravity step or command changes the stack.
///
/// Drivers can poll this to flash cleared rows or play sounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoreLastEvent {
    /// The active piece was frozen into the grid
    pub frozen: bool,
    pub rows_cleared: u32,
    pub score_gained: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_configuration_defaults() {
        assert_eq!(DEFAULT_WIDTH, 10);
        assert_eq!(DEFAULT_HEIGHT, 16);
        assert_eq!(DEFAULT_TICK_MS, 500);
        assert_eq!(ROW_CLEAR_POINTS, 100);
    }

    #[test]
    fn piece_kind_index_matches_all() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn piece_kind_str_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn command_str_roundtrip() {
        for cmd in [
            Command::MoveLeft,
            Command::MoveRight,
            Command::SoftDrop,
            Command::Rotate,
        ] {
            assert_eq!(Command::from_str(cmd.as_str()), Some(cmd));
        }
    }

    #[test]
    fn direction_deltas_are_unit_vectors() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
        assert_eq!(Coord::new(3, 3).shifted(Direction::Up), Coord::new(3, 2));
    }
}
