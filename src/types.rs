//! Core types shared across the application
//! This module contains pure data types with no external dependencies
//! (apart from the derive for the one fatal configuration error).

use thiserror::Error;

/// Default board dimensions in block units
pub const DEFAULT_BOARD_WIDTH: u8 = 12;
pub const DEFAULT_BOARD_HEIGHT: u8 = 20;

/// Largest supported board dimension. Grid coordinates are signed
/// 8-bit values, so anything wider or taller would wrap negative.
pub const MAX_BOARD_DIM: u8 = i8::MAX as u8;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u64 = 16;
pub const BASE_DROP_MS: u64 = 1000;
pub const DROP_FLOOR_MS: u64 = 100;

/// Score at which the gravity interval has decayed by a factor of `e`
pub const GRAVITY_DECAY_SCORE: f64 = 10_000.0;

/// Per-command cooldowns (milliseconds). A held key only re-applies
/// its command once the matching cooldown has elapsed.
pub const MOVE_COOLDOWN_MS: u64 = 75;
pub const ROTATE_COOLDOWN_MS: u64 = 150;
pub const HARD_DROP_COOLDOWN_MS: u64 = 250;

/// Row-clear scoring: index is the number of rows cleared in one lock.
/// Multi-line clears pay a growing per-line bonus.
pub const LINE_SCORES: [u32; 5] = [0, 100, 250, 450, 800];

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
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
    /// All seven kinds, in a fixed order (used by the uniform picker).
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Canonical color tag for this kind
    pub fn color(&self) -> ColorTag {
        match self {
            PieceKind::I => ColorTag::Aqua,
            PieceKind::O => ColorTag::Yellow,
            PieceKind::T => ColorTag::Purple,
            PieceKind::S => ColorTag::Green,
            PieceKind::Z => ColorTag::Red,
            PieceKind::J => ColorTag::Blue,
            PieceKind::L => ColorTag::Orange,
        }
    }
}

/// Color tag carried by settled cells and falling pieces.
/// The presenter maps these to terminal colors; the engine never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTag {
    Red,
    Purple,
    Green,
    Aqua,
    Blue,
    Orange,
    Yellow,
}

/// Rotation states (North = spawn orientation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise
    pub fn cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise
    pub fn ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }
}

/// Rotation direction requested by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spin {
    Cw,
    Ccw,
}

/// Game actions delivered by the input adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    RotateCw,
    RotateCcw,
    Hold,
    Pause,
    Restart,
}

/// Cell on the board (None = empty, Some = settled block's kind)
pub type Cell = Option<PieceKind>;

/// Board dimensions in block units, fixed for a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
}

impl GameConfig {
    pub fn new(width: u8, height: u8) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidDimensions { width, height });
        }
        if width > MAX_BOARD_DIM || height > MAX_BOARD_DIM {
            return Err(ConfigError::DimensionsTooLarge { width, height });
        }
        Ok(Self { width, height })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
        }
    }
}

/// Fatal, constructor-time errors. Everything else in the engine is
/// steady-state control flow and never surfaces as an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u8, height: u8 },
    #[error("board dimensions must be at most 127, got {width}x{height}")]
    DimensionsTooLarge { width: u8, height: u8 },
}
