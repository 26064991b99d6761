//! Shared engine types and board dimension constants.
//!
//! Pure data types with no dependencies on the rest of the crate.

/// Number of columns in the playing field.
pub const WIDTH: u8 = 10;

/// Number of rows visible to the player.
pub const VISIBLE_HEIGHT: u8 = 20;

/// Hidden rows above the visible field. Pieces enter through them and a spawn
/// that collides here ends the round before anything becomes visible.
pub const BUFFER_ROWS: u8 = 2;

/// Full grid height, buffer included.
pub const TOTAL_HEIGHT: u8 = VISIBLE_HEIGHT + BUFFER_ROWS;

/// Anchor column where new pieces enter the field.
pub const SPAWN_X: i8 = 3;

/// Anchor row where new pieces enter the field. Shape offsets with `dy == 1`
/// land on the first visible row, offsets with `dy == 0` stay in the buffer.
pub const SPAWN_Y: i8 = BUFFER_ROWS as i8 - 1;

/// The seven tetromino kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
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
    /// All kinds, in a fixed order usable as a draw table.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

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
}

/// Orientation states (North = spawn orientation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// One step clockwise.
    pub fn cw(self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// One step counter-clockwise.
    pub fn ccw(self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }
}

/// A single grid cell: empty, or settled with the kind of the piece that
/// produced it. Rendering collaborators map the kind to a color; the engine
/// only classifies.
pub type Cell = Option<PieceKind>;

/// The full command surface of the engine, as one dispatchable enum.
///
/// `Step` is the gravity tick the external timer issues; the rest mirror the
/// player key bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameCommand {
    NewGame,
    Step,
    MoveLeft,
    MoveRight,
    SoftDown,
    HardDrop,
    RotateCw,
    RotateCcw,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_cw_cycle_returns_to_start() {
        let start = Rotation::North;
        assert_eq!(start.cw().cw().cw().cw(), start);
    }

    #[test]
    fn rotation_ccw_inverts_cw() {
        for rotation in [
            Rotation::North,
            Rotation::East,
            Rotation::South,
            Rotation::West,
        ] {
            assert_eq!(rotation.cw().ccw(), rotation);
        }
    }

    #[test]
    fn all_kinds_are_distinct() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in &PieceKind::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn spawn_anchor_sits_in_buffer() {
        assert!(SPAWN_Y >= 0);
        assert!((SPAWN_Y as u8) < BUFFER_ROWS);
    }
}
