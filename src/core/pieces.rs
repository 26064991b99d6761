//! Tetromino shape tables.
//!
//! Each kind has a fixed, precomputed offset pattern for every orientation:
//! the four cells it occupies relative to its anchor, inside a small bounding
//! box. Rotation happens in place at the anchor; there is no wall-kick
//! search, so a rotation either fits where the piece stands or is rejected.

use crate::types::{PieceKind, Rotation};

/// Offset of a single cell relative to the piece anchor.
pub type CellOffset = (i8, i8);

/// The four cell offsets a piece occupies in one orientation.
pub type ShapePattern = [CellOffset; 4];

/// Look up the offset pattern for a kind and orientation.
pub fn shape(kind: PieceKind, rotation: Rotation) -> ShapePattern {
    match kind {
        PieceKind::I => i_shape(rotation),
        PieceKind::O => o_shape(rotation),
        PieceKind::T => t_shape(rotation),
        PieceKind::S => s_shape(rotation),
        PieceKind::Z => z_shape(rotation),
        PieceKind::J => j_shape(rotation),
        PieceKind::L => l_shape(rotation),
    }
}

fn i_shape(rotation: Rotation) -> ShapePattern {
    match rotation {
        Rotation::North => [(0, 1), (1, 1), (2, 1), (3, 1)],
        Rotation::East => [(2, 0), (2, 1), (2, 2), (2, 3)],
        Rotation::South => [(0, 2), (1, 2), (2, 2), (3, 2)],
        Rotation::West => [(1, 0), (1, 1), (1, 2), (1, 3)],
    }
}

// O occupies the same four cells in every orientation, so rotating it is
// always legal and never changes the occupied set.
fn o_shape(_rotation: Rotation) -> ShapePattern {
    [(1, 0), (2, 0), (1, 1), (2, 1)]
}

fn t_shape(rotation: Rotation) -> ShapePattern {
    match rotation {
        Rotation::North => [(1, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (1, 1), (2, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (1, 2)],
        Rotation::West => [(1, 0), (0, 1), (1, 1), (1, 2)],
    }
}

fn s_shape(rotation: Rotation) -> ShapePattern {
    match rotation {
        Rotation::North => [(1, 0), (2, 0), (0, 1), (1, 1)],
        Rotation::East => [(1, 0), (1, 1), (2, 1), (2, 2)],
        Rotation::South => [(1, 1), (2, 1), (0, 2), (1, 2)],
        Rotation::West => [(0, 0), (0, 1), (1, 1), (1, 2)],
    }
}

fn z_shape(rotation: Rotation) -> ShapePattern {
    match rotation {
        Rotation::North => [(0, 0), (1, 0), (1, 1), (2, 1)],
        Rotation::East => [(2, 0), (1, 1), (2, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (1, 2), (2, 2)],
        Rotation::West => [(1, 0), (0, 1), (1, 1), (0, 2)],
    }
}

fn j_shape(rotation: Rotation) -> ShapePattern {
    match rotation {
        Rotation::North => [(0, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (2, 0), (1, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (2, 2)],
        Rotation::West => [(1, 0), (1, 1), (0, 2), (1, 2)],
    }
}

fn l_shape(rotation: Rotation) -> ShapePattern {
    match rotation {
        Rotation::North => [(2, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (1, 1), (1, 2), (2, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (0, 2)],
        Rotation::West => [(0, 0), (1, 0), (1, 1), (1, 2)],
    }
}
