//! The board engine: owns the grid, the active piece, and the piece supply,
//! and drives the spawn -> fall -> lock -> clear -> spawn cycle.
//!
//! The engine is purely reactive. It owns no timer and no thread; an external
//! scheduler issues `step()` gravity ticks and an input collaborator issues
//! moves and rotations, all on the caller's thread. Illegal moves are normal
//! gameplay outcomes reported as `false`, never errors, and emit nothing.
//! The one fatal-to-the-round condition is a blocked spawn, which surfaces as
//! [`GameEvent::GameOver`] and freezes the engine until `new_game()`.
//!
//! Pausing is the embedder's concern: stop issuing ticks and input while
//! paused instead of asking the engine to model it.

use crate::core::pieces::shape;
use crate::core::{Board, PieceGen};
use crate::events::{BoardSnapshot, EventBus, GameEvent};
use crate::types::{
    GameCommand, PieceKind, Rotation, BUFFER_ROWS, SPAWN_X, SPAWN_Y, VISIBLE_HEIGHT, WIDTH,
};

use std::sync::mpsc::Receiver;

/// The falling piece: kind, orientation, and anchor position in grid
/// coordinates. Mutations are tentative; the engine only commits a candidate
/// that passes the grid's legality predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// A fresh piece at the spawn anchor, in spawn orientation.
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// The four absolute cells occupied at the current anchor/orientation.
    pub fn cells(&self) -> [(i8, i8); 4] {
        shape(self.kind, self.rotation).map(|(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// The game-state engine behind the command surface.
#[derive(Debug)]
pub struct BoardEngine {
    board: Board,
    active: Option<ActivePiece>,
    pieces: PieceGen,
    game_over: bool,
    bus: EventBus,
}

impl BoardEngine {
    /// Seeded engine with the first piece already spawned. The seed fixes the
    /// whole piece sequence, across `new_game()` boundaries too.
    pub fn new(seed: u64) -> Self {
        let mut engine = Self {
            board: Board::new(),
            active: None,
            pieces: PieceGen::new(seed),
            game_over: false,
            bus: EventBus::new(),
        };
        engine.spawn();
        engine
    }

    /// Engine seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Register an observer for the notification stream.
    pub fn subscribe(&mut self) -> Receiver<GameEvent> {
        self.bus.subscribe()
    }

    /// Visible field width for layout collaborators.
    pub fn width(&self) -> u8 {
        WIDTH
    }

    /// Visible field height for layout collaborators.
    pub fn height(&self) -> u8 {
        VISIBLE_HEIGHT
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The falling piece, if one is in play.
    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    /// The buffered upcoming kind, for preview panels.
    pub fn next_kind(&self) -> PieceKind {
        self.pieces.peek()
    }

    /// The settled grid.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Reset to an empty grid and a fresh piece. The piece sequence continues
    /// from the generator's ongoing stream; construction is the only point
    /// where a seed is chosen.
    pub fn new_game(&mut self) {
        self.board.clear();
        self.active = None;
        self.game_over = false;
        self.spawn();
    }

    /// One gravity tick: descend a cell, or lock when the piece has landed.
    /// Returns whether the piece moved.
    pub fn step(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        if self.shift(0, 1) {
            true
        } else {
            self.lock_active();
            false
        }
    }

    /// Player-initiated single-cell drop. Same semantics as a gravity tick.
    pub fn soft_down(&mut self) -> bool {
        self.step()
    }

    pub fn move_left(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.shift(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.shift(1, 0)
    }

    pub fn rotate_cw(&mut self) -> bool {
        self.rotate(true)
    }

    pub fn rotate_ccw(&mut self) -> bool {
        self.rotate(false)
    }

    /// Drop to the lowest legal row, then lock immediately. A composite of
    /// repeated downward moves and a lock, emitting only the lock-cycle
    /// events rather than a snapshot per row fallen.
    pub fn hard_drop(&mut self) {
        if self.game_over {
            return;
        }
        let Some(mut active) = self.active else {
            return;
        };

        loop {
            let dropped = ActivePiece {
                y: active.y + 1,
                ..active
            };
            if self.board.is_legal(&dropped.cells()) {
                active = dropped;
            } else {
                break;
            }
        }

        self.active = Some(active);
        self.lock_active();
    }

    /// Dispatch one command. Returns whether the engine state changed.
    pub fn apply(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::NewGame => {
                self.new_game();
                true
            }
            GameCommand::Step => self.step(),
            GameCommand::MoveLeft => self.move_left(),
            GameCommand::MoveRight => self.move_right(),
            GameCommand::SoftDown => self.soft_down(),
            GameCommand::HardDrop => {
                if self.game_over || self.active.is_none() {
                    return false;
                }
                self.hard_drop();
                true
            }
            GameCommand::RotateCw => self.rotate_cw(),
            GameCommand::RotateCcw => self.rotate_ccw(),
        }
    }

    /// Render the current state: visible rows with the active piece overlaid,
    /// plus the preview kind.
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut cells = [[None; WIDTH as usize]; VISIBLE_HEIGHT as usize];
        self.board.copy_visible_into(&mut cells);

        if let Some(active) = self.active {
            for (x, y) in active.cells() {
                let vy = y - BUFFER_ROWS as i8;
                // Buffer cells stay hidden.
                if vy >= 0 {
                    cells[vy as usize][x as usize] = Some(active.kind);
                }
            }
        }

        BoardSnapshot {
            cells,
            next: self.pieces.peek(),
            game_over: self.game_over,
        }
    }

    /// Tentative translation: committed and broadcast only when legal.
    fn shift(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let moved = ActivePiece {
            x: active.x + dx,
            y: active.y + dy,
            ..active
        };
        if self.board.is_legal(&moved.cells()) {
            self.active = Some(moved);
            self.emit_board();
            true
        } else {
            false
        }
    }

    /// Orientation step at the same anchor. No wall-kick search: the turned
    /// piece either fits where it stands or the rotation is rejected.
    fn rotate(&mut self, clockwise: bool) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        let rotation = if clockwise {
            active.rotation.cw()
        } else {
            active.rotation.ccw()
        };
        let turned = ActivePiece { rotation, ..active };
        if self.board.is_legal(&turned.cells()) {
            self.active = Some(turned);
            self.emit_board();
            true
        } else {
            false
        }
    }

    /// Lock -> clear -> respawn, emitting the cycle's notifications in order.
    fn lock_active(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.lock(&active.cells(), active.kind);
        self.bus.emit(GameEvent::PieceLocked { kind: active.kind });

        let cleared = self.board.clear_full_rows();
        if !cleared.is_empty() {
            self.bus.emit(GameEvent::LinesCleared {
                rows: cleared.to_vec(),
            });
        }

        self.spawn();
    }

    /// Bring the buffered next kind into play and draw a replacement. A spawn
    /// whose cells are already blocked ends the round without touching the
    /// grid.
    fn spawn(&mut self) {
        let piece = ActivePiece::spawn(self.pieces.draw());
        if !self.board.is_legal(&piece.cells()) {
            self.game_over = true;
            self.active = None;
            self.bus.emit(GameEvent::GameOver);
            return;
        }
        self.active = Some(piece);
        self.emit_board();
    }

    fn emit_board(&mut self) {
        if self.bus.has_subscribers() {
            let snapshot = self.snapshot();
            self.bus.emit(GameEvent::Board(snapshot));
        }
    }
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::from_entropy()
    }
}
