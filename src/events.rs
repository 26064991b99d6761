//! The engine-to-observer notification channel.
//!
//! Every state mutation the engine considers visible produces one or more
//! [`GameEvent`]s, delivered synchronously and in order to every subscriber.
//! Subscribers get a plain `mpsc::Receiver`; the renderer drains it for board
//! snapshots, the score panel for lock and line-clear signals, the shell for
//! game over. A subscriber that dropped its receiver is pruned on the next
//! emission.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::types::{Cell, PieceKind, VISIBLE_HEIGHT, WIDTH};

/// The visible playing field, row 0 at the top. Buffer rows are not included;
/// they exist only for spawn-collision detection.
pub type VisibleGrid = [[Cell; WIDTH as usize]; VISIBLE_HEIGHT as usize];

/// Full rendered state of the field at one instant.
///
/// The active piece is already overlaid onto `cells`, so a renderer can paint
/// the grid without knowing about piece anchors or orientations. `next` feeds
/// the preview panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardSnapshot {
    pub cells: VisibleGrid,
    pub next: PieceKind,
    pub game_over: bool,
}

/// One notification from the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    /// The field changed; carries the full rendered snapshot.
    Board(BoardSnapshot),
    /// A piece settled into the grid. Score collaborators award their fixed
    /// per-piece increment on this.
    PieceLocked { kind: PieceKind },
    /// Rows were removed, all in one evaluation. `rows` holds the absolute
    /// grid indices (buffer included) in top-to-bottom order; the grid is
    /// already compacted when this arrives.
    LinesCleared { rows: Vec<u8> },
    /// The spawn position was blocked. The engine accepts nothing but
    /// `new_game` from here on.
    GameOver,
}

/// Fan-out point for engine notifications.
#[derive(Debug, Default)]
pub struct EventBus {
    subscribers: Vec<Sender<GameEvent>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer and hand back its receiving end.
    pub fn subscribe(&mut self) -> Receiver<GameEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Whether anyone is listening. Lets the engine skip building snapshots
    /// nobody will see.
    pub fn has_subscribers(&self) -> bool {
        !self.subscribers.is_empty()
    }

    /// Deliver one event to every live subscriber, dropping the dead ones.
    pub fn emit(&mut self, event: GameEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
