//! A falling-block puzzle engine: a 10x20 visible field with hidden spawn
//! rows, seven tetromino kinds, uniform-random piece supply with one piece of
//! lookahead, and an observer channel carrying rendered snapshots and
//! lock/clear/game-over notifications.
//!
//! The engine is a pure state machine. It owns no timer: an embedder drives
//! gravity by calling [`BoardEngine::step`] on whatever cadence it likes
//! ([`GravityClock`] converts elapsed wall time into due ticks) and forwards
//! player input as commands. Illegal moves are silently rejected with a
//! `false` return; the only terminal condition is a blocked spawn.
//!
//! ```
//! use tetris_engine::{BoardEngine, ScoreBoard};
//! use std::time::Duration;
//!
//! let mut engine = BoardEngine::new(42);
//! let events = engine.subscribe();
//! let mut score = ScoreBoard::new(5, Duration::from_millis(500));
//!
//! engine.hard_drop();
//! for event in events.try_iter() {
//!     score.observe(&event);
//! }
//! assert!(score.score() >= 4); // one locked piece
//! ```

pub mod core;
pub mod events;
pub mod scoring;
pub mod timer;
pub mod types;

pub use crate::core::{ActivePiece, Board, BoardEngine, PieceGen};
pub use crate::events::{BoardSnapshot, EventBus, GameEvent, VisibleGrid};
pub use crate::scoring::ScoreBoard;
pub use crate::timer::GravityClock;
pub use crate::types::{Cell, GameCommand, PieceKind, Rotation};
