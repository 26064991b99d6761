//! Score keeping over the engine's event stream.
//!
//! The scoreboard is a pure consumer: feed it every [`GameEvent`] and it
//! tracks points, cleared lines, and level. The engine never reads any of it
//! back; the only feedback path is [`ScoreBoard::gravity_delay`], which an
//! embedder forwards to its gravity timer to speed the game up per level.

use std::time::Duration;

use crate::events::GameEvent;

/// Points for settling a piece, regardless of kind or height.
const PIECE_LOCK_POINTS: u32 = 4;

/// Points for clearing n rows at once, indexed by n and multiplied by the
/// current level. Quadruple clears pay out disproportionately.
const LINE_MULTIPLIERS: [u32; 5] = [0, 40, 100, 300, 1200];

/// Gravity speed-up per level.
const LEVEL_SPEEDUP: Duration = Duration::from_millis(75);

/// Slowest the game is allowed to get fast: the delay never drops below this.
const MIN_GRAVITY_DELAY: Duration = Duration::from_millis(100);

/// Score, line, and level tracker driven by engine events.
#[derive(Debug, Clone)]
pub struct ScoreBoard {
    score: u32,
    lines: u32,
    level: u32,
    /// Lines cleared since the last level-up.
    lines_into_level: u32,
    /// Lines required to advance one level.
    line_requirement: u32,
    base_delay: Duration,
}

impl ScoreBoard {
    /// New scoreboard at level 1 with zero score. `line_requirement` rows
    /// advance the level by one; `base_delay` anchors [`gravity_delay`].
    ///
    /// [`gravity_delay`]: ScoreBoard::gravity_delay
    pub fn new(line_requirement: u32, base_delay: Duration) -> Self {
        Self {
            score: 0,
            lines: 0,
            level: 1,
            lines_into_level: 0,
            line_requirement: line_requirement.max(1),
            base_delay,
        }
    }

    /// Update from one engine event. Non-scoring events are ignored, so the
    /// whole stream can be forwarded unfiltered.
    pub fn observe(&mut self, event: &GameEvent) {
        match event {
            GameEvent::PieceLocked { .. } => self.score += PIECE_LOCK_POINTS,
            GameEvent::LinesCleared { rows } => self.award_lines(rows.len() as u32),
            GameEvent::Board(_) | GameEvent::GameOver => {}
        }
    }

    fn award_lines(&mut self, count: u32) {
        if count == 0 {
            return;
        }
        let idx = (count as usize).min(LINE_MULTIPLIERS.len() - 1);
        self.score += LINE_MULTIPLIERS[idx] * self.level;
        self.lines += count;

        // Carry the remainder across the boundary so a multi-row clear that
        // overshoots the requirement still counts toward the next level.
        self.lines_into_level += count;
        while self.lines_into_level >= self.line_requirement {
            self.lines_into_level -= self.line_requirement;
            self.level += 1;
        }
    }

    /// Gravity delay for the current level: the base delay shortened by a
    /// fixed amount per level, never below the floor.
    pub fn gravity_delay(&self) -> Duration {
        self.base_delay
            .saturating_sub(LEVEL_SPEEDUP * self.level)
            .max(MIN_GRAVITY_DELAY)
    }

    /// Back to level 1, zero score. Pairs with the engine's `new_game`.
    pub fn reset(&mut self) {
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.lines_into_level = 0;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Rows still needed before the next level-up.
    pub fn lines_to_next_level(&self) -> u32 {
        self.line_requirement - self.lines_into_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn locked() -> GameEvent {
        GameEvent::PieceLocked {
            kind: PieceKind::T,
        }
    }

    fn cleared(rows: &[u8]) -> GameEvent {
        GameEvent::LinesCleared {
            rows: rows.to_vec(),
        }
    }

    #[test]
    fn each_locked_piece_pays_four_points() {
        let mut board = ScoreBoard::new(5, Duration::from_millis(500));
        for _ in 0..3 {
            board.observe(&locked());
        }
        assert_eq!(board.score(), 12);
    }

    #[test]
    fn line_payouts_scale_with_count_and_level() {
        let mut board = ScoreBoard::new(100, Duration::from_millis(500));
        board.observe(&cleared(&[21]));
        assert_eq!(board.score(), 40);
        board.observe(&cleared(&[20, 21]));
        assert_eq!(board.score(), 40 + 100);
        board.observe(&cleared(&[19, 20, 21]));
        assert_eq!(board.score(), 40 + 100 + 300);
        board.observe(&cleared(&[18, 19, 20, 21]));
        assert_eq!(board.score(), 40 + 100 + 300 + 1200);
        assert_eq!(board.lines(), 10);
    }

    #[test]
    fn level_up_carries_the_remainder() {
        let mut board = ScoreBoard::new(3, Duration::from_millis(500));
        board.observe(&cleared(&[18, 19, 20, 21]));

        // Four rows against a requirement of three: level 2 with one row
        // already banked toward level 3.
        assert_eq!(board.level(), 2);
        assert_eq!(board.lines_to_next_level(), 2);
    }

    #[test]
    fn multi_row_clear_can_jump_several_levels() {
        let mut board = ScoreBoard::new(1, Duration::from_millis(500));
        board.observe(&cleared(&[18, 19, 20, 21]));
        assert_eq!(board.level(), 5);
    }

    #[test]
    fn payout_uses_the_level_before_the_clear() {
        let mut board = ScoreBoard::new(1, Duration::from_millis(500));
        board.observe(&cleared(&[21])); // 40 * 1, then level 2
        board.observe(&cleared(&[21])); // 40 * 2, then level 3
        assert_eq!(board.score(), 40 + 80);
    }

    #[test]
    fn gravity_delay_shrinks_with_level_down_to_the_floor() {
        let mut board = ScoreBoard::new(1, Duration::from_millis(500));
        assert_eq!(board.gravity_delay(), Duration::from_millis(425));

        board.observe(&cleared(&[21]));
        assert_eq!(board.level(), 2);
        assert_eq!(board.gravity_delay(), Duration::from_millis(350));

        for _ in 0..50 {
            board.observe(&cleared(&[21]));
        }
        assert_eq!(board.gravity_delay(), Duration::from_millis(100));
    }

    #[test]
    fn board_and_game_over_events_do_not_score() {
        let mut board = ScoreBoard::new(5, Duration::from_millis(500));
        board.observe(&GameEvent::GameOver);
        assert_eq!(board.score(), 0);
        assert_eq!(board.level(), 1);
    }

    #[test]
    fn reset_returns_to_level_one() {
        let mut board = ScoreBoard::new(2, Duration::from_millis(500));
        board.observe(&locked());
        board.observe(&cleared(&[20, 21]));
        board.reset();

        assert_eq!(board.score(), 0);
        assert_eq!(board.lines(), 0);
        assert_eq!(board.level(), 1);
        assert_eq!(board.lines_to_next_level(), 2);
    }

    #[test]
    fn zero_line_requirement_is_clamped() {
        let board = ScoreBoard::new(0, Duration::from_millis(500));
        assert_eq!(board.lines_to_next_level(), 1);
    }
}
