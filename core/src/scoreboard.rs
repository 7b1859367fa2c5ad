use crate::*;

/// Move count and running accuracy against a known total.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
    total: TileCount,
    moves: TileCount,
    correct: TileCount,
}

impl Scoreboard {
    pub const fn new() -> Self {
        Self {
            total: 0,
            moves: 0,
            correct: 0,
        }
    }

    /// Starts a fresh tally towards `total`; zero leaves the score unset.
    pub fn set_total(&mut self, total: TileCount) {
        *self = Self {
            total,
            moves: 0,
            correct: 0,
        };
    }

    pub fn record_guess(&mut self, is_correct: bool) {
        self.moves = self.moves.saturating_add(1);
        if is_correct {
            self.correct = self.correct.saturating_add(1);
        }
    }

    pub const fn total(&self) -> TileCount {
        self.total
    }

    pub const fn moves(&self) -> TileCount {
        self.moves
    }

    pub const fn correct(&self) -> TileCount {
        self.correct
    }

    /// `round(100 * correct / total)` with halves rounded up, `None` until a total is set.
    pub const fn score_percent(&self) -> Option<u8> {
        if self.total == 0 {
            return None;
        }
        let correct = self.correct as u32;
        let total = self.total as u32;
        Some(((200 * correct + total) / (2 * total)) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_is_unset_without_total() {
        let mut scoreboard = Scoreboard::new();
        assert_eq!(scoreboard.score_percent(), None);

        scoreboard.record_guess(true);
        assert_eq!(scoreboard.moves(), 1);
        assert_eq!(scoreboard.score_percent(), None);
    }

    #[test]
    fn score_rounds_to_nearest_percent() {
        let mut scoreboard = Scoreboard::new();
        scoreboard.set_total(3);
        assert_eq!(scoreboard.score_percent(), Some(0));

        scoreboard.record_guess(true);
        assert_eq!(scoreboard.score_percent(), Some(33));
        scoreboard.record_guess(true);
        assert_eq!(scoreboard.score_percent(), Some(67));
        scoreboard.record_guess(false);
        assert_eq!(scoreboard.moves(), 3);
        assert_eq!(scoreboard.correct(), 2);
        assert_eq!(scoreboard.score_percent(), Some(67));

        scoreboard.set_total(8);
        scoreboard.record_guess(true);
        // 12.5 rounds up
        assert_eq!(scoreboard.score_percent(), Some(13));
    }

    #[test]
    fn set_total_resets_tally() {
        let mut scoreboard = Scoreboard::new();
        scoreboard.set_total(4);
        scoreboard.record_guess(true);
        scoreboard.record_guess(false);

        scoreboard.set_total(5);

        assert_eq!(scoreboard.moves(), 0);
        assert_eq!(scoreboard.correct(), 0);
        assert_eq!(scoreboard.total(), 5);
    }
}
