//! Score and lives

use serde::{Deserialize, Serialize};

/// Terminal banner text
pub const WIN_BANNER: &str = "YOU WIN!";
pub const DEFEAT_BANNER: &str = "GAME OVER";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub score: u64,
    pub lives: u8,
    won: bool,
    defeated: bool,
}

impl Scoreboard {
    pub fn new(starting_lives: u8) -> Self {
        Self {
            score: 0,
            lives: starting_lives,
            won: false,
            defeated: false,
        }
    }

    pub fn add_score(&mut self, points: u32) {
        self.score += u64::from(points);
    }

    /// Lives floor at zero
    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    #[inline]
    pub fn is_defeated(&self) -> bool {
        self.lives == 0
    }

    pub fn announce_win(&mut self) {
        self.won = true;
    }

    pub fn announce_defeat(&mut self) {
        self.defeated = true;
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    pub fn has_announced_defeat(&self) -> bool {
        self.defeated
    }

    /// HUD text, e.g. `Score: 24 | Lives: 2`
    pub fn status_line(&self) -> String {
        format!("Score: {} | Lives: {}", self.score, self.lives)
    }

    /// Centred end-of-game banner, once one has been announced
    pub fn banner(&self) -> Option<&'static str> {
        if self.won {
            Some(WIN_BANNER)
        } else if self.defeated {
            Some(DEFEAT_BANNER)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_status_line() {
        let mut board = Scoreboard::new(3);
        assert_eq!(board.status_line(), "Score: 0 | Lives: 3");
        board.add_score(10);
        board.add_score(6);
        board.lose_life();
        assert_eq!(board.status_line(), "Score: 16 | Lives: 2");
    }

    #[test]
    fn test_defeated_exactly_on_third_life_lost() {
        let mut board = Scoreboard::new(3);
        board.lose_life();
        assert!(!board.is_defeated());
        board.lose_life();
        assert!(!board.is_defeated());
        board.lose_life();
        assert!(board.is_defeated());

        // Floor
        board.lose_life();
        assert_eq!(board.lives, 0);
    }

    #[test]
    fn test_announcements_stick() {
        let mut board = Scoreboard::new(3);
        assert_eq!(board.banner(), None);

        board.announce_defeat();
        board.announce_defeat();
        assert!(board.has_announced_defeat());
        assert_eq!(board.banner(), Some("GAME OVER"));

        let mut board = Scoreboard::new(3);
        board.announce_win();
        assert!(board.has_won());
        assert_eq!(board.banner(), Some("YOU WIN!"));
    }

    proptest! {
        #[test]
        fn final_score_is_order_independent(
            order in Just(vec![10u32, 8, 6, 4, 2]).prop_shuffle()
        ) {
            let mut board = Scoreboard::new(3);
            for points in order {
                board.add_score(points);
            }
            prop_assert_eq!(board.score, 30);
        }
    }
}
