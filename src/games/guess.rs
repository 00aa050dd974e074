//! Number-guessing game engine
//!
//! Classic higher/lower guessing against a random target in 1..=100.
//! Invalid input is rejected with an advisory message and never counts
//! as an attempt.

use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Inclusive guessing range
pub const MIN_TARGET: u32 = 1;
pub const MAX_TARGET: u32 = 100;

const PROMPT: &str = "Guess a number between 1 and 100";
const INVALID: &str = "Please enter a valid number between 1 and 100";

/// Outcome of a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Input was not an integer in range; nothing changed
    Invalid,
    /// Valid guess below the target
    TooLow,
    /// Valid guess above the target
    TooHigh,
    /// Guess matched the target; the round is over
    Correct,
}

/// Number-guessing game state
#[derive(Debug)]
pub struct GuessGame {
    target: u32,
    attempts: u32,
    over: bool,
    message: String,
    rng: SmallRng,
}

impl GuessGame {
    /// Start a new game with a uniformly random target
    pub fn new() -> Self {
        let mut rng = SmallRng::from_entropy();
        let target = rng.gen_range(MIN_TARGET..=MAX_TARGET);
        Self {
            target,
            attempts: 0,
            over: false,
            message: PROMPT.to_string(),
            rng,
        }
    }

    /// Start a new game with a known target (deterministic play)
    pub fn with_target(target: u32) -> Self {
        let mut game = Self::new();
        game.target = target.clamp(MIN_TARGET, MAX_TARGET);
        game
    }

    /// Process one guess. Rejected input leaves the attempt counter and
    /// terminal flag untouched.
    pub fn guess(&mut self, input: &str) -> GuessOutcome {
        if self.over {
            return GuessOutcome::Invalid;
        }

        let num = match input.trim().parse::<u32>() {
            Ok(n) if (MIN_TARGET..=MAX_TARGET).contains(&n) => n,
            _ => {
                self.message = INVALID.to_string();
                return GuessOutcome::Invalid;
            }
        };

        self.attempts += 1;

        if num == self.target {
            self.message = format!("Correct! You got it in {} attempts!", self.attempts);
            self.over = true;
            GuessOutcome::Correct
        } else if num < self.target {
            self.message = "Too low! Try higher.".to_string();
            GuessOutcome::TooLow
        } else {
            self.message = "Too high! Try lower.".to_string();
            GuessOutcome::TooHigh
        }
    }

    /// Abandon the current round and redraw the target
    pub fn reset(&mut self) {
        self.target = self.rng.gen_range(MIN_TARGET..=MAX_TARGET);
        self.attempts = 0;
        self.over = false;
        self.message = PROMPT.to_string();
    }

    /// Number of accepted guesses so far
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Whether the target has been found
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Advisory message for the player
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for GuessGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_in_range() {
        for _ in 0..50 {
            let game = GuessGame::new();
            assert!((MIN_TARGET..=MAX_TARGET).contains(&game.target));
            assert_eq!(game.attempts(), 0);
            assert!(!game.is_over());
            assert_eq!(game.message(), PROMPT);
        }
    }

    #[test]
    fn test_immediate_correct_guess() {
        let mut game = GuessGame::with_target(42);
        assert_eq!(game.guess("42"), GuessOutcome::Correct);
        assert!(game.is_over());
        assert_eq!(game.attempts(), 1);
        assert_eq!(game.message(), "Correct! You got it in 1 attempts!");
    }

    #[test]
    fn test_directional_hints() {
        let mut game = GuessGame::with_target(42);
        assert_eq!(game.guess("10"), GuessOutcome::TooLow);
        assert_eq!(game.message(), "Too low! Try higher.");
        assert_eq!(game.guess("90"), GuessOutcome::TooHigh);
        assert_eq!(game.message(), "Too high! Try lower.");
        assert_eq!(game.attempts(), 2);
        assert!(!game.is_over());
    }

    #[test]
    fn test_invalid_input_does_not_count() {
        let mut game = GuessGame::with_target(42);
        for input in ["", "abc", "-3", "0", "101", "4.5", "1e3"] {
            assert_eq!(game.guess(input), GuessOutcome::Invalid, "input {:?}", input);
            assert_eq!(game.attempts(), 0);
            assert!(!game.is_over());
            assert_eq!(game.message(), INVALID);
        }
    }

    #[test]
    fn test_boundary_guesses_are_valid() {
        let mut game = GuessGame::with_target(50);
        assert_eq!(game.guess("1"), GuessOutcome::TooLow);
        assert_eq!(game.guess("100"), GuessOutcome::TooHigh);
        assert_eq!(game.attempts(), 2);
    }

    #[test]
    fn test_attempts_match_accepted_guesses() {
        let mut game = GuessGame::with_target(7);
        let accepted = ["50", "25", "12", "7"];
        for (i, input) in accepted.iter().enumerate() {
            game.guess(input);
            assert_eq!(game.attempts(), i as u32 + 1);
        }
        assert!(game.is_over());
        assert_eq!(game.message(), "Correct! You got it in 4 attempts!");
    }

    #[test]
    fn test_guess_after_game_over_is_ignored() {
        let mut game = GuessGame::with_target(42);
        game.guess("42");
        assert_eq!(game.guess("42"), GuessOutcome::Invalid);
        assert_eq!(game.attempts(), 1);
    }

    #[test]
    fn test_reset_clears_round() {
        let mut game = GuessGame::with_target(42);
        game.guess("10");
        game.guess("42");
        assert!(game.is_over());

        game.reset();
        assert_eq!(game.attempts(), 0);
        assert!(!game.is_over());
        assert_eq!(game.message(), PROMPT);
        assert!((MIN_TARGET..=MAX_TARGET).contains(&game.target));
    }
}
