//! Mini-game engines
//!
//! Self-contained state machines for the portfolio's games section.
//! Each engine is pure application state driven by discrete input events;
//! rendering and key bindings live in the games screen.

pub mod guess;
pub mod reaction;
pub mod tictactoe;

pub use guess::{GuessGame, GuessOutcome};
pub use reaction::{FireRequest, ReactionGame, ReactionPhase};
pub use tictactoe::{Mark, TicTacToe};
