//! Reaction-timer game engine
//!
//! Five-phase state machine driven by a single tap input. Arming a round
//! hands the caller a [`FireRequest`]; the caller schedules the delayed
//! armed-to-live transition (a `tokio::time::sleep` task in the app) and
//! delivers it back via [`ReactionGame::fire`]. A fire for a stale round,
//! or one arriving after a false start, is ignored.

use rand::{rngs::SmallRng, Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Delay bounds for the armed phase, in milliseconds: [1000, 5000)
const MIN_DELAY_MS: u64 = 1000;
const MAX_DELAY_MS: u64 = 5000;

/// Phase of the reaction round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionPhase {
    /// Ready to start a round
    Idle,
    /// Waiting for the randomized go signal
    Armed,
    /// Go signal shown; the clock is running
    Live,
    /// Round finished with a measured reaction
    Scored,
    /// Tapped before the go signal
    FalseStart,
}

/// One-shot timer request produced when a round arms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FireRequest {
    /// Round the request belongs to; quoted back on delivery
    pub round: u64,
    /// How long to wait before delivering the fire
    pub delay: Duration,
}

/// Reaction-timer game state
#[derive(Debug)]
pub struct ReactionGame {
    phase: ReactionPhase,
    round: u64,
    armed_at: Option<Instant>,
    live_at: Option<Instant>,
    last: Option<Duration>,
    best: Option<Duration>,
    rng: SmallRng,
}

impl ReactionGame {
    /// Create an idle game with no recorded times
    pub fn new() -> Self {
        Self {
            phase: ReactionPhase::Idle,
            round: 0,
            armed_at: None,
            live_at: None,
            last: None,
            best: None,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Process a tap at the current instant
    pub fn tap(&mut self) -> Option<FireRequest> {
        self.tap_at(Instant::now())
    }

    /// Process a tap at `now`. Returns a [`FireRequest`] when the tap
    /// arms a new round; the caller must schedule it.
    pub fn tap_at(&mut self, now: Instant) -> Option<FireRequest> {
        match self.phase {
            ReactionPhase::Idle => {
                self.round += 1;
                self.phase = ReactionPhase::Armed;
                self.armed_at = Some(now);
                let delay = Duration::from_millis(self.rng.gen_range(MIN_DELAY_MS..MAX_DELAY_MS));
                Some(FireRequest {
                    round: self.round,
                    delay,
                })
            }
            ReactionPhase::Armed => {
                // Tap beat the go signal; the pending fire is now stale
                self.phase = ReactionPhase::FalseStart;
                self.armed_at = None;
                None
            }
            ReactionPhase::Live => {
                if let Some(live_at) = self.live_at {
                    let reaction = now.saturating_duration_since(live_at);
                    self.last = Some(reaction);
                    self.best = Some(match self.best {
                        Some(best) if best <= reaction => best,
                        _ => reaction,
                    });
                }
                self.phase = ReactionPhase::Scored;
                self.live_at = None;
                None
            }
            ReactionPhase::Scored | ReactionPhase::FalseStart => {
                self.phase = ReactionPhase::Idle;
                None
            }
        }
    }

    /// Deliver the scheduled go signal at the current instant
    pub fn fire(&mut self, round: u64) -> bool {
        self.fire_at(round, Instant::now())
    }

    /// Deliver the scheduled go signal at `now`. Accepted only while the
    /// same round is still armed; anything else is a stale fire.
    pub fn fire_at(&mut self, round: u64, now: Instant) -> bool {
        if self.phase != ReactionPhase::Armed || round != self.round {
            return false;
        }
        self.phase = ReactionPhase::Live;
        self.armed_at = None;
        self.live_at = Some(now);
        true
    }

    /// Current phase
    pub fn phase(&self) -> ReactionPhase {
        self.phase
    }

    /// Reaction time of the most recent scored round
    pub fn last_reaction(&self) -> Option<Duration> {
        self.last
    }

    /// Best reaction time seen over the game's lifetime
    pub fn best_reaction(&self) -> Option<Duration> {
        self.best
    }
}

impl Default for ReactionGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arming_produces_bounded_delay() {
        for _ in 0..50 {
            let mut game = ReactionGame::new();
            let request = game.tap_at(Instant::now()).expect("idle tap arms");
            assert_eq!(game.phase(), ReactionPhase::Armed);
            assert!(request.delay >= Duration::from_millis(MIN_DELAY_MS));
            assert!(request.delay < Duration::from_millis(MAX_DELAY_MS));
        }
    }

    #[test]
    fn test_rounds_get_fresh_ids() {
        let mut game = ReactionGame::new();
        let now = Instant::now();

        let first = game.tap_at(now).unwrap();
        game.tap_at(now); // false start
        game.tap_at(now); // back to idle
        let second = game.tap_at(now).unwrap();

        assert!(second.round > first.round);
    }

    #[test]
    fn test_scored_round_records_reaction() {
        let mut game = ReactionGame::new();
        let start = Instant::now();

        let request = game.tap_at(start).unwrap();
        assert!(game.fire_at(request.round, start + request.delay));
        assert_eq!(game.phase(), ReactionPhase::Live);

        game.tap_at(start + request.delay + Duration::from_millis(300));
        assert_eq!(game.phase(), ReactionPhase::Scored);
        assert_eq!(game.last_reaction(), Some(Duration::from_millis(300)));
        assert_eq!(game.best_reaction(), Some(Duration::from_millis(300)));
    }

    #[test]
    fn test_best_only_improves() {
        let mut game = ReactionGame::new();
        let mut now = Instant::now();

        for reaction_ms in [300, 150, 200] {
            let request = game.tap_at(now).unwrap();
            now += request.delay;
            assert!(game.fire_at(request.round, now));
            now += Duration::from_millis(reaction_ms);
            game.tap_at(now);
            game.tap_at(now); // acknowledge, back to idle
        }

        assert_eq!(game.last_reaction(), Some(Duration::from_millis(200)));
        assert_eq!(game.best_reaction(), Some(Duration::from_millis(150)));
    }

    #[test]
    fn test_false_start_cancels_pending_fire() {
        let mut game = ReactionGame::new();
        let now = Instant::now();

        let request = game.tap_at(now).unwrap();
        game.tap_at(now + Duration::from_millis(100));
        assert_eq!(game.phase(), ReactionPhase::FalseStart);

        // The scheduled fire arrives late and must be ignored
        assert!(!game.fire_at(request.round, now + request.delay));
        assert_eq!(game.phase(), ReactionPhase::FalseStart);

        // Acknowledge; best is untouched by the aborted round
        game.tap_at(now + Duration::from_millis(200));
        assert_eq!(game.phase(), ReactionPhase::Idle);
        assert_eq!(game.best_reaction(), None);
    }

    #[test]
    fn test_stale_fire_from_previous_round_is_ignored() {
        let mut game = ReactionGame::new();
        let now = Instant::now();

        let first = game.tap_at(now).unwrap();
        game.tap_at(now); // false start
        game.tap_at(now); // idle
        let second = game.tap_at(now).unwrap();

        // A fire for the abandoned round arrives while round two is armed
        assert!(!game.fire_at(first.round, now + first.delay));
        assert_eq!(game.phase(), ReactionPhase::Armed);

        // The current round's fire still lands exactly once
        assert!(game.fire_at(second.round, now + second.delay));
        assert!(!game.fire_at(second.round, now + second.delay));
    }

    #[test]
    fn test_false_start_preserves_best() {
        let mut game = ReactionGame::new();
        let mut now = Instant::now();

        // Score one round at 250 ms
        let request = game.tap_at(now).unwrap();
        now += request.delay;
        game.fire_at(request.round, now);
        now += Duration::from_millis(250);
        game.tap_at(now);
        game.tap_at(now);

        // Then jump the gun
        game.tap_at(now).unwrap();
        game.tap_at(now);
        assert_eq!(game.phase(), ReactionPhase::FalseStart);
        game.tap_at(now);
        assert_eq!(game.phase(), ReactionPhase::Idle);
        assert_eq!(game.best_reaction(), Some(Duration::from_millis(250)));
    }
}
