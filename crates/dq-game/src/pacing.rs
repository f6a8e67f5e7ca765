//! Narrative pauses.
//!
//! The game waits between some lines for effect. The wait has no other
//! meaning, so tests and `--fast` runs swap in [`NoPacer`].

use std::thread;
use std::time::Duration;

/// Pause after each language prompt attempt.
pub const AFTER_LANGUAGE: Duration = Duration::from_secs(2);
/// Pause after greeting the player.
pub const AFTER_GREETING: Duration = Duration::from_millis(1500);
/// Pause after the story intro.
pub const AFTER_STORY: Duration = Duration::from_millis(500);
/// Pause before revealing a dice roll.
pub const BEFORE_DICE: Duration = Duration::from_secs(2);

/// Something that can wait for a while.
pub trait Pacer {
    /// Wait for `duration`.
    fn pause(&mut self, duration: Duration);
}

/// Blocks the thread for the full duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pause(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacer;

impl Pacer for NoPacer {
    fn pause(&mut self, _duration: Duration) {}
}

/// Pacer for a config flag.
pub fn pacer_for(pacing: bool) -> Box<dyn Pacer> {
    if pacing {
        Box::new(SleepPacer)
    } else {
        Box::new(NoPacer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn no_pacer_returns_immediately() {
        let start = Instant::now();
        NoPacer.pause(Duration::from_secs(60));
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn sleep_pacer_waits() {
        let start = Instant::now();
        SleepPacer.pause(Duration::from_millis(20));
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
