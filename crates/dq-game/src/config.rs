//! Configuration for a game session.

use dq_text::Language;

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// RNG seed for reproducible dice rolls. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Language chosen ahead of time. Skips the language prompt when set.
    pub language: Option<Language>,
    /// Whether narrative pauses actually sleep.
    pub pacing: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            language: None,
            pacing: true,
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preselect the display language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Enable or disable narrative pauses.
    pub fn with_pacing(mut self, pacing: bool) -> Self {
        self.pacing = pacing;
        self
    }
}
