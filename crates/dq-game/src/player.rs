//! Player record management.

/// Name used until the player enters their own.
pub const DEFAULT_NAME: &str = "Player";

/// The player's name, money, and experience for one session.
///
/// Money and experience only ever grow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    name: String,
    money: u64,
    experience: u64,
}

impl PlayerRecord {
    /// Create a fresh record with the default name and nothing earned.
    pub fn new() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            money: 0,
            experience: 0,
        }
    }

    /// The player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Money earned so far.
    pub fn money(&self) -> u64 {
        self.money
    }

    /// Experience earned so far.
    pub fn experience(&self) -> u64 {
        self.experience
    }

    /// Set the player's name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Add money. Saturates instead of wrapping.
    pub fn award_money(&mut self, amount: u64) {
        self.money = self.money.saturating_add(amount);
    }

    /// Add experience. Saturates instead of wrapping.
    pub fn award_experience(&mut self, amount: u64) {
        self.experience = self.experience.saturating_add(amount);
    }
}

impl Default for PlayerRecord {
    fn default() -> Self {
        Self::new()
    }
}
