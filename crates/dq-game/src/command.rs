//! Command parsing for player input.

/// A command the main loop understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Show the command help.
    Help,
    /// Play the dice mini-game.
    Dice,
    /// Show the player's money.
    Money,
    /// Show the (always empty) inventory.
    Inventory,
    /// End the session.
    Quit,
}

/// Literal input for each command. Matching is exact and case-sensitive.
const COMMANDS: &[(&str, Command)] = &[
    ("Help", Command::Help),
    ("Dice", Command::Dice),
    ("Money", Command::Money),
    ("Inventory", Command::Inventory),
    ("Quit", Command::Quit),
];

impl Command {
    /// Look up the command for a line of input.
    ///
    /// The line must equal a command literal exactly, without its terminator.
    pub fn parse(input: &str) -> Option<Self> {
        COMMANDS
            .iter()
            .find(|(literal, _)| *literal == input)
            .map(|&(_, command)| command)
    }

    /// The literal the player types for this command.
    pub fn literal(self) -> &'static str {
        COMMANDS
            .iter()
            .find(|&&(_, command)| command == self)
            .map_or("", |&(literal, _)| literal)
    }

    /// Every command, in help order.
    pub fn all() -> impl Iterator<Item = Command> {
        COMMANDS.iter().map(|&(_, command)| command)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.literal())
    }
}
