//! The immutable text table, keyed by language and text key.
//!
//! The built-in table carries every string the game prints after a language
//! has been chosen. Keys are not required to exist in both languages;
//! [`Catalog::missing`] reports the gaps.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::language::Language;

/// Well-known text keys.
pub mod keys {
    /// Hint printed before every command prompt.
    pub const TYPE_HELP: &str = "type_help";
    /// Output of the `Help` command.
    pub const HELP_COMMANDS: &str = "help_commands";
    /// Printed when a command is not recognized.
    pub const UNKNOWN_COMMAND: &str = "unknown_command";
    /// Printed once a language has been chosen.
    pub const NAME_ENTRY_COMPLETE: &str = "name_entry_complete";
    /// Start confirmation prompt.
    pub const START_GAME: &str = "start_game";
    /// Printed once the player confirmed the start.
    pub const START_GAME_TRUE: &str = "start_game_true";
    /// Printed when the player declined the start.
    pub const START_GAME_FALSE: &str = "start_game_false";
    /// Name prompt.
    pub const NAME_ENTRY: &str = "name_entry";
    /// Greeting prefix, followed by the player name.
    pub const GREETING: &str = "greeting";
    /// Story intro prefix, followed by the player name.
    pub const STORY_BEGINNING: &str = "story_beginning";
    /// Announcement of the dice mini-game.
    pub const GOD_OF_DICE: &str = "god_of_dice";
    /// Opening story paragraph.
    pub const FIRST_STORY: &str = "first_story";
    /// Closing line printed after the command loop ends.
    pub const END_TEXT: &str = "end_text";
    /// Money status prefix, followed by the amount.
    pub const MONEY_STATUS: &str = "money_status";
    /// Output of the `Inventory` command.
    pub const INVENTORY_EMPTY: &str = "inventory_empty";
    /// Command prompt.
    pub const COMMAND_PROMPT: &str = "command_prompt";

    /// Flavor line key for a die face.
    pub fn dice_roll(face: u32) -> String {
        format!("dice_roll_{face}")
    }
}

const GERMAN: &[(&str, &str)] = &[
    (keys::TYPE_HELP, "Type (Help) to get advice! \n"),
    (
        keys::HELP_COMMANDS,
        "Schreibe *Links* um einen Schritt nach Links zu gehen, *Rechts* um nach rechts zu gehen,\n\
         *Geradeaus* um Geradeaus zu gehen und *Unten* um nach Unten zu gehen.\n\
         *Money* zeigt dein Geld und *Inventory* dein Inventar.\n\
         *Dice* um zu würfeln und *Quit* um das Spiel zu beenden",
    ),
    (keys::UNKNOWN_COMMAND, "Undefined Input!"),
    (
        keys::NAME_ENTRY_COMPLETE,
        "Hallo, dies ist mein erstes kleines Projekt, Viel Spaß =]",
    ),
    (keys::START_GAME, "Willst du das Spiel starten? J/N \n"),
    (keys::START_GAME_TRUE, "Let the games begin..."),
    (keys::START_GAME_FALSE, "Are you sure...?"),
    (keys::NAME_ENTRY, "Bitte gebe deinen Namen ein: \n"),
    (keys::GREETING, "Hey, "),
    (keys::STORY_BEGINNING, "Das ist der Anfang Einer Geschichte von "),
    (keys::GOD_OF_DICE, "The God of Dices has chosen you ...(*°O°)ノ"),
    (
        keys::FIRST_STORY,
        "Es war einmal ein Kleiner Zwerg, der wie sein Vater sein Wollte. Einige Zeit später Hat er \
         sich Respekt und Coins Verdient.",
    ),
    (keys::END_TEXT, "This is the end, has it worked well?"),
    (keys::MONEY_STATUS, "Du hast: "),
    (keys::INVENTORY_EMPTY, "Nanu, dein Inventar ist leer!"),
    (keys::COMMAND_PROMPT, "Befehl: "),
    ("dice_roll_1", "Stark! Du hast das Maximum getroffen"),
    ("dice_roll_2", "Eine Zwei? Das ist gut!"),
    ("dice_roll_3", "Drei geht in Ordnung"),
    ("dice_roll_4", "Autsch... eine Vier"),
    ("dice_roll_5", "Autsch... eine Fünf"),
    ("dice_roll_6", "Haha, du hast das Schlechteste getroffen x_x"),
];

const ENGLISH: &[(&str, &str)] = &[
    (keys::TYPE_HELP, "Type (Help) to get advice! \n"),
    (
        keys::HELP_COMMANDS,
        "Type (Forward) to go Forward, Type (Right) to go Right, (Left) to go left \
         and (Down) to go Backwards.\n\
         *Money* to see your finances and *Inventory* to see your inventory.\n\
         *Dice* to play dice and *Quit* to quit the game",
    ),
    (keys::UNKNOWN_COMMAND, "Undefined Input!"),
    (
        keys::NAME_ENTRY_COMPLETE,
        "Hi, This is my First Project im currently working on!",
    ),
    (keys::START_GAME, "Do you want to Start the Game? Y/N \n"),
    (keys::START_GAME_TRUE, "Let the games begin..."),
    (keys::START_GAME_FALSE, "Are you sure...?"),
    (keys::NAME_ENTRY, "Please Type your Name: \n"),
    (keys::GREETING, "Hey, "),
    (keys::STORY_BEGINNING, "This is the beginning of a big Story of "),
    (keys::GOD_OF_DICE, "The God of Dices has chosen you ...(*°O°)ノ"),
    (
        keys::FIRST_STORY,
        "Once Upon a time a little Witcher wanted to be like his Dad. Later on he travelled around \
         the World and gained Respect and Coins",
    ),
    (keys::END_TEXT, "This is the end, has it worked well?"),
    (keys::MONEY_STATUS, "You have: "),
    (keys::INVENTORY_EMPTY, "Why, there is nothing in your inventory!"),
    (keys::COMMAND_PROMPT, "Command: "),
    ("dice_roll_1", "Nice! You Hit the Max"),
    ("dice_roll_2", "Two? That's good!"),
    ("dice_roll_3", "Three is viable"),
    ("dice_roll_4", "ough... four"),
    ("dice_roll_5", "ough... five"),
    ("dice_roll_6", "Haha you hit the Worst x_x"),
];

/// Immutable text table, keyed by language and then by text key.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: BTreeMap<Language, BTreeMap<&'static str, &'static str>>,
}

/// Which languages define a given key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyCoverage {
    /// The text key.
    pub key: &'static str,
    /// Languages that have a string for this key, in [`Language::ALL`] order.
    pub languages: Vec<Language>,
}

impl KeyCoverage {
    /// Whether every supported language defines this key.
    pub fn is_complete(&self) -> bool {
        Language::ALL.iter().all(|l| self.languages.contains(l))
    }
}

impl Catalog {
    /// Build the catalog shipped with the game.
    pub fn builtin() -> Self {
        Self::from_entries([
            (Language::German, GERMAN),
            (Language::English, ENGLISH),
        ])
    }

    /// Build a catalog from per-language entry lists.
    ///
    /// A later entry for the same language and key replaces an earlier one.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Language, &'static [(&'static str, &'static str)])>,
    {
        let mut tables: BTreeMap<Language, BTreeMap<&'static str, &'static str>> =
            BTreeMap::new();
        for (language, pairs) in entries {
            tables
                .entry(language)
                .or_default()
                .extend(pairs.iter().copied());
        }
        Self { tables }
    }

    /// Look up the string for `key` in `language`.
    pub fn lookup(&self, language: Language, key: &str) -> Option<&'static str> {
        self.tables.get(&language)?.get(key).copied()
    }

    /// Whether `language` has a string for `key`.
    pub fn contains(&self, language: Language, key: &str) -> bool {
        self.lookup(language, key).is_some()
    }

    /// Number of keys defined for `language`.
    pub fn len(&self, language: Language) -> usize {
        self.tables.get(&language).map_or(0, BTreeMap::len)
    }

    /// Whether the catalog has no strings at all.
    pub fn is_empty(&self) -> bool {
        self.tables.values().all(BTreeMap::is_empty)
    }

    /// Every key known to any language, with the languages that define it.
    ///
    /// Sorted by key.
    pub fn coverage(&self) -> Vec<KeyCoverage> {
        let all_keys: BTreeSet<&'static str> = self
            .tables
            .values()
            .flat_map(|table| table.keys().copied())
            .collect();

        all_keys
            .into_iter()
            .map(|key| KeyCoverage {
                key,
                languages: Language::ALL
                    .into_iter()
                    .filter(|&l| self.contains(l, key))
                    .collect(),
            })
            .collect()
    }

    /// Keys that some language defines but `language` lacks, sorted.
    pub fn missing(&self, language: Language) -> Vec<&'static str> {
        self.coverage()
            .into_iter()
            .filter(|c| !c.languages.contains(&language))
            .map(|c| c.key)
            .collect()
    }
}
