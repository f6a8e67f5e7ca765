//! Game session: the setup flow and the main command loop.
//!
//! `Game` owns the player's terminal (any `BufRead` + `Write` pair), the
//! text book, the player record, and the dice RNG. [`Game::run`] plays one
//! full session:
//!
//! 1. language prompt (skipped if preselected),
//! 2. start confirmation,
//! 3. name entry and story intro,
//! 4. the command loop, until `Quit` or end of input,
//! 5. the closing line.

use std::io::{BufRead, Write};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use dq_text::{TextBook, keys};

use crate::command::Command;
use crate::config::GameConfig;
use crate::dice;
use crate::error::GameResult;
use crate::pacing::{self, Pacer};
use crate::player::PlayerRecord;

/// Shown before a language exists to show anything else in.
pub const LANGUAGE_PROMPT: &str = "Select your Language! Wähle deine Sprache! \
     (Deutsch ist bei weitem nicht Vollständig!) (DE/EN)\n";
/// Shown when the language input was not `DE` or `EN`.
pub const LANGUAGE_INVALID: &str = "What are you doing?! Restart...";
/// Shown after every language attempt.
pub const PROCESSING: &str = "Processing...";

/// An interactive game session on a terminal.
pub struct Game<R, W> {
    input: R,
    output: W,
    pacer: Box<dyn Pacer>,
    text: TextBook,
    player: PlayerRecord,
    running: bool,
    preselected: Option<dq_text::Language>,
    rng: StdRng,
}

impl<R: BufRead, W: Write> Game<R, W> {
    /// Create a session reading from `input` and writing to `output`.
    pub fn new(config: GameConfig, input: R, output: W) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            input,
            output,
            pacer: pacing::pacer_for(config.pacing),
            text: TextBook::default(),
            player: PlayerRecord::new(),
            running: true,
            preselected: config.language,
            rng,
        }
    }

    /// The text book in use.
    pub fn text(&self) -> &TextBook {
        &self.text
    }

    /// Mutable access to the text book, e.g. to pick a language directly.
    pub fn text_mut(&mut self) -> &mut TextBook {
        &mut self.text
    }

    /// The player record.
    pub fn player(&self) -> &PlayerRecord {
        &self.player
    }

    /// Whether the command loop would keep going.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Consume the session and hand back its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Play a full session, from language choice to the closing line.
    ///
    /// Running out of input ends the session early; the closing line is
    /// still printed exactly once.
    pub fn run(&mut self) -> GameResult<()> {
        if self.setup()? {
            info!(player = self.player.name(), "session started");
            self.command_loop()?;
        } else {
            self.running = false;
        }

        let end = self.text.lookup(keys::END_TEXT);
        self.say(&end)?;
        info!(
            money = self.player.money(),
            experience = self.player.experience(),
            "session ended"
        );
        Ok(())
    }

    /// Run the setup phase. Returns `false` if input ran out.
    fn setup(&mut self) -> GameResult<bool> {
        Ok(self.choose_language()? && self.confirm_start()? && self.enter_name()?)
    }

    fn choose_language(&mut self) -> GameResult<bool> {
        if let Some(language) = self.preselected {
            self.text.select(language);
        }

        while self.text.selected().is_none() {
            self.prompt(LANGUAGE_PROMPT)?;
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };

            if !self.text.select_code(&line) {
                self.say(LANGUAGE_INVALID)?;
            }
            self.say(PROCESSING)?;
            self.pacer.pause(pacing::AFTER_LANGUAGE);
        }

        let text = self.text.lookup(keys::NAME_ENTRY_COMPLETE);
        self.say(&text)?;
        Ok(true)
    }

    fn confirm_start(&mut self) -> GameResult<bool> {
        loop {
            let prompt = self.text.lookup(keys::START_GAME);
            self.prompt(&prompt)?;
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };

            match line.as_str() {
                "Y" | "J" => break,
                "N" => {
                    let text = self.text.lookup(keys::START_GAME_FALSE);
                    self.say(&text)?;
                }
                _ => {}
            }
        }

        let text = self.text.lookup(keys::START_GAME_TRUE);
        self.say(&text)?;
        Ok(true)
    }

    fn enter_name(&mut self) -> GameResult<bool> {
        let prompt = self.text.lookup(keys::NAME_ENTRY);
        self.prompt(&prompt)?;
        let Some(name) = self.read_line()? else {
            return Ok(false);
        };
        self.player.set_name(name);

        let greeting = format!(
            "{}{}!",
            self.text.lookup(keys::GREETING),
            self.player.name()
        );
        self.say(&greeting)?;
        self.pacer.pause(pacing::AFTER_GREETING);

        let intro = format!(
            "{}{}",
            self.text.lookup(keys::STORY_BEGINNING),
            self.player.name()
        );
        self.say(&intro)?;
        self.pacer.pause(pacing::AFTER_STORY);

        let story = self.text.lookup(keys::FIRST_STORY);
        self.say(&story)?;
        Ok(true)
    }

    fn command_loop(&mut self) -> GameResult<()> {
        while self.running {
            let hint = self.text.lookup(keys::TYPE_HELP);
            self.say(&hint)?;
            let prompt = self.text.lookup(keys::COMMAND_PROMPT);
            self.prompt(&prompt)?;

            match self.read_line()? {
                Some(line) => self.dispatch(&line)?,
                None => {
                    debug!("input closed, leaving command loop");
                    self.running = false;
                }
            }
        }
        Ok(())
    }

    /// Handle one line of command input.
    ///
    /// Unrecognized input prints the unknown-command text and changes nothing.
    pub fn dispatch(&mut self, line: &str) -> GameResult<()> {
        match Command::parse(line) {
            Some(command) => {
                debug!(%command, "dispatching");
                self.execute(command)
            }
            None => {
                debug!(input = line, "unknown command");
                let text = self.text.lookup(keys::UNKNOWN_COMMAND);
                self.say(&text)
            }
        }
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> GameResult<()> {
        match command {
            Command::Help => {
                let text = self.text.lookup(keys::HELP_COMMANDS);
                self.say(&text)
            }
            Command::Dice => self.play_dice(),
            Command::Money => {
                let text = format!(
                    "{}{}",
                    self.text.lookup(keys::MONEY_STATUS),
                    self.player.money()
                );
                self.say(&text)
            }
            Command::Inventory => {
                let text = self.text.lookup(keys::INVENTORY_EMPTY);
                self.say(&text)
            }
            Command::Quit => {
                self.running = false;
                Ok(())
            }
        }
    }

    fn play_dice(&mut self) -> GameResult<()> {
        let intro = self.text.lookup(keys::GOD_OF_DICE);
        self.say(&intro)?;
        self.pacer.pause(pacing::BEFORE_DICE);

        let outcome = dice::roll(&mut self.rng);
        outcome.apply(&mut self.player);

        let flavor = self.text.lookup(&keys::dice_roll(outcome.face));
        self.say(&flavor)?;
        self.say(&outcome.face.to_string())
    }

    /// Read one line without its terminator. `None` at end of input.
    ///
    /// Only `\n` or `\r\n` is stripped; other whitespace is part of the input.
    fn read_line(&mut self) -> GameResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Print a line.
    fn say(&mut self, text: &str) -> GameResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Print without a trailing newline and flush, ready for input.
    fn prompt(&mut self, text: &str) -> GameResult<()> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }
}
