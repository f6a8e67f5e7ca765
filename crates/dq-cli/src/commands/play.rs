use std::io;

use dq_game::{Game, GameConfig};

/// Play one session on stdin/stdout.
pub fn run(config: GameConfig) -> Result<(), String> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut game = Game::new(config, stdin.lock(), stdout.lock());
    game.run().map_err(|e| e.to_string())
}
