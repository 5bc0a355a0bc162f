use anyhow::Context;
use std::io;
use wordle_helper::cli::{CliInterface, parse_cli};
use wordle_helper::logging::{init_logging, level_from_verbosity};
use wordle_helper::tui::TuiInterface;
use wordle_helper::{game_loop, info_log, resolve_wordbank};

fn main() -> anyhow::Result<()> {
    let cli = parse_cli();

    // Stderr logging would draw over the full-screen UI.
    if !cli.tui || cli.log_file.is_some() {
        init_logging(level_from_verbosity(cli.verbose), cli.log_file.as_deref())
            .context("failed to initialise logging")?;
    }

    let wordbank = resolve_wordbank(cli.wordbank_path.as_deref())
        .context("failed to load word bank")?;
    info_log!("Loaded {} words", wordbank.len());

    if cli.tui {
        let mut interface = TuiInterface::new().context("failed to start terminal UI")?;
        game_loop(&wordbank, &mut interface);
    } else {
        println!("Loaded {} words.", wordbank.len());
        let mut interface = CliInterface::new(io::stdin().lock());
        game_loop(&wordbank, &mut interface);
    }
    Ok(())
}
