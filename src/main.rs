use anyhow::{Context, Result};
use school_search::SchoolSearch;
use school_search::config::Config;
use school_search::io_adapters::{BufLineReader, LineReader, TerminalReader};
use std::io::{self, IsTerminal};

fn main() -> Result<()> {
    let config: Config = argh::from_env();

    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .init();

    let path = config.roster_path()?;
    let search = SchoolSearch::new(&path)
        .with_context(|| format!("cannot load roster {}", path.display()))?;

    let mut stdout = io::stdout().lock();
    if !config.command.is_empty() {
        search.run_commands(&config.command, &mut stdout)?;
        return Ok(());
    }

    let mut input: Box<dyn LineReader> = if io::stdin().is_terminal() {
        Box::new(TerminalReader::new("> ")?)
    } else {
        Box::new(BufLineReader::new(io::stdin().lock()))
    };
    search.repl(input.as_mut(), &mut stdout)
}
