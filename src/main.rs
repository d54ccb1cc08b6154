// Entrypoint for the CLI application.
// - Keeps `main` small: parse arguments, build the search client and the
//   prompter, then hand everything to the selected command.
// - Without a subcommand the area search runs.
// - Stdin that is not a terminal is read line by line instead of through
//   the interactive prompts.

use airport_finder::api::SearchClient;
use airport_finder::cli::{Cli, Outcome};
use airport_finder::input::{LinePrompter, Prompter, TerminalPrompter};
use airport_finder::logging;
use clap::Parser;
use std::io::{self, IsTerminal};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if let Err(e) = logging::init(cli.log_level.into()) {
        eprintln!("{:#}", e);
    }

    let client = SearchClient::new(&cli.endpoint)?;
    log::debug!("using search endpoint {}", client.endpoint());

    let mut prompter: Box<dyn Prompter> = if io::stdin().is_terminal() {
        Box::new(TerminalPrompter)
    } else {
        Box::new(LinePrompter::new(io::stdin().lock(), io::stdout()))
    };

    // Malformed arguments and closed input still end with a successful
    // exit status.
    let command = cli.command_or_default();
    log::debug!("running in {:?} mode", command.mode());
    let mut stdout = io::stdout();
    match command.execute(prompter.as_mut(), &client, &mut stdout)? {
        Outcome::Usage(e) => log::info!("usage shown: {}", e),
        Outcome::InputClosed(e) => log::info!("stopped: {}", e),
        Outcome::Searched(report) => log::info!(
            "{:?} search: {} fetched, {} shown, failed: {}",
            report.mode,
            report.fetched,
            report.shown,
            report.failed
        ),
    }
    Ok(())
}
