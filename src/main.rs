use anyhow::Result;
use clap::Parser;

use git_tickets::git::Git2LogSource;
use git_tickets::{action, config, ui};

#[derive(clap::Parser)]
#[command(
    name = "git-tickets",
    about = "Extract ticket identifiers from the git log of a commit range"
)]
struct Args {
    #[arg(long, help = "Start commit reference of the range")]
    from: Option<String>,

    #[arg(long, help = "End commit reference of the range")]
    to: Option<String>,

    #[arg(short, long, help = "Regex selecting ticket identifiers in the log")]
    matching: Option<String>,

    #[arg(short, long, help = "git pretty-format template for each commit")]
    pretty: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("git-tickets {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let file_config = match config::load_file_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    // Resolve options at the boundary; the action only sees final values
    let overrides = config::Overrides {
        from: args.from,
        to: args.to,
        matching: args.matching,
        pretty: args.pretty,
    };
    let options = config::resolve(&overrides, &file_config);

    // Initialize the log source
    let source = match Git2LogSource::discover() {
        Ok(source) => source,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let tickets = match action::run(&source, &options) {
        Ok(tickets) => tickets,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    // The machine-readable output: one identifier per line
    for ticket in &tickets {
        println!("{}", ticket);
    }

    Ok(())
}
