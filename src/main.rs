//! CLI entry point for the pattern compositor

use clap::Parser;
use patternfit::io::cli::{Cli, CommandRunner, init_logging};

fn main() -> patternfit::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);
    CommandRunner::new(cli).run()
}
