//! Command-line Pyraminx simulator.

mod cli;
mod net;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    // Initialize logging.
    env_logger::builder().init();
    color_eyre::install().expect("error initializing panic handler");

    cli::exec(args)
}
