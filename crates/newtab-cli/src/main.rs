use clap::Parser;
use newtab_cli::cli::{run, Cli};
use newtab_core::tracing_setup::init_tracing_with_level;
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    if let Err(e) = init_tracing_with_level("newtab-cli", level) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    match run(&cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
