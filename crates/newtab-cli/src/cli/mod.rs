mod args;
mod commands;
mod report;
mod requests;

pub use args::{Cli, Commands, FavoritesCommand, IntroCommand, SizeClassArg};
pub use commands::{execute, run};
pub use report::{Outcome, Report};
pub use requests::RequestLog;
