mod cli;
mod error;
pub mod load;

pub use cli::Cli;
pub use error::Error;
