mod error;
mod parse;
mod types;


pub use error::ParseError;
pub use parse::{parse_command, parse_commands};
pub use types::*;
