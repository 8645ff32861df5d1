//! CLI command handlers. Each command is in its own file.

mod join;
mod normalize;
mod parse;
mod validate;

pub use join::run_join;
pub use normalize::run_normalize;
pub use parse::{run_parse, ParseOptions};
pub use validate::run_validate;
