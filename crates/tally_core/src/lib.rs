//! Tally core: token parsing, count table, and substring counting. No IO.
mod count;
mod table;
mod tokens;

pub use count::{strip_line_breaks, SubstringCounter, TokenCounter};
pub use table::TokenCountTable;
pub use tokens::{ConfigError, TokenList};
