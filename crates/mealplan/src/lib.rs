mod command;
mod query;
mod select;
mod types;

pub use command::*;
pub use query::*;
pub use select::*;
pub use types::*;
