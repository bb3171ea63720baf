mod command;
mod like;
mod query;
mod types;

pub use command::*;
pub use like::*;
pub use query::*;
pub use types::*;
