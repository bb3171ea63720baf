mod command;
mod query;
pub mod session;

pub use command::*;
pub use query::*;
pub use session::SessionRow;
