pub mod migrate;
pub mod recipes;
pub mod server;
