pub mod connection;
pub mod submissions;

pub use connection::{init_db, Database};
