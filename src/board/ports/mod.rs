//! Port contracts for the board subsystem.

mod store;

pub use store::{BoardStore, BoardStoreError, BoardStoreResult, Subscriber};
