//! Orchestration services for the board subsystem.

mod board;

pub use board::{BoardService, BoardServiceError, BoardServiceResult, CreateItemRequest};
