pub mod api;
pub mod board;
pub mod catalog;

pub use api::*;
pub use board::PlaceBoard;
pub use catalog::*;
