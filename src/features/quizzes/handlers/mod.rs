pub mod quiz_handler;

pub use quiz_handler::*;
