pub mod purchase_handler;

pub use purchase_handler::*;
