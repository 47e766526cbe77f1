pub mod parking_spot_handler;

pub use parking_spot_handler::*;
