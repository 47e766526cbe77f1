pub mod parking_spot;

pub use parking_spot::{CreateParkingSpotInput, ParkingSpot, ParkingSpotRow};
