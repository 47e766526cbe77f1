pub mod parking_spot_repository;

pub use parking_spot_repository::{ParkingSpotRepository, PgParkingSpotRepository};
