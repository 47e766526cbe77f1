pub mod parking_spot_dto;

pub use parking_spot_dto::{CreateParkingSpotDto, ParkingSpotListDto};
