pub mod parking_spots;
pub mod settings;
pub mod users;
