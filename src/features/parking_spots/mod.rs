//! Parking spots feature.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/parking-spots` | Create a parking spot |
//! | GET | `/api/parking-spots` | List all parking spots |
//! | DELETE | `/api/parking-spots/{id}` | Delete a parking spot |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgParkingSpotRepository;
pub use services::ParkingSpotService;
