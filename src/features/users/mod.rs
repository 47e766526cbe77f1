//! User registration and lookup feature.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/users` | Register a user |
//! | GET | `/api/users` | List all users |
//! | GET | `/api/users/{id}` | Get user by ID |
//! | GET | `/api/users/by-email?email=` | Get user by email |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgUserRepository;
pub use services::UserService;
