//! Per-user notification settings feature.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/settings?userId=` | Create settings for a user |
//! | GET | `/api/settings/user/{user_id}` | Get settings by user ID |
//! | PATCH | `/api/settings?id=` | Partially update settings |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgSettingRepository;
pub use services::SettingService;
