pub mod user;

pub use user::{CreateUserInput, User, UserRow};
