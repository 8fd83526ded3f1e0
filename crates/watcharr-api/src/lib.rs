pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod traits;

pub use auth::{login, register};
pub use client::WatcharrClient;
pub use error::ApiError;
pub use traits::WatchedApi;
