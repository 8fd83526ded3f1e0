pub mod auth;
pub mod config;
pub mod export;
pub mod prompts;
pub mod session;
pub mod watched;
