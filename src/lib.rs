pub mod app;
pub mod auth;
pub mod client;
pub mod error;
pub mod interface;
pub mod model;
pub mod notify;

pub use reqwest::Client;
pub use tokio;
