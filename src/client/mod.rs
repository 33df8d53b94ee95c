//! HTTP gateway client built on reqwest.

pub mod request;
pub use request::*;
