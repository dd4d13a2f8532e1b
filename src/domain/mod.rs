//! src/domain/mod.rs
mod greeting;
pub use greeting::{Greeting, ServerInfo};

mod health;
pub use health::HealthStatus;
