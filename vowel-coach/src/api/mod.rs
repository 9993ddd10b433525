//! HTTP API handlers for vowel-coach

pub mod analyze;
pub mod health;
pub mod practice;

pub use analyze::analyze_routes;
pub use health::health_routes;
pub use practice::practice_routes;
