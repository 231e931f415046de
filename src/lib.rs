pub mod check;
pub mod client;
pub mod configuration;
pub mod telemetry;
