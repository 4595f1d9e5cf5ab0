pub mod api;
pub mod applicants;
pub mod config;
pub mod confirmation;
pub mod dashboard;
pub mod job;
pub mod telemetry;
