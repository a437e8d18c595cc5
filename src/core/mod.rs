//! Core domain: jobs, cron handling and occurrence projection.

pub mod clock;
pub mod cron;
pub mod job;
pub mod projector;
pub mod types;
