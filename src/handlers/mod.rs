pub mod analytics;
pub mod attendance;
pub mod auth;
pub mod employee;
pub mod general;
pub mod invoice;
pub mod resignation;
pub mod task;
