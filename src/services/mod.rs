pub mod analytics;
pub mod attendance;
pub mod invoice;
pub mod resignation;
