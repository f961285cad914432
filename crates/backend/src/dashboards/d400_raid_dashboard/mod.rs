pub mod service;
pub mod stats;
