pub mod parser;
pub mod service;
