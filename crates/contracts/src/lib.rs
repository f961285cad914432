//! Shared DTOs between the raidboard backend and its frontend.

pub mod dashboards;
pub mod domain;
pub mod projections;
