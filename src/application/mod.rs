//! Business logic and service orchestration.

pub mod services;
