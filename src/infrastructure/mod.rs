//! Storage backends and other external integrations.

pub mod persistence;
