//! HTTP boundary: handlers, DTOs, and identity extraction.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod routes;
