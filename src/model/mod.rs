//! Wire-level data transfer objects shared across the HTTP API.

pub mod api;
pub mod portal;
pub mod upload;
pub mod user;
