//! HTTP controller endpoints for the Heimdall portal API.
//!
//! This module contains Axum handlers for authentication, password reset,
//! file uploads, and the role-gated admin and dean pages. Controllers handle
//! HTTP requests, validate inputs, interact with the service seams, and
//! return appropriate HTTP responses. They integrate with tower-sessions for
//! session management and use utoipa for OpenAPI documentation.

pub mod admin;
pub mod auth;
pub mod dean;
pub mod password_reset;
pub mod upload;
