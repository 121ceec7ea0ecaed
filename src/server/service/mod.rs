//! Service layer for business logic and collaborators.
//!
//! This module contains the collaborators the HTTP layer is wired against:
//! the account directory, the route-group access policy, outbound mail, reset
//! token bookkeeping, and upload storage. Each seam is a trait so tests and
//! deployments can swap implementations without touching the handlers.

pub mod directory;
pub mod mailer;
pub mod policy;
pub mod reset;
pub mod upload;
