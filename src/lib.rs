//! Heimdall is the session gateway for the campus administration portal.
//!
//! It authenticates users against the account directory, carries their
//! identity in a signed session cookie, and routes requests to the portal's
//! route groups: the general API, password reset, admin pages, the dean
//! section, and the public static assets.

pub mod model;
pub mod server;
