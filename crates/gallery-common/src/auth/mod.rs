//! Access-token introspection for the hosted identity provider

mod claims;

pub use claims::{AccessClaims, TokenError};
