//! Shared REST client

mod rest;

pub use rest::RestClient;
