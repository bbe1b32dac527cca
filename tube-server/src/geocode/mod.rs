//! Nominatim geocoding client.
//!
//! This module provides an HTTP client for the OpenStreetMap Nominatim
//! search API, which resolves free-text place descriptions to
//! coordinates.
//!
//! Key characteristics:
//! - Queries are biased towards London: a ", London, UK" qualifier is
//!   appended unless the input already mentions London
//! - Results are restricted to Great Britain and capped at one candidate
//! - Coordinates come back as string-encoded floats
//! - Nominatim's usage policy requires an identifying `User-Agent`

mod client;
mod error;
mod mock;

pub use client::{GeocoderConfig, NominatimClient};
pub use error::GeocodeError;
pub use mock::MockGeocoder;
