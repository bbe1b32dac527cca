//! Mock geocoder for testing without network access.
//!
//! Serves locations from a fixed table and counts calls, so tests can
//! assert that no lookup was issued for rejected input.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::Location;
use crate::planner::GeocodeProvider;

use super::error::GeocodeError;

/// What the mock returns for every call.
#[derive(Debug)]
enum MockBehaviour {
    /// Look the address up in the fixed table.
    Lookup,
    /// Fail every call with an API error of this status.
    FailWithStatus(u16),
}

/// Mock geocoder backed by a fixed address table.
#[derive(Debug)]
pub struct MockGeocoder {
    places: HashMap<String, Location>,
    behaviour: MockBehaviour,
    calls: AtomicUsize,
}

impl MockGeocoder {
    /// Create an empty mock. Every lookup fails with `NotFound` until
    /// places are added.
    pub fn new() -> Self {
        Self {
            places: HashMap::new(),
            behaviour: MockBehaviour::Lookup,
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock that fails every call with the given HTTP status.
    pub fn failing(status: u16) -> Self {
        Self {
            places: HashMap::new(),
            behaviour: MockBehaviour::FailWithStatus(status),
            calls: AtomicUsize::new(0),
        }
    }

    /// Add a known place, keyed by the exact address text.
    pub fn with_place(mut self, address: &str, location: Location) -> Self {
        self.places.insert(address.to_string(), location);
        self
    }

    /// Number of geocode calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockGeocoder {
    fn default() -> Self {
        Self::new()
    }
}

impl GeocodeProvider for MockGeocoder {
    async fn geocode(&self, address: &str) -> Result<Location, GeocodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.behaviour {
            MockBehaviour::FailWithStatus(status) => Err(GeocodeError::Api {
                status,
                message: "mock failure".to_string(),
            }),
            MockBehaviour::Lookup => {
                self.places
                    .get(address)
                    .cloned()
                    .ok_or_else(|| GeocodeError::NotFound {
                        address: address.to_string(),
                    })
            }
        }
    }
}
