//! Application state for the web layer.

use std::sync::Arc;

use crate::geocode::NominatimClient;
use crate::tfl::TflClient;

/// Shared application state.
///
/// Holds the two external-service clients. There is no other shared
/// state: every calculation is rebuilt from scratch per request.
#[derive(Clone)]
pub struct AppState {
    /// Nominatim geocoding client
    pub geocoder: Arc<NominatimClient>,

    /// TfL journey planner client
    pub tfl: Arc<TflClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(geocoder: NominatimClient, tfl: TflClient) -> Self {
        Self {
            geocoder: Arc::new(geocoder),
            tfl: Arc::new(tfl),
        }
    }
}
