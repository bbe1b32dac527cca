//! Map view model.
//!
//! Describes what the map should show; the actual tile rendering is
//! done client-side by Leaflet. Before any calculation the map is a
//! plain view of central London. After a successful calculation it
//! shows origin and destination markers, a dashed straight line
//! between them, and a viewport fitted to both points.

use crate::domain::Location;

/// Central London reference point for the default view.
pub const LONDON_CENTER: LatLng = LatLng {
    lat: 51.509865,
    lng: -0.118092,
};

/// Zoom level for the default London view.
pub const DEFAULT_ZOOM: u8 = 11;

/// Zoom level used as the starting point for a fitted result view.
const RESULT_ZOOM: u8 = 12;

/// Pixel padding applied when fitting the viewport to both markers.
const FIT_PADDING_PX: u32 = 50;

/// A latitude/longitude pair in the order Leaflet expects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    fn of(location: &Location) -> Self {
        Self {
            lat: location.latitude(),
            lng: location.longitude(),
        }
    }
}

/// A map marker with its popup content.
#[derive(Debug, Clone)]
pub struct Marker {
    pub position: LatLng,

    /// Short tooltip title (e.g. "Your Location (A)").
    pub title: &'static str,

    /// Marker colour; origin and destination are visually distinct.
    pub colour: &'static str,

    /// Resolved place name shown in the popup.
    pub name: String,
}

/// The dashed straight line connecting origin and destination.
#[derive(Debug, Clone, Copy)]
pub struct ConnectingLine {
    pub from: LatLng,
    pub to: LatLng,
}

/// Rectangle the viewport should be fitted to.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub south_west: LatLng,
    pub north_east: LatLng,

    /// Pixel padding around the fitted bounds.
    pub padding_px: u32,
}

/// Everything the template needs to draw the map.
#[derive(Debug, Clone)]
pub struct MapView {
    /// Initial center.
    pub center: LatLng,

    /// Initial zoom; superseded by `bounds` when present.
    pub zoom: u8,

    /// When set, the viewport is fitted to these bounds after loading.
    pub bounds: Option<Bounds>,

    pub markers: Vec<Marker>,

    pub line: Option<ConnectingLine>,
}

impl MapView {
    /// The default view: central London, no markers.
    pub fn london() -> Self {
        Self {
            center: LONDON_CENTER,
            zoom: DEFAULT_ZOOM,
            bounds: None,
            markers: Vec::new(),
            line: None,
        }
    }

    /// A result view: both endpoints marked, connected by a dashed
    /// line, viewport fitted to contain both with fixed padding.
    pub fn fitted(origin: &Location, destination: &Location) -> Self {
        let from = LatLng::of(origin);
        let to = LatLng::of(destination);

        let center = LatLng {
            lat: (from.lat + to.lat) / 2.0,
            lng: (from.lng + to.lng) / 2.0,
        };

        let bounds = Bounds {
            south_west: LatLng {
                lat: from.lat.min(to.lat),
                lng: from.lng.min(to.lng),
            },
            north_east: LatLng {
                lat: from.lat.max(to.lat),
                lng: from.lng.max(to.lng),
            },
            padding_px: FIT_PADDING_PX,
        };

        Self {
            center,
            zoom: RESULT_ZOOM,
            bounds: Some(bounds),
            markers: vec![
                Marker {
                    position: from,
                    title: "Your Location (A)",
                    colour: "#2563eb",
                    name: origin.display_name().to_string(),
                },
                Marker {
                    position: to,
                    title: "Office Location (B)",
                    colour: "#dc2626",
                    name: destination.display_name().to_string(),
                },
            ],
            line: Some(ConnectingLine { from, to }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baker_street() -> Location {
        Location::new(51.5226, -0.1571, "Baker Street").unwrap()
    }

    fn canary_wharf() -> Location {
        Location::new(51.5054, -0.0235, "Canary Wharf").unwrap()
    }

    #[test]
    fn default_view_is_central_london() {
        let view = MapView::london();
        assert_eq!(view.center, LONDON_CENTER);
        assert_eq!(view.zoom, DEFAULT_ZOOM);
        assert!(view.bounds.is_none());
        assert!(view.markers.is_empty());
        assert!(view.line.is_none());
    }

    #[test]
    fn fitted_view_marks_both_endpoints() {
        let view = MapView::fitted(&baker_street(), &canary_wharf());

        assert_eq!(view.markers.len(), 2);
        assert_eq!(view.markers[0].title, "Your Location (A)");
        assert_eq!(view.markers[0].position.lat, 51.5226);
        assert_eq!(view.markers[1].title, "Office Location (B)");
        assert_eq!(view.markers[1].name, "Canary Wharf");
        assert_ne!(view.markers[0].colour, view.markers[1].colour);
    }

    #[test]
    fn fitted_view_centers_on_midpoint() {
        let view = MapView::fitted(&baker_street(), &canary_wharf());
        assert!((view.center.lat - 51.514).abs() < 1e-9);
        assert!((view.center.lng - (-0.0903)).abs() < 1e-9);
    }

    #[test]
    fn fitted_bounds_contain_both_points_regardless_of_order() {
        for (a, b) in [
            (baker_street(), canary_wharf()),
            (canary_wharf(), baker_street()),
        ] {
            let view = MapView::fitted(&a, &b);
            let bounds = view.bounds.unwrap();

            assert_eq!(bounds.south_west.lat, 51.5054);
            assert_eq!(bounds.south_west.lng, -0.1571);
            assert_eq!(bounds.north_east.lat, 51.5226);
            assert_eq!(bounds.north_east.lng, -0.0235);
            assert_eq!(bounds.padding_px, 50);
        }
    }

    #[test]
    fn fitted_view_has_connecting_line() {
        let view = MapView::fitted(&baker_street(), &canary_wharf());
        let line = view.line.unwrap();
        assert_eq!(line.from, view.markers[0].position);
        assert_eq!(line.to, view.markers[1].position);
    }
}
