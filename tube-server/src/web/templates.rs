//! Askama templates for the web frontend.

use askama::Template;

use crate::map::MapView;

use super::dto::OutcomeView;

/// The single page: form, optional results panel, and map.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Origin input value to re-fill the form with
    pub from_value: String,

    /// Destination input value to re-fill the form with
    pub to_value: String,

    /// Result panel content; `None` before any calculation
    pub outcome: Option<OutcomeView>,

    /// What the map should show
    pub map: MapView,
}

impl IndexTemplate {
    /// The page as first loaded: empty form, default London map.
    pub fn blank() -> Self {
        Self {
            from_value: String::new(),
            to_value: String::new(),
            outcome: None,
            map: MapView::london(),
        }
    }
}
