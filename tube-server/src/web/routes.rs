//! HTTP route handlers.

use askama::Template;
use axum::{
    Router,
    extract::{Form, State},
    response::{Html, IntoResponse},
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tracing::warn;

use crate::map::MapView;
use crate::planner::{PlanRequest, Planner};

use super::dto::{JourneyForm, JourneyView, OutcomeView};
use super::state::AppState;
use super::templates::IndexTemplate;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/journey/plan", post(plan_journey))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// The page as first loaded: empty form and the default London map.
async fn index_page() -> impl IntoResponse {
    render(IndexTemplate::blank())
}

/// Run one calculation and re-render the page with its outcome.
///
/// All calculation failures are converted to inline messages here;
/// this handler always responds with the page, never an error status.
async fn plan_journey(
    State(state): State<AppState>,
    Form(form): Form<JourneyForm>,
) -> impl IntoResponse {
    let request = PlanRequest::new(form.from.clone(), form.to.clone());
    let planner = Planner::new(state.geocoder.as_ref(), state.tfl.as_ref());

    let (outcome, map) = match planner.plan(&request).await {
        Ok(plan) => {
            let map = MapView::fitted(&plan.origin, &plan.destination);
            (OutcomeView::Journey(JourneyView::from_plan(&plan)), map)
        }
        Err(err) => {
            if !err.is_warning() {
                warn!(error = %err, "journey calculation failed");
            }
            (OutcomeView::from_error(&err), MapView::london())
        }
    };

    render(IndexTemplate {
        from_value: form.from,
        to_value: form.to,
        outcome: Some(outcome),
        map,
    })
}

/// Render a template, falling back to a plain error string.
fn render(template: IndexTemplate) -> Html<String> {
    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}
