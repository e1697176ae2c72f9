use axum::{routing::get, Router};

use crate::types::app_state::AppState;

mod get_countries;
mod get_search;
mod get_suggestions;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route("/search", get(get_search::get_search))
        .route("/suggestions", get(get_suggestions::get_suggestions))
        .route("/countries", get(get_countries::get_countries))
}
