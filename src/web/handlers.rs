//! HTTP handlers for the web form and the JSON API.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Datelike, Local};
use maud::Markup;
use tracing::{debug, warn};

use super::dto::{HealthResponse, HolidayTableResponse, YearQuery};
use super::error::AppError;
use super::page::render_page;
use super::session::Session;
use super::state::AppState;
use crate::analyzer::analyze_holidays;
use crate::table::weekday_rows;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /?year=<year>
///
/// Renders the form; a submitted year runs the year-change step first.
pub async fn index(State(state): State<AppState>, Query(query): Query<YearQuery>) -> Markup {
    let mut session = Session::new(&state, Local::now().year());
    if let Some(input) = query.year.as_deref() {
        debug!(input, "year submitted");
        session.on_year_change(input, &state);
    }
    render_page(&session, &state)
}

/// GET /api/holidays?year=<year>
///
/// Weekday table of a single year as JSON.
pub async fn holidays(
    State(state): State<AppState>,
    Query(query): Query<YearQuery>,
) -> HandlerResult<HolidayTableResponse> {
    let language = state.language;
    let input = query
        .year
        .ok_or_else(|| AppError::BadRequest(language.invalid_year_message()))?;
    let year = state
        .years
        .parse_year(&input)
        .map_err(|err| AppError::BadRequest(language.year_error_message(&err)))?;

    let counts = analyze_holidays(state.calendar.as_ref(), &[year]).map_err(|err| {
        warn!(year, %err, "holiday analysis failed");
        AppError::BadRequest(language.analysis_failed_message(year))
    })?;
    Ok(Json(HolidayTableResponse {
        year,
        rows: weekday_rows(&counts, language.labels()),
    }))
}
