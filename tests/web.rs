use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use holiday_analyzer::calendar::GermanCalendar;
use holiday_analyzer::config::{AnalyzerConfig, YearRange};
use holiday_analyzer::locale::Language;
use holiday_analyzer::web::dto::YearQuery;
use holiday_analyzer::web::error::AppError;
use holiday_analyzer::web::handlers;
use holiday_analyzer::web::AppState;

fn state(language: Language) -> AppState {
    AppState::new(
        Arc::new(GermanCalendar::new(language)),
        language,
        YearRange::default(),
    )
}

fn query(year: &str) -> Query<YearQuery> {
    Query(YearQuery {
        year: Some(year.to_string()),
    })
}

#[tokio::test]
async fn health_check() {
    let response = handlers::health_check().await;
    assert_eq!(response.0.status, "ok");
    assert_eq!(response.0.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn holidays_json_for_year() {
    let response = handlers::holidays(State(state(Language::De)), query("2024"))
        .await
        .unwrap();
    let body = response.0;
    assert_eq!(body.year, 2024);
    assert_eq!(body.rows.len(), 7);
    assert_eq!(body.rows[0].label, "Montag");
    assert_eq!(body.rows[0].count, 3);
    assert_eq!(body.rows[2].holidays, ["1. Weihnachtstag", "Tag der Arbeit"]);

    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["rows"][0]["weekday"], "Mon");
    assert_eq!(json["rows"][1]["holidays"], serde_json::json!([]));
}

#[tokio::test]
async fn holidays_json_rejects_bad_years() {
    for input in ["abc", "1900"] {
        let err = handlers::holidays(State(state(Language::En)), query(input))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    let err = handlers::holidays(State(state(Language::En)), Query(YearQuery::default()))
        .await
        .unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn holidays_json_reports_failed_analysis() {
    // chrono cannot represent 270000, so the year validates but the analysis fails
    let state = AppState::new(
        Arc::new(GermanCalendar::new(Language::De)),
        Language::De,
        YearRange {
            min: 1950,
            max: 300_000,
        },
    );
    let err = handlers::holidays(State(state), query("270000"))
        .await
        .unwrap_err();
    let AppError::BadRequest(message) = &err;
    assert_eq!(message, "Fehler bei der Analyse für 270000");
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn index_without_year_shows_empty_table() {
    let state = AppState::from_config(&AnalyzerConfig::default());
    let html = handlers::index(State(state), Query(YearQuery::default())).await.0;
    assert!(html.contains("<td>Montag</td><td class=\"count\">0</td><td></td>"));
    assert!(!html.contains("class=\"notification"));
}

#[tokio::test]
async fn index_with_out_of_range_year() {
    let html = handlers::index(State(state(Language::De)), query("2100")).await.0;
    assert!(html.contains("Bitte geben Sie ein Jahr zwischen 1950 und 2099 ein"));
    assert!(html.contains("<td>Montag</td><td class=\"count\">0</td><td></td>"));
}
