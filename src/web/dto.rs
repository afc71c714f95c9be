//! Request and response types of the HTTP API.

use serde::{Deserialize, Serialize};

use crate::table::WeekdayRow;

/// Query string of the form and the JSON endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct YearQuery {
    /// Year as typed by the user, parsed by the handler
    pub year: Option<String>,
}

/// Weekday table of one year.
#[derive(Debug, Clone, Serialize)]
pub struct HolidayTableResponse {
    pub year: i32,
    pub rows: Vec<WeekdayRow>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
