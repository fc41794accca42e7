use serde::{Deserialize, Serialize};

use crate::core::dashboard::Dashboard;
use crate::core::report::ReportSummary;

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime_secs: u64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummaryResponse {
    pub summary: ReportSummary,
    pub departments: Vec<String>,
    pub total_pages: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    #[serde(flatten)]
    pub counters: Dashboard,
    pub upcoming_days: i64,
}

/// Query string accepted by the list, report and export routes.
///
/// Pagination keys keep the json-server spelling (`_page`, `_limit`).
#[derive(Deserialize, Debug, Default)]
pub struct QueryParams {
    #[serde(rename = "_page")]
    pub page: Option<usize>,
    #[serde(rename = "_limit")]
    pub limit: Option<usize>,
    pub q: Option<String>,
    pub department: Option<String>,
    pub status: Option<String>,
    pub archived: Option<bool>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub format: Option<String>,
}
