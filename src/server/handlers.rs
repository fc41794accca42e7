use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::core::dashboard::Dashboard;
use crate::core::filter::{ArchivedFilter, EmployeeFilter, departments};
use crate::core::onboarding::OnboardingLogic;
use crate::core::paginate::paginate;
use crate::core::report::ReportSummary;
use crate::errors::AppError;
use crate::export::{ExportFormat, ExportLogic, employee_file_stem};
use crate::models::{Employee, NewEmployee, TaskStatus};
use crate::store::log::hrlog;
use crate::utils::date;

use super::{
    AppState,
    models::{
        DashboardResponse, ErrorResponse, HealthResponse, QueryParams, ReportSummaryResponse,
    },
};

pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// `AppError` carried out of a handler, rendered as `{"message": ...}`.
pub struct ApiError(AppError);

impl From<AppError> for ApiError {
    fn from(e: AppError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_not_found() {
            StatusCode::NOT_FOUND
        } else if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::warn!(error = %self.0, "request rejected");
        }

        (
            status,
            Json(ErrorResponse {
                message: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

type ApiResult<T> = Result<T, ApiError>;

/// Unwrap a JSON body, turning decode failures into a 400 with a message.
fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    body.map(|Json(v)| v)
        .map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))
}

impl QueryParams {
    /// Build a filter; `default_archived` applies when `archived` is absent.
    fn filter(&self, default_archived: ArchivedFilter) -> Result<EmployeeFilter, AppError> {
        let status = match self.status.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => Some(s.parse::<TaskStatus>()?),
            _ => None,
        };
        let parse_bound = |raw: &Option<String>| -> Result<_, AppError> {
            match raw.as_deref().map(str::trim) {
                Some(s) if !s.is_empty() => date::parse_date(s)
                    .map(Some)
                    .ok_or_else(|| AppError::InvalidDate(s.to_string())),
                _ => Ok(None),
            }
        };

        Ok(EmployeeFilter {
            search: self.q.clone().filter(|s| !s.is_empty()),
            department: self.department.clone().filter(|s| !s.is_empty()),
            status,
            start_from: parse_bound(&self.from)?,
            start_to: parse_bound(&self.to)?,
            archived: match self.archived {
                Some(true) => ArchivedFilter::Archived,
                Some(false) => ArchivedFilter::Active,
                None => default_archived,
            },
        })
    }

    fn export_format(&self) -> Result<ExportFormat, AppError> {
        let raw = self.format.as_deref().unwrap_or("csv");
        ExportFormat::parse(raw)
            .ok_or_else(|| AppError::InvalidRequest(format!("unsupported export format '{raw}'")))
    }
}

fn attachment(format: ExportFormat, stem: &str, bytes: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{stem}.{}\"", format.extension()),
            ),
        ],
        bytes,
    )
        .into_response()
}

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let uptime_secs = state.started_at.elapsed().map(|d| d.as_secs()).unwrap_or(0);
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok",
            uptime_secs,
        }),
    )
}

/// `GET /employees`: every record unless filtered; paginated when `_page`
/// or `_limit` is present. `X-Total-Count` is the filtered total.
pub async fn list_employees(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> ApiResult<Response> {
    let filter = params.filter(ArchivedFilter::All)?;
    let store = state.lock_store()?;
    let selected: Vec<Employee> = filter.apply(store.employees()).into_iter().cloned().collect();
    drop(store);

    let total = selected.len();
    let items = if params.page.is_some() || params.limit.is_some() {
        let limit = params.limit.unwrap_or(state.config.page_size);
        paginate(&selected, params.page.unwrap_or(1), limit).items
    } else {
        selected
    };

    Ok(([(TOTAL_COUNT_HEADER, total.to_string())], Json(items)).into_response())
}

pub async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<NewEmployee>, JsonRejection>,
) -> ApiResult<Response> {
    let payload = json_body(payload)?;
    let mut store = state.lock_store()?;
    let saved = OnboardingLogic::add_employee(&mut store, &state.config, payload)?;
    Ok((StatusCode::CREATED, Json(saved)).into_response())
}

pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<Employee>> {
    let store = state.lock_store()?;
    Ok(Json(store.get(id)?.clone()))
}

/// Full-record overwrite; the id in the body is ignored.
pub async fn replace_employee(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    employee: Result<Json<Employee>, JsonRejection>,
) -> ApiResult<Json<Employee>> {
    let employee = json_body(employee)?;
    employee.validate()?;
    let mut store = state.lock_store()?;
    let saved = store.replace(id, employee)?;
    hrlog(&mut store, "edit", &format!("employee {id}"), "record replaced over REST");
    Ok(Json(saved))
}

pub async fn patch_employee(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    fields: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Employee>> {
    let fields = json_body(fields)?;
    let mut store = state.lock_store()?;
    let saved = store.patch(id, &fields)?;
    let keys: Vec<&str> = fields
        .as_object()
        .map(|o| o.keys().map(String::as_str).collect())
        .unwrap_or_default();
    hrlog(
        &mut store,
        "edit",
        &format!("employee {id}"),
        &format!("patched {}", keys.join(", ")),
    );
    Ok(Json(saved))
}

pub async fn export_employee(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(params): Query<QueryParams>,
) -> ApiResult<Response> {
    let format = params.export_format()?;
    let store = state.lock_store()?;
    let employee = store.get(id)?;
    let bytes = ExportLogic::employee_bytes(format, employee)?;
    Ok(attachment(format, &employee_file_stem(employee), bytes))
}

pub async fn report_summary(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> ApiResult<Json<ReportSummaryResponse>> {
    let filter = params.filter(ArchivedFilter::Active)?;
    let store = state.lock_store()?;
    let selected = filter.apply(store.employees());
    let limit = params.limit.unwrap_or(state.config.page_size).max(1);

    Ok(Json(ReportSummaryResponse {
        summary: ReportSummary::build(selected.iter().copied()),
        departments: departments(store.employees()),
        total_pages: selected.len().div_ceil(limit).max(1),
    }))
}

pub async fn export_report(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> ApiResult<Response> {
    let format = params.export_format()?;
    let filter = params.filter(ArchivedFilter::Active)?;
    let store = state.lock_store()?;
    let selected = filter.apply(store.employees());
    let bytes = ExportLogic::report_bytes(format, &selected)?;
    Ok(attachment(format, "employee_report", bytes))
}

pub async fn dashboard(State(state): State<AppState>) -> ApiResult<Json<DashboardResponse>> {
    let store = state.lock_store()?;
    let window = state.config.upcoming_days;
    Ok(Json(DashboardResponse {
        counters: Dashboard::build(store.employees(), date::today(), window),
        upcoming_days: window,
    }))
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            message: "not found".to_string(),
        }),
    )
}
