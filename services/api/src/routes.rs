use crate::infra::{AppState, DataDir};
use adpulse::ads::dashboard::{
    DashboardReport, SortDirection, SortKey, SortSpec, StatusFilter, TableQuery,
};
use adpulse::ads::snapshot::{Snapshot, SnapshotError, RESOURCE_NAMES};
use adpulse::error::AppError;
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub(crate) struct DashboardReportRequest {
    #[serde(default)]
    pub(crate) data_dir: Option<PathBuf>,
    #[serde(default)]
    pub(crate) search: String,
    #[serde(default)]
    pub(crate) status: StatusFilter,
    #[serde(default)]
    pub(crate) sort_by: Option<SortKey>,
    #[serde(default)]
    pub(crate) descending: bool,
    #[serde(default)]
    pub(crate) include_campaigns: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct DashboardReportResponse {
    pub(crate) data_dir: String,
    pub(crate) report: DashboardReport,
}

pub(crate) fn dashboard_routes() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/dashboard/report",
            axum::routing::post(dashboard_report_endpoint),
        )
        .route(
            "/api/v1/dashboard/data/:resource",
            axum::routing::get(dashboard_data_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn dashboard_report_endpoint(
    Extension(data_dir): Extension<DataDir>,
    Json(payload): Json<DashboardReportRequest>,
) -> Result<Json<DashboardReportResponse>, AppError> {
    let DashboardReportRequest {
        data_dir: override_dir,
        search,
        status,
        sort_by,
        descending,
        include_campaigns,
    } = payload;

    let dir = override_dir.unwrap_or_else(|| data_dir.0.as_ref().clone());
    let snapshot = Snapshot::load(&dir).await?;

    let sort = sort_by.map(|key| SortSpec {
        key,
        direction: if descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        },
    });
    let query = TableQuery {
        search,
        status,
        sort,
    };

    let mut report = snapshot.report(&query);
    if !include_campaigns {
        report.table.rows.clear();
    }

    Ok(Json(DashboardReportResponse {
        data_dir: dir.display().to_string(),
        report,
    }))
}

pub(crate) async fn dashboard_data_endpoint(
    Extension(data_dir): Extension<DataDir>,
    Path(resource): Path<String>,
) -> Result<Response, AppError> {
    let Some(resource) = RESOURCE_NAMES.into_iter().find(|name| *name == resource) else {
        let body = Json(json!({
            "error": format!("unknown dashboard resource '{resource}'")
        }));
        return Ok((StatusCode::NOT_FOUND, body).into_response());
    };

    let bytes = tokio::fs::read(data_dir.0.join(resource))
        .await
        .map_err(|source| SnapshotError::Io { resource, source })?;

    let mime = mime_guess::from_path(resource).first_or_octet_stream();
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, mime.as_ref().to_string())],
        bytes,
    )
        .into_response())
}
