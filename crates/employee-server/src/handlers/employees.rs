//! Employee handlers

use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use employee_core::{validate, CreateEmployeeRequest, EmployeeRecord};
use serde::Deserialize;
use tracing::{info, warn};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<EmployeeRecord>>, ApiError> {
    let employees = state.service.list_all().await?;
    Ok(Json(employees))
}

pub async fn get(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<EmployeeRecord>, ApiError> {
    let Path(id) = path?;
    let employee = state.service.get_by_id(id).await?;
    Ok(Json(employee))
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(alias = "title")]
    puesto: Option<String>,
}

pub async fn search(
    State(state): State<AppState>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<EmployeeRecord>>, ApiError> {
    let Query(params) = query?;
    let title = params.puesto.unwrap_or_default();
    let employees = state.service.search_by_title(&title).await?;
    Ok(Json(employees))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<EmployeeRecord>), ApiError> {
    let Json(req) = body?;

    let new = validate(req).map_err(|violations| {
        warn!("Rejected employee payload: {} violation(s)", violations.len());
        ApiError::validation(violations)
    })?;

    info!("Creating employee: {} ({})", new.name, new.title);
    let created = state.service.create(new).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
