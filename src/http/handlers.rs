use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::GatewayError;
use crate::gateway::{CreatedEmployee, Pagination};
use crate::http::server::AppState;

#[derive(Debug, Serialize)]
pub struct Welcome {
    pub message: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
    pub instructions: &'static str,
}

/// `GET /`
pub async fn welcome() -> Json<Welcome> {
    Json(Welcome {
        message: "HR gateway is running",
        endpoints: BTreeMap::from([
            ("GET /employees", "List employees (financial fields removed)"),
            ("POST /employees", "Add a new employee"),
        ]),
        instructions: "Append /employees to the URL to fetch employees",
    })
}

/// `GET /employees?skip=&pageSize=`
pub async fn list_employees(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Value>, GatewayError> {
    let page = Pagination::from_pairs(&params);
    tracing::debug!(skip = page.skip, page_size = page.page_size, "Listing employees");

    let employees = state.gateway.list_employees(page).await?;
    Ok(Json(employees))
}

/// `POST /employees`
pub async fn create_employee(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreatedEmployee>), GatewayError> {
    let created = state.gateway.create_employee(&body).await?;
    tracing::info!("Employee created");
    Ok((StatusCode::CREATED, Json(created)))
}
