//! Employee list/create operations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::GatewayError;
use crate::gateway::Pagination;
use crate::sanitizer::sanitize;
use crate::upstream::ManagerClient;

pub const CREATED_MESSAGE: &str = "Employee added successfully";
pub const MISSING_BODY_MESSAGE: &str = "Employee data is required (e.g. name, code)";

const LIST_ACTION: &str = "Failed to fetch employees";
const CREATE_ACTION: &str = "Failed to add employee";

/// Body returned by a successful create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedEmployee {
    pub message: String,
    pub employee: Value,
}

/// Forwards employee operations to the Manager API and sanitizes replies.
#[derive(Debug, Clone)]
pub struct EmployeeGateway {
    client: ManagerClient,
}

impl EmployeeGateway {
    pub fn new(client: ManagerClient) -> Self {
        Self { client }
    }

    /// Fetch a page of employees with sensitive fields removed.
    pub async fn list_employees(&self, page: Pagination) -> Result<Value, GatewayError> {
        let data = self
            .client
            .list_employees(page)
            .await
            .map_err(|e| GatewayError::from_upstream(LIST_ACTION, e, |status, _| status.to_string()))?;

        Ok(sanitize(data))
    }

    /// Create an employee from the raw inbound body.
    ///
    /// The body is rejected before any upstream call if it is empty,
    /// not JSON, or a blank JSON value.
    pub async fn create_employee(&self, body: &[u8]) -> Result<CreatedEmployee, GatewayError> {
        let employee = parse_employee(body)?;

        let created = self
            .client
            .create_employee(&employee)
            .await
            .map_err(|e| GatewayError::from_upstream(CREATE_ACTION, e, |_, body| body))?;

        Ok(CreatedEmployee {
            message: CREATED_MESSAGE.to_string(),
            employee: sanitize(created),
        })
    }
}

/// Parse and validate an inbound employee record.
pub fn parse_employee(body: &[u8]) -> Result<Value, GatewayError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(GatewayError::Validation(MISSING_BODY_MESSAGE.to_string()));
    }

    let employee: Value = serde_json::from_slice(body)
        .map_err(|e| GatewayError::Validation(format!("Employee data must be valid JSON: {}", e)))?;

    if is_blank(&employee) {
        return Err(GatewayError::Validation(MISSING_BODY_MESSAGE.to_string()));
    }

    Ok(employee)
}

/// Falsy JSON: null, false, zero, and empty strings, arrays or objects.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_bodies_are_rejected() {
        for body in ["", "   ", "{}", "[]", "null", "false", "0", "\"\""] {
            let err = parse_employee(body.as_bytes()).unwrap_err();
            assert!(
                matches!(&err, GatewayError::Validation(msg) if msg == MISSING_BODY_MESSAGE),
                "body {:?} gave {:?}",
                body,
                err
            );
        }
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = parse_employee(b"{\"name\":").unwrap_err();
        assert!(err.to_string().starts_with("Employee data must be valid JSON"));
    }

    #[test]
    fn test_record_is_accepted() {
        let employee = parse_employee(br#"{"name":"C","code":"123"}"#).unwrap();
        assert_eq!(employee, json!({ "name": "C", "code": "123" }));
    }
}
