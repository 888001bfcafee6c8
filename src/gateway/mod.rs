//! Employee gateway.
//!
//! # Data Flow
//! ```text
//! GET /employees
//!     → pagination.rs (skip / pageSize with lenient defaults)
//!     → ManagerClient::list_employees
//!     → sanitizer → 200
//!
//! POST /employees
//!     → employees.rs (reject empty or blank body, no upstream call)
//!     → ManagerClient::create_employee
//!     → sanitizer → 201 { message, employee }
//! ```
//!
//! Upstream failures short-circuit before the sanitizer runs.

pub mod employees;
pub mod pagination;

pub use employees::{CreatedEmployee, EmployeeGateway};
pub use pagination::Pagination;
