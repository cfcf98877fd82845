//! # View Projector
//!
//! Role-conditioned views of stored entities. Projection is a pure
//! function of (entity, role set): it never touches storage and never
//! mutates the stored record. Only employees are currently subject to
//! redaction.

use entity::employees;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::access::RoleSet;

/// The representation of an employee visible to a caller.
///
/// `hourly_rate` carries `None` when the caller does not hold `ADMIN`;
/// every other field is preserved unchanged from the stored row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeView {
    pub id:            i32,
    pub name:          String,
    pub hire_date:     chrono::NaiveDate,
    pub leave_date:    Option<chrono::NaiveDate>,
    pub phone_number:  String,
    pub hourly_rate:   Option<Decimal>,
    pub department_id: i32,
}

/// Project a single employee for the given caller.
pub fn project_employee(employee: &employees::Model, roles: &RoleSet) -> EmployeeView {
    EmployeeView {
        id: employee.id,
        name: employee.name.clone(),
        hire_date: employee.hire_date,
        leave_date: employee.leave_date,
        phone_number: employee.phone_number.clone(),
        hourly_rate: roles.is_admin().then_some(employee.hourly_rate),
        department_id: employee.department_id,
    }
}

/// Project a list of employees, applying the same policy uniformly.
pub fn project_employees(employees: &[employees::Model], roles: &RoleSet) -> Vec<EmployeeView> {
    employees
        .iter()
        .map(|e| project_employee(e, roles))
        .collect()
}
