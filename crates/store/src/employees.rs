//! # Employee Repository
//!
//! CRUD and lookup queries for employees, plus the role-aware variants
//! that return projected views instead of raw rows.

use chrono::NaiveDate;
use entity::employees;
use error::{AppError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};
use serde::Deserialize;
use tracing::info;
use validator::Validate;

use crate::{
    access::RoleSet,
    projection::{self, EmployeeView},
};

/// Lowest hourly rate an employee may be paid.
pub const MIN_HOURLY_RATE: Decimal = dec!(13.00);

/// Fields accepted when creating or replacing an employee.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EmployeeDraft {
    #[validate(length(min = 2, max = 255))]
    pub name:          String,
    pub hire_date:     NaiveDate,
    pub leave_date:    Option<NaiveDate>,
    #[validate(length(min = 10, max = 13))]
    pub phone_number:  String,
    pub hourly_rate:   Decimal,
    #[validate(range(min = 1))]
    pub department_id: i32,
}

// Same bounds as the draft's phone_number field; the partial update does
// not go through a draft so it checks here.
fn ensure_phone_number(phone_number: &str) -> Result<()> {
    let len = phone_number.chars().count();
    if !(10..=13).contains(&len) {
        return Err(AppError::validation(format!(
            "Phone number must be 10 to 13 characters, got {}",
            len
        )));
    }
    Ok(())
}

fn ensure_wage_floor(rate: Decimal) -> Result<()> {
    if rate < MIN_HOURLY_RATE {
        return Err(AppError::validation(format!(
            "Hourly rate {} is below the {} minimum",
            rate, MIN_HOURLY_RATE
        )));
    }
    Ok(())
}

/// Lists all employees, ordered by id.
pub async fn list_employees<C: ConnectionTrait>(db: &C) -> Result<Vec<employees::Model>> {
    let rows = employees::Entity::find()
        .order_by_asc(employees::Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

/// Lists the employees of one department, ordered by name ascending.
pub async fn employees_by_department<C: ConnectionTrait>(
    db: &C,
    department_id: i32,
) -> Result<Vec<employees::Model>> {
    let rows = employees::Entity::find()
        .filter(employees::Column::DepartmentId.eq(department_id))
        .order_by_asc(employees::Column::Name)
        .all(db)
        .await?;
    Ok(rows)
}

/// Fetches a single employee by id.
pub async fn get_employee<C: ConnectionTrait>(db: &C, id: i32) -> Result<employees::Model> {
    employees::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {} not found", id)))
}

/// Finds the first employee whose name contains the given fragment,
/// case-insensitively. Names are not unique; callers get the first match
/// by id order.
pub async fn find_employee_by_name<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> Result<employees::Model> {
    let pattern = format!("%{}%", name.to_lowercase());
    employees::Entity::find()
        .filter(Expr::expr(Func::lower(Expr::col(employees::Column::Name))).like(pattern))
        .order_by_asc(employees::Column::Id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No employee matching '{}'", name)))
}

/// Creates an employee and returns the stored row.
pub async fn create_employee<C: ConnectionTrait>(
    db: &C,
    draft: EmployeeDraft,
) -> Result<employees::Model> {
    draft.validate()?;
    ensure_wage_floor(draft.hourly_rate)?;

    let inserted = employees::ActiveModel {
        id:            NotSet,
        name:          Set(draft.name),
        hire_date:     Set(draft.hire_date),
        leave_date:    Set(draft.leave_date),
        phone_number:  Set(draft.phone_number),
        hourly_rate:   Set(draft.hourly_rate),
        department_id: Set(draft.department_id),
    }
    .insert(db)
    .await?;

    info!(
        employee_id = inserted.id,
        department_id = inserted.department_id,
        "Created employee"
    );

    get_employee(db, inserted.id).await
}

/// Replaces an employee's mutable fields and returns the stored row.
pub async fn update_employee<C: ConnectionTrait>(
    db: &C,
    id: i32,
    draft: EmployeeDraft,
) -> Result<employees::Model> {
    draft.validate()?;
    ensure_wage_floor(draft.hourly_rate)?;

    employees::ActiveModel {
        id:            Set(id),
        name:          Set(draft.name),
        hire_date:     Set(draft.hire_date),
        leave_date:    Set(draft.leave_date),
        phone_number:  Set(draft.phone_number),
        hourly_rate:   Set(draft.hourly_rate),
        department_id: Set(draft.department_id),
    }
    .update(db)
    .await?;

    info!(employee_id = id, "Updated employee");

    get_employee(db, id).await
}

/// Updates only an employee's phone number and returns the stored row.
pub async fn update_employee_phone_number<C: ConnectionTrait>(
    db: &C,
    id: i32,
    phone_number: String,
) -> Result<employees::Model> {
    ensure_phone_number(&phone_number)?;

    employees::ActiveModel {
        id: Set(id),
        phone_number: Set(phone_number),
        ..Default::default()
    }
    .update(db)
    .await?;

    info!(employee_id = id, "Updated employee phone number");

    get_employee(db, id).await
}

/// Updates only an employee's hourly rate and returns the stored row.
pub async fn update_employee_hourly_rate<C: ConnectionTrait>(
    db: &C,
    id: i32,
    hourly_rate: Decimal,
) -> Result<employees::Model> {
    ensure_wage_floor(hourly_rate)?;

    employees::ActiveModel {
        id: Set(id),
        hourly_rate: Set(hourly_rate),
        ..Default::default()
    }
    .update(db)
    .await?;

    info!(employee_id = id, "Updated employee hourly rate");

    get_employee(db, id).await
}

/// Deletes an employee. Deleting an id that does not exist is a no-op.
pub async fn delete_employee<C: ConnectionTrait>(db: &C, id: i32) -> Result<()> {
    employees::Entity::delete_by_id(id).exec(db).await?;

    info!(employee_id = id, "Deleted employee");

    Ok(())
}

/// Fetches a single employee projected for the caller's roles.
pub async fn get_employee_view<C: ConnectionTrait>(
    db: &C,
    id: i32,
    roles: &RoleSet,
) -> Result<EmployeeView> {
    let employee = get_employee(db, id).await?;
    Ok(projection::project_employee(&employee, roles))
}

/// Finds an employee by name fragment, projected for the caller's roles.
pub async fn find_employee_view_by_name<C: ConnectionTrait>(
    db: &C,
    name: &str,
    roles: &RoleSet,
) -> Result<EmployeeView> {
    let employee = find_employee_by_name(db, name).await?;
    Ok(projection::project_employee(&employee, roles))
}

/// Lists employees projected for the caller's roles, optionally limited
/// to one department. The department-filtered list is ordered by name,
/// the full list by id.
pub async fn list_employee_views<C: ConnectionTrait>(
    db: &C,
    department_id: Option<i32>,
    roles: &RoleSet,
) -> Result<Vec<EmployeeView>> {
    let rows = match department_id {
        Some(department_id) => employees_by_department(db, department_id).await?,
        None => list_employees(db).await?,
    };
    Ok(projection::project_employees(&rows, roles))
}
