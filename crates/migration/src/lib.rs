pub use sea_orm_migration::prelude::*;

mod m20250901_000001_create_departments_table;
mod m20250901_000002_create_employees_table;
mod m20250901_000003_create_vendors_table;
mod m20250901_000004_create_users_table;
mod m20250901_000005_create_user_roles_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    /// Migrations are executed in the order they appear in this list.
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_departments_table::Migration),
            Box::new(m20250901_000002_create_employees_table::Migration),
            Box::new(m20250901_000003_create_vendors_table::Migration),
            Box::new(m20250901_000004_create_users_table::Migration),
            Box::new(m20250901_000005_create_user_roles_table::Migration),
        ]
    }
}

/// Database connection helper for CLI usage
pub async fn connect_to_database(database_url: &str) -> Result<sea_orm::DatabaseConnection, sea_orm::DbErr> {
    sea_orm::Database::connect(database_url).await
}
