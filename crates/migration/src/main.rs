use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    // Held for the process lifetime so file output, when configured, is
    // flushed on exit.
    let _logging_guard = logging::init("info", "pretty", None);

    if std::env::var("DATABASE_URL").is_err() {
        // Assemble the URL from the individual ANVIL_DATABASE_* variables.
        unsafe {
            std::env::set_var(
                "DATABASE_URL",
                format!(
                    "postgres://{}:{}@{}:{}/{}",
                    std::env::var("ANVIL_DATABASE_USER").unwrap_or_else(|_| "anvil".to_owned()),
                    std::env::var("ANVIL_DATABASE_PASSWORD").unwrap_or_default(),
                    std::env::var("ANVIL_DATABASE_HOST").unwrap_or_else(|_| "localhost".to_owned()),
                    std::env::var("ANVIL_DATABASE_PORT").unwrap_or_else(|_| "5432".to_owned()),
                    std::env::var("ANVIL_DATABASE_NAME").unwrap_or_else(|_| "anvil".to_owned()),
                ),
            );
        }
    }

    cli::run_cli(migration::Migrator).await;
}
