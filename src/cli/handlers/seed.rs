//! `hvacdesk seed`

use crate::config::{Environment, Settings};
use crate::db::establish_async_connection_pool;
use crate::error::{AppError, AppResult};
use crate::services::{ADMIN_EMAIL, DEMO_PASSWORD, SeedReport, SeedService};

pub struct SeedCommandHandler {
    config: Settings,
    environment: Environment,
}

impl SeedCommandHandler {
    pub fn new(config: Settings, environment: Environment) -> Self {
        Self {
            config,
            environment,
        }
    }

    /// Loads the demo data set. Expects a migrated schema.
    pub async fn execute(&self) -> AppResult<SeedReport> {
        if self.environment.is_production() {
            return Err(AppError::Validation {
                field: "environment".to_string(),
                reason: "Refusing to load demo accounts into production".to_string(),
            });
        }
        self.config.database.validate()?;

        let pool = establish_async_connection_pool(&self.config.database).await?;
        let seeder = SeedService::new(pool, self.config.application.time_zone());
        let report = seeder.run().await?;

        if report.skipped {
            println!("Demo data already present ({} exists), nothing to do", ADMIN_EMAIL);
        } else {
            println!(
                "✓ Seeded {} users, {} technicians, {} customers, {} jobs, {} leads, {} invoices, {} memberships",
                report.users,
                report.technicians,
                report.customers,
                report.jobs,
                report.leads,
                report.invoices,
                report.memberships
            );
            println!("  Sign in as {} with password '{}'", ADMIN_EMAIL, DEMO_PASSWORD);
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_refuses_production() {
        let mut config = Settings::default();
        config.database.url = "postgres://localhost/hvacdesk".to_string();
        let handler = SeedCommandHandler::new(config, Environment::Production);
        assert!(matches!(
            handler.execute().await,
            Err(AppError::Validation { field, .. }) if field == "environment"
        ));
    }
}
