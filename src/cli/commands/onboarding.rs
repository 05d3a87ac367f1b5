use clap::Subcommand;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::cli::utils::{output_error, output_success};
use crate::cli::OutputFormat;
use crate::onboarding::{OnboardingError, OnboardingService, PgOnboardingStore};

#[derive(Subcommand)]
pub enum OnboardingCommands {
    #[command(about = "Detect a user's onboarding state and route")]
    Detect {
        #[arg(help = "Tenant database name (tenant_*)")]
        database: String,
        #[arg(help = "User id")]
        user_id: Uuid,
    },
}

pub async fn handle(cmd: OnboardingCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        OnboardingCommands::Detect { database, user_id } => {
            let service = OnboardingService::new(Arc::new(PgOnboardingStore::new()));

            match service.inspect(&database, user_id).await {
                Ok((decision, facts)) => {
                    let message = format!("{} -> {}", decision.state, decision.route);
                    output_success(
                        output_format,
                        &message,
                        Some(json!({ "route": decision.route, "state": decision.state, "facts": facts })),
                    )
                }
                Err(e) => {
                    let code = match e {
                        OnboardingError::UserNotFound(_) => "NOT_FOUND",
                        OnboardingError::DataAccess(_) => "DATA_ACCESS_FAILURE",
                    };
                    output_error(output_format, &e.to_string(), Some(code))?;
                    Err(e.into())
                }
            }
        }
    }
}
