use clap::Subcommand;
use serde_json::json;
use uuid::Uuid;

use crate::auth::{generate_jwt, Claims};
use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::config;
use crate::onboarding::{Role, RoleSet};

#[derive(Subcommand)]
pub enum TokenCommands {
    #[command(about = "Mint a bearer token signed with JWT_SECRET")]
    Issue {
        #[arg(long, help = "Tenant name")]
        tenant: String,
        #[arg(long, help = "Tenant database name (tenant_*)")]
        database: String,
        #[arg(long, help = "User id")]
        user_id: Uuid,
        #[arg(long = "role", required = true, help = "Role (ADMIN, COACH, CLIENT); repeatable")]
        roles: Vec<Role>,
        #[arg(long, help = "Expiry in hours (defaults to SECURITY_JWT_EXPIRY_HOURS)")]
        hours: Option<u64>,
    },
}

pub async fn handle(cmd: TokenCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        TokenCommands::Issue {
            tenant,
            database,
            user_id,
            roles,
            hours,
        } => {
            let security = &config::config().security;
            let hours = hours.unwrap_or(security.jwt_expiry_hours);
            let claims = Claims::new(tenant, database, user_id, RoleSet::new(roles), hours);
            let token = generate_jwt(&claims, &security.jwt_secret)?;

            match output_format {
                OutputFormat::Json => output_success(
                    output_format,
                    "Token issued",
                    Some(json!({ "token": token, "expires_at": claims.exp })),
                ),
                OutputFormat::Text => {
                    println!("{}", token);
                    Ok(())
                }
            }
        }
    }
}
