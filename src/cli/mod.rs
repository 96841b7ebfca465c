//! Command-line front end for the auth workflow.
//!
//! Each subcommand runs one workflow operation against PostgreSQL and the
//! configured refresh-token backend and prints the result as JSON on stdout.

use anyhow::Context;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use serde_json::json;

use authgate_config::{DatabaseConfig, RefreshStoreBackend, RefreshStoreConfig};
use authgate_db::{init_db_pool, run_migrations};
use authgate_models::{LoginRequest, RefreshTokenRequest, RegisterRequest};

use crate::state::{AppState, init_app_state};
use crate::validator::validate_request;

#[derive(Parser)]
#[command(name = "authgate")]
#[command(about = "authgate - user registration, login and token refresh", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a new account and print its access token
    Register {
        /// Email address (the account identity)
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Display name
        #[arg(short = 'u', long)]
        username: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Log in and print an access token and a refresh token
    Login {
        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Exchange a refresh token for a new access token
    Refresh {
        /// Email address the refresh token was issued to
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Refresh token from a previous login
        #[arg(short = 't', long)]
        refresh_token: Option<String>,
    },
    /// Create the users table
    Migrate,
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    if matches!(cli.command, Commands::Refresh { .. }) {
        ensure_shared_registry(&RefreshStoreConfig::from_env())?;
    }

    let db = init_db_pool(&DatabaseConfig::from_env()).await?;

    match cli.command {
        Commands::Register {
            email,
            username,
            password,
        } => {
            let state = init_app_state(db).await?;
            handle_register(&state, email, username, password).await
        }
        Commands::Login { email, password } => {
            let state = init_app_state(db).await?;
            handle_login(&state, email, password).await
        }
        Commands::Refresh {
            email,
            refresh_token,
        } => {
            let state = init_app_state(db).await?;
            handle_refresh(&state, email, refresh_token).await
        }
        Commands::Migrate => {
            run_migrations(&db).await?;
            println!("✅ Migrations applied");
            Ok(())
        }
    }
}

async fn handle_register(
    state: &AppState,
    email: Option<String>,
    username: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let request = RegisterRequest {
        email: prompt_text(email, "Email address")?,
        username: prompt_text(username, "Username")?,
        password: match password {
            Some(password) => password,
            None => Password::new()
                .with_prompt("Password")
                .with_confirmation("Confirm password", "Passwords don't match")
                .interact()
                .context("Failed to read password")?,
        },
    };
    validate_request(&request)?;

    let access_token = state
        .auth
        .register(&request.email, &request.username, &request.password)
        .await?;

    print_json(&json!({ "accessToken": access_token }))
}

async fn handle_login(
    state: &AppState,
    email: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let request = LoginRequest {
        email: prompt_text(email, "Email address")?,
        password: prompt_password(password)?,
    };
    validate_request(&request)?;

    let tokens = state.auth.login(&request.email, &request.password).await?;

    print_json(&tokens)
}

async fn handle_refresh(
    state: &AppState,
    email: Option<String>,
    refresh_token: Option<String>,
) -> anyhow::Result<()> {
    let request = RefreshTokenRequest {
        email: prompt_text(email, "Email address")?,
        refresh_token: prompt_text(refresh_token, "Refresh token")?,
    };
    validate_request(&request)?;

    let access_token = state
        .auth
        .refresh_access_token(&request.email, &request.refresh_token)
        .await?;

    print_json(&json!({ "accessToken": access_token }))
}

/// Each CLI run starts with an empty in-memory registry, so refreshing a token
/// issued by an earlier run needs the Redis backend.
fn ensure_shared_registry(config: &RefreshStoreConfig) -> anyhow::Result<()> {
    if config.backend == RefreshStoreBackend::Memory {
        anyhow::bail!(
            "refresh needs a registry shared between runs; set REFRESH_TOKEN_BACKEND=redis"
        );
    }
    Ok(())
}

fn prompt_text(value: Option<String>, prompt: &str) -> anyhow::Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Input::<String>::new()
            .with_prompt(prompt)
            .interact_text()
            .with_context(|| format!("Failed to read {}", prompt.to_lowercase())),
    }
}

fn prompt_password(value: Option<String>) -> anyhow::Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Password::new()
            .with_prompt("Password")
            .interact()
            .context("Failed to read password"),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_requires_shared_registry() {
        let memory = RefreshStoreConfig::default();
        let err = ensure_shared_registry(&memory).unwrap_err();
        assert!(err.to_string().contains("REFRESH_TOKEN_BACKEND=redis"));

        let redis = RefreshStoreConfig {
            backend: RefreshStoreBackend::Redis,
            ..RefreshStoreConfig::default()
        };
        assert!(ensure_shared_registry(&redis).is_ok());
    }

    #[test]
    fn test_parse_refresh_command() {
        let cli = Cli::try_parse_from([
            "authgate", "refresh", "--email", "a@x.com", "--refresh-token", "tok",
        ])
        .unwrap();

        match cli.command {
            Commands::Refresh {
                email,
                refresh_token,
            } => {
                assert_eq!(email.as_deref(), Some("a@x.com"));
                assert_eq!(refresh_token.as_deref(), Some("tok"));
            }
            _ => panic!("expected refresh command"),
        }
    }
}
