//! Clerk account management.
//!
//! # Usage
//!
//! ```bash
//! # Password on the command line
//! pronto-cli user create -u mostrador1 -p "s3cret-pass"
//!
//! # Password read from stdin (keeps it out of shell history)
//! echo "s3cret-pass" | pronto-cli user create -u mostrador1
//! ```

use std::io::BufRead;

use secrecy::SecretString;
use thiserror::Error;

use pronto_server::services::AuthService;
use pronto_server::services::auth::AuthError;

#[derive(Debug, Error)]
pub enum UserCommandError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Could not read password from stdin: {0}")]
    PasswordRead(#[from] std::io::Error),

    #[error("{0}")]
    Auth(#[from] AuthError),
}

/// Create a new clerk account.
///
/// When `password` is `None`, a single line is read from stdin instead.
///
/// # Errors
///
/// Returns [`UserCommandError`] if configuration, input, hashing, or the
/// insert fails (including a taken username).
pub async fn create(username: &str, password: Option<&str>) -> Result<(), UserCommandError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("PRONTO_DATABASE_URL")
        .map(SecretString::from)
        .map_err(|_| UserCommandError::MissingEnvVar("PRONTO_DATABASE_URL"))?;

    let password = match password {
        Some(p) => p.to_owned(),
        None => read_password_line()?,
    };

    let pool = pronto_server::db::create_pool(&database_url).await?;

    let user = AuthService::new(&pool)
        .create_user(username, &password)
        .await?;

    tracing::info!(id = %user.id, username = %user.username, "Clerk account created");
    Ok(())
}

/// Read one line from stdin, trimming the trailing newline.
fn read_password_line() -> Result<String, std::io::Error> {
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}
