//! Integration tests for Pronto Pizza.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and apply migrations
//! cargo run -p pronto-cli -- migrate
//!
//! # Create the test clerk the tests log in as
//! cargo run -p pronto-cli -- user create -u prueba -p "prueba-pass"
//!
//! # Start the server
//! cargo run -p pronto-server
//!
//! # Run integration tests
//! cargo test -p pronto-integration-tests -- --ignored
//! ```
//!
//! # Environment
//!
//! - `PRONTO_BASE_URL` - Server under test (default: `http://localhost:3000`)
//! - `PRONTO_TEST_USER` / `PRONTO_TEST_PASSWORD` - Clerk credentials
//!   (default: `prueba` / `prueba-pass`)

use reqwest::Client;

/// Base URL for the server under test.
#[must_use]
pub fn base_url() -> String {
    std::env::var("PRONTO_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned())
}

/// Test clerk credentials.
#[must_use]
pub fn test_credentials() -> (String, String) {
    let user = std::env::var("PRONTO_TEST_USER").unwrap_or_else(|_| "prueba".to_owned());
    let password =
        std::env::var("PRONTO_TEST_PASSWORD").unwrap_or_else(|_| "prueba-pass".to_owned());
    (user, password)
}

/// Create an HTTP client with a cookie store, so the session survives
/// across requests like a browser's would.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// Create a client and log it in as the test clerk.
///
/// # Panics
///
/// Panics if the server is unreachable or the credentials are rejected.
pub async fn logged_in_client() -> Client {
    let client = client();
    let base_url = base_url();
    let (username, password) = test_credentials();

    let resp = client
        .post(format!("{base_url}/login"))
        .form(&[("username", username.as_str()), ("password", password.as_str())])
        .send()
        .await
        .expect("Failed to log in");

    // A successful login redirects to /index; a failed one back to /login
    assert!(
        !resp.url().path().contains("login"),
        "login rejected - create the test clerk first (see crate docs)"
    );

    client
}
