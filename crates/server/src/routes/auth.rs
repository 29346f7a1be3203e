//! Authentication route handlers.
//!
//! Handles login and logout against the local `users` table.

use axum::{
    Form, Json,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::Result;
use crate::middleware::{OptionalAuth, clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::services::AuthService;
use crate::services::auth::AuthError;
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Query parameters for error display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
}

/// Login view model.
#[derive(Debug, Serialize)]
pub struct LoginView {
    pub error: Option<String>,
}

/// Redirect the root path to the login page.
pub async fn home() -> Redirect {
    Redirect::to("/login")
}

/// Display the login view.
///
/// A clerk who is already signed in is sent straight to the order form.
pub async fn login_page(
    OptionalAuth(user): OptionalAuth,
    Query(query): Query<MessageQuery>,
) -> Response {
    if user.is_some() {
        return Redirect::to("/index").into_response();
    }

    Json(LoginView { error: query.error }).into_response()
}

/// Handle login form submission.
///
/// On success the clerk's identity is stored in the session and the
/// browser is sent to the order form. Wrong password and unknown
/// username land on the same redirect.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let auth = AuthService::new(state.pool());

    match auth
        .login_with_password(&form.username, &form.password)
        .await
    {
        Ok(user) => {
            let current = CurrentUser {
                id: user.id,
                username: user.username.to_string(),
            };
            set_current_user(&session, &current).await?;

            tracing::info!(user = %current.username, "Login");
            Ok(Redirect::to("/index").into_response())
        }
        Err(AuthError::InvalidCredentials) => {
            tracing::warn!(user = %form.username, "Login failed");
            Ok(Redirect::to("/login?error=credentials").into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// Close the session and return to the login page.
pub async fn logout(session: Session) -> Result<Redirect> {
    clear_current_user(&session).await?;
    Ok(Redirect::to("/login"))
}
