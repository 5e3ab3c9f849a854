//! Authentication route handlers.
//!
//! Login, registration, and logout against the local `users` collection.
//! Failures redirect back with a query-string error code; the pages map
//! codes to messages so nothing sensitive rides in the URL.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::{AppError, Result};
use crate::middleware::{OptionalAuth, clear_current_user, set_current_user};
use crate::models::Principal;
use crate::services::auth::{AuthError, AuthService};
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Query parameters for error/success display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
    pub success: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub user: Option<Principal>,
    pub error: Option<&'static str>,
    pub success: Option<&'static str>,
}

/// Register page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub user: Option<Principal>,
    pub error: Option<&'static str>,
}

/// Map a redirect error code to the message shown on the page.
fn error_message(code: &str) -> &'static str {
    match code {
        "credentials" => "Invalid email or password",
        "email_taken" => "An account with this email already exists",
        "invalid" => "Please fill in all fields with a valid email",
        "session" => "Could not start a session, please try again",
        _ => "Something went wrong, please try again",
    }
}

fn success_message(code: &str) -> &'static str {
    match code {
        "registered" => "Account created, you can log in now",
        _ => "Done",
    }
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
pub async fn login_page(
    OptionalAuth(user): OptionalAuth,
    Query(query): Query<MessageQuery>,
) -> LoginTemplate {
    LoginTemplate {
        user,
        error: query.error.as_deref().map(error_message),
        success: query.success.as_deref().map(success_message),
    }
}

/// Handle login form submission.
///
/// Verifies credentials and stores the principal in the session. Unknown
/// email and wrong password take the same redirect.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let principal = match AuthService::new(state.db())
        .login(&form.email, &form.password)
        .await
    {
        Ok(principal) => principal,
        Err(AuthError::InvalidCredentials) => {
            tracing::warn!("Login failed");
            return Ok(Redirect::to("/auth/login?error=credentials").into_response());
        }
        Err(e) => return Err(AppError::Auth(e)),
    };

    if let Err(e) = set_current_user(&session, &principal).await {
        tracing::error!("Failed to set session: {}", e);
        return Ok(Redirect::to("/auth/login?error=session").into_response());
    }

    Ok(Redirect::to("/").into_response())
}

// =============================================================================
// Registration Routes
// =============================================================================

/// Display the registration page.
pub async fn register_page(
    OptionalAuth(user): OptionalAuth,
    Query(query): Query<MessageQuery>,
) -> RegisterTemplate {
    RegisterTemplate {
        user,
        error: query.error.as_deref().map(error_message),
    }
}

/// Handle registration form submission.
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Response> {
    match AuthService::new(state.db())
        .signup(&form.username, &form.email, &form.password)
        .await
    {
        Ok(_) => Ok(Redirect::to("/auth/login?success=registered").into_response()),
        Err(AuthError::UserAlreadyExists) => {
            Ok(Redirect::to("/auth/register?error=email_taken").into_response())
        }
        Err(AuthError::InvalidEmail(_) | AuthError::MissingField(_)) => {
            Ok(Redirect::to("/auth/register?error=invalid").into_response())
        }
        Err(e) => Err(AppError::Auth(e)),
    }
}

// =============================================================================
// Logout Route
// =============================================================================

/// Handle logout.
///
/// Clears the principal and destroys the session.
pub async fn logout(session: Session) -> Response {
    if let Err(e) = clear_current_user(&session).await {
        tracing::error!("Failed to clear session: {}", e);
    }

    if let Err(e) = session.flush().await {
        tracing::error!("Failed to flush session: {}", e);
    }

    Redirect::to("/").into_response()
}
