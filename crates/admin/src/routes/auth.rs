//! Admin authentication route handlers.

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
use crate::middleware::{clear_current_admin, set_current_admin};
use crate::services::auth::{AuthError, AuthService};
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Query parameters for error display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<&'static str>,
}

fn error_message(code: &str) -> &'static str {
    match code {
        "credentials" => "Invalid email or password",
        "session" => "Could not start a session, please try again",
        _ => "Something went wrong, please try again",
    }
}

/// Display the login page.
pub async fn login_page(Query(query): Query<MessageQuery>) -> LoginTemplate {
    LoginTemplate {
        error: query.error.as_deref().map(error_message),
    }
}

/// Handle login form submission.
///
/// The account must carry `isAdmin`; a valid password on a regular account
/// fails the same way as a wrong password.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let admin = match AuthService::new(state.db())
        .login(&form.email, &form.password)
        .await
    {
        Ok(admin) => admin,
        Err(AuthError::InvalidCredentials) => {
            tracing::warn!("Admin login failed");
            return Ok(Redirect::to("/auth/login?error=credentials").into_response());
        }
        Err(e) => return Err(AppError::Auth(e)),
    };

    if let Err(e) = set_current_admin(&session, &admin).await {
        tracing::error!("Failed to set session: {}", e);
        return Ok(Redirect::to("/auth/login?error=session").into_response());
    }

    Ok(Redirect::to("/products/new").into_response())
}

/// Handle logout.
pub async fn logout(session: Session) -> Response {
    if let Err(e) = clear_current_admin(&session).await {
        tracing::error!("Failed to clear session: {}", e);
    }

    if let Err(e) = session.flush().await {
        tracing::error!("Failed to flush session: {}", e);
    }

    Redirect::to("/auth/login").into_response()
}
