//! Login and registration.

use sampah_client::AccountApi;
use sampah_core::entities::{Login, Registration};

use crate::error::AuthError;
use crate::session::Session;

/// Raw sign-up form values.
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub username: String,
    pub phone_number: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Validate, call `POST /api/login`, and store the returned credential.
///
/// # Errors
///
/// `AuthError::Validation` before any request if a field is blank; otherwise
/// the client error or a token store failure.
pub async fn login<A: AccountApi>(
    api: &A,
    session: &Session,
    username: &str,
    password: &str,
) -> Result<(), AuthError> {
    let login = Login::new(username, password)?;
    let credential = api.login(&login).await?;
    session.sign_in(credential)?;
    tracing::info!(username = %login.username, "logged in");
    Ok(())
}

/// Validate, call `POST /api/register`, and sign in if a token came back.
///
/// Returns whether the session is now signed in.
///
/// # Errors
///
/// `AuthError::Validation` for the first failed form rule; otherwise the
/// client error or a token store failure.
pub async fn register<A: AccountApi>(
    api: &A,
    session: &Session,
    form: &RegisterForm,
) -> Result<bool, AuthError> {
    let registration = Registration::new(
        &form.username,
        &form.phone_number,
        &form.email,
        &form.password,
        &form.confirm_password,
    )?;
    match api.register(&registration).await? {
        Some(credential) => {
            session.sign_in(credential)?;
            Ok(true)
        }
        None => Ok(false),
    }
}
