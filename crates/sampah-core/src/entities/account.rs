use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

const MIN_PASSWORD_LEN: usize = 6;

/// Body of `POST /api/login`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Login {
    pub username: String,
    pub password: String,
}

impl Login {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if either field is blank.
    pub fn new(username: &str, password: &str) -> Result<Self, CoreError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(CoreError::Validation(
                "username and password are required".into(),
            ));
        }
        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

/// Body of `POST /api/register`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Registration {
    pub username: String,
    pub phone_number: String,
    pub email: String,
    pub password: String,
}

impl Registration {
    /// Validate the sign-up form.
    ///
    /// Checks run in the order the form reports them: missing fields, password
    /// confirmation, email shape, password length.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` describing the first failed rule.
    pub fn new(
        username: &str,
        phone_number: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<Self, CoreError> {
        let username = username.trim();
        let phone_number = phone_number.trim();
        let email = email.trim();

        if [username, phone_number, email, password, confirm_password]
            .iter()
            .any(|field| field.is_empty())
        {
            return Err(CoreError::Validation("all fields are required".into()));
        }
        if password != confirm_password {
            return Err(CoreError::Validation("passwords do not match".into()));
        }
        if !email.contains('@') {
            return Err(CoreError::Validation("email must contain '@'".into()));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(CoreError::Validation(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        Ok(Self {
            username: username.to_string(),
            phone_number: phone_number.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}
