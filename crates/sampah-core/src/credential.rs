use std::fmt;

/// Opaque bearer token identifying the logged-in user.
///
/// `Debug` never prints the token itself.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw token. Returns `None` for blank input.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    /// The raw token, for storage and the `Authorization` header.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_token_is_rejected() {
        assert!(Credential::new("").is_none());
        assert!(Credential::new("  \n").is_none());
    }

    #[test]
    fn token_is_trimmed() {
        let credential = Credential::new(" abc.def \n").expect("non-empty");
        assert_eq!(credential.expose(), "abc.def");
        assert_eq!(credential.bearer(), "Bearer abc.def");
    }

    #[test]
    fn debug_hides_token() {
        let credential = Credential::new("secret-token").expect("non-empty");
        assert_eq!(format!("{credential:?}"), "Credential(***)");
    }
}
