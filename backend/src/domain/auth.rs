//! Admin login credentials.
//!
//! The admin panel authenticates with a single shared password stored in the
//! roster document. Inbound adapters build [`LoginCredentials`] through the
//! validating constructor before calling the login port.

use std::fmt;

use zeroize::Zeroizing;

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Password was missing or empty.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated admin credentials.
///
/// ## Invariants
/// - `password` is non-empty. Surrounding whitespace is kept so the
///   comparison against the stored value is exact.
///
/// # Examples
/// ```
/// use roster::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_password("hunter2").unwrap();
/// assert!(creds.matches("hunter2"));
/// assert!(!creds.matches("hunter3"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from the raw password input.
    pub fn try_from_password(password: &str) -> Result<Self, LoginValidationError> {
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Compare against the stored admin password.
    ///
    /// An empty stored password never matches, so a roster document created
    /// without an initial password cannot be logged into.
    pub fn matches(&self, stored: &str) -> bool {
        !stored.is_empty() && self.password.as_str() == stored
    }
}
