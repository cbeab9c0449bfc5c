//! Driving port for the admin login check.
//!
//! Inbound adapters call it to verify the admin password without knowing
//! where the password is stored. Handler tests substitute a double.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials};

pub(crate) const WRONG_PASSWORD_MESSAGE: &str = "비밀번호가 올바르지 않습니다.";

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Succeeds when `credentials` match the stored admin password.
    ///
    /// # Errors
    ///
    /// Fails with an unauthorized error on mismatch.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<(), Error>;
}

/// Development authenticator accepting the password `admin`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLoginService;

#[async_trait]
impl LoginService for FixtureLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<(), Error> {
        if credentials.matches("admin") {
            Ok(())
        } else {
            Err(Error::unauthorized(WRONG_PASSWORD_MESSAGE))
        }
    }
}
