use crate::domain::account::Account;
use crate::error::{AppError, Result};
use crate::storage::account_repo::AccountRepository;

const MIN_PASSWORD_LEN: usize = 4;

fn validate_registration(username: &str, password: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(AppError::BadRequest("username must not be blank".to_string()));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::BadRequest(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

#[derive(Clone, Debug)]
pub struct AccountService {
    repo: AccountRepository,
}

impl AccountService {
    #[must_use]
    pub const fn new(repo: AccountRepository) -> Self {
        Self { repo }
    }

    /// Registers a new account.
    ///
    /// # Errors
    /// Returns `AppError::BadRequest` if the username is blank, the password
    /// is too short, or the username is already taken.
    #[tracing::instrument(
        skip(self, username, password),
        fields(account_id = tracing::field::Empty),
        err(level = "warn")
    )]
    pub async fn register(&self, username: String, password: String) -> Result<Account> {
        validate_registration(&username, &password)?;

        if self.repo.find_by_username(&username).await?.is_some() {
            return Err(AppError::BadRequest("username already taken".to_string()));
        }

        let account = self.repo.create(&username, &password).await?;

        tracing::Span::current().record("account_id", account.account_id);
        tracing::info!("Account registered");

        Ok(account)
    }

    /// Logs an account in by exact credential match.
    ///
    /// # Errors
    /// Returns `AppError::AuthError` unless a stored record matches both
    /// username and password.
    #[tracing::instrument(
        skip(self, username, password),
        fields(account_id = tracing::field::Empty),
        err(level = "warn")
    )]
    pub async fn login(&self, username: String, password: String) -> Result<Account> {
        let Some(account) = self.repo.find_by_credentials(&username, &password).await? else {
            tracing::warn!("Login failed: invalid credentials");
            return Err(AppError::AuthError);
        };

        tracing::Span::current().record("account_id", account.account_id);
        tracing::info!("Account logged in");

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_username() {
        assert!(validate_registration("", "password").is_err());
        assert!(validate_registration("   ", "password").is_err());
    }

    #[test]
    fn rejects_short_password() {
        assert!(validate_registration("user", "abc").is_err());
    }

    #[test]
    fn accepts_four_char_password() {
        assert!(validate_registration("user", "abcd").is_ok());
    }
}
