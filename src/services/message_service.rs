use crate::domain::message::Message;
use crate::error::{AppError, Result};
use crate::storage::account_repo::AccountRepository;
use crate::storage::message_repo::MessageRepository;

const MAX_MESSAGE_LEN: usize = 255;

fn validate_text(message_text: &str) -> Result<()> {
    if message_text.trim().is_empty() {
        return Err(AppError::BadRequest("message_text must not be blank".to_string()));
    }
    if message_text.chars().count() > MAX_MESSAGE_LEN {
        return Err(AppError::BadRequest(format!(
            "message_text must be at most {MAX_MESSAGE_LEN} characters"
        )));
    }
    Ok(())
}

#[derive(Clone, Debug)]
pub struct MessageService {
    repo: MessageRepository,
    accounts: AccountRepository,
}

impl MessageService {
    #[must_use]
    pub const fn new(repo: MessageRepository, accounts: AccountRepository) -> Self {
        Self { repo, accounts }
    }

    /// Creates a new message.
    ///
    /// # Errors
    /// Returns `AppError::BadRequest` if the text fails validation or
    /// `posted_by` does not reference an existing account.
    #[tracing::instrument(
        skip(self, message_text),
        fields(message_id = tracing::field::Empty),
        err(level = "warn")
    )]
    pub async fn create(&self, posted_by: i64, message_text: String, time_posted_epoch: i64) -> Result<Message> {
        validate_text(&message_text)?;

        if self.accounts.find_by_id(posted_by).await?.is_none() {
            return Err(AppError::BadRequest(
                "posted_by does not reference an existing account".to_string(),
            ));
        }

        let message = self.repo.create(posted_by, &message_text, time_posted_epoch).await?;

        tracing::Span::current().record("message_id", message.message_id);
        tracing::info!("Message created");

        Ok(message)
    }

    /// Returns every stored message, in storage order.
    ///
    /// # Errors
    /// Returns `AppError::Database` if the query fails.
    #[tracing::instrument(skip(self), err(level = "warn"))]
    pub async fn get_all(&self) -> Result<Vec<Message>> {
        self.repo.fetch_all().await
    }

    /// Looks a message up by id. Absence is not an error.
    ///
    /// # Errors
    /// Returns `AppError::Database` if the query fails.
    #[tracing::instrument(skip(self), err(level = "warn"))]
    pub async fn get_by_id(&self, message_id: i64) -> Result<Option<Message>> {
        self.repo.find_by_id(message_id).await
    }

    /// Deletes a message by id, returning the pre-deletion record if it
    /// existed. Absence is not an error.
    ///
    /// # Errors
    /// Returns `AppError::Database` if the deletion fails.
    #[tracing::instrument(skip(self), err(level = "warn"))]
    pub async fn delete(&self, message_id: i64) -> Result<Option<Message>> {
        let deleted = self.repo.delete(message_id).await?;
        if deleted.is_some() {
            tracing::info!("Message deleted");
        }
        Ok(deleted)
    }

    /// Overwrites a message's text.
    ///
    /// # Errors
    /// Returns `AppError::BadRequest` if the new text fails validation, or
    /// `AppError::NotFound` if no message with `message_id` exists.
    #[tracing::instrument(skip(self, message_text), err(level = "warn"))]
    pub async fn update(&self, message_id: i64, message_text: String) -> Result<Message> {
        validate_text(&message_text)?;

        let updated = self.repo.update_text(message_id, &message_text).await?.ok_or(AppError::NotFound)?;

        tracing::info!("Message updated");

        Ok(updated)
    }

    /// Returns all messages posted by the given account; empty if none.
    ///
    /// # Errors
    /// Returns `AppError::Database` if the query fails.
    #[tracing::instrument(skip(self), err(level = "warn"))]
    pub async fn get_by_user(&self, account_id: i64) -> Result<Vec<Message>> {
        self.repo.fetch_by_account(account_id).await
    }
}
