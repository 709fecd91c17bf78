use crate::domain::account::Account;
use crate::error::Result;
use crate::storage::DbPool;
use crate::storage::records::account::AccountRecord;

#[derive(Clone, Debug)]
pub struct AccountRepository {
    pool: DbPool,
}

impl AccountRepository {
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, username: &str, password: &str) -> Result<Account> {
        let record = sqlx::query_as::<_, AccountRecord>(
            r#"
            INSERT INTO account (username, password)
            VALUES (?, ?)
            RETURNING account_id, username, password
            "#,
        )
        .bind(username)
        .bind(password)
        .fetch_one(&self.pool)
        .await?;

        Ok(record.into())
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<Account>> {
        let record = sqlx::query_as::<_, AccountRecord>(
            r#"
            SELECT account_id, username, password
            FROM account
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(Into::into))
    }

    pub async fn find_by_id(&self, account_id: i64) -> Result<Option<Account>> {
        let record = sqlx::query_as::<_, AccountRecord>(
            r#"
            SELECT account_id, username, password
            FROM account
            WHERE account_id = ?
            "#,
        )
        .bind(account_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(Into::into))
    }

    pub async fn find_by_credentials(&self, username: &str, password: &str) -> Result<Option<Account>> {
        let record = sqlx::query_as::<_, AccountRecord>(
            r#"
            SELECT account_id, username, password
            FROM account
            WHERE username = ? AND password = ?
            "#,
        )
        .bind(username)
        .bind(password)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(Into::into))
    }
}
