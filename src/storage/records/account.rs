use crate::domain::account::Account;

#[derive(sqlx::FromRow)]
pub(crate) struct AccountRecord {
    pub account_id: i64,
    pub username: String,
    pub password: String,
}

impl From<AccountRecord> for Account {
    fn from(record: AccountRecord) -> Self {
        Self {
            account_id: record.account_id,
            username: record.username,
            password: record.password,
        }
    }
}
