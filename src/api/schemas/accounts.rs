use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct Account {
    pub account_id: i64,
    pub username: String,
    pub password: String,
}

impl From<crate::domain::account::Account> for Account {
    fn from(account: crate::domain::account::Account) -> Self {
        Self {
            account_id: account.account_id,
            username: account.username,
            password: account.password,
        }
    }
}
