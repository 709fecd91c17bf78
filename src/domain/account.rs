/// A registered user. Credentials are stored and compared as plaintext;
/// the record is immutable after registration.
#[derive(Debug, Clone)]
pub struct Account {
    pub(crate) account_id: i64,
    pub(crate) username: String,
    pub(crate) password: String,
}
