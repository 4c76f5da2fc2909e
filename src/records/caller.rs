use crate::types::UserId;

const DEVELOPMENT_DOMAIN: &str = "@example.com";

/// The authenticated identity an operation runs on behalf of.
///
/// Produced by whatever verified the request token; nothing in this crate
/// talks to the identity provider directly.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Caller {
    pub uid: UserId,
    pub email: String
}

impl Caller {
    pub fn new(uid: impl Into<UserId>, email: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: email.into()
        }
    }

    /// Development identities may read every user's records.
    pub fn is_development(&self) -> bool {
        self.email.ends_with(DEVELOPMENT_DOMAIN)
    }

    pub fn can_read(&self, user_id: &str) -> bool {
        self.uid == user_id || self.is_development()
    }

    pub fn can_write(&self, user_id: &str) -> bool {
        self.uid == user_id
    }
}
