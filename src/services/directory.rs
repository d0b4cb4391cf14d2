//! In-memory user directory.
//!
//! Built once at startup and read-only afterwards. A missing or unparsable
//! `USERS` document is not an error: the service always boots with the
//! built-in synthetic users instead.

use crate::models::User;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{info, warn};

const FALLBACK_USER_IDS: [&str; 26] = [
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r",
    "s", "t", "u", "v", "w", "x", "y", "z",
];

/// Why a `USERS` document was rejected
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("no user list configured")]
    Missing,

    #[error("invalid user list: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable email -> user mapping
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: HashMap<String, User>,
}

impl UserDirectory {
    /// Build from a list; a later duplicate email replaces an earlier one.
    pub fn from_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users
            .into_iter()
            .map(|user| (user.email.clone(), user))
            .collect();
        Self { users }
    }

    /// Parse a JSON array of users without any fallback.
    ///
    /// A bare `null` is a valid, empty list.
    pub fn try_from_json(raw: Option<&str>) -> Result<Self, DirectoryError> {
        let raw = raw.ok_or(DirectoryError::Missing)?;
        let users: Option<Vec<User>> = serde_json::from_str(raw)?;
        Ok(Self::from_users(users.unwrap_or_default()))
    }

    /// Parse a JSON array of users, substituting the synthetic set on failure.
    pub fn from_json(raw: Option<&str>, database: &str) -> Self {
        match Self::try_from_json(raw) {
            Ok(directory) => {
                info!(users = directory.len(), "Loaded user directory from USERS");
                directory
            }
            Err(DirectoryError::Missing) => {
                info!("USERS not set, using built-in user directory");
                Self::fallback(database)
            }
            Err(e) => {
                warn!(error = %e, "USERS could not be parsed, using built-in user directory");
                Self::fallback(database)
            }
        }
    }

    /// The 26 synthetic users `a`..`z`.
    ///
    /// Each gets email `{id}@{id}.com`, password `{id}` and a mobile number
    /// ending in its two-digit index.
    pub fn fallback(database: &str) -> Self {
        Self::from_users(FALLBACK_USER_IDS.iter().enumerate().map(|(i, id)| User {
            user_id: id.to_string(),
            email: format!("{id}@{id}.com"),
            mobile: format!("08999999{i:02}"),
            password: id.to_string(),
            database: database.to_string(),
        }))
    }

    /// Exact, case-sensitive lookup by email
    pub fn find(&self, email: &str) -> Option<&User> {
        self.users.get(email)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn emails(&self) -> impl Iterator<Item = &str> {
        self.users.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, email: &str) -> User {
        User {
            user_id: id.to_string(),
            email: email.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_fallback_has_26_users() {
        let dir = UserDirectory::fallback("shop");
        assert_eq!(dir.len(), 26);

        let a = dir.find("a@a.com").unwrap();
        assert_eq!(a.user_id, "a");
        assert_eq!(a.password, "a");
        assert_eq!(a.mobile, "0899999900");
        assert_eq!(a.database, "shop");

        let z = dir.find("z@z.com").unwrap();
        assert_eq!(z.mobile, "0899999925");
    }

    #[test]
    fn test_malformed_json_uses_fallback() {
        let dir = UserDirectory::from_json(Some("{not json"), "db");
        assert_eq!(dir.len(), 26);
        assert!(dir.find("m@m.com").is_some());
    }

    #[test]
    fn test_missing_json_uses_fallback() {
        let dir = UserDirectory::from_json(None, "db");
        assert_eq!(dir.len(), 26);
        assert!(matches!(
            UserDirectory::try_from_json(None),
            Err(DirectoryError::Missing)
        ));
    }

    #[test]
    fn test_configured_users_replace_fallback() {
        let raw = r#"[{"user_id":"u1","email":"one@example.com","mobile":"","password":"p","database":"x"}]"#;
        let dir = UserDirectory::from_json(Some(raw), "db");
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.find("one@example.com").unwrap().user_id, "u1");
        assert!(dir.find("a@a.com").is_none());
    }

    #[test]
    fn test_empty_array_is_a_valid_empty_directory() {
        let dir = UserDirectory::from_json(Some("[]"), "db");
        assert!(dir.is_empty());
    }

    #[test]
    fn test_null_document_is_an_empty_directory() {
        let dir = UserDirectory::from_json(Some("null"), "db");
        assert!(dir.is_empty());
        assert!(dir.find("a@a.com").is_none());
    }

    #[test]
    fn test_wrong_json_shape_uses_fallback() {
        let dir = UserDirectory::from_json(Some(r#"{"email":"a@a.com"}"#), "db");
        assert_eq!(dir.len(), 26);
    }

    #[test]
    fn test_duplicate_email_last_write_wins() {
        let dir = UserDirectory::from_users(vec![
            user("first", "dup@example.com"),
            user("second", "dup@example.com"),
        ]);
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.find("dup@example.com").unwrap().user_id, "second");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let dir = UserDirectory::from_users(vec![user("a", "a@a.com")]);
        assert!(dir.find("A@a.com").is_none());
        assert_eq!(dir.emails().collect::<Vec<_>>(), vec!["a@a.com"]);
    }
}
