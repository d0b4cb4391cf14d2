//! User record held by the directory.

use serde::{Deserialize, Serialize};

/// A pre-provisioned user.
///
/// `password` is accepted on input and never written back out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub user_id: String,
    pub email: String,
    pub mobile: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub database: String,
}
