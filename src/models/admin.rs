//! Admin model

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::models::user::UserProfile;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Admin {
    #[serde(flatten)]
    pub profile: UserProfile,
    pub role: String,
    pub employee_id: i64,
    pub status: AccountStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    Active,
    Inactive,
    Suspended,
}

impl AccountStatus {
    /// Only active accounts may sign in
    pub fn can_sign_in(&self) -> bool {
        matches!(self, AccountStatus::Active)
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountStatus::Active => write!(f, "Active"),
            AccountStatus::Inactive => write!(f, "Inactive"),
            AccountStatus::Suspended => write!(f, "Suspended"),
        }
    }
}
