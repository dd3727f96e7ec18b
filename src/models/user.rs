//! User models

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::models::admin::Admin;
use crate::utils::password::PasswordHash;

/// Fields shared by every kind of account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: PasswordHash,
    pub registered_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(flatten)]
    pub profile: UserProfile,
    pub address: String,
    pub phone: String,
    pub payment_info: String,
}

/// An authenticated user of either kind
#[derive(Debug, Clone, PartialEq)]
pub enum Account {
    Customer(Customer),
    Admin(Admin),
}

impl Account {
    pub fn profile(&self) -> &UserProfile {
        match self {
            Account::Customer(customer) => &customer.profile,
            Account::Admin(admin) => &admin.profile,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Account::Admin(_))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterCustomerRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub address: String,
    pub phone: String,
    pub payment_info: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub email: String,
    /// Customer-only fields, ignored for admins
    pub address: Option<String>,
    pub phone: Option<String>,
    pub payment_info: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}
