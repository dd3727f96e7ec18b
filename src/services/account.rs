//! Account service implementation
//!
//! This service handles customer registration, sign-in for both account
//! kinds, profile edits and password changes.

use chrono::Utc;
use tracing::{debug, info, warn};
use crate::database::DataManager;
use crate::models::{
    Account, ChangePasswordRequest, Customer, RegisterCustomerRequest, UpdateProfileRequest, UserProfile,
};
use crate::utils::errors::{GrandPrixError, Result};
use crate::utils::helpers::{is_valid_email, normalize_whitespace};
use crate::utils::password::PasswordHash;

/// Account service for identity operations
#[derive(Debug, Clone, Default)]
pub struct AccountService;

impl AccountService {
    pub fn new() -> Self {
        Self
    }

    /// Register a new customer account
    pub fn register_customer(&self, manager: &mut DataManager, request: RegisterCustomerRequest) -> Result<Customer> {
        let name = normalize_whitespace(&request.name);
        let email = request.email.trim().to_string();

        let required = [&name, &email, &request.password, &request.address, &request.phone, &request.payment_info];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(GrandPrixError::Validation("All fields are required".to_string()));
        }
        if !is_valid_email(&email) {
            return Err(GrandPrixError::Validation("Invalid email format".to_string()));
        }
        if manager.find_account_by_email(&email).is_some() {
            return Err(GrandPrixError::Conflict("Email already registered".to_string()));
        }

        let id = manager.next_customer_id();
        let customer = manager.add_customer(Customer {
            profile: UserProfile {
                id,
                name,
                email,
                password: PasswordHash::new(&request.password),
                registered_at: Utc::now(),
            },
            address: request.address.trim().to_string(),
            phone: request.phone.trim().to_string(),
            payment_info: request.payment_info.trim().to_string(),
        })?;

        info!(user_id = customer.profile.id, "New customer registered successfully");
        Ok(customer)
    }

    /// Sign in with email and password. Customers are checked before admins;
    /// admins must be active.
    pub fn authenticate(&self, manager: &DataManager, email: &str, password: &str) -> Result<Account> {
        debug!(email = %email.trim(), "Authenticating account");

        let account = manager
            .find_account_by_email(email.trim())
            .filter(|account| account.profile().password.verify(password))
            .ok_or_else(|| {
                warn!("Failed sign-in attempt");
                GrandPrixError::Authentication("Invalid email or password".to_string())
            })?;

        if let Account::Admin(admin) = &account {
            if !admin.status.can_sign_in() {
                warn!(user_id = admin.profile.id, status = %admin.status, "Sign-in refused for admin");
                return Err(GrandPrixError::Authentication(format!("Account is {}", admin.status)));
            }
        }

        info!(user_id = account.profile().id, admin = account.is_admin(), "Account signed in");
        Ok(account)
    }

    /// Update name and email, plus the contact fields for customers
    pub fn update_profile(&self, manager: &mut DataManager, account: &Account, request: UpdateProfileRequest) -> Result<Account> {
        let name = normalize_whitespace(&request.name);
        let email = request.email.trim().to_string();

        if name.is_empty() || email.is_empty() {
            return Err(GrandPrixError::Validation("Name and email cannot be empty".to_string()));
        }
        if !is_valid_email(&email) {
            return Err(GrandPrixError::Validation("Invalid email format".to_string()));
        }
        if let Some(owner) = manager.find_account_by_email(&email) {
            if !same_account(&owner, account) {
                return Err(GrandPrixError::Conflict("Email is already used by another account".to_string()));
            }
        }

        match account {
            Account::Customer(current) => {
                let user_id = current.profile.id;
                let mut customer = manager.customers.find_by_id(user_id).ok_or(GrandPrixError::UserNotFound { user_id })?;

                let address = request.address.unwrap_or_else(|| customer.address.clone());
                let phone = request.phone.unwrap_or_else(|| customer.phone.clone());
                if address.trim().is_empty() || phone.trim().is_empty() {
                    return Err(GrandPrixError::Validation("Address and phone cannot be empty".to_string()));
                }

                customer.profile.name = name;
                customer.profile.email = email;
                customer.address = address.trim().to_string();
                customer.phone = phone.trim().to_string();
                if let Some(payment_info) = request.payment_info {
                    customer.payment_info = payment_info.trim().to_string();
                }

                manager.customers.update(customer.clone())?;
                info!(user_id, "Customer profile updated successfully");
                Ok(Account::Customer(customer))
            }
            Account::Admin(current) => {
                let user_id = current.profile.id;
                let mut admin = manager.admins.find_by_id(user_id).ok_or(GrandPrixError::UserNotFound { user_id })?;
                admin.profile.name = name;
                admin.profile.email = email;

                manager.admins.update(admin.clone())?;
                info!(user_id, "Admin profile updated successfully");
                Ok(Account::Admin(admin))
            }
        }
    }

    /// Replace the password after checking the current one
    pub fn change_password(&self, manager: &mut DataManager, account: &Account, request: ChangePasswordRequest) -> Result<()> {
        if request.current_password.is_empty() || request.new_password.is_empty() || request.confirm_password.is_empty() {
            return Err(GrandPrixError::Validation("All password fields are required".to_string()));
        }
        if request.new_password != request.confirm_password {
            return Err(GrandPrixError::Validation("New passwords do not match".to_string()));
        }

        match account {
            Account::Customer(current) => {
                let user_id = current.profile.id;
                let mut customer = manager.customers.find_by_id(user_id).ok_or(GrandPrixError::UserNotFound { user_id })?;
                if !customer.profile.password.verify(&request.current_password) {
                    return Err(GrandPrixError::Authentication("Current password is incorrect".to_string()));
                }
                customer.profile.password = PasswordHash::new(&request.new_password);
                manager.customers.update(customer)?;
                info!(user_id, "Customer password changed");
            }
            Account::Admin(current) => {
                let user_id = current.profile.id;
                let mut admin = manager.admins.find_by_id(user_id).ok_or(GrandPrixError::UserNotFound { user_id })?;
                if !admin.profile.password.verify(&request.current_password) {
                    return Err(GrandPrixError::Authentication("Current password is incorrect".to_string()));
                }
                admin.profile.password = PasswordHash::new(&request.new_password);
                manager.admins.update(admin)?;
                info!(user_id, "Admin password changed");
            }
        }
        Ok(())
    }
}

fn same_account(a: &Account, b: &Account) -> bool {
    a.is_admin() == b.is_admin() && a.profile().id == b.profile().id
}
