//! Error handling for GrandPrix
//!
//! This module defines the main error type used throughout the booking core
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for GrandPrix operations
#[derive(Error, Debug)]
pub enum GrandPrixError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: i64 },

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: i64 },

    #[error("Booking not found: {booking_id}")]
    BookingNotFound { booking_id: i64 },

    #[error("Payment not found: {payment_id}")]
    PaymentNotFound { payment_id: i64 },

    #[error("Discount not found: {discount_id}")]
    DiscountNotFound { discount_id: i64 },

    #[error("Not enough tickets for event {event_id}: requested {requested}, remaining {remaining}")]
    CapacityExceeded { event_id: i64, requested: u32, remaining: i64 },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Cannot delete {entity} {id}: {dependents} dependent booking(s) exist")]
    DependencyExists { entity: &'static str, id: i64, dependents: usize },

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for GrandPrix operations
pub type Result<T> = std::result::Result<T, GrandPrixError>;

impl GrandPrixError {
    /// Check if the error can be fixed by the caller re-submitting corrected input
    pub fn is_recoverable(&self) -> bool {
        match self {
            GrandPrixError::Config(_) => false,
            GrandPrixError::ConfigLoad(_) => false,
            GrandPrixError::UserNotFound { .. } => true,
            GrandPrixError::EventNotFound { .. } => true,
            GrandPrixError::BookingNotFound { .. } => true,
            GrandPrixError::PaymentNotFound { .. } => true,
            GrandPrixError::DiscountNotFound { .. } => true,
            GrandPrixError::CapacityExceeded { .. } => true,
            GrandPrixError::Validation(_) => true,
            GrandPrixError::Conflict(_) => true,
            GrandPrixError::DependencyExists { .. } => true,
            GrandPrixError::InvalidStateTransition { .. } => false,
            GrandPrixError::Authentication(_) => true,
            GrandPrixError::Serialization(_) => false,
            GrandPrixError::Io(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GrandPrixError::Config(_) => ErrorSeverity::Critical,
            GrandPrixError::ConfigLoad(_) => ErrorSeverity::Critical,
            GrandPrixError::Serialization(_) => ErrorSeverity::Critical,
            GrandPrixError::Io(_) => ErrorSeverity::Error,
            GrandPrixError::Authentication(_) => ErrorSeverity::Warning,
            GrandPrixError::InvalidStateTransition { .. } => ErrorSeverity::Warning,
            GrandPrixError::DependencyExists { .. } => ErrorSeverity::Warning,
            _ => ErrorSeverity::Info,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_errors_are_user_correctable() {
        let err = GrandPrixError::CapacityExceeded { event_id: 201, requested: 3, remaining: 1 };
        assert!(err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Info);
        assert_eq!(
            err.to_string(),
            "Not enough tickets for event 201: requested 3, remaining 1"
        );
    }

    #[test]
    fn test_storage_errors_are_not_recoverable() {
        let err = GrandPrixError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        assert!(!err.is_recoverable());
        assert_eq!(err.severity().to_string(), "ERROR");
    }
}
