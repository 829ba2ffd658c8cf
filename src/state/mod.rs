pub mod form;
pub mod ui;

pub use form::{FormEffect, FormEvent, FormFocus, FormPhase, LoginFormState, SelectorRow};
pub use ui::{Route, UiState};

/// Application error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    DirectoryFetch(String),
    Validation(ValidationError),
    Submission(String),
}

/// Validation failures for the login form, checked in fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingSelection,
    CollegeNotListed,
    MissingFields,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingSelection => write!(f, "Please select your college first."),
            ValidationError::CollegeNotListed => write!(f, "College not registered."),
            ValidationError::MissingFields => write!(f, "Please fill all fields."),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::DirectoryFetch(msg) => write!(f, "Network Error: {}", msg),
            AppError::Validation(err) => write!(f, "{}", err),
            AppError::Submission(msg) => write!(f, "Login failed: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

pub type AppResult<T> = Result<T, AppError>;
