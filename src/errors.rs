// src/errors.rs
use thiserror::Error;

/// Failures that can stop the server from starting.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

/// A missing or malformed request parameter.
///
/// The `Display` text is the sentence shown to the user, without the
/// `Error: ` prefix the page adds.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Meal name is required.")]
    MissingName,

    #[error("A single first letter is required.")]
    InvalidLetter,

    #[error("Ingredient name is required.")]
    MissingIngredient,

    #[error("Category name is required.")]
    MissingCategory,

    #[error("Area name is required.")]
    MissingArea,
}

impl ValidationError {
    /// The message as rendered on the page.
    pub fn user_message(&self) -> String {
        format!("Error: {}", self)
    }
}
