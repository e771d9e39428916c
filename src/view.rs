// src/view.rs
use crate::errors::ValidationError;
use crate::models::FetchResult;
use crate::query::QueryKind;

pub const HOME_ICON: &str = "🍽️";
pub const HOME_TITLE: &str = "Welcome to MealDB Explorer!";
pub const HOME_MESSAGE: &str = "Discover amazing recipes from around the world! Use the navigation above to search for meals, explore categories, or try a random recipe.";

/// Everything a page needs to render. Built fresh for each request.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub icon: &'static str,
    pub title: String,
    pub message: Option<String>,
    /// Which input form to show, if any.
    pub active_form: Option<QueryKind>,
    pub result: Option<FetchResult>,
}

impl ViewModel {
    pub fn home() -> Self {
        Self {
            icon: HOME_ICON,
            title: HOME_TITLE.to_string(),
            message: Some(HOME_MESSAGE.to_string()),
            active_form: None,
            result: None,
        }
    }

    /// An empty input form with its instructions.
    pub fn form(kind: QueryKind) -> Self {
        let descriptor = kind.descriptor();
        Self {
            icon: descriptor.icon,
            title: descriptor.form_title.to_string(),
            message: Some(descriptor.form_message.to_string()),
            active_form: Some(kind),
            result: None,
        }
    }

    /// The input form again, with the validation failure in place of the instructions.
    pub fn rejected(kind: QueryKind, error: ValidationError) -> Self {
        Self {
            message: Some(error.user_message()),
            ..Self::form(kind)
        }
    }

    pub fn fetched(kind: QueryKind, term: Option<&str>, result: FetchResult) -> Self {
        Self {
            icon: kind.descriptor().icon,
            title: kind.result_title(term),
            message: result.error_message(),
            active_form: None,
            result: Some(result),
        }
    }

    /// Whether the message should be styled as a failure.
    pub fn is_error(&self) -> bool {
        let failed_fetch = self.result.as_ref().is_some_and(|r| !r.is_success());
        let error_message = self.message.as_deref().is_some_and(|m| m.starts_with("Error:"));
        failed_fetch || error_message
    }
}
