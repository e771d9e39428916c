// src/models.rs
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Number of `strIngredientN` / `strMeasureN` slots on a meal record.
pub const INGREDIENT_SLOTS: usize = 20;

pub const DECODE_ERROR_MESSAGE: &str = "Failed to decode JSON from response.";
pub const EMPTY_BODY_PLACEHOLDER: &str = "No content returned";

/// Outcome of a single upstream call.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchResult {
    Success(Value),
    /// Non-success status, or a transport failure when `status` is `None`.
    UpstreamError { message: String, status: Option<u16> },
    /// Success status, but the body was not JSON.
    DecodeError { message: String, raw_body: String },
}

impl FetchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchResult::Success(_))
    }

    /// Text shown to the user for the error variants.
    pub fn error_message(&self) -> Option<String> {
        match self {
            FetchResult::Success(_) => None,
            FetchResult::UpstreamError { message, status: Some(status) } => {
                Some(format!("{} (Status: {})", message, status))
            }
            FetchResult::UpstreamError { message, status: None } => Some(message.clone()),
            FetchResult::DecodeError { message, .. } => Some(message.clone()),
        }
    }
}

/// What a success payload contains, from the page's point of view.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Meals(Vec<Meal>),
    NoResults,
    /// JSON that does not look like `{"meals": ...}`.
    Unrecognized,
}

impl Listing {
    pub fn from_payload(payload: &Value) -> Self {
        match payload.get("meals") {
            Some(Value::Null) => Listing::NoResults,
            Some(Value::Array(items)) if items.is_empty() => Listing::NoResults,
            Some(Value::Array(items)) => {
                let meals: Result<Vec<Meal>, _> = items.iter().map(|item| Meal::deserialize(item)).collect();
                match meals {
                    Ok(meals) => Listing::Meals(meals),
                    Err(_) => Listing::Unrecognized,
                }
            }
            _ => Listing::Unrecognized,
        }
    }
}

/// A meal record. Filter endpoints only return name, thumbnail and id;
/// lookups return the full record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    #[serde(default)]
    pub id_meal: Option<String>,
    #[serde(default)]
    pub str_meal: Option<String>,
    #[serde(default)]
    pub str_meal_thumb: Option<String>,
    #[serde(default)]
    pub str_category: Option<String>,
    #[serde(default)]
    pub str_area: Option<String>,
    #[serde(default)]
    pub str_instructions: Option<String>,
    #[serde(default)]
    pub str_source: Option<String>,
    #[serde(default)]
    pub str_youtube: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// One ingredient line; `measure` is empty when the upstream left it blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub measure: String,
}

impl Meal {
    pub fn has_instructions(&self) -> bool {
        non_blank(self.str_instructions.as_deref()).is_some()
    }

    pub fn category(&self) -> Option<&str> {
        non_blank(self.str_category.as_deref())
    }

    pub fn area(&self) -> Option<&str> {
        non_blank(self.str_area.as_deref())
    }

    pub fn source(&self) -> Option<&str> {
        non_blank(self.str_source.as_deref())
    }

    pub fn youtube(&self) -> Option<&str> {
        non_blank(self.str_youtube.as_deref())
    }

    /// Ingredient slots 1..=20 that actually name an ingredient.
    pub fn ingredients(&self) -> Vec<Ingredient> {
        (1..=INGREDIENT_SLOTS)
            .filter_map(|n| {
                let name = self.slot(&format!("strIngredient{}", n))?;
                let measure = self.slot(&format!("strMeasure{}", n)).unwrap_or_default();
                Some(Ingredient {
                    name: name.to_string(),
                    measure: measure.to_string(),
                })
            })
            .collect()
    }

    fn slot(&self, key: &str) -> Option<&str> {
        non_blank(self.extra.get(key).and_then(|v| v.as_str()))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
