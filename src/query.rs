// src/query.rs
//! The table of supported lookups and the rules that turn request
//! parameters into an upstream call.

use crate::errors::ValidationError;
use crate::gateway::Endpoint;

/// The six lookups the explorer offers. Also names which input form a page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    SearchByName,
    ListByFirstLetter,
    Random,
    FilterByIngredient,
    FilterByCategory,
    FilterByArea,
}

/// Static description of one lookup: where it is mounted, what it reads
/// from the request and what it asks the upstream for.
#[derive(Debug)]
pub struct QueryDescriptor {
    pub kind: QueryKind,
    pub route: &'static str,
    pub form_route: &'static str,
    /// Request parameter the lookup needs, if any.
    pub param: Option<&'static str>,
    pub endpoint: Endpoint,
    /// Upstream query-string key the parameter is forwarded as.
    pub upstream_key: Option<&'static str>,
    pub icon: &'static str,
    pub form_title: &'static str,
    pub form_message: &'static str,
    pub nav_label: &'static str,
    pub input_label: &'static str,
    pub placeholder: &'static str,
}

pub static DESCRIPTORS: [QueryDescriptor; 6] = [
    QueryDescriptor {
        kind: QueryKind::SearchByName,
        route: "/search_meal_by_name",
        form_route: "/search_meal_by_name_form",
        param: Some("name"),
        endpoint: Endpoint::Search,
        upstream_key: Some("s"),
        icon: "🔍",
        form_title: "Search Meal by Name",
        form_message: "Enter a meal name to find delicious recipes!",
        nav_label: "Search Meal",
        input_label: "Meal name",
        placeholder: "e.g., Arrabiata, Chicken Curry, Pizza",
    },
    QueryDescriptor {
        kind: QueryKind::ListByFirstLetter,
        route: "/list_meals_by_first_letter",
        form_route: "/list_meals_by_first_letter_form",
        param: Some("letter"),
        endpoint: Endpoint::Search,
        upstream_key: Some("f"),
        icon: "📝",
        form_title: "List Meals by First Letter",
        form_message: "Browse meals alphabetically by their first letter!",
        nav_label: "List by Letter",
        input_label: "First letter",
        placeholder: "e.g., a, b, c",
    },
    QueryDescriptor {
        kind: QueryKind::Random,
        route: "/random_meal",
        form_route: "/random_meal_form",
        param: None,
        endpoint: Endpoint::Random,
        upstream_key: None,
        icon: "🎲",
        form_title: "Random Meal Discovery",
        form_message: "Feeling adventurous? Let the kitchen pick a meal for you!",
        nav_label: "Random Meal",
        input_label: "",
        placeholder: "",
    },
    QueryDescriptor {
        kind: QueryKind::FilterByIngredient,
        route: "/filter_by_main_ingredient",
        form_route: "/filter_by_main_ingredient_form",
        param: Some("ingredient"),
        endpoint: Endpoint::Filter,
        upstream_key: Some("i"),
        icon: "🥕",
        form_title: "Filter by Main Ingredient",
        form_message: "Find meals that use your favorite ingredient!",
        nav_label: "Filter by Ingredient",
        input_label: "Main ingredient",
        placeholder: "e.g., chicken_breast, beef, salmon",
    },
    QueryDescriptor {
        kind: QueryKind::FilterByCategory,
        route: "/filter_by_category",
        form_route: "/filter_by_category_form",
        param: Some("category"),
        endpoint: Endpoint::Filter,
        upstream_key: Some("c"),
        icon: "🏷️",
        form_title: "Filter by Category",
        form_message: "Explore meals by category like Dessert, Seafood, or Vegetarian.",
        nav_label: "Filter by Category",
        input_label: "Category",
        placeholder: "e.g., Seafood, Vegetarian, Dessert",
    },
    QueryDescriptor {
        kind: QueryKind::FilterByArea,
        route: "/filter_by_area",
        form_route: "/filter_by_area_form",
        param: Some("area"),
        endpoint: Endpoint::Filter,
        upstream_key: Some("a"),
        icon: "🌍",
        form_title: "Filter by Area",
        form_message: "Discover authentic cuisine from different countries and regions!",
        nav_label: "Filter by Area",
        input_label: "Area",
        placeholder: "e.g., Italian, Chinese, Mexican",
    },
];

impl QueryKind {
    pub const ALL: [QueryKind; 6] = [
        QueryKind::SearchByName,
        QueryKind::ListByFirstLetter,
        QueryKind::Random,
        QueryKind::FilterByIngredient,
        QueryKind::FilterByCategory,
        QueryKind::FilterByArea,
    ];

    pub fn descriptor(self) -> &'static QueryDescriptor {
        match self {
            QueryKind::SearchByName => &DESCRIPTORS[0],
            QueryKind::ListByFirstLetter => &DESCRIPTORS[1],
            QueryKind::Random => &DESCRIPTORS[2],
            QueryKind::FilterByIngredient => &DESCRIPTORS[3],
            QueryKind::FilterByCategory => &DESCRIPTORS[4],
            QueryKind::FilterByArea => &DESCRIPTORS[5],
        }
    }

    /// Checks the raw request value. Returns the term to forward upstream,
    /// or `None` for lookups that take no parameter.
    pub fn validate(self, raw: Option<&str>) -> Result<Option<&str>, ValidationError> {
        let value = raw.unwrap_or("");
        match self {
            QueryKind::Random => Ok(None),
            QueryKind::ListByFirstLetter if value.chars().count() == 1 => Ok(Some(value)),
            QueryKind::ListByFirstLetter => Err(ValidationError::InvalidLetter),
            _ if !value.is_empty() => Ok(Some(value)),
            QueryKind::SearchByName => Err(ValidationError::MissingName),
            QueryKind::FilterByIngredient => Err(ValidationError::MissingIngredient),
            QueryKind::FilterByCategory => Err(ValidationError::MissingCategory),
            QueryKind::FilterByArea => Err(ValidationError::MissingArea),
        }
    }

    /// Heading for a page showing the results of this lookup.
    pub fn result_title(self, term: Option<&str>) -> String {
        let term = term.unwrap_or("");
        match self {
            QueryKind::SearchByName => format!("Search Results for: {}", term),
            QueryKind::ListByFirstLetter => format!("Meals Starting With: {}", term.to_uppercase()),
            QueryKind::Random => "Random Meal Discovery".to_string(),
            QueryKind::FilterByIngredient => {
                format!("Meals with {}", title_case(&term.replace('_', " ")))
            }
            QueryKind::FilterByCategory => format!("{} Meals", term),
            QueryKind::FilterByArea => format!("{} Cuisine", term),
        }
    }
}

/// Upper-cases the first letter of every run of letters and lower-cases
/// the rest, so `"o'neil's BBQ"` becomes `"O'Neil'S Bbq"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
