// src/render.rs
//! Turns a [`ViewModel`] into a complete HTML document.

use std::fmt::Write;

use crate::models::{FetchResult, Listing, Meal};
use crate::query::{DESCRIPTORS, QueryKind};
use crate::view::ViewModel;

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 0; background: #f4f1f8; color: #333; }
.top-bar { background: #fff; padding: 16px; text-align: center; }
nav ul { list-style: none; display: flex; flex-wrap: wrap; justify-content: center; gap: 8px; padding: 12px; margin: 0; }
nav a { text-decoration: none; color: #555; padding: 6px 12px; border-radius: 16px; background: #fff; }
.container { max-width: 1200px; margin: 0 auto; padding: 20px; }
.content-box { background: #fff; padding: 24px; border-radius: 16px; }
.message { padding: 12px; border-radius: 8px; background: #eef6ff; }
.error-message { background: #fdecea; color: #b3261e; }
.meals-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 20px; }
.meal-card { border-radius: 12px; overflow: hidden; box-shadow: 0 4px 12px rgba(0,0,0,0.1); }
.meal-image, .meal-detail-image { width: 100%; }
.meal-info { padding: 12px; }
.meal-detail { display: grid; grid-template-columns: 1fr 1fr; gap: 24px; margin-bottom: 32px; }
.meal-category, .meal-area { display: inline-block; background: #e91e63; color: #fff; padding: 2px 10px; border-radius: 12px; margin-right: 4px; }
.ingredient-item { display: flex; justify-content: space-between; border-bottom: 1px solid #eee; padding: 4px 0; }
.no-results { text-align: center; padding: 32px; }
"#;

/// Escapes text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn page(view: &ViewModel) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>TheMealDB API Client</title>\n<style>{}</style>\n</head>\n<body>\n\
         <div class=\"top-bar\"><h1>TheMealDB Explorer</h1></div>\n",
        STYLE
    );
    html.push_str(&nav());
    html.push_str("<div class=\"container\"><div class=\"content-box\">\n");
    let _ = writeln!(html, "<h2>{} {}</h2>", view.icon, escape(&view.title));

    if let Some(message) = &view.message {
        let class = if view.is_error() { "message error-message" } else { "message" };
        let _ = writeln!(html, "<p class=\"{}\">{}</p>", class, escape(message));
    }

    if let Some(kind) = view.active_form {
        html.push_str(&form(kind));
    }

    if let Some(result) = &view.result {
        html.push_str(&result_section(result));
    }

    html.push_str("</div></div>\n</body>\n</html>\n");
    html
}

fn nav() -> String {
    let mut html = String::from("<nav><ul>\n<li><a href=\"/\">Home</a></li>\n");
    for descriptor in &DESCRIPTORS {
        let _ = writeln!(
            html,
            "<li><a href=\"{}\">{}</a></li>",
            descriptor.form_route, descriptor.nav_label
        );
    }
    html.push_str("</ul></nav>\n");
    html
}

fn form(kind: QueryKind) -> String {
    let descriptor = kind.descriptor();
    let mut html = format!(
        "<form class=\"form-container\" method=\"GET\" action=\"{}\">\n",
        descriptor.route
    );
    if let Some(param) = descriptor.param {
        let maxlength = if kind == QueryKind::ListByFirstLetter { " maxlength=\"1\"" } else { "" };
        let _ = writeln!(
            html,
            "<label for=\"{p}\">{label}:</label>\n\
             <input type=\"text\" id=\"{p}\" name=\"{p}\"{maxlength} required placeholder=\"{placeholder}\">",
            p = param,
            label = descriptor.input_label,
            maxlength = maxlength,
            placeholder = escape(descriptor.placeholder),
        );
    }
    let label = if kind == QueryKind::Random { "Surprise Me" } else { "Search" };
    let _ = writeln!(html, "<input type=\"submit\" value=\"{}\">\n</form>", label);
    html
}

fn result_section(result: &FetchResult) -> String {
    match result {
        // The error text itself is already the page message.
        FetchResult::UpstreamError { .. } => String::new(),
        FetchResult::DecodeError { raw_body, .. } => format!(
            "<details><summary>Response body</summary><pre>{}</pre></details>\n",
            escape(raw_body)
        ),
        FetchResult::Success(payload) => match Listing::from_payload(payload) {
            Listing::Meals(meals) => meal_list(&meals),
            Listing::NoResults => "<div class=\"no-results\">\n<h3>No meals found</h3>\n\
                 <p>Try searching with different keywords or check your spelling.</p>\n</div>\n"
                .to_string(),
            Listing::Unrecognized => "<div class=\"message\"><p>Received data but it's not in the \
                 expected meal format. Please check the API response.</p></div>\n"
                .to_string(),
        },
    }
}

fn meal_list(meals: &[Meal]) -> String {
    let detailed = meals.first().is_some_and(Meal::has_instructions);
    if detailed {
        meals.iter().map(meal_detail).collect()
    } else {
        let cards: String = meals.iter().map(meal_card).collect();
        format!("<div class=\"meals-grid\">\n{}</div>\n", cards)
    }
}

fn badges(meal: &Meal) -> String {
    let mut html = String::new();
    if let Some(category) = meal.category() {
        let _ = write!(html, "<span class=\"meal-category\">{}</span>", escape(category));
    }
    if let Some(area) = meal.area() {
        let _ = write!(html, "<span class=\"meal-area\">{}</span>", escape(area));
    }
    html
}

fn meal_card(meal: &Meal) -> String {
    let name = escape(meal.str_meal.as_deref().unwrap_or(""));
    format!(
        "<div class=\"meal-card\">\n<img src=\"{}\" alt=\"{}\" class=\"meal-image\">\n\
         <div class=\"meal-info\"><h3 class=\"meal-title\">{}</h3>{}</div>\n</div>\n",
        escape(meal.str_meal_thumb.as_deref().unwrap_or("")),
        name,
        name,
        badges(meal)
    )
}

fn meal_detail(meal: &Meal) -> String {
    let name = escape(meal.str_meal.as_deref().unwrap_or(""));
    let mut html = format!(
        "<div class=\"meal-detail\">\n<div><img src=\"{}\" alt=\"{}\" class=\"meal-detail-image\"></div>\n\
         <div class=\"meal-detail-info\">\n<h3>{}</h3>{}\n",
        escape(meal.str_meal_thumb.as_deref().unwrap_or("")),
        name,
        name,
        badges(meal)
    );

    if let Some(instructions) = meal.str_instructions.as_deref().filter(|s| !s.trim().is_empty()) {
        let _ = writeln!(
            html,
            "<h4>Instructions</h4>\n<div class=\"instructions\">{}</div>",
            escape(instructions)
        );
    }

    html.push_str("<h4>Ingredients</h4>\n<div class=\"ingredients-list\">\n");
    for ingredient in meal.ingredients() {
        let _ = writeln!(
            html,
            "<div class=\"ingredient-item\"><span>{}</span><span>{}</span></div>",
            escape(&ingredient.name),
            escape(&ingredient.measure)
        );
    }
    html.push_str("</div>\n");

    if let Some(source) = meal.source() {
        let _ = writeln!(
            html,
            "<a href=\"{}\" target=\"_blank\" class=\"video-link\">Recipe Source</a>",
            escape(source)
        );
    }
    if let Some(youtube) = meal.youtube() {
        let _ = writeln!(
            html,
            "<a href=\"{}\" target=\"_blank\" class=\"video-link\">Watch Video</a>",
            escape(youtube)
        );
    }

    html.push_str("</div>\n</div>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;
    use serde_json::json;

    #[test]
    fn test_escape() {
        assert_eq!(escape("<b>\"Fish & Chips\"</b>"), "&lt;b&gt;&quot;Fish &amp; Chips&quot;&lt;/b&gt;");
    }

    #[test]
    fn test_form_page_has_input() {
        let html = page(&ViewModel::form(QueryKind::ListByFirstLetter));
        assert!(html.contains("action=\"/list_meals_by_first_letter\""));
        assert!(html.contains("name=\"letter\" maxlength=\"1\""));
        assert!(html.contains("Browse meals alphabetically by their first letter!"));
    }

    #[test]
    fn test_random_form_is_a_button() {
        let html = page(&ViewModel::form(QueryKind::Random));
        assert!(html.contains("action=\"/random_meal\""));
        assert!(!html.contains("type=\"text\""));
    }

    #[test]
    fn test_validation_message_is_styled_as_error() {
        let html = page(&ViewModel::rejected(QueryKind::SearchByName, ValidationError::MissingName));
        assert!(html.contains("<p class=\"message error-message\">Error: Meal name is required.</p>"));
        assert!(html.contains("name=\"name\""));
    }

    #[test]
    fn test_null_meals_render_no_results() {
        let view = ViewModel::fetched(
            QueryKind::SearchByName,
            Some("zzz"),
            FetchResult::Success(json!({"meals": null})),
        );
        let html = page(&view);
        assert!(html.contains("No meals found"));
        assert!(!html.contains("class=\"message error-message\""));
    }

    #[test]
    fn test_unexpected_payload_notice() {
        let view = ViewModel::fetched(QueryKind::Random, None, FetchResult::Success(json!({"x": 1})));
        assert!(page(&view).contains("not in the expected meal format"));
    }

    #[test]
    fn test_card_grid_for_filter_results() {
        let view = ViewModel::fetched(
            QueryKind::FilterByCategory,
            Some("Dessert"),
            FetchResult::Success(json!({"meals": [
                {"strMeal": "Apple & Blackberry Crumble", "strMealThumb": "https://img/1.jpg", "idMeal": "52893"}
            ]})),
        );
        let html = page(&view);
        assert!(html.contains("<h2>🏷️ Dessert Meals</h2>"));
        assert!(html.contains("class=\"meals-grid\""));
        assert!(html.contains("Apple &amp; Blackberry Crumble"));
        assert!(!html.contains("Ingredients"));
    }

    #[test]
    fn test_detail_view_lists_ingredients() {
        let view = ViewModel::fetched(
            QueryKind::Random,
            None,
            FetchResult::Success(json!({"meals": [{
                "strMeal": "Teriyaki Chicken Casserole",
                "strMealThumb": "https://img/2.jpg",
                "strCategory": "Chicken",
                "strArea": "Japanese",
                "strInstructions": "Preheat oven to 350.",
                "strYoutube": "https://www.youtube.com/watch?v=4aZr5hZXP_s",
                "strSource": "",
                "strIngredient1": "soy sauce",
                "strMeasure1": "3/4 cup",
                "strIngredient2": "",
                "strMeasure2": ""
            }]})),
        );
        let html = page(&view);
        assert!(html.contains("Preheat oven to 350."));
        assert!(html.contains("<span>soy sauce</span><span>3/4 cup</span>"));
        assert_eq!(html.matches("class=\"ingredient-item\"").count(), 1);
        assert!(html.contains("Watch Video"));
        assert!(!html.contains("Recipe Source"));
        assert!(html.contains("<span class=\"meal-area\">Japanese</span>"));
    }

    #[test]
    fn test_upstream_error_without_status_has_no_placeholder() {
        let view = ViewModel::fetched(
            QueryKind::Random,
            None,
            FetchResult::UpstreamError { message: "timeout".to_string(), status: None },
        );
        let html = page(&view);
        assert!(html.contains("<p class=\"message error-message\">timeout</p>"));
        assert!(!html.contains("Status"));
        assert!(!html.contains("None"));
    }
}
