// tests/integration_tests.rs
use actix_web::{test, web, App};
use async_trait::async_trait;
use mealdb_explorer::api::{configure_routes, AppState};
use mealdb_explorer::config::AppConfig;
use mealdb_explorer::gateway::{Endpoint, MealGateway};
use mealdb_explorer::models::FetchResult;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Counts calls and replays a fixed result.
struct StubGateway {
    calls: AtomicUsize,
    last: Mutex<Option<(Endpoint, Vec<(String, String)>)>>,
    reply: FetchResult,
}

impl StubGateway {
    fn new(reply: FetchResult) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
            reply,
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn last(&self) -> Option<(Endpoint, Vec<(String, String)>)> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl MealGateway for StubGateway {
    async fn fetch(&self, endpoint: Endpoint, params: &[(&str, &str)]) -> FetchResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let owned = params.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        *self.last.lock().unwrap() = Some((endpoint, owned));
        self.reply.clone()
    }
}

async fn get_page(gateway: Arc<StubGateway>, uri: &str) -> (u16, String) {
    let state = AppState::with_gateway(AppConfig::default(), gateway);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status().as_u16();
    let body = test::read_body(resp).await;
    (status, String::from_utf8(body.to_vec()).unwrap())
}

fn one_meal() -> FetchResult {
    FetchResult::Success(json!({"meals": [
        {"strMeal": "Chicken Handi", "strMealThumb": "https://img/handi.jpg", "idMeal": "52795"}
    ]}))
}

#[actix_web::test]
async fn test_home_page() {
    let gateway = StubGateway::new(one_meal());
    let (status, body) = get_page(gateway.clone(), "/").await;

    assert_eq!(status, 200);
    assert!(body.contains("Welcome to MealDB Explorer!"));
    assert!(body.contains("href=\"/random_meal_form\""));
    assert_eq!(gateway.calls(), 0);
}

#[actix_web::test]
async fn test_every_form_route_renders_without_upstream_call() {
    let routes = [
        ("/search_meal_by_name_form", "action=\"/search_meal_by_name\""),
        ("/list_meals_by_first_letter_form", "action=\"/list_meals_by_first_letter\""),
        ("/random_meal_form", "action=\"/random_meal\""),
        ("/filter_by_main_ingredient_form", "action=\"/filter_by_main_ingredient\""),
        ("/filter_by_category_form", "action=\"/filter_by_category\""),
        ("/filter_by_area_form", "action=\"/filter_by_area\""),
    ];

    for (route, action) in routes {
        let gateway = StubGateway::new(one_meal());
        let (status, body) = get_page(gateway.clone(), route).await;
        assert_eq!(status, 200, "{}", route);
        assert!(body.contains(action), "{} is missing its form", route);
        assert_eq!(gateway.calls(), 0);
    }
}

#[actix_web::test]
async fn test_multi_letter_is_rejected_without_network_call() {
    let gateway = StubGateway::new(one_meal());
    let (status, body) = get_page(gateway.clone(), "/list_meals_by_first_letter?letter=ab").await;

    assert_eq!(status, 200);
    assert!(body.contains("Error: A single first letter is required."));
    assert!(body.contains("name=\"letter\""));
    assert_eq!(gateway.calls(), 0);
}

#[actix_web::test]
async fn test_missing_parameter_is_rejected() {
    let gateway = StubGateway::new(one_meal());
    let (status, body) = get_page(gateway.clone(), "/search_meal_by_name?name=").await;

    assert_eq!(status, 200);
    assert!(body.contains("Error: Meal name is required."));
    assert_eq!(gateway.calls(), 0);
}

#[actix_web::test]
async fn test_ingredient_filter_end_to_end() {
    let gateway = StubGateway::new(one_meal());
    let (status, body) = get_page(gateway.clone(), "/filter_by_main_ingredient?ingredient=chicken_breast").await;

    assert_eq!(status, 200);
    assert!(body.contains("Meals with Chicken Breast"));
    assert!(body.contains("Chicken Handi"));
    assert_eq!(gateway.calls(), 1);
    assert_eq!(
        gateway.last(),
        Some((Endpoint::Filter, vec![("i".to_string(), "chicken_breast".to_string())]))
    );
}

#[actix_web::test]
async fn test_query_values_are_url_decoded() {
    let gateway = StubGateway::new(FetchResult::Success(json!({"meals": null})));
    let (_, body) = get_page(gateway.clone(), "/search_meal_by_name?name=Chicken%20Curry").await;

    assert!(body.contains("Search Results for: Chicken Curry"));
    assert!(body.contains("No meals found"));
    assert_eq!(
        gateway.last(),
        Some((Endpoint::Search, vec![("s".to_string(), "Chicken Curry".to_string())]))
    );
}

#[actix_web::test]
async fn test_random_meal_calls_upstream_without_params() {
    let gateway = StubGateway::new(one_meal());
    let (status, body) = get_page(gateway.clone(), "/random_meal").await;

    assert_eq!(status, 200);
    assert!(body.contains("Random Meal Discovery"));
    assert_eq!(gateway.last(), Some((Endpoint::Random, Vec::new())));
}

#[actix_web::test]
async fn test_upstream_failure_is_rendered_inline() {
    let gateway = StubGateway::new(FetchResult::UpstreamError {
        message: "404 Client Error: Not Found for url: https://example/filter.php?a=Atlantis".to_string(),
        status: Some(404),
    });
    let (status, body) = get_page(gateway.clone(), "/filter_by_area?area=Atlantis").await;

    assert_eq!(status, 200);
    assert!(body.contains("Atlantis Cuisine"));
    assert!(body.contains("(Status: 404)"));
    assert!(body.contains("class=\"message error-message\""));
}

#[actix_web::test]
async fn test_health_check() {
    let gateway = StubGateway::new(one_meal());
    let state = AppState::with_gateway(AppConfig::default(), gateway);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["status"], "healthy");
    assert_eq!(resp["service"], "mealdb-explorer");
}
