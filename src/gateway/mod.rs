// src/gateway/mod.rs

use async_trait::async_trait;

use crate::models::FetchResult;

pub mod mealdb;

pub use mealdb::MealDbGateway;

/// Upstream paths the explorer is allowed to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Search,
    Filter,
    Random,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Search => "search.php",
            Endpoint::Filter => "filter.php",
            Endpoint::Random => "random.php",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// A source of meal data.
///
/// Implementations make exactly one upstream request per call and encode
/// every failure in the returned [`FetchResult`]; they never panic or
/// return early with an error.
#[async_trait]
pub trait MealGateway: Send + Sync {
    async fn fetch(&self, endpoint: Endpoint, params: &[(&str, &str)]) -> FetchResult;
}
