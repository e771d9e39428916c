// src/runner.rs
use std::collections::HashMap;

use crate::gateway::MealGateway;
use crate::query::QueryKind;
use crate::view::ViewModel;

/// Validate the request parameters for `kind`, call the gateway once if they
/// are acceptable and wrap the outcome for rendering.
pub async fn run_query(
    gateway: &dyn MealGateway,
    kind: QueryKind,
    params: &HashMap<String, String>,
) -> ViewModel {
    let descriptor = kind.descriptor();
    let raw = descriptor
        .param
        .and_then(|name| params.get(name))
        .map(String::as_str);

    let term = match kind.validate(raw) {
        Ok(term) => term,
        Err(e) => {
            log::debug!("Rejected {} request: {}", descriptor.route, e);
            return ViewModel::rejected(kind, e);
        }
    };

    let upstream_params: Vec<(&str, &str)> = match (descriptor.upstream_key, term) {
        (Some(key), Some(value)) => vec![(key, value)],
        _ => Vec::new(),
    };

    log::info!("Forwarding {} to {} {:?}", descriptor.route, descriptor.endpoint, upstream_params);
    let result = gateway.fetch(descriptor.endpoint, &upstream_params).await;

    if let Some(error) = result.error_message() {
        log::warn!("Upstream call for {} failed: {}", descriptor.route, error);
    }

    ViewModel::fetched(kind, term, result)
}
