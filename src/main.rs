use actix_web::{middleware, web, App, HttpServer};
use mealdb_explorer::api::{configure_routes, AppState};
use mealdb_explorer::banner;
use mealdb_explorer::config::AppConfig;
use mealdb_explorer::errors::Result;

#[actix_web::main]
async fn main() -> Result<()> {
    banner::print_banner();

    // A missing .env file is fine; the defaults point at the public API.
    let dotenv_result = dotenvy::dotenv();

    let app_config = AppConfig::from_env()?;

    env_logger::init_from_env(env_logger::Env::new().default_filter_or(app_config.log_filter()));

    if let Err(e) = dotenv_result {
        log::debug!("No .env file loaded: {}", e);
    }

    let bind = (app_config.host.clone(), app_config.port);
    log::info!("Proxying {}", app_config.base_url);
    log::info!("🚀 Explorer available at http://{}:{}", bind.0, bind.1);

    let state = AppState::new(app_config);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    })
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}
