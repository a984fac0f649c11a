mod config;
mod model;
mod web;

use actix_web::{web::Data, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};

use config::Config;
use model::InferenceClient;
use web::routes;

// App state structure
pub struct AppState {
    pub model: InferenceClient,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting PDF chat relay");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    let model = match InferenceClient::new(&config) {
        Ok(model) => {
            info!("Inference client initialized");
            model
        }
        Err(e) => {
            error!("Failed to initialize inference client: {}", e);
            std::process::exit(1);
        }
    };

    let app_state = Data::new(AppState { model });

    info!("Listening on {}:{}", config.host, config.port);

    // Start web server
    HttpServer::new(move || {
        App::new()
            .wrap(web::cors())
            .app_data(app_state.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
