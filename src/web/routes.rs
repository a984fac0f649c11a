use actix_web::{error::JsonPayloadError, web, HttpRequest};
use log::error;

use crate::web::error::ChatError;
use crate::web::handlers;

// Whole documents are posted and truncated afterwards; actix's 2 MiB default is too small
pub const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

// Body decoding failures share the chat error envelope instead of actix's plain-text 400
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    error!("JSON payload error: {}", err);
    ChatError::Internal(err.to_string()).into()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .limit(MAX_BODY_BYTES)
        .error_handler(json_error_handler);

    cfg.app_data(json_config)
        .route("/", web::get().to(handlers::index))
        .route("/health", web::get().to(handlers::health_check))
        .route("/chat", web::post().to(handlers::chat));
}
