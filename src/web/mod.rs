pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;

use actix_cors::Cors;

/// Lets browser clients on any origin call every endpoint.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
}
