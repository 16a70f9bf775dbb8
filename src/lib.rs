pub mod errors;
pub mod handlers;
pub mod models;
pub mod openapi;

use actix_web::{middleware::Logger, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use openapi::ApiDoc;

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(host: &str, port: u16) -> std::io::Result<actix_web::dev::Server> {
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .route("/health", web::get().to(handlers::health::health))
            .service(
                web::scope("/parse")
                    .route("/invoice", web::post().to(handlers::invoices::parse_invoice)),
            )
            .service(
                SwaggerUi::new("/docs/{_:.*}").url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
