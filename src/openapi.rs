use utoipa::OpenApi;

use crate::handlers::health::HealthResponse;
use crate::models::invoice::{Invoice, LineItem};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health,
        crate::handlers::invoices::parse_invoice,
    ),
    components(schemas(HealthResponse, Invoice, LineItem)),
    tags(
        (name = "health", description = "Liveness probe"),
        (name = "invoices", description = "Invoice parsing endpoints (mock mode)")
    ),
    info(
        title = "DataBridge AI",
        description = "Invoice parsing API (mock mode)",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;
