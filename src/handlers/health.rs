use actix_web::HttpResponse;
use serde::Serialize;
use utoipa::ToSchema;

/// Fixed status payload returned by the liveness probe.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub mode: String,
}

/// GET /health
///
/// Liveness probe. Does not touch the validator.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse),
    ),
    tag = "health"
)]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "operational".to_string(),
        mode: "mock".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_reports_operational_mock_mode() {
        let value = serde_json::to_value(HealthResponse {
            status: "operational".to_string(),
            mode: "mock".to_string(),
        })
        .unwrap();
        assert_eq!(value["status"], "operational");
        assert_eq!(value["mode"], "mock");
    }
}
