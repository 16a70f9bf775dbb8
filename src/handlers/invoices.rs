use actix_multipart::Multipart;
use actix_web::HttpResponse;
use futures_util::TryStreamExt;

use crate::errors::AppError;
use crate::models::invoice::{Invoice, LineItem, ValidationError};

/// POST /parse/invoice
///
/// Mock mode: the uploaded document is drained for protocol correctness
/// and then discarded, and the response is a fixed invoice that still goes
/// through full schema validation before serialization.
#[utoipa::path(
    post,
    path = "/parse/invoice",
    responses(
        (status = 200, description = "Parsed invoice", body = Invoice),
        (status = 400, description = "Missing or unreadable file field"),
    ),
    tag = "invoices"
)]
pub async fn parse_invoice(mut payload: Multipart) -> Result<HttpResponse, AppError> {
    let mut file_seen = false;

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| AppError::Upload(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        file_seen = true;

        // Consume the bytes; nothing inspects them.
        while let Some(_chunk) = field
            .try_next()
            .await
            .map_err(|e| AppError::Upload(e.to_string()))?
        {}
    }

    if !file_seen {
        return Err(AppError::Upload("missing 'file' field".to_string()));
    }

    // The constants are known-valid, so a failure here is a programming
    // error and maps to a 500 rather than a client error.
    let invoice = mock_invoice().map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(HttpResponse::Ok().json(invoice))
}

/// The invoice every upload "parses" into.
pub(crate) fn mock_invoice() -> Result<Invoice, ValidationError> {
    let line = LineItem::new("Servizio di consulenza", 1.0, 123.45, 123.45)?;
    Invoice::new(
        "INV-2024-001",
        "2024-05-12",
        "ACME SRL",
        123.45,
        Some("EUR".to_string()),
        vec![line],
    )
}
