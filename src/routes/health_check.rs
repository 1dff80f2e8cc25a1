use actix_web::HttpResponse;

/// `GET /health_check`
///
/// Always 200 with an empty body; the relay is not probed.
pub async fn health_check() -> HttpResponse { HttpResponse::Ok().finish() }
