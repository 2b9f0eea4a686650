use autometrics::prometheus_exporter;
use rocket::get;

use super::error::ApiError;

// Metrik dari semua handler yang ditandai #[autometrics], format teks Prometheus
#[get("/metrics")]
pub fn metrics() -> Result<String, ApiError> {
    prometheus_exporter::encode_to_string()
        .map_err(|e| ApiError::Internal(format!("Gagal encode metrics: {:?}", e)))
}
