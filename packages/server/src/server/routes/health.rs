use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    database: DatabaseHealth,
    connection_pool: ConnectionPoolHealth,
}

#[derive(Serialize)]
pub struct DatabaseHealth {
    status: String,
    /// Latest applied migration
    #[serde(skip_serializing_if = "Option::is_none")]
    schema_version: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    offers: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl DatabaseHealth {
    fn failed(error: String) -> Self {
        Self {
            status: "error".to_string(),
            schema_version: None,
            offers: None,
            error: Some(error),
        }
    }
}

#[derive(Serialize)]
pub struct ConnectionPoolHealth {
    size: u32,
    idle_connections: usize,
    max_connections: u32,
}

/// Health check endpoint
///
/// Queries the migration ledger and the offers table (with a 5s timeout) and
/// reports pool usage. Returns 200 OK when both answer, 503 otherwise.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let query = sqlx::query_as::<_, (Option<i64>, i64)>(
        "SELECT (SELECT MAX(version) FROM _sqlx_migrations), (SELECT COUNT(*) FROM offers)",
    )
    .fetch_one(&state.db_pool);

    let db_health = match tokio::time::timeout(std::time::Duration::from_secs(5), query).await {
        Ok(Ok((schema_version, offers))) => DatabaseHealth {
            status: "ok".to_string(),
            schema_version,
            offers: Some(offers),
            error: None,
        },
        Ok(Err(e)) => DatabaseHealth::failed(format!("Query failed: {}", e)),
        Err(_) => DatabaseHealth::failed("Query timeout (>5s)".to_string()),
    };

    let pool_health = ConnectionPoolHealth {
        size: state.db_pool.size(),
        idle_connections: state.db_pool.num_idle(),
        max_connections: state.db_pool.options().get_max_connections(),
    };

    let is_healthy = db_health.status == "ok";
    let (status_code, overall_status) = if is_healthy {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
    };

    (
        status_code,
        Json(HealthResponse {
            status: overall_status.to_string(),
            database: db_health,
            connection_pool: pool_health,
        }),
    )
}
