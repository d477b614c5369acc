use article_app::domain::{ProcessRequest, ProcessResponse};
use article_app::AppContext;
use article_errors::AppError;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderValue,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// JSON API mounted next to the rendered UI.
pub fn api_router(ctx: AppContext) -> Router {
    let cors = cors_layer(&ctx.config.allowed_origins);

    Router::new()
        .route("/api", get(api_info))
        .route("/health", get(health_check))
        .route("/api/process-article", post(process_article))
        .layer(cors)
        .with_state(ctx)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

async fn api_info() -> Json<Value> {
    Json(json!({
        "message": "AI Article Processor API is running! 🚀",
        "status": "healthy",
        "endpoints": {
            "process_article": "/api/process-article",
            "health": "/health",
        }
    }))
}

async fn health_check(State(ctx): State<AppContext>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "webhook_configured": ctx.process_article.webhook_configured(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn process_article(
    State(ctx): State<AppContext>,
    payload: Result<Json<ProcessRequest>, JsonRejection>,
) -> Result<Json<ProcessResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::InvalidBody(e.body_text()))?;

    match ctx.process_article.execute(request).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::error!("Article processing failed: {}", e);
            Err(e)
        }
    }
}
