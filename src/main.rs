use axum::extract::MatchedPath;
use axum::http::Request;
use recipedia::api;
use recipedia::config::ServerConfig;
use recipedia::store::RecipeStore;
use recipedia::telemetry;
use std::env;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::Span;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() {
    // Check for --openapi flag to dump spec and exit
    if env::args().any(|arg| arg == "--openapi") {
        let spec = api::openapi().to_pretty_json().unwrap();
        println!("{}", spec);
        return;
    }

    telemetry::init();

    let config = ServerConfig::from_env();

    let store: api::AppState = match &config.data_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "opening recipe store");
            Arc::new(RecipeStore::open(path).expect("Failed to open recipe store"))
        }
        None => {
            tracing::info!("RECIPEDIA_DATA not set, recipes are in-memory only");
            Arc::new(RecipeStore::in_memory())
        }
    };

    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::openapi());

    let app = api::app(store).merge(swagger_ui).layer(
        TraceLayer::new_for_http()
            .make_span_with(|request: &Request<_>| {
                let matched_path = request
                    .extensions()
                    .get::<MatchedPath>()
                    .map(MatchedPath::as_str)
                    .unwrap_or(request.uri().path());

                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    path = %matched_path,
                )
            })
            .on_request(|_request: &Request<_>, _span: &Span| {})
            .on_response(
                |response: &axum::http::Response<_>, latency: std::time::Duration, _span: &Span| {
                    let status = response.status().as_u16();
                    if status >= 500 {
                        tracing::error!(
                            status = %status,
                            latency_ms = %latency.as_millis(),
                            "request failed with server error"
                        );
                    } else {
                        tracing::info!(
                            status = %status,
                            latency_ms = %latency.as_millis(),
                            "request completed"
                        );
                    }
                },
            ),
    );

    let listener = tokio::net::TcpListener::bind(&config.addr)
        .await
        .expect("Failed to bind listen address");

    tracing::info!("Server listening on {}", listener.local_addr().unwrap());
    tracing::info!("Swagger UI available at /swagger-ui/");

    axum::serve(listener, app).await.expect("Server error");
}
