//! HTTP surface for the tool server.
//!
//! Plain JSON over HTTP: clients list the catalog with a GET and invoke
//! tools with a POST. Invocation outcomes map onto status codes so that
//! standard HTTP clients (curl, browsers, etc.) need no protocol layer.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::config::HttpConfig;
use super::error::{Error, Result};
use super::server::ToolServer;
use crate::domains::tools::ToolError;

/// HTTP listener wrapping a [`ToolServer`].
pub struct HttpServer {
    config: HttpConfig,
}

/// Body of a `POST /mcp/invoke` request.
#[derive(Debug, Deserialize)]
struct InvokeRequest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default = "empty_arguments")]
    arguments: Value,
}

fn empty_arguments() -> Value {
    json!({})
}

impl HttpServer {
    /// Create a new HTTP server with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Build the router for the given server.
    ///
    /// Exposed separately from [`run`](Self::run) so the routes can be
    /// driven in-process without a listener.
    pub fn router(&self, server: ToolServer) -> Router {
        let mut app = Router::new()
            .route("/", get(root_handler))
            .route("/health", get(health_check))
            .route("/mcp/tools", get(list_tools))
            .route("/mcp/invoke", post(invoke_tool))
            .with_state(server)
            .layer(TraceLayer::new_for_http());

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        app
    }

    /// Bind the listener and serve until shutdown.
    pub async fn run(self, server: ToolServer) -> Result<()> {
        let addr = self.address();
        let app = self.router(server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| Error::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", addr, cors_status);
        info!("  → Tools:  GET  /mcp/tools");
        info!("  → Invoke: POST /mcp/invoke");
        info!("  → Health: GET  /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        Ok(())
    }
}

/// Root handler - provides API info.
async fn root_handler(State(server): State<ToolServer>) -> impl IntoResponse {
    Json(json!({
        "name": server.name(),
        "version": server.version(),
        "endpoints": {
            "tools": "/mcp/tools",
            "invoke": "/mcp/invoke",
            "health": "/health"
        }
    }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// List the registered tools.
async fn list_tools(State(server): State<ToolServer>) -> impl IntoResponse {
    Json(server.list_tools())
}

/// Invoke a tool and map its outcome to a status code.
async fn invoke_tool(
    State(server): State<ToolServer>,
    Json(request): Json<InvokeRequest>,
) -> Response {
    let Some(name) = request.name.filter(|n| !n.is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "Tool name is required");
    };

    info!("Invoking tool over HTTP: {}", name);

    match server.invoke_tool(&name, request.arguments).await {
        Ok(result) => (StatusCode::OK, Json(json!({ "result": result }))).into_response(),
        Err(ToolError::NotFound(_)) => error_response(StatusCode::NOT_FOUND, "Tool not found"),
        Err(ToolError::HandlerMissing(_)) => {
            error_response(StatusCode::BAD_REQUEST, "Tool handler not found")
        }
        Err(e @ ToolError::InvalidArguments(_)) => {
            error_response(StatusCode::BAD_REQUEST, e.to_string())
        }
        Err(ToolError::ExecutionFailed(msg)) => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, msg)
        }
    }
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    fn app() -> Router {
        let http = HttpServer::new(HttpConfig::default());
        http.router(ToolServer::new(Config::default()))
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_invoke(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/mcp/invoke")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_root_reports_endpoints() {
        let response = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["name"], "mcp-tool-server");
        assert_eq!(body["endpoints"]["invoke"], "/mcp/invoke");
    }

    #[tokio::test]
    async fn test_list_tools() {
        let response = app()
            .oneshot(Request::get("/mcp/tools").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let tools = body.as_array().unwrap();
        assert!(!tools.is_empty());
        assert_eq!(tools[0]["name"], "math_add");
        assert!(tools[0]["parameters"]["properties"].is_object());
    }

    #[tokio::test]
    async fn test_invoke_success() {
        let response = app()
            .oneshot(post_invoke(json!({
                "name": "math_add",
                "arguments": {"a": 12, "b": 30}
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"result": {"result": 42.0}}));
    }

    #[tokio::test]
    async fn test_invoke_defaults_missing_arguments_to_empty_record() {
        let response = app()
            .oneshot(post_invoke(json!({"name": "coin_flip"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_invoke_missing_name() {
        let response = app().oneshot(post_invoke(json!({}))).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Tool name is required"})
        );
    }

    #[tokio::test]
    async fn test_invoke_unknown_tool() {
        let response = app()
            .oneshot(post_invoke(json!({"name": "no_such_tool"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({"error": "Tool not found"}));
    }

    #[tokio::test]
    async fn test_invoke_invalid_arguments() {
        let response = app()
            .oneshot(post_invoke(json!({"name": "math_add", "arguments": {"a": 1}})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().starts_with("Invalid arguments"));
    }

    #[tokio::test]
    async fn test_invoke_execution_failure_is_500() {
        let response = app()
            .oneshot(post_invoke(json!({
                "name": "math_divide",
                "arguments": {"a": 5, "b": 0}
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({"error": "Division by zero"}));
    }
}
