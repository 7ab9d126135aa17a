//! Web form server.
//!
//! Serves a single-field form at `/` and renders the summarization result,
//! plus a JSON endpoint for integration with other systems.

use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::{Summarizer, SummaryOutcome};
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::error;

/// Shared application state.
struct AppState {
    summarizer: Summarizer,
}

/// Run the web form server.
pub async fn run_serve(
    host: Option<String>,
    port: Option<u16>,
    settings: Settings,
) -> anyhow::Result<()> {
    // Missing credentials halt the process before any request is served
    if let Err(e) = preflight::check(Operation::Serve) {
        Output::error(&format!("{}", e));
        return Err(e.into());
    }

    let host = host.unwrap_or_else(|| settings.server.host.clone());
    let port = port.unwrap_or(settings.server.port);

    let summarizer = Summarizer::new(&settings)?;
    let state = Arc::new(AppState { summarizer });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(index))
        .route("/summarize", post(summarize_form))
        .route("/api/summarize", post(summarize_json))
        .route("/health", get(health))
        .layer(cors)
        .with_state(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    Output::header("tldw");
    println!();
    Output::success(&format!("Listening on http://{}", addr));
    println!();
    println!("Endpoints:");
    Output::kv("Web form", "GET  /");
    Output::kv("Summarize", "POST /summarize");
    Output::kv("Summarize (JSON)", "POST /api/summarize");
    Output::kv("Health", "GET  /health");
    println!();
    Output::info("Press Ctrl+C to stop the server.");

    axum::serve(listener, app).await?;

    Ok(())
}

// === Request/Response Types ===

#[derive(Deserialize)]
struct SummarizeRequest {
    /// YouTube video URL
    url: String,
}

#[derive(Serialize)]
struct SummarizeResponse {
    available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    hint: String,
}

// === Handlers ===

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn index() -> Html<String> {
    Html(render_page(FORM_BODY))
}

async fn summarize_form(
    State(state): State<Arc<AppState>>,
    Form(req): Form<SummarizeRequest>,
) -> Html<String> {
    if req.url.trim().is_empty() {
        return Html(render_page(FORM_BODY));
    }

    let body = match state.summarizer.summarize(&req.url).await {
        Ok(SummaryOutcome::Summary(text)) => format!(
            "{}<h2>Summary</h2><article class=\"summary\"><pre>{}</pre></article>",
            FORM_BODY,
            escape_html(&text)
        ),
        Ok(SummaryOutcome::Unavailable) => format!(
            "{}<p class=\"warning\">No summary found. The video may not have captions.</p>",
            FORM_BODY
        ),
        Err(e) => {
            error!("Summarization failed: {}", e);
            format!(
                "{}<p class=\"error\">Something went wrong: {}</p>\
                 <p class=\"hint\">Please check your API key or internet connection.</p>",
                FORM_BODY,
                escape_html(&e.to_string())
            )
        }
    };

    Html(render_page(&body))
}

async fn summarize_json(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SummarizeRequest>,
) -> impl IntoResponse {
    match state.summarizer.summarize(&req.url).await {
        Ok(SummaryOutcome::Summary(text)) => Json(SummarizeResponse {
            available: true,
            summary: Some(text),
        })
        .into_response(),
        Ok(SummaryOutcome::Unavailable) => Json(SummarizeResponse {
            available: false,
            summary: None,
        })
        .into_response(),
        Err(e) => {
            error!("Summarization failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: e.to_string(),
                    hint: "Please check your API key or internet connection.".to_string(),
                }),
            )
                .into_response()
        }
    }
}

// === Page rendering ===

const FORM_BODY: &str = r#"<h1>tldw</h1>
<p>Paste a YouTube URL to generate an AI-powered summary.</p>
<form method="post" action="/summarize">
  <input type="text" name="url" placeholder="https://www.youtube.com/watch?v=..." size="60" required>
  <button type="submit">Summarize Video</button>
</form>"#;

fn render_page(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>tldw</title>
<style>
  body {{ font-family: sans-serif; max-width: 48rem; margin: 3rem auto; padding: 0 1rem; }}
  input[type=text] {{ padding: 0.4rem; }}
  button {{ padding: 0.4rem 0.8rem; }}
  .summary pre {{ white-space: pre-wrap; background: #f6f6f6; padding: 1rem; }}
  .warning {{ color: #8a6d00; }}
  .error {{ color: #a40000; }}
  .hint {{ color: #555; }}
</style>
</head>
<body>
{}
</body>
</html>"#,
        body
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"a & b"</b>"#),
            "&lt;b&gt;&quot;a &amp; b&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_render_page_wraps_body() {
        let page = render_page("<p>hello</p>");
        assert!(page.contains("<p>hello</p>"));
        assert!(page.starts_with("<!DOCTYPE html>"));
    }
}
