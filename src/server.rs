//! The web service: a form that fetches a URL and shows its paragraph text.
//!
//! Three routes: `GET /` renders the empty form, `POST /fetch` runs the
//! fetch→extract sequence and renders the result on the same page, and
//! `GET /healthz` is a JSON liveness probe. Handlers are stateless; the
//! only shared state is the one `PageFetcher` built at startup.

use crate::fetch::PageFetcher;
use crate::snapshot;
use anyhow::{Context, Result};
use axum::extract::{Form, State};
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Process-wide state shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: PageFetcher,
}

/// Form body for `POST /fetch`. A missing `url` field is rejected by the
/// extractor before the handler runs (422).
#[derive(Debug, Deserialize)]
pub struct FetchForm {
    pub url: String,
}

/// What the page is showing.
enum PageView {
    /// No snapshot yet (fresh form).
    Empty,
    /// A capture succeeded; the text may still be empty if the page had
    /// no paragraphs.
    Snapshot { url: String, text: String },
    /// The fetch itself failed.
    Error { url: String, message: String },
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/fetch", post(fetch_page))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(addr: SocketAddr) -> Result<()> {
    let fetcher = PageFetcher::new().context("building page fetcher")?;
    let app = router(AppState { fetcher });

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!("listening on http://{addr}");

    axum::serve(listener, app).await.context("serving")?;
    Ok(())
}

async fn home() -> Html<String> {
    Html(render_page(&PageView::Empty))
}

async fn fetch_page(State(state): State<AppState>, Form(form): Form<FetchForm>) -> Html<String> {
    let view = match snapshot::capture(&state.fetcher, &form.url).await {
        Ok(snap) => PageView::Snapshot {
            url: form.url,
            text: snap.text,
        },
        Err(e) => {
            warn!("capture of {} failed: {e}", form.url);
            PageView::Error {
                url: form.url,
                message: e.to_string(),
            }
        }
    };
    Html(render_page(&view))
}

async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Render the single page of the app. All interpolated values are
/// entity-escaped; fetched pages must not inject markup here.
fn render_page(view: &PageView) -> String {
    let mut body = String::from(
        "<!doctype html>\n<html>\n<head><meta charset=\"utf-8\"><title>PageSnap</title></head>\n<body>\n\
         <h1>PageSnap</h1>\n\
         <form action=\"/fetch\" method=\"post\">\n\
         <input type=\"text\" name=\"url\" placeholder=\"https://example.com\" size=\"60\" required>\n\
         <button type=\"submit\">Fetch</button>\n\
         </form>\n",
    );

    match view {
        PageView::Empty => {}
        PageView::Snapshot { url, text } => {
            body.push_str(&format!(
                "<h2>Snapshot of {}</h2>\n",
                escape_html(url)
            ));
            if text.is_empty() {
                body.push_str("<p class=\"empty\"><em>No paragraph text found.</em></p>\n");
            } else {
                body.push_str(&format!(
                    "<pre class=\"snapshot\">{}</pre>\n",
                    escape_html(text)
                ));
            }
        }
        PageView::Error { url, message } => {
            body.push_str(&format!(
                "<p class=\"error\">Could not fetch {}: {}</p>\n",
                escape_html(url),
                escape_html(message)
            ));
        }
    }

    body.push_str("</body>\n</html>\n");
    body
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
