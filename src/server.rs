use axum::{
    Form, Json, Router,
    extract::{FromRequestParts, Path, Query, State},
    http::{HeaderMap, StatusCode, Uri, header, request::Parts},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::sync::Arc;

use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use tracing::{debug, info, warn};

use crate::AppState;
use crate::config::AppConfig;
use crate::mail::{EmailTrigger, PageLocation, SupportEmail, encode_component};
use crate::reports::{MessageStatus, ReportedErrorMessage, ThreadStore, Viewer};
use crate::thread::{
    MessageThread, RenderOptions, SCROLL_EVENT, ScrollAnchor, THREAD_ELEMENT_ID, render_thread,
};
use crate::ui::components::{ButtonProps, button, mail_icon};
use crate::ui::html::escape;
use crate::ui::shell::page_shell;

/// Header carrying the viewer's session email, set by the upstream auth proxy.
pub const VIEWER_HEADER: &str = "x-user-email";

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/reported-errors/{bot_uuid}", get(thread_page))
        .route(
            "/reported-errors/{bot_uuid}/messages",
            get(thread_fragment).post(post_message),
        )
        .route(
            "/reported-errors/{bot_uuid}/messages/{id}/retry",
            post(retry_message),
        )
        .route(
            "/reported-errors/{bot_uuid}/messages/at/{index}/retry",
            post(retry_message_at),
        )
        .route("/api/support/mailto", get(api_mailto))
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    info!(
        name: "config.loaded",
        support_email = %config.support.email,
        chat_url = %config.chat.base_url,
        "Configuration loaded"
    );

    let state = AppState {
        store: ThreadStore::new(),
        config: Arc::clone(&config),
    };
    let app = router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

impl<S> FromRequestParts<S> for Viewer
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let email = parts
            .headers
            .get(VIEWER_HEADER)
            .and_then(|h| h.to_str().ok())
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        Ok(Self { email })
    }
}

/// The page the browser is on, as seen from this request.
fn page_location(config: &AppConfig, headers: &HeaderMap, uri: &Uri) -> PageLocation {
    let origin = config.server.public_origin.clone().unwrap_or_else(|| {
        let host = headers
            .get(header::HOST)
            .and_then(|h| h.to_str().ok())
            .unwrap_or("localhost");
        format!("http://{host}")
    });

    PageLocation::new(
        origin.trim_end_matches('/'),
        uri.path(),
        uri.query().unwrap_or_default(),
    )
}

fn messages_url(bot_uuid: &str) -> String {
    format!("/reported-errors/{}/messages", encode_component(bot_uuid))
}

fn render_messages(
    config: &AppConfig,
    bot_uuid: &str,
    viewer: &Viewer,
    messages: &[ReportedErrorMessage],
) -> String {
    let url = messages_url(bot_uuid);
    // Retries go through the retry route; the rendered view needs no callback.
    let thread = MessageThread::new(
        messages,
        viewer,
        &config.chat.base_url,
        |_: &ReportedErrorMessage| {},
    );

    render_thread(
        &thread,
        &RenderOptions {
            messages_url: &url,
            poll: config.poll_trigger(),
        },
    )
}

/// Thread fragment, asking the client to scroll when the count moved past `seen`.
fn thread_response(
    state: &AppState,
    bot_uuid: &str,
    viewer: &Viewer,
    seen: Option<usize>,
) -> Response {
    let messages = state.store.messages(bot_uuid);
    let html = render_messages(&state.config, bot_uuid, viewer, &messages);

    let mut anchor = ScrollAnchor::resume(seen);
    if anchor.observe(messages.len()).is_some() {
        ([("HX-Trigger", SCROLL_EVENT)], Html(html)).into_response()
    } else {
        Html(html).into_response()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET /reported-errors/{bot_uuid} - Thread page with the support email trigger.
async fn thread_page(
    State(state): State<AppState>,
    Path(bot_uuid): Path<String>,
    viewer: Viewer,
    headers: HeaderMap,
    uri: Uri,
) -> Html<String> {
    let config = &state.config;
    let location = page_location(config, &headers, &uri);

    let trigger = EmailTrigger::new(
        &config.support.email,
        &bot_uuid,
        config.support.mail_settings(),
    )
    .with_class("inline-flex items-center gap-1 text-primary");
    let trigger_html = trigger.render(
        &location,
        &format!("{}<span>{}</span>", mail_icon(""), escape(trigger.recipient())),
    );

    let messages = state.store.messages(&bot_uuid);
    let thread_html = render_messages(config, &bot_uuid, &viewer, &messages);
    let url = messages_url(&bot_uuid);
    let send = button(
        &ButtonProps {
            submit: true,
            class: "shrink-0",
            ..Default::default()
        },
        "Send",
    );

    let content = format!(
        r##"<section class="space-y-4">
    <header class="flex items-center justify-between">
        <h1 class="font-semibold text-lg">Reported error <span class="font-mono">{bot}</span></h1>
        {trigger_html}
    </header>
    {thread_html}
    <form class="flex gap-2" hx-post="{url}" hx-target="#{THREAD_ELEMENT_ID}" hx-swap="outerHTML" hx-on--after-request="if (event.detail.successful) this.reset()">
        <textarea name="note" rows="2" required placeholder="Add more details..." class="flex-1 resize-none rounded-md border px-3 py-2 text-sm"></textarea>
        {send}
    </form>
</section>"##,
        bot = escape(&bot_uuid),
        url = escape(&url),
    );

    Html(page_shell(&format!("Bot {bot_uuid}"), &content))
}

/// Query for the thread fragment.
#[derive(Debug, Deserialize)]
struct FragmentQuery {
    /// Message count the client currently shows.
    #[serde(default)]
    seen: Option<usize>,
}

/// GET /reported-errors/{bot_uuid}/messages - Thread fragment for polling.
async fn thread_fragment(
    State(state): State<AppState>,
    Path(bot_uuid): Path<String>,
    Query(query): Query<FragmentQuery>,
    viewer: Viewer,
) -> Response {
    thread_response(&state, &bot_uuid, &viewer, query.seen)
}

/// Form body for a new note.
#[derive(Debug, Deserialize)]
struct NewMessage {
    note: String,
    #[serde(default)]
    chat_id: Option<String>,
}

/// POST /reported-errors/{bot_uuid}/messages - Append a note from the viewer.
async fn post_message(
    State(state): State<AppState>,
    Path(bot_uuid): Path<String>,
    viewer: Viewer,
    Form(req): Form<NewMessage>,
) -> Result<Response, (StatusCode, String)> {
    let Some(author) = viewer.email.clone() else {
        return Err((
            StatusCode::UNAUTHORIZED,
            format!("Missing {VIEWER_HEADER} header"),
        ));
    };
    if req.note.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Note cannot be empty".to_string()));
    }

    let message = state.store.append(
        &bot_uuid,
        author,
        req.note,
        req.chat_id,
        MessageStatus::Success,
    );
    info!(
        name: "thread.message.appended",
        bot_uuid = %bot_uuid,
        message_id = ?message.id,
        "Message appended"
    );

    Ok(thread_response(&state, &bot_uuid, &viewer, None))
}

/// POST /reported-errors/{bot_uuid}/messages/{id}/retry - Retry a failed note.
async fn retry_message(
    State(state): State<AppState>,
    Path((bot_uuid, id)): Path<(String, String)>,
    viewer: Viewer,
) -> Result<Response, StatusCode> {
    let index = state
        .store
        .messages(&bot_uuid)
        .iter()
        .position(|m| m.id.as_deref() == Some(id.as_str()))
        .ok_or(StatusCode::NOT_FOUND)?;
    retry_at(&state, &bot_uuid, &viewer, index)
}

/// POST /reported-errors/{bot_uuid}/messages/at/{index}/retry - Retry a
/// failed note that has no ID yet.
async fn retry_message_at(
    State(state): State<AppState>,
    Path((bot_uuid, index)): Path<(String, usize)>,
    viewer: Viewer,
) -> Result<Response, StatusCode> {
    retry_at(&state, &bot_uuid, &viewer, index)
}

fn retry_at(
    state: &AppState,
    bot_uuid: &str,
    viewer: &Viewer,
    index: usize,
) -> Result<Response, StatusCode> {
    if viewer.email.is_none() {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let messages = state.store.messages(bot_uuid);
    if index >= messages.len() {
        return Err(StatusCode::NOT_FOUND);
    }

    let thread = MessageThread::new(
        &messages,
        viewer,
        &state.config.chat.base_url,
        |message: &ReportedErrorMessage| {
            debug!(
                name: "thread.retry.started",
                bot_uuid = %bot_uuid,
                message_id = ?message.id,
                index,
                "Retrying message"
            );
            // The in-memory store delivers synchronously.
            state
                .store
                .set_status_at(bot_uuid, index, MessageStatus::Success);
        },
    );

    if !thread.retry(index) {
        warn!(
            name: "thread.retry.rejected",
            bot_uuid = %bot_uuid,
            index,
            "Message cannot be retried by this viewer"
        );
        return Err(StatusCode::CONFLICT);
    }

    info!(
        name: "thread.retry.delivered",
        bot_uuid = %bot_uuid,
        index,
        "Message retried"
    );

    Ok(thread_response(state, bot_uuid, viewer, Some(messages.len())))
}

// ─────────────────────────────────────────────────────────────────────────────
// API Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Query for the mailto API.
#[derive(Debug, Deserialize)]
struct MailtoQuery {
    /// Absolute URL of the page the link should point back to.
    page: String,
    /// Bot the email is about.
    bot_uuid: String,
    /// Recipient; defaults to the configured support address.
    #[serde(default)]
    email: Option<String>,
}

/// Response from the mailto API.
#[derive(Debug, Serialize, Deserialize)]
pub struct MailtoResponse {
    /// The `mailto:` URI.
    pub mailto: String,
    /// Deep link embedded in the body.
    pub deep_link: String,
}

/// GET /api/support/mailto - Compose a support `mailto:` URI.
async fn api_mailto(
    State(state): State<AppState>,
    Query(query): Query<MailtoQuery>,
) -> Result<Json<MailtoResponse>, (StatusCode, String)> {
    let location =
        PageLocation::parse(&query.page).map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let recipient = query
        .email
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| state.config.support.email.clone());
    let email = SupportEmail::new(recipient, query.bot_uuid);
    let settings = state.config.support.mail_settings();

    Ok(Json(MailtoResponse {
        mailto: email.mailto_uri(&location, &settings),
        deep_link: email.deep_link(&location, &settings),
    }))
}
