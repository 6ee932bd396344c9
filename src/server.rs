//! HTTP server: pages, language switching, and the volunteer endpoint.

use crate::config::Config;
use crate::i18n::{Language, LanguageContext};
use crate::pages;
use crate::sheets::RecordSink;
use crate::volunteer::{process_submission, SubmissionError, VolunteerRequest, SUCCESS_MESSAGE};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Json, Redirect, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use std::rc::Rc;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Cookie holding the visitor's language for the browser session.
pub const LANGUAGE_COOKIE: &str = "lang";

/// Shared state for handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sink: Option<Arc<dyn RecordSink>>,
}

impl AppState {
    pub fn new(config: Config, sink: Option<Arc<dyn RecordSink>>) -> Self {
        Self {
            config: Arc::new(config),
            sink,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/gallery", get(gallery))
        .route("/lang/toggle", get(toggle_language))
        .route("/lang/:code", get(set_language))
        .route("/api/volunteer", post(submit_volunteer))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start serving on the configured address until Ctrl+C.
pub async fn serve(state: AppState) -> anyhow::Result<()> {
    let addr = state.config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}

/// Language selected for this session, or the site default.
pub fn session_language(headers: &HeaderMap, default: Language) -> Language {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == LANGUAGE_COOKIE)
        .and_then(|(_, code)| Language::from_code(code.trim()).ok())
        .unwrap_or(default)
}

/// Path to return to after switching language: the referring page's path on
/// this site, or `/`.
///
/// Leading slashes are collapsed so the `Location` can never be a
/// protocol-relative URL pointing off-site.
fn return_path(headers: &HeaderMap) -> String {
    headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .and_then(|referer| reqwest::Url::parse(referer).ok())
        .map(|url| {
            let path = format!("/{}", url.path().trim_start_matches(&['/', '\\'][..]));
            (path, url.query().map(str::to_string))
        })
        .filter(|(path, _)| !path.starts_with("/lang/"))
        .map(|(path, query)| match query {
            Some(query) => format!("{}?{}", path, query),
            None => path,
        })
        .unwrap_or_else(|| "/".to_string())
}

/// Persist `language` in the session cookie and send the visitor back.
fn language_redirect(headers: &HeaderMap, language: Language) -> Response {
    let cookie = format!(
        "{}={}; Path=/; SameSite=Lax",
        LANGUAGE_COOKIE,
        language.code()
    );
    let mut response = Redirect::to(&return_path(headers)).into_response();
    if let Ok(value) = HeaderValue::from_str(&cookie) {
        response.headers_mut().insert(header::SET_COOKIE, value);
    }
    response
}

fn page_context(state: &AppState, headers: &HeaderMap) -> Rc<LanguageContext> {
    Rc::new(LanguageContext::new(session_language(
        headers,
        state.config.default_language,
    )))
}

/// `GET /`
async fn home(State(state): State<AppState>, headers: HeaderMap) -> Html<String> {
    Html(pages::home(page_context(&state, &headers)))
}

/// `GET /gallery`
async fn gallery(State(state): State<AppState>, headers: HeaderMap) -> Html<String> {
    Html(pages::gallery(page_context(&state, &headers)))
}

/// `GET /lang/toggle`: switch to the other language.
async fn toggle_language(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let ctx = LanguageContext::new(session_language(&headers, state.config.default_language));
    let language = ctx.toggle();
    language_redirect(&headers, language)
}

/// `GET /lang/{code}`: select a language explicitly.
async fn set_language(
    State(state): State<AppState>,
    Path(code): Path<String>,
    headers: HeaderMap,
) -> Response {
    match Language::from_code(&code) {
        Ok(language) => {
            let ctx =
                LanguageContext::new(session_language(&headers, state.config.default_language));
            ctx.set_language(language);
            language_redirect(&headers, ctx.language())
        }
        Err(e) => (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() })))
            .into_response(),
    }
}

impl IntoResponse for SubmissionError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            SubmissionError::MissingFields => {
                (StatusCode::BAD_REQUEST, json!({ "error": self.to_string() }))
            }
            SubmissionError::NotConfigured => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": self.to_string() }),
            ),
            SubmissionError::Downstream(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": self.to_string(), "details": e.to_string() }),
            ),
        };
        (status, Json(body)).into_response()
    }
}

/// `POST /api/volunteer`
async fn submit_volunteer(
    State(state): State<AppState>,
    body: Result<Json<VolunteerRequest>, JsonRejection>,
) -> Result<Json<Value>, SubmissionError> {
    let Json(request) = body.map_err(|e| {
        warn!("Rejected volunteer request body: {}", e);
        SubmissionError::Downstream(anyhow::anyhow!("Invalid request body: {}", e))
    })?;

    process_submission(
        state.sink.as_deref(),
        request,
        Utc::now(),
        state.config.timezone,
    )
    .await?;

    Ok(Json(json!({ "success": true, "message": SUCCESS_MESSAGE })))
}

/// `GET /health`
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheets::MemorySink;
    use crate::volunteer::{DOWNSTREAM_MESSAGE, MISSING_FIELDS_MESSAGE};
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_config() -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            default_language: Language::En,
            timezone: chrono_tz::Asia::Jerusalem,
            sheets: None,
        }
    }

    fn test_router(sink: Option<Arc<dyn RecordSink>>) -> Router {
        build_router(AppState::new(test_config(), sink))
    }

    async fn body_json(resp: Response) -> Value {
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    async fn body_text(resp: Response) -> String {
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(body.to_vec()).unwrap()
    }

    fn post_json(body: Value) -> Request<Body> {
        Request::post("/api/volunteer")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn valid_body() -> Value {
        json!({
            "name": "Yael",
            "email": "yael@example.org",
            "phone": "054-7654321",
            "area": ["environment"],
            "availability": ["evenings", "weekends"],
            "consent": true
        })
    }

    // ==================== Cookie Tests ====================

    #[test]
    fn test_session_language_from_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("theme=dark; lang=he"));
        assert_eq!(session_language(&headers, Language::En), Language::He);
    }

    #[test]
    fn test_session_language_defaults() {
        let mut headers = HeaderMap::new();
        assert_eq!(session_language(&headers, Language::He), Language::He);

        headers.insert(header::COOKIE, HeaderValue::from_static("lang=fr"));
        assert_eq!(session_language(&headers, Language::En), Language::En);
    }

    #[test]
    fn test_return_path() {
        let mut headers = HeaderMap::new();
        assert_eq!(return_path(&headers), "/");

        headers.insert(
            header::REFERER,
            HeaderValue::from_static("https://example.org/gallery?x=1"),
        );
        assert_eq!(return_path(&headers), "/gallery?x=1");

        headers.insert(
            header::REFERER,
            HeaderValue::from_static("https://example.org/lang/he"),
        );
        assert_eq!(return_path(&headers), "/");

        headers.insert(
            header::REFERER,
            HeaderValue::from_static("https://example.org//evil.example/"),
        );
        assert_eq!(return_path(&headers), "/evil.example/");

        headers.insert(
            header::REFERER,
            HeaderValue::from_static("https://example.org///lang/he"),
        );
        assert_eq!(return_path(&headers), "/");
    }

    // ==================== Page Tests ====================

    #[tokio::test]
    async fn test_home_default_english() {
        let resp = test_router(None)
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_text(resp).await.contains(r#"dir="ltr""#));
    }

    #[tokio::test]
    async fn test_home_hebrew_cookie() {
        let req = Request::get("/")
            .header("cookie", "lang=he")
            .body(Body::empty())
            .unwrap();
        let resp = test_router(None).oneshot(req).await.unwrap();
        let html = body_text(resp).await;
        assert!(html.contains(r#"<html lang="he" dir="rtl">"#));
    }

    #[tokio::test]
    async fn test_gallery_route() {
        let resp = test_router(None)
            .oneshot(Request::get("/gallery").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_text(resp).await.contains("Our Community in Action"));
    }

    // ==================== Language Switch Tests ====================

    #[tokio::test]
    async fn test_set_language_sets_cookie_and_redirects() {
        let req = Request::get("/lang/he")
            .header("referer", "http://localhost/gallery")
            .body(Body::empty())
            .unwrap();
        let resp = test_router(None).oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers()[header::LOCATION], "/gallery");
        assert!(resp.headers()[header::SET_COOKIE]
            .to_str()
            .unwrap()
            .starts_with("lang=he;"));
    }

    #[tokio::test]
    async fn test_set_unknown_language_is_bad_request() {
        let resp = test_router(None)
            .oneshot(Request::get("/lang/fr").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_toggle_from_hebrew_goes_to_english() {
        let req = Request::get("/lang/toggle")
            .header("cookie", "lang=he")
            .body(Body::empty())
            .unwrap();
        let resp = test_router(None).oneshot(req).await.unwrap();
        assert!(resp.headers()[header::SET_COOKIE]
            .to_str()
            .unwrap()
            .starts_with("lang=en;"));
    }

    // ==================== Volunteer Endpoint Tests ====================

    #[tokio::test]
    async fn test_submit_success_appends_one_row() {
        let sink = Arc::new(MemorySink::new());
        let app = test_router(Some(sink.clone() as Arc<dyn RecordSink>));

        let resp = app.oneshot(post_json(valid_body())).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], SUCCESS_MESSAGE);

        let rows = sink.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][5], "evenings, weekends");
    }

    #[tokio::test]
    async fn test_submit_missing_fields() {
        let sink = Arc::new(MemorySink::new());
        let app = test_router(Some(sink.clone() as Arc<dyn RecordSink>));

        let mut body = valid_body();
        body["phone"] = json!("");
        let resp = app.oneshot(post_json(body)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await["error"], MISSING_FIELDS_MESSAGE);
        assert!(sink.rows().is_empty());
    }

    #[tokio::test]
    async fn test_submit_malformed_json() {
        let req = Request::post("/api/volunteer")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let sink = Arc::new(MemorySink::new());
        let resp = test_router(Some(sink.clone() as Arc<dyn RecordSink>))
            .oneshot(req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(resp).await;
        assert_eq!(json["error"], DOWNSTREAM_MESSAGE);
        assert!(json["details"]
            .as_str()
            .unwrap()
            .starts_with("Invalid request body"));
        assert!(sink.rows().is_empty());
    }

    #[tokio::test]
    async fn test_submit_without_credentials_is_500() {
        let resp = test_router(None)
            .oneshot(post_json(valid_body()))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(resp).await;
        assert_eq!(
            json["error"],
            "Server configuration error. Please contact the administrator."
        );
        assert!(json.get("details").is_none());
    }

    #[tokio::test]
    async fn test_submit_downstream_failure_is_500_with_details() {
        let sink: Arc<dyn RecordSink> = Arc::new(MemorySink::failing("sheet locked"));
        let resp = test_router(Some(sink))
            .oneshot(post_json(valid_body()))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(resp).await;
        assert_eq!(
            json["error"],
            "Failed to submit registration. Please try again later."
        );
        assert_eq!(json["details"], "sheet locked");
    }

    #[tokio::test]
    async fn test_health() {
        let resp = test_router(None)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["status"], "ok");
    }
}
