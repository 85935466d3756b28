//! # HttpBackend — the hostel services over HTTP
//!
//! Wraps a `reqwest::Client` and a [`portal::EndpointsConfig`]. Every request
//! is a JSON `POST` (`Content-Type: application/json`). Endpoints are resolved
//! per request, so a malformed URL only fails the call that uses it.

use portal::{
    AttendanceRecord, ComplaintAnalysis, ComplaintRequest, ComplaintTicket, EndpointsConfig,
    HostelBackend,
};
use reqwest::{Client, Response};
use serde::Serialize;
use url::Url;

use crate::error::ApiError;

#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    endpoints: EndpointsConfig,
}

impl HttpBackend {
    pub fn new(endpoints: EndpointsConfig) -> Self {
        Self::with_client(Client::new(), endpoints)
    }

    pub fn with_client(client: Client, endpoints: EndpointsConfig) -> Self {
        Self { client, endpoints }
    }

    pub fn endpoints(&self) -> &EndpointsConfig {
        &self.endpoints
    }

    /// Absolute URL for `endpoint`. Absolute endpoints are used as-is,
    /// relative ones are joined onto the origin.
    pub fn resolve(&self, endpoint: &str) -> Result<Url, ApiError> {
        if let Ok(url) = Url::parse(endpoint) {
            return Ok(url);
        }
        Url::parse(&self.endpoints.origin)
            .and_then(|origin| origin.join(endpoint))
            .map_err(|source| ApiError::Url {
                endpoint: endpoint.to_string(),
                source,
            })
    }

    async fn post_json<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<Response, ApiError> {
        let url = self.resolve(endpoint)?;
        tracing::debug!("POST {}", url);

        let response = self.client.post(url.clone()).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response)
    }
}

impl HostelBackend for HttpBackend {
    type Error = ApiError;

    async fn mark_attendance(&self, record: &AttendanceRecord) -> Result<(), ApiError> {
        self.post_json(&self.endpoints.attendance, record).await?;
        Ok(())
    }

    async fn analyze_complaint(&self, text: &str) -> Result<ComplaintAnalysis, ApiError> {
        let request = ComplaintRequest {
            text: text.to_string(),
        };
        let response = self.post_json(&self.endpoints.analyze, &request).await?;
        Ok(response.json::<ComplaintAnalysis>().await?)
    }

    async fn file_complaint(&self, ticket: &ComplaintTicket) -> Result<(), ApiError> {
        self.post_json(&self.endpoints.complaint, ticket).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::State;
    use axum::http::{header, HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use portal::{LoginForm, MemoryView, PageController, PortalConfig, Score};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    /// Request bodies seen by the test server, with their content type.
    type Seen = Arc<Mutex<Vec<(String, Option<String>, Value)>>>;

    fn remember(seen: &Seen, path: &str, headers: &HeaderMap, body: Value) {
        let content_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        seen.lock().unwrap().push((path.to_string(), content_type, body));
    }

    async fn attendance_ok(
        State(seen): State<Seen>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> Json<Value> {
        remember(&seen, "/api/attendance", &headers, body);
        Json(json!({ "ok": true }))
    }

    async fn attendance_broken(State(seen): State<Seen>, Json(body): Json<Value>) -> StatusCode {
        remember(&seen, "/api/attendance", &HeaderMap::new(), body);
        StatusCode::INTERNAL_SERVER_ERROR
    }

    async fn analyze(
        State(seen): State<Seen>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        let text = body["text"].as_str().unwrap_or_default().to_string();
        remember(&seen, "/analyze", &headers, body);
        if text.trim().is_empty() {
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": "Empty text" })));
        }
        (
            StatusCode::OK,
            Json(json!({
                "priority": "high",
                "category": "noise",
                "confidence": 0.9,
                "priority_score": 8
            })),
        )
    }

    async fn analyze_garbage() -> &'static str {
        "<html>not json</html>"
    }

    async fn complaint(
        State(seen): State<Seen>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> Json<Value> {
        remember(&seen, "/api/complaint", &headers, body);
        Json(json!({ "ok": true }))
    }

    /// Start a throwaway server and return its origin.
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn hostel_server(seen: &Seen) -> String {
        let router = Router::new()
            .route("/api/attendance", post(attendance_ok))
            .route("/api/complaint", post(complaint))
            .route("/analyze", post(analyze))
            .with_state(seen.clone());
        serve(router).await
    }

    fn backend_for(origin: &str) -> HttpBackend {
        let config = PortalConfig::default().with_origin(origin);
        let mut endpoints = config.endpoints;
        endpoints.analyze = format!("{origin}/analyze");
        let client = Client::builder().no_proxy().build().unwrap();
        HttpBackend::with_client(client, endpoints)
    }

    fn record() -> AttendanceRecord {
        AttendanceRecord {
            student_name: "A".to_string(),
            hostel_block: "B1".to_string(),
            room_number: "101".to_string(),
            attendance_date: "2026-03-09".to_string(),
            attendance_time: "9:05:07 PM".to_string(),
            wifi_verified: true,
            device_verified: true,
        }
    }

    #[test]
    fn test_resolve() {
        let backend = HttpBackend::new(EndpointsConfig::default());

        let url = backend.resolve("/api/attendance").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:5000/api/attendance");

        let url = backend.resolve("http://127.0.0.1:5000/analyze").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:5000/analyze");

        let backend = HttpBackend::new(EndpointsConfig {
            origin: "not a url".to_string(),
            ..EndpointsConfig::default()
        });
        let err = backend.resolve("/api/attendance").unwrap_err();
        assert!(matches!(err, ApiError::Url { .. }));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn test_mark_attendance_posts_json() {
        let seen = Seen::default();
        let origin = hostel_server(&seen).await;
        let backend = backend_for(&origin);

        backend.mark_attendance(&record()).await.unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let (path, content_type, body) = &seen[0];
        assert_eq!(path, "/api/attendance");
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(
            body,
            &json!({
                "student_name": "A",
                "hostel_block": "B1",
                "room_number": "101",
                "attendance_date": "2026-03-09",
                "attendance_time": "9:05:07 PM",
                "wifi_verified": true,
                "device_verified": true
            })
        );
    }

    #[tokio::test]
    async fn test_mark_attendance_reports_status() {
        let seen = Seen::default();
        let router = Router::new()
            .route("/api/attendance", post(attendance_broken))
            .with_state(seen.clone());
        let backend = backend_for(&serve(router).await);

        let err = backend.mark_attendance(&record()).await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_analyze_complaint() {
        let seen = Seen::default();
        let backend = backend_for(&hostel_server(&seen).await);

        let analysis = backend.analyze_complaint("noisy").await.unwrap();
        assert_eq!(analysis.priority, "high");
        assert_eq!(analysis.category, "noise");
        assert_eq!(analysis.confidence, Score::Number(0.9));
        assert_eq!(analysis.priority_score.to_string(), "8");

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "/analyze");
        assert_eq!(seen[0].2, json!({ "text": "noisy" }));
    }

    #[tokio::test]
    async fn test_analyze_rejects_bad_responses() {
        let seen = Seen::default();
        let backend = backend_for(&hostel_server(&seen).await);

        let err = backend.analyze_complaint("   ").await.unwrap_err();
        assert_eq!(err.status(), Some(400));

        let router = Router::new().route("/analyze", post(analyze_garbage));
        let backend = backend_for(&serve(router).await);
        let err = backend.analyze_complaint("noisy").await.unwrap_err();
        assert!(matches!(err, ApiError::Request(_)));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let origin = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let backend = backend_for(&origin);
        let err = backend.analyze_complaint("noisy").await.unwrap_err();
        assert!(matches!(err, ApiError::Request(_)));
    }

    #[tokio::test]
    async fn test_file_complaint() {
        let seen = Seen::default();
        let backend = backend_for(&hostel_server(&seen).await);
        let session = LoginForm::new("A", "B1", "101").into_session();

        backend
            .file_complaint(&ComplaintTicket::new(&session, "Electricity", "Socket sparks"))
            .await
            .unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].0, "/api/complaint");
        assert_eq!(seen[0].2["complaint_category"], "Electricity");
        assert_eq!(seen[0].2["room_number"], "101");
    }

    #[tokio::test]
    async fn test_page_over_http() {
        let seen = Seen::default();
        let router = Router::new()
            .route("/api/attendance", post(attendance_broken))
            .route("/analyze", post(analyze))
            .with_state(seen.clone());
        let origin = serve(router).await;

        let view = MemoryView::new();
        let page = PageController::new(backend_for(&origin), view.clone(), PortalConfig::default());
        page.login(LoginForm::new("A", "B1", "101"));

        // The server answers 500, the student still sees success.
        let outcome = page.mark_attendance().await.unwrap();
        assert!(!outcome.delivered);
        assert_eq!(view.notices(), vec!["Attendance marked!"]);

        page.submit_complaint("noisy").await;
        let text = view.panel().text();
        assert!(text.contains("HIGH"));
        assert!(text.contains("noise"));
    }
}
