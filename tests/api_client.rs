//! HTTP client tests against a local stub backend
//!
//! A minimal HTTP/1.1 responder on an ephemeral port stands in for the
//! real backend so routes, prefixes, status handling and JSON bodies are
//! exercised over a socket.

use advisor_dashboard::{
    api::{ApiClient, ApiProfile, Endpoints},
    errors::DashboardError,
    AdvisorBackend,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

const DASHBOARD_BODY: &str = r#"{
    "student_profile": {"name": "John Doe", "level": 300, "enrollment_year": 2023},
    "academic_performance": {"cgpa": 1.875, "total_credits_attempted": 8, "total_grade_points": 15.0, "student_id": 1},
    "course_recommendations": [
        {"course_code": "CSC201", "course_name": "Data Structures", "credits": 3, "status": "Eligible", "reason": "All prerequisites met"},
        {"course_code": "CSC401", "course_name": "Compilers", "credits": 3, "status": "Blocked", "reason": "Missing prerequisites: CSC301"}
    ]
}"#;

/// Requests seen by the stub: (method, path, body)
type Seen = Arc<Mutex<Vec<(String, String, String)>>>;

struct StubServer {
    base_url: String,
    seen: Seen,
}

impl StubServer {
    async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let seen: Seen = Arc::new(Mutex::new(Vec::new()));

        let log = seen.clone();
        tokio::spawn(async move {
            loop {
                let (stream, _) = match listener.accept().await {
                    Ok(conn) => conn,
                    Err(_) => break,
                };
                let log = log.clone();
                tokio::spawn(async move {
                    let _ = serve(stream, log).await;
                });
            }
        });

        Self { base_url, seen }
    }

    fn client(&self, prefix: &str) -> ApiClient {
        ApiClient::with_config(Endpoints::new(&self.base_url, prefix), Duration::from_secs(5)).unwrap()
    }

    fn seen(&self) -> Vec<(String, String, String)> {
        self.seen.lock().unwrap().clone()
    }
}

async fn serve(mut stream: TcpStream, seen: Seen) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let body = String::from_utf8_lossy(&buf[header_end..]).to_string();

    let mut request_line = head.lines().next().unwrap_or("").split_whitespace();
    let method = request_line.next().unwrap_or("").to_string();
    let path = request_line.next().unwrap_or("").to_string();

    let (status, reply) = route(&method, &path, &body);
    seen.lock().unwrap().push((method, path, body));

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reply.len(),
        reply
    );
    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await
}

fn route(method: &str, path: &str, body: &str) -> (&'static str, String) {
    let path = path.strip_prefix("/api").unwrap_or(path);
    match (method, path) {
        ("GET", "/dashboard/student/1") | ("GET", "/adviser/student/1") => {
            ("200 OK", DASHBOARD_BODY.to_string())
        }
        ("GET", "/dashboard/student/500") => ("500 Internal Server Error", "{}".to_string()),
        ("GET", "/dashboard/student/7") => ("200 OK", "<html>not json</html>".to_string()),
        ("POST", "/ask/1") => {
            let question = serde_json::from_str::<serde_json::Value>(body)
                .ok()
                .and_then(|v| v["question"].as_str().map(str::to_string))
                .unwrap_or_default();
            let reply = serde_json::json!({ "response": format!("You asked: {}", question) });
            ("200 OK", reply.to_string())
        }
        _ => ("404 Not Found", r#"{"detail":"Student not found"}"#.to_string()),
    }
}

#[tokio::test]
async fn test_fetch_dashboard_decodes_payload() {
    let server = StubServer::start().await;
    let client = server.client("");

    let data = client.fetch_dashboard(1).await.unwrap();
    assert_eq!(data.student_profile.name, "John Doe");
    assert_eq!(data.academic_performance.cgpa, 1.875);
    assert_eq!(data.course_recommendations.len(), 2);
    assert_eq!(data.course_recommendations[1].course_code, "CSC401");

    let seen = server.seen();
    assert_eq!(seen[0].0, "GET");
    assert_eq!(seen[0].1, "/dashboard/student/1");
}

#[tokio::test]
async fn test_current_profile_uses_api_prefix() {
    let server = StubServer::start().await;
    let client = server.client(ApiProfile::Current.default_prefix());

    client.fetch_adviser_student(1).await.unwrap();
    assert_eq!(server.seen()[0].1, "/api/adviser/student/1");
}

#[tokio::test]
async fn test_missing_student_is_not_found() {
    let server = StubServer::start().await;
    let client = server.client("");

    let err = client.fetch_adviser_student(999).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(err, DashboardError::Status { status: 404, .. }));
}

#[tokio::test]
async fn test_server_error_is_status_error() {
    let server = StubServer::start().await;
    let client = server.client("");

    let err = client.fetch_dashboard(500).await.unwrap_err();
    assert!(matches!(err, DashboardError::Status { status: 500, .. }));
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn test_undecodable_body_is_error() {
    let server = StubServer::start().await;
    let client = server.client("");

    let err = client.fetch_dashboard(7).await.unwrap_err();
    assert!(matches!(err, DashboardError::SerializationError(_)));
}

#[tokio::test]
async fn test_ask_posts_question_json() {
    let server = StubServer::start().await;
    let client = server.client("");

    let reply = client.ask(1, "Why can't I take CSC401?").await.unwrap();
    assert_eq!(reply, "You asked: Why can't I take CSC401?");

    let seen = server.seen();
    assert_eq!(seen[0].0, "POST");
    assert_eq!(seen[0].1, "/ask/1");
    let sent: serde_json::Value = serde_json::from_str(&seen[0].2).unwrap();
    assert_eq!(sent, serde_json::json!({ "question": "Why can't I take CSC401?" }));
}
