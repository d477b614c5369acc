use article_app::client::ArticleClient;
use article_app::domain::ProcessRequest;
use article_errors::{SubmitError, CONNECTIVITY_MESSAGE};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request() -> ProcessRequest {
    ProcessRequest::new(" reader@example.com ", " https://example.com/article ")
}

fn client_for(server: &MockServer) -> ArticleClient {
    ArticleClient::new(format!("{}/api/process-article", server.uri()))
}

#[tokio::test]
async fn ok_response_is_parsed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/process-article"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "email": "reader@example.com",
            "article_url": "https://example.com/article",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "accepted",
            "message": "Queued",
            "session_id": "abc123",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server).submit(&request()).await.expect("ok");
    assert_eq!(response.status, "accepted");
    assert_eq!(response.message, "Queued");
    assert_eq!(response.session_id, "abc123");
}

#[tokio::test]
async fn error_status_carries_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/process-article"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(serde_json::json!({ "detail": "Invalid URL" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).submit(&request()).await.unwrap_err();
    assert_eq!(
        err,
        SubmitError::Rejected {
            status: 400,
            detail: "Invalid URL".to_string(),
        }
    );
}

#[tokio::test]
async fn error_status_with_other_json_falls_back_to_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(serde_json::json!({ "error": "boom" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).submit(&request()).await.unwrap_err();
    assert_eq!(
        err,
        SubmitError::Rejected {
            status: 500,
            detail: "HTTP 500".to_string(),
        }
    );
}

#[tokio::test]
async fn error_status_with_non_json_body_shows_connectivity_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = client_for(&server).submit(&request()).await.unwrap_err();
    assert!(matches!(err, SubmitError::MalformedResponse(_)));
    assert_eq!(err.user_message(), CONNECTIVITY_MESSAGE);
}

#[tokio::test]
async fn ok_status_with_garbage_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).submit(&request()).await.unwrap_err();
    assert!(matches!(err, SubmitError::MalformedResponse(_)));
    assert_eq!(err.user_message(), CONNECTIVITY_MESSAGE);
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };
    let client = ArticleClient::new(format!("http://127.0.0.1:{port}/api/process-article"));

    let err = client.submit(&request()).await.unwrap_err();
    assert!(matches!(err, SubmitError::Transport(_)));
}
