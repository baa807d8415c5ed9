use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Multipart, Path, State},
    http::{HeaderMap, StatusCode, Uri, header::AUTHORIZATION},
    response::IntoResponse,
    routing::get,
};
use client::{
    ApiError, FilesApiClient,
    api::files::{compare_file_versions, get_file_version, list_file_versions, list_folder, list_versions_of_file, upload_file_version},
};
use common::{
    api_config::ApiConfig,
    credential::Credential,
    file_query::FileListQuery,
    file_version::{FileComparison, FileVersionId},
    location::Location,
    upload::UploadIntent,
};
use serde_json::json;

#[derive(Debug, Clone, Default)]
struct RecordedRequest {
    method: String,
    path: String,
    query: Option<String>,
    authorization: Option<String>,
    /// (field name, file name, bytes)
    fields: Vec<(String, Option<String>, Vec<u8>)>,
}

#[derive(Clone)]
struct MockBackend {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    status: StatusCode,
    list_body: String,
}

impl MockBackend {
    fn new(status: StatusCode, list_body: impl Into<String>) -> Self {
        Self { requests: Arc::default(), status, list_body: list_body.into() }
    }

    fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, method: &str, uri: &Uri, headers: &HeaderMap) -> usize {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            method: method.to_string(),
            path: uri.path().to_string(),
            query: uri.query().map(|q| q.to_string()),
            authorization: headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()).map(|v| v.to_string()),
            fields: vec![],
        });
        requests.len() - 1
    }
}

fn record_json(id: u64, file_name: &str, extension: &str, version_number: u64) -> serde_json::Value {
    json!({"id": id, "file_name": file_name, "extension": extension, "version_number": version_number, "location": "/test/"})
}

async fn list_files(State(mock): State<MockBackend>, uri: Uri, headers: HeaderMap) -> impl IntoResponse {
    mock.record("GET", &uri, &headers);
    (mock.status, [("content-type", "application/json")], mock.list_body.clone())
}

async fn upload_file(State(mock): State<MockBackend>, uri: Uri, headers: HeaderMap, mut multipart: Multipart) -> impl IntoResponse {
    let index = mock.record("POST", &uri, &headers);
    let mut fields = vec![];
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(|f| f.to_string());
        let data = field.bytes().await.unwrap().to_vec();
        fields.push((name, file_name, data));
    }
    mock.requests.lock().unwrap()[index].fields = fields;
    (mock.status, Json(record_json(99, "report", "pdf", 4)))
}

async fn file_detail(State(mock): State<MockBackend>, Path(id): Path<u64>, uri: Uri, headers: HeaderMap) -> impl IntoResponse {
    mock.record("GET", &uri, &headers);
    Json(record_json(id, "report", "pdf", 2))
}

async fn file_versions(State(mock): State<MockBackend>, Path(id): Path<u64>, uri: Uri, headers: HeaderMap) -> impl IntoResponse {
    mock.record("GET", &uri, &headers);
    Json(json!([
        record_json(id, "report", "pdf", 1),
        record_json(id + 1, "report", "pdf", 2),
        record_json(id + 2, "report", "pdf", 3),
    ]))
}

async fn compare_versions(
    State(mock): State<MockBackend>,
    Path((_id, version)): Path<(u64, u64)>,
    uri: Uri,
    headers: HeaderMap,
) -> axum::response::Response {
    mock.record("GET", &uri, &headers);
    if version > 3 {
        return (StatusCode::BAD_REQUEST, Json(json!({"message": "Not a valid version for comparison"}))).into_response();
    }
    Json(json!({"is_diff": version != 1})).into_response()
}

async fn spawn_backend(mock: MockBackend) -> String {
    let app = Router::new()
        .route("/api/files/", get(list_files).post(upload_file))
        .route("/api/files/{id}/", get(file_detail))
        .route("/api/files/{id}/versions/", get(file_versions))
        .route("/api/files/{id}/compare/{version}/", get(compare_versions))
        .with_state(mock);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn api_client(base_url: &str) -> FilesApiClient {
    FilesApiClient::new(ApiConfig::new(base_url), Credential::parse("test-token").unwrap())
}

#[tokio::test]
async fn listing_sends_one_scoped_authorized_request() {
    let body = json!([record_json(7, "report", "pdf", 3), record_json(2, "notes", "txt", 1)]).to_string();
    let mock = MockBackend::new(StatusCode::OK, body);
    let base = spawn_backend(mock.clone()).await;

    let listing = list_folder(&api_client(&base), Location::from_path("/test/")).await.unwrap();

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/api/files/");
    assert_eq!(requests[0].query.as_deref(), Some("location=%2Ftest%2F"));
    assert_eq!(requests[0].authorization.as_deref(), Some("Token test-token"));

    assert!(listing.is_current_for(&Location::from_path("/test/")));
    let names: Vec<String> = listing.records.iter().map(|r| r.display_name()).collect();
    assert_eq!(names, vec!["report.pdf", "notes.txt"]);
}

#[tokio::test]
async fn clients_sharing_the_pool_keep_their_own_credential() {
    let mock = MockBackend::new(StatusCode::OK, "[]");
    let base = spawn_backend(mock.clone()).await;
    let first = api_client(&base);
    let second = FilesApiClient::new(ApiConfig::new(&base), Credential::parse("other-token").unwrap());

    list_folder(&first, Location::root()).await.unwrap();
    list_folder(&second, Location::root()).await.unwrap();
    list_folder(&first.clone(), Location::root()).await.unwrap();

    let tokens: Vec<Option<String>> = mock.requests().into_iter().map(|r| r.authorization).collect();
    assert_eq!(
        tokens,
        vec![
            Some("Token test-token".to_string()),
            Some("Token other-token".to_string()),
            Some("Token test-token".to_string()),
        ]
    );
}

#[tokio::test]
async fn empty_location_is_sent_as_root() {
    let mock = MockBackend::new(StatusCode::OK, "[]");
    let base = spawn_backend(mock.clone()).await;

    let listing = list_folder(&api_client(&base), Location::from_path("")).await.unwrap();

    assert!(listing.is_empty());
    assert_eq!(mock.requests()[0].query.as_deref(), Some("location=%2F"));
}

#[tokio::test]
async fn extra_filters_are_forwarded() {
    let mock = MockBackend::new(StatusCode::OK, "[]");
    let base = spawn_backend(mock.clone()).await;

    let query = FileListQuery::default().with_extension("pdf").with_content_md5("abc");
    list_file_versions(&api_client(&base), &query).await.unwrap();

    assert_eq!(mock.requests()[0].query.as_deref(), Some("extension=pdf&content_md5=abc"));
}

#[tokio::test]
async fn server_error_is_reported_as_status() {
    let mock = MockBackend::new(StatusCode::INTERNAL_SERVER_ERROR, "boom");
    let base = spawn_backend(mock).await;

    let err = list_folder(&api_client(&base), Location::root()).await.unwrap_err();

    match err {
        ApiError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn rejected_credential_is_reported_as_unauthorized() {
    let mock = MockBackend::new(StatusCode::UNAUTHORIZED, r#"{"detail": "Invalid token."}"#);
    let base = spawn_backend(mock).await;

    let err = list_folder(&api_client(&base), Location::root()).await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn malformed_body_is_reported() {
    let mock = MockBackend::new(StatusCode::OK, r#"{"not": "a list"}"#);
    let base = spawn_backend(mock).await;

    let err = list_folder(&api_client(&base), Location::root()).await.unwrap_err();

    assert!(matches!(err, ApiError::MalformedBody { .. }), "unexpected error: {err:?}");
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = list_folder(&api_client(&format!("http://{addr}")), Location::root()).await.unwrap_err();

    assert!(matches!(err, ApiError::Transport { .. }), "unexpected error: {err:?}");
}

#[tokio::test]
async fn upload_sends_file_and_location_fields() {
    let mock = MockBackend::new(StatusCode::CREATED, "[]");
    let base = spawn_backend(mock.clone()).await;

    let intent = UploadIntent::new("report.pdf", b"%PDF-1.4 data".to_vec(), Location::from_path("/test/")).unwrap();
    upload_file_version(&api_client(&base), intent).await.unwrap();

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    let upload = &requests[0];
    assert_eq!(upload.method, "POST");
    assert_eq!(upload.path, "/api/files/");
    assert_eq!(upload.authorization.as_deref(), Some("Token test-token"));

    let file = upload.fields.iter().find(|(name, _, _)| name == "file").unwrap();
    assert_eq!(file.1.as_deref(), Some("report.pdf"));
    assert_eq!(file.2, b"%PDF-1.4 data".to_vec());
    let location = upload.fields.iter().find(|(name, _, _)| name == "location").unwrap();
    assert_eq!(location.2, b"/test/".to_vec());
}

#[tokio::test]
async fn failed_upload_is_returned_not_raised() {
    let mock = MockBackend::new(StatusCode::INTERNAL_SERVER_ERROR, "[]");
    let base = spawn_backend(mock.clone()).await;

    let intent = UploadIntent::new("a.txt", b"x".to_vec(), Location::root()).unwrap();
    let result = upload_file_version(&api_client(&base), intent).await;

    assert!(matches!(result, Err(ApiError::Status { status: 500, .. })));
    assert_eq!(mock.requests().len(), 1);
}

#[tokio::test]
async fn single_record_and_version_history() {
    let mock = MockBackend::new(StatusCode::OK, "[]");
    let base = spawn_backend(mock.clone()).await;
    let api = api_client(&base);

    let record = get_file_version(&api, FileVersionId(5)).await.unwrap();
    assert_eq!(record.id, FileVersionId(5));
    assert_eq!(record.version_number, 2);

    let versions = list_versions_of_file(&api, FileVersionId(5)).await.unwrap();
    let numbers: Vec<u64> = versions.iter().map(|v| v.version_number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);

    let paths: Vec<String> = mock.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(paths, vec!["/api/files/5/", "/api/files/5/versions/"]);
}

#[tokio::test]
async fn compare_reports_difference_and_rejection() {
    let mock = MockBackend::new(StatusCode::OK, "[]");
    let base = spawn_backend(mock).await;
    let api = api_client(&base);

    let same = compare_file_versions(&api, FileVersionId(5), 1).await.unwrap();
    assert_eq!(same, FileComparison { is_diff: false });
    let differs = compare_file_versions(&api, FileVersionId(5), 2).await.unwrap();
    assert_eq!(differs, FileComparison { is_diff: true });

    let err = compare_file_versions(&api, FileVersionId(5), 9).await.unwrap_err();
    match err {
        ApiError::Rejected { message } => assert_eq!(message, "Not a valid version for comparison"),
        other => panic!("unexpected error: {other:?}"),
    }
}
