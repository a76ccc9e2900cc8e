use crate::support::RecordingTransport;
use reqwest::Method;
use serde_json::{Value, json};
use std::path::Path;
use talentscope_client::prelude::*;

#[tokio::test]
async fn test_login_returns_token_mapping() {
    let transport = RecordingTransport::returning(r#"{"token":"valid_token"}"#);
    let auth = AuthServiceImpl::new(transport.clone(), "valid_refresh_token");

    let result = auth.login("user@example.com", "secret").await.unwrap();

    assert_eq!(result["token"], "valid_token");
    let request = transport.last();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, "/auth/login");
    assert_eq!(
        request.body,
        RequestBody::Json(json!({"email": "user@example.com", "password": "secret"}))
    );
}

#[tokio::test]
async fn test_login_with_invalid_input_never_reaches_transport() {
    let transport = RecordingTransport::returning("{}");
    let auth = AuthServiceImpl::new(transport.clone(), "refresh");

    let err = auth.login("not-an-email", "secret").await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid email address.");

    let err = auth.login("user@example.com", "  ").await.unwrap_err();
    assert_eq!(err.to_string(), "password cannot be empty.");

    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_refresh_token_sends_stored_token() {
    let transport = RecordingTransport::returning(r#"{"token":"new_valid_token"}"#);
    let auth = AuthServiceImpl::new(transport.clone(), "stored_refresh");

    let result = auth.refresh_token().await.unwrap();

    assert_eq!(result["token"], "new_valid_token");
    assert_eq!(transport.last().path, "/auth/refresh-token");
    assert_eq!(
        transport.last().body,
        RequestBody::Json(json!({"refresh_token": "stored_refresh"}))
    );
}

#[tokio::test]
async fn test_refresh_token_rejects_empty_token() {
    let transport = RecordingTransport::returning("{}");
    let auth = AuthServiceImpl::new(transport.clone(), "");

    let err = auth.refresh_token().await.unwrap_err();
    assert_eq!(err.to_string(), "Refresh token cannot be empty.");
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_resume_batch_update_status_issues_single_patch() {
    let transport = RecordingTransport::returning(r#"{"id":"id1","status":"done"}"#);
    let service = ResumeBatchServiceImpl::new(transport.clone());

    let result = service.update_status("id1", "done").await.unwrap();

    assert_eq!(result, json!({"id": "id1", "status": "done"}));
    assert_eq!(transport.calls(), 1);
    let request = transport.last();
    assert_eq!(request.method, Method::PATCH);
    assert_eq!(request.path, "/v1/resume-batch/id1/status");
    assert_eq!(request.body, RequestBody::Json(json!({"status": "done"})));
}

#[tokio::test]
async fn test_resume_batch_paths() {
    let transport = RecordingTransport::returning("{}");
    let service = ResumeBatchServiceImpl::new(transport.clone());

    service.listing().await.unwrap();
    assert_eq!(transport.last().path, "/v1/resume-batch");

    service.list_of_variables().await.unwrap();
    assert_eq!(transport.last().path, "/v1/resume-batch/list-of-variables");

    service.show("b7").await.unwrap();
    assert_eq!(transport.last().method, Method::GET);
    assert_eq!(transport.last().path, "/v1/resume-batch/b7");

    service.update("b7", &json!({"name": "Q3"})).await.unwrap();
    assert_eq!(transport.last().method, Method::PUT);
    assert_eq!(transport.last().body, RequestBody::Json(json!({"name": "Q3"})));
}

#[tokio::test]
async fn test_resume_batch_validation_failures() {
    let transport = RecordingTransport::returning("{}");
    let service = ResumeBatchServiceImpl::new(transport.clone());

    let err = service.create_and_parse(&json!({})).await.unwrap_err();
    assert_eq!(err.to_string(), "Resume batch data must be a non-empty array.");

    let err = service.show(" ").await.unwrap_err();
    assert_eq!(err.to_string(), "Resume batch ID must be a non-empty string.");

    let err = service.update_status("", "").await.unwrap_err();
    assert_eq!(err.to_string(), "resumeBatchId must be a non-empty string.");

    let err = service.update_status("id1", "").await.unwrap_err();
    assert_eq!(err.to_string(), "status must be a non-empty string.");

    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_candidate_requests() {
    let transport = RecordingTransport::returning(r#"{"data":{"id":"c1"}}"#);
    let service = CandidateServiceImpl::new(transport.clone());

    service.listing("b1").await.unwrap();
    assert_eq!(transport.last().path, "/v1/resume-batch/b1/candidate");

    let result = service.show("b1", "c1").await.unwrap();
    assert_eq!(result["data"]["id"], "c1");
    assert_eq!(transport.last().path, "/v1/resume-batch/b1/candidate/c1");

    service
        .update_action_status("b1", "c1", "shortlist", "approved")
        .await
        .unwrap();
    let request = transport.last();
    assert_eq!(request.method, Method::PATCH);
    assert_eq!(request.path, "/v1/resume-batch/b1/candidate/c1/action-status");
    assert_eq!(
        request.body,
        RequestBody::Json(json!({"action": "shortlist", "status": "approved"}))
    );
}

#[tokio::test]
async fn test_candidate_validation_order() {
    let transport = RecordingTransport::returning("{}");
    let service = CandidateServiceImpl::new(transport.clone());

    let err = service.show("b1", "").await.unwrap_err();
    assert_eq!(err.to_string(), "candidateId must be a non-empty string.");

    let err = service.update_action_status("b1", "c1", "", "").await.unwrap_err();
    assert_eq!(err.to_string(), "action must be a non-empty string.");

    let err = service.listing("").await.unwrap_err();
    assert_eq!(err.to_string(), "Resume batch ID must be a non-empty string.");

    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_webhook_requests() {
    let transport = RecordingTransport::returning(r#"{"success":true}"#);
    let service = WebhookServiceImpl::new(transport.clone());
    let data = json!({"url": "https://hooks.example.com/ts", "events": ["batch.completed"]});

    service.create(&data).await.unwrap();
    assert_eq!(transport.last().method, Method::POST);
    assert_eq!(transport.last().path, "/v1/webhook-url");

    service.update("w1", &data).await.unwrap();
    assert_eq!(transport.last().method, Method::POST);
    assert_eq!(transport.last().path, "/v1/webhook-url/w1");
    assert_eq!(transport.last().body, RequestBody::Json(data.clone()));

    service.update_status("w1", "inactive").await.unwrap();
    assert_eq!(transport.last().method, Method::PATCH);
    assert_eq!(transport.last().body, RequestBody::Json(json!({"status": "inactive"})));

    let result = service.delete("w1").await.unwrap();
    assert_eq!(transport.last().method, Method::DELETE);
    assert_eq!(result, json!({"success": true}));
}

#[tokio::test]
async fn test_webhook_validation_failures() {
    let transport = RecordingTransport::returning("{}");
    let service = WebhookServiceImpl::new(transport.clone());

    let err = service.update("w1", &json!([])).await.unwrap_err();
    assert_eq!(err.to_string(), "Webhook data must be a non-empty array.");

    let err = service.update("", &json!({"url": "x"})).await.unwrap_err();
    assert_eq!(err.to_string(), "Webhook URL ID must be a non-empty string.");

    let err = service.update_status("w1", " ").await.unwrap_err();
    assert_eq!(err.to_string(), "Webhook status must be a non-empty string.");

    assert!(service.delete("").await.is_err());
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_cv_parsing_rejects_missing_file() {
    let transport = RecordingTransport::returning("{}");
    let service = CvParsingServiceImpl::new(transport.clone());

    let err = service
        .parsing(Path::new("/definitely/not/here/cv.pdf"))
        .await
        .unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(err.to_string().starts_with("CV File must be a valid file of type pdf"));
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_cv_parsing_builds_multipart_request() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.docx");
    std::fs::write(&path, b"PK fake docx").unwrap();

    let transport = RecordingTransport::returning("not json");
    let service = CvParsingServiceImpl::new(transport.clone());

    let result = service.parsing(&path).await.unwrap();

    assert_eq!(result, Value::Null);
    let request = transport.last();
    assert_eq!(request.path, "/v1/cv-parsing");
    assert_eq!(
        request.body,
        RequestBody::Multipart {
            field: "file".to_string(),
            path: path.clone(),
        }
    );
}

#[test]
fn test_candidate_update_action_status_reports_first_missing_field() {
    let transport = RecordingTransport::returning("{}");
    let service = CandidateServiceImpl::new(transport.clone());

    let err = tokio_test::block_on(service.update_action_status("", "", "", "")).unwrap_err();
    assert_eq!(err.to_string(), "resumeBatchId must be a non-empty string.");

    let pending = service.update_action_status("b1", "c1", "shortlist", "");
    let err = tokio_test::block_on(pending).unwrap_err();
    assert_eq!(err.to_string(), "status must be a non-empty string.");

    assert_eq!(transport.calls(), 0);
}
