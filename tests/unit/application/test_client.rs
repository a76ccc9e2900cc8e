use crate::support::RecordingTransport;
use serde_json::json;
use talentscope_client::prelude::*;

#[test]
fn test_client_initializes_all_services() {
    let client = TalentScopeClient::new(
        "https://api.talentscope.com",
        "validAccessToken",
        "validRefreshToken",
    )
    .expect("valid base url");

    assert_eq!(client.transport().base_url(), "https://api.talentscope.com");
}

#[test]
fn test_client_accepts_empty_access_token() {
    assert!(TalentScopeClient::new("https://api.talentscope.com", "", "refresh").is_ok());
}

#[test]
fn test_client_rejects_invalid_base_url() {
    for base_url in ["not-a-url", "invalid-url", ""] {
        let err = TalentScopeClient::new(base_url, "token", "refresh")
            .err()
            .expect("construction should fail");
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "Invalid Base url URL.");
    }
}

#[test]
fn test_client_with_http_client_validates_base_url() {
    let http = reqwest::Client::new();
    assert!(TalentScopeClient::with_http_client(http.clone(), "localhost:9000", "r").is_err());
    let client = TalentScopeClient::with_http_client(http, "http://localhost:9000/", "r").unwrap();
    assert_eq!(client.transport().base_url(), "http://localhost:9000");
}

#[test]
fn test_client_rejects_base_url_with_query_or_fragment() {
    for base_url in ["http://h?x=1", "https://api.talentscope.com#frag"] {
        let err = TalentScopeClient::new(base_url, "token", "refresh")
            .err()
            .expect("construction should fail");
        assert_eq!(err.to_string(), "Invalid Base url URL.");

        let http = reqwest::Client::new();
        assert!(TalentScopeClient::with_http_client(http, base_url, "r").is_err());
    }
}

#[test]
fn test_client_from_config() {
    let config = Config::with_credentials("https://api.talentscope.com", None, "refresh");
    assert!(TalentScopeClient::from_config(&config).is_ok());
}

#[tokio::test]
async fn test_services_share_one_transport() {
    let transport = RecordingTransport::returning(r#"{"ok":true}"#);
    let client = TalentScopeClient::with_transport(transport.clone(), "refresh");

    client.resume_batch.listing().await.unwrap();
    client.webhook.listing().await.unwrap();
    let result = client.auth.refresh_token().await.unwrap();

    assert_eq!(result, json!({"ok": true}));
    assert_eq!(transport.calls(), 3);
}
