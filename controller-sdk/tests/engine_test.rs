use controller_sdk::{API_VERSION, Client, Compatibility, Error, Method, apps};
use httpmock::prelude::*;
use serde_json::json;

fn client_for(server: &MockServer) -> Client {
    Client::new(true, &server.base_url(), "abc123").unwrap()
}

#[tokio::test]
async fn request_sends_the_authentication_contract() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2/apps/myapp/")
            .header("Authorization", "token abc123")
            .header("X-Drycc-Service-Key", "service-key")
            .header("User-Agent", format!("Drycc Rust SDK V{API_VERSION}"));
        then.status(200)
            .header("DRYCC_API_VERSION", API_VERSION)
            .header("DRYCC_PLATFORM_VERSION", "1.5.0")
            .json_body(json!({
                "id": "myapp",
                "owner": "admin",
                "uuid": "de1bf5b5-4a72-4f94-a10c-d2a3741cdf75",
                "created": "2026-01-01T00:00:00Z",
                "updated": "2026-01-01T00:00:00Z"
            }));
    });

    let mut client = client_for(&server);
    client.service_key = "service-key".to_string();

    let app = apps::get(&client, "myapp").await.unwrap();
    assert_eq!(app.id, "myapp");
    assert_eq!(app.owner, "admin");
    assert_eq!(app.uuid, "de1bf5b5-4a72-4f94-a10c-d2a3741cdf75");

    let observed = client.observed_versions();
    assert_eq!(observed.api_version.as_deref(), Some(API_VERSION));
    assert_eq!(observed.platform_version.as_deref(), Some("1.5.0"));

    mock.assert();
}

#[tokio::test]
async fn response_body_decodes_without_field_loss() {
    let server = MockServer::start();
    let payload = json!({
        "id": "myapp",
        "owner": "admin",
        "uuid": "de1bf5b5-4a72-4f94-a10c-d2a3741cdf75",
        "created": "2026-01-01T00:00:00Z",
        "updated": "2026-02-01T00:00:00Z"
    });

    server.mock(|when, then| {
        when.method(GET).path("/v2/apps/myapp/");
        then.status(200)
            .header("DRYCC_API_VERSION", API_VERSION)
            .json_body(payload.clone());
    });

    let client = client_for(&server);
    let res = client
        .request(Method::GET, "/v2/apps/myapp/", None)
        .await
        .unwrap();

    assert_eq!(res.json::<serde_json::Value>().unwrap(), payload);
    assert_eq!(res.compatibility(), &Compatibility::Compatible);
}

#[tokio::test]
async fn major_version_skew_fails_even_on_success() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v2/apps/myapp/");
        then.status(200)
            .header("DRYCC_API_VERSION", "3.0")
            .json_body(json!({"id": "myapp"}));
    });

    let client = client_for(&server);
    let err = apps::get(&client, "myapp").await.unwrap_err();
    assert!(matches!(err, Error::ApiMismatch { ref server, .. } if server == "3.0"));
}

#[tokio::test]
async fn minor_version_skew_is_metadata_not_an_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v2/apps/myapp/");
        then.status(200)
            .header("DRYCC_API_VERSION", "2.9")
            .json_body(json!({"id": "myapp"}));
    });

    let client = client_for(&server);
    let res = client
        .request(Method::GET, "/v2/apps/myapp/", None)
        .await
        .unwrap();

    assert_eq!(
        res.compatibility(),
        &Compatibility::MinorSkew {
            server: "2.9".to_string()
        }
    );
    assert_eq!(
        client.observed_versions().api_version.as_deref(),
        Some("2.9")
    );
}

#[tokio::test]
async fn unauthorized_keeps_the_machine_readable_reason() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v2/apps/myapp/");
        then.status(401)
            .header("DRYCC_API_VERSION", API_VERSION)
            .json_body(json!({"detail": "invalid token"}));
    });

    let client = client_for(&server);
    let err = apps::get(&client, "myapp").await.unwrap_err();

    assert!(matches!(err, Error::Unauthorized { .. }));
    let body = String::from_utf8(err.body().unwrap().to_vec()).unwrap();
    assert!(body.contains("invalid token"));
}

#[tokio::test]
async fn unmapped_statuses_surface_as_unexpected() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v2/apps/myapp/");
        then.status(502).body("bad gateway");
    });

    let client = client_for(&server);
    let err = apps::get(&client, "myapp").await.unwrap_err();
    assert!(matches!(err, Error::Unexpected { .. }));
    assert_eq!(err.status().map(|s| s.as_u16()), Some(502));
}

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    // Port 9 (discard) is reserved and closed on any sane test host.
    let client = Client::new(true, "http://127.0.0.1:9", "abc123").unwrap();
    let err = client
        .request(Method::GET, "/v2/apps/", None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}
