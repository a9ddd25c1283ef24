// Client tests against a local mock API server

use imgix_client::{
    DeploymentStatus, ImgixClient, ImgixClientConfig, ImgixError, Source, SourceAttributes,
    SourceDeployment,
};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_SOURCE_ID: &str = "601430223753592c4e822e2c";
const TEST_API_TOKEN: &str = "abc";

const SAMPLE_SOURCE: &str = include_str!("testdata/sample_source.json");

fn test_client(server: &MockServer) -> ImgixClient {
    let config = ImgixClientConfig::new(TEST_API_TOKEN).with_api_base_url(&server.uri());
    ImgixClient::new(config).expect("client should build with a non-empty key")
}

fn expected_sample_source() -> Source {
    Source {
        id: Some(TEST_SOURCE_ID.to_string()),
        type_: Some("sources".to_string()),
        attributes: SourceAttributes {
            date_deployed: Some(1612274615),
            deployment_status: Some(DeploymentStatus::Disabled),
            enabled: Some(false),
            name: "source1".to_string(),
            secure_url_token: None,
            deployment: SourceDeployment {
                allows_upload: None,
                annotation: "source1 annotation".to_string(),
                cache_ttl_behavior: "respect_origin".to_string(),
                cache_ttl_error: 300,
                cache_ttl_value: 31536000,
                crossdomain_xml_enabled: false,
                custom_domains: vec![],
                default_params: Default::default(),
                image_error: None,
                image_error_append_qs: false,
                image_missing: None,
                image_missing_append_qs: false,
                imgix_subdomains: vec!["example-1".to_string(), "example-2".to_string()],
                s3_access_key: Some("AKIABCDEFGHI".to_string()),
                s3_secret_key: None,
                s3_bucket: Some("abc-bucket".to_string()),
                s3_prefix: Some("imgix-files".to_string()),
                gcs_access_key: None,
                gcs_secret_key: None,
                gcs_bucket: None,
                gcs_prefix: None,
                secure_url_enabled: Some(false),
                type_: "s3".to_string(),
            },
        },
    }
}

#[tokio::test]
async fn test_get_source_by_id_decodes_sample() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/api/v1/sources/{}", TEST_SOURCE_ID)))
        .and(header("Authorization", format!("Bearer {}", TEST_API_TOKEN)))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SAMPLE_SOURCE, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let source = client.get_source_by_id(TEST_SOURCE_ID).await.unwrap();

    assert_eq!(source, expected_sample_source());
}

#[tokio::test]
async fn test_get_source_requires_bearer_auth() {
    let server = MockServer::start().await;

    // Only a correctly authenticated request matches; everything else 404s.
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/sources/{}", TEST_SOURCE_ID)))
        .and(header("Authorization", format!("Bearer {}", TEST_API_TOKEN)))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SAMPLE_SOURCE, "application/json"))
        .mount(&server)
        .await;

    let bad_config = ImgixClientConfig::new("wrong-token").with_api_base_url(&server.uri());
    let bad_client = ImgixClient::new(bad_config).unwrap();

    let result = bad_client.get_source_by_id(TEST_SOURCE_ID).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_create_source_adopts_server_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/sources"))
        .and(header("Authorization", format!("Bearer {}", TEST_API_TOKEN)))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(201).set_body_raw(SAMPLE_SOURCE, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);

    let mut request = expected_sample_source();
    request.id = None;

    let created = client.create_source(&request).await.unwrap();
    assert_eq!(created.id.as_deref(), Some(TEST_SOURCE_ID));
}

#[tokio::test]
async fn test_create_request_suppresses_server_computed_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/sources"))
        .respond_with(ResponseTemplate::new(201).set_body_raw(SAMPLE_SOURCE, "application/json"))
        .mount(&server)
        .await;

    let client = test_client(&server);

    // Populate every server-computed field in memory; none may hit the wire.
    let mut request = expected_sample_source();
    request.attributes.date_deployed = Some(42);
    request.attributes.deployment_status = Some(DeploymentStatus::Deployed);
    request.attributes.secure_url_token = Some("secret".to_string());
    request.attributes.deployment.allows_upload = Some(true);

    client.create_source(&request).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8(requests[0].body.clone()).unwrap();
    assert!(!body.contains("date_deployed"));
    assert!(!body.contains("deployment_status"));
    assert!(!body.contains("secure_url_token"));
    assert!(!body.contains("allows_upload"));
    assert!(body.contains("\"name\":\"source1\""));
}

#[tokio::test]
async fn test_create_source_non_201_is_api_error() {
    let server = MockServer::start().await;

    let error_body = r#"{"errors":[{"status":"400","title":"aws_access_key","detail":"key not yet visible"}]}"#;
    Mock::given(method("POST"))
        .and(path("/api/v1/sources"))
        .respond_with(ResponseTemplate::new(400).set_body_raw(error_body, "application/json"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .create_source(&expected_sample_source())
        .await
        .unwrap_err();

    match err {
        ImgixError::Api(body) => {
            assert!(body.has_title("aws_access_key"));
            assert_eq!(
                body.to_string(),
                "status: 400, details: key not yet visible"
            );
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_update_source_returns_input_as_authoritative() {
    let server = MockServer::start().await;

    // The API echoes only a subset of write fields; the client must not
    // trust this body on update.
    Mock::given(method("PATCH"))
        .and(path(format!("/api/v1/sources/{}", TEST_SOURCE_ID)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"data":{"attributes":{"name":"ignored","deployment":{}}}}"#, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut request = expected_sample_source();
    request.attributes.name = "renamed".to_string();

    let updated = client.update_source(&request).await.unwrap();
    assert_eq!(updated.attributes.name, "renamed");
    assert_eq!(updated.id.as_deref(), Some(TEST_SOURCE_ID));
}

#[tokio::test]
async fn test_update_unparseable_error_body_is_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path(format!("/api/v1/sources/{}", TEST_SOURCE_ID)))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .update_source(&expected_sample_source())
        .await
        .unwrap_err();

    match err {
        ImgixError::UnexpectedStatus { status, body } => {
            assert_eq!(status, 502);
            assert_eq!(body, "bad gateway");
        }
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_disable_source_flips_enabled_and_updates() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path(format!("/api/v1/sources/{}", TEST_SOURCE_ID)))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut source = expected_sample_source();
    source.attributes.enabled = Some(true);

    client.disable_source(&mut source).await.unwrap();
    assert_eq!(source.attributes.enabled, Some(false));

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["data"]["attributes"]["enabled"], false);
}
