use fiskaly_client::prelude::*;

#[tokio::test]
async fn test_client_starts_unauthenticated() {
    let config = Config::with_credentials("key", "secret").with_organization_id("org-1");
    let client = Client::new(config).unwrap();

    let session = client.session().read().await;
    assert_eq!(session.bearer_token(), None);
    assert_eq!(session.management_bearer_token(), None);
    assert_eq!(session.organization_id(), Some("org-1"));
    assert_eq!(session.credentials().api_key, "key");
}

#[tokio::test]
async fn test_client_services_share_one_session() {
    let client = Client::new(Config::with_credentials("key", "secret")).unwrap();

    client
        .http_client()
        .session()
        .write()
        .await
        .set_bearer_token(BearerToken::new("shared", None));

    assert_eq!(client.session().read().await.bearer_token(), Some("shared"));
}

#[test]
fn test_client_exposes_config() {
    let config = Config::with_credentials("key", "secret").with_base_url("http://localhost:9");
    let client = Client::new(config).unwrap();

    assert_eq!(client.config().rest_api.base_url, "http://localhost:9");
    assert_eq!(client.http_client().base_url(Api::Sign), "http://localhost:9");
    assert_eq!(
        client.http_client().base_url(Api::Management),
        fiskaly_client::constants::MANAGEMENT_BASE_URL
    );
}

#[test]
fn test_version_matches_package() {
    assert_eq!(version(), env!("CARGO_PKG_VERSION"));
}
