use crate::common;
use fiskaly_client::prelude::*;
use mockito::{Matcher, Server};

fn is_uuid(id: &str) -> bool {
    let groups: Vec<usize> = id.split('-').map(str::len).collect();
    groups == [8, 4, 4, 4, 12] && id.chars().all(|c| c == '-' || c.is_ascii_hexdigit())
}

fn content(value: Value) -> Content {
    match value {
        Value::Object(map) => map,
        _ => Content::new(),
    }
}

#[tokio::test]
async fn test_taxpayer_set_and_disable() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    let set = server
        .mock("PUT", "/taxpayer")
        .match_header("authorization", common::bearer_header().as_str())
        .match_body(Matcher::Json(json!({
            "content": {
                "issuer": {"tax_number": "B12345678", "legal_name": "ACME SL"},
                "territory": "GIPUZKOA"
            }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::envelope(json!({
            "issuer": {"tax_number": "B12345678", "legal_name": "ACME SL"},
            "territory": "GIPUZKOA",
            "state": "ENABLED"
        })))
        .create_async()
        .await;
    let disable = server
        .mock("PATCH", "/taxpayer")
        .match_body(Matcher::Json(json!({"content": {"state": "DISABLED"}})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::envelope(json!({"state": "DISABLED"})))
        .create_async()
        .await;

    let taxpayer = client
        .taxpayer()
        .set(TaxpayerRequest::new("B12345678", "ACME SL", "GIPUZKOA"), None)
        .await
        .unwrap();
    assert_eq!(taxpayer.content.state.as_deref(), Some("ENABLED"));

    let taxpayer = client.taxpayer().disable().await.unwrap();
    assert_eq!(taxpayer.content.state.as_deref(), Some("DISABLED"));

    set.assert_async().await;
    disable.assert_async().await;
}

#[tokio::test]
async fn test_agreement_generate_and_download_pdf() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;
    let pdf = b"%PDF-1.7\n%\xe2\xe3\xcf\xd3\n".to_vec();

    let generate = server
        .mock("POST", "/taxpayer/agreement")
        .match_body(Matcher::Json(json!({"content": {}, "metadata": {}})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::envelope(json!({"agreement_id": "a1", "state": "GENERATED"})))
        .create_async()
        .await;
    let download = server
        .mock("GET", "/taxpayer/agreement.pdf")
        .match_header("authorization", common::bearer_header().as_str())
        .with_status(200)
        .with_header("content-type", "application/pdf")
        .with_body(&pdf)
        .create_async()
        .await;

    let agreement = client.agreement().generate(None, None).await.unwrap();
    assert_eq!(agreement.content.agreement_id.as_deref(), Some("a1"));

    let bytes = client.agreement().download_pdf().await.unwrap();
    assert_eq!(bytes, pdf);

    generate.assert_async().await;
    download.assert_async().await;
}

#[tokio::test]
async fn test_signer_create_with_certificate() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    let create = server
        .mock("PUT", "/signers/s1")
        .match_body(Matcher::Json(json!({
            "content": {"certificate": "Q0VSVA==", "private_key": "S0VZ", "private_key_password": "pw"},
            "metadata": {}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::envelope(json!({"id": "s1", "state": "ENABLED"})))
        .create_async()
        .await;

    let certificate = SignerCertificate::new("Q0VSVA==", "S0VZ").with_password("pw");
    let signer = client
        .signers()
        .create(Some("s1"), Some(certificate), None)
        .await
        .unwrap();

    assert_eq!(signer.content.id, "s1");
    create.assert_async().await;
}

#[tokio::test]
async fn test_signer_create_without_certificate_generates_id() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    let create = server
        .mock("PUT", Matcher::Regex(r"^/signers/[0-9a-f-]{36}$".to_string()))
        .match_body(Matcher::Json(json!({"metadata": {}})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::envelope(json!({"id": "generated", "state": "ENABLED"})))
        .create_async()
        .await;

    client.signers().create(None, None, None).await.unwrap();
    create.assert_async().await;
}

#[tokio::test]
async fn test_signer_list_wraps_content() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    let list = server
        .mock("GET", "/signers")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"content": [{"id": "s1"}, {"id": "s2", "state": "DISABLED"}]}).to_string())
        .create_async()
        .await;

    let signers = client.signers().list().await.unwrap();

    assert_eq!(signers.len(), 2);
    assert_eq!(signers[1].content.state.as_deref(), Some("DISABLED"));
    list.assert_async().await;
}

#[tokio::test]
async fn test_clients_create_with_given_id() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    let create = server
        .mock("PUT", "/clients/c1")
        .match_header("authorization", common::bearer_header().as_str())
        .match_body(Matcher::Json(json!({"metadata": {}})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::envelope(json!({
            "id": "c1",
            "state": "ENABLED",
            "signer": {"id": "s1"}
        })))
        .create_async()
        .await;

    let device = client.clients().create(Some("c1"), None).await.unwrap();

    assert_eq!(device.content.id, "c1");
    assert_eq!(device.content.state.as_deref(), Some("ENABLED"));
    create.assert_async().await;
}

#[tokio::test]
async fn test_clients_create_generates_uuid_segment() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    let create = server
        .mock(
            "PUT",
            Matcher::Regex(
                r"^/clients/[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$"
                    .to_string(),
            ),
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::envelope(json!({"id": "3b241101-e2bb-4255-8caf-4136c566a962"})))
        .create_async()
        .await;

    let device = client.clients().create(None, None).await.unwrap();

    assert!(is_uuid(&device.content.id));
    create.assert_async().await;
}

#[tokio::test]
async fn test_clients_disable_and_list_with_default_limit() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    let disable = server
        .mock("PATCH", "/clients/c1")
        .match_body(Matcher::Json(json!({
            "content": {"state": "DISABLED"},
            "metadata": {"reason": "closed"}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::envelope(json!({"id": "c1", "state": "DISABLED"})))
        .create_async()
        .await;
    let list = server
        .mock("GET", "/clients")
        .match_query(Matcher::UrlEncoded("limit".into(), "10".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "pagination": {"limit": 10},
                "results": [{"content": {"id": "c1", "state": "DISABLED"}, "metadata": {}}]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let mut metadata = Metadata::new();
    metadata.insert("reason".to_string(), json!("closed"));
    let device = client.clients().disable("c1", Some(metadata)).await.unwrap();
    assert_eq!(device.content.state.as_deref(), Some("DISABLED"));

    let page = client.clients().list(None).await.unwrap();
    assert_eq!(page.len(), 1);
    assert!(!page.has_next());

    disable.assert_async().await;
    list.assert_async().await;
}

#[tokio::test]
async fn test_invoices_list_is_paginated() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    let first = server
        .mock("GET", "/clients/c1/invoices")
        .match_query(Matcher::Exact("limit=2".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "pagination": {"limit": 2, "next": "/clients/c1/invoices?token=t2", "token": "t2"},
                "results": [
                    {"content": {"id": "i1", "state": "ISSUED"}, "metadata": {}},
                    {"content": {"id": "i2", "state": "ISSUED"}, "metadata": {}}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;
    let second = server
        .mock("GET", "/clients/c1/invoices")
        .match_query(Matcher::Exact("limit=2&token=t2".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "pagination": {"limit": 2},
                "results": [{"content": {"id": "i3", "state": "CANCELLED"}, "metadata": {}}]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let page = client
        .invoices()
        .list("c1", Some(ListParams::new().with_limit(2)))
        .await
        .unwrap();
    assert_eq!(page.len(), 2);
    assert!(page.has_next());
    assert_eq!(page.results[0].content.id, "i1");

    let token = page.pagination.token.clone().unwrap();
    let page = client
        .invoices()
        .list("c1", Some(ListParams::new().with_limit(2).with_token(token)))
        .await
        .unwrap();
    assert_eq!(page.len(), 1);
    assert!(!page.has_next());

    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn test_invoice_create_and_cancel() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    let create = server
        .mock("PUT", "/clients/c1/invoices/i1")
        .match_body(Matcher::Json(json!({
            "content": {"type": "SIMPLIFIED", "number": "F-1"},
            "metadata": {}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::envelope(json!({"id": "i1", "state": "ISSUED"})))
        .create_async()
        .await;
    let cancel = server
        .mock("PATCH", "/clients/c1/invoices/i1")
        .match_body(Matcher::Json(json!({
            "content": {"state": "CANCELLED", "reason": "duplicate"},
            "metadata": {}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::envelope(json!({"id": "i1", "state": "CANCELLED"})))
        .create_async()
        .await;

    let invoice = client
        .invoices()
        .create(
            "c1",
            Some("i1"),
            content(json!({"type": "SIMPLIFIED", "number": "F-1"})),
            None,
        )
        .await
        .unwrap();
    assert_eq!(invoice.content.state.as_deref(), Some("ISSUED"));

    let invoice = client
        .invoices()
        .cancel("c1", "i1", Some(content(json!({"reason": "duplicate"}))), None)
        .await
        .unwrap();
    assert_eq!(invoice.content.state.as_deref(), Some("CANCELLED"));

    create.assert_async().await;
    cancel.assert_async().await;
}

#[tokio::test]
async fn test_additional_invoice_kinds_hit_their_endpoints() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    let mut mocks = Vec::new();
    for segment in ["enrichment", "correcting", "remedy", "vat-system-switch"] {
        let mock = server
            .mock("POST", format!("/clients/c1/invoices/{segment}").as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(common::envelope(json!({"id": segment})))
            .create_async()
            .await;
        mocks.push(mock);
    }

    let invoices = client.invoices();
    let body = || content(json!({"invoice": {"id": "i1"}}));
    assert_eq!(invoices.enrichment("c1", body(), None).await.unwrap().content.id, "enrichment");
    assert_eq!(invoices.correcting("c1", body(), None).await.unwrap().content.id, "correcting");
    assert_eq!(invoices.remedy("c1", body(), None).await.unwrap().content.id, "remedy");
    assert_eq!(
        invoices.vat_system_switch("c1", body(), None).await.unwrap().content.id,
        "vat-system-switch"
    );

    for mock in mocks {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_invoice_export_returns_file_or_json() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;
    let zip = vec![0x50, 0x4b, 0x03, 0x04, 0x00, 0xff];

    let export = server
        .mock("POST", "/clients/c1/invoices/export")
        .with_status(200)
        .with_header("content-type", "application/zip")
        .with_body(&zip)
        .create_async()
        .await;

    let response = client
        .invoices()
        .export("c1", content(json!({"format": "ZIP"})), None)
        .await
        .unwrap();

    assert_eq!(response.as_bytes(), Some(zip.as_slice()));
    export.assert_async().await;
}

#[tokio::test]
async fn test_invoice_search_and_xml() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;
    let xml = "<?xml version=\"1.0\"?><Factura id=\"i1\"/>";

    let search = server
        .mock("GET", "/invoices")
        .match_query(Matcher::UrlEncoded("state".into(), "ISSUED".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "pagination": {},
                "results": [{"content": {"id": "i1", "state": "ISSUED"}, "metadata": {}}]
            })
            .to_string(),
        )
        .create_async()
        .await;
    let download = server
        .mock("GET", "/clients/c1/invoices/i1/xml")
        .with_status(200)
        .with_header("content-type", "application/xml")
        .with_body(xml)
        .create_async()
        .await;

    let page = client
        .invoices()
        .search(ListParams::new().with_filter("state", "ISSUED"))
        .await
        .unwrap();
    assert_eq!(page.results[0].content.id, "i1");

    let bytes = client.invoices().download_xml("c1", "i1").await.unwrap();
    assert_eq!(bytes, xml.as_bytes());

    search.assert_async().await;
    download.assert_async().await;
}

#[tokio::test]
async fn test_exports_create_list_and_download_zip() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;
    let zip: Vec<u8> = (0..=255u8).chain([0x50, 0x4b, 0x05, 0x06]).collect();

    let create = server
        .mock("PUT", "/exports/e1")
        .match_body(Matcher::Json(json!({"content": {}, "metadata": {}})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::envelope(json!({"id": "e1", "state": "PENDING"})))
        .create_async()
        .await;
    let list = server
        .mock("GET", "/exports")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"content": [{"id": "e1", "state": "COMPLETED"}]}).to_string())
        .create_async()
        .await;
    let download = server
        .mock("GET", "/exports/e1/file")
        .match_header("authorization", common::bearer_header().as_str())
        .with_status(200)
        .with_header("content-type", "application/zip")
        .with_body(&zip)
        .create_async()
        .await;

    let export = client.exports().create(Some("e1"), None, None).await.unwrap();
    assert_eq!(export.content.state.as_deref(), Some("PENDING"));

    let exports = client.exports().list(None).await.unwrap();
    assert_eq!(exports[0].content.state.as_deref(), Some("COMPLETED"));

    let bytes = client.exports().download_zip("e1").await.unwrap();
    assert_eq!(bytes, zip);

    create.assert_async().await;
    list.assert_async().await;
    download.assert_async().await;
}

#[tokio::test]
async fn test_software_get() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    let software = server
        .mock("GET", "/software")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::envelope(json!({"software_id": "sw1", "name": "POS"})))
        .create_async()
        .await;

    let response = client.software().get().await.unwrap();
    assert_eq!(response.content.software_id.as_deref(), Some("sw1"));
    software.assert_async().await;
}
