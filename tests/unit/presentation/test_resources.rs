use assert_json_diff::assert_json_include;
use fiskaly_client::presentation::*;
use serde_json::json;

#[test]
fn test_taxpayer_response_parses_issuer() {
    let response: TaxpayerResponse = serde_json::from_value(json!({
        "content": {
            "issuer": {"tax_number": "B12345678", "legal_name": "ACME SL"},
            "territory": "BIZKAIA",
            "state": "ENABLED",
            "type": "COMPANY"
        },
        "metadata": {}
    }))
    .unwrap();

    let issuer = response.content.issuer.unwrap();
    assert_eq!(issuer.tax_number, "B12345678");
    assert_eq!(response.content.territory.as_deref(), Some("BIZKAIA"));
    assert_eq!(response.content.extra["type"], "COMPANY");
}

#[test]
fn test_agreement_response_tolerates_sparse_content() {
    let response: AgreementResponse =
        serde_json::from_value(json!({"content": {"state": "GENERATED"}})).unwrap();
    assert_eq!(response.content.agreement_id, None);
    assert_eq!(response.content.state.as_deref(), Some("GENERATED"));
}

#[test]
fn test_device_response_reads_signer_reference() {
    let response: DeviceResponse = serde_json::from_value(json!({
        "content": {"id": "c1", "state": "ENABLED", "signer": {"id": "s1"}}
    }))
    .unwrap();
    assert_eq!(response.content.signer, Some(SignerRef { id: "s1".to_string() }));
}

#[test]
fn test_signer_certificate_debug_hides_key_material() {
    let certificate = SignerCertificate::new("CERTDATA", "PRIVATEKEY").with_password("hunter2");
    let debug = format!("{certificate:?}");
    assert!(!debug.contains("PRIVATEKEY"));
    assert!(!debug.contains("hunter2"));
}

#[test]
fn test_additional_invoice_kind_segments() {
    assert_eq!(AdditionalInvoiceKind::Enrichment.path_segment(), "enrichment");
    assert_eq!(AdditionalInvoiceKind::Correcting.path_segment(), "correcting");
    assert_eq!(AdditionalInvoiceKind::Remedy.path_segment(), "remedy");
    assert_eq!(
        AdditionalInvoiceKind::VatSystemSwitch.to_string(),
        "vat-system-switch"
    );
}

#[test]
fn test_software_response() {
    let response: SoftwareResponse = serde_json::from_value(json!({
        "content": {"software_id": "sw-1", "name": "POS", "version": "2.1"}
    }))
    .unwrap();
    assert_eq!(response.content.name.as_deref(), Some("POS"));
    assert_eq!(response.content.extra["version"], "2.1");
}

#[test]
fn test_organization_payload_skips_unset_fields() {
    let organization = Organization {
        name: "ACME".to_string(),
        address_line1: "Calle Mayor 1".to_string(),
        zip: "28001".to_string(),
        town: "Madrid".to_string(),
        country_code: "ESP".to_string(),
        ..Organization::default()
    };
    let body = serde_json::to_value(&organization).unwrap();

    assert_eq!(
        body,
        json!({
            "name": "ACME",
            "address_line1": "Calle Mayor 1",
            "zip": "28001",
            "town": "Madrid",
            "country_code": "ESP"
        })
    );
}

#[test]
fn test_organization_response_renames_underscored_fields() {
    let response: OrganizationResponse = serde_json::from_value(json!({
        "_id": "org-1",
        "_type": "ORGANIZATION",
        "_envs": ["TEST", "LIVE"],
        "name": "ACME",
        "metadata": null,
        "billing_options": {"gln": "123"}
    }))
    .unwrap();

    assert_eq!(response.id, "org-1");
    assert_eq!(response.kind.as_deref(), Some("ORGANIZATION"));
    assert_eq!(response.envs, vec!["TEST", "LIVE"]);
    assert!(response.metadata.is_empty());
    assert_json_include!(actual: json!(response.extra), expected: json!({"billing_options": {"gln": "123"}}));
}

#[test]
fn test_managed_api_key_payload() {
    let body = serde_json::to_value(ManagedApiKey::new("pos-key")).unwrap();
    assert_eq!(body, json!({"name": "pos-key", "status": "enabled"}));
}

#[test]
fn test_api_key_credentials_require_secret() {
    let mut response: ApiKeyResponse = serde_json::from_value(json!({
        "_id": "k1",
        "key": "test_key",
        "status": "enabled",
        "created_at": 1700000000
    }))
    .unwrap();
    assert_eq!(response.status, Some(ApiKeyStatus::Enabled));
    assert!(response.credentials().is_none());

    response.secret = Some("test_secret".to_string());
    let credentials = response.credentials().unwrap();
    assert_eq!(credentials.api_key, "test_key");
    assert_eq!(credentials.api_secret, "test_secret");
}
