use fiskaly_client::utils::id::{generate_id, id_or_generate};

fn assert_uuid_shape(id: &str) {
    let groups: Vec<usize> = id.split('-').map(str::len).collect();
    assert_eq!(groups, vec![8, 4, 4, 4, 12], "unexpected id shape: {id}");
    assert!(id.chars().all(|c| c == '-' || c.is_ascii_hexdigit()));
}

#[test]
fn test_generate_id_is_hyphenated_uuid() {
    assert_uuid_shape(&generate_id());
}

#[test]
fn test_generate_id_is_unique() {
    assert_ne!(generate_id(), generate_id());
}

#[test]
fn test_id_or_generate_keeps_given_id() {
    assert_eq!(id_or_generate(Some("c1")), "c1");
}

#[test]
fn test_id_or_generate_replaces_missing_or_blank_id() {
    assert_uuid_shape(&id_or_generate(None));
    assert_uuid_shape(&id_or_generate(Some("")));
}
