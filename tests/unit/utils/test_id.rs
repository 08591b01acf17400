use recognize_client::utils::id::{get_id, id_or_generate};

#[test]
fn test_get_id_shape() {
    let id = get_id();
    assert_eq!(id.len(), 16);
    assert!(id.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
}

#[test]
fn test_ids_differ() {
    assert_ne!(get_id(), get_id());
}

#[test]
fn test_id_or_generate_keeps_given_id() {
    assert_eq!(id_or_generate(Some(" poster-1 ")), "poster-1");
}

#[test]
fn test_id_or_generate_fills_blank() {
    assert_eq!(id_or_generate(Some("  ")).len(), 16);
    assert_eq!(id_or_generate(None).len(), 16);
}
