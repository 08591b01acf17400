use recognize_client::presentation::image::{ImageInfo, images_from_list};
use serde_json::json;

#[test]
fn test_images_from_normalized_list() {
    let data = json!({
        "0": {"id": "a1", "name": "Poster", "href": "http://img/a1.jpg"},
        "1": {"id": "b2", "name": "Cover"},
    });
    let images = images_from_list(&data);
    assert_eq!(
        images,
        vec![
            ImageInfo {
                id: "a1".to_string(),
                name: "Poster".to_string(),
                href: "http://img/a1.jpg".to_string(),
            },
            ImageInfo {
                id: "b2".to_string(),
                name: "Cover".to_string(),
                href: String::new(),
            },
        ]
    );
}
