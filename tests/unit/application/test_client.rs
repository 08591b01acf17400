use recognize_client::prelude::*;
use std::sync::Mutex;

fn test_config() -> Config {
    Config::with_credentials(Credentials::new("64", "api-key", "clapi-key"))
        .base_url("http://127.0.0.1:9")
}

#[tokio::test]
async fn test_new_client_has_no_session() {
    let client = Client::new(test_config()).unwrap();
    assert!(client.session().await.is_none());
    assert_eq!(client.config().credentials.client_id, "64");
}

#[test]
fn test_handler_registration() {
    let client = Client::new(test_config()).unwrap();
    assert!(!client.handlers().is_registered(OutcomeKind::Success));

    client.on_success(|_| {});
    client.on_error(|_| {});
    assert!(client.handlers().is_registered(OutcomeKind::Success));
    assert!(client.handlers().is_registered(OutcomeKind::Error));

    client.clear_handler(OutcomeKind::Success);
    assert!(!client.handlers().is_registered(OutcomeKind::Success));
    assert!(client.handlers().is_registered(OutcomeKind::Error));
}

#[tokio::test]
async fn test_recognize_with_rejects_invalid_image_without_request() {
    let client = Client::new(test_config()).unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let sink = seen.clone();
    client
        .recognize_with(b"not an image", RecognizeOptions::single(), move |result| {
            sink.lock().unwrap().push(result);
        })
        .await;

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(matches!(seen[0], Err(AppError::ImageRejected(_))));
}

#[tokio::test]
async fn test_transport_failure_reaches_error_handler() {
    let client = Client::new(test_config()).unwrap();
    let errors = Arc::new(Mutex::new(Vec::new()));

    let sink = errors.clone();
    client.on_error(move |err| sink.lock().unwrap().push(err.to_string()));

    let result = client.index_status().await;
    assert!(matches!(result, Err(AppError::Network(_))));

    let errors = errors.lock().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("network error"));
}

#[test]
fn test_logout_without_session() {
    let client = Client::new(test_config()).unwrap();
    tokio_test::block_on(async {
        client.logout().await;
        assert!(client.session().await.is_none());
    });
}
