use crate::common::{API_KEY, CLIENT_ID, create_test_client, jpeg};
use mockito::Server;
use recognize_client::prelude::*;
use std::sync::Mutex;

#[tokio::test]
async fn test_recognize_signs_request_without_session() {
    let mut server = Server::new_async().await;
    let image = jpeg(400, 300);
    let auth = server
        .mock("POST", "/auth")
        .expect(0)
        .create_async()
        .await;
    let recognize = server
        .mock("POST", format!("/v2/recognize/single/{CLIENT_ID}").as_str())
        .match_header("content-type", "image/jpeg")
        .match_header("x-itraff-hash", recognition_hash(API_KEY, &image).as_str())
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":0,"id":"poster-1","message":null}"#)
        .expect(1)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let result = client
        .recognize(&image, RecognizeOptions::single())
        .await
        .unwrap();

    assert!(result.is_success());
    assert_eq!(result.id.as_deref(), Some("poster-1"));
    assert!(client.session().await.is_none());
    auth.assert_async().await;
    recognize.assert_async().await;
}

#[tokio::test]
async fn test_recognize_multi_all_results_path() {
    let mut server = Server::new_async().await;
    let image = jpeg(1024, 768);
    let recognize = server
        .mock("POST", format!("/v2/recognize/multi/all/{CLIENT_ID}").as_str())
        .with_body(
            r#"{"status":0,"objects":[{"id":"a1","name":"Poster","location":[]},{"id":"b2","name":"Cover"}]}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let result = client
        .recognize(&image, RecognizeOptions::multi().with_all_results(true))
        .await
        .unwrap();

    assert_eq!(result.objects.len(), 2);
    assert_eq!(result.summary(), "a1, b2");
    recognize.assert_async().await;
}

#[tokio::test]
async fn test_recognize_error_status_is_returned() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", format!("/v2/recognize/single/{CLIENT_ID}").as_str())
        .with_body(r#"{"status":1,"message":"Wrong hash"}"#)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let result = client
        .recognize(&jpeg(400, 300), RecognizeOptions::single())
        .await
        .unwrap();

    assert!(!result.is_success());
    assert_eq!(result.error_message(), "Wrong hash");
}

#[tokio::test]
async fn test_rejected_image_makes_no_request() {
    let mut server = Server::new_async().await;
    let recognize = server
        .mock("POST", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let err = client
        .recognize(&jpeg(50, 50), RecognizeOptions::single())
        .await
        .unwrap_err();

    assert_eq!(
        err.message(),
        "Image does not meet the requirements of single mode query image."
    );
    recognize.assert_async().await;
}

#[tokio::test]
async fn test_recognize_with_never_touches_handlers() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", format!("/v2/recognize/single/{CLIENT_ID}").as_str())
        .with_body(r#"{"status":0,"id":7}"#)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    client.on_success(|data| panic!("handler called with {data}"));
    client.on_error(|err| panic!("handler called with {err}"));

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    client
        .recognize_with(&jpeg(400, 300), RecognizeOptions::single(), move |result| {
            sink.lock().unwrap().push(result.map(|r| r.summary()).map_err(|e| e.to_string()));
        })
        .await;

    assert_eq!(*seen.lock().unwrap(), vec![Ok("7".to_string())]);
}

#[tokio::test]
async fn test_recognize_server_error_page_keeps_status() {
    let mut server = Server::new_async().await;
    let recognize = server
        .mock("POST", format!("/v2/recognize/single/{CLIENT_ID}").as_str())
        .with_status(500)
        .with_header("content-type", "text/html")
        .with_body("<html>Internal Server Error</html>")
        .expect(1)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let err = client
        .recognize(&jpeg(400, 300), RecognizeOptions::single())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::Unexpected(status) if status.as_u16() == 500
    ));
    recognize.assert_async().await;
}

#[tokio::test]
async fn test_recognize_server_error_with_json_body_is_parsed() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", format!("/v2/recognize/single/{CLIENT_ID}").as_str())
        .with_status(500)
        .with_body(r#"{"status":2,"message":"Index not built"}"#)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let result = client
        .recognize(&jpeg(400, 300), RecognizeOptions::single())
        .await
        .unwrap();

    assert!(!result.is_success());
    assert_eq!(result.error_message(), "Index not built");
}
