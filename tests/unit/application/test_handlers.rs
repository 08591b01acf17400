use recognize_client::application::handlers::{Handlers, OutcomeKind};
use recognize_client::error::AppError;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

#[test]
fn test_outcome_kind_of() {
    assert_eq!(OutcomeKind::of(&Ok::<_, AppError>(1)), OutcomeKind::Success);
    assert_eq!(
        OutcomeKind::of(&Err::<(), _>(AppError::Unauthorized)),
        OutcomeKind::Error
    );
}

#[test]
fn test_outcome_kind_display_and_serde() {
    assert_eq!(OutcomeKind::Success.to_string(), "success");
    assert_eq!(serde_json::to_string(&OutcomeKind::Error).unwrap(), "\"error\"");
}

#[test]
fn test_error_only_reaches_error_handler() {
    let handlers = Handlers::new();
    let successes = Arc::new(Mutex::new(0));
    let errors = Arc::new(Mutex::new(Vec::new()));

    let s = successes.clone();
    handlers.set_success(Arc::new(move |_| *s.lock().unwrap() += 1));
    let e = errors.clone();
    handlers.set_error(Arc::new(move |err: &AppError| e.lock().unwrap().push(err.message())));

    handlers.dispatch(&Err(AppError::Api {
        status: "2".to_string(),
        message: "Wrong ID".to_string(),
    }));

    assert_eq!(*successes.lock().unwrap(), 0);
    assert_eq!(*errors.lock().unwrap(), vec!["Wrong ID".to_string()]);
}

#[test]
fn test_handler_may_replace_itself() {
    let handlers = Arc::new(Handlers::new());
    let payloads = Arc::new(Mutex::new(Vec::<Value>::new()));

    let registry = handlers.clone();
    let sink = payloads.clone();
    handlers.set_success(Arc::new(move |data: &Value| {
        sink.lock().unwrap().push(data.clone());
        registry.set_success(Arc::new(|_| {}));
    }));

    handlers.dispatch(&Ok(json!({"a": "1"})));
    handlers.dispatch(&Ok(json!({"a": "2"})));

    assert_eq!(*payloads.lock().unwrap(), vec![json!({"a": "1"})]);
}
