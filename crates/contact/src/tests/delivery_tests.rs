use super::*;
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tokio::{
    net::TcpListener,
    sync::{oneshot, Mutex},
};

#[derive(Clone)]
struct EndpointState {
    status: StatusCode,
    tx: Arc<Mutex<Option<oneshot::Sender<ContactMessage>>>>,
}

async fn handle_contact(
    State(state): State<EndpointState>,
    Json(payload): Json<ContactMessage>,
) -> StatusCode {
    if let Some(tx) = state.tx.lock().await.take() {
        let _ = tx.send(payload);
    }
    state.status
}

async fn spawn_form_endpoint(status: StatusCode) -> (Url, oneshot::Receiver<ContactMessage>) {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let (tx, rx) = oneshot::channel();
    let state = EndpointState {
        status,
        tx: Arc::new(Mutex::new(Some(tx))),
    };
    let app = Router::new()
        .route("/contact", post(handle_contact))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    let url = Url::parse(&format!("http://{addr}/contact")).expect("endpoint url");
    (url, rx)
}

async fn handle_slowly() -> StatusCode {
    tokio::time::sleep(Duration::from_secs(5)).await;
    StatusCode::OK
}

async fn spawn_slow_endpoint() -> Url {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let app = Router::new().route("/contact", post(handle_slowly));
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Url::parse(&format!("http://{addr}/contact")).expect("endpoint url")
}

fn sample_message() -> ContactMessage {
    ContactMessage {
        name: "Alex".into(),
        email: "a@x.com".into(),
        subject: "Hello".into(),
        message: "Hi".into(),
    }
}

#[tokio::test]
async fn delivers_json_payload_on_success() {
    let (endpoint, payload_rx) = spawn_form_endpoint(StatusCode::OK).await;
    let relay = FormRelay::new().expect("relay");

    relay
        .deliver(&endpoint, &sample_message())
        .await
        .expect("delivery");

    let received = payload_rx.await.expect("payload");
    assert_eq!(received, sample_message());
}

#[tokio::test]
async fn any_2xx_status_counts_as_delivered() {
    let (endpoint, _payload_rx) = spawn_form_endpoint(StatusCode::ACCEPTED).await;
    let relay = FormRelay::new().expect("relay");
    assert!(relay.deliver(&endpoint, &sample_message()).await.is_ok());
}

#[tokio::test]
async fn server_error_is_a_delivery_failure_with_fixed_text() {
    let (endpoint, _payload_rx) = spawn_form_endpoint(StatusCode::INTERNAL_SERVER_ERROR).await;
    let relay = FormRelay::new().expect("relay");

    let err = relay
        .deliver(&endpoint, &sample_message())
        .await
        .expect_err("must fail");

    assert!(matches!(
        err,
        DeliveryError::Status(StatusCode::INTERNAL_SERVER_ERROR)
    ));
    assert_eq!(
        err.user_text(),
        "Could not send via the form endpoint. Please use the email link below."
    );
}

#[tokio::test]
async fn client_error_is_also_a_delivery_failure() {
    let (endpoint, _payload_rx) = spawn_form_endpoint(StatusCode::NOT_FOUND).await;
    let relay = FormRelay::new().expect("relay");

    let err = relay
        .deliver(&endpoint, &sample_message())
        .await
        .expect_err("must fail");
    assert!(matches!(err, DeliveryError::Status(StatusCode::NOT_FOUND)));
}

#[tokio::test]
async fn connection_refused_is_a_transport_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let endpoint = Url::parse(&format!("http://{addr}/contact")).expect("endpoint url");
    let relay = FormRelay::new().expect("relay");

    let err = relay
        .deliver(&endpoint, &sample_message())
        .await
        .expect_err("must fail");
    assert!(matches!(err, DeliveryError::Transport(_)));
    assert_eq!(
        err.user_text(),
        "Could not send via the form endpoint. Please use the email link below."
    );
}

#[tokio::test]
async fn slow_endpoint_times_out_as_a_transport_failure() {
    let endpoint = spawn_slow_endpoint().await;
    let relay = FormRelay::with_timeout(Duration::from_millis(200)).expect("relay");

    let err = relay
        .deliver(&endpoint, &sample_message())
        .await
        .expect_err("must time out");

    match err {
        DeliveryError::Transport(inner) => assert!(inner.is_timeout()),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn endpoint_presence_selects_the_remote_route() {
    let route = DeliveryRoute::from_endpoint(Some("https://relay.example.com/send"))
        .expect("valid endpoint");
    assert!(route.is_remote());

    assert_eq!(
        DeliveryRoute::from_endpoint(None).expect("no endpoint"),
        DeliveryRoute::Mailto
    );
    assert_eq!(
        DeliveryRoute::from_endpoint(Some("   ")).expect("blank endpoint"),
        DeliveryRoute::Mailto
    );
}

#[test]
fn malformed_endpoint_is_a_configuration_error() {
    assert!(DeliveryRoute::from_endpoint(Some("not a url")).is_err());
}
