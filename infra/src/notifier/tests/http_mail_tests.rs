//! Tests for the HTTP mail notifier against a stub relay

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use vs_core::errors::TransportFault;
use vs_core::services::NotifierTrait;
use vs_shared::EmailConfig;

use crate::notifier::HttpMailNotifier;

/// Relay answering each request with the next scripted status
///
/// `hits` counts requests the relay fully received, whether or not the
/// client waited for the answer.
struct StubRelay {
    url: String,
    hits: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<String>>>,
}

async fn stub_relay(statuses: Vec<u16>) -> StubRelay {
    slow_stub_relay(statuses, Duration::ZERO).await
}

async fn slow_stub_relay(statuses: Vec<u16>, delay: Duration) -> StubRelay {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/v1/send", listener.local_addr().unwrap());
    let hits = Arc::new(AtomicUsize::new(0));
    let requests = Arc::new(Mutex::new(Vec::new()));
    let statuses = Arc::new(statuses);

    let (task_hits, task_requests) = (hits.clone(), requests.clone());
    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let (hits, requests, statuses) =
                (task_hits.clone(), task_requests.clone(), statuses.clone());
            tokio::spawn(async move {
                let request = read_request(&mut socket).await;
                let index = hits.fetch_add(1, Ordering::SeqCst);
                requests.lock().unwrap().push(request);

                tokio::time::sleep(delay).await;
                let status = statuses.get(index).or(statuses.last()).copied().unwrap_or(200);
                let response = format!(
                    "HTTP/1.1 {} Stub\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
                    status
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    StubRelay { url, hits, requests }
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];
    loop {
        let n = socket.read(&mut buf).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        data.extend_from_slice(&buf[..n]);

        let text = String::from_utf8_lossy(&data).to_string();
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if data.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&data).to_string()
}

fn config(url: &str) -> EmailConfig {
    let mut config = EmailConfig::http(url, "codes@example.com").with_credentials("mailer", "pw");
    config.retry_delay_ms = 1;
    config.request_timeout_secs = 2;
    config
}

#[tokio::test]
async fn test_delivers_json_message_with_basic_auth() {
    let relay = stub_relay(vec![200]).await;
    let notifier = HttpMailNotifier::new(config(&relay.url)).unwrap();

    let delivered = notifier
        .send("user@example.com", "Verification Code", "Your code is a1b2")
        .await
        .unwrap();

    assert!(delivered);
    assert_eq!(relay.hits.load(Ordering::SeqCst), 1);

    let request = relay.requests.lock().unwrap()[0].clone();
    assert!(request.starts_with("POST /v1/send"));
    assert!(request.to_ascii_lowercase().contains("authorization: basic"));
    assert!(request.contains(r#""to":"user@example.com""#));
    assert!(request.contains(r#""from":"codes@example.com""#));
    assert!(request.contains(r#""text":"Your code is a1b2""#));
}

#[tokio::test]
async fn test_server_error_is_a_fault_without_redelivery() {
    let relay = stub_relay(vec![503, 200]).await;
    let mut config = config(&relay.url);
    config.max_retries = 3;
    let notifier = HttpMailNotifier::new(config).unwrap();

    let result = notifier.send("user@example.com", "s", "b").await;

    assert!(matches!(result, Err(TransportFault::Rejected(_))));
    assert_eq!(relay.hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_timeout_is_a_fault_without_redelivery() {
    let relay = slow_stub_relay(vec![200], Duration::from_secs(3)).await;
    let mut config = config(&relay.url);
    config.request_timeout_secs = 1;
    config.max_retries = 3;
    let notifier = HttpMailNotifier::new(config).unwrap();

    let result = notifier.send("user@example.com", "s", "b").await;

    assert!(matches!(result, Err(TransportFault::Timeout(_))));
    assert_eq!(relay.hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_throttled_request_is_retried() {
    let relay = stub_relay(vec![429, 200]).await;
    let mut config = config(&relay.url);
    config.max_retries = 3;
    let notifier = HttpMailNotifier::new(config).unwrap();

    assert!(notifier.send("user@example.com", "s", "b").await.unwrap());
    assert_eq!(relay.hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_gives_up_after_max_retries() {
    let relay = stub_relay(vec![429]).await;
    let mut config = config(&relay.url);
    config.max_retries = 3;
    let notifier = HttpMailNotifier::new(config).unwrap();

    let result = notifier.send("user@example.com", "s", "b").await;

    assert!(matches!(result, Err(TransportFault::Rejected(_))));
    assert_eq!(relay.hits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_default_config_sends_once() {
    let relay = stub_relay(vec![429, 200]).await;
    let mut config = EmailConfig::http(&relay.url, "codes@example.com");
    config.retry_delay_ms = 1;
    let notifier = HttpMailNotifier::new(config).unwrap();

    let result = notifier.send("user@example.com", "s", "b").await;

    assert!(matches!(result, Err(TransportFault::Rejected(_))));
    assert_eq!(relay.hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_client_error_is_not_delivered_and_not_retried() {
    let relay = stub_relay(vec![422]).await;
    let notifier = HttpMailNotifier::new(config(&relay.url)).unwrap();

    assert!(!notifier.send("bad-address", "s", "b").await.unwrap());
    assert_eq!(relay.hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_unreachable_relay_is_connection_fault() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/v1/send", listener.local_addr().unwrap());
    drop(listener);

    let mut config = config(&url);
    config.max_retries = 2;
    let notifier = HttpMailNotifier::new(config).unwrap();

    let result = notifier.send("user@example.com", "s", "b").await;
    assert!(matches!(result, Err(TransportFault::Connection(_))));
}
