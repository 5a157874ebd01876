//! Tests for the log notifier and the notifier factory

use vs_shared::EmailConfig;

use crate::notifier::{create_notifier, LogNotifier};
use crate::InfrastructureError;
use vs_core::services::NotifierTrait;

#[tokio::test]
async fn test_log_notifier_always_delivers() {
    let notifier = LogNotifier::new("codes@example.com");

    assert!(notifier
        .send("user@example.com", "Verification Code", "Your code is a1b2")
        .await
        .unwrap());
    assert!(notifier.send("", "s", "b").await.unwrap());
    assert_eq!(notifier.sent_count(), 2);
}

#[tokio::test]
async fn test_factory_defaults_to_log_notifier() {
    let notifier = create_notifier(&EmailConfig::default()).unwrap();
    assert!(notifier.send("user@example.com", "s", "b").await.unwrap());
}

#[test]
fn test_factory_rejects_http_without_url() {
    let config = EmailConfig::http("", "codes@example.com");
    assert!(matches!(
        create_notifier(&config),
        Err(InfrastructureError::Config(_))
    ));
}
