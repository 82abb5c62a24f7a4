/*!
 * Tests for translation backend implementations
 */

use comtrans::errors::BackendError;
use comtrans::providers::TranslationBackend;
use comtrans::providers::marian::Marian;
use comtrans::providers::mock::MockBackend;

/// Test that a backend reports its declared language pair
#[test]
fn test_mock_withLanguagePair_shouldReportIt() {
    let backend = MockBackend::identity("zh", "en");

    assert_eq!(backend.source_language(), "zh");
    assert_eq!(backend.target_language(), "en");
}

/// Test that the identity mock echoes its input
#[tokio::test]
async fn test_mock_identity_shouldEchoInput() {
    let backend = MockBackend::identity("zh", "en");
    let result = backend.translate("你好").await.unwrap();

    assert_eq!(result, "你好");
}

/// Test that the failing mock reports a request failure
#[tokio::test]
async fn test_mock_failing_shouldReturnRequestError() {
    let backend = MockBackend::failing("zh", "en");
    let result = backend.translate("text").await;

    assert!(matches!(result, Err(BackendError::RequestFailed(_))));
}

/// Test that the intermittent mock fails on schedule
#[tokio::test]
async fn test_mock_intermittent_shouldFailEveryNth() {
    let backend = MockBackend::intermittent("zh", "en", 3);

    assert!(backend.translate("one").await.is_ok());
    assert!(backend.translate("two").await.is_ok());
    assert!(backend.translate("three").await.is_err());
    assert!(backend.translate("four").await.is_ok());
    assert_eq!(backend.request_count(), 4);
}

/// Test that a custom response generator overrides the behavior output
#[tokio::test]
async fn test_mock_withCustomResponse_shouldUseGenerator() {
    let backend =
        MockBackend::identity("zh", "en").with_custom_response(|text| format!("<{}>", text));
    let result = backend.translate("x").await.unwrap();

    assert_eq!(result, "<x>");
}

/// Test that the Marian client is constructed with a normalized base URL
#[test]
fn test_marian_new_withTrailingSlash_shouldConstruct() {
    let backend = Marian::new("http://localhost:8989/", "Helsinki-NLP/opus-mt-zh-en", "zh", "en", 30);

    assert!(backend.is_ok());
    let backend = backend.unwrap();
    assert_eq!(backend.source_language(), "zh");
    assert_eq!(backend.target_language(), "en");
    assert_eq!(backend.model(), "Helsinki-NLP/opus-mt-zh-en");
}

/// Test that an unreachable Marian server yields a connection error
#[tokio::test]
async fn test_marian_translate_withUnreachableServer_shouldFail() {
    // Reserved TEST-NET address, nothing listens there
    let backend = Marian::new("http://192.0.2.1:1", "m", "zh", "en", 1).unwrap();
    let result = backend.translate("text").await;

    assert!(result.is_err());
}
