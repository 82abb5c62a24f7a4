/*!
 * Tests for line-preserving translation
 */

use comtrans::providers::mock::MockBackend;
use comtrans::translation::translate_line_preserving;

/// Test that indentation width is reconstructed in front of translated content
#[tokio::test]
async fn test_translate_withIndentedLines_shouldPreserveIndentWidth() {
    let backend = MockBackend::uppercase("zh", "en");
    let result = translate_line_preserving("  foo\n    bar", &backend).await;

    assert_eq!(result.text, "  FOO\n    BAR");
    assert_eq!(result.failed_lines, 0);
}

/// Test that blank lines map to empty output lines and never reach the backend
#[tokio::test]
async fn test_translate_withBlankLines_shouldEmitEmptyLines() {
    let backend = MockBackend::uppercase("zh", "en");
    let result = translate_line_preserving("foo\n\nbar", &backend).await;

    assert_eq!(result.text, "FOO\n\nBAR");
    // Only the two non-blank lines were sent for translation
    assert_eq!(backend.request_count(), 2);
}

/// Test that a whitespace-only line becomes an empty line, indentation dropped
#[tokio::test]
async fn test_translate_withWhitespaceOnlyLine_shouldDropItsIndentation() {
    let backend = MockBackend::identity("zh", "en");
    let result = translate_line_preserving("foo\n    \nbar", &backend).await;

    assert_eq!(result.text, "foo\n\nbar");
}

/// Test that output line count always equals input line count
#[tokio::test]
async fn test_translate_withTrailingNewline_shouldKeepLineCount() {
    let backend = MockBackend::identity("zh", "en");
    let input = "one\ntwo\n";
    let result = translate_line_preserving(input, &backend).await;

    assert_eq!(
        result.text.split('\n').count(),
        input.split('\n').count()
    );
    assert_eq!(result.text, "one\ntwo\n");
}

/// Test that trailing whitespace is stripped before translation
#[tokio::test]
async fn test_translate_withTrailingWhitespace_shouldStripIt() {
    let backend = MockBackend::identity("zh", "en");
    let result = translate_line_preserving("  foo   ", &backend).await;

    assert_eq!(result.text, "  foo");
}

/// Test that a failed line keeps its original text and the run continues
#[tokio::test]
async fn test_translate_withFailingBackend_shouldSubstituteOriginalText() {
    let backend = MockBackend::failing("zh", "en");
    let result = translate_line_preserving("  foo\n\nbar", &backend).await;

    assert_eq!(result.text, "  foo\n\nbar");
    assert_eq!(result.failed_lines, 2);
}

/// Test that an intermittent failure only affects its own line
#[tokio::test]
async fn test_translate_withIntermittentFailure_shouldOnlyAffectOneLine() {
    // Fails on every second request: line two keeps its original text
    let backend = MockBackend::intermittent("zh", "en", 2);
    let result = translate_line_preserving("one\ntwo\nthree", &backend).await;

    assert_eq!(result.text, "one\ntwo\nthree");
    assert_eq!(result.failed_lines, 1);
}

/// Test that empty input yields empty output with one (empty) line
#[tokio::test]
async fn test_translate_withEmptyInput_shouldYieldEmptyOutput() {
    let backend = MockBackend::uppercase("zh", "en");
    let result = translate_line_preserving("", &backend).await;

    assert_eq!(result.text, "");
    assert_eq!(backend.request_count(), 0);
}
