use std::time::Duration;

use crate::application::ports::TextExtractorError;

/// Runs a parser on the blocking pool, bounded by `timeout`.
pub(super) async fn run_parser<F>(
    timeout: Duration,
    parse: F,
) -> Result<String, TextExtractorError>
where
    F: FnOnce() -> Result<String, TextExtractorError> + Send + 'static,
{
    tokio::time::timeout(timeout, tokio::task::spawn_blocking(parse))
        .await
        .map_err(|_| TextExtractorError::TimedOut(timeout.as_secs()))?
        .map_err(|e| TextExtractorError::ExtractionFailed(format!("task join error: {e}")))?
}
