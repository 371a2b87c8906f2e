//! Stream consumer: one streaming call per attempt, folded into ordered
//! sink invocations.
//!
//! The consumer owns no state between calls. Its only visible side effects
//! are the `on_fragment` invocations and the final resolution.

use crate::config::ReadmeConfig;
use crate::error::ApiError;
use crate::generate::CancelToken;
use crate::prompt;
use crate::provider::GenerativeClient;
use crate::source::SourceFile;
use futures::StreamExt;
use tracing::{debug, info};

/// Run one generation attempt. Assembles the payload from `files` and
/// `config`, opens a single streaming call, and forwards every non-empty
/// fragment to `on_fragment` in arrival order, exactly once each.
///
/// Fails fast with [`ApiError::NoSourceFiles`] before any network contact
/// when `files` is empty. Cancellation lands at the next fragment boundary
/// and surfaces as [`ApiError::GenerationCancelled`]; any other failure is
/// surfaced exactly once as the rejected outcome.
pub async fn stream_readme(
    client: &dyn GenerativeClient,
    files: &[SourceFile],
    config: &ReadmeConfig,
    mut on_fragment: impl FnMut(&str),
    cancel: &CancelToken,
) -> Result<(), ApiError> {
    if files.is_empty() {
        return Err(ApiError::NoSourceFiles);
    }

    let payload = prompt::build_prompt(config, files);
    debug!(
        files = files.len(),
        payload_bytes = payload.len(),
        "assembled generation payload"
    );

    let mut stream = client.stream(payload).await?;
    info!(
        provider = client.provider_name(),
        model = client.model_name(),
        "generation stream opened"
    );

    let mut fragments = 0usize;
    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                info!(fragments, "generation cancelled mid-stream");
                return Err(ApiError::GenerationCancelled);
            }
            next = stream.next() => match next {
                Some(Ok(text)) => {
                    if !text.is_empty() {
                        fragments += 1;
                        on_fragment(&text);
                    }
                }
                Some(Err(err)) => return Err(err),
                None => break,
            }
        }
    }

    debug!(fragments, "generation stream exhausted");
    Ok(())
}
