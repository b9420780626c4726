//! Target page fetching.
//!
//! A single GET per analysis: no retries, redirects follow the client's
//! default policy.

use futures::StreamExt;
use log::debug;

use crate::app::AnalysisRequest;
use crate::config::MAX_RESPONSE_BODY_SIZE;
use crate::error_handling::{describe_fetch_failure, AnalysisError};

/// Fetches the HTML document for an analysis request.
///
/// Non-2xx responses are reported with their canonical reason phrase
/// (`"Not Found"`), falling back to the numeric status when the code has
/// none. Transport failures are reported by category (`"request timed out"`).
///
/// # Errors
///
/// Returns `AnalysisError::Fetch` if the target cannot be reached, answers
/// with a non-success status, or the body cannot be read.
pub async fn fetch_document(
    client: &reqwest::Client,
    request: &AnalysisRequest,
) -> Result<String, AnalysisError> {
    let url = request.url().clone();
    debug!("Fetching {url}");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| AnalysisError::fetch(describe_fetch_failure(&e)))?;

    let status = response.status();
    debug!("Response for {}: {} (final url {})", request.as_str(), status, response.url());

    if !status.is_success() {
        let reason = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_u16().to_string());
        return Err(AnalysisError::fetch(reason));
    }

    let body = read_body_capped(response, request.as_str()).await?;
    Ok(String::from_utf8_lossy(&body).into_owned())
}

/// Streams the response body, keeping at most `MAX_RESPONSE_BODY_SIZE` bytes.
///
/// Oversized pages are truncated rather than rejected; the parser copes with
/// a cut-off document. Reading stops at the cap whether or not the server
/// announced a `Content-Length`.
async fn read_body_capped(
    response: reqwest::Response,
    url: &str,
) -> Result<Vec<u8>, AnalysisError> {
    let max_size = MAX_RESPONSE_BODY_SIZE;
    let initial = response
        .content_length()
        .map_or(16 * 1024, |len| usize::try_from(len).unwrap_or(max_size))
        .min(max_size);

    let mut stream = response.bytes_stream();
    let mut buf = Vec::with_capacity(initial);

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result.map_err(|e| AnalysisError::fetch(describe_fetch_failure(&e)))?;

        let remaining = max_size - buf.len();
        if chunk.len() > remaining {
            buf.extend_from_slice(&chunk[..remaining]);
            debug!(
                "Body of {} exceeds {}KB limit, analyzing the first {} bytes",
                url,
                max_size / 1024,
                buf.len()
            );
            break;
        }

        buf.extend_from_slice(&chunk);
    }

    Ok(buf)
}
