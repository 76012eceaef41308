//! Webhook signature computation and verification.
//!
//! The flow, in order:
//!
//! 1. Extract the signing timestamp and signature from the request headers.
//! 2. Reject timestamps further than [`TIMESTAMP_TOLERANCE_SECS`] from the
//!    current time, in either direction.
//! 3. Recompute HMAC-SHA256 over `"{version}:{timestamp}:{body}"` with the
//!    shared secret.
//! 4. Compare the hex signatures using constant-time comparison.
//!
//! The main entry point is [`verify`]; [`signature`] is the signing side.

use chrono::Utc;
use hmac::{Hmac, KeyInit, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::error::AuthError;

/// Header carrying the seconds-since-epoch signing timestamp.
pub const TIMESTAMP_HEADER: &str = "x-slack-request-timestamp";

/// Header carrying the versioned hex signature.
pub const SIGNATURE_HEADER: &str = "x-slack-signature";

/// Version literal of the signature scheme.
pub const SIGNATURE_VERSION: &str = "v0";

/// Maximum distance between the signing timestamp and the current time, in
/// seconds. Bounds the replay window in both directions.
pub const TIMESTAMP_TOLERANCE_SECS: i64 = 5 * 60;

type HmacSha256 = Hmac<Sha256>;

/// Compute the `v0=<hex>` signature for a timestamp and raw body.
///
/// The signed base string is `"v0:{timestamp}:{body}"`; the digest is
/// encoded as lowercase hex and prefixed with the version literal.
#[must_use]
pub fn signature(secret: &str, timestamp: i64, body: &[u8]) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can accept keys of any length");
    mac.update(format!("{SIGNATURE_VERSION}:{timestamp}:").as_bytes());
    mac.update(body);
    let digest = mac.finalize().into_bytes();

    format!("{SIGNATURE_VERSION}={}", hex::encode(digest))
}

/// Verify a signed webhook request against the shared signing secret.
///
/// The body must be the raw request bytes exactly as received; any
/// re-encoding invalidates the signature.
///
/// # Errors
///
/// Returns an [`AuthError`] if a signing header is missing or malformed,
/// the timestamp is outside the accepted window, the signature does not
/// match, or the secret is empty. All but the last are unauthorized-class
/// failures; see [`AuthError::is_unauthorized`].
pub fn verify(secret: &str, headers: &http::HeaderMap, body: &[u8]) -> Result<(), AuthError> {
    if secret.is_empty() {
        return Err(AuthError::EmptySecret);
    }

    let timestamp = extract_header(headers, TIMESTAMP_HEADER)?
        .parse::<i64>()
        .map_err(|_| AuthError::InvalidTimestamp)?;

    // Saturating bounds keep extreme header timestamps from overflowing
    // the window arithmetic.
    let now = Utc::now().timestamp();
    if timestamp < now.saturating_sub(TIMESTAMP_TOLERANCE_SECS)
        || timestamp > now.saturating_add(TIMESTAMP_TOLERANCE_SECS)
    {
        return Err(AuthError::StaleTimestamp);
    }

    let provided = extract_header(headers, SIGNATURE_HEADER)?;
    let expected = signature(secret, timestamp, body);

    // Constant-time comparison to prevent timing attacks.
    if expected.as_bytes().ct_eq(provided.as_bytes()).into() {
        Ok(())
    } else {
        Err(AuthError::SignatureMismatch)
    }
}

/// Extract a header value as a string from the header map.
fn extract_header<'a>(
    headers: &'a http::HeaderMap,
    name: &'static str,
) -> Result<&'a str, AuthError> {
    headers
        .get(name)
        .ok_or(AuthError::MissingHeader(name))?
        .to_str()
        .map_err(|_| AuthError::MissingHeader(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "8f742231b10e8888abcd99yyyzzz85a5";

    /// Build a header map carrying a valid timestamp and signature pair.
    fn signed_headers(secret: &str, timestamp: i64, body: &[u8]) -> http::HeaderMap {
        let mut headers = http::HeaderMap::new();
        headers.insert(TIMESTAMP_HEADER, timestamp.to_string().parse().unwrap());
        headers.insert(
            SIGNATURE_HEADER,
            signature(secret, timestamp, body).parse().unwrap(),
        );
        headers
    }

    #[test]
    fn test_should_compute_signature_matching_published_example() {
        // The worked example from the platform's request-verification docs.
        let body = "token=xyzz0WbapA4vBCDEFasx0q6G&team_id=T1DC2JH3J&team_domain=testteamnow\
            &channel_id=G8PSS9T3V&channel_name=foobar&user_id=U2CERLKJA&user_name=roadrunner\
            &command=%2Fwebhook-collect&text=&response_url=https%3A%2F%2Fhooks.slack.com\
            %2Fcommands%2FT1DC2JH3J%2F397700885554%2F96rGlfmibIGlgcZRskXaIFfN\
            &trigger_id=398738663015.47445629121.803a0bc887a14d10d2c447fce8b6703c";

        let sig = signature(TEST_SECRET, 1_531_420_618, body.as_bytes());
        assert_eq!(
            sig,
            "v0=a2114d57b48eac39b9ad189dd8316235a7b4a8d21a10bd27519666489c69b503"
        );
    }

    #[test]
    fn test_should_prefix_signature_with_version() {
        let sig = signature(TEST_SECRET, 1_234_567_890, b"body");
        assert!(sig.starts_with("v0="));
        // "v0=" plus 32 bytes of hex.
        assert_eq!(sig.len(), 3 + 64);
        assert!(sig[3..].chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(sig, sig.to_lowercase());
    }

    #[test]
    fn test_should_verify_valid_signature() {
        let body = b"command=%2Fwhoami&user_id=U2CERLKJA";
        let now = Utc::now().timestamp();
        let headers = signed_headers(TEST_SECRET, now, body);

        assert!(verify(TEST_SECRET, &headers, body).is_ok());
    }

    #[test]
    fn test_should_accept_timestamp_within_tolerance() {
        let body = b"user_id=U1";
        // Old but comfortably inside the window, so clock movement between
        // signing and verifying cannot tip it over the edge.
        let timestamp = Utc::now().timestamp() - TIMESTAMP_TOLERANCE_SECS + 60;
        let headers = signed_headers(TEST_SECRET, timestamp, body);

        assert!(verify(TEST_SECRET, &headers, body).is_ok());
    }

    #[test]
    fn test_should_reject_stale_timestamp() {
        let body = b"user_id=U1";
        let timestamp = Utc::now().timestamp() - TIMESTAMP_TOLERANCE_SECS - 100;
        let headers = signed_headers(TEST_SECRET, timestamp, body);

        let result = verify(TEST_SECRET, &headers, body);
        assert!(matches!(result, Err(AuthError::StaleTimestamp)));
    }

    #[test]
    fn test_should_reject_future_timestamp() {
        let body = b"user_id=U1";
        let timestamp = Utc::now().timestamp() + TIMESTAMP_TOLERANCE_SECS + 100;
        let headers = signed_headers(TEST_SECRET, timestamp, body);

        let result = verify(TEST_SECRET, &headers, body);
        assert!(matches!(result, Err(AuthError::StaleTimestamp)));
    }

    #[test]
    fn test_should_reject_timestamps_at_integer_extremes() {
        // Extreme timestamps must classify as stale, not trip overflow
        // panics in the window arithmetic.
        let body = b"user_id=U1";

        for timestamp in [i64::MIN, i64::MAX] {
            let headers = signed_headers(TEST_SECRET, timestamp, body);

            let result = verify(TEST_SECRET, &headers, body);
            assert!(matches!(result, Err(AuthError::StaleTimestamp)));
        }
    }

    #[test]
    fn test_should_reject_missing_timestamp_header() {
        let mut headers = http::HeaderMap::new();
        headers.insert(SIGNATURE_HEADER, "v0=abc".parse().unwrap());

        let result = verify(TEST_SECRET, &headers, b"body");
        assert!(matches!(
            result,
            Err(AuthError::MissingHeader(TIMESTAMP_HEADER))
        ));
    }

    #[test]
    fn test_should_reject_missing_signature_header() {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            TIMESTAMP_HEADER,
            Utc::now().timestamp().to_string().parse().unwrap(),
        );

        let result = verify(TEST_SECRET, &headers, b"body");
        assert!(matches!(
            result,
            Err(AuthError::MissingHeader(SIGNATURE_HEADER))
        ));
    }

    #[test]
    fn test_should_reject_non_numeric_timestamp() {
        let mut headers = http::HeaderMap::new();
        headers.insert(TIMESTAMP_HEADER, "not-a-timestamp".parse().unwrap());
        headers.insert(SIGNATURE_HEADER, "v0=abc".parse().unwrap());

        let result = verify(TEST_SECRET, &headers, b"body");
        assert!(matches!(result, Err(AuthError::InvalidTimestamp)));
    }

    #[test]
    fn test_should_reject_tampered_body() {
        let now = Utc::now().timestamp();
        let headers = signed_headers(TEST_SECRET, now, b"user_id=U1");

        let result = verify(TEST_SECRET, &headers, b"user_id=U2");
        assert!(matches!(result, Err(AuthError::SignatureMismatch)));
    }

    #[test]
    fn test_should_reject_tampered_signature() {
        let body = b"user_id=U1";
        let now = Utc::now().timestamp();
        let mut sig = signature(TEST_SECRET, now, body);
        // Flip the last hex digit.
        let last = if sig.ends_with('0') { "1" } else { "0" };
        sig.replace_range(sig.len() - 1.., last);

        let mut headers = http::HeaderMap::new();
        headers.insert(TIMESTAMP_HEADER, now.to_string().parse().unwrap());
        headers.insert(SIGNATURE_HEADER, sig.parse().unwrap());

        let result = verify(TEST_SECRET, &headers, body);
        assert!(matches!(result, Err(AuthError::SignatureMismatch)));
    }

    #[test]
    fn test_should_reject_signature_signed_with_other_secret() {
        let body = b"user_id=U1";
        let now = Utc::now().timestamp();
        let headers = signed_headers("some-other-secret", now, body);

        let result = verify(TEST_SECRET, &headers, body);
        assert!(matches!(result, Err(AuthError::SignatureMismatch)));
    }

    #[test]
    fn test_should_fail_internal_on_empty_secret() {
        let body = b"user_id=U1";
        let now = Utc::now().timestamp();
        let headers = signed_headers(TEST_SECRET, now, body);

        let result = verify("", &headers, body);
        assert!(matches!(result, Err(AuthError::EmptySecret)));
        assert!(!result.unwrap_err().is_unauthorized());
    }

    #[test]
    fn test_should_leave_inputs_untouched() {
        let body = b"user_id=U1";
        let now = Utc::now().timestamp();
        let headers = signed_headers(TEST_SECRET, now, body);

        let before = headers.clone();
        let first = verify(TEST_SECRET, &headers, body);
        let second = verify(TEST_SECRET, &headers, body);

        assert!(first.is_ok());
        assert!(second.is_ok());
        assert_eq!(headers, before);
    }
}
