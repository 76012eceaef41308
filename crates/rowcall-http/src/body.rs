//! Webhook HTTP response body type.

use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use http_body_util::Full;

/// Response body for webhook responses.
///
/// Replies are either short buffered text or empty (error statuses carry no
/// body).
///
/// # Examples
///
/// ```
/// use http_body_util::BodyExt;
/// use rowcall_http::body::ReplyBody;
///
/// # tokio_test::block_on(async {
/// let body = ReplyBody::from_text("Hello, jane@example.com!");
/// let bytes = body.collect().await.unwrap().to_bytes();
/// assert_eq!(bytes.as_ref(), b"Hello, jane@example.com!");
/// # });
/// ```
#[derive(Debug, Default)]
pub enum ReplyBody {
    /// A fully buffered text body.
    Buffered(Full<Bytes>),
    /// An empty body.
    #[default]
    Empty,
}

impl ReplyBody {
    /// Create a body from reply text.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::Buffered(Full::new(Bytes::from(text.into())))
    }

    /// Create an empty body.
    #[must_use]
    pub fn empty() -> Self {
        Self::Empty
    }
}

impl http_body::Body for ReplyBody {
    type Data = Bytes;
    type Error = std::io::Error;

    fn poll_frame(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<http_body::Frame<Self::Data>, Self::Error>>> {
        match self.get_mut() {
            Self::Buffered(full) => Pin::new(full)
                .poll_frame(cx)
                .map_err(|never| match never {}),
            Self::Empty => Poll::Ready(None),
        }
    }

    fn is_end_stream(&self) -> bool {
        match self {
            Self::Buffered(full) => full.is_end_stream(),
            Self::Empty => true,
        }
    }

    fn size_hint(&self) -> http_body::SizeHint {
        match self {
            Self::Buffered(full) => full.size_hint(),
            Self::Empty => http_body::SizeHint::with_exact(0),
        }
    }
}
