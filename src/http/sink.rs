//! Streaming reporting channel.
//!
//! A [`ResponseSink`] is the writable half handed to the handler; the paired
//! [`SinkBody`] is the readable half, used as the request body of the
//! reporting POST. Chunks flow through a bounded channel, so memory stays
//! bounded regardless of how large a response the handler produces.

use bytes::Bytes;
use hyper::body::{Body, Frame};
use std::convert::Infallible;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::mpsc;

/// Maximum number of in-flight chunks between handler and reporting request.
const CHANNEL_CAPACITY: usize = 16;

/// Writable half of the reporting channel.
///
/// Dropping the sink ends the body stream; the reporting request then
/// finishes with whatever was written.
#[derive(Debug)]
pub struct ResponseSink {
    tx: mpsc::Sender<Bytes>,
    written: usize,
}

impl ResponseSink {
    /// Create a connected sink/body pair.
    pub fn channel() -> (ResponseSink, SinkBody) {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        (ResponseSink { tx, written: 0 }, SinkBody { rx })
    }

    /// Write a chunk of response bytes.
    ///
    /// Blocks while the channel is full (the reporting request applies
    /// backpressure). Fails with a broken-pipe error once the body half has
    /// been torn down, e.g. after the reporting request itself failed.
    pub async fn write(&mut self, chunk: impl Into<Bytes>) -> io::Result<()> {
        let chunk = chunk.into();
        if chunk.is_empty() {
            return Ok(());
        }
        let len = chunk.len();
        self.tx.send(chunk).await.map_err(|_| {
            io::Error::new(io::ErrorKind::BrokenPipe, "reporting channel closed")
        })?;
        self.written += len;
        Ok(())
    }

    /// Total bytes accepted by the sink so far.
    pub fn bytes_written(&self) -> usize {
        self.written
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.written == 0
    }
}

/// Readable half of the reporting channel, used as an HTTP request body.
#[derive(Debug)]
pub struct SinkBody {
    rx: mpsc::Receiver<Bytes>,
}

impl SinkBody {
    /// A body that yields no frames, for requests without a payload.
    pub fn empty() -> Self {
        let (_, rx) = mpsc::channel(1);
        Self { rx }
    }
}

impl Body for SinkBody {
    type Data = Bytes;
    type Error = Infallible;

    fn poll_frame(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        match self.get_mut().rx.poll_recv(cx) {
            Poll::Ready(Some(chunk)) => Poll::Ready(Some(Ok(Frame::data(chunk)))),
            Poll::Ready(None) => Poll::Ready(None),
            Poll::Pending => Poll::Pending,
        }
    }
}
