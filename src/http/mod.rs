//! HTTP protocol types for the Runtime API: invocations and the streamed
//! reporting channel.

mod invocation;
mod sink;

pub use invocation::{
    Invocation, DEADLINE_MS_HEADER, FUNCTION_ARN_HEADER, REQUEST_ID_HEADER, TRACE_ID_HEADER,
};
pub use sink::{ResponseSink, SinkBody};
