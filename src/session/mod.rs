//! Session recording.
//!
//! After every successful mutating call the game hands a `SessionRecord`
//! (the action plus the resulting state) to an injected `SessionSink`. The
//! engine never depends on the sink: a failing sink is logged and ignored.
//!
//! ## Sinks
//!
//! - `NullSink`: discards everything (the default)
//! - `MemorySink`: keeps records in a persistent vector, cheap to snapshot
//! - `JsonLinesSink`: writes one JSON record per line to any `io::Write`

mod record;
mod sink;

pub use record::{SessionError, SessionRecord};
pub use sink::{JsonLinesSink, MemorySink, NullSink, SessionSink};
