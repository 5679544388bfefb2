//! Diagnostics primitives for the agent engine.
//!
//! The trace channel is a side channel only: nothing here feeds back into
//! decisions, and correctness never depends on a sink being attached.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod trace;

pub use trace::{NullTraceSink, TraceEvent, TraceSink, TracingSink, VecTraceSink};
