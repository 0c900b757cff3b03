//! Span identity propagation for distributed tracing clients.
//!
//! A trace is a tree of spans, and every span in the tree shares one trace id.
//! When a traced request leaves a process, the span's identity (trace id,
//! span id, parent id, and the sampled/debug flags) has to cross the process
//! boundary without dragging the full span object along. This crate implements
//! that hand-off: a [`SpanContext`] value type carrying the four identity
//! fields, carrier traits describing where the fields live during transport,
//! and a propagator that copies identity between the two.
//!
//! The wire format targeted here is the Zipkin span format used by
//! Zipkin-aware RPC frameworks: the transport frame itself exposes the four
//! identity fields, and the propagator delegates storage to it. The format
//! carries no key/value baggage.
//!
//! Everything else a tracing client needs, such as span creation, sampling
//! policy, reporting, and buffering, lives outside this crate. The propagator
//! neither creates spans nor decides sampling; it only moves identity onto and
//! off a caller-supplied carrier.
//!
//! # Examples
//!
//! ```
//! use tracewire::propagation::{Propagator, SpanFields, ZipkinSpanPropagator};
//! use tracewire::trace::SpanContext;
//! use tracewire::{SpanId, TraceFlags, TraceId};
//!
//! let propagator = ZipkinSpanPropagator::new();
//! let context = SpanContext::new(
//!     TraceId::from_u64(0x4bf9_2f35),
//!     SpanId::from_u64(0x00f0_67aa),
//!     SpanId::INVALID,
//!     TraceFlags::SAMPLED,
//! );
//!
//! // Outbound: write the identity onto the carrier before the call leaves.
//! let mut carrier = SpanFields::default();
//! propagator.inject(&context, &mut carrier)?;
//!
//! // Inbound: the receiving process reads the identity back.
//! let extracted = propagator.extract(&carrier)?;
//! assert_eq!(extracted, context);
//! # Ok::<(), tracewire::propagation::PropagationError>(())
//! ```
//!
//! [`SpanContext`]: crate::trace::SpanContext
#![warn(
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    rust_2018_idioms,
    unreachable_pub,
    unused
)]
#![cfg_attr(
    docsrs,
    feature(doc_cfg, doc_auto_cfg),
    deny(rustdoc::broken_intra_doc_links)
)]
#![cfg_attr(test, deny(warnings))]

pub mod propagation;

pub mod trace;

mod trace_context;

pub use trace_context::{SpanId, TraceFlags, TraceId};
