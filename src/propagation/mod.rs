//! # Propagator interface
//!
//! Propagators move a span's identity across a process or RPC boundary by
//! reading it from, or writing it onto, a caller-supplied *carrier*: the
//! transport-level object in which trace identity travels, be it an RPC frame
//! or a message envelope of the surrounding framework.
//!
//! A carrier qualifies by capability, not by concrete type. The two capability
//! sets are:
//!
//! - [`ExtractableSpan`]: read accessors for trace id, span id, parent id, and
//!   flags,
//! - [`InjectableSpan`]: write mutators for the same four fields,
//!
//! and the [`Carrier`] trait is the adapter layer through which a propagator
//! discovers, at the call site, which of the two a given carrier supports. A
//! single concrete type may implement both sets; a propagator never assumes
//! so and checks each capability independently.
//!
//! [`ZipkinSpanPropagator`] is the propagator for carriers of this shape. It
//! is selected among other registered formats by the [`ZIPKIN_SPAN_FORMAT`]
//! name; the registry itself belongs to the surrounding tracer.

use thiserror::Error;

pub mod zipkin;

pub use zipkin::{ZipkinSpanPropagator, ZIPKIN_SPAN_FORMAT};

use crate::trace::SpanContext;
use std::fmt;

/// Errors returned by propagator operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PropagationError {
    /// The supplied carrier does not implement the capability set the
    /// requested operation needs.
    ///
    /// Raised before any carrier field is read or written, so a failed call
    /// leaves the carrier untouched. This usually means the propagator was
    /// invoked with the wrong carrier type; callers can recover by trying
    /// another registered format or surfacing the error.
    #[error("carrier does not implement the capability set required by this format")]
    InvalidCarrier,

    /// The carrier has the right shape but holds no trace context: its trace
    /// id field is the reserved zero sentinel.
    ///
    /// This is the normal outcome for a fresh inbound request that no
    /// upstream service traced, and is deliberately distinct from
    /// [`PropagationError::InvalidCarrier`].
    #[error("carrier holds no span context")]
    ContextNotFound,
}

/// Describe the result of propagation operations.
pub type PropagationResult<T> = Result<T, PropagationError>;

/// Read capability set for span carriers.
///
/// Implemented by carriers that can yield the four span identity fields they
/// transport. Accessors return the raw wire scalars; interpreting them is the
/// propagator's job.
pub trait ExtractableSpan {
    /// Trace id held by the carrier; zero when no context was transmitted.
    fn trace_id(&self) -> u64;

    /// Span id held by the carrier.
    fn span_id(&self) -> u64;

    /// Parent span id held by the carrier; zero for a root span.
    fn parent_id(&self) -> u64;

    /// Raw flags byte held by the carrier.
    fn flags(&self) -> u8;
}

/// Write capability set for span carriers.
///
/// Implemented by carriers that can store the four span identity fields for
/// transport. Each mutator overwrites its field; none of them merge.
pub trait InjectableSpan {
    /// Store the trace id in the carrier.
    fn set_trace_id(&mut self, trace_id: u64);

    /// Store the span id in the carrier.
    fn set_span_id(&mut self, span_id: u64);

    /// Store the parent span id in the carrier.
    fn set_parent_id(&mut self, parent_id: u64);

    /// Store the raw flags byte in the carrier.
    fn set_flags(&mut self, flags: u8);
}

/// An opaque transport-level object that span identity can be read from or
/// written onto.
///
/// `Carrier` is the boundary type propagators accept: callers hand over
/// whatever object their framework gives them, and the propagator probes it
/// for the capability the operation needs. Both probes default to `None`, so
/// a concrete carrier opts into each capability explicitly:
///
/// ```
/// use tracewire::propagation::{Carrier, ExtractableSpan};
///
/// struct InboundFrame {
///     trace_id: u64,
///     span_id: u64,
///     parent_id: u64,
///     flags: u8,
/// }
///
/// impl ExtractableSpan for InboundFrame {
///     fn trace_id(&self) -> u64 {
///         self.trace_id
///     }
///     fn span_id(&self) -> u64 {
///         self.span_id
///     }
///     fn parent_id(&self) -> u64 {
///         self.parent_id
///     }
///     fn flags(&self) -> u8 {
///         self.flags
///     }
/// }
///
/// impl Carrier for InboundFrame {
///     fn as_extractable(&self) -> Option<&dyn ExtractableSpan> {
///         Some(self)
///     }
/// }
/// ```
///
/// A type holding both capabilities overrides both probes. Thread safety of
/// the underlying object remains the caller's concern: concurrent operations
/// on one carrier instance must be serialized by the caller, as no atomicity
/// is guaranteed across the four-field read/write sequence.
pub trait Carrier {
    /// The carrier's read capability, if it has one.
    fn as_extractable(&self) -> Option<&dyn ExtractableSpan> {
        None
    }

    /// The carrier's write capability, if it has one.
    fn as_injectable(&mut self) -> Option<&mut dyn InjectableSpan> {
        None
    }
}

/// Converts between a [`SpanContext`] and a carrier's identity fields.
///
/// Implementations are stateless converters: both operations are synchronous,
/// constant-time, and keep no memory between invocations, so one instance per
/// tracer can be shared freely across threads. The only side effect either
/// operation has is the carrier mutation performed by a successful `inject`.
pub trait Propagator: fmt::Debug {
    /// Write `context`'s four identity fields onto `carrier`.
    ///
    /// Fails with [`PropagationError::InvalidCarrier`], without touching the
    /// carrier, if it lacks the write capability. Re-injecting overwrites any
    /// previously held identity in full.
    fn inject(&self, context: &SpanContext, carrier: &mut dyn Carrier) -> PropagationResult<()>;

    /// Build a new [`SpanContext`] from the four identity fields in `carrier`.
    ///
    /// Fails with [`PropagationError::InvalidCarrier`] if the carrier lacks
    /// the read capability, and with [`PropagationError::ContextNotFound`] if
    /// it is readable but its trace id is the zero sentinel. Callers treating
    /// the failure cases uniformly can fall back to
    /// [`SpanContext::empty_context`].
    fn extract(&self, carrier: &dyn Carrier) -> PropagationResult<SpanContext>;
}

/// A minimal owned carrier: the four span identity fields and nothing else.
///
/// Frameworks whose frames already expose span identity implement the carrier
/// traits on their own types; `SpanFields` covers the remaining cases where a
/// plain place to park the fields is enough, and doubles as the reference
/// implementation of both capability sets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpanFields {
    /// Trace id field; zero means no context.
    pub trace_id: u64,
    /// Span id field.
    pub span_id: u64,
    /// Parent span id field; zero marks a root span.
    pub parent_id: u64,
    /// Raw flags byte.
    pub flags: u8,
}

impl ExtractableSpan for SpanFields {
    fn trace_id(&self) -> u64 {
        self.trace_id
    }

    fn span_id(&self) -> u64 {
        self.span_id
    }

    fn parent_id(&self) -> u64 {
        self.parent_id
    }

    fn flags(&self) -> u8 {
        self.flags
    }
}

impl InjectableSpan for SpanFields {
    fn set_trace_id(&mut self, trace_id: u64) {
        self.trace_id = trace_id;
    }

    fn set_span_id(&mut self, span_id: u64) {
        self.span_id = span_id;
    }

    fn set_parent_id(&mut self, parent_id: u64) {
        self.parent_id = parent_id;
    }

    fn set_flags(&mut self, flags: u8) {
        self.flags = flags;
    }
}

impl Carrier for SpanFields {
    fn as_extractable(&self) -> Option<&dyn ExtractableSpan> {
        Some(self)
    }

    fn as_injectable(&mut self) -> Option<&mut dyn InjectableSpan> {
        Some(self)
    }
}
