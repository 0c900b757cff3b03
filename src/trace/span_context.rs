use crate::trace_context::{SpanId, TraceFlags, TraceId};

/// Immutable identity of a span, as propagated across process boundaries.
///
/// `SpanContext` is a value type: four independent scalars, freely copyable,
/// with no ownership of or reference to any in-memory span. It is constructed
/// fresh by an extract operation or read from an existing span before an
/// inject operation, and is never mutated in place by either.
///
/// A context whose trace id is [`TraceId::INVALID`] represents "no context
/// present"; [`SpanContext::NONE`] is the canonical such value. No further
/// validation is applied at construction; whether a particular flag pattern
/// or span id is meaningful is for downstream consumers to decide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Deserialize, serde::Serialize))]
pub struct SpanContext {
    trace_id: TraceId,
    span_id: SpanId,
    parent_span_id: SpanId,
    trace_flags: TraceFlags,
}

impl SpanContext {
    /// The empty span context.
    pub const NONE: SpanContext = SpanContext {
        trace_id: TraceId::INVALID,
        span_id: SpanId::INVALID,
        parent_span_id: SpanId::INVALID,
        trace_flags: TraceFlags::NOT_SAMPLED,
    };

    /// Create an invalid empty span context.
    pub fn empty_context() -> Self {
        SpanContext::NONE
    }

    /// Construct a new `SpanContext`.
    pub fn new(
        trace_id: TraceId,
        span_id: SpanId,
        parent_span_id: SpanId,
        trace_flags: TraceFlags,
    ) -> Self {
        SpanContext {
            trace_id,
            span_id,
            parent_span_id,
            trace_flags,
        }
    }

    /// The [`TraceId`] shared by every span in this trace.
    pub fn trace_id(&self) -> TraceId {
        self.trace_id
    }

    /// The [`SpanId`] of this span.
    pub fn span_id(&self) -> SpanId {
        self.span_id
    }

    /// The [`SpanId`] of the span that caused this one.
    ///
    /// [`SpanId::INVALID`] denotes a root span.
    pub fn parent_span_id(&self) -> SpanId {
        self.parent_span_id
    }

    /// The flags propagated alongside the identifiers.
    pub fn trace_flags(&self) -> TraceFlags {
        self.trace_flags
    }

    /// Returns `true` if this context carries a trace, i.e. its trace id is
    /// not the reserved zero sentinel.
    pub fn is_valid(&self) -> bool {
        self.trace_id != TraceId::INVALID
    }

    /// Returns `true` if this span has no parent.
    pub fn is_root(&self) -> bool {
        self.parent_span_id == SpanId::INVALID
    }

    /// Returns `true` if the `sampled` trace flag is set.
    pub fn is_sampled(&self) -> bool {
        self.trace_flags.is_sampled()
    }

    /// Returns `true` if the `debug` trace flag is set.
    pub fn is_debug(&self) -> bool {
        self.trace_flags.is_debug()
    }
}
