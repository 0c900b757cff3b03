//! # Zipkin span format propagator
//!
//! Propagates span identity through carriers that expose the four identity
//! fields directly, for integration with Zipkin-aware RPC frameworks whose
//! frames already reserve slots for trace id, span id, parent id, and flags.
//! The format transports trace identity only; it carries no baggage.

use tracing::debug;

use crate::propagation::{Carrier, PropagationError, PropagationResult, Propagator};
use crate::trace::SpanContext;
use crate::trace_context::{SpanId, TraceFlags, TraceId};

/// Name under which this propagation scheme is registered, for callers
/// selecting it among other formats (such as a text-map or binary format).
pub const ZIPKIN_SPAN_FORMAT: &str = "zipkin-span-format";

/// Propagates [`SpanContext`]s by delegating field storage to the carrier.
///
/// Unlike header-based formats, nothing is encoded here: the four identity
/// fields are copied verbatim between the context and the carrier's
/// accessors, and any byte-order or wire-encoding concern belongs to the
/// carrier implementation. Extraction treats a zero trace id as "no context
/// transmitted" and reports it as [`PropagationError::ContextNotFound`];
/// everything else, including a zero span id and unknown flag bits, passes
/// through untouched.
///
/// The propagator is stateless; construct one per tracer and share it across
/// threads.
#[derive(Clone, Debug, Default)]
pub struct ZipkinSpanPropagator {
    _private: (),
}

impl ZipkinSpanPropagator {
    /// Create a new `ZipkinSpanPropagator`.
    pub fn new() -> Self {
        ZipkinSpanPropagator { _private: () }
    }
}

impl Propagator for ZipkinSpanPropagator {
    fn inject(&self, context: &SpanContext, carrier: &mut dyn Carrier) -> PropagationResult<()> {
        let span = carrier.as_injectable().ok_or_else(|| {
            debug!(
                format = ZIPKIN_SPAN_FORMAT,
                "carrier has no inject capability"
            );
            PropagationError::InvalidCarrier
        })?;

        span.set_trace_id(context.trace_id().to_u64());
        span.set_span_id(context.span_id().to_u64());
        span.set_parent_id(context.parent_span_id().to_u64());
        span.set_flags(context.trace_flags().to_u8());
        Ok(())
    }

    fn extract(&self, carrier: &dyn Carrier) -> PropagationResult<SpanContext> {
        let span = carrier.as_extractable().ok_or_else(|| {
            debug!(
                format = ZIPKIN_SPAN_FORMAT,
                "carrier has no extract capability"
            );
            PropagationError::InvalidCarrier
        })?;

        let trace_id = span.trace_id();
        if trace_id == 0 {
            return Err(PropagationError::ContextNotFound);
        }

        Ok(SpanContext::new(
            TraceId::from_u64(trace_id),
            SpanId::from_u64(span.span_id()),
            SpanId::from_u64(span.parent_id()),
            TraceFlags::new(span.flags()),
        ))
    }
}
