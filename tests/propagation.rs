//! Exercises the propagation surface the way an RPC framework integration
//! would: a frame type owning the four identity slots, adapted to the carrier
//! traits, driven through the propagator as a trait object.

use std::collections::HashMap;

use tracewire::propagation::{
    Carrier, ExtractableSpan, InjectableSpan, PropagationError, Propagator, ZipkinSpanPropagator,
};
use tracewire::trace::SpanContext;
use tracewire::{SpanId, TraceFlags, TraceId};

/// A stand-in for an RPC framework's call frame: span identity slots next to
/// unrelated transport state.
#[derive(Default)]
struct CallFrame {
    service: String,
    trace_id: u64,
    span_id: u64,
    parent_id: u64,
    flags: u8,
}

impl ExtractableSpan for CallFrame {
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

impl InjectableSpan for CallFrame {
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

impl Carrier for CallFrame {
    fn as_extractable(&self) -> Option<&dyn ExtractableSpan> {
        Some(self)
    }

    fn as_injectable(&mut self) -> Option<&mut dyn InjectableSpan> {
        Some(self)
    }
}

/// A header-map carrier for some text-based format; it is a perfectly good
/// carrier for that format but exposes neither capability of this one.
#[derive(Default)]
struct HeaderMap(HashMap<String, String>);

impl Carrier for HeaderMap {}

fn propagator() -> Box<dyn Propagator> {
    Box::new(ZipkinSpanPropagator::new())
}

#[test]
fn identity_survives_a_process_boundary() {
    let propagator = propagator();
    let outbound = SpanContext::new(
        TraceId::from_u64(0x1234_5678_9abc_def0),
        SpanId::from_u64(0x42),
        SpanId::from_u64(0x41),
        TraceFlags::SAMPLED,
    );

    // Caller side: identity goes onto the outgoing frame.
    let mut frame = CallFrame {
        service: "billing".to_owned(),
        ..CallFrame::default()
    };
    propagator.inject(&outbound, &mut frame).unwrap();

    // Unrelated frame state is untouched by injection.
    assert_eq!(frame.service, "billing");

    // Callee side: the same frame arrives and yields an equal context.
    let inbound = propagator.extract(&frame).unwrap();
    assert_eq!(inbound, outbound);
    assert_eq!(inbound.parent_span_id(), SpanId::from_u64(0x41));
    assert!(inbound.is_sampled());
}

#[test]
fn untraced_request_yields_context_not_found() {
    let propagator = propagator();

    let frame = CallFrame {
        service: "gateway".to_owned(),
        ..CallFrame::default()
    };

    assert_eq!(
        propagator.extract(&frame),
        Err(PropagationError::ContextNotFound)
    );
}

#[test]
fn wrong_carrier_type_is_a_distinct_error() {
    let propagator = propagator();
    let context = SpanContext::new(
        TraceId::from_u64(1),
        SpanId::from_u64(2),
        SpanId::INVALID,
        TraceFlags::SAMPLED,
    );

    let mut headers = HeaderMap::default();
    assert_eq!(
        propagator.inject(&context, &mut headers),
        Err(PropagationError::InvalidCarrier)
    );
    assert_eq!(
        propagator.extract(&headers),
        Err(PropagationError::InvalidCarrier)
    );
    assert!(headers.0.is_empty());
}

#[test]
fn extract_failure_maps_to_empty_context() {
    let propagator = propagator();
    let frame = CallFrame::default();

    // The conventional caller-side fallback for both failure cases.
    let context = propagator
        .extract(&frame)
        .unwrap_or_else(|_| SpanContext::empty_context());
    assert_eq!(context, SpanContext::NONE);
    assert!(!context.is_valid());
}
