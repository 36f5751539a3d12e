//! Audit trail — the observability side channel.
//!
//! Explicit contract: emitting an audit event must never abort a
//! settlement. [`AuditTrail::record`] swallows sink failures (they are
//! logged at `warn` and nothing more), so callers cannot accidentally
//! couple settlement correctness to the health of an observability sink.

use std::sync::{Arc, Mutex};

use fiatramp_types::{AuditEvent, AuditEventKind, GatewayError, Result};

/// A destination for audit events.
pub trait AuditSink: Send {
    /// Deliver one event to the sink.
    ///
    /// # Errors
    /// Sink-specific delivery failure. The trail swallows it.
    fn emit(&mut self, event: &AuditEvent) -> Result<()>;
}

/// Fans audit events out to every registered sink.
pub struct AuditTrail {
    sinks: Vec<Box<dyn AuditSink>>,
}

impl AuditTrail {
    /// Create a trail with no sinks (events are dropped).
    #[must_use]
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// Create a trail with one sink.
    #[must_use]
    pub fn with_sink(sink: Box<dyn AuditSink>) -> Self {
        Self { sinks: vec![sink] }
    }

    /// Register an additional sink.
    pub fn add_sink(&mut self, sink: Box<dyn AuditSink>) {
        self.sinks.push(sink);
    }

    /// Stamp and deliver an event to every sink. Never fails: a sink error
    /// is logged and swallowed.
    pub fn record(&mut self, kind: AuditEventKind, payload: serde_json::Value) {
        let event = AuditEvent::now(kind, payload);
        for sink in &mut self.sinks {
            if let Err(err) = sink.emit(&event) {
                tracing::warn!(event = %event.kind, error = %err, "audit sink failed");
            }
        }
    }
}

impl Default for AuditTrail {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// TracingAuditSink
// ---------------------------------------------------------------------------

/// Emits audit events as structured `tracing` records under the `audit`
/// target. Cannot fail.
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn emit(&mut self, event: &AuditEvent) -> Result<()> {
        tracing::info!(
            target: "audit",
            event = %event.kind,
            payload = %event.payload,
            recorded_at = %event.recorded_at,
            "audit event"
        );
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MemoryAuditSink
// ---------------------------------------------------------------------------

/// Buffers audit events in process memory. Clones share the buffer, so a
/// caller can keep a handle for inspection while the trail owns another.
#[derive(Clone)]
pub struct MemoryAuditSink {
    events: Arc<Mutex<Vec<AuditEvent>>>,
}

impl MemoryAuditSink {
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Snapshot of all buffered events.
    #[must_use]
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Number of buffered events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().map(|e| e.len()).unwrap_or(0)
    }

    /// Whether the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryAuditSink {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditSink for MemoryAuditSink {
    fn emit(&mut self, event: &AuditEvent) -> Result<()> {
        self.events
            .lock()
            .map_err(|_| GatewayError::Internal("audit buffer poisoned".into()))?
            .push(event.clone());
        Ok(())
    }
}
