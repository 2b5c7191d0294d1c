//! Lifecycle registry for live chart instances.
//!
//! At most one chart may be live per slot id; registering a replacement
//! disposes the previous instance first. Per-slot request tokens sequence
//! overlapping fetches so a stale response can never overwrite a newer
//! chart.

use std::collections::HashMap;

use crate::chart::ChartModel;

/// Ticket for one in-flight fetch against a slot. Tokens for the same slot
/// increase monotonically; only the latest is considered current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    seq: u64,
}

/// An owned live chart: the model plus whatever the renderer needs released
/// on teardown (listeners, timers), expressed as a dispose hook.
///
/// `dispose` runs the hook exactly once; dropping an undisposed handle
/// disposes it, so a handle can never leak its resources.
pub struct ChartHandle {
    slot_id: String,
    model: ChartModel,
    disposed: bool,
    on_dispose: Option<Box<dyn FnOnce()>>,
}

impl ChartHandle {
    pub fn new(model: ChartModel) -> Self {
        Self {
            slot_id: model.slot_id.clone(),
            model,
            disposed: false,
            on_dispose: None,
        }
    }

    /// Attach a release hook, run once on disposal.
    pub fn with_on_dispose(mut self, hook: impl FnOnce() + 'static) -> Self {
        self.on_dispose = Some(Box::new(hook));
        self
    }

    pub fn slot_id(&self) -> &str {
        &self.slot_id
    }

    pub fn model(&self) -> &ChartModel {
        &self.model
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Release the chart's resources. Safe to call more than once; the hook
    /// runs only the first time.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        if let Some(hook) = self.on_dispose.take() {
            hook();
        }
    }
}

impl Drop for ChartHandle {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for ChartHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartHandle")
            .field("slot_id", &self.slot_id)
            .field("disposed", &self.disposed)
            .finish()
    }
}

/// Tracks live charts by slot id and sequences fetch requests per slot.
/// Empty at startup; nothing persists beyond the process.
#[derive(Debug, Default)]
pub struct ChartRegistry {
    charts: HashMap<String, ChartHandle>,
    request_seq: HashMap<String, u64>,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a chart for its slot, disposing any previous chart for that
    /// slot first.
    pub fn register(&mut self, handle: ChartHandle) {
        let slot_id = handle.slot_id().to_string();
        if let Some(mut previous) = self.charts.remove(&slot_id) {
            previous.dispose();
        }
        self.charts.insert(slot_id, handle);
    }

    /// Dispose and remove the chart for `slot_id`, if one is live.
    pub fn dispose_if_present(&mut self, slot_id: &str) -> bool {
        match self.charts.remove(slot_id) {
            Some(mut handle) => {
                handle.dispose();
                true
            }
            None => false,
        }
    }

    /// Dispose every chart whose slot id matches the predicate. Returns the
    /// number disposed.
    pub fn dispose_all_matching(&mut self, predicate: impl Fn(&str) -> bool) -> usize {
        let matching: Vec<String> = self
            .charts
            .keys()
            .filter(|slot_id| predicate(slot_id))
            .cloned()
            .collect();
        for slot_id in &matching {
            if let Some(mut handle) = self.charts.remove(slot_id) {
                handle.dispose();
            }
        }
        matching.len()
    }

    /// Bulk teardown of all slots sharing a prefix (e.g. every per-group
    /// chart of one metric).
    pub fn dispose_by_prefix(&mut self, prefix: &str) -> usize {
        self.dispose_all_matching(|slot_id| slot_id.starts_with(prefix))
    }

    pub fn get(&self, slot_id: &str) -> Option<&ChartHandle> {
        self.charts.get(slot_id)
    }

    pub fn contains(&self, slot_id: &str) -> bool {
        self.charts.contains_key(slot_id)
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    /// Start a fetch against a slot: bumps the slot's sequence and returns
    /// the token the response must present.
    pub fn begin_request(&mut self, slot_id: &str) -> RequestToken {
        let seq = self.request_seq.entry(slot_id.to_string()).or_insert(0);
        *seq += 1;
        RequestToken { seq: *seq }
    }

    /// Whether `token` is still the latest request for the slot. A response
    /// carrying an older token lost to a newer fetch and must be ignored.
    pub fn is_current(&self, slot_id: &str, token: RequestToken) -> bool {
        self.request_seq
            .get(slot_id)
            .is_some_and(|latest| *latest == token.seq)
    }
}
