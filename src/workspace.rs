//! Page-level facade tying payloads, chart building, and chart lifecycle
//! together.
//!
//! A `ChartWorkspace` owns the registry and knows which slots exist in the
//! current view. Rendering is explicit and per-slot: a missing slot is a
//! logged no-op, an empty payload is a normal no-data outcome, and a stale
//! fetch loses to the newer one. No outcome for one slot ever affects
//! another slot.

use std::collections::HashSet;

use crate::chart::{self, ChartModel};
use crate::history::SeriesHistory;
use crate::registry::{ChartHandle, ChartRegistry, RequestToken};

/// Result of a render attempt. Only `Ready` stores a chart; the other
/// outcomes leave the slot's previous chart (if any) untouched, except that
/// rendering never throws into caller code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartOutcome {
    /// Model built and registered; the previous chart for the slot was
    /// disposed.
    Ready,
    /// Payload had no points; the caller shows an informational placeholder.
    NoData,
    /// The target slot is not part of the current view; logged, no-op.
    MissingSlot,
    /// A newer fetch owns this slot; the response was ignored.
    Stale,
}

impl ChartOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, ChartOutcome::Ready)
    }
}

/// Owns chart lifecycle for one rendered view.
#[derive(Debug, Default)]
pub struct ChartWorkspace {
    registry: ChartRegistry,
    slots: HashSet<String>,
}

impl ChartWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a rendering slot as present in the view.
    pub fn declare_slot(&mut self, slot_id: impl Into<String>) {
        self.slots.insert(slot_id.into());
    }

    /// Remove a slot from the view, disposing its chart if one is live.
    pub fn remove_slot(&mut self, slot_id: &str) {
        self.slots.remove(slot_id);
        self.registry.dispose_if_present(slot_id);
    }

    pub fn has_slot(&self, slot_id: &str) -> bool {
        self.slots.contains(slot_id)
    }

    /// Start a fetch for a slot. The returned token must accompany the
    /// render call once the payload arrives; of two overlapping fetches for
    /// the same slot, only the later-issued token renders.
    pub fn begin_fetch(&mut self, slot_id: &str) -> RequestToken {
        self.registry.begin_request(slot_id)
    }

    /// Render a single-series chart into `slot_id`.
    pub fn render_single(
        &mut self,
        slot_id: &str,
        token: RequestToken,
        history: &SeriesHistory,
    ) -> ChartOutcome {
        self.render_with(slot_id, token, || chart::build_single_series(slot_id, history))
    }

    /// Render a combined multi-group chart into `slot_id`.
    pub fn render_combined(
        &mut self,
        slot_id: &str,
        token: RequestToken,
        histories: &[SeriesHistory],
    ) -> ChartOutcome {
        self.render_with(slot_id, token, || chart::build_combined(slot_id, histories))
    }

    fn render_with(
        &mut self,
        slot_id: &str,
        token: RequestToken,
        build: impl FnOnce() -> Option<ChartModel>,
    ) -> ChartOutcome {
        if !self.slots.contains(slot_id) {
            eprintln!("Warning: chart slot '{}' is not in the current view", slot_id);
            return ChartOutcome::MissingSlot;
        }
        if !self.registry.is_current(slot_id, token) {
            return ChartOutcome::Stale;
        }
        match build() {
            Some(model) => {
                // register() disposes the slot's previous chart first.
                self.registry.register(ChartHandle::new(model));
                ChartOutcome::Ready
            }
            None => ChartOutcome::NoData,
        }
    }

    /// The live model for a slot, if one is registered.
    pub fn chart(&self, slot_id: &str) -> Option<&ChartModel> {
        self.registry.get(slot_id).map(|handle| handle.model())
    }

    pub fn dispose_chart(&mut self, slot_id: &str) -> bool {
        self.registry.dispose_if_present(slot_id)
    }

    pub fn dispose_charts_by_prefix(&mut self, prefix: &str) -> usize {
        self.registry.dispose_by_prefix(prefix)
    }

    /// Number of live charts.
    pub fn live_charts(&self) -> usize {
        self.registry.len()
    }
}
