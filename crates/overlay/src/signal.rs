//! "Recompute now" signalling between the page glue and the overlay model.

use serde::Serialize;
use tracing::trace;

/// Why the overlay is being recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecomputeTrigger {
    InitialLoad,
    SettingChanged,
    /// The in-game clock advanced; only relevant for arrival/return times.
    ClockTick,
    GalaxyNavigated,
}

pub type SubscriptionId = u64;

type Callback = Box<dyn FnMut(RecomputeTrigger)>;

/// Callback registry the page glue emits triggers into.
///
/// Clock ticks are dropped unless a subscriber asked for them through
/// [`SignalHub::set_clock_ticks`], which mirrors switching the clock
/// observer on only while absolute times are displayed.
#[derive(Default)]
pub struct SignalHub {
    next_id: SubscriptionId,
    subscribers: Vec<(SubscriptionId, Callback)>,
    clock_ticks: bool,
}

impl SignalHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(RecomputeTrigger) + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns `false` when the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    pub fn set_clock_ticks(&mut self, wanted: bool) {
        self.clock_ticks = wanted;
    }

    pub fn clock_ticks_wanted(&self) -> bool {
        self.clock_ticks
    }

    /// Deliver a trigger to every subscriber; returns how many were called.
    pub fn emit(&mut self, trigger: RecomputeTrigger) -> usize {
        if trigger == RecomputeTrigger::ClockTick && !self.clock_ticks {
            trace!("clock tick ignored");
            return 0;
        }
        for (_, callback) in &mut self.subscribers {
            callback(trigger);
        }
        self.subscribers.len()
    }
}

impl std::fmt::Debug for SignalHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalHub")
            .field("subscribers", &self.subscribers.len())
            .field("clock_ticks", &self.clock_ticks)
            .finish()
    }
}

/// Detects a finished galaxy-view navigation from the loading indicator.
///
/// The view shows a loading indicator while fetching a new system; a
/// navigation is complete on the transition from visible to hidden.
#[derive(Debug, Clone)]
pub struct NavigationWatcher {
    loading: bool,
}

impl Default for NavigationWatcher {
    fn default() -> Self {
        Self { loading: true }
    }
}

impl NavigationWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, loading_visible: bool) -> Option<RecomputeTrigger> {
        let finished = self.loading && !loading_visible;
        self.loading = loading_visible;
        finished.then_some(RecomputeTrigger::GalaxyNavigated)
    }
}
