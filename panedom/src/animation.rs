use std::time::{Duration, Instant};

use crate::transform::Translate;
use crate::transitions::{Easing, TransitionConfig};
use crate::tree::NodeId;

/// A single in-flight pane transition.
#[derive(Debug, Clone)]
struct ActiveTransition {
    node: NodeId,
    from: Translate,
    to: Translate,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl ActiveTransition {
    fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    fn value(&self, now: Instant) -> Translate {
        self.from.lerp(self.to, self.easing.apply(self.progress(now)))
    }

    fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }
}

/// Tracks pane transform transitions against a host supplied clock.
///
/// Transitions never finish synchronously: even a zero-length transition is
/// only reported as finished by the next [`update`](Self::update).
#[derive(Debug, Default)]
pub struct AnimationState {
    /// In start order.
    active: Vec<ActiveTransition>,
    /// Reduced motion flag - when true, transitions complete on the next update.
    reduced_motion: bool,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable reduced motion (accessibility).
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Returns true if any transition is currently active.
    pub fn has_active_transitions(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn is_animating(&self, node: NodeId) -> bool {
        self.active.iter().any(|t| t.node == node)
    }

    /// Start transitioning `node` from `from` to `to`.
    ///
    /// If the node is already transitioning, the new transition starts from
    /// the current interpolated value and replaces it.
    pub fn start(
        &mut self,
        node: NodeId,
        from: Translate,
        to: Translate,
        config: TransitionConfig,
        now: Instant,
    ) {
        let from = match self.take(node) {
            Some(existing) => existing.value(now),
            None => from,
        };
        let duration = if self.reduced_motion {
            Duration::ZERO
        } else {
            config.duration
        };
        log::trace!("transition {node}: {from} -> {to} over {duration:?}");
        self.active.push(ActiveTransition {
            node,
            from,
            to,
            start: now,
            duration,
            easing: config.easing,
        });
    }

    /// Drop the in-flight transition of `node` without reporting it finished.
    pub fn cancel(&mut self, node: NodeId) -> bool {
        self.take(node).is_some()
    }

    /// Prune transitions that are done at `now`, returning their nodes in the
    /// order the transitions were started.
    pub fn update(&mut self, now: Instant) -> Vec<NodeId> {
        let mut finished = Vec::new();
        self.active.retain(|transition| {
            if transition.is_done(now) {
                finished.push(transition.node);
                false
            } else {
                true
            }
        });
        finished
    }

    /// Finish every in-flight transition.
    pub fn finish_all(&mut self) -> Vec<NodeId> {
        self.active.drain(..).map(|t| t.node).collect()
    }

    /// Finish the transition of a single node, if any.
    pub fn finish(&mut self, node: NodeId) -> bool {
        self.take(node).is_some()
    }

    /// Interpolated transform of `node` at `now`, if it is transitioning.
    pub fn interpolated(&self, node: NodeId, now: Instant) -> Option<Translate> {
        self.active
            .iter()
            .find(|t| t.node == node)
            .map(|t| t.value(now))
    }

    fn take(&mut self, node: NodeId) -> Option<ActiveTransition> {
        let index = self.active.iter().position(|t| t.node == node)?;
        Some(self.active.remove(index))
    }
}
