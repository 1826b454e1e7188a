//! Listener registration and two-phase event dispatch.
//!
//! An event triggered on a node is delivered in up to three phases:
//!
//! 1. **Trickling** (only when the event trickles): every descendant of the
//!    target, in pre-order. Listeners cannot stop or prevent the event here.
//! 2. **At target**: the target's own listeners.
//! 3. **Bubbling** (only when the event bubbles): each ancestor, nearest first,
//!    until a listener stops propagation or the root is reached.
//!
//! Within a node, listeners run in registration order. Stopping propagation
//! never skips the remaining listeners of the current node.
//!
//! [`Tree::prepare`] captures the route up front, so an owner holding the
//! tree behind a `RefCell` can release it before any listener runs.

use std::fmt;
use std::rc::Rc;

use crate::event::{Event, EventOptions, Phase};
use crate::tree::{NodeId, Tree};

/// A shared event callback. Identity (the `Rc` allocation) decides whether two
/// registrations are the same listener.
pub type Listener = Rc<dyn Fn(&mut Event)>;

/// Wrap a closure as a [`Listener`].
pub fn listener(f: impl Fn(&mut Event) + 'static) -> Listener {
    Rc::new(f)
}

impl Tree {
    /// Register `listener` on `node` for each space separated type in `types`.
    ///
    /// Registering the same listener twice for a type is a no-op.
    pub fn on(&mut self, node: NodeId, types: &str, listener: &Listener) {
        for kind in types.split_whitespace() {
            let listeners = self.nodes[node.index()]
                .listeners
                .entry(kind.to_string())
                .or_default();
            if listeners.iter().any(|l| Rc::ptr_eq(l, listener)) {
                continue;
            }
            listeners.push(Rc::clone(listener));
            *self.counts.entry(kind.to_string()).or_default() += 1;
            log::debug!("listener added: {} on {}", kind, self.key(node));
        }
    }

    /// Remove `listener` from `node` for each space separated type in `types`.
    pub fn off(&mut self, node: NodeId, types: &str, listener: &Listener) {
        for kind in types.split_whitespace() {
            let Some(listeners) = self.nodes[node.index()].listeners.get_mut(kind) else {
                continue;
            };
            let Some(index) = listeners.iter().position(|l| Rc::ptr_eq(l, listener)) else {
                continue;
            };
            listeners.remove(index);
            if listeners.is_empty() {
                self.nodes[node.index()].listeners.remove(kind);
            }
            if let Some(count) = self.counts.get_mut(kind) {
                *count -= 1;
                if *count == 0 {
                    self.counts.remove(kind);
                }
            }
            log::debug!("listener removed: {} on {}", kind, self.key(node));
        }
    }

    /// Whether any node in this tree listens for `kind`.
    pub fn has_listeners(&self, kind: &str) -> bool {
        self.counts.contains_key(kind)
    }

    /// Number of listeners for `kind` registered on `node`.
    pub fn listener_count(&self, node: NodeId, kind: &str) -> usize {
        self.nodes[node.index()]
            .listeners
            .get(kind)
            .map_or(0, Vec::len)
    }

    /// Trigger an event of type `kind` on `node`.
    ///
    /// Returns `false` if a listener prevented the default action. When no
    /// listener for `kind` exists anywhere in the tree, no event is built and
    /// the result is `true`.
    pub fn trigger(&self, node: NodeId, kind: &str, options: EventOptions) -> bool {
        self.prepare(node, kind, options)
            .is_none_or(Dispatch::run)
    }

    /// Build the event and collect every listener it can reach, without
    /// running any of them.
    ///
    /// The returned [`Dispatch`] no longer borrows the tree, so the owner can
    /// release the tree before listeners run. Returns `None` when nothing in
    /// the tree listens for `kind`.
    pub fn prepare(&self, node: NodeId, kind: &str, options: EventOptions) -> Option<Dispatch> {
        if !self.has_listeners(kind) {
            log::trace!("trigger {} on {}: no listeners", kind, self.key(node));
            return None;
        }
        let event = Event::new(kind, node, options);
        let mut route = Vec::new();

        if event.trickles() {
            for descendant in self.descendants(node) {
                self.collect(&mut route, Phase::Trickling, descendant, kind);
            }
        }
        self.collect(&mut route, Phase::AtTarget, node, kind);
        if event.bubbles() {
            for ancestor in self.ancestors(node) {
                self.collect(&mut route, Phase::Bubbling, ancestor, kind);
            }
        }

        log::trace!(
            "dispatch {} on {}: {} stops",
            kind,
            self.key(node),
            route.len()
        );
        Some(Dispatch { event, route })
    }

    fn collect(&self, route: &mut Vec<Stop>, phase: Phase, node: NodeId, kind: &str) {
        if let Some(listeners) = self.nodes[node.index()].listeners.get(kind) {
            route.push(Stop {
                phase,
                node,
                listeners: listeners.clone(),
            });
        }
    }
}

/// Listeners of one node, reached in one phase.
struct Stop {
    phase: Phase,
    node: NodeId,
    listeners: Vec<Listener>,
}

/// An event together with the listeners along its path.
///
/// Listeners registered or removed after [`Tree::prepare`] do not affect a
/// dispatch that is already prepared.
pub struct Dispatch {
    event: Event,
    route: Vec<Stop>,
}

impl fmt::Debug for Dispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatch")
            .field("event", &self.event)
            .field("stops", &self.route.len())
            .finish()
    }
}

impl Dispatch {
    pub fn event(&self) -> &Event {
        &self.event
    }

    /// Run the listeners phase by phase. Returns `false` if the default
    /// action was prevented.
    pub fn run(mut self) -> bool {
        for stop in &self.route {
            if stop.phase == Phase::Bubbling && self.event.propagation_stopped() {
                break;
            }
            self.event.enter(stop.phase, stop.node);
            for listener in &stop.listeners {
                listener(&mut self.event);
            }
        }
        self.event.finish();
        !self.event.default_prevented()
    }
}
