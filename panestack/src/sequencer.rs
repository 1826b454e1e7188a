//! Slide sequencing: lifecycle events around the two pane transitions of a
//! slide, and the completion signal handed to callers.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;

use futures::FutureExt;
use panedom::{
    AnimationState, Detail, Dispatch, EventOptions, NodeId, TransitionConfig, Translate, Tree,
};
use tokio::sync::oneshot;

use crate::error::NavigationError;
use crate::events;

type Outcome = Result<NodeId, NavigationError>;

/// Resolves with the new current child once a slide finished, or with the
/// reason the navigation was refused.
#[derive(Debug)]
#[must_use = "a completion does nothing unless awaited or inspected"]
pub struct Completion {
    state: CompletionState,
}

#[derive(Debug)]
enum CompletionState {
    Ready(Option<Outcome>),
    Waiting(oneshot::Receiver<Outcome>),
}

impl Completion {
    /// A completion that is already resolved.
    pub fn resolved(outcome: Outcome) -> Self {
        Self {
            state: CompletionState::Ready(Some(outcome)),
        }
    }

    pub fn rejected(error: NavigationError) -> Self {
        Self::resolved(Err(error))
    }

    fn pending() -> (oneshot::Sender<Outcome>, Self) {
        let (tx, rx) = oneshot::channel();
        let completion = Self {
            state: CompletionState::Waiting(rx),
        };
        (tx, completion)
    }

    /// The outcome, if it is already known. Consumes the outcome: later calls
    /// and polls report [`NavigationError::Interrupted`].
    pub fn try_outcome(&mut self) -> Option<Outcome> {
        let outcome = match &mut self.state {
            CompletionState::Ready(outcome) => {
                outcome.take().unwrap_or(Err(NavigationError::Interrupted))
            }
            CompletionState::Waiting(rx) => match rx.try_recv() {
                Ok(outcome) => outcome,
                Err(oneshot::error::TryRecvError::Empty) => return None,
                Err(oneshot::error::TryRecvError::Closed) => Err(NavigationError::Interrupted),
            },
        };
        self.state = CompletionState::Ready(None);
        Some(outcome)
    }
}

impl Future for Completion {
    type Output = Outcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let outcome = match &mut self.state {
            CompletionState::Ready(outcome) => {
                outcome.take().unwrap_or(Err(NavigationError::Interrupted))
            }
            CompletionState::Waiting(rx) => match rx.poll_unpin(cx) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(received) => received.unwrap_or(Err(NavigationError::Interrupted)),
            },
        };
        self.state = CompletionState::Ready(None);
        Poll::Ready(outcome)
    }
}

/// Work produced while the stage is borrowed: prepared events and resolved
/// completions, run in order once the borrow is released.
#[derive(Debug, Default)]
pub(crate) struct Outbox {
    items: Vec<Deferred>,
}

#[derive(Debug)]
pub(crate) enum Deferred {
    Event(Dispatch),
    Resolve(oneshot::Sender<Outcome>, Outcome),
}

impl Deferred {
    pub fn run(self) {
        match self {
            Deferred::Event(dispatch) => {
                dispatch.run();
            }
            Deferred::Resolve(waiter, outcome) => {
                let _ = waiter.send(outcome);
            }
        }
    }
}

impl Outbox {
    /// Queue an event on `node`. Nothing is queued when no listener exists.
    pub fn trigger(&mut self, tree: &Tree, node: NodeId, kind: &str, options: EventOptions) {
        if let Some(dispatch) = tree.prepare(node, kind, options) {
            self.items.push(Deferred::Event(dispatch));
        }
    }

    pub fn resolve(&mut self, waiter: oneshot::Sender<Outcome>, outcome: Outcome) {
        self.items.push(Deferred::Resolve(waiter, outcome));
    }

    pub fn take(&mut self) -> Vec<Deferred> {
        std::mem::take(&mut self.items)
    }
}

/// One pane moving as part of a slide.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Leg {
    pub node: NodeId,
    pub to: Translate,
}

/// What a slide moves.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SlidePlan {
    pub controller: NodeId,
    /// Set for step navigation; controller-level events fire only then.
    pub next: Option<bool>,
    pub outgoing: Option<Leg>,
    pub incoming: Option<Leg>,
    pub transition: TransitionConfig,
}

#[derive(Debug)]
struct PendingSlide {
    controller: NodeId,
    next: Option<bool>,
    outgoing: Option<(NodeId, bool)>,
    incoming: Option<(NodeId, bool)>,
    waiter: Option<oneshot::Sender<Outcome>>,
}

impl PendingSlide {
    /// The leg whose end completes the slide.
    fn gate(&self) -> Option<(NodeId, bool)> {
        self.incoming.or(self.outgoing)
    }

    fn is_settled(&self) -> bool {
        let done = |leg: Option<(NodeId, bool)>| leg.is_none_or(|(_, done)| done);
        self.waiter.is_none() && done(self.outgoing) && done(self.incoming)
    }
}

/// Coordinates the outgoing and incoming transitions of every slide in flight.
#[derive(Debug, Default)]
pub struct TransitionSequencer {
    pending: Vec<PendingSlide>,
}

impl TransitionSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slides whose panes are still moving.
    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }

    /// Queue the `before*` events, start both pane transitions and return the
    /// completion of the slide.
    pub(crate) fn begin(
        &mut self,
        tree: &mut Tree,
        animation: &mut AnimationState,
        outbox: &mut Outbox,
        plan: SlidePlan,
        now: Instant,
    ) -> Completion {
        if let Some(next) = plan.next {
            outbox.trigger(
                tree,
                plan.controller,
                events::BEFORE_SLIDE,
                EventOptions::local().detail(Detail::Slide { next }),
            );
        }
        if let Some(leg) = plan.outgoing {
            outbox.trigger(tree, leg.node, events::BEFORE_SLIDE_OUT, EventOptions::lifecycle());
        }
        if let Some(leg) = plan.incoming {
            outbox.trigger(tree, leg.node, events::BEFORE_SLIDE_IN, EventOptions::lifecycle());
        }

        // Outgoing first, so a tick that finishes both reports it first.
        for leg in [plan.outgoing, plan.incoming].into_iter().flatten() {
            let pane = tree.pane_mut(leg.node);
            let from = pane.transform;
            pane.transform = leg.to;
            pane.frozen = false;
            animation.start(leg.node, from, leg.to, plan.transition, now);
        }

        let (tx, completion) = Completion::pending();
        self.pending.push(PendingSlide {
            controller: plan.controller,
            next: plan.next,
            outgoing: plan.outgoing.map(|leg| (leg.node, false)),
            incoming: plan.incoming.map(|leg| (leg.node, false)),
            waiter: Some(tx),
        });
        completion
    }

    /// A pane finished its transition: queue the matching `after*` events and
    /// resolve slides whose incoming pane arrived.
    pub(crate) fn finished(&mut self, tree: &Tree, outbox: &mut Outbox, node: NodeId) {
        for slide in &mut self.pending {
            if let Some((out, done)) = slide.outgoing.as_mut()
                && *out == node
                && !*done
            {
                *done = true;
                outbox.trigger(
                    tree,
                    node,
                    events::AFTER_SLIDE_OUT,
                    EventOptions::lifecycle(),
                );
            }
            if let Some((incoming, done)) = slide.incoming.as_mut()
                && *incoming == node
                && !*done
            {
                *done = true;
                outbox.trigger(
                    tree,
                    node,
                    events::AFTER_SLIDE_IN,
                    EventOptions::lifecycle(),
                );
            }
            if let Some((gate, true)) = slide.gate()
                && let Some(waiter) = slide.waiter.take()
            {
                if let Some(next) = slide.next {
                    outbox.trigger(
                        tree,
                        slide.controller,
                        events::AFTER_SLIDE,
                        EventOptions::local().detail(Detail::Slide { next }),
                    );
                }
                log::debug!(
                    "slide on {} settled on {}",
                    tree.key(slide.controller),
                    tree.key(gate)
                );
                outbox.resolve(waiter, Ok(gate));
            }
        }
        self.pending.retain(|slide| !slide.is_settled());
    }
}
