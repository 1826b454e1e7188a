use std::any::Any;
use std::fmt;
use std::rc::Rc;

use crate::input::Point;
use crate::tree::NodeId;

/// Propagation phase of an [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    None,
    /// Visiting descendants of the target, before the target itself.
    Trickling,
    AtTarget,
    /// Visiting ancestors of the target.
    Bubbling,
}

/// Payload carried by an event.
#[derive(Clone, Default)]
pub enum Detail {
    #[default]
    None,
    /// Direction of a slide (`beforeslide`, `afterslide`).
    Slide { next: bool },
    /// Displacement of a swipe along the controller's axis.
    Distance(f64),
    /// Origin of a swipe.
    Point(Point),
    /// Application defined payload.
    Custom(Rc<dyn Any>),
}

impl fmt::Debug for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Slide { next } => write!(f, "Slide {{ next: {next} }}"),
            Self::Distance(d) => write!(f, "Distance({d})"),
            Self::Point(p) => write!(f, "Point({}, {})", p.x, p.y),
            Self::Custom(_) => write!(f, "Custom(...)"),
        }
    }
}

impl Detail {
    pub fn distance(&self) -> Option<f64> {
        match self {
            Self::Distance(d) => Some(*d),
            _ => None,
        }
    }

    pub fn point(&self) -> Option<Point> {
        match self {
            Self::Point(p) => Some(*p),
            _ => None,
        }
    }

    pub fn slide_next(&self) -> Option<bool> {
        match self {
            Self::Slide { next } => Some(*next),
            _ => None,
        }
    }

    pub fn custom<T: 'static>(&self) -> Option<&T> {
        match self {
            Self::Custom(value) => value.downcast_ref(),
            _ => None,
        }
    }
}

/// How an event propagates.
///
/// Defaults: bubbles, does not trickle, cancelable, no detail.
#[derive(Debug, Clone)]
pub struct EventOptions {
    pub bubbles: bool,
    pub trickles: bool,
    pub cancelable: bool,
    pub detail: Detail,
}

impl Default for EventOptions {
    fn default() -> Self {
        Self {
            bubbles: true,
            trickles: false,
            cancelable: true,
            detail: Detail::None,
        }
    }
}

impl EventOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fires on the target only and cannot be prevented.
    pub fn local() -> Self {
        Self::new().bubbles(false).cancelable(false)
    }

    /// Trickles to descendants only and cannot be prevented.
    pub fn broadcast() -> Self {
        Self::new().trickles(true).bubbles(false).cancelable(false)
    }

    /// Trickles and bubbles and cannot be prevented.
    pub fn lifecycle() -> Self {
        Self::new().trickles(true).cancelable(false)
    }

    /// Bubbles and cannot be prevented.
    pub fn notify() -> Self {
        Self::new().cancelable(false)
    }

    pub fn bubbles(mut self, bubbles: bool) -> Self {
        self.bubbles = bubbles;
        self
    }

    pub fn trickles(mut self, trickles: bool) -> Self {
        self.trickles = trickles;
        self
    }

    pub fn cancelable(mut self, cancelable: bool) -> Self {
        self.cancelable = cancelable;
        self
    }

    pub fn detail(mut self, detail: Detail) -> Self {
        self.detail = detail;
        self
    }
}

/// A framework event, created fresh for each trigger.
#[derive(Debug, Clone)]
pub struct Event {
    kind: String,
    target: NodeId,
    current: NodeId,
    detail: Detail,
    bubbles: bool,
    trickles: bool,
    cancelable: bool,
    phase: Phase,
    propagation_stopped: bool,
    default_prevented: bool,
}

impl Event {
    pub fn new(kind: impl Into<String>, target: NodeId, options: EventOptions) -> Self {
        Self {
            kind: kind.into(),
            target,
            current: target,
            detail: options.detail,
            bubbles: options.bubbles,
            trickles: options.trickles,
            cancelable: options.cancelable,
            phase: Phase::None,
            propagation_stopped: !options.bubbles,
            default_prevented: false,
        }
    }

    /// The event type, e.g. `"beforeslide"`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The node the event was triggered on.
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// The node whose listeners are currently running.
    pub fn current_target(&self) -> NodeId {
        self.current
    }

    pub fn detail(&self) -> &Detail {
        &self.detail
    }

    pub fn bubbles(&self) -> bool {
        self.bubbles
    }

    pub fn trickles(&self) -> bool {
        self.trickles
    }

    pub fn cancelable(&self) -> bool {
        self.cancelable
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Stop moving to the next ancestor once the current node's listeners ran.
    /// Has no effect while trickling.
    pub fn stop_propagation(&mut self) {
        if self.phase > Phase::Trickling {
            self.propagation_stopped = true;
        }
    }

    /// Mark the event as prevented. Has no effect while trickling or when the
    /// event is not cancelable.
    pub fn prevent_default(&mut self) {
        if self.phase > Phase::Trickling && self.cancelable {
            self.default_prevented = true;
        }
    }

    pub(crate) fn enter(&mut self, phase: Phase, current: NodeId) {
        self.phase = phase;
        self.current = current;
    }

    pub(crate) fn finish(&mut self) {
        self.phase = Phase::None;
        self.current = self.target;
    }
}
