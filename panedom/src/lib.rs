//! Pane tree with DOM-style framework events.
//!
//! A [`Tree`] owns every node: parent links, ordered children, a listener table
//! per node and the visual [`Pane`] state a renderer draws. Events triggered on
//! a node trickle through its descendants and bubble through its ancestors
//! (see [`dispatch`]). Pane transforms animate against a host supplied clock
//! through [`AnimationState`].

pub mod animation;
pub mod dispatch;
pub mod event;
pub mod input;
pub mod transform;
pub mod transitions;
pub mod tree;

pub use animation::AnimationState;
pub use dispatch::{listener, Dispatch, Listener};
pub use event::{Detail, Event, EventOptions, Phase};
pub use input::{Point, PointerSample, TouchPhase};
pub use transform::{Orientation, Translate};
pub use transitions::{Easing, TransitionConfig};
pub use tree::{NodeId, Pane, Tree};
