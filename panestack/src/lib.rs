//! Swipeable pane navigation on top of [`panedom`].
//!
//! A [`Stage`] owns a pane tree whose controller nodes show one child at a
//! time. Controllers step between children programmatically
//! ([`Stage::next`], [`Stage::first`], [`Stage::move_to`], ...) or from pointer
//! drags ([`Stage::pointer`]), sliding panes with animated transforms and
//! firing lifecycle events (see [`events`]) through the tree.
//!
//! ```
//! use panestack::{Stage, StackConfig};
//!
//! let stage = Stage::new();
//! let stack = stage.create_stack(StackConfig::default().with_swipe(true));
//! let (a, b) = (stage.create_pane(), stage.create_pane());
//! stage.append(stack, a);
//! stage.append(stack, b);
//!
//! let mut done = stage.next(stack);
//! stage.finish_transitions();
//! assert_eq!(done.try_outcome(), Some(Ok(b)));
//! assert_eq!(stage.current_index(stack), Some(1));
//! ```

pub mod children;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod gesture;
pub mod render;
pub mod sequencer;
pub mod stage;

pub use children::ChildSet;
pub use config::{Overflow, StackConfig};
pub use controller::{Controller, Direction};
pub use error::NavigationError;
pub use gesture::{Capture, Edges, GestureTracker, Swipe, SwipePolicy};
pub use render::{Render, RenderHooks};
pub use sequencer::{Completion, TransitionSequencer};
pub use stage::{Edge, Stage};

pub use panedom;
