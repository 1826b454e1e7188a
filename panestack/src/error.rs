use panedom::NodeId;
use thiserror::Error;

use crate::controller::Direction;

/// Why a navigation request did not complete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// A listener prevented the `next`/`previous` pre-flight event.
    #[error("navigation to the {direction} child of {controller} was prevented")]
    Blocked {
        controller: NodeId,
        direction: Direction,
    },

    /// There is no child in the requested direction.
    #[error("{controller} has no {direction} child")]
    NoAdjacent {
        controller: NodeId,
        direction: Direction,
    },

    #[error("no child named '{0}'")]
    UnknownChild(String),

    #[error("{0} is not a navigation controller")]
    NotAController(NodeId),

    #[error("{0} has no children")]
    Empty(NodeId),

    /// The stage went away before the transition finished.
    #[error("transition was interrupted before it finished")]
    Interrupted,
}

impl NavigationError {
    /// Whether the move was refused (prevented or nowhere to go).
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked { .. } | Self::NoAdjacent { .. })
    }
}
