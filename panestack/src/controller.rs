//! Navigation state of a single controller.

use std::fmt;

use panedom::{NodeId, Translate};

use crate::children::ChildSet;
use crate::config::StackConfig;
use crate::events;
use crate::gesture::{Edges, GestureTracker};

/// Direction of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    /// Name of the cancelable pre-flight event for this direction.
    pub fn event(self) -> &'static str {
        match self {
            Direction::Next => events::NEXT,
            Direction::Previous => events::PREVIOUS,
        }
    }

    pub fn is_next(self) -> bool {
        matches!(self, Direction::Next)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Next => write!(f, "next"),
            Direction::Previous => write!(f, "previous"),
        }
    }
}

/// A node whose children are navigated one at a time.
///
/// Exactly one child is current once any child exists. Children before the
/// current one rest pushed aside by `translate_out` percent, children after it
/// rest fully off-screen.
#[derive(Debug)]
pub struct Controller {
    node: NodeId,
    config: StackConfig,
    children: ChildSet,
    current: usize,
    pub(crate) gesture: GestureTracker,
}

impl Controller {
    pub fn new(node: NodeId, config: StackConfig, children: ChildSet) -> Self {
        Self {
            node,
            config,
            children,
            current: 0,
            gesture: GestureTracker::new(),
        }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    pub fn children(&self) -> &ChildSet {
        &self.children
    }

    pub fn current_index(&self) -> Option<usize> {
        (!self.children.is_empty()).then_some(self.current)
    }

    pub fn current_child(&self) -> Option<NodeId> {
        self.children.get(self.current)
    }

    pub fn current_name(&self) -> Option<&str> {
        self.children.name_at(self.current)
    }

    pub fn next_child(&self) -> Option<NodeId> {
        self.children.get(self.current + 1)
    }

    pub fn previous_child(&self) -> Option<NodeId> {
        self.current.checked_sub(1).and_then(|i| self.children.get(i))
    }

    pub fn has_next(&self) -> bool {
        self.current + 1 < self.children.len()
    }

    pub fn has_previous(&self) -> bool {
        self.current > 0 && !self.children.is_empty()
    }

    pub fn has(&self, direction: Direction) -> bool {
        match direction {
            Direction::Next => self.has_next(),
            Direction::Previous => self.has_previous(),
        }
    }

    pub(crate) fn edges(&self) -> Edges {
        Edges {
            has_previous: self.has_previous(),
            has_next: self.has_next(),
        }
    }

    /// Move the current position one step. Returns false at the edge.
    pub(crate) fn step(&mut self, direction: Direction) -> bool {
        if !self.has(direction) {
            return false;
        }
        match direction {
            Direction::Next => self.current += 1,
            Direction::Previous => self.current -= 1,
        }
        true
    }

    pub(crate) fn set_current(&mut self, index: usize) {
        if index < self.children.len() {
            self.current = index;
        }
    }

    /// The transform a child at `index` rests at.
    pub fn resting_position(&self, index: usize) -> Translate {
        let percent = if index < self.current {
            -self.config.translate_out
        } else if index > self.current {
            100.0
        } else {
            0.0
        };
        Translate::along(self.config.orientation, percent)
    }

    /// Every child with its resting transform.
    pub fn arrangement(&self) -> Vec<(NodeId, Translate)> {
        self.children
            .iter()
            .enumerate()
            .map(|(index, child)| (child, self.resting_position(index)))
            .collect()
    }

    /// Current, next and previous children, the panes a drag moves.
    pub(crate) fn neighbourhood(&self) -> Vec<NodeId> {
        [self.previous_child(), self.current_child(), self.next_child()]
            .into_iter()
            .flatten()
            .collect()
    }

    pub(crate) fn is_name_taken(&self, name: &str) -> bool {
        self.children.position_of(name).is_some()
    }

    /// Add `child` after the last child.
    pub(crate) fn append(&mut self, child: NodeId, name: &str) -> bool {
        let index = self.children.len();
        self.children.insert(index, child, name)
    }

    /// Add `child` before the first child, keeping the current child current.
    pub(crate) fn prepend(&mut self, child: NodeId, name: &str) -> bool {
        if self.children.is_empty() {
            return self.append(child, name);
        }
        if !self.children.insert(0, child, name) {
            return false;
        }
        self.current += 1;
        true
    }

    /// Remove `child`, keeping the position valid. When the current child is
    /// removed, the child that takes its place becomes current.
    pub(crate) fn remove(&mut self, child: NodeId) -> bool {
        let Some(index) = self.children.remove(child) else {
            return false;
        };
        if index < self.current {
            self.current -= 1;
        }
        self.current = self.current.min(self.children.len().saturating_sub(1));
        true
    }
}
