//! Render decoration.
//!
//! Drawing itself belongs to the host. [`RenderHooks`] wraps the host's
//! [`Render`] implementation and fires `beforerender`/`afterrender` around
//! every node it draws, children first.

use panedom::{EventOptions, NodeId, Tree};

use crate::events;
use crate::stage::Stage;

/// Draws a single node.
pub trait Render {
    fn render(&mut self, node: NodeId, tree: &Tree);
}

impl<F> Render for F
where
    F: FnMut(NodeId, &Tree),
{
    fn render(&mut self, node: NodeId, tree: &Tree) {
        self(node, tree)
    }
}

/// A [`Render`] wrapped with the render lifecycle events.
#[derive(Debug)]
pub struct RenderHooks<R> {
    inner: R,
}

impl<R: Render> RenderHooks<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Render `node` and its subtree.
    ///
    /// Returns false if a `beforerender` listener prevented rendering `node`.
    /// A prevented node skips its whole subtree and no `afterrender` fires
    /// for it. The render events run with the stage released; the wrapped
    /// [`Render`] sees the tree and must not call back into the stage.
    pub fn render_tree(&mut self, stage: &Stage, node: NodeId) -> bool {
        if !stage.trigger(node, events::BEFORE_RENDER, EventOptions::new()) {
            stage.with_tree(|tree| log::debug!("render of {} prevented", tree.key(node)));
            return false;
        }
        let children = stage.with_tree(|tree| tree.children(node).to_vec());
        for child in children {
            self.render_tree(stage, child);
        }
        stage.with_tree(|tree| self.inner.render(node, tree));
        stage.trigger(node, events::AFTER_RENDER, EventOptions::notify());
        true
    }
}
