//! The single-threaded owner of a pane tree and its navigation controllers.
//!
//! A [`Stage`] is a cheap handle; clones share the same tree. All work runs
//! synchronously on the calling thread. The only suspension points are slide
//! completions, which resolve when the host advances the animation clock with
//! [`Stage::tick`] (or reports finished transitions with
//! [`Stage::transition_end`]).
//!
//! Listeners never run while the stage is borrowed. Events raised during an
//! operation are queued and delivered in order once the operation has
//! released its state, so a listener may query the stage or start another
//! navigation. The one exception is the pre-flight `next`/`previous` event,
//! which runs before the step it guards, again with the stage released.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Instant;

use panedom::{
    AnimationState, Detail, Dispatch, EventOptions, Listener, NodeId, Orientation, Pane,
    PointerSample, TouchPhase, Translate, Tree,
};

use crate::children::ChildSet;
use crate::config::StackConfig;
use crate::controller::{Controller, Direction};
use crate::error::NavigationError;
use crate::events;
use crate::gesture::{Swipe, SwipePolicy};
use crate::render::{Render, RenderHooks};
use crate::sequencer::{Completion, Leg, Outbox, SlidePlan, TransitionSequencer};

/// Screen edge a named child slides in from or out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    pub fn orientation(self) -> Orientation {
        match self {
            Edge::Left | Edge::Right => Orientation::Horizontal,
            Edge::Top | Edge::Bottom => Orientation::Vertical,
        }
    }

    /// Whether a pane coming from this edge slides over the current one.
    /// Panes from the leading edges slide in from beneath.
    fn covers(self) -> bool {
        matches!(self, Edge::Right | Edge::Bottom)
    }

    /// Off-screen position at this edge.
    fn position(self, translate_out: f64) -> Translate {
        let percent = if self.covers() { 100.0 } else { -translate_out };
        Translate::along(self.orientation(), percent)
    }
}

#[derive(Debug, Default)]
struct Inner {
    tree: Tree,
    animation: AnimationState,
    controllers: HashMap<NodeId, Controller>,
    sequencer: TransitionSequencer,
    outbox: Outbox,
}

/// Pane tree, navigation controllers and the animations between them.
#[derive(Debug, Clone, Default)]
pub struct Stage {
    inner: Rc<RefCell<Inner>>,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Tree building
    // ------------------------------------------------------------------

    /// Create a plain pane with no navigation behaviour.
    pub fn create_pane(&self) -> NodeId {
        self.inner.borrow_mut().tree.create()
    }

    /// Create a controller whose children are navigated in order.
    pub fn create_stack(&self, config: StackConfig) -> NodeId {
        self.inner.borrow_mut().create_controller(config, ChildSet::ordered())
    }

    /// Create a controller whose children are registered by name.
    pub fn create_browser(&self, config: StackConfig) -> NodeId {
        self.inner.borrow_mut().create_controller(config, ChildSet::named())
    }

    /// Record the laid out size of a pane, in pixels.
    pub fn set_extent(&self, node: NodeId, width: f64, height: f64) {
        let mut inner = self.inner.borrow_mut();
        let pane = inner.tree.pane_mut(node);
        pane.width = width;
        pane.height = height;
    }

    /// Append `child` to `parent`, moving it from its previous parent.
    ///
    /// Children of a named controller appended this way are registered under
    /// their node key. Returns false if the child is `parent` itself or one
    /// of its ancestors, or if the name is already taken.
    pub fn append(&self, parent: NodeId, child: NodeId) -> bool {
        self.update(|inner| inner.attach(parent, child, None, false))
    }

    /// Insert `child` before the first child of `parent`. The current child of
    /// a controller stays current.
    pub fn prepend(&self, parent: NodeId, child: NodeId) -> bool {
        self.update(|inner| inner.attach(parent, child, None, true))
    }

    /// Register `child` under `name`. The first child added becomes current;
    /// later ones rest off-screen, hidden until they are slid in.
    ///
    /// A name that is already registered keeps its first child and the call
    /// returns false.
    pub fn add(&self, parent: NodeId, name: &str, child: NodeId) -> bool {
        self.update(|inner| inner.attach(parent, child, Some(name), false))
    }

    /// Remove `child` from `parent`. The node itself survives and can be
    /// attached elsewhere.
    pub fn remove(&self, parent: NodeId, child: NodeId) -> bool {
        self.update(|inner| inner.detach(parent, child))
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    pub fn on(&self, node: NodeId, types: &str, listener: &Listener) {
        self.inner.borrow_mut().tree.on(node, types, listener);
    }

    pub fn off(&self, node: NodeId, types: &str, listener: &Listener) {
        self.inner.borrow_mut().tree.off(node, types, listener);
    }

    /// Trigger an application event. Returns false if it was prevented.
    pub fn trigger(&self, node: NodeId, kind: &str, options: EventOptions) -> bool {
        let dispatch = self.inner.borrow().tree.prepare(node, kind, options);
        dispatch.is_none_or(Dispatch::run)
    }

    /// The pane entered the visual tree.
    pub fn notify_inserted(&self, node: NodeId) {
        self.trigger(node, events::INSERT, EventOptions::broadcast());
    }

    /// The pane left the visual tree.
    pub fn notify_removed(&self, node: NodeId) {
        self.trigger(node, events::REMOVE, EventOptions::broadcast());
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Run `f` against the tree.
    pub fn with_tree<R>(&self, f: impl FnOnce(&Tree) -> R) -> R {
        f(&self.inner.borrow().tree)
    }

    pub fn pane(&self, node: NodeId) -> Pane {
        self.inner.borrow().tree.pane(node).clone()
    }

    pub fn is_controller(&self, node: NodeId) -> bool {
        self.inner.borrow().controllers.contains_key(&node)
    }

    pub fn config(&self, controller: NodeId) -> Option<StackConfig> {
        self.read(controller, |c| c.config().clone())
    }

    pub fn current_index(&self, controller: NodeId) -> Option<usize> {
        self.read(controller, Controller::current_index).flatten()
    }

    pub fn current_child(&self, controller: NodeId) -> Option<NodeId> {
        self.read(controller, Controller::current_child).flatten()
    }

    pub fn current_name(&self, controller: NodeId) -> Option<String> {
        self.read(controller, |c| c.current_name().map(str::to_string))
            .flatten()
    }

    pub fn has_next(&self, controller: NodeId) -> bool {
        self.read(controller, Controller::has_next).unwrap_or(false)
    }

    pub fn has_previous(&self, controller: NodeId) -> bool {
        self.read(controller, Controller::has_previous)
            .unwrap_or(false)
    }

    pub fn child_count(&self, controller: NodeId) -> usize {
        self.read(controller, |c| c.children().len()).unwrap_or(0)
    }

    /// Children of a controller in navigation order.
    pub fn children(&self, controller: NodeId) -> Vec<NodeId> {
        self.read(controller, |c| c.children().iter().collect())
            .unwrap_or_default()
    }

    /// Transform to draw `node` with at `now`.
    pub fn transform(&self, node: NodeId, now: Instant) -> Translate {
        let inner = self.inner.borrow();
        inner
            .animation
            .interpolated(node, now)
            .unwrap_or(inner.tree.pane(node).transform)
    }

    pub fn is_animating(&self, node: NodeId) -> bool {
        self.inner.borrow().animation.is_animating(node)
    }

    /// Number of slides that have not finished yet.
    pub fn slides_in_flight(&self) -> usize {
        self.inner.borrow().sequencer.in_flight()
    }

    fn read<T>(&self, controller: NodeId, f: impl FnOnce(&Controller) -> T) -> Option<T> {
        self.inner.borrow().controllers.get(&controller).map(f)
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Slide to the next child.
    ///
    /// A cancelable `next` event fires on the controller first. The returned
    /// completion resolves with the new current child once it has slid in, or
    /// fails right away when there is no next child or the move was
    /// prevented.
    pub fn next(&self, controller: NodeId) -> Completion {
        self.step(controller, Direction::Next)
    }

    /// Slide to the previous child. See [`next`](Self::next).
    pub fn previous(&self, controller: NodeId) -> Completion {
        self.step(controller, Direction::Previous)
    }

    /// Step back to the first child, one slide at a time.
    pub async fn first(&self, controller: NodeId) -> Result<NodeId, NavigationError> {
        self.walk(controller, |c| c.has_previous().then_some(Direction::Previous))
            .await
    }

    /// Step forward to the last child, one slide at a time.
    pub async fn last(&self, controller: NodeId) -> Result<NodeId, NavigationError> {
        self.walk(controller, |c| c.has_next().then_some(Direction::Next))
            .await
    }

    /// Step to the child registered under `name`, one slide at a time.
    pub async fn move_to(&self, controller: NodeId, name: &str) -> Result<NodeId, NavigationError> {
        let target = {
            let inner = self.inner.borrow();
            inner
                .controller(controller)?
                .children()
                .position_of(name)
                .ok_or_else(|| NavigationError::UnknownChild(name.to_string()))?
        };
        self.walk(controller, move |c| match c.current_index()?.cmp(&target) {
            Ordering::Less => Some(Direction::Next),
            Ordering::Greater => Some(Direction::Previous),
            Ordering::Equal => None,
        })
        .await
    }

    /// Jump to the child registered under `name`, sliding it in from `from`.
    pub fn slide_in(&self, controller: NodeId, name: &str, from: Edge) -> Completion {
        match self.update(|inner| inner.slide_in(controller, name, from, Instant::now())) {
            Ok(completion) => completion,
            Err(err) => {
                log::warn!("slide in of '{name}' on {controller} rejected: {err}");
                Completion::rejected(err)
            }
        }
    }

    /// Slide the current child out toward `to`. It stays current.
    pub fn slide_out(&self, controller: NodeId, to: Edge) -> Completion {
        match self.update(|inner| inner.slide_out(controller, to, Instant::now())) {
            Ok(completion) => completion,
            Err(err) => {
                log::warn!("slide out on {controller} rejected: {err}");
                Completion::rejected(err)
            }
        }
    }

    fn step(&self, controller: NodeId, direction: Direction) -> Completion {
        match self.try_step(controller, direction) {
            Ok(completion) => completion,
            Err(err) => {
                log::warn!("{direction} on {controller} rejected: {err}");
                Completion::rejected(err)
            }
        }
    }

    /// Run the pre-flight event with the stage released, then take the step
    /// if nothing prevented it and it is still possible.
    fn try_step(
        &self,
        controller: NodeId,
        direction: Direction,
    ) -> Result<Completion, NavigationError> {
        let preflight = self.inner.borrow().preflight(controller, direction)?;
        if let Some(dispatch) = preflight
            && !dispatch.run()
        {
            return Err(NavigationError::Blocked {
                controller,
                direction,
            });
        }
        self.update(|inner| inner.step(controller, direction, Instant::now()))
    }

    /// Take the hop `plan` picks, await it, and repeat until it picks none.
    async fn walk(
        &self,
        controller: NodeId,
        plan: impl Fn(&Controller) -> Option<Direction>,
    ) -> Result<NodeId, NavigationError> {
        loop {
            let hop = {
                let inner = self.inner.borrow();
                let state = inner.controller(controller)?;
                let current = state
                    .current_child()
                    .ok_or(NavigationError::Empty(controller))?;
                match plan(state) {
                    Some(direction) => direction,
                    None => return Ok(current),
                }
            };
            self.step(controller, hop).await?;
        }
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Feed a pointer sample that hit `target`.
    ///
    /// The sample goes to every swipe-enabled controller from `target` up to
    /// the root. Once a controller moves its panes for a sample, controllers
    /// further up do not see it. Returns the completion of the navigation a
    /// committed swipe started.
    pub fn pointer(&self, target: NodeId, sample: PointerSample) -> Option<Completion> {
        let mut chain = vec![target];
        chain.extend(self.inner.borrow().tree.ancestors(target));

        let mut completion = None;
        for controller in chain {
            let Some(outcomes) = self.inner.borrow_mut().track(controller, &sample) else {
                continue;
            };
            let moved = outcomes.iter().any(|s| matches!(s, Swipe::Move { .. }));
            for outcome in outcomes {
                if let Some(started) = self.apply_swipe(controller, outcome) {
                    completion.get_or_insert(started);
                }
            }
            if moved && sample.phase == TouchPhase::Move {
                break;
            }
        }
        completion
    }

    /// Apply one swipe outcome. A commit steps the controller and returns the
    /// completion of that step.
    fn apply_swipe(&self, controller: NodeId, swipe: Swipe) -> Option<Completion> {
        self.update(|inner| inner.apply_swipe(controller, swipe, Instant::now()));
        let Swipe::Commit { direction, .. } = swipe else {
            return None;
        };
        match self.try_step(controller, direction) {
            Ok(completion) => Some(completion),
            Err(err) => {
                log::warn!("swipe {direction} on {controller} rejected: {err}");
                self.update(|inner| inner.arrange(controller, true, Instant::now()));
                Some(Completion::rejected(err))
            }
        }
    }

    // ------------------------------------------------------------------
    // Clock
    // ------------------------------------------------------------------

    /// Advance the animation clock. Returns true while transitions remain.
    pub fn tick(&self, now: Instant) -> bool {
        self.update(|inner| {
            let finished = inner.animation.update(now);
            inner.finished(finished);
            inner.animation.has_active_transitions()
        })
    }

    /// Report that the transition of `node` finished, for hosts that run
    /// their own animations.
    pub fn transition_end(&self, node: NodeId) {
        self.update(|inner| {
            inner.animation.finish(node);
            inner.finished(vec![node]);
        });
    }

    /// Finish every in-flight transition now.
    pub fn finish_transitions(&self) {
        self.update(|inner| {
            let finished = inner.animation.finish_all();
            inner.finished(finished);
        });
    }

    pub fn set_reduced_motion(&self, enabled: bool) {
        self.inner.borrow_mut().animation.set_reduced_motion(enabled);
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Render `node` and its subtree through `hooks`.
    pub fn render<R: Render>(&self, node: NodeId, hooks: &mut RenderHooks<R>) -> bool {
        hooks.render_tree(self, node)
    }

    /// Run `f` against the stage state, then deliver whatever it queued.
    fn update<T>(&self, f: impl FnOnce(&mut Inner) -> T) -> T {
        let out = f(&mut self.inner.borrow_mut());
        self.flush();
        out
    }

    /// Deliver queued events and completions with the stage released.
    /// Listeners may queue more; those are delivered too.
    fn flush(&self) {
        loop {
            let batch = self.inner.borrow_mut().outbox.take();
            if batch.is_empty() {
                return;
            }
            for item in batch {
                item.run();
            }
        }
    }
}

impl Inner {
    fn controller(&self, node: NodeId) -> Result<&Controller, NavigationError> {
        self.controllers
            .get(&node)
            .ok_or(NavigationError::NotAController(node))
    }

    fn create_controller(&mut self, config: StackConfig, children: ChildSet) -> NodeId {
        let node = self.tree.create();
        log::debug!(
            "created {} controller {}",
            if children.is_named() { "named" } else { "ordered" },
            self.tree.key(node)
        );
        self.controllers
            .insert(node, Controller::new(node, config, children));
        node
    }

    fn attach(&mut self, parent: NodeId, child: NodeId, name: Option<&str>, front: bool) -> bool {
        if child == parent || self.tree.is_ancestor(child, parent) {
            log::warn!(
                "cannot attach {} beneath its own descendant {}",
                self.tree.key(child),
                self.tree.key(parent)
            );
            return false;
        }
        let name = name.map_or_else(|| self.tree.key(child).to_string(), str::to_string);
        if let Some(controller) = self.controllers.get(&parent)
            && controller.is_name_taken(&name)
        {
            log::warn!("{} already has a child named '{name}'", self.tree.key(parent));
            return false;
        }

        let now = Instant::now();
        let previous_parent = self.tree.parent(child);
        if let Some(old) = previous_parent
            && let Some(controller) = self.controllers.get_mut(&old)
        {
            controller.remove(child);
        }

        if front {
            self.tree.prepend(parent, child);
        } else {
            self.tree.append(parent, child);
        }
        if let Some(controller) = self.controllers.get_mut(&parent) {
            if front {
                controller.prepend(child, &name);
            } else {
                controller.append(child, &name);
            }
            self.arrange(parent, false, now);
        }
        if let Some(old) = previous_parent
            && old != parent
        {
            self.arrange(old, false, now);
        }
        true
    }

    fn detach(&mut self, parent: NodeId, child: NodeId) -> bool {
        if !self.tree.remove(parent, child) {
            return false;
        }
        if let Some(controller) = self.controllers.get_mut(&parent)
            && controller.remove(child)
        {
            self.arrange(parent, false, Instant::now());
        }
        true
    }

    /// Move every child of `controller` to its resting position.
    ///
    /// Without `animate` positions apply immediately and named controllers
    /// hide every child but the current one.
    fn arrange(&mut self, controller: NodeId, animate: bool, now: Instant) {
        let Some(state) = self.controllers.get(&controller) else {
            return;
        };
        let named = state.children().is_named();
        let current = state.current_index();
        let transition = state.config().transition();
        let arrangement = state.arrangement();

        for (index, (child, to)) in arrangement.into_iter().enumerate() {
            if !animate {
                self.settle(child);
            }
            let pane = self.tree.pane_mut(child);
            if animate && !pane.frozen {
                if pane.transform != to {
                    let from = pane.transform;
                    pane.transform = to;
                    self.animation.start(child, from, to, transition, now);
                }
            } else {
                pane.transform = to;
                if named && !animate {
                    pane.visible = Some(index) == current;
                }
            }
        }
    }

    /// Finish the transition of `node` if it has one.
    fn settle(&mut self, node: NodeId) {
        if self.animation.finish(node) {
            self.sequencer.finished(&self.tree, &mut self.outbox, node);
        }
    }

    fn finished(&mut self, nodes: Vec<NodeId>) {
        for node in nodes {
            self.sequencer.finished(&self.tree, &mut self.outbox, node);
        }
    }

    /// Check that `controller` can step in `direction`.
    fn check_step(
        &self,
        controller: NodeId,
        direction: Direction,
    ) -> Result<(), NavigationError> {
        let state = self.controller(controller)?;
        if state.current_index().is_none() {
            return Err(NavigationError::Empty(controller));
        }
        if !state.has(direction) {
            return Err(NavigationError::NoAdjacent {
                controller,
                direction,
            });
        }
        Ok(())
    }

    /// The cancelable event that guards a step, if anything listens for it.
    fn preflight(
        &self,
        controller: NodeId,
        direction: Direction,
    ) -> Result<Option<Dispatch>, NavigationError> {
        self.check_step(controller, direction)?;
        Ok(self
            .tree
            .prepare(controller, direction.event(), EventOptions::new()))
    }

    fn step(
        &mut self,
        controller: NodeId,
        direction: Direction,
        now: Instant,
    ) -> Result<Completion, NavigationError> {
        // The pre-flight listeners may have changed the controller.
        self.check_step(controller, direction)?;
        let state = self
            .controllers
            .get_mut(&controller)
            .ok_or(NavigationError::NotAController(controller))?;
        let Some(from) = state.current_index() else {
            return Err(NavigationError::Empty(controller));
        };

        let outgoing = state.current_child();
        state.step(direction);
        let incoming = state.current_child();
        let plan = SlidePlan {
            controller,
            next: Some(direction.is_next()),
            outgoing: outgoing.map(|node| Leg {
                node,
                to: state.resting_position(from),
            }),
            incoming: incoming.map(|node| Leg {
                node,
                to: Translate::ZERO,
            }),
            transition: state.config().transition(),
        };
        log::debug!(
            "{} {direction}: {} -> {}",
            self.tree.key(controller),
            from,
            state.current_index().unwrap_or(from)
        );
        if let Some(node) = incoming {
            self.tree.pane_mut(node).visible = true;
        }
        Ok(self
            .sequencer
            .begin(&mut self.tree, &mut self.animation, &mut self.outbox, plan, now))
    }

    fn slide_in(
        &mut self,
        controller: NodeId,
        name: &str,
        from: Edge,
        now: Instant,
    ) -> Result<Completion, NavigationError> {
        let state = self
            .controllers
            .get_mut(&controller)
            .ok_or(NavigationError::NotAController(controller))?;
        let index = state
            .children()
            .position_of(name)
            .ok_or_else(|| NavigationError::UnknownChild(name.to_string()))?;
        let incoming = state
            .children()
            .get(index)
            .ok_or_else(|| NavigationError::UnknownChild(name.to_string()))?;
        let outgoing = state.current_child();
        if outgoing == Some(incoming) {
            return Ok(Completion::resolved(Ok(incoming)));
        }
        let start = from.position(state.config().translate_out);
        let transition = state.config().transition();
        state.set_current(index);
        log::debug!("{} slide in '{name}' from {from:?}", self.tree.key(controller));

        let (above, below) = if from.covers() { (1, 0) } else { (0, 1) };
        if let Some(node) = outgoing {
            self.tree.pane_mut(node).z_index = below;
        }
        self.animation.cancel(incoming);
        let pane = self.tree.pane_mut(incoming);
        pane.z_index = above;
        pane.transform = start;
        pane.visible = true;

        let plan = SlidePlan {
            controller,
            next: None,
            outgoing: None,
            incoming: Some(Leg {
                node: incoming,
                to: Translate::ZERO,
            }),
            transition,
        };
        Ok(self
            .sequencer
            .begin(&mut self.tree, &mut self.animation, &mut self.outbox, plan, now))
    }

    fn slide_out(
        &mut self,
        controller: NodeId,
        to: Edge,
        now: Instant,
    ) -> Result<Completion, NavigationError> {
        let state = self.controller(controller)?;
        let node = state
            .current_child()
            .ok_or(NavigationError::Empty(controller))?;
        let plan = SlidePlan {
            controller,
            next: None,
            outgoing: Some(Leg {
                node,
                to: to.position(state.config().translate_out),
            }),
            incoming: None,
            transition: state.config().transition(),
        };
        log::debug!("{} slide out to {to:?}", self.tree.key(controller));
        Ok(self
            .sequencer
            .begin(&mut self.tree, &mut self.animation, &mut self.outbox, plan, now))
    }

    /// Feed `sample` to the gesture tracker of `controller`. `None` when the
    /// node does not take swipes.
    fn track(&mut self, controller: NodeId, sample: &PointerSample) -> Option<Vec<Swipe>> {
        let state = self.controllers.get_mut(&controller)?;
        if !state.config().swipe {
            return None;
        }
        let policy = SwipePolicy::from(state.config());
        let edges = state.edges();
        Some(state.gesture.process(sample, &policy, edges))
    }

    /// Move panes for one swipe outcome and queue its event. A commit only
    /// ends the drag; the caller takes the step.
    fn apply_swipe(&mut self, controller: NodeId, swipe: Swipe, now: Instant) {
        let (kind, detail) = match swipe {
            Swipe::Start { origin } => {
                self.freeze(controller, true);
                (events::SWIPE_START, Detail::Point(origin))
            }
            Swipe::Move { distance } => {
                self.drag(controller, distance);
                (events::SWIPE_MOVE, Detail::Distance(distance))
            }
            Swipe::Commit { distance, .. } => {
                self.freeze(controller, false);
                (events::SWIPE_END, Detail::Distance(distance))
            }
            Swipe::Cancel { restore } => {
                if restore {
                    self.freeze(controller, false);
                    self.arrange(controller, true, now);
                }
                (events::SWIPE_CANCEL, Detail::None)
            }
            Swipe::Release => {
                self.freeze(controller, false);
                self.arrange(controller, true, now);
                return;
            }
        };
        self.outbox.trigger(
            &self.tree,
            controller,
            kind,
            EventOptions::notify().detail(detail),
        );
    }

    /// Freeze (or unfreeze) the panes a drag moves. Frozen panes follow the
    /// pointer without animating.
    fn freeze(&mut self, controller: NodeId, frozen: bool) {
        let Some(state) = self.controllers.get(&controller) else {
            return;
        };
        for node in state.neighbourhood() {
            if frozen {
                self.settle(node);
                self.tree.pane_mut(node).visible = true;
            }
            self.tree.pane_mut(node).frozen = frozen;
        }
    }

    /// Position the panes of `controller` for a drag of `distance` pixels.
    fn drag(&mut self, controller: NodeId, distance: f64) {
        let Some(state) = self.controllers.get(&controller) else {
            return;
        };
        let Some(current) = state.current_child() else {
            return;
        };
        let orientation = state.config().orientation;
        let translate_out = state.config().translate_out;
        let extent = self.tree.pane(current).extent(orientation);
        let translation = if extent > 0.0 {
            100.0 * distance / extent
        } else {
            0.0
        };

        let mut offsets = vec![(current, translation)];
        if let Some(previous) = state.previous_child() {
            let offset = if distance >= 0.0 {
                (translation - 100.0) * translate_out / 100.0
            } else {
                -translate_out
            };
            offsets.push((previous, offset));
        }
        if let Some(next) = state.next_child() {
            let offset = if distance < 0.0 {
                100.0 + translation
            } else {
                100.0
            };
            offsets.push((next, offset));
        }

        for (node, offset) in offsets {
            self.settle(node);
            self.tree.pane_mut(node).transform = Translate::along(orientation, offset);
        }
    }
}
