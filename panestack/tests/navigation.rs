use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;
use std::time::{Duration, Instant};

use futures::FutureExt;
use panestack::panedom::{listener, Event, Listener, NodeId, Translate};
use panestack::{Direction, Edge, NavigationError, StackConfig, Stage};

type Log = Rc<RefCell<Vec<(String, NodeId)>>>;

const SLIDE_EVENTS: &str =
    "beforeslide afterslide beforeslideout afterslideout beforeslidein afterslidein";

/// Records `(event type, target)` for every event it sees.
fn recorder(log: &Log) -> Listener {
    let log = Rc::clone(log);
    listener(move |event: &mut Event| {
        log.borrow_mut()
            .push((event.kind().to_string(), event.target()))
    })
}

fn of_kind(log: &Log, kind: &str) -> Vec<NodeId> {
    log.borrow()
        .iter()
        .filter(|(k, _)| k == kind)
        .map(|(_, node)| *node)
        .collect()
}

/// Poll `task`, finishing every pending transition whenever it stalls.
async fn drive<F: Future>(stage: &Stage, task: F) -> F::Output {
    tokio::pin!(task);
    loop {
        tokio::select! {
            biased;
            out = &mut task => return out,
            _ = tokio::task::yield_now() => stage.finish_transitions(),
        }
    }
}

fn stack_of(stage: &Stage, count: usize) -> (NodeId, Vec<NodeId>) {
    let stack = stage.create_stack(StackConfig::default());
    let children = (0..count)
        .map(|_| {
            let pane = stage.create_pane();
            stage.append(stack, pane);
            pane
        })
        .collect();
    (stack, children)
}

fn step_now(stage: &Stage, stack: NodeId, direction: Direction) {
    let mut done = match direction {
        Direction::Next => stage.next(stack),
        Direction::Previous => stage.previous(stack),
    };
    stage.finish_transitions();
    assert!(matches!(done.try_outcome(), Some(Ok(_))));
}

fn browser(stage: &Stage, names: &[&str]) -> (NodeId, Vec<NodeId>) {
    let browser = stage.create_browser(StackConfig::default());
    let children = names
        .iter()
        .map(|name| {
            let pane = stage.create_pane();
            assert!(stage.add(browser, name, pane));
            pane
        })
        .collect();
    (browser, children)
}

// ============================================================================
// Stepping
// ============================================================================

#[test]
fn test_next_slides_to_following_child() {
    let stage = Stage::new();
    let (stack, kids) = stack_of(&stage, 3);
    step_now(&stage, stack, Direction::Next);
    assert_eq!(stage.current_index(stack), Some(1));

    let log: Log = Rc::default();
    stage.on(stack, SLIDE_EVENTS, &recorder(&log));

    let mut done = stage.next(stack);
    assert_eq!(stage.current_index(stack), Some(2));
    assert_eq!(done.try_outcome(), None);
    stage.finish_transitions();

    assert_eq!(done.try_outcome(), Some(Ok(kids[2])));
    assert_eq!(
        *log.borrow(),
        vec![
            ("beforeslide".to_string(), stack),
            ("beforeslideout".to_string(), kids[1]),
            ("beforeslidein".to_string(), kids[2]),
            ("afterslideout".to_string(), kids[1]),
            ("afterslidein".to_string(), kids[2]),
            ("afterslide".to_string(), stack),
        ]
    );
}

#[test]
fn test_next_at_last_child_is_rejected() {
    let stage = Stage::new();
    let (stack, _) = stack_of(&stage, 3);
    step_now(&stage, stack, Direction::Next);
    step_now(&stage, stack, Direction::Next);

    let log: Log = Rc::default();
    stage.on(stack, SLIDE_EVENTS, &recorder(&log));
    let mut done = stage.next(stack);

    assert_eq!(
        done.try_outcome(),
        Some(Err(NavigationError::NoAdjacent {
            controller: stack,
            direction: Direction::Next,
        }))
    );
    assert_eq!(stage.current_index(stack), Some(2));
    assert!(!stage.has_next(stack));
    assert!(log.borrow().is_empty());
}

#[test]
fn test_previous_at_first_child_is_rejected() {
    let stage = Stage::new();
    let (stack, _) = stack_of(&stage, 2);

    let mut done = stage.previous(stack);

    assert!(matches!(done.try_outcome(), Some(Err(err)) if err.is_blocked()));
    assert_eq!(stage.current_index(stack), Some(0));
}

#[test]
fn test_prevented_preflight_blocks_navigation() {
    let stage = Stage::new();
    let (stack, _) = stack_of(&stage, 2);
    let log: Log = Rc::default();
    stage.on(stack, SLIDE_EVENTS, &recorder(&log));
    stage.on(
        stack,
        "next",
        &listener(|event: &mut Event| event.prevent_default()),
    );

    let mut done = stage.next(stack);

    assert_eq!(
        done.try_outcome(),
        Some(Err(NavigationError::Blocked {
            controller: stack,
            direction: Direction::Next,
        }))
    );
    assert_eq!(stage.current_index(stack), Some(0));
    assert!(log.borrow().is_empty());
}

#[test]
fn test_preflight_bubbles_to_ancestors() {
    let stage = Stage::new();
    let root = stage.create_pane();
    let (stack, _) = stack_of(&stage, 2);
    stage.append(root, stack);
    stage.on(
        root,
        "next",
        &listener(|event: &mut Event| event.prevent_default()),
    );

    let mut done = stage.next(stack);

    assert!(matches!(
        done.try_outcome(),
        Some(Err(NavigationError::Blocked { .. }))
    ));
}

#[test]
fn test_slide_detail_carries_direction() {
    let stage = Stage::new();
    let (stack, _) = stack_of(&stage, 2);
    step_now(&stage, stack, Direction::Next);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let record = {
        let seen = Rc::clone(&seen);
        listener(move |event: &mut Event| seen.borrow_mut().push(event.detail().slide_next()))
    };
    stage.on(stack, "beforeslide afterslide", &record);

    step_now(&stage, stack, Direction::Previous);

    assert_eq!(*seen.borrow(), vec![Some(false), Some(false)]);
}

#[test]
fn test_resting_positions_after_slide() {
    let stage = Stage::new();
    let (stack, kids) = stack_of(&stage, 3);
    assert_eq!(stage.pane(kids[0]).transform, Translate::ZERO);
    assert_eq!(stage.pane(kids[1]).transform, Translate::new(100.0, 0.0));

    step_now(&stage, stack, Direction::Next);

    assert_eq!(stage.pane(kids[0]).transform, Translate::new(-25.0, 0.0));
    assert_eq!(stage.pane(kids[1]).transform, Translate::ZERO);
    assert_eq!(stage.pane(kids[2]).transform, Translate::new(100.0, 0.0));
}

#[test]
fn test_vertical_stack_slides_on_y() {
    let stage = Stage::new();
    let stack = stage.create_stack(
        StackConfig::default()
            .with_orientation(panestack::panedom::Orientation::Vertical)
            .with_translate_out(100.0),
    );
    let (a, b) = (stage.create_pane(), stage.create_pane());
    stage.append(stack, a);
    stage.append(stack, b);
    assert_eq!(stage.pane(b).transform, Translate::new(0.0, 100.0));

    step_now(&stage, stack, Direction::Next);

    assert_eq!(stage.pane(a).transform, Translate::new(0.0, -100.0));
}

// ============================================================================
// Completion
// ============================================================================

#[test]
fn test_completion_follows_the_clock() {
    let stage = Stage::new();
    let (stack, kids) = stack_of(&stage, 2);
    let t0 = Instant::now();

    let mut done = stage.next(stack);

    assert!(stage.tick(t0));
    assert_eq!(done.try_outcome(), None);
    assert!(stage.is_animating(kids[1]));
    let halfway = stage.transform(kids[1], t0 + Duration::from_millis(150));
    assert!(halfway.x > 0.0 && halfway.x < 100.0);

    assert!(!stage.tick(t0 + Duration::from_secs(1)));
    assert_eq!(done.try_outcome(), Some(Ok(kids[1])));
    assert_eq!(stage.slides_in_flight(), 0);
}

#[test]
fn test_reduced_motion_finishes_on_next_tick() {
    let stage = Stage::new();
    stage.set_reduced_motion(true);
    let (stack, kids) = stack_of(&stage, 2);

    let mut done = stage.next(stack);
    stage.tick(Instant::now());

    assert_eq!(done.try_outcome(), Some(Ok(kids[1])));
}

#[test]
fn test_transition_end_reported_by_host() {
    let stage = Stage::new();
    let (stack, kids) = stack_of(&stage, 2);
    let log: Log = Rc::default();
    stage.on(stack, SLIDE_EVENTS, &recorder(&log));

    let mut done = stage.next(stack);
    stage.transition_end(kids[1]);

    assert_eq!(done.try_outcome(), Some(Ok(kids[1])));
    assert!(of_kind(&log, "afterslideout").is_empty());
    assert_eq!(stage.slides_in_flight(), 1);

    stage.transition_end(kids[0]);

    assert_eq!(of_kind(&log, "afterslideout"), vec![kids[0]]);
    assert_eq!(stage.slides_in_flight(), 0);
}

#[test]
fn test_dropped_stage_interrupts_completion() {
    let stage = Stage::new();
    let (stack, _) = stack_of(&stage, 2);

    let mut done = stage.next(stack);
    drop(stage);

    assert_eq!(done.try_outcome(), Some(Err(NavigationError::Interrupted)));
}

#[test]
fn test_empty_and_plain_nodes_are_rejected() {
    let stage = Stage::new();
    let empty = stage.create_stack(StackConfig::default());
    let plain = stage.create_pane();

    assert_eq!(
        stage.next(empty).try_outcome(),
        Some(Err(NavigationError::Empty(empty)))
    );
    assert_eq!(
        stage.previous(plain).try_outcome(),
        Some(Err(NavigationError::NotAController(plain)))
    );
    assert_eq!(stage.current_index(empty), None);
}

#[tokio::test]
async fn test_completion_can_be_awaited() {
    let stage = Stage::new();
    let (stack, kids) = stack_of(&stage, 2);

    let result = drive(&stage, stage.next(stack)).await;

    assert_eq!(result, Ok(kids[1]));
}

// ============================================================================
// Sequenced Moves
// ============================================================================

#[tokio::test]
async fn test_first_steps_back_one_hop_at_a_time() {
    let stage = Stage::new();
    let (stack, kids) = stack_of(&stage, 4);
    assert_eq!(drive(&stage, stage.last(stack)).await, Ok(kids[3]));
    assert_eq!(stage.current_index(stack), Some(3));

    let log: Log = Rc::default();
    stage.on(stack, SLIDE_EVENTS, &recorder(&log));

    assert_eq!(drive(&stage, stage.first(stack)).await, Ok(kids[0]));

    assert_eq!(stage.current_index(stack), Some(0));
    assert_eq!(of_kind(&log, "beforeslide").len(), 3);
    assert_eq!(of_kind(&log, "afterslide").len(), 3);
    assert_eq!(of_kind(&log, "beforeslidein"), vec![kids[2], kids[1], kids[0]]);
    assert_eq!(of_kind(&log, "afterslideout"), vec![kids[3], kids[2], kids[1]]);
}

#[tokio::test]
async fn test_hops_do_not_overlap() {
    let stage = Stage::new();
    let (stack, _) = stack_of(&stage, 3);
    let log: Log = Rc::default();
    stage.on(stack, "beforeslide afterslide", &recorder(&log));

    assert!(drive(&stage, stage.last(stack)).await.is_ok());

    let kinds: Vec<String> = log.borrow().iter().map(|(k, _)| k.clone()).collect();
    assert_eq!(
        kinds,
        vec!["beforeslide", "afterslide", "beforeslide", "afterslide"]
    );
}

#[test]
fn test_first_at_edge_resolves_immediately() {
    let stage = Stage::new();
    let (stack, kids) = stack_of(&stage, 2);
    let log: Log = Rc::default();
    stage.on(stack, SLIDE_EVENTS, &recorder(&log));

    assert_eq!(stage.first(stack).now_or_never(), Some(Ok(kids[0])));
    assert!(log.borrow().is_empty());
}

#[tokio::test]
async fn test_first_on_empty_stack_fails() {
    let stage = Stage::new();
    let stack = stage.create_stack(StackConfig::default());

    assert_eq!(
        drive(&stage, stage.first(stack)).await,
        Err(NavigationError::Empty(stack))
    );
}

#[tokio::test]
async fn test_move_to_named_child() {
    let stage = Stage::new();
    let (browser, kids) = browser(&stage, &["home", "profile", "settings"]);
    let log: Log = Rc::default();
    stage.on(browser, SLIDE_EVENTS, &recorder(&log));

    let result = drive(&stage, stage.move_to(browser, "settings")).await;

    assert_eq!(result, Ok(kids[2]));
    assert_eq!(stage.current_name(browser).as_deref(), Some("settings"));
    assert_eq!(of_kind(&log, "beforeslidein"), vec![kids[1], kids[2]]);
    assert_eq!(of_kind(&log, "afterslide").len(), 2);
}

#[tokio::test]
async fn test_move_to_backwards() {
    let stage = Stage::new();
    let (browser, kids) = browser(&stage, &["home", "profile", "settings"]);
    assert!(drive(&stage, stage.last(browser)).await.is_ok());

    let result = drive(&stage, stage.move_to(browser, "home")).await;

    assert_eq!(result, Ok(kids[0]));
    assert_eq!(stage.current_index(browser), Some(0));
}

#[tokio::test]
async fn test_move_to_unknown_name() {
    let stage = Stage::new();
    let (browser, _) = browser(&stage, &["home"]);

    assert_eq!(
        drive(&stage, stage.move_to(browser, "missing")).await,
        Err(NavigationError::UnknownChild("missing".to_string()))
    );
}

// ============================================================================
// Structure
// ============================================================================

#[test]
fn test_prepend_keeps_current_child() {
    let stage = Stage::new();
    let (stack, kids) = stack_of(&stage, 2);
    step_now(&stage, stack, Direction::Next);

    let front = stage.create_pane();
    assert!(stage.prepend(stack, front));

    assert_eq!(stage.current_index(stack), Some(2));
    assert_eq!(stage.current_child(stack), Some(kids[1]));
    assert_eq!(stage.children(stack), vec![front, kids[0], kids[1]]);
    assert_eq!(stage.pane(front).transform, Translate::new(-25.0, 0.0));
    assert_eq!(
        stage.with_tree(|tree| tree.children(stack).to_vec()),
        vec![front, kids[0], kids[1]]
    );
}

#[test]
fn test_prepend_on_empty_stack_appends() {
    let stage = Stage::new();
    let stack = stage.create_stack(StackConfig::default());
    let only = stage.create_pane();

    assert!(stage.prepend(stack, only));

    assert_eq!(stage.current_child(stack), Some(only));
    assert_eq!(stage.pane(only).transform, Translate::ZERO);
}

#[test]
fn test_remove_before_current_keeps_current() {
    let stage = Stage::new();
    let (stack, kids) = stack_of(&stage, 3);
    step_now(&stage, stack, Direction::Next);
    step_now(&stage, stack, Direction::Next);

    assert!(stage.remove(stack, kids[0]));

    assert_eq!(stage.current_index(stack), Some(1));
    assert_eq!(stage.current_child(stack), Some(kids[2]));
    assert_eq!(stage.child_count(stack), 2);
    assert!(!stage.remove(stack, kids[0]));
}

#[test]
fn test_remove_last_current_falls_back() {
    let stage = Stage::new();
    let (stack, kids) = stack_of(&stage, 2);
    step_now(&stage, stack, Direction::Next);

    stage.remove(stack, kids[1]);

    assert_eq!(stage.current_child(stack), Some(kids[0]));
    assert_eq!(stage.pane(kids[0]).transform, Translate::ZERO);
}

#[test]
fn test_moving_child_between_stacks() {
    let stage = Stage::new();
    let (left, kids) = stack_of(&stage, 2);
    let (right, _) = stack_of(&stage, 1);

    assert!(stage.append(right, kids[0]));

    assert_eq!(stage.children(left), vec![kids[1]]);
    assert_eq!(stage.child_count(right), 2);
    assert_eq!(stage.pane(kids[1]).transform, Translate::ZERO);
}

#[test]
fn test_cyclic_attach_is_refused() {
    let stage = Stage::new();
    let (outer, _) = stack_of(&stage, 0);
    let (inner, _) = stack_of(&stage, 0);
    stage.append(outer, inner);

    assert!(!stage.append(inner, outer));
    assert!(!stage.append(outer, outer));
}

#[test]
fn test_named_children_start_hidden() {
    let stage = Stage::new();
    let (browser, kids) = browser(&stage, &["home", "settings"]);

    assert_eq!(stage.current_name(browser).as_deref(), Some("home"));
    assert!(stage.pane(kids[0]).visible);
    assert!(!stage.pane(kids[1]).visible);
}

#[test]
fn test_duplicate_name_keeps_first() {
    let stage = Stage::new();
    let (browser, kids) = browser(&stage, &["home"]);
    let imposter = stage.create_pane();

    assert!(!stage.add(browser, "home", imposter));

    assert_eq!(stage.children(browser), vec![kids[0]]);
    assert_eq!(stage.with_tree(|tree| tree.parent(imposter)), None);
}

// ============================================================================
// Edge Slides
// ============================================================================

#[test]
fn test_slide_in_from_right_covers_current() {
    let stage = Stage::new();
    let (browser, kids) = browser(&stage, &["home", "settings"]);
    let log: Log = Rc::default();
    stage.on(browser, SLIDE_EVENTS, &recorder(&log));

    let mut done = stage.slide_in(browser, "settings", Edge::Right);

    assert_eq!(stage.current_name(browser).as_deref(), Some("settings"));
    let settings = stage.pane(kids[1]);
    assert!(settings.visible);
    assert_eq!(settings.z_index, 1);
    assert_eq!(stage.pane(kids[0]).z_index, 0);
    assert!(stage.is_animating(kids[1]));

    stage.finish_transitions();

    assert_eq!(done.try_outcome(), Some(Ok(kids[1])));
    assert_eq!(stage.pane(kids[1]).transform, Translate::ZERO);
    assert_eq!(
        *log.borrow(),
        vec![
            ("beforeslidein".to_string(), kids[1]),
            ("afterslidein".to_string(), kids[1]),
        ]
    );
}

#[test]
fn test_slide_in_from_left_starts_beneath() {
    let stage = Stage::new();
    let (browser, kids) = browser(&stage, &["home", "menu"]);
    let t0 = Instant::now();

    let _done = stage.slide_in(browser, "menu", Edge::Left);

    assert_eq!(stage.pane(kids[1]).z_index, 0);
    assert_eq!(stage.pane(kids[0]).z_index, 1);
    let start = stage.transform(kids[1], t0);
    assert_eq!(start, Translate::new(-25.0, 0.0));
}

#[test]
fn test_slide_in_unknown_or_current() {
    let stage = Stage::new();
    let (browser, kids) = browser(&stage, &["home"]);

    assert_eq!(
        stage.slide_in(browser, "nope", Edge::Top).try_outcome(),
        Some(Err(NavigationError::UnknownChild("nope".to_string())))
    );
    assert_eq!(
        stage.slide_in(browser, "home", Edge::Top).try_outcome(),
        Some(Ok(kids[0]))
    );
}

#[test]
fn test_slide_out_moves_current_to_edge() {
    let stage = Stage::new();
    let (browser, kids) = browser(&stage, &["home", "settings"]);
    let log: Log = Rc::default();
    stage.on(browser, SLIDE_EVENTS, &recorder(&log));

    let mut done = stage.slide_out(browser, Edge::Bottom);
    stage.finish_transitions();

    assert_eq!(done.try_outcome(), Some(Ok(kids[0])));
    assert_eq!(stage.pane(kids[0]).transform, Translate::new(0.0, 100.0));
    assert_eq!(stage.current_name(browser).as_deref(), Some("home"));
    assert_eq!(of_kind(&log, "afterslideout"), vec![kids[0]]);
    assert!(of_kind(&log, "beforeslide").is_empty());
}

// ============================================================================
// Presence
// ============================================================================

#[test]
fn test_insert_trickles_without_bubbling() {
    let stage = Stage::new();
    let root = stage.create_pane();
    let (stack, kids) = stack_of(&stage, 2);
    stage.append(root, stack);
    let log: Log = Rc::default();
    let record = recorder(&log);
    stage.on(root, "insert remove", &record);
    stage.on(kids[1], "insert remove", &record);

    stage.notify_inserted(stack);
    stage.notify_removed(stack);

    assert_eq!(
        *log.borrow(),
        vec![
            ("insert".to_string(), stack),
            ("remove".to_string(), stack),
        ]
    );
}

// ============================================================================
// Completion Signals
// ============================================================================

#[tokio::test]
async fn test_await_after_try_outcome_is_interrupted() {
    let stage = Stage::new();
    let (stack, kids) = stack_of(&stage, 2);

    let mut done = stage.next(stack);
    stage.finish_transitions();

    assert_eq!(done.try_outcome(), Some(Ok(kids[1])));
    assert_eq!(done.try_outcome(), Some(Err(NavigationError::Interrupted)));
    assert_eq!(done.await, Err(NavigationError::Interrupted));
}

#[tokio::test]
async fn test_try_outcome_after_await_is_interrupted() {
    let stage = Stage::new();
    let (stack, kids) = stack_of(&stage, 2);

    let mut done = stage.next(stack);
    stage.finish_transitions();

    assert_eq!((&mut done).await, Ok(kids[1]));
    assert_eq!(done.try_outcome(), Some(Err(NavigationError::Interrupted)));
}

#[test]
fn test_rejected_completion_is_consumed_once() {
    let stage = Stage::new();
    let (stack, _) = stack_of(&stage, 1);

    let mut done = stage.next(stack);

    assert!(matches!(
        done.try_outcome(),
        Some(Err(NavigationError::NoAdjacent { .. }))
    ));
    assert_eq!(done.try_outcome(), Some(Err(NavigationError::Interrupted)));
    assert_eq!(done.now_or_never(), Some(Err(NavigationError::Interrupted)));
}

// ============================================================================
// Listeners Calling Back Into The Stage
// ============================================================================

#[test]
fn test_preflight_listener_can_query_stage() {
    let stage = Stage::new();
    let (stack, kids) = stack_of(&stage, 2);
    let seen = Rc::new(Cell::new(None));
    let query = {
        let stage = stage.clone();
        let seen = Rc::clone(&seen);
        listener(move |_: &mut Event| seen.set(stage.current_index(stack)))
    };
    stage.on(stack, "next", &query);

    let mut done = stage.next(stack);
    stage.finish_transitions();

    assert_eq!(seen.get(), Some(0));
    assert_eq!(done.try_outcome(), Some(Ok(kids[1])));
}

#[test]
fn test_preflight_listener_removing_the_target_rejects_step() {
    let stage = Stage::new();
    let (stack, kids) = stack_of(&stage, 2);
    let shrink = {
        let stage = stage.clone();
        let next = kids[1];
        listener(move |_: &mut Event| {
            stage.remove(stack, next);
        })
    };
    stage.on(stack, "next", &shrink);

    let mut done = stage.next(stack);

    assert!(matches!(
        done.try_outcome(),
        Some(Err(NavigationError::NoAdjacent { .. }))
    ));
    assert_eq!(stage.current_index(stack), Some(0));
    assert_eq!(stage.children(stack), vec![kids[0]]);
}

#[test]
fn test_afterslide_listener_chains_next_step() {
    let stage = Stage::new();
    let (stack, kids) = stack_of(&stage, 3);
    let log: Log = Rc::default();
    stage.on(stack, "afterslide", &recorder(&log));
    let chain = {
        let stage = stage.clone();
        listener(move |_: &mut Event| {
            if stage.has_next(stack) {
                let _ = stage.next(stack);
            }
        })
    };
    stage.on(stack, "afterslide", &chain);

    let mut done = stage.next(stack);
    stage.finish_transitions();
    assert_eq!(done.try_outcome(), Some(Ok(kids[1])));
    assert_eq!(stage.current_index(stack), Some(2));
    assert_eq!(stage.slides_in_flight(), 1);

    stage.finish_transitions();
    assert_eq!(of_kind(&log, "afterslide"), vec![stack, stack]);
    assert_eq!(stage.slides_in_flight(), 0);
    assert_eq!(stage.pane(kids[2]).transform, Translate::ZERO);
}

#[test]
fn test_after_events_see_finished_transforms() {
    let stage = Stage::new();
    let (stack, kids) = stack_of(&stage, 2);
    let seen = Rc::new(Cell::new(None));
    let query = {
        let stage = stage.clone();
        let seen = Rc::clone(&seen);
        listener(move |event: &mut Event| {
            seen.set(Some(stage.transform(event.target(), Instant::now())))
        })
    };
    stage.on(kids[1], "afterslidein", &query);

    let _ = stage.next(stack);
    stage.tick(Instant::now() + Duration::from_secs(1));

    assert_eq!(seen.get(), Some(Translate::ZERO));
}
