//! Drives a small pane hierarchy with synthetic terminal mouse drags and
//! programmatic navigation, printing where every pane ends up.
//!
//! Run with `cargo run -p panestack --example swipe`; debug output goes to
//! `panestack-swipe.log`.

use std::fs::File;
use std::time::{Duration, Instant};

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use panestack::panedom::{listener, Event, NodeId, PointerSample, Tree};
use panestack::{Overflow, RenderHooks, StackConfig, Stage};
use simplelog::{Config, LevelFilter, WriteLogger};

const FRAME: Duration = Duration::from_millis(16);

fn mouse(kind: MouseEventKind, column: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row: 10,
        modifiers: KeyModifiers::NONE,
    }
}

/// Tick the stage at frame rate until nothing is animating.
fn settle(stage: &Stage) {
    let mut now = Instant::now();
    while stage.tick(now) {
        now += FRAME;
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let log_file = File::create("panestack-swipe.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let stage = Stage::new();
    let pages = stage.create_stack(
        StackConfig::default()
            .with_swipe(true)
            .with_overflow(Overflow::Propagate)
            // Terminal cells, not pixels.
            .with_threshold(20.0),
    );
    stage.set_extent(pages, 80.0, 24.0);
    for _ in 0..3 {
        let page = stage.create_pane();
        stage.set_extent(page, 80.0, 24.0);
        stage.append(pages, page);
    }

    stage.on(
        pages,
        "afterslide swipecancel",
        &listener(|event: &mut Event| println!("{} on {}", event.kind(), event.target())),
    );

    // Drag left across half the terminal: commits a step forward.
    let first_page = stage.children(pages)[0];
    let drag = [
        mouse(MouseEventKind::Down(MouseButton::Left), 60),
        mouse(MouseEventKind::Drag(MouseButton::Left), 50),
        mouse(MouseEventKind::Drag(MouseButton::Left), 30),
        mouse(MouseEventKind::Up(MouseButton::Left), 20),
    ];
    let mut pending = None;
    for event in &drag {
        if let Some(sample) = PointerSample::from_mouse(event) {
            pending = stage.pointer(first_page, sample).or(pending);
        }
    }
    settle(&stage);
    if let Some(mut done) = pending {
        println!("swipe finished: {:?}", done.try_outcome());
    }

    // Programmatic navigation, driven by the same clock.
    let ticker = {
        let stage = stage.clone();
        async move {
            loop {
                tokio::time::sleep(FRAME).await;
                stage.tick(Instant::now());
            }
        }
    };
    tokio::select! {
        result = stage.last(pages) => println!("last: {result:?}"),
        _ = ticker => {}
    }

    let mut hooks = RenderHooks::new(|node: NodeId, tree: &Tree| {
        println!("  {} {}", tree.key(node), tree.pane(node).transform);
    });
    println!("panes:");
    stage.render(pages, &mut hooks);
}
