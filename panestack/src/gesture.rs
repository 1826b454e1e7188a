//! Swipe recognition for one controller.
//!
//! [`GestureTracker`] turns the pointer samples of a single drag into
//! [`Swipe`] outcomes. It keeps state only while a drag is in progress; the
//! owning stage applies the visual feedback and fires the events.
//!
//! The direction lock is decided on the first move that leaves the noise
//! floor: the drag is captured when its displacement along the controller's
//! axis dominates the displacement across it. A drag that is not captured is
//! ignored until the pointer lifts.

use panedom::{Orientation, Point, PointerSample, TouchPhase};

use crate::config::{Overflow, StackConfig};
use crate::controller::Direction;

/// Displacement (pixels) below which a move does not decide capture.
const NOISE_FLOOR: f64 = 0.5;

/// Whether the tracker has claimed the current drag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Capture {
    #[default]
    Undecided,
    Yes,
    No,
}

/// Swipe settings taken from a controller's configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipePolicy {
    pub orientation: Orientation,
    pub overflow: Overflow,
    pub threshold: f64,
    pub spring_constant: f64,
}

impl From<&StackConfig> for SwipePolicy {
    fn from(config: &StackConfig) -> Self {
        Self {
            orientation: config.orientation,
            overflow: config.overflow,
            threshold: config.threshold,
            spring_constant: config.spring_constant,
        }
    }
}

/// Which neighbours the controller currently has.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Edges {
    pub has_previous: bool,
    pub has_next: bool,
}

/// Outcome of a pointer sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Swipe {
    /// The drag locked onto the controller's axis.
    Start { origin: Point },
    /// The captured drag moved. `distance` already has the overflow policy
    /// applied.
    Move { distance: f64 },
    /// The drag passed the threshold toward an existing neighbour.
    Commit { direction: Direction, distance: f64 },
    /// The drag ended without navigating. `restore` is set when panes were
    /// being dragged and have to snap back.
    Cancel { restore: bool },
    /// The drag overflowed an edge under [`Overflow::Propagate`]; ancestors
    /// may claim it. Panes have to snap back.
    Release,
}

#[derive(Debug, Clone)]
struct Track {
    origin: Point,
    capture: Capture,
}

/// Per-drag swipe state machine.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    track: Option<Track>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.track.is_some()
    }

    pub fn capture(&self) -> Capture {
        self.track
            .as_ref()
            .map_or(Capture::Undecided, |track| track.capture)
    }

    pub fn is_captured(&self) -> bool {
        self.capture() == Capture::Yes
    }

    /// Drop any drag in progress. Returns true if it had been captured.
    pub fn reset(&mut self) -> bool {
        self.track
            .take()
            .is_some_and(|track| track.capture == Capture::Yes)
    }

    /// Feed one pointer sample.
    pub fn process(
        &mut self,
        sample: &PointerSample,
        policy: &SwipePolicy,
        edges: Edges,
    ) -> Vec<Swipe> {
        match sample.phase {
            TouchPhase::Start => self.on_start(sample),
            TouchPhase::Move => self.on_move(sample.point, policy, edges),
            TouchPhase::End => self.on_end(sample.point, policy, edges),
            TouchPhase::Cancel => self.cancel(),
        }
    }

    fn cancel(&mut self) -> Vec<Swipe> {
        if self.reset() {
            vec![Swipe::Cancel { restore: true }]
        } else {
            Vec::new()
        }
    }

    fn on_start(&mut self, sample: &PointerSample) -> Vec<Swipe> {
        let out = self.cancel();
        if !sample.multi_touch {
            self.track = Some(Track {
                origin: sample.point,
                capture: Capture::Undecided,
            });
        }
        out
    }

    fn on_move(&mut self, point: Point, policy: &SwipePolicy, edges: Edges) -> Vec<Swipe> {
        let Some(track) = self.track.as_mut() else {
            return Vec::new();
        };
        let dx = point.x - track.origin.x;
        let dy = point.y - track.origin.y;
        let mut out = Vec::with_capacity(2);

        if track.capture == Capture::Undecided {
            let along = policy.orientation.along(dx, dy).abs();
            let across = policy.orientation.across(dx, dy).abs();
            if along.max(across) <= NOISE_FLOOR {
                return out;
            }
            if along > across {
                track.capture = Capture::Yes;
                log::debug!("swipe captured at ({}, {})", track.origin.x, track.origin.y);
                out.push(Swipe::Start {
                    origin: track.origin,
                });
            } else {
                track.capture = Capture::No;
                log::debug!("swipe rejected: drag runs across the axis");
                out.push(Swipe::Cancel { restore: false });
                return out;
            }
        }

        if track.capture != Capture::Yes {
            return out;
        }

        let mut distance = policy.orientation.along(dx, dy);
        let overflowing =
            (distance > 0.0 && !edges.has_previous) || (distance < 0.0 && !edges.has_next);
        if overflowing {
            match policy.overflow {
                Overflow::Propagate => {
                    track.capture = Capture::No;
                    log::debug!("swipe released to ancestors at edge");
                    out.push(Swipe::Release);
                    return out;
                }
                Overflow::Spring => {
                    distance /= distance.abs().sqrt() * policy.spring_constant;
                }
                Overflow::None => distance = 0.0,
            }
        }
        log::trace!("swipe move: {distance}");
        out.push(Swipe::Move { distance });
        out
    }

    fn on_end(&mut self, point: Point, policy: &SwipePolicy, edges: Edges) -> Vec<Swipe> {
        let Some(track) = self.track.take() else {
            return Vec::new();
        };
        if track.capture != Capture::Yes {
            return Vec::new();
        }
        let distance = policy
            .orientation
            .along(point.x - track.origin.x, point.y - track.origin.y);
        if distance.abs() > policy.threshold {
            if distance < 0.0 && edges.has_next {
                return vec![Swipe::Commit {
                    direction: Direction::Next,
                    distance,
                }];
            }
            if distance > 0.0 && edges.has_previous {
                return vec![Swipe::Commit {
                    direction: Direction::Previous,
                    distance,
                }];
            }
        }
        vec![Swipe::Cancel { restore: true }]
    }
}
