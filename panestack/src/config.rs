//! Per-controller configuration.

use std::time::Duration;

use panedom::{Easing, Orientation, TransitionConfig};
use serde::{Deserialize, Deserializer};

/// What a swipe does when dragged past the first or last child.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    /// Resist the drag with a spring-like damping.
    #[default]
    Spring,
    /// Release the gesture so an ancestor controller can claim it.
    Propagate,
    /// Keep the pane pinned at the edge.
    None,
}

/// Configuration for a navigation controller.
///
/// Every field is optional when deserialized; missing fields take the
/// defaults below.
///
/// # Example
///
/// ```
/// use panestack::{Overflow, StackConfig};
///
/// let config = StackConfig::default()
///     .with_swipe(true)
///     .with_overflow(Overflow::Propagate)
///     .with_threshold(60.0);
/// assert_eq!(config.translate_out, 25.0);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    /// Slide axis.
    ///
    /// Default: horizontal
    pub orientation: Orientation,

    /// Whether pointer drags navigate between children.
    ///
    /// Default: false
    pub swipe: bool,

    /// Behavior when swiping past the first or last child.
    ///
    /// Default: spring
    pub overflow: Overflow,

    /// Percentage a pane is pushed aside when the next one slides over it.
    /// At 100 the next pane pushes the current one out entirely.
    ///
    /// Default: 25
    #[serde(alias = "translateOut")]
    pub translate_out: f64,

    /// Pixels a swipe has to cover before it commits.
    ///
    /// Default: 80
    pub threshold: f64,

    /// Strength of the spring that resists overflowing swipes.
    ///
    /// Default: 0.25
    #[serde(alias = "springConstant")]
    pub spring_constant: f64,

    /// Length of a slide.
    ///
    /// Default: 300ms
    #[serde(rename = "duration_ms", deserialize_with = "duration_from_millis")]
    pub duration: Duration,

    /// Default: ease-out
    pub easing: Easing,
}

impl Default for StackConfig {
    fn default() -> Self {
        let transition = TransitionConfig::default();
        Self {
            orientation: Orientation::Horizontal,
            swipe: false,
            overflow: Overflow::Spring,
            translate_out: 25.0,
            threshold: 80.0,
            spring_constant: 0.25,
            duration: transition.duration,
            easing: transition.easing,
        }
    }
}

impl StackConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_swipe(mut self, swipe: bool) -> Self {
        self.swipe = swipe;
        self
    }

    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn with_translate_out(mut self, percent: f64) -> Self {
        self.translate_out = percent;
        self
    }

    pub fn with_threshold(mut self, pixels: f64) -> Self {
        self.threshold = pixels;
        self
    }

    pub fn with_spring_constant(mut self, constant: f64) -> Self {
        self.spring_constant = constant;
        self
    }

    pub fn with_transition(mut self, transition: TransitionConfig) -> Self {
        self.duration = transition.duration;
        self.easing = transition.easing;
        self
    }

    /// The slide transition.
    pub fn transition(&self) -> TransitionConfig {
        TransitionConfig::new(self.duration, self.easing)
    }
}

fn duration_from_millis<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    u64::deserialize(deserializer).map(Duration::from_millis)
}
