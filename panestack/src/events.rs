//! Framework event types.

/// Cancelable pre-flight before stepping to the next child.
pub const NEXT: &str = "next";
/// Cancelable pre-flight before stepping to the previous child.
pub const PREVIOUS: &str = "previous";

/// On the controller, before a slide starts. Detail: `Slide { next }`.
pub const BEFORE_SLIDE: &str = "beforeslide";
/// On the controller, once the incoming pane finished sliding in.
pub const AFTER_SLIDE: &str = "afterslide";

pub const BEFORE_SLIDE_OUT: &str = "beforeslideout";
pub const AFTER_SLIDE_OUT: &str = "afterslideout";
pub const BEFORE_SLIDE_IN: &str = "beforeslidein";
pub const AFTER_SLIDE_IN: &str = "afterslidein";

/// A drag locked onto the controller's axis. Detail: `Point(origin)`.
pub const SWIPE_START: &str = "swipestart";
/// Detail: `Distance(d)`.
pub const SWIPE_MOVE: &str = "swipemove";
/// A swipe committed; navigation follows. Detail: `Distance(d)`.
pub const SWIPE_END: &str = "swipeend";
pub const SWIPE_CANCEL: &str = "swipecancel";

/// Cancelable; rendering is skipped when prevented.
pub const BEFORE_RENDER: &str = "beforerender";
pub const AFTER_RENDER: &str = "afterrender";

/// The pane entered the visual tree. Trickles only.
pub const INSERT: &str = "insert";
/// The pane left the visual tree. Trickles only.
pub const REMOVE: &str = "remove";
