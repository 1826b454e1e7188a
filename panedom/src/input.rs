/// A point in host pixel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Phase of a pointer sample within one drag interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// One pointer sample fed to gesture tracking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub phase: TouchPhase,
    pub point: Point,
    /// More than one contact is down.
    pub multi_touch: bool,
}

impl PointerSample {
    pub fn start(x: f64, y: f64) -> Self {
        Self::new(TouchPhase::Start, x, y)
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self::new(TouchPhase::Move, x, y)
    }

    pub fn end(x: f64, y: f64) -> Self {
        Self::new(TouchPhase::End, x, y)
    }

    pub fn cancel() -> Self {
        Self::new(TouchPhase::Cancel, 0.0, 0.0)
    }

    fn new(phase: TouchPhase, x: f64, y: f64) -> Self {
        Self {
            phase,
            point: Point::new(x, y),
            multi_touch: false,
        }
    }

    /// Mark the sample as carrying more than one contact.
    pub fn with_multi_touch(mut self) -> Self {
        self.multi_touch = true;
        self
    }
}

// Conversion from crossterm mouse events. The left button drives the drag;
// pressing another button while dragging counts as a second contact.
impl PointerSample {
    pub fn from_mouse(event: &crossterm::event::MouseEvent) -> Option<Self> {
        use crossterm::event::{MouseButton as CtBtn, MouseEventKind};
        let x = f64::from(event.column);
        let y = f64::from(event.row);
        match event.kind {
            MouseEventKind::Down(CtBtn::Left) => Some(Self::start(x, y)),
            MouseEventKind::Down(_) => Some(Self::start(x, y).with_multi_touch()),
            MouseEventKind::Drag(CtBtn::Left) => Some(Self::moved(x, y)),
            MouseEventKind::Up(CtBtn::Left) => Some(Self::end(x, y)),
            _ => None,
        }
    }
}
