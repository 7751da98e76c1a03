use crate::core::models::DragItem;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Client-space bounding box of the element a gesture started on.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Where the drag overlay should be drawn: the source box shifted by how
/// far the pointer travelled since the press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayFrame {
    pub rect: Rect,
    pub dx: f64,
    pub dy: f64,
}

impl OverlayFrame {
    pub fn style(&self) -> String {
        format!(
            "position: fixed; left: {}px; top: {}px; width: {}px; height: {}px; \
             transform: translate3d({}px, {}px, 0); pointer-events: none; z-index: 1000;",
            self.rect.left, self.rect.top, self.rect.width, self.rect.height, self.dx, self.dy
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    Start { active: DragItem },
    Over { active: DragItem, over: Option<DragItem> },
    End { active: DragItem, over: Option<DragItem> },
    Cancel { active: DragItem },
}

/// Turns a press into a drag once the pointer has moved far enough, so a
/// plain click never starts a gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSensor {
    activation_distance: f64,
}

impl PointerSensor {
    pub fn new(activation_distance: f64) -> Self {
        Self { activation_distance }
    }

    pub fn should_activate(&self, origin: Point, current: Point) -> bool {
        origin.distance_to(current) > self.activation_distance
    }
}

impl Default for PointerSensor {
    fn default() -> Self {
        Self::new(3.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Idle,
    Pressed {
        item: DragItem,
        origin: Point,
        rect: Option<Rect>,
    },
    Dragging {
        item: DragItem,
        origin: Point,
        rect: Option<Rect>,
        current: Point,
        over: Option<DragItem>,
    },
}

/// One pointer gesture from press to release.
///
/// Fed raw pointer positions plus whatever droppable sits under the
/// pointer, it produces the start/over/end stream the board consumes.
/// `Over` is only emitted when the droppable under the pointer changes.
#[derive(Debug, Clone, PartialEq)]
pub struct DragGesture {
    sensor: PointerSensor,
    phase: Phase,
    // Set when a release finished a drag, until the next press
    click_suppressed: bool,
}

impl DragGesture {
    pub fn new(sensor: PointerSensor) -> Self {
        Self {
            sensor,
            phase: Phase::Idle,
            click_suppressed: false,
        }
    }

    /// Arms the gesture. Ignored while a drag is already running.
    pub fn press(&mut self, item: DragItem, at: Point, rect: Option<Rect>) -> bool {
        if matches!(self.phase, Phase::Dragging { .. }) {
            return false;
        }
        self.click_suppressed = false;
        self.phase = Phase::Pressed {
            item,
            origin: at,
            rect,
        };
        true
    }

    pub fn pointer_move(&mut self, at: Point, hit: Option<DragItem>) -> Vec<DragEvent> {
        let mut events = Vec::new();
        match &mut self.phase {
            Phase::Idle => {}
            Phase::Pressed { item, origin, rect } => {
                let (active, origin, rect) = (*item, *origin, *rect);
                if !self.sensor.should_activate(origin, at) {
                    return events;
                }
                events.push(DragEvent::Start { active });
                if hit.is_some() {
                    events.push(DragEvent::Over { active, over: hit });
                }
                self.phase = Phase::Dragging {
                    item: active,
                    origin,
                    rect,
                    current: at,
                    over: hit,
                };
            }
            Phase::Dragging { item, current, over, .. } => {
                *current = at;
                if *over != hit {
                    *over = hit;
                    events.push(DragEvent::Over { active: *item, over: hit });
                }
            }
        }
        events
    }

    /// Pointer released. Emits `End` only if the press had become a drag.
    pub fn release(&mut self) -> Option<DragEvent> {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Dragging { item, over, .. } => {
                self.click_suppressed = true;
                Some(DragEvent::End { active: item, over })
            }
            _ => None,
        }
    }

    pub fn cancel(&mut self) -> Option<DragEvent> {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Dragging { item, .. } => Some(DragEvent::Cancel { active: item }),
            _ => None,
        }
    }

    /// True once after a drag was released, so the click the browser fires
    /// on release does not toggle edit mode.
    pub fn take_click_suppression(&mut self) -> bool {
        std::mem::take(&mut self.click_suppressed)
    }

    pub fn is_tracking(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    pub fn active(&self) -> Option<DragItem> {
        match &self.phase {
            Phase::Dragging { item, .. } => Some(*item),
            _ => None,
        }
    }

    pub fn overlay_frame(&self) -> Option<OverlayFrame> {
        match &self.phase {
            Phase::Dragging {
                origin,
                rect: Some(rect),
                current,
                ..
            } => Some(OverlayFrame {
                rect: *rect,
                dx: current.x - origin.x,
                dy: current.y - origin.y,
            }),
            _ => None,
        }
    }
}

impl Default for DragGesture {
    fn default() -> Self {
        Self::new(PointerSensor::default())
    }
}
