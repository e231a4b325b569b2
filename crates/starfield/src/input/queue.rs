/// Input events the engine understands.
/// Coordinates are logical viewport units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Mouse or pen moved to (x, y).
    PointerMove { x: f32, y: f32 },
    /// First touch point moved to (x, y).
    TouchMove { x: f32, y: f32 },
    /// Device tilt in degrees. Browsers report `null` for either angle when
    /// the sensor has no reading.
    Orientation { gamma: Option<f32>, beta: Option<f32> },
}

/// A queue of input events.
/// Host handlers push between frames; the engine drains at the start of each update.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
