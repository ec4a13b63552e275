/*!

# Instant Replay: Memento, Iterator, and Null Object Together

Flip the memento idea around. Instead of saving the state *before* each change so we can undo
it, save the state *after* each change. The history is now a film strip, and we can replay it
frame by frame. Undo still works: drop the last frame and show the one before it.

Three patterns meet here:

- **Memento**: each frame is a [`CanvasMemento`].
- **Iterator**: [`CanvasHistory::frames`] walks the strip front to back.
- **Null Object**: a canvas that doesn't want history gets a [`NullHistory`] rather than an
  `Option<History>` it has to check on every change.

The canvas is generic over `H: History`, so a canvas with no history is not merely cheap, it
compiles down to nothing: every `NullHistory` call is an empty inline function.

*/

use log::debug;

use crate::behavioral::memento::{CanvasMemento, render};

/// Somewhere to record canvas states.
pub trait History {
    /// Records the state after a change.
    fn add_state(&mut self, state: CanvasMemento);

    /// Forgets the latest state and returns the one before it, or `None` if nothing was
    /// recorded.
    fn undo(&mut self) -> Option<CanvasMemento>;
}

/// Keeps every recorded state, oldest first.
#[derive(Debug, Default)]
pub struct CanvasHistory {
    states: Vec<CanvasMemento>,
}

impl CanvasHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> std::slice::Iter<'_, CanvasMemento> {
        self.states.iter()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl History for CanvasHistory {
    fn add_state(&mut self, state: CanvasMemento) {
        self.states.push(state);
    }

    fn undo(&mut self) -> Option<CanvasMemento> {
        self.states.pop()?;
        // Before the first recorded change the canvas was empty.
        Some(self.states.last().cloned().unwrap_or_default())
    }
}

/// Records nothing, restores nothing.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullHistory;

impl History for NullHistory {
    fn add_state(&mut self, _state: CanvasMemento) {}

    fn undo(&mut self) -> Option<CanvasMemento> {
        None
    }
}

/// A canvas that reports every change to a [`History`].
#[derive(Debug, Default)]
pub struct RecordingCanvas<H: History> {
    shapes: Vec<String>,
    history: H,
}

impl<H: History> RecordingCanvas<H> {
    pub fn new(history: H) -> Self {
        Self {
            shapes: Vec::new(),
            history,
        }
    }

    pub fn add_shape(&mut self, shape: impl Into<String>) {
        self.shapes.push(shape.into());
        self.record();
    }

    pub fn clear_all(&mut self) {
        self.shapes.clear();
        self.record();
    }

    /// Returns whether anything was restored.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(previous) => {
                self.shapes = previous.shapes;
                true
            }
            None => {
                debug!("nothing to undo");
                false
            }
        }
    }

    pub fn shapes(&self) -> &[String] {
        &self.shapes
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn into_history(self) -> H {
        self.history
    }

    fn record(&mut self) {
        self.history.add_state(CanvasMemento {
            shapes: self.shapes.clone(),
        });
    }
}

/// Plays back a [`CanvasHistory`] one frame at a time.
pub struct ReplayCanvas<'h> {
    frames: std::slice::Iter<'h, CanvasMemento>,
    shapes: Vec<String>,
}

impl<'h> ReplayCanvas<'h> {
    pub fn new(history: &'h CanvasHistory) -> Self {
        Self {
            frames: history.frames(),
            shapes: Vec::new(),
        }
    }

    /// The shapes as of the last frame played.
    pub fn shapes(&self) -> &[String] {
        &self.shapes
    }
}

impl Iterator for ReplayCanvas<'_> {
    /// One rendered line per frame.
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let frame = self.frames.next()?;
        self.shapes.clone_from(&frame.shapes);
        Some(format!("The shapes are now: {}", render(&self.shapes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorded() -> RecordingCanvas<CanvasHistory> {
        let mut canvas = RecordingCanvas::new(CanvasHistory::new());
        for shape in ["rhombus", "triangle", "square", "circle"] {
            canvas.add_shape(shape);
        }
        canvas
    }

    #[test]
    fn replay_shows_every_frame_in_order() {
        let canvas = recorded();
        let replay: Vec<String> = ReplayCanvas::new(canvas.history()).collect();
        assert_eq!(
            replay,
            [
                "The shapes are now: rhombus, ",
                "The shapes are now: rhombus, triangle, ",
                "The shapes are now: rhombus, triangle, square, ",
                "The shapes are now: rhombus, triangle, square, circle, ",
            ]
        );
    }

    #[test]
    fn replay_canvas_ends_on_the_last_frame() {
        let canvas = recorded();
        let mut replay = ReplayCanvas::new(canvas.history());
        replay.by_ref().for_each(drop);
        assert_eq!(replay.shapes(), canvas.shapes());
    }

    #[test]
    fn undo_restores_the_previous_frame() {
        let mut canvas = recorded();
        assert!(canvas.undo());
        assert_eq!(canvas.shapes(), ["rhombus", "triangle", "square"]);
        assert_eq!(canvas.history().len(), 3);

        for _ in 0..3 {
            assert!(canvas.undo());
        }
        assert!(canvas.shapes().is_empty());
        assert!(!canvas.undo());
    }

    #[test]
    fn clearing_is_a_frame_too() {
        let mut canvas = recorded();
        canvas.clear_all();
        let history = canvas.into_history();
        assert_eq!(history.len(), 5);
        let last = ReplayCanvas::new(&history).last();
        assert_eq!(last.as_deref(), Some("The shapes are now: "));
    }

    #[test]
    fn null_history_records_nothing_and_undoes_nothing() {
        let mut canvas = RecordingCanvas::new(NullHistory);
        canvas.add_shape("circle");
        canvas.add_shape("square");
        assert!(!canvas.undo());
        assert_eq!(canvas.shapes(), ["circle", "square"]);
    }
}
