/*!

# Memento

We want undo. The canvas has to save its state somewhere outside itself, but nobody else
should be able to read or tamper with the saved state. Only the canvas that made it should
be able to restore from it.

C++ does this with a `friend` declaration: the memento's fields are private, and the canvas
is declared a friend. Rust's privacy is per *module*, not per type, so the equivalent is
simpler than it sounds. [`CanvasMemento`]'s field is private to the `behavioral` module tree
(`pub(in crate::behavioral)`), so the two canvases in this module tree (this one and the
replay canvas in [`instant_replay`](super::instant_replay)) can read it, and to everyone else
a memento is an opaque token. It can be stored, cloned, and handed back, but never inspected.

*/

use log::trace;
use thiserror::Error;

use crate::hashing::one_shot_128;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HistoryError {
    #[error("there is nothing to undo")]
    NothingToUndo,
}

/// A frozen copy of a canvas's shapes. Opaque outside the `behavioral` module tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CanvasMemento {
    pub(in crate::behavioral) shapes: Vec<String>,
}

impl CanvasMemento {
    /// A digest of the saved state. Equal states have equal fingerprints, so callers can
    /// tell snapshots apart without being able to read them.
    pub fn fingerprint(&self) -> u128 {
        one_shot_128(&self.shapes)
    }
}

/// A list of shape names with undo.
#[derive(Debug, Default)]
pub struct Canvas {
    shapes: Vec<String>,
    undo_stack: Vec<CanvasMemento>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_shape(&mut self, shape: impl Into<String>) {
        self.save();
        self.shapes.push(shape.into());
    }

    pub fn clear_all(&mut self) {
        self.save();
        self.shapes.clear();
    }

    pub fn shapes(&self) -> &[String] {
        &self.shapes
    }

    /// Restores the state from before the most recent change.
    pub fn undo(&mut self) -> Result<(), HistoryError> {
        let previous = self.undo_stack.pop().ok_or(HistoryError::NothingToUndo)?;
        trace!("undo: {} -> {} shapes", self.shapes.len(), previous.shapes.len());
        self.restore(previous);
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// A memento of the current state, for callers that keep their own history.
    pub fn snapshot(&self) -> CanvasMemento {
        CanvasMemento {
            shapes: self.shapes.clone(),
        }
    }

    /// Replaces the current shapes with those in `memento`. The undo stack is left alone.
    pub fn restore(&mut self, memento: CanvasMemento) {
        self.shapes = memento.shapes;
    }

    fn save(&mut self) {
        let memento = self.snapshot();
        self.undo_stack.push(memento);
    }
}

/// Renders shapes as a flat list, each followed by `", "`.
pub fn render(shapes: &[String]) -> String {
    shapes.iter().map(|shape| format!("{shape}, ")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw_four(canvas: &mut Canvas) {
        for shape in ["rhombus", "triangle", "square", "circle"] {
            canvas.add_shape(shape);
        }
    }

    #[test]
    fn undo_drops_the_last_shape() {
        let mut canvas = Canvas::new();
        draw_four(&mut canvas);
        assert_eq!(render(canvas.shapes()), "rhombus, triangle, square, circle, ");

        canvas.undo().unwrap();
        assert_eq!(render(canvas.shapes()), "rhombus, triangle, square, ");

        draw_four(&mut canvas);
        canvas.undo().unwrap();
        assert_eq!(
            render(canvas.shapes()),
            "rhombus, triangle, square, rhombus, triangle, square, "
        );
    }

    #[test]
    fn undo_walks_all_the_way_back() {
        let mut canvas = Canvas::new();
        draw_four(&mut canvas);
        for _ in 0..4 {
            canvas.undo().unwrap();
        }
        assert!(canvas.shapes().is_empty());
        assert!(!canvas.can_undo());
        assert_eq!(canvas.undo(), Err(HistoryError::NothingToUndo));
    }

    #[test]
    fn clear_all_can_be_undone() {
        let mut canvas = Canvas::new();
        draw_four(&mut canvas);
        canvas.clear_all();
        assert!(canvas.shapes().is_empty());
        canvas.undo().unwrap();
        assert_eq!(canvas.shapes().len(), 4);
    }

    #[test]
    fn snapshots_restore_independently_of_the_undo_stack() {
        let mut canvas = Canvas::new();
        canvas.add_shape("circle");
        let saved = canvas.snapshot();
        canvas.add_shape("square");
        canvas.restore(saved.clone());
        assert_eq!(canvas.shapes(), ["circle"]);
        assert_eq!(saved, canvas.snapshot());
        assert_eq!(saved.fingerprint(), canvas.snapshot().fingerprint());
        canvas.add_shape("square");
        assert_ne!(saved.fingerprint(), canvas.snapshot().fingerprint());
    }
}
