/*!

# Command

Turn each edit into a value. A command knows how to apply itself to a drawing and how to take
itself back, so undo becomes "pop the last command and ask it to undo", and redo is the same
thing in the other direction. Compare with the [`memento`](super::memento) canvas, which saves
a full copy of the state before every change: a command saves only what it needs to reverse
itself. [`AddShape`] needs nothing at all, and [`ClearAll`] keeps the shapes it removed.

Commands take `&mut Drawing` rather than holding a reference to it. A command that borrowed the
drawing for its whole life would make the history and the drawing impossible to use together.

*/

use log::trace;

use crate::behavioral::memento::render;

/// The receiver: the thing commands act on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Drawing {
    shapes: Vec<String>,
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shapes(&self) -> &[String] {
        &self.shapes
    }
}

impl std::fmt::Display for Drawing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render(&self.shapes))
    }
}

pub trait Command {
    fn name(&self) -> &str;

    fn execute(&mut self, drawing: &mut Drawing);

    /// Reverses the most recent `execute`. Only called after `execute`.
    fn undo(&mut self, drawing: &mut Drawing);
}

#[derive(Clone, Debug)]
pub struct AddShape {
    shape: String,
}

impl AddShape {
    pub fn new(shape: impl Into<String>) -> Self {
        Self {
            shape: shape.into(),
        }
    }
}

impl Command for AddShape {
    fn name(&self) -> &str {
        "add shape"
    }

    fn execute(&mut self, drawing: &mut Drawing) {
        drawing.shapes.push(self.shape.clone());
    }

    fn undo(&mut self, drawing: &mut Drawing) {
        drawing.shapes.pop();
    }
}

#[derive(Clone, Debug, Default)]
pub struct ClearAll {
    cleared: Vec<String>,
}

impl ClearAll {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Command for ClearAll {
    fn name(&self) -> &str {
        "clear all"
    }

    fn execute(&mut self, drawing: &mut Drawing) {
        self.cleared = std::mem::take(&mut drawing.shapes);
    }

    fn undo(&mut self, drawing: &mut Drawing) {
        drawing.shapes = std::mem::take(&mut self.cleared);
    }
}

/// Owns a drawing and the commands applied to it.
#[derive(Default)]
pub struct CommandHistory {
    drawing: Drawing,
    done: Vec<Box<dyn Command>>,
    undone: Vec<Box<dyn Command>>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    /// Executes `command` and records it. Anything previously undone can no longer be redone.
    pub fn run(&mut self, mut command: impl Command + 'static) {
        trace!("run: {}", command.name());
        command.execute(&mut self.drawing);
        self.done.push(Box::new(command));
        self.undone.clear();
    }

    /// Undoes the most recent command. Returns `false` if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(mut command) = self.done.pop() else {
            return false;
        };
        trace!("undo: {}", command.name());
        command.undo(&mut self.drawing);
        self.undone.push(command);
        true
    }

    /// Re-executes the most recently undone command.
    pub fn redo(&mut self) -> bool {
        let Some(mut command) = self.undone.pop() else {
            return false;
        };
        trace!("redo: {}", command.name());
        command.execute(&mut self.drawing);
        self.done.push(command);
        true
    }

    /// Names of the executed commands, oldest first.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.done.iter().map(|c| c.name())
    }
}
