/*!

# Chain of Responsibility

A request is passed along a chain of handlers. Each handler either deals with it, and the chain
stops there, or hands it to the next handler. Here the request is a chat message on its way to a
group: first check that it isn't empty, then that it's long enough, then post it.

## From Linked List to Slice

The textbook builds the chain as a linked list: each handler owns a pointer to the next one,
and a base class's default `handle` forwards to it. In Rust that means `Option<Box<dyn Handler>>`
fields and a lot of ceremony for a list that is built once and never changes.

Instead, the [`Chain`] owns its handlers in a `Vec`, and each handler receives a [`Next`]: a
continuation that runs the rest of the chain. A handler that wants to pass the request along
calls `next.run(...)`; one that wants to stop simply doesn't. This is the middleware shape
you'll find in `tower` and most Rust web frameworks. A handler can also do work *after* the
rest of the chain has run, which the linked-list version makes awkward.

If every handler passes the request along, the chain answers [`Reply::Success`].

*/

use log::debug;
use thiserror::Error;

use crate::behavioral::observer::{ChatGroup, Publisher};

/// Why a message was turned away. The messages are meant for the sender.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("Please enter a value")]
    Empty,
    #[error("Please enter a value longer than {min_length}")]
    TooShort { min_length: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Every handler passed the message along and none of them posted it.
    Success,
    MessageSent { recipients: usize },
}

impl std::fmt::Display for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reply::Success => f.write_str("Success!"),
            Reply::MessageSent { .. } => f.write_str("Message sent!"),
        }
    }
}

pub type HandlerResult = Result<Reply, Rejection>;

pub trait Handler {
    fn handle(&self, group: &ChatGroup, message: &str, next: Next<'_>) -> HandlerResult;
}

/// The rest of the chain after the current handler.
#[derive(Copy, Clone)]
pub struct Next<'c> {
    rest: &'c [Box<dyn Handler>],
}

impl Next<'_> {
    pub fn run(self, group: &ChatGroup, message: &str) -> HandlerResult {
        match self.rest.split_first() {
            Some((handler, rest)) => handler.handle(group, message, Next { rest }),
            None => Ok(Reply::Success),
        }
    }
}

#[derive(Default)]
pub struct Chain {
    handlers: Vec<Box<dyn Handler>>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `handler` to the end of the chain.
    pub fn then(mut self, handler: impl Handler + 'static) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    pub fn handle(&self, group: &ChatGroup, message: &str) -> HandlerResult {
        let result = Next {
            rest: &self.handlers,
        }
        .run(group, message);
        if let Err(rejection) = &result {
            debug!("{}: rejected message: {rejection}", group.name());
        }
        result
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Rejects empty messages.
#[derive(Copy, Clone, Debug, Default)]
pub struct NotEmpty;

impl Handler for NotEmpty {
    fn handle(&self, group: &ChatGroup, message: &str, next: Next<'_>) -> HandlerResult {
        debug!("Checking if empty...");
        if message.is_empty() {
            return Err(Rejection::Empty);
        }
        next.run(group, message)
    }
}

/// Rejects messages shorter than `min_length` characters.
#[derive(Copy, Clone, Debug)]
pub struct MinLength(pub usize);

impl Handler for MinLength {
    fn handle(&self, group: &ChatGroup, message: &str, next: Next<'_>) -> HandlerResult {
        debug!("Checking string length...");
        if message.chars().count() < self.0 {
            return Err(Rejection::TooShort { min_length: self.0 });
        }
        next.run(group, message)
    }
}

/// Posts the message to the group. Ends the chain.
#[derive(Copy, Clone, Debug, Default)]
pub struct PostMessage;

impl Handler for PostMessage {
    fn handle(&self, group: &ChatGroup, message: &str, _next: Next<'_>) -> HandlerResult {
        let recipients = group.publish(message);
        Ok(Reply::MessageSent { recipients })
    }
}

/// The validation chain used by the chat demo.
pub fn send_message_chain() -> Chain {
    Chain::new()
        .then(NotEmpty)
        .then(MinLength(3))
        .then(PostMessage)
}
