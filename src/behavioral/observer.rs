/*!

# Observer (Publish/Subscribe)

A chat group publishes messages; users subscribe to the groups they care about and are
notified of every message. The group knows nothing about its subscribers beyond the
[`Subscriber`] interface, and one user can sit in any number of groups.

## Who Owns a Subscriber?

This is the part the textbook glosses over. In C++ every group holds a raw pointer to the
same user, and the programmer promises to keep the user alive. In Rust, shared ownership is
spelled `Rc` (or `Arc` across threads), and since notification mutates the user's inbox, the
inbox sits behind a `RefCell`. `notify` can then take `&self`, which keeps the trait usable
through a shared `Rc<dyn Subscriber>`.

The alternative, which scales better, is to not share subscribers at all: give each one a
channel and have the group send into it. For a single-threaded demo `Rc` is the honest choice.

*/

use std::{cell::RefCell, rc::Rc};

use log::debug;

use crate::hashing::{HashMap, HashSet};

pub trait Subscriber {
    fn name(&self) -> &str;

    fn notify(&self, group: &str, message: &str);
}

pub trait Publisher {
    fn subscribe(&mut self, subscriber: Rc<dyn Subscriber>);

    /// Removes every subscriber with the given name.
    fn unsubscribe(&mut self, name: &str);

    /// Returns the number of subscribers notified.
    fn publish(&self, message: &str) -> usize;
}

/// A user with an inbox.
#[derive(Debug)]
pub struct ChatUser {
    name: String,
    inbox: RefCell<Vec<String>>,
}

impl ChatUser {
    pub fn new(name: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            inbox: RefCell::new(Vec::new()),
        })
    }

    /// Everything received so far, oldest first.
    pub fn inbox(&self) -> Vec<String> {
        self.inbox.borrow().clone()
    }
}

impl Subscriber for ChatUser {
    fn name(&self) -> &str {
        &self.name
    }

    fn notify(&self, group: &str, message: &str) {
        self.inbox.borrow_mut().push(format!(
            "{} received a new message from {group}: {message}",
            self.name
        ));
    }
}

pub struct ChatGroup {
    name: String,
    subscribers: Vec<Rc<dyn Subscriber>>,
}

impl ChatGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subscribers: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subscriber_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.subscribers.iter().map(|s| s.name())
    }
}

impl Publisher for ChatGroup {
    fn subscribe(&mut self, subscriber: Rc<dyn Subscriber>) {
        self.subscribers.push(subscriber);
    }

    fn unsubscribe(&mut self, name: &str) {
        self.subscribers.retain(|s| s.name() != name);
    }

    fn publish(&self, message: &str) -> usize {
        debug!(
            "{}: publishing to {} subscribers",
            self.name,
            self.subscribers.len()
        );
        for subscriber in &self.subscribers {
            subscriber.notify(&self.name, message);
        }
        self.subscribers.len()
    }
}

/// All the groups, by name.
#[derive(Default)]
pub struct ChatNetwork {
    groups: HashMap<String, ChatGroup>,
}

impl ChatNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// The group called `name`, created empty if it doesn't exist yet.
    pub fn group_mut(&mut self, name: &str) -> &mut ChatGroup {
        self.groups
            .entry(name.to_string())
            .or_insert_with(|| ChatGroup::new(name))
    }

    pub fn group(&self, name: &str) -> Option<&ChatGroup> {
        self.groups.get(name)
    }

    pub fn join(&mut self, group: &str, user: Rc<dyn Subscriber>) {
        self.group_mut(group).subscribe(user);
    }

    /// Everyone subscribed to at least one group, counted once.
    pub fn members(&self) -> HashSet<&str> {
        self.groups
            .values()
            .flat_map(|group| group.subscriber_names())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
