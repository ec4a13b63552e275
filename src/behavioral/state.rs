/*!

# State

An object whose behavior depends on which stage of its life it is in. The textbook version
gives each stage its own class implementing a common `State` interface, and the object holds a
pointer to its current state, which knows which state comes next.

## Trait Objects With `self: Box<Self>`

The direct translation is a `Box<dyn State>`. The one Rust-specific wrinkle is the transition.
A state that hands back its successor should *consume* itself, otherwise nothing stops a caller
from holding on to a stale state after the transition. `fn next(self: Box<Self>)` says exactly
that, and it is still callable through a trait object.

## Or Just Use an Enum

When the set of states is closed, and it almost always is, an `enum` is shorter, has no
allocation, and the compiler checks that every state is handled. [`ShippingStatus`] is the
same lifecycle as the trait-object version. The trait-object version earns its keep only when
downstream code needs to add states you didn't anticipate.

*/

use log::{debug, warn};

pub trait State {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Consumes this state and returns its successor, if any.
    fn next(self: Box<Self>) -> Option<Box<dyn State>>;
}

#[derive(Debug)]
pub struct Purchased;

#[derive(Debug)]
pub struct InTransit;

#[derive(Debug)]
pub struct Delivered;

impl State for Purchased {
    fn name(&self) -> &'static str {
        "Purchased"
    }

    fn description(&self) -> &'static str {
        "Current state: Purchased - Will be shipping soon\n"
    }

    fn next(self: Box<Self>) -> Option<Box<dyn State>> {
        Some(Box::new(InTransit))
    }
}

impl State for InTransit {
    fn name(&self) -> &'static str {
        "InTransit"
    }

    fn description(&self) -> &'static str {
        "Current state: InTransit - Your item is on the way\n"
    }

    fn next(self: Box<Self>) -> Option<Box<dyn State>> {
        Some(Box::new(Delivered))
    }
}

impl State for Delivered {
    fn name(&self) -> &'static str {
        "Delivered"
    }

    fn description(&self) -> &'static str {
        "Current state: Delivered - Your item has arrived\n"
    }

    fn next(self: Box<Self>) -> Option<Box<dyn State>> {
        None
    }
}

/// A product order that moves through its states one step at a time.
pub struct Purchase {
    product: String,
    state: Option<Box<dyn State>>,
}

impl Purchase {
    /// A fresh purchase starts in [`Purchased`].
    pub fn new(product: impl Into<String>) -> Self {
        Self::with_state(product, Box::new(Purchased))
    }

    pub fn with_state(product: impl Into<String>, initial: Box<dyn State>) -> Self {
        Self {
            product: product.into(),
            state: Some(initial),
        }
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    /// `None` once the purchase has moved past its last state.
    pub fn description(&self) -> Option<&'static str> {
        self.state.as_ref().map(|state| state.description())
    }

    /// Moves to the next state. Returns `false`, and changes nothing, if there are no more
    /// states.
    pub fn advance(&mut self) -> bool {
        match self.state.take() {
            Some(state) => {
                let from = state.name();
                self.state = state.next();
                debug!(
                    "{}: {from} -> {}",
                    self.product,
                    self.state.as_ref().map_or("(done)", |s| s.name())
                );
                true
            }
            None => {
                warn!("{}: No more states!", self.product);
                false
            }
        }
    }

    pub fn is_done(&self) -> bool {
        self.state.is_none()
    }
}

/// The same lifecycle as [`Purchase`], as a plain enum.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ShippingStatus {
    #[default]
    Purchased,
    InTransit,
    Delivered,
}

impl ShippingStatus {
    pub fn description(self) -> &'static str {
        match self {
            ShippingStatus::Purchased => Purchased.description(),
            ShippingStatus::InTransit => InTransit.description(),
            ShippingStatus::Delivered => Delivered.description(),
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            ShippingStatus::Purchased => Some(ShippingStatus::InTransit),
            ShippingStatus::InTransit => Some(ShippingStatus::Delivered),
            ShippingStatus::Delivered => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_through_every_state() {
        let mut purchase = Purchase::new("Shoes");
        assert_eq!(
            purchase.description(),
            Some("Current state: Purchased - Will be shipping soon\n")
        );
        assert!(purchase.advance());
        assert_eq!(
            purchase.description(),
            Some("Current state: InTransit - Your item is on the way\n")
        );
        assert!(purchase.advance());
        assert_eq!(
            purchase.description(),
            Some("Current state: Delivered - Your item has arrived\n")
        );
        assert!(!purchase.is_done());
    }

    #[test]
    fn advancing_past_the_end_is_harmless() {
        let mut purchase = Purchase::with_state("Shoes", Box::new(Delivered));
        assert!(purchase.advance());
        assert!(purchase.is_done());
        assert_eq!(purchase.description(), None);
        assert!(!purchase.advance());
        assert_eq!(purchase.product(), "Shoes");
    }

    #[test]
    fn enum_and_trait_objects_agree() {
        let mut purchase = Purchase::new("Hat");
        let mut status = Some(ShippingStatus::default());
        while let Some(current) = status {
            assert_eq!(purchase.description(), Some(current.description()));
            purchase.advance();
            status = current.next();
        }
        assert!(purchase.is_done());
    }
}
