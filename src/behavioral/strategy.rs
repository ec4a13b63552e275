/*!

# Strategy

Pull an interchangeable piece of behavior out into its own object so it can be chosen, and
swapped, independently of whoever uses it. Here the behavior is how a person greets someone:
normally, formally, or informally.

Rust gives you four ways to hold a strategy, and which one you want depends on when the choice
is made:

1. **A generic** ([`Greeter<S>`]): the strategy is fixed at compile time and monomorphized.
   Zero cost, but a `Greeter<Formal>` and a `Greeter<Informal>` are different types and can't
   share a `Vec`.
2. **A trait object** ([`DynGreeter`]): the choice is made at runtime, can be changed later, and
   greeters with different strategies share a type.
3. **A closure**: a strategy with one method is just a function. The blanket impl below makes
   every `Fn(&str) -> String` a [`GreetingStrategy`], so both greeters accept closures too.
4. **An enum**: not shown; if the set of strategies is closed, a `match` does the job.

Notice that (1) and (2) are the typed and type-erased APIs of the same idea, and the
type-erased one is built from the typed one.

*/

/// How to greet someone by name.
pub trait GreetingStrategy {
    fn greet(&self, name: &str) -> String;
}

#[derive(Copy, Clone, Debug, Default)]
pub struct Normal;

#[derive(Copy, Clone, Debug, Default)]
pub struct Formal;

#[derive(Copy, Clone, Debug, Default)]
pub struct Informal;

impl GreetingStrategy for Normal {
    fn greet(&self, name: &str) -> String {
        format!("Hi {name}, how are you?\n")
    }
}

impl GreetingStrategy for Formal {
    fn greet(&self, name: &str) -> String {
        format!("Good morning {name}, how do you do?\n")
    }
}

impl GreetingStrategy for Informal {
    fn greet(&self, name: &str) -> String {
        format!("Hey {name}, what's up?\n")
    }
}

impl<F> GreetingStrategy for F
where
    F: Fn(&str) -> String,
{
    fn greet(&self, name: &str) -> String {
        self(name)
    }
}

/// A boxed [`GreetingStrategy`], for when the choice is made at runtime.
pub type BxGreetingStrategy = Box<dyn GreetingStrategy>;

/// A greeter whose strategy is part of its type.
#[derive(Copy, Clone, Debug, Default)]
pub struct Greeter<S: GreetingStrategy> {
    strategy: S,
}

impl<S: GreetingStrategy> Greeter<S> {
    pub fn new(strategy: S) -> Self {
        Self { strategy }
    }

    pub fn greet(&self, name: &str) -> String {
        self.strategy.greet(name)
    }

    /// Erases the strategy's type.
    pub fn into_dyn(self) -> DynGreeter
    where
        S: 'static,
    {
        DynGreeter::new(self.strategy)
    }
}

/// A greeter whose strategy can be swapped at runtime.
pub struct DynGreeter {
    strategy: BxGreetingStrategy,
}

impl DynGreeter {
    pub fn new(strategy: impl GreetingStrategy + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
        }
    }

    pub fn greet(&self, name: &str) -> String {
        self.strategy.greet(name)
    }

    /// Replaces the strategy, returning the old one.
    pub fn set_strategy(&mut self, strategy: impl GreetingStrategy + 'static) -> BxGreetingStrategy {
        std::mem::replace(&mut self.strategy, Box::new(strategy))
    }
}
