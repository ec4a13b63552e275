/*!

# Behavioral Patterns Without Inheritance

The Gang of Four behavioral patterns were written down for languages with class inheritance
and virtual dispatch. Rust has neither classes nor inheritance, yet every one of these patterns
still shows up in Rust code, usually smaller than the textbook version and sometimes hiding
in plain sight in the standard library.

Each submodule takes one pattern, states the problem it solves, and shows what it turns into
in Rust:

| pattern                    | module                        | what it becomes in Rust                                  |
| -------------------------- | ----------------------------- | -------------------------------------------------------- |
| Template Method            | [`template_method`]           | default trait methods + a blanket impl for the final step |
| Visitor                    | [`visitor`]                   | a trait with one method per element, generated by macro  |
| Template Method + Visitor  | [`greeting_cards`]            | a card template *is* a visitor                           |
| Iterator                   | [`iterator`]                  | `Iterator` + `DoubleEndedIterator`                       |
| Memento                    | [`memento`]                   | an opaque snapshot type with module-private fields       |
| Memento + Iterator + Null  | [`instant_replay`]            | replaying a history of snapshots                         |
| State                      | [`state`]                     | `self: Box<Self>` transitions, or just an `enum`         |
| Strategy                   | [`strategy`]                  | a trait, a generic, a trait object, or a closure         |
| Observer                   | [`observer`]                  | subscribers behind `Rc<dyn Subscriber>`                  |
| Chain of Responsibility    | [`chain_of_responsibility`]   | a slice of handlers and a `Next` continuation            |
| Null Object                | [`null_object`]               | a do-nothing impl; the `log` facade is one               |
| Interpreter                | [`interpreter`]               | an `enum` AST and a recursive `evaluate`                 |
| Command                    | [`command`]                   | boxed commands with `execute` and `undo`                 |

## A Note on "Classes"

Where the textbook says "abstract base class", read "trait". Where it says "override", read
"implement a default method". Where it says "protected", there is no direct equivalent;
see [`template_method`] for what we do instead. Where it says "friend", read `pub(super)` or
`pub(in path)`; see [`memento`].

*/

pub mod chain_of_responsibility;
pub mod command;
pub mod greeting_cards;
pub mod instant_replay;
pub mod interpreter;
pub mod iterator;
pub mod memento;
pub mod null_object;
pub mod observer;
pub mod state;
pub mod strategy;
pub mod template_method;
pub mod visitor;
