#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/*!

# Ideas That Do Not Yet Have a Home

## Correctness via Macro

There are many ways to enforce "correctness" in a computer program:

- the type system: data types, method signatures
- ownership model: borrowing, lifetimes, RAII techniques, copy/move semantics
- visibility/access control: packages, modules, namespaces
- exhaustiveness checking
- bounds checking
- etc.

The best situation is when the compiler can enforce correctness with as little engagement
as possible from the programmer; correctness just "happens" without manually having
to be checked.

The visitor pattern is a case where it doesn't. Every element type needs an `accept` method,
the visitor trait needs one `visit_*` method per element type, and the two lists have to agree.
Add an element and forget one half, and you get either a compile error far from the cause or,
worse, an element that silently falls through a default method. The [`visitor`] module
generates both halves from a single list of types with a small `macro_rules!` macro, so the
lists cannot drift apart.

The macro is only as correct as its author made it, and nothing forces anyone to use it. But
it turns a convention into something the compiler checks.

[`visitor`]: crate::behavioral::visitor

*/

pub mod behavioral;
pub mod hashing;
pub mod memory;

pub use memory::region_mover::{MoveError, MoveRequest, Outcome, move_bytes, move_bytes_raw};
