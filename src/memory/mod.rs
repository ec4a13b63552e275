/*!

# Moving Bytes Within a Single Buffer

Copying a run of bytes from one place to another is trivial until the source and the
destination share storage. Then the order in which the bytes are visited matters: a naive
front-to-back loop can overwrite a source byte before it has been read, and the copy silently
smears the first few bytes across the rest of the destination.

The classic fix, the one every `memmove` implements, is to pick a traversal direction based on
how the two regions sit relative to each other:

| layout                                    | safe direction |
| ----------------------------------------- | -------------- |
| disjoint                                  | either         |
| destination starts after source, overlaps | back-to-front  |
| destination starts before source, overlaps| front-to-back  |
| same start                                | nothing to do  |

The [`region_mover`] module implements exactly this decision table, separating the *decision*
([`region_mover::plan`]) from the *work* ([`region_mover::move_bytes`] and
[`region_mover::move_bytes_raw`]). Keeping the plan a pure function of three integers makes
it easy to test on its own and means the safe and raw entry points cannot disagree about
direction.

## Two Entry Points

In C the natural signature is `move(char *src, char *dest, int number)`. In Rust we can't
hand out a `&[u8]` and a `&mut [u8]` that alias, so the safe entry point takes the *one*
buffer both regions live in, plus two offsets. Region bounds then become something we can
check up front, before a single byte is written, rather than a precondition the caller has to
promise to uphold.

The raw entry point keeps the pointer signature for callers that really do have two pointers,
say from FFI. It is `unsafe` for the obvious reason: it trusts that `number` bytes are valid
at both addresses.

## Absent Regions

A null pointer in the C signature means "no region", and the operation quietly does nothing.
We keep that behavior but make absence explicit with `Option<usize>` offsets. Nothing is an
error here; the [`region_mover::Outcome`] simply reports *why* nothing happened.

*/

pub mod region_mover;
