/*!

# Overlap-Safe Region Moves

After a successful move of `number` bytes from `src` to `dest`, `dest[i]` holds the value
`src[i]` had *before* the call, for every `i < number`, however the two regions overlap.

Overlap is detected the way the pointer-based version always has, with inclusive bounds:
regions that merely touch (`src + number == dest`) count as overlapping. That is harmless,
since either traversal order is correct for touching regions.

Only one orientation actually needs a reversed walk. When the destination starts *before*
the source, a back-to-front walk clobbers the tail of the source before it is read:

```text
buffer  1 2 3 4 5 6 7     src = 2, dest = 0, number = 5
back-to-front  ->  7 6 7 6 7 6 7   (wrong)
front-to-back  ->  3 4 5 6 7 6 7   (right)
```

So the overlap is still classified as [`Overlap::SourceAhead`], but the plan walks forward.

*/

use log::trace;
use thiserror::Error;

/// A contiguous run of bytes inside a buffer, as a half-open range `[start, start + len)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Region {
    pub start: usize,
    pub len: usize,
}

impl Region {
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// One past the last byte, or `None` if that overflows `usize`.
    pub fn end(&self) -> Option<usize> {
        self.start.checked_add(self.len)
    }
}

/// The order in which bytes are visited.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    FrontToBack,
    BackToFront,
}

/// How the source and destination sit relative to each other.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Overlap {
    Disjoint,
    /// The destination starts after the source and reaches back into it.
    DestinationAhead,
    /// The source starts after the destination and the destination reaches into it.
    SourceAhead,
}

/// Why a move did nothing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Skip {
    MissingSource,
    MissingDestination,
    /// Source and destination are the same region, which is already a fixed point.
    SameStart,
    Empty,
}

/// The decision for a move, computed before any byte is touched.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Plan {
    Skip(Skip),
    Copy {
        overlap: Overlap,
        direction: Direction,
    },
}

/// What a move did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Skipped(Skip),
    Moved(Direction),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MoveError {
    #[error("region {region:?} does not fit in a buffer of {buffer_len} bytes")]
    OutOfBounds { region: Region, buffer_len: usize },
    #[error("region starting at {start} with {number} bytes overflows the address space")]
    Overflow { start: usize, number: usize },
}

/// A request to move `number` bytes from offset `src` to offset `dest`. Either offset may be
/// absent, in which case the request is a no-op.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveRequest {
    pub src: Option<usize>,
    pub dest: Option<usize>,
    pub number: usize,
}

impl MoveRequest {
    pub const fn new(src: usize, dest: usize, number: usize) -> Self {
        Self {
            src: Some(src),
            dest: Some(dest),
            number,
        }
    }

    /// Both offsets, or the reason the request is a no-op.
    pub fn offsets(&self) -> Result<(usize, usize), Skip> {
        match (self.src, self.dest) {
            (Some(src), Some(dest)) => Ok((src, dest)),
            (None, _) => Err(Skip::MissingSource),
            (Some(_), None) => Err(Skip::MissingDestination),
        }
    }
}

/// Decides how (and whether) to move `number` bytes from address `src` to address `dest`.
///
/// This is pure address arithmetic; it never looks at the bytes themselves.
pub fn plan(src: usize, dest: usize, number: usize) -> Plan {
    if src == dest {
        return Plan::Skip(Skip::SameStart);
    }
    if number == 0 {
        return Plan::Skip(Skip::Empty);
    }

    // Inclusive on purpose: touching regions are classified as overlapping.
    let overlap = if src < dest && src.saturating_add(number) >= dest {
        Overlap::DestinationAhead
    } else if dest < src && dest.saturating_add(number) >= src {
        Overlap::SourceAhead
    } else {
        Overlap::Disjoint
    };

    let direction = match overlap {
        Overlap::DestinationAhead => Direction::BackToFront,
        Overlap::SourceAhead | Overlap::Disjoint => Direction::FrontToBack,
    };

    Plan::Copy { overlap, direction }
}

/// Moves `request.number` bytes within `buffer`.
///
/// Both regions are checked against the buffer before anything is written, so an error leaves
/// the buffer exactly as it was.
pub fn move_bytes(buffer: &mut [u8], request: MoveRequest) -> Result<Outcome, MoveError> {
    let planned = request
        .offsets()
        .map(|(src, dest)| (src, dest, plan(src, dest, request.number)));
    let (src, dest, direction) = match planned {
        Err(skip) | Ok((_, _, Plan::Skip(skip))) => {
            trace!("move skipped: {skip:?}");
            return Ok(Outcome::Skipped(skip));
        }
        Ok((src, dest, Plan::Copy { overlap, direction })) => {
            trace!("moving {} bytes, {overlap:?}, {direction:?}", request.number);
            (src, dest, direction)
        }
    };

    check_fits(buffer.len(), src, request.number)?;
    check_fits(buffer.len(), dest, request.number)?;

    match direction {
        Direction::FrontToBack => {
            for idx in 0..request.number {
                buffer[dest + idx] = buffer[src + idx];
            }
        }
        Direction::BackToFront => {
            for idx in (0..request.number).rev() {
                buffer[dest + idx] = buffer[src + idx];
            }
        }
    }

    Ok(Outcome::Moved(direction))
}

fn check_fits(buffer_len: usize, start: usize, number: usize) -> Result<(), MoveError> {
    let region = Region::new(start, number);
    let end = region.end().ok_or(MoveError::Overflow { start, number })?;
    if end > buffer_len {
        return Err(MoveError::OutOfBounds { region, buffer_len });
    }
    Ok(())
}

/// Moves `number` bytes from `src` to `dest`. A null pointer on either side is a no-op.
///
/// # Safety
///
/// When neither pointer is null, both `src` and `dest` must be valid for `number` bytes
/// (reads and writes respectively), and nothing else may access either region for the duration
/// of the call. No bounds are checked.
pub unsafe fn move_bytes_raw(src: *const u8, dest: *mut u8, number: usize) -> Outcome {
    if src.is_null() {
        return Outcome::Skipped(Skip::MissingSource);
    }
    if dest.is_null() {
        return Outcome::Skipped(Skip::MissingDestination);
    }

    let direction = match plan(src.addr(), dest.addr(), number) {
        Plan::Skip(skip) => return Outcome::Skipped(skip),
        Plan::Copy { direction, .. } => direction,
    };

    match direction {
        Direction::FrontToBack => {
            for idx in 0..number {
                // SAFETY: the caller guarantees `number` valid bytes at both addresses, and the
                // direction never reads a source byte after it has been overwritten.
                unsafe { *dest.add(idx) = *src.add(idx) };
            }
        }
        Direction::BackToFront => {
            for idx in (0..number).rev() {
                // SAFETY: as above.
                unsafe { *dest.add(idx) = *src.add(idx) };
            }
        }
    }

    Outcome::Moved(direction)
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use proptest::prelude::*;

    use super::*;

    /// What any correct move must produce: the result of copying through a scratch buffer.
    fn reference_move(buffer: &[u8], src: usize, dest: usize, number: usize) -> Vec<u8> {
        let scratch = buffer[src..src + number].to_vec();
        let mut expected = buffer.to_vec();
        expected[dest..dest + number].copy_from_slice(&scratch);
        expected
    }

    #[test]
    fn forward_overlap_copies_from_the_rear() {
        let mut buffer = [1, 2, 3, 4, 5, 0, 0];
        let outcome = move_bytes(&mut buffer, MoveRequest::new(0, 2, 5)).unwrap();
        assert_eq!(outcome, Outcome::Moved(Direction::BackToFront));
        assert_eq!(buffer, [1, 2, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn backward_overlap_copies_from_the_front() {
        let mut buffer = [1, 2, 3, 4, 5, 6, 7];
        let outcome = move_bytes(&mut buffer, MoveRequest::new(2, 0, 5)).unwrap();
        assert_eq!(outcome, Outcome::Moved(Direction::FrontToBack));
        assert_eq!(buffer, [3, 4, 5, 6, 7, 6, 7]);
    }

    #[test]
    fn monotonic_pattern_survives_both_orientations() {
        let original: Vec<u8> = (0..32).collect();

        let mut ahead = original.clone();
        move_bytes(&mut ahead, MoveRequest::new(3, 9, 20)).unwrap();
        assert_eq!(&ahead[9..29], &original[3..23]);

        let mut behind = original.clone();
        move_bytes(&mut behind, MoveRequest::new(9, 3, 20)).unwrap();
        assert_eq!(&behind[3..23], &original[9..29]);
    }

    #[test]
    fn disjoint_move_is_idempotent() {
        let mut once = *b"abcdefgh";
        move_bytes(&mut once, MoveRequest::new(0, 5, 3)).unwrap();
        let mut twice = once;
        move_bytes(&mut twice, MoveRequest::new(0, 5, 3)).unwrap();
        assert_eq!(once, *b"abcdeabc");
        assert_eq!(once, twice);
    }

    #[test]
    fn no_ops_leave_the_buffer_alone() {
        let mut buffer = [9, 8, 7, 6];
        let cases = [
            (MoveRequest::new(1, 3, 0), Skip::Empty),
            (MoveRequest::new(2, 2, 2), Skip::SameStart),
            (
                MoveRequest {
                    src: None,
                    dest: Some(0),
                    number: 2,
                },
                Skip::MissingSource,
            ),
            (
                MoveRequest {
                    src: Some(0),
                    dest: None,
                    number: 2,
                },
                Skip::MissingDestination,
            ),
        ];
        for (request, skip) in cases {
            assert_eq!(move_bytes(&mut buffer, request), Ok(Outcome::Skipped(skip)));
            assert_eq!(buffer, [9, 8, 7, 6]);
        }
    }

    #[test]
    fn out_of_bounds_is_rejected_before_writing() {
        let mut buffer = [1, 2, 3, 4];
        let err = move_bytes(&mut buffer, MoveRequest::new(0, 2, 3)).unwrap_err();
        assert_eq!(
            err,
            MoveError::OutOfBounds {
                region: Region::new(2, 3),
                buffer_len: 4
            }
        );
        assert_eq!(buffer, [1, 2, 3, 4]);

        let err = move_bytes(&mut buffer, MoveRequest::new(usize::MAX, 0, 2)).unwrap_err();
        assert_eq!(
            err,
            MoveError::Overflow {
                start: usize::MAX,
                number: 2
            }
        );
    }

    #[test]
    fn region_end_is_checked() {
        assert_eq!(Region::new(3, 4).end(), Some(7));
        assert_eq!(Region::new(usize::MAX, 0).end(), Some(usize::MAX));
        assert_eq!(Region::new(usize::MAX, 1).end(), None);
    }

    #[test]
    fn touching_regions_count_as_overlapping() {
        assert_eq!(
            plan(0, 4, 4),
            Plan::Copy {
                overlap: Overlap::DestinationAhead,
                direction: Direction::BackToFront
            }
        );
        assert_eq!(
            plan(4, 0, 4),
            Plan::Copy {
                overlap: Overlap::SourceAhead,
                direction: Direction::FrontToBack
            }
        );
        assert_eq!(
            plan(0, 5, 4),
            Plan::Copy {
                overlap: Overlap::Disjoint,
                direction: Direction::FrontToBack
            }
        );
    }

    #[test]
    fn raw_null_pointers_are_no_ops() {
        let mut buffer = [1u8, 2, 3];
        let base = buffer.as_mut_ptr();
        unsafe {
            assert_eq!(
                move_bytes_raw(ptr::null(), base, 3),
                Outcome::Skipped(Skip::MissingSource)
            );
            assert_eq!(
                move_bytes_raw(base, ptr::null_mut(), 3),
                Outcome::Skipped(Skip::MissingDestination)
            );
            assert_eq!(
                move_bytes_raw(base, base, 3),
                Outcome::Skipped(Skip::SameStart)
            );
        }
        assert_eq!(buffer, [1, 2, 3]);
    }

    #[test]
    fn raw_matches_the_worked_examples() {
        let mut forward = [1u8, 2, 3, 4, 5, 0, 0];
        let base = forward.as_mut_ptr();
        // SAFETY: both regions lie inside `forward`.
        unsafe { move_bytes_raw(base, base.add(2), 5) };
        assert_eq!(forward, [1, 2, 1, 2, 3, 4, 5]);

        let mut backward = [1u8, 2, 3, 4, 5, 6, 7];
        let base = backward.as_mut_ptr();
        // SAFETY: both regions lie inside `backward`.
        unsafe { move_bytes_raw(base.add(2), base, 5) };
        assert_eq!(backward, [3, 4, 5, 6, 7, 6, 7]);
    }

    fn in_bounds_request() -> impl Strategy<Value = (Vec<u8>, usize, usize, usize)> {
        prop::collection::vec(any::<u8>(), 0..64).prop_flat_map(|buffer| {
            let len = buffer.len();
            (Just(buffer), 0..=len, 0..=len).prop_flat_map(move |(buffer, src, dest)| {
                let room = len - src.max(dest);
                (Just(buffer), Just(src), Just(dest), 0..=room)
            })
        })
    }

    proptest! {
        #[test]
        fn behaves_like_a_copy_through_scratch((buffer, src, dest, number) in in_bounds_request()) {
            let expected = reference_move(&buffer, src, dest, number);
            let mut actual = buffer.clone();
            prop_assert!(move_bytes(&mut actual, MoveRequest::new(src, dest, number)).is_ok());
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn raw_and_safe_entry_points_agree((buffer, src, dest, number) in in_bounds_request()) {
            let mut safe = buffer.clone();
            let safe_outcome = move_bytes(&mut safe, MoveRequest::new(src, dest, number)).unwrap();

            let mut raw = buffer.clone();
            let base = raw.as_mut_ptr();
            // SAFETY: the strategy keeps both regions inside `raw`.
            let raw_outcome = unsafe { move_bytes_raw(base.add(src), base.add(dest), number) };

            prop_assert_eq!(safe_outcome, raw_outcome);
            prop_assert_eq!(safe, raw);
        }
    }
}
