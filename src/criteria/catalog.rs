//! The criterion catalog.
//!
//! Every rule seed draws its five row criteria from this list. Entries are
//! identified by their index; clause text is reproduced exactly in the
//! generated manual, so wording changes are breaking changes.
//!
//! Predicates receive flashed *positions* and pivot *positions*; geometry
//! uses the helpers from [`crate::core::color`].

use crate::core::{clockwise, counter_clockwise, is_adjacent, opposite, COLOR_COUNT};

use super::criterion::{Criterion, CriterionId};

pub const THREE_ADJACENT_CLOCKWISE: CriterionId = CriterionId::new(0);
pub const TWO_ADJACENT_CLOCKWISE: CriterionId = CriterionId::new(2);
pub const FLASH_ADJACENT_RETURN: CriterionId = CriterionId::new(4);
pub const TWO_OPPOSITE_MISSING: CriterionId = CriterionId::new(8);
pub const EXACTLY_TWO_TWICE: CriterionId = CriterionId::new(10);
pub const DISTINCT_EVEN: CriterionId = CriterionId::new(12);
pub const PIVOT_MORE_THAN_TWICE: CriterionId = CriterionId::new(28);
pub const AT_MOST_ONE_OF_PIVOTS: CriterionId = CriterionId::new(33);

/// Number of catalog entries.
pub const CATALOG_SIZE: usize = 41;

/// All catalog criteria, indexed by `CriterionId`.
pub static CATALOG: [Criterion; CATALOG_SIZE] = [
    // === Runs around the ring ===
    Criterion::plain(0, "three adjacent colors flashed in clockwise order", 30, three_adjacent_clockwise),
    Criterion::plain(1, "three adjacent colors flashed in counter-clockwise order", 31, three_adjacent_counter_clockwise),
    Criterion::plain(2, "two adjacent colors flashed in clockwise order", 50, two_adjacent_clockwise),
    Criterion::plain(3, "two adjacent colors flashed in counter-clockwise order", 51, two_adjacent_counter_clockwise),
    Criterion::plain(4, "any color flashed, then an adjacent color, then the first again", 40, flash_adjacent_return),
    Criterion::plain(5, "any color flashed, then the opposite color", 60, flash_opposite),
    Criterion::plain(6, "any color flashed, then the opposite color, then the first again", 35, flash_opposite_return),
    // === Colors that did not flash ===
    Criterion::plain(7, "two adjacent colors didn't flash", 45, two_adjacent_missing),
    Criterion::plain(8, "two opposite colors didn't flash", 10, two_opposite_missing),
    Criterion::plain(9, "three adjacent colors didn't flash", 15, three_adjacent_missing),
    // === Counting ===
    Criterion::plain(10, "exactly two colors flashed exactly twice", 25, exactly_two_twice),
    Criterion::plain(11, "exactly one color flashed exactly twice", 55, exactly_one_twice),
    Criterion::plain(12, "the number of distinct colors that flashed is even", 90, distinct_even),
    Criterion::plain(13, "the number of distinct colors that flashed is odd", 91, distinct_odd),
    Criterion::plain(14, "at most one color flashed more than once", 65, at_most_one_repeat),
    Criterion::plain(15, "any color flashed three or more times", 21, any_thrice),
    Criterion::plain(16, "exactly three distinct colors flashed", 54, exactly_three_distinct),
    Criterion::plain(17, "at least five distinct colors flashed", 22, five_or_more_distinct),
    // === Shape of the sequence ===
    Criterion::plain(18, "no two consecutive flashes were adjacent colors", 33, no_adjacent_steps),
    Criterion::plain(19, "the first and last flashes were the same color", 28, first_equals_last),
    Criterion::plain(20, "the first and last flashes were adjacent colors", 48, first_last_adjacent),
    Criterion::plain(21, "the first and last flashes were opposite colors", 38, first_last_opposite),
    Criterion::plain(22, "any color flashed, then the color two steps clockwise from it", 62, skip_clockwise),
    Criterion::plain(23, "any color flashed, then the color two steps counter-clockwise from it", 63, skip_counter_clockwise),
    Criterion::plain(24, "at least one color of every opposite pair flashed", 80, every_pair_covered),
    Criterion::plain(25, "the last color to flash had not flashed before", 75, last_is_new),
    Criterion::plain(26, "the first color to flash flashed again later", 68, first_repeats),
    Criterion::plain(27, "two colors flashed alternately twice in a row", 12, alternating_pair),
    // === Pivot colors ===
    Criterion::pivoted(28, "{0} flashed more than twice", 18, pivot_more_than_twice),
    Criterion::pivoted(29, "{0} flashed at least twice", 42, pivot_at_least_twice),
    Criterion::pivoted(30, "{0} didn't flash", 52, pivot_absent),
    Criterion::pivoted(31, "{0} flashed first", 44, pivot_first),
    Criterion::pivoted(32, "{0} flashed last", 46, pivot_last),
    Criterion::pivoted(33, "at most one of {0}, {1} and {2} flashed", 20, at_most_one_of_pivots),
    Criterion::pivoted(34, "{0}, {1} and {2} all flashed", 24, all_pivots_flashed),
    Criterion::pivoted(35, "none of {0}, {1} and {2} flashed", 14, no_pivot_flashed),
    Criterion::pivoted(36, "exactly two of {0}, {1} and {2} flashed", 56, exactly_two_pivots),
    Criterion::pivoted(37, "{0} flashed but {1} didn't", 58, pivot_without_other),
    Criterion::pivoted(38, "{0} and {1} flashed consecutively, in either order", 36, pivots_consecutive),
    Criterion::pivoted(39, "{0} flashed more often than {1}", 66, pivot_outnumbers),
    Criterion::pivoted(40, "{0}, {1} and {2} flashed in that order, not necessarily consecutively", 16, pivots_in_order),
];

// =============================================================================
// Helpers
// =============================================================================

fn counts(seq: &[u8]) -> [usize; COLOR_COUNT] {
    let mut counts = [0; COLOR_COUNT];
    for &p in seq {
        counts[p as usize % COLOR_COUNT] += 1;
    }
    counts
}

fn count_of(seq: &[u8], position: u8) -> usize {
    seq.iter().filter(|&&p| p == position).count()
}

fn flashed(seq: &[u8], position: u8) -> bool {
    seq.contains(&position)
}

fn distinct(seq: &[u8]) -> usize {
    counts(seq).iter().filter(|&&n| n > 0).count()
}

fn pivots_flashed(seq: &[u8], pivots: &[u8; 3]) -> usize {
    pivots.iter().filter(|&&p| flashed(seq, p)).count()
}

fn first_and_last(seq: &[u8]) -> Option<(u8, u8)> {
    match seq {
        [first, .., last] => Some((*first, *last)),
        _ => None,
    }
}

// =============================================================================
// Runs around the ring
// =============================================================================

fn three_adjacent_clockwise(seq: &[u8], _: &[u8; 3]) -> bool {
    seq.windows(3)
        .any(|w| w[1] == clockwise(w[0]) && w[2] == clockwise(w[1]))
}

fn three_adjacent_counter_clockwise(seq: &[u8], _: &[u8; 3]) -> bool {
    seq.windows(3)
        .any(|w| w[1] == counter_clockwise(w[0]) && w[2] == counter_clockwise(w[1]))
}

fn two_adjacent_clockwise(seq: &[u8], _: &[u8; 3]) -> bool {
    seq.windows(2).any(|w| w[1] == clockwise(w[0]))
}

fn two_adjacent_counter_clockwise(seq: &[u8], _: &[u8; 3]) -> bool {
    seq.windows(2).any(|w| w[1] == counter_clockwise(w[0]))
}

fn flash_adjacent_return(seq: &[u8], _: &[u8; 3]) -> bool {
    seq.windows(3).any(|w| w[2] == w[0] && is_adjacent(w[0], w[1]))
}

fn flash_opposite(seq: &[u8], _: &[u8; 3]) -> bool {
    seq.windows(2).any(|w| w[1] == opposite(w[0]))
}

fn flash_opposite_return(seq: &[u8], _: &[u8; 3]) -> bool {
    seq.windows(3).any(|w| w[1] == opposite(w[0]) && w[2] == w[0])
}

// =============================================================================
// Colors that did not flash
// =============================================================================

fn two_adjacent_missing(seq: &[u8], _: &[u8; 3]) -> bool {
    (0..COLOR_COUNT as u8).any(|p| !flashed(seq, p) && !flashed(seq, clockwise(p)))
}

fn two_opposite_missing(seq: &[u8], _: &[u8; 3]) -> bool {
    (0..3u8).any(|p| !flashed(seq, p) && !flashed(seq, opposite(p)))
}

fn three_adjacent_missing(seq: &[u8], _: &[u8; 3]) -> bool {
    (0..COLOR_COUNT as u8).any(|p| {
        let next = clockwise(p);
        !flashed(seq, p) && !flashed(seq, next) && !flashed(seq, clockwise(next))
    })
}

// =============================================================================
// Counting
// =============================================================================

fn exactly_two_twice(seq: &[u8], _: &[u8; 3]) -> bool {
    counts(seq).iter().filter(|&&n| n == 2).count() == 2
}

fn exactly_one_twice(seq: &[u8], _: &[u8; 3]) -> bool {
    counts(seq).iter().filter(|&&n| n == 2).count() == 1
}

fn distinct_even(seq: &[u8], _: &[u8; 3]) -> bool {
    distinct(seq) % 2 == 0
}

fn distinct_odd(seq: &[u8], _: &[u8; 3]) -> bool {
    distinct(seq) % 2 == 1
}

fn at_most_one_repeat(seq: &[u8], _: &[u8; 3]) -> bool {
    counts(seq).iter().filter(|&&n| n > 1).count() <= 1
}

fn any_thrice(seq: &[u8], _: &[u8; 3]) -> bool {
    counts(seq).iter().any(|&n| n >= 3)
}

fn exactly_three_distinct(seq: &[u8], _: &[u8; 3]) -> bool {
    distinct(seq) == 3
}

fn five_or_more_distinct(seq: &[u8], _: &[u8; 3]) -> bool {
    distinct(seq) >= 5
}

// =============================================================================
// Shape of the sequence
// =============================================================================

fn no_adjacent_steps(seq: &[u8], _: &[u8; 3]) -> bool {
    seq.windows(2).all(|w| !is_adjacent(w[0], w[1]))
}

fn first_equals_last(seq: &[u8], _: &[u8; 3]) -> bool {
    first_and_last(seq).is_some_and(|(first, last)| first == last)
}

fn first_last_adjacent(seq: &[u8], _: &[u8; 3]) -> bool {
    first_and_last(seq).is_some_and(|(first, last)| is_adjacent(first, last))
}

fn first_last_opposite(seq: &[u8], _: &[u8; 3]) -> bool {
    first_and_last(seq).is_some_and(|(first, last)| last == opposite(first))
}

fn skip_clockwise(seq: &[u8], _: &[u8; 3]) -> bool {
    seq.windows(2).any(|w| w[1] == clockwise(clockwise(w[0])))
}

fn skip_counter_clockwise(seq: &[u8], _: &[u8; 3]) -> bool {
    seq.windows(2)
        .any(|w| w[1] == counter_clockwise(counter_clockwise(w[0])))
}

fn every_pair_covered(seq: &[u8], _: &[u8; 3]) -> bool {
    (0..3u8).all(|p| flashed(seq, p) || flashed(seq, opposite(p)))
}

fn last_is_new(seq: &[u8], _: &[u8; 3]) -> bool {
    seq.split_last()
        .is_some_and(|(last, rest)| !rest.contains(last))
}

fn first_repeats(seq: &[u8], _: &[u8; 3]) -> bool {
    seq.split_first()
        .is_some_and(|(first, rest)| rest.contains(first))
}

fn alternating_pair(seq: &[u8], _: &[u8; 3]) -> bool {
    seq.windows(4)
        .any(|w| w[0] != w[1] && w[0] == w[2] && w[1] == w[3])
}

// =============================================================================
// Pivot colors
// =============================================================================

fn pivot_more_than_twice(seq: &[u8], pivots: &[u8; 3]) -> bool {
    count_of(seq, pivots[0]) > 2
}

fn pivot_at_least_twice(seq: &[u8], pivots: &[u8; 3]) -> bool {
    count_of(seq, pivots[0]) >= 2
}

fn pivot_absent(seq: &[u8], pivots: &[u8; 3]) -> bool {
    !flashed(seq, pivots[0])
}

fn pivot_first(seq: &[u8], pivots: &[u8; 3]) -> bool {
    seq.first() == Some(&pivots[0])
}

fn pivot_last(seq: &[u8], pivots: &[u8; 3]) -> bool {
    seq.last() == Some(&pivots[0])
}

fn at_most_one_of_pivots(seq: &[u8], pivots: &[u8; 3]) -> bool {
    pivots_flashed(seq, pivots) <= 1
}

fn all_pivots_flashed(seq: &[u8], pivots: &[u8; 3]) -> bool {
    pivots_flashed(seq, pivots) == 3
}

fn no_pivot_flashed(seq: &[u8], pivots: &[u8; 3]) -> bool {
    pivots_flashed(seq, pivots) == 0
}

fn exactly_two_pivots(seq: &[u8], pivots: &[u8; 3]) -> bool {
    pivots_flashed(seq, pivots) == 2
}

fn pivot_without_other(seq: &[u8], pivots: &[u8; 3]) -> bool {
    flashed(seq, pivots[0]) && !flashed(seq, pivots[1])
}

fn pivots_consecutive(seq: &[u8], pivots: &[u8; 3]) -> bool {
    let (a, b) = (pivots[0], pivots[1]);
    seq.windows(2)
        .any(|w| (w[0] == a && w[1] == b) || (w[0] == b && w[1] == a))
}

fn pivot_outnumbers(seq: &[u8], pivots: &[u8; 3]) -> bool {
    count_of(seq, pivots[0]) > count_of(seq, pivots[1])
}

fn pivots_in_order(seq: &[u8], pivots: &[u8; 3]) -> bool {
    let mut next = 0;
    for &p in seq {
        if next < pivots.len() && p == pivots[next] {
            next += 1;
        }
    }
    next == pivots.len()
}
