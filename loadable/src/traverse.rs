//! Turning many loadables into one loadable list.
//!
//! All traversals fold from the right, seeded with `succeed(vec![])`, and at
//! every step apply "prepend this item" (the function side) to the list
//! accumulated so far. `f` is therefore called on the items last to first.

use crate::Loadable;

/// Maps every item to a loadable and collects the successes.
///
/// Short-circuits like [`Loadable::and_map`]: when several items are not
/// successes, the leftmost one decides the result.
///
/// ```
/// use loadable::{combine_map, Loadable};
///
/// let all = combine_map(vec![1, 2, 3], Loadable::<String, i32>::succeed);
/// assert_eq!(all, Loadable::succeed(vec![1, 2, 3]));
/// ```
pub fn combine_map<E, A, B, I, F>(items: I, mut f: F) -> Loadable<E, Vec<B>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Loadable<E, B>,
{
    items
        .into_iter()
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .fold(Loadable::succeed(Vec::new()), |acc, item| {
            f(item).map(prepend).and_map(acc)
        })
        .map(into_order)
}

/// Like [`combine_map`], but every failing item contributes its error,
/// merged with `combine` from left to right.
///
/// ```
/// use loadable::{combine_map_with, Loadable};
///
/// let fail_if_odd = |n: i32| {
///     if n % 2 == 1 {
///         Loadable::fail(n.to_string())
///     } else {
///         Loadable::succeed(n)
///     }
/// };
/// let all = combine_map_with(vec![1, 2, 3], |a: String, b: String| a + &b, fail_if_odd);
/// assert_eq!(all, Loadable::fail("13".to_string()));
/// ```
pub fn combine_map_with<E, A, B, I, C, F>(items: I, combine: C, mut f: F) -> Loadable<E, Vec<B>>
where
    I: IntoIterator<Item = A>,
    C: Fn(E, E) -> E,
    F: FnMut(A) -> Loadable<E, B>,
{
    items
        .into_iter()
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .fold(Loadable::succeed(Vec::new()), |acc, item| {
            f(item).map(prepend).and_map_with(&combine, acc)
        })
        .map(into_order)
}

/// Collects a list of loadables, keeping the leftmost non-success.
pub fn combine<E, A, I>(items: I) -> Loadable<E, Vec<A>>
where
    I: IntoIterator<Item = Loadable<E, A>>,
{
    combine_map(items, |item| item)
}

/// Collects a list of loadables, merging every failure with `combine`.
pub fn combine_with<E, A, I, C>(items: I, combine: C) -> Loadable<E, Vec<A>>
where
    I: IntoIterator<Item = Loadable<E, A>>,
    C: Fn(E, E) -> E,
{
    combine_map_with(items, combine, |item| item)
}

// The accumulator is built back to front so prepending is a push.
fn prepend<B>(item: B) -> impl FnOnce(Vec<B>) -> Vec<B> {
    move |mut reversed| {
        reversed.push(item);
        reversed
    }
}

fn into_order<B>(mut reversed: Vec<B>) -> Vec<B> {
    reversed.reverse();
    reversed
}
