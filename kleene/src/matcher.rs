use std::iter;

use log::trace;

use crate::{Expression, Order, Structure};

/// One candidate match: the input items the match consumed, in consumption
/// order. Branches borrow from the caller's input; the same input node can
/// appear in any number of branches.
pub type Branch<'a, T> = Vec<&'a Structure<T>>;

/// A demand-driven stream of [`Branch`]es. Nothing past the branches the
/// caller actually pulls is ever computed.
pub type Branches<'a, T> = Box<dyn Iterator<Item = Branch<'a, T>> + 'a>;

impl<T: PartialEq> Expression<T> {
    /// Match against `input` from its start. Equivalent to
    /// [`run_at(input, 0)`](Expression::run_at).
    pub fn run<'a>(&'a self, input: &'a [Structure<T>]) -> Branches<'a, T> {
        self.run_at(input, 0)
    }

    /// Match against `input` starting at `index`, yielding every way this
    /// expression can match.
    ///
    /// Branch order is deterministic: declaration order for
    /// [`Sequence`](Expression::Sequence) and
    /// [`Alternation`](Expression::Alternation) (depth first, left to
    /// right), run-length order for [`Repetition`](Expression::Repetition)
    /// per its [`Order`]. Structurally identical branches reachable through
    /// different alternatives are each yielded once per alternative.
    ///
    /// Input that does not match is not an error; it yields an empty
    /// iterator.
    pub fn run_at<'a>(&'a self, input: &'a [Structure<T>], index: usize) -> Branches<'a, T> {
        match self {
            Expression::Constant(expected) => match input.get(index) {
                Some(item) if item.value() == expected => Box::new(iter::once(vec![item])),
                _ => Box::new(iter::empty()),
            },
            Expression::Sequence(children) => run_sequence(children, input, index),
            Expression::Alternation(alternatives) => {
                trace!(
                    "alternation: {} alternatives at index {index}",
                    alternatives.len()
                );
                Box::new(
                    alternatives
                        .iter()
                        .flat_map(move |alternative| alternative.run_at(input, index)),
                )
            }
            Expression::Repetition(order) => run_repetition(*order, input, index),
        }
    }
}

/// Backtracking concatenation: for each branch of the first child, run the
/// remaining children at the position past what that branch consumed, and
/// prepend. The recursion over lazy iterators is what makes the enumeration
/// depth first and left to right.
fn run_sequence<'a, T: PartialEq>(
    children: &'a [Expression<T>],
    input: &'a [Structure<T>],
    index: usize,
) -> Branches<'a, T> {
    let Some((head, rest)) = children.split_first() else {
        // An empty sequence consumes nothing, exactly once.
        return Box::new(iter::once(Vec::new()));
    };
    Box::new(head.run_at(input, index).flat_map(move |first| {
        run_sequence(rest, input, index + first.len())
            .map(move |tail| first.iter().copied().chain(tail).collect())
    }))
}

fn run_repetition<'a, T>(order: Order, input: &'a [Structure<T>], index: usize) -> Branches<'a, T> {
    if index > input.len() {
        return Box::new(iter::empty());
    }
    let remaining = input.len() - index;
    trace!("repetition ({order:?}): up to {remaining} items at index {index}");
    let lengths: Box<dyn Iterator<Item = usize>> = match order {
        Order::Greedy => Box::new((0..=remaining).rev()),
        Order::Lazy => Box::new(0..=remaining),
    };
    Box::new(lengths.map(move |len| input[index..index + len].iter().collect()))
}
