use std::fmt::{self, Display, Formatter};

/// Enumeration order of a [`Repetition`](Expression::Repetition)'s branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Order {
    /// Longest run first. Composed into a [`Sequence`](Expression::Sequence),
    /// this makes the first overall branch the one where the repetition
    /// absorbed as much input as possible.
    #[default]
    Greedy,
    /// Shortest run first.
    Lazy,
}

/// A declarative matcher over sequences of [`Structure`](crate::Structure)s.
///
/// This is a closed set of variants: the matching algorithm in
/// [`run`](Expression::run) is exhaustively defined over exactly these four.
/// An expression tree is immutable once built and holds no matching state, so
/// the same tree can be run any number of times, against any number of
/// inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression<T> {
    /// Matches exactly one input item whose value equals the stored value.
    Constant(T),
    /// Matches the child expressions one after another, back to back. An
    /// empty sequence matches zero items, exactly once.
    Sequence(Vec<Expression<T>>),
    /// Matches any one child expression, all at the same position. Every
    /// branch of every alternative is yielded, in declaration order. An
    /// empty alternation matches nothing.
    Alternation(Vec<Expression<T>>),
    /// Absorbs a run of input of any length, without looking at the values.
    /// One branch per possible run length, enumerated in the given
    /// [`Order`].
    Repetition(Order),
}

impl<T: Display> Display for Expression<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Constant(value) => write!(f, "{value}"),
            Expression::Sequence(children) => {
                for child in children {
                    // | binds looser than juxtaposition
                    if matches!(child, Expression::Alternation(_)) {
                        write!(f, "({child})")?;
                    } else {
                        write!(f, "{child}")?;
                    }
                }
                Ok(())
            }
            Expression::Alternation(alternatives) => {
                for (i, alternative) in alternatives.iter().enumerate() {
                    if i > 0 {
                        write!(f, "|")?;
                    }
                    write!(f, "{alternative}")?;
                }
                Ok(())
            }
            Expression::Repetition(Order::Greedy) => write!(f, "*"),
            Expression::Repetition(Order::Lazy) => write!(f, "*?"),
        }
    }
}
