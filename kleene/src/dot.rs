use std::fmt::Display;
use std::io;
use std::io::Write;

use crate::{Expression, Order};

impl<T: Display> Expression<T> {
    /// Write the expression tree as a graphviz digraph.
    pub fn output_dot(&self, w: &mut impl Write) -> io::Result<()> {
        writeln!(w, "digraph {{")?;

        let mut next_id = 0;
        self.write_node(w, &mut next_id)?;

        writeln!(w, "}}")?;

        Ok(())
    }

    fn write_node(&self, w: &mut impl Write, next_id: &mut usize) -> io::Result<usize> {
        let id = *next_id;
        *next_id += 1;

        let label = match self {
            Expression::Constant(value) => format!("{value}"),
            Expression::Sequence(_) => "sequence".to_owned(),
            Expression::Alternation(_) => "alternation".to_owned(),
            Expression::Repetition(Order::Greedy) => "* (greedy)".to_owned(),
            Expression::Repetition(Order::Lazy) => "* (lazy)".to_owned(),
        };
        writeln!(w, "node[label=\"{label}\"] id{id}")?;

        let children = match self {
            Expression::Sequence(children) | Expression::Alternation(children) => {
                children.as_slice()
            }
            _ => &[],
        };
        for child in children {
            let child_id = child.write_node(w, next_id)?;
            writeln!(w, "id{id} -> id{child_id}")?;
        }

        Ok(id)
    }
}
