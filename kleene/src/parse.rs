use std::iter::Peekable;
use std::str::CharIndices;

use crate::{Expression, Order, ParseError};

// Pattern grammar:
//
//   alternation ::= sequence ('|' sequence)*
//   sequence    ::= atom*
//   atom        ::= '(' alternation ')'
//                 | '*' '?'?
//                 | '\' CHAR
//                 | NONSPECIAL_CHAR
//
// Single-element sequences and alternations collapse to the element, so the
// parsed tree carries no redundant wrappers.

pub(crate) fn parse(input: &str) -> Result<Expression<char>, ParseError> {
    let mut parser = Parser {
        rest: input.char_indices().peekable(),
    };
    let expression = parser.alternation()?;
    // An alternation stops only at the end of input or at a `)`; a leftover
    // `)` here has no matching `(`.
    match parser.rest.next() {
        None => Ok(expression),
        Some((at, _)) => Err(ParseError::UnmatchedClose { at }),
    }
}

struct Parser<'a> {
    rest: Peekable<CharIndices<'a>>,
}

impl Parser<'_> {
    fn alternation(&mut self) -> Result<Expression<char>, ParseError> {
        let mut alternatives = vec![self.sequence()?];
        while matches!(self.rest.peek(), Some((_, '|'))) {
            self.rest.next();
            alternatives.push(self.sequence()?);
        }
        Ok(match alternatives.len() {
            1 => alternatives.swap_remove(0),
            _ => Expression::Alternation(alternatives),
        })
    }

    fn sequence(&mut self) -> Result<Expression<char>, ParseError> {
        let mut items = Vec::new();
        while let Some(&(at, c)) = self.rest.peek() {
            if c == '|' || c == ')' {
                break;
            }
            self.rest.next();
            items.push(self.atom(at, c)?);
        }
        Ok(match items.len() {
            1 => items.swap_remove(0),
            _ => Expression::Sequence(items),
        })
    }

    fn atom(&mut self, at: usize, c: char) -> Result<Expression<char>, ParseError> {
        match c {
            '(' => {
                let inner = self.alternation()?;
                match self.rest.next() {
                    Some((_, ')')) => Ok(inner),
                    _ => Err(ParseError::UnclosedGroup { at }),
                }
            }
            '*' => {
                if matches!(self.rest.peek(), Some((_, '?'))) {
                    self.rest.next();
                    Ok(Expression::Repetition(Order::Lazy))
                } else {
                    Ok(Expression::Repetition(Order::Greedy))
                }
            }
            '\\' => match self.rest.next() {
                Some((_, escaped)) => Ok(Expression::Constant(escaped)),
                None => Err(ParseError::DanglingEscape { at }),
            },
            c => Ok(Expression::Constant(c)),
        }
    }
}
