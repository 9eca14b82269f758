use crate::lexer::{LocatedToken, Position};
use crate::precedence::priority;
use crate::token::{SeparatorSymbol, Token};
use log::trace;
use std::collections::VecDeque;
use thiserror::Error;

pub type Result<A> = std::result::Result<A, Error>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("mismatched parenthesis at {position}")]
    MismatchedParenthesis { position: Position },
}

// Postfix order, consumed front to back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Postfix(VecDeque<LocatedToken>);

impl Postfix {
    pub fn with_capacity(capacity: usize) -> Self {
        Self(VecDeque::with_capacity(capacity))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocatedToken> {
        self.0.iter()
    }

    pub fn tokens(&self) -> Vec<Token> {
        self.0.iter().map(|t| t.token).collect()
    }

    pub fn pop_front(&mut self) -> Option<LocatedToken> {
        self.0.pop_front()
    }

    fn push_back(&mut self, located_token: LocatedToken) {
        trace!("emit {}", located_token.token);
        self.0.push_back(located_token)
    }
}

// ===Shunting Yard===
// `stack` only ever holds operators and open parentheses.
pub fn parse(infix: &[LocatedToken]) -> Result<Postfix> {
    use SeparatorSymbol::*;
    use Token::*;

    let mut postfix = Postfix::with_capacity(infix.len());
    let mut stack: Vec<LocatedToken> = Vec::with_capacity(infix.len());

    for &located_token in infix {
        match located_token.token {
            Integer(_) => postfix.push_back(located_token),
            // A prefix operator has no left operand, so there is nothing to its left it could close.
            UnaryOp(_) | Separator(OpenParen) => stack.push(located_token),
            BinaryOp(_) => {
                let incoming = priority(&located_token.token);
                while let Some(&top) = stack.last() {
                    if !top.token.is_operator() || incoming > priority(&top.token) {
                        break;
                    }
                    stack.pop();
                    postfix.push_back(top);
                }
                stack.push(located_token);
            }
            Separator(CloseParen) => loop {
                match stack.pop() {
                    Some(LocatedToken {
                        token: Separator(OpenParen),
                        ..
                    }) => break,
                    Some(top) => postfix.push_back(top),
                    None => {
                        return Err(Error::MismatchedParenthesis {
                            position: located_token.position,
                        })
                    }
                }
            },
        }
    }

    while let Some(top) = stack.pop() {
        if let Separator(_) = top.token {
            return Err(Error::MismatchedParenthesis {
                position: top.position,
            });
        }
        postfix.push_back(top);
    }

    Ok(postfix)
}
