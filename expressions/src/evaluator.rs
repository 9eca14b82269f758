use crate::lexer::{LocatedToken, Position};
use crate::parser::Postfix;
use crate::token::{OperatorSymbol, Token};
use log::trace;
use thiserror::Error;

pub type Result<A> = std::result::Result<A, Error>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("syntax error: '{}' at {position} is missing an operand", .operator.char())]
    SyntaxError {
        operator: OperatorSymbol,
        position: Position,
    },
    #[error("'{}' at {position} cannot be used as a unary operator", .operator.char())]
    InvalidUnaryOperator {
        operator: OperatorSymbol,
        position: Position,
    },
    #[error("division by zero at {position}")]
    DivisionByZero { position: Position },
    #[error("integer overflow in '{}' at {position}", .operator.char())]
    Overflow {
        operator: OperatorSymbol,
        position: Position,
    },
    #[error("empty expression")]
    EmptyExpression,
    #[error("syntax error: {count} operands are left without an operator")]
    LeftoverOperands { count: usize },
}

fn apply_binary(operator: OperatorSymbol, x: i32, y: i32, position: Position) -> Result<i32> {
    use OperatorSymbol::*;
    let result = match operator {
        Add => x.checked_add(y),
        Sub => x.checked_sub(y),
        Mul => x.checked_mul(y),
        Div if y == 0 => return Err(Error::DivisionByZero { position }),
        // Truncates toward zero. Only i32::MIN / -1 can overflow.
        Div => x.checked_div(y),
    };
    result.ok_or(Error::Overflow { operator, position })
}

fn apply_unary(operator: OperatorSymbol, x: i32, position: Position) -> Result<i32> {
    use OperatorSymbol::*;
    match operator {
        Add => Ok(x),
        Sub => x.checked_neg().ok_or(Error::Overflow { operator, position }),
        Mul | Div => Err(Error::InvalidUnaryOperator { operator, position }),
    }
}

#[derive(Debug)]
pub struct State {
    postfix: Postfix,
    // Integer tokens, including the ones synthesized from applied operators.
    stack: Vec<i32>,
}

impl State {
    pub fn new(postfix: Postfix) -> Self {
        let stack = Vec::with_capacity(postfix.len());
        Self { postfix, stack }
    }

    #[inline]
    pub fn stack(&self) -> &[i32] {
        &self.stack
    }

    // The operand pushed last is on top, so the right operand comes off first.
    fn pop_operands<const N: usize>(
        &mut self,
        operator: OperatorSymbol,
        position: Position,
    ) -> Result<[i32; N]> {
        if self.stack.len() < N {
            return Err(Error::SyntaxError { operator, position });
        }
        let mut operands = [0; N];
        operands.copy_from_slice(&self.stack[self.stack.len() - N..]);
        self.stack.truncate(self.stack.len() - N);
        Ok(operands)
    }

    // Consumes one postfix token. Returns `false` once the postfix sequence is exhausted.
    pub fn step(&mut self) -> Result<bool> {
        let Some(LocatedToken { token, position }) = self.postfix.pop_front() else {
            return Ok(false);
        };

        let value = match token {
            Token::Integer(x) => x,
            Token::BinaryOp(operator) => {
                let [x, y] = self.pop_operands::<2>(operator, position)?;
                apply_binary(operator, x, y, position)?
            }
            Token::UnaryOp(operator) => {
                let [x] = self.pop_operands::<1>(operator, position)?;
                apply_unary(operator, x, position)?
            }
            Token::Separator(_) => unreachable!("parentheses never reach postfix order"),
        };
        trace!("{} => push {}", token, value);
        self.stack.push(value);

        Ok(true)
    }

    pub fn run(mut self) -> Result<i32> {
        while self.step()? {}

        match self.stack[..] {
            [value] => Ok(value),
            [] => Err(Error::EmptyExpression),
            _ => Err(Error::LeftoverOperands {
                count: self.stack.len(),
            }),
        }
    }
}

pub fn evaluate(postfix: Postfix) -> Result<i32> {
    State::new(postfix).run()
}
