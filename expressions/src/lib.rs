//! Integer arithmetic expressions, evaluated through postfix order.
//!
//! Text goes through three stages, each with its own error type:
//!
//! - [`lexer::tokenize`] classifies characters into tokens (unary vs binary operators included),
//! - [`parser::parse`] reorders the tokens into postfix order (shunting yard),
//! - [`evaluator::evaluate`] runs the postfix sequence on a value stack.
//!
//! [`calculate`] chains the three.

pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod precedence;
pub mod show;
pub mod token;

use log::debug;
use thiserror::Error;

pub use lexer::DEFAULT_CAPACITY;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    LexError(#[from] lexer::Error),
    #[error(transparent)]
    ParseError(#[from] parser::Error),
    #[error(transparent)]
    EvalError(#[from] evaluator::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculation {
    pub postfix: String,
    pub value: i32,
}

pub fn calculate(str: &str, capacity: usize) -> Result<Calculation, Error> {
    let infix = lexer::tokenize(str, capacity)?;
    debug!("tokenized {} tokens", infix.len());

    let postfix = parser::parse(&infix)?;
    let shown = show::show_postfix(&postfix);
    debug!("postfix: {}", shown);

    let value = evaluator::evaluate(postfix)?;
    debug!("value: {}", value);

    Ok(Calculation {
        postfix: shown,
        value,
    })
}
