use crate::token::{OperatorSymbol, SeparatorSymbol, Token};
use log::trace;
use std::fmt;
use thiserror::Error;

pub type Result<A> = std::result::Result<A, Error>;

pub const DEFAULT_CAPACITY: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "column {}", self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocatedToken {
    pub token: Token,
    pub position: Position,
}

impl LocatedToken {
    pub fn new(token: Token, position: Position) -> Self {
        Self { token, position }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("invalid character {found:?} ({}) at {position}", .found.escape_unicode())]
    InvalidCharacter { found: char, position: Position },
    #[error("expression is too long (more than {capacity} tokens)")]
    InputTooLong { capacity: usize },
    #[error("integer literal at {position} does not fit in 32 bits")]
    IntegerLiteralTooBig { position: Position },
}

#[derive(Debug, Clone)]
pub struct State<'a> {
    tokens: &'a str,
    position: Position,
}

impl<'state> State<'state> {
    // 'a lives atleast as long as 'state ('a contains 'state)
    pub fn new<'a: 'state>(str: &'a str) -> Self {
        Self {
            tokens: str,
            position: Position { column: 1 },
        }
    }

    fn consume_char(&mut self, c: char) {
        self.position.column += 1;
        self.tokens = &self.tokens[c.len_utf8()..];
    }

    // Only one line is ever read. Everything after the first newline is treated as absent.
    fn read_char(&self) -> Option<char> {
        match self.tokens.chars().next() {
            Some('\n') | None => None,
            Some(c) => Some(c),
        }
    }

    fn advance(&mut self, c: char) -> Position {
        let previous_position = self.position;
        self.consume_char(c);
        previous_position
    }

    pub fn consume_whitespace(&mut self) {
        while let Some(c) = self.read_char() {
            if c.is_whitespace() {
                self.consume_char(c);
            } else {
                return;
            }
        }
    }

    // The kind of an operator depends on the token right before it.
    // With nothing to its left, or an operator or `(` to its left, it has no left operand.
    fn operator(op: OperatorSymbol, previous: Option<Token>) -> Token {
        match previous {
            None
            | Some(Token::BinaryOp(_))
            | Some(Token::UnaryOp(_))
            | Some(Token::Separator(SeparatorSymbol::OpenParen)) => Token::UnaryOp(op),
            Some(_) => Token::BinaryOp(op),
        }
    }

    pub fn next_token(&mut self, previous: Option<Token>) -> Result<Option<LocatedToken>> {
        self.consume_whitespace();
        let Some(c) = self.read_char() else {
            return Ok(None);
        };

        if c.is_ascii_digit() {
            return self.integer().map(Some);
        }

        let token = if let Some(sep) = SeparatorSymbol::from_char(c) {
            Token::Separator(sep)
        } else if let Some(op) = OperatorSymbol::from_char(c) {
            Self::operator(op, previous)
        } else {
            return Err(Error::InvalidCharacter {
                found: c,
                position: self.position,
            });
        };

        let token_position = self.advance(c);
        Ok(Some(LocatedToken::new(token, token_position)))
    }

    // Maximal run of decimal digits. The sign is never part of the literal.
    fn integer(&mut self) -> Result<LocatedToken> {
        let token_position = self.position;
        let mut sum: i32 = 0;

        while let Some(c) = self.read_char() {
            let Some(d) = c.to_digit(10) else {
                break;
            };
            self.advance(c);

            // Watch out for 32 bit overflow.
            sum = sum
                .checked_mul(10)
                .and_then(|mul_10_sum| mul_10_sum.checked_add(d as i32))
                .ok_or(Error::IntegerLiteralTooBig {
                    position: token_position,
                })?;
        }

        Ok(LocatedToken::new(Token::Integer(sum), token_position))
    }
}

pub fn tokenize(str: &str, capacity: usize) -> Result<Vec<LocatedToken>> {
    let mut state = State::new(str);
    let mut tokens: Vec<LocatedToken> = vec![];

    loop {
        let previous = tokens.last().map(|t| t.token);
        let Some(located_token) = state.next_token(previous)? else {
            break;
        };
        if tokens.len() >= capacity {
            return Err(Error::InputTooLong { capacity });
        }
        trace!(
            "token {:?} at {}",
            located_token.token,
            located_token.position
        );
        tokens.push(located_token);
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use OperatorSymbol::*;
    use SeparatorSymbol::*;
    use Token::*;

    fn kinds(str: &str) -> Result<Vec<Token>> {
        Ok(tokenize(str, DEFAULT_CAPACITY)?
            .into_iter()
            .map(|t| t.token)
            .collect())
    }

    #[test]
    fn test_tokenize_0() -> Result<()> {
        let tokens = kinds(" 12 +3*  (40 / 5) ")?;
        assert_eq!(
            tokens,
            vec![
                Integer(12),
                BinaryOp(Add),
                Integer(3),
                BinaryOp(Mul),
                Separator(OpenParen),
                Integer(40),
                BinaryOp(Div),
                Integer(5),
                Separator(CloseParen),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_positions() -> Result<()> {
        let tokens = tokenize("7 -\t123", DEFAULT_CAPACITY)?;
        let columns: Vec<usize> = tokens.iter().map(|t| t.position.column).collect();
        assert_eq!(columns, vec![1, 3, 5]);
        Ok(())
    }

    #[test]
    fn test_leading_operator_is_unary() -> Result<()> {
        let tokens = kinds("-5 + 3")?;
        assert_eq!(tokens, vec![UnaryOp(Sub), Integer(5), BinaryOp(Add), Integer(3)]);
        Ok(())
    }

    #[test]
    fn test_operator_after_operator_is_unary() -> Result<()> {
        let tokens = kinds("2 * - - 3")?;
        assert_eq!(
            tokens,
            vec![
                Integer(2),
                BinaryOp(Mul),
                UnaryOp(Sub),
                UnaryOp(Sub),
                Integer(3)
            ]
        );
        Ok(())
    }

    #[test]
    fn test_operator_after_parens() -> Result<()> {
        let tokens = kinds("(+1) - 2")?;
        assert_eq!(
            tokens,
            vec![
                Separator(OpenParen),
                UnaryOp(Add),
                Integer(1),
                Separator(CloseParen),
                BinaryOp(Sub),
                Integer(2)
            ]
        );
        Ok(())
    }

    #[test]
    fn test_invalid_character() {
        let result = tokenize("1 + x", DEFAULT_CAPACITY);
        assert_eq!(
            result,
            Err(Error::InvalidCharacter {
                found: 'x',
                position: Position { column: 5 }
            })
        );
    }

    #[test]
    fn test_input_too_long() {
        assert!(tokenize("1+2", 3).is_ok());
        let result = tokenize("1+2+", 3);
        assert_eq!(result, Err(Error::InputTooLong { capacity: 3 }));
    }

    #[test]
    fn test_literal_bounds() -> Result<()> {
        assert_eq!(kinds("2147483647")?, vec![Integer(i32::MAX)]);
        assert_eq!(kinds("000042")?, vec![Integer(42)]);

        let result = tokenize("1 + 2147483648", DEFAULT_CAPACITY);
        assert!(matches!(
            result,
            Err(Error::IntegerLiteralTooBig {
                position: Position { column: 5 }
            })
        ));
        Ok(())
    }

    #[test]
    fn test_stops_at_newline() -> Result<()> {
        assert_eq!(kinds("1 + 2\n* x")?, vec![Integer(1), BinaryOp(Add), Integer(2)]);
        assert!(kinds("  \r\n")?.is_empty());
        assert!(kinds("")?.is_empty());
        Ok(())
    }
}
