use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Integer(i32),
    BinaryOp(OperatorSymbol),
    UnaryOp(OperatorSymbol),
    Separator(SeparatorSymbol),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorSymbol {
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparatorSymbol {
    OpenParen,
    CloseParen,
}

impl OperatorSymbol {
    pub const ADD: char = '+';
    pub const SUB: char = '-';
    pub const MUL: char = '*';
    pub const DIV: char = '/';

    pub fn from_char(c: char) -> Option<Self> {
        use OperatorSymbol::*;
        match c {
            Self::ADD => Some(Add),
            Self::SUB => Some(Sub),
            Self::MUL => Some(Mul),
            Self::DIV => Some(Div),
            _ => None,
        }
    }

    pub fn char(&self) -> char {
        use OperatorSymbol::*;
        match self {
            Add => Self::ADD,
            Sub => Self::SUB,
            Mul => Self::MUL,
            Div => Self::DIV,
        }
    }
}

impl SeparatorSymbol {
    pub const OPEN_PAREN: char = '(';
    pub const CLOSE_PAREN: char = ')';

    pub fn from_char(c: char) -> Option<Self> {
        use SeparatorSymbol::*;
        match c {
            Self::OPEN_PAREN => Some(OpenParen),
            Self::CLOSE_PAREN => Some(CloseParen),
            _ => None,
        }
    }

    pub fn char(&self) -> char {
        use SeparatorSymbol::*;
        match self {
            OpenParen => Self::OPEN_PAREN,
            CloseParen => Self::CLOSE_PAREN,
        }
    }
}

impl Token {
    #[inline]
    pub fn is_operator(&self) -> bool {
        matches!(self, Token::BinaryOp(_) | Token::UnaryOp(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Token::*;
        match self {
            Integer(x) => write!(f, "{}", x),
            BinaryOp(op) | UnaryOp(op) => write!(f, "{}", op.char()),
            Separator(sep) => write!(f, "{}", sep.char()),
        }
    }
}
