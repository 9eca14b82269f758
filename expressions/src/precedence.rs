use crate::token::{OperatorSymbol, SeparatorSymbol, Token};

// Higher binds tighter. Integers are never compared.
pub fn priority(token: &Token) -> Option<u8> {
    use OperatorSymbol::*;
    use SeparatorSymbol::*;
    use Token::*;
    match token {
        Integer(_) => None,
        Separator(CloseParen) => Some(4),
        UnaryOp(_) => Some(3),
        BinaryOp(Mul | Div) => Some(2),
        BinaryOp(Add | Sub) => Some(1),
        Separator(OpenParen) => Some(0),
    }
}
