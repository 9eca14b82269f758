use crate::parser::Postfix;

pub fn show_postfix(postfix: &Postfix) -> String {
    postfix
        .iter()
        .map(|located_token| located_token.token.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
