#![allow(dead_code)]

use lrkit::{ParseTable, Terminal};
use lrkit_gen::{Grammar, GrammarBuilder, generate};
use once_cell::sync::Lazy;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// `E -> E + T | T`, `T -> T * F | F`, `F -> ( E ) | id`
pub fn expr_grammar() -> Grammar {
    GrammarBuilder::new()
        .terminals(&["+", "*", "(", ")", "id"])
        .rule("E", &["E", "+", "T"])
        .label("add")
        .rule("E", &["T"])
        .rule("T", &["T", "*", "F"])
        .label("mul")
        .rule("T", &["F"])
        .rule("F", &["(", "E", ")"])
        .label("paren")
        .rule("F", &["id"])
        .label("id")
        .build()
        .expect("expression grammar")
}

/// `E -> E + E | E * E | ( E ) | id` with `+` below `*`, both left
/// associative.
pub fn ambiguous_expr_grammar() -> Grammar {
    GrammarBuilder::new()
        .terminals(&["+", "*", "(", ")", "id"])
        .left(&["+"])
        .left(&["*"])
        .rule("E", &["E", "+", "E"])
        .rule("E", &["E", "*", "E"])
        .rule("E", &["(", "E", ")"])
        .rule("E", &["id"])
        .build()
        .expect("ambiguous expression grammar")
}

pub static EXPR_TABLE: Lazy<ParseTable> =
    Lazy::new(|| generate(&expr_grammar()).expect("expression table"));

pub static AMBIGUOUS_EXPR_TABLE: Lazy<ParseTable> =
    Lazy::new(|| generate(&ambiguous_expr_grammar()).expect("ambiguous expression table"));

/// Splits `input` on whitespace and maps each word to a terminal of `table`,
/// appending the end terminal.
pub fn tokens(table: &ParseTable, input: &str) -> Vec<Terminal> {
    let mut out: Vec<Terminal> = input
        .split_whitespace()
        .map(|word| {
            table
                .terminal(word)
                .unwrap_or_else(|| panic!("unknown terminal `{word}`"))
        })
        .collect();
    out.push(Terminal::END);
    out
}
