// Produced by lrkit-gen. Do not edit.

#[allow(unused_imports)]
use lrkit::{Action, InvalidTable, NonTerminal, ParseTable, Production, StateId, Symbol, Terminal};

pub const N_TERMINALS: usize = 6;
pub const N_NONTERMINALS: usize = 4;
pub const N_PRODUCTIONS: usize = 7;
pub const N_STATES: usize = 12;

pub const TERMINAL_LABELS: [&str; N_TERMINALS] = [
    "$", // 0
    "+", // 1
    "*", // 2
    "(", // 3
    ")", // 4
    "id", // 5
];

pub const NONTERMINAL_LABELS: [&str; N_NONTERMINALS] = [
    "Start", // 0
    "E", // 1
    "T", // 2
    "F", // 3
];

pub const PRODUCTION_LABELS: [&str; N_PRODUCTIONS] = [
    "start", // 0
    "add", // 1
    "rule2", // 2
    "mul", // 3
    "rule4", // 4
    "paren", // 5
    "id", // 6
];

const PRODS: [(u16, &[Symbol]); N_PRODUCTIONS] = [
    (0, &[Symbol::NonTerminal(NonTerminal::new(1))]), // 0
    (1, &[Symbol::NonTerminal(NonTerminal::new(1)), Symbol::Terminal(Terminal::new(1)), Symbol::NonTerminal(NonTerminal::new(2))]), // 1
    (1, &[Symbol::NonTerminal(NonTerminal::new(2))]), // 2
    (2, &[Symbol::NonTerminal(NonTerminal::new(2)), Symbol::Terminal(Terminal::new(2)), Symbol::NonTerminal(NonTerminal::new(3))]), // 3
    (2, &[Symbol::NonTerminal(NonTerminal::new(3))]), // 4
    (3, &[Symbol::Terminal(Terminal::new(3)), Symbol::NonTerminal(NonTerminal::new(1)), Symbol::Terminal(Terminal::new(4))]), // 5
    (3, &[Symbol::Terminal(Terminal::new(5))]), // 6
];

pub const ACTIONS: [[Action; N_TERMINALS]; N_STATES] = [
    /* STATE 0 */ [
        Action::Error, /* 0($) */
        Action::Error, /* 1(+) */
        Action::Error, /* 2(*) */
        Action::shift(4), /* 3(() */
        Action::Error, /* 4()) */
        Action::shift(5), /* 5(id) */
    ],
    /* STATE 1 */ [
        Action::Accept, /* 0($) */
        Action::shift(6), /* 1(+) */
        Action::Error, /* 2(*) */
        Action::Error, /* 3(() */
        Action::Error, /* 4()) */
        Action::Error, /* 5(id) */
    ],
    /* STATE 2 */ [
        Action::reduce(2), /* 0($) */
        Action::reduce(2), /* 1(+) */
        Action::shift(7), /* 2(*) */
        Action::Error, /* 3(() */
        Action::reduce(2), /* 4()) */
        Action::Error, /* 5(id) */
    ],
    /* STATE 3 */ [
        Action::reduce(4), /* 0($) */
        Action::reduce(4), /* 1(+) */
        Action::reduce(4), /* 2(*) */
        Action::Error, /* 3(() */
        Action::reduce(4), /* 4()) */
        Action::Error, /* 5(id) */
    ],
    /* STATE 4 */ [
        Action::Error, /* 0($) */
        Action::Error, /* 1(+) */
        Action::Error, /* 2(*) */
        Action::shift(4), /* 3(() */
        Action::Error, /* 4()) */
        Action::shift(5), /* 5(id) */
    ],
    /* STATE 5 */ [
        Action::reduce(6), /* 0($) */
        Action::reduce(6), /* 1(+) */
        Action::reduce(6), /* 2(*) */
        Action::Error, /* 3(() */
        Action::reduce(6), /* 4()) */
        Action::Error, /* 5(id) */
    ],
    /* STATE 6 */ [
        Action::Error, /* 0($) */
        Action::Error, /* 1(+) */
        Action::Error, /* 2(*) */
        Action::shift(4), /* 3(() */
        Action::Error, /* 4()) */
        Action::shift(5), /* 5(id) */
    ],
    /* STATE 7 */ [
        Action::Error, /* 0($) */
        Action::Error, /* 1(+) */
        Action::Error, /* 2(*) */
        Action::shift(4), /* 3(() */
        Action::Error, /* 4()) */
        Action::shift(5), /* 5(id) */
    ],
    /* STATE 8 */ [
        Action::Error, /* 0($) */
        Action::shift(6), /* 1(+) */
        Action::Error, /* 2(*) */
        Action::Error, /* 3(() */
        Action::shift(11), /* 4()) */
        Action::Error, /* 5(id) */
    ],
    /* STATE 9 */ [
        Action::reduce(1), /* 0($) */
        Action::reduce(1), /* 1(+) */
        Action::shift(7), /* 2(*) */
        Action::Error, /* 3(() */
        Action::reduce(1), /* 4()) */
        Action::Error, /* 5(id) */
    ],
    /* STATE 10 */ [
        Action::reduce(3), /* 0($) */
        Action::reduce(3), /* 1(+) */
        Action::reduce(3), /* 2(*) */
        Action::Error, /* 3(() */
        Action::reduce(3), /* 4()) */
        Action::Error, /* 5(id) */
    ],
    /* STATE 11 */ [
        Action::reduce(5), /* 0($) */
        Action::reduce(5), /* 1(+) */
        Action::reduce(5), /* 2(*) */
        Action::Error, /* 3(() */
        Action::reduce(5), /* 4()) */
        Action::Error, /* 5(id) */
    ],
];

pub const GOTOS: [[Option<StateId>; N_NONTERMINALS]; N_STATES] = [
    /* STATE 0 */ [None, Some(StateId::new(1)), Some(StateId::new(2)), Some(StateId::new(3))],
    /* STATE 1 */ [None, None, None, None],
    /* STATE 2 */ [None, None, None, None],
    /* STATE 3 */ [None, None, None, None],
    /* STATE 4 */ [None, Some(StateId::new(8)), Some(StateId::new(2)), Some(StateId::new(3))],
    /* STATE 5 */ [None, None, None, None],
    /* STATE 6 */ [None, None, Some(StateId::new(9)), Some(StateId::new(3))],
    /* STATE 7 */ [None, None, None, Some(StateId::new(10))],
    /* STATE 8 */ [None, None, None, None],
    /* STATE 9 */ [None, None, None, None],
    /* STATE 10 */ [None, None, None, None],
    /* STATE 11 */ [None, None, None, None],
];

pub fn expr_table() -> Result<ParseTable, InvalidTable> {
    ParseTable::new(
        TERMINAL_LABELS.iter().map(|&s| s.into()).collect(),
        NONTERMINAL_LABELS.iter().map(|&s| s.into()).collect(),
        PRODS
            .iter()
            .zip(PRODUCTION_LABELS)
            .map(|(&(lhs, rhs), label)| Production::new(NonTerminal::new(lhs), rhs.to_vec(), label))
            .collect(),
        ACTIONS.iter().map(|row| row.to_vec()).collect(),
        GOTOS.iter().map(|row| row.to_vec()).collect(),
    )
}
