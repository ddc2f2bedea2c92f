//! Hand-built SLR(1) tables for small grammars, laid out the way generated
//! table data is: one row per state, one column per terminal (`$` first).
//!
//! Every grammar is augmented with `Start -> S` as production 0 and
//! non-terminal 0.

use crate::symbol::{NonTerminal, Production, StateId, Symbol, Terminal};
use crate::table::{Action, ParseTable};
use smartstring::alias::String;

const START: NonTerminal = NonTerminal::new(0);
const S: NonTerminal = NonTerminal::new(1);
const A_NT: NonTerminal = NonTerminal::new(2);
const A: Terminal = Terminal::new(1);
const B: Terminal = Terminal::new(2);

pub const fn goto(state: u32) -> Option<StateId> {
    Some(StateId::new(state))
}

pub struct Rows {
    pub terminals: Vec<String>,
    pub nonterminals: Vec<String>,
    pub productions: Vec<Production>,
    pub actions: Vec<Vec<Action>>,
    pub gotos: Vec<Vec<Option<StateId>>>,
}

impl Rows {
    pub fn assemble(self) -> ParseTable {
        ParseTable::new(
            self.terminals,
            self.nonterminals,
            self.productions,
            self.actions,
            self.gotos,
        )
        .expect("well-shaped test table")
    }
}

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|&n| n.into()).collect()
}

fn start_production() -> Production {
    Production::new(START, vec![Symbol::from(S)], "start")
}

/// `S -> a`
pub fn minimal_rows() -> Rows {
    Rows {
        terminals: labels(&["$", "a"]),
        nonterminals: labels(&["Start", "S"]),
        productions: vec![
            start_production(),
            Production::new(S, vec![Symbol::from(A)], "s1"),
        ],
        actions: vec![
            /* STATE 0 */ vec![Action::Error, Action::shift(2)],
            /* STATE 1 */ vec![Action::Accept, Action::Error],
            /* STATE 2 */ vec![Action::reduce(1), Action::Error],
        ],
        gotos: vec![
            /* STATE 0 */ vec![None, goto(1)],
            /* STATE 1 */ vec![None, None],
            /* STATE 2 */ vec![None, None],
        ],
    }
}

pub fn minimal() -> ParseTable {
    minimal_rows().assemble()
}

/// `S -> S a | a`
pub fn left_recursive() -> ParseTable {
    Rows {
        terminals: labels(&["$", "a"]),
        nonterminals: labels(&["Start", "S"]),
        productions: vec![
            start_production(),
            Production::new(S, vec![Symbol::from(S), Symbol::from(A)], "s1"),
            Production::new(S, vec![Symbol::from(A)], "s2"),
        ],
        actions: vec![
            /* STATE 0 */ vec![Action::Error, Action::shift(2)],
            /* STATE 1 */ vec![Action::Accept, Action::shift(3)],
            /* STATE 2 */ vec![Action::reduce(2), Action::reduce(2)],
            /* STATE 3 */ vec![Action::reduce(1), Action::reduce(1)],
        ],
        gotos: vec![
            /* STATE 0 */ vec![None, goto(1)],
            /* STATE 1 */ vec![None, None],
            /* STATE 2 */ vec![None, None],
            /* STATE 3 */ vec![None, None],
        ],
    }
    .assemble()
}

/// `S -> a b`, with an extra terminal `c` the grammar never uses.
pub fn sequence() -> ParseTable {
    Rows {
        terminals: labels(&["$", "a", "b", "c"]),
        nonterminals: labels(&["Start", "S"]),
        productions: vec![
            start_production(),
            Production::new(S, vec![Symbol::from(A), Symbol::from(B)], "s1"),
        ],
        actions: vec![
            /* STATE 0 */
            vec![Action::Error, Action::shift(2), Action::Error, Action::Error],
            /* STATE 1 */
            vec![Action::Accept, Action::Error, Action::Error, Action::Error],
            /* STATE 2 */
            vec![Action::Error, Action::Error, Action::shift(3), Action::Error],
            /* STATE 3 */
            vec![Action::reduce(1), Action::Error, Action::Error, Action::Error],
        ],
        gotos: vec![
            /* STATE 0 */ vec![None, goto(1)],
            /* STATE 1 */ vec![None, None],
            /* STATE 2 */ vec![None, None],
            /* STATE 3 */ vec![None, None],
        ],
    }
    .assemble()
}

/// `S -> A a`, `A -> ε`
pub fn empty_production() -> ParseTable {
    Rows {
        terminals: labels(&["$", "a"]),
        nonterminals: labels(&["Start", "S", "A"]),
        productions: vec![
            start_production(),
            Production::new(S, vec![Symbol::from(A_NT), Symbol::from(A)], "s1"),
            Production::new(A_NT, Vec::new(), "a1"),
        ],
        actions: vec![
            /* STATE 0 */ vec![Action::Error, Action::reduce(2)],
            /* STATE 1 */ vec![Action::Accept, Action::Error],
            /* STATE 2 */ vec![Action::Error, Action::shift(3)],
            /* STATE 3 */ vec![Action::reduce(1), Action::Error],
        ],
        gotos: vec![
            /* STATE 0 */ vec![None, goto(1), goto(2)],
            /* STATE 1 */ vec![None, None, None],
            /* STATE 2 */ vec![None, None, None],
            /* STATE 3 */ vec![None, None, None],
        ],
    }
    .assemble()
}

/// `S -> a` with the goto on `S` pointing past the last state.
pub fn with_bad_goto() -> ParseTable {
    let mut rows = minimal_rows();
    rows.gotos[0][1] = goto(99);
    rows.assemble()
}

/// `S -> a` reducing by a production that does not exist.
pub fn with_bad_reduce() -> ParseTable {
    let mut rows = minimal_rows();
    rows.actions[2][0] = Action::reduce(5);
    rows.assemble()
}

/// `S -> a` whose reduction lands in a state without a goto on `S`.
pub fn with_missing_goto() -> ParseTable {
    let mut rows = minimal_rows();
    rows.gotos[0][1] = None;
    rows.assemble()
}
