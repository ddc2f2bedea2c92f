//! Errors reported while building a grammar or its tables.

use lrkit::{InvalidTable, StateId};
use smartstring::alias::String;
use thiserror::Error;

/// A grammar that cannot be turned into a conflict-free table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("grammar has no productions")]
    Empty,

    #[error("`{name}` is reserved")]
    ReservedName { name: String },

    #[error("terminal `{name}` is declared twice")]
    DuplicateTerminal { name: String },

    #[error("terminal `{name}` cannot be the left-hand side of a rule")]
    TerminalAsLhs { name: String },

    #[error("unknown symbol `{name}` in rule {rule}")]
    UnknownSymbol { name: String, rule: usize },

    #[error("unknown terminal `{name}`")]
    UnknownTerminal { name: String },

    #[error("start symbol `{name}` has no productions")]
    NoProductions { name: String },

    #[error("terminal `{name}` appears in more than one precedence level")]
    DuplicatePrecedence { name: String },

    #[error("`{modifier}` given before any rule")]
    DanglingModifier { modifier: &'static str },

    #[error("grammar has {count} {what}, more than the table can index")]
    TooLarge { what: &'static str, count: usize },

    /// An unresolvable conflict. `first` and `second` describe the competing
    /// actions, e.g. `shift 4` and `reduce E -> E + E`.
    #[error("conflict in state {state} on `{terminal}`: {first} vs {second}")]
    Conflict {
        state: StateId,
        terminal: String,
        first: String,
        second: String,
    },

    /// The generated rows could not be assembled into a table.
    #[error("generated table is malformed: {0}")]
    Table(#[from] InvalidTable),
}
