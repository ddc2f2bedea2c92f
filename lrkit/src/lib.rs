//! Copyright (c) 2005–2025 IKH Software, Inc.
//!
//! Released under the terms of the GNU Lesser General Public License, version 3.0
//! or (at your option) any later version (LGPL-3.0-or-later).
//!
//! Table-driven LR parsing engine.
//!
//! `lrkit` runs the shift/reduce/goto automaton over a precompiled parse
//! table and builds an owned parse tree from a lazily pulled token stream.
//! Tables come from `lrkit-gen` or any other generator implementing
//! [`ParserData`]; the engine itself never resolves conflicts.
//!
//! Key components:
//! - `table`: [`Action`], the [`ParserData`] contract and the dense [`ParseTable`]
//! - `parser`: the [`Parser`] driver and the one-shot [`parse`] function
//! - `tree`: [`Node`], the parse tree handed back on accept
//! - `source`: [`Token`] and the pull-based [`TokenSource`]
//! - `error`: [`ParseError`], [`SyntaxError`] and [`InvalidTable`]
//!
//! # Example
//!
//! ```rust
//! use lrkit::{Action, IterSource, NonTerminal, ParseTable, Production, StateId, Symbol, Terminal};
//!
//! // Start -> S ; S -> a
//! let s = NonTerminal::new(1);
//! let a = Terminal::new(1);
//! let table = ParseTable::new(
//!     vec!["$".into(), "a".into()],
//!     vec!["Start".into(), "S".into()],
//!     vec![
//!         Production::new(NonTerminal::START, vec![Symbol::from(s)], "start"),
//!         Production::new(s, vec![Symbol::from(a)], "s1"),
//!     ],
//!     vec![
//!         vec![Action::Error, Action::shift(2)],
//!         vec![Action::Accept, Action::Error],
//!         vec![Action::reduce(1), Action::Error],
//!     ],
//!     vec![
//!         vec![None, Some(StateId::new(1))],
//!         vec![None, None],
//!         vec![None, None],
//!     ],
//! )?;
//!
//! let tree = lrkit::parse(&table, IterSource::new([a, Terminal::END]))?;
//! assert_eq!(tree.display(&table), "S(a)");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod diagnostics;
mod error;
mod parser;
mod source;
mod stack;
mod symbol;
mod table;
mod tree;

#[cfg(test)]
mod test_table_data;

pub use crate::error::{InvalidTable, ParseError, Position, Span, SyntaxError};
pub use crate::parser::{Parser, ParserStats, parse};
pub use crate::source::{
    BasicToken, CancelFlag, Cancellable, Cancelled, IterSource, Token, TokenSource,
};
pub use crate::stack::ParserStack;
pub use crate::symbol::{NonTerminal, ProdId, Production, StateId, Symbol, Terminal};
pub use crate::table::{Action, ParseTable, ParserData};
pub use crate::tree::{Leaves, Node};
