//! Copyright (c) 2005–2025 IKH Software, Inc.
//!
//! Released under the terms of the GNU Lesser General Public License, version 3.0
//! or (at your option) any later version (LGPL-3.0-or-later).
//!
//! SLR(1) table generation for `lrkit`.
//!
//! Grammars are declared in Rust with a [`GrammarBuilder`]; [`generate`]
//! augments the grammar, builds the canonical LR(0) collection, computes
//! FIRST/FOLLOW sets and fills a conflict-free [`lrkit::ParseTable`].
//! Shift/reduce conflicts are settled at build time by precedence and
//! associativity declarations; anything else is reported as a
//! [`GrammarError::Conflict`], so the engine never sees an ambiguous cell.
//!
//! [`write_rust`] turns a generated table into Rust source for use from a
//! `build.rs` script.
//!
//! # Example
//!
//! ```rust
//! use lrkit::{IterSource, Terminal};
//! use lrkit_gen::{GrammarBuilder, generate};
//!
//! let grammar = GrammarBuilder::new()
//!     .terminals(&["+", "id"])
//!     .left(&["+"])
//!     .rule("E", &["E", "+", "E"])
//!     .rule("E", &["id"])
//!     .build()?;
//! let table = generate(&grammar)?;
//!
//! let plus = table.terminal("+").unwrap();
//! let id = table.terminal("id").unwrap();
//! let tree = lrkit::parse(&table, IterSource::new([id, plus, id, plus, id, Terminal::END]))?;
//! assert_eq!(tree.display(&table), "E(E(E(id), +, E(id)), +, E(id))");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod codegen;
mod error;
mod grammar;
mod report;
mod slr;
mod symtab;

pub use crate::codegen::write_rust;
pub use crate::error::GrammarError;
pub use crate::grammar::{Assoc, Grammar, GrammarBuilder, Precedence};
pub use crate::report::write_report;
pub use crate::slr::{Analysis, Automaton, Item, ItemSet};

use lrkit::ParseTable;

/// Builds the SLR(1) table for `grammar`.
///
/// With `debug` logging enabled, the full analysis report (productions, item
/// sets, FIRST and FOLLOW) is logged before the table is filled.
pub fn generate(grammar: &Grammar) -> Result<ParseTable, GrammarError> {
    let automaton = Automaton::build(grammar.productions());
    let analysis = Analysis::new(grammar);
    if log::log_enabled!(log::Level::Debug) {
        let mut buf = Vec::new();
        if write_report(&mut buf, grammar, &automaton, &analysis).is_ok() {
            log::debug!("{}", String::from_utf8_lossy(&buf));
        }
    }

    let tables = slr::construct_slr(grammar, &automaton, &analysis.follow)?;
    log::debug!(
        "Generated {} states, {} conflicts resolved by precedence",
        automaton.len(),
        tables.resolved
    );
    let table = ParseTable::new(
        grammar.terminal_labels(),
        grammar.nonterminal_labels(),
        grammar.productions().to_vec(),
        tables.actions,
        tables.gotos,
    )?;
    Ok(table)
}
