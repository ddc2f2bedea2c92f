//! Human-readable dump of a grammar's analysis: productions, LR(0) item
//! sets, FIRST and FOLLOW sets.
//!
//! The format is line-oriented and prefixed for easy grepping:
//!
//! ```text
//! PS,<number of productions>
//! P,<index>,<LHS> -> <RHS symbols>
//! CS,<number of states>
//! C,<state>,<LHS> -> <symbols with a dot>
//! FIRST,<nonterminal>,{...}
//! FOLLOW,<nonterminal>,{...}
//! ```

use crate::grammar::Grammar;
use crate::slr::{Analysis, Automaton};
use lrkit::{NonTerminal, ProdId, Terminal};
use std::collections::BTreeSet;
use std::io::{self, Write};

/// Writes the whole report.
pub fn write_report<W: Write>(
    out: &mut W,
    grammar: &Grammar,
    automaton: &Automaton,
    analysis: &Analysis,
) -> io::Result<()> {
    write_prods(out, grammar)?;
    writeln!(out)?;
    write_set(out, grammar, automaton)?;
    write_fstflw(out, grammar, &analysis.first, Some(&analysis.nullable))?;
    writeln!(out)?;
    write_fstflw(out, grammar, &analysis.follow, None)?;
    Ok(())
}

/// Writes the grammar productions, one per line.
pub fn write_prods<W: Write>(out: &mut W, grammar: &Grammar) -> io::Result<()> {
    writeln!(out, "PS,{}\n", grammar.productions().len())?;
    for i in 0..grammar.productions().len() {
        writeln!(out, "P,{},{}", i, grammar.production_text(ProdId::new(i as u32)))?;
    }
    Ok(())
}

/// Writes the canonical collection, one item per line, with `.` marking the
/// dot position.
pub fn write_set<W: Write>(out: &mut W, grammar: &Grammar, automaton: &Automaton) -> io::Result<()> {
    let prods = grammar.productions();
    writeln!(out, "CS,{}\n", automaton.len())?;
    for (i, state) in automaton.states.iter().enumerate() {
        for item in state {
            let p = &prods[item.prod];
            write!(out, "C,{},{} -> ", i, grammar.nonterminal_label(p.lhs))?;
            for (j, sym) in p.rhs.iter().enumerate() {
                if j == item.dot {
                    write!(out, ". ")?;
                }
                write!(out, "{} ", grammar.symbol_label(*sym))?;
            }
            if p.len() == item.dot {
                write!(out, ".")?;
            }
            writeln!(out)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Writes FIRST sets when `nullable` is given (marking nullable symbols with
/// `` `empty' ``), FOLLOW sets otherwise.
pub fn write_fstflw<W: Write>(
    out: &mut W,
    grammar: &Grammar,
    vs: &[BTreeSet<Terminal>],
    nullable: Option<&[bool]>,
) -> io::Result<()> {
    let label = if nullable.is_some() { "FIRST" } else { "FOLLOW" };
    for (n, set) in vs.iter().enumerate() {
        let name = grammar.nonterminal_label(NonTerminal::new(n as u16));
        write!(out, "{},{},{{", label, name)?;
        if nullable.is_some_and(|nullable| nullable[n]) {
            write!(out, "`empty', ")?;
        }
        for &t in set {
            write!(out, "{}, ", grammar.terminal_label(t))?;
        }
        writeln!(out, "}}")?;
    }
    Ok(())
}
