use lrkit::{Action, ParseTable, ParserData, StateId, Symbol, Terminal};
use std::io::{self, Write};

/// Writes Rust source for `table`: constant label, production, action and
/// goto arrays plus a `pub fn <fn_name>() -> Result<ParseTable, InvalidTable>`
/// that assembles them. The output is meant to be `include!`d from a build
/// script's `OUT_DIR` and only depends on `lrkit`.
pub fn write_rust<W: Write>(out: &mut W, table: &ParseTable, fn_name: &str) -> io::Result<()> {
    let n_terms = table.terminal_count();
    let n_nonterms = table.nonterminal_count();
    let n_prods = table.production_count();
    let n_states = table.state_count();

    writeln!(out, "// Produced by lrkit-gen. Do not edit.")?;
    writeln!(out)?;
    writeln!(out, "#[allow(unused_imports)]")?;
    writeln!(
        out,
        "use lrkit::{{Action, InvalidTable, NonTerminal, ParseTable, Production, StateId, Symbol, Terminal}};"
    )?;
    writeln!(out)?;
    writeln!(out, "pub const N_TERMINALS: usize = {};", n_terms)?;
    writeln!(out, "pub const N_NONTERMINALS: usize = {};", n_nonterms)?;
    writeln!(out, "pub const N_PRODUCTIONS: usize = {};", n_prods)?;
    writeln!(out, "pub const N_STATES: usize = {};", n_states)?;
    writeln!(out)?;

    writeln!(out, "pub const TERMINAL_LABELS: [&str; N_TERMINALS] = [")?;
    for (i, s) in table.terminals().iter().enumerate() {
        writeln!(out, "    {:?}, // {}", s.as_str(), i)?;
    }
    writeln!(out, "];\n")?;

    writeln!(out, "pub const NONTERMINAL_LABELS: [&str; N_NONTERMINALS] = [")?;
    for (i, s) in table.nonterminals().iter().enumerate() {
        writeln!(out, "    {:?}, // {}", s.as_str(), i)?;
    }
    writeln!(out, "];\n")?;

    writeln!(out, "pub const PRODUCTION_LABELS: [&str; N_PRODUCTIONS] = [")?;
    for (i, p) in table.productions().iter().enumerate() {
        writeln!(out, "    {:?}, // {}", p.label.as_str(), i)?;
    }
    writeln!(out, "];\n")?;

    writeln!(out, "const PRODS: [(u16, &[Symbol]); N_PRODUCTIONS] = [")?;
    for (i, p) in table.productions().iter().enumerate() {
        write!(out, "    ({}, &[", p.lhs.index())?;
        for (j, sym) in p.rhs.iter().enumerate() {
            if j > 0 {
                write!(out, ", ")?;
            }
            write_symbol(out, *sym)?;
        }
        writeln!(out, "]), // {}", i)?;
    }
    writeln!(out, "];\n")?;

    writeln!(
        out,
        "pub const ACTIONS: [[Action; N_TERMINALS]; N_STATES] = ["
    )?;
    for state in 0..n_states {
        let state = StateId::new(state as u32);
        writeln!(out, "    /* STATE {} */ [", state)?;
        for (j, action) in table.action_row(state).unwrap_or_default().iter().enumerate() {
            let label = table.terminal_label(Terminal::new(j as u16));
            match action {
                Action::Error => write!(out, "        Action::Error,")?,
                Action::Accept => write!(out, "        Action::Accept,")?,
                Action::Shift(s) => write!(out, "        Action::shift({}),", s)?,
                Action::Reduce(p) => write!(out, "        Action::reduce({}),", p.index())?,
            }
            writeln!(out, " /* {}({}) */", j, label)?;
        }
        writeln!(out, "    ],")?;
    }
    writeln!(out, "];\n")?;

    writeln!(
        out,
        "pub const GOTOS: [[Option<StateId>; N_NONTERMINALS]; N_STATES] = ["
    )?;
    for state in 0..n_states {
        let state = StateId::new(state as u32);
        write!(out, "    /* STATE {} */ [", state)?;
        for (j, target) in table.goto_row(state).unwrap_or_default().iter().enumerate() {
            if j > 0 {
                write!(out, ", ")?;
            }
            match target {
                Some(s) => write!(out, "Some(StateId::new({}))", s)?,
                None => write!(out, "None")?,
            }
        }
        writeln!(out, "],")?;
    }
    writeln!(out, "];\n")?;

    writeln!(
        out,
        "pub fn {}() -> Result<ParseTable, InvalidTable> {{",
        fn_name
    )?;
    writeln!(out, "    ParseTable::new(")?;
    writeln!(out, "        TERMINAL_LABELS.iter().map(|&s| s.into()).collect(),")?;
    writeln!(out, "        NONTERMINAL_LABELS.iter().map(|&s| s.into()).collect(),")?;
    writeln!(out, "        PRODS")?;
    writeln!(out, "            .iter()")?;
    writeln!(out, "            .zip(PRODUCTION_LABELS)")?;
    writeln!(
        out,
        "            .map(|(&(lhs, rhs), label)| Production::new(NonTerminal::new(lhs), rhs.to_vec(), label))"
    )?;
    writeln!(out, "            .collect(),")?;
    writeln!(out, "        ACTIONS.iter().map(|row| row.to_vec()).collect(),")?;
    writeln!(out, "        GOTOS.iter().map(|row| row.to_vec()).collect(),")?;
    writeln!(out, "    )")?;
    writeln!(out, "}}")?;
    Ok(())
}

fn write_symbol<W: Write>(out: &mut W, sym: Symbol) -> io::Result<()> {
    match sym {
        Symbol::Terminal(t) => write!(out, "Symbol::Terminal(Terminal::new({}))", t.index()),
        Symbol::NonTerminal(n) => write!(out, "Symbol::NonTerminal(NonTerminal::new({}))", n.index()),
    }
}
