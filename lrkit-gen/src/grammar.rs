//! Programmatic grammar declaration.
//!
//! A [`GrammarBuilder`] collects terminals, rules and precedence levels by
//! name; [`GrammarBuilder::build`] resolves the names into an augmented
//! [`Grammar`]:
//!
//! - terminal 0 is the end-of-input marker `$`,
//! - non-terminal 0 is `Start`, and production 0 is `Start -> S` where `S`
//!   is the declared start symbol (the left-hand side of the first rule by
//!   default).
//!
//! Any name that is not a declared terminal and never appears on the left of
//! a rule is an error.
//!
//! # Example
//!
//! ```rust
//! use lrkit_gen::GrammarBuilder;
//!
//! let grammar = GrammarBuilder::new()
//!     .terminals(&["+", "*", "id"])
//!     .left(&["+"])
//!     .left(&["*"])
//!     .rule("E", &["E", "+", "E"])
//!     .rule("E", &["E", "*", "E"])
//!     .rule("E", &["id"])
//!     .build()?;
//! assert_eq!(grammar.productions().len(), 4);
//! # Ok::<(), lrkit_gen::GrammarError>(())
//! ```

use crate::error::GrammarError;
use crate::symtab::Symtab;
use lrkit::{NonTerminal, ProdId, Production, Symbol, Terminal};
use smartstring::alias::String;
use std::fmt::Write;

pub const END_LABEL: &str = "$";
pub const START_LABEL: &str = "Start";

/// Associativity of a precedence level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Assoc {
    Left,
    Right,
    NonAssoc,
}

/// A precedence level; higher levels bind tighter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Precedence {
    pub level: u16,
    pub assoc: Assoc,
}

#[derive(Debug, Clone)]
struct RuleDecl {
    lhs: String,
    rhs: Vec<String>,
    label: Option<String>,
    prec: Option<String>,
}

/// Collects a grammar declaration. See the [module docs](self).
#[derive(Debug, Clone, Default)]
pub struct GrammarBuilder {
    terminals: Vec<String>,
    rules: Vec<RuleDecl>,
    levels: Vec<(Assoc, Vec<String>)>,
    start: Option<String>,
    error: Option<GrammarError>,
}

impl GrammarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn terminal(&mut self, name: &str) -> &mut Self {
        self.terminals.push(name.into());
        self
    }

    pub fn terminals(&mut self, names: &[&str]) -> &mut Self {
        self.terminals.extend(names.iter().map(|&n| String::from(n)));
        self
    }

    /// Adds the rule `lhs -> rhs`. An empty `rhs` is an ε-production.
    pub fn rule(&mut self, lhs: &str, rhs: &[&str]) -> &mut Self {
        self.rules.push(RuleDecl {
            lhs: lhs.into(),
            rhs: rhs.iter().map(|&s| String::from(s)).collect(),
            label: None,
            prec: None,
        });
        self
    }

    /// Names the most recently added rule.
    pub fn label(&mut self, label: &str) -> &mut Self {
        match self.rules.last_mut() {
            Some(rule) => rule.label = Some(label.into()),
            None => self.fail(GrammarError::DanglingModifier { modifier: "label" }),
        }
        self
    }

    /// Gives the most recently added rule the precedence of `terminal`
    /// instead of that of its rightmost terminal.
    pub fn prec(&mut self, terminal: &str) -> &mut Self {
        match self.rules.last_mut() {
            Some(rule) => rule.prec = Some(terminal.into()),
            None => self.fail(GrammarError::DanglingModifier { modifier: "prec" }),
        }
        self
    }

    /// Declares a left-associative level, binding tighter than every level
    /// declared before it.
    pub fn left(&mut self, terminals: &[&str]) -> &mut Self {
        self.level(Assoc::Left, terminals)
    }

    pub fn right(&mut self, terminals: &[&str]) -> &mut Self {
        self.level(Assoc::Right, terminals)
    }

    pub fn nonassoc(&mut self, terminals: &[&str]) -> &mut Self {
        self.level(Assoc::NonAssoc, terminals)
    }

    pub fn start(&mut self, name: &str) -> &mut Self {
        self.start = Some(name.into());
        self
    }

    fn level(&mut self, assoc: Assoc, terminals: &[&str]) -> &mut Self {
        self.levels
            .push((assoc, terminals.iter().map(|&s| String::from(s)).collect()));
        self
    }

    fn fail(&mut self, err: GrammarError) {
        self.error.get_or_insert(err);
    }

    pub fn build(&self) -> Result<Grammar, GrammarError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }

        let mut terminals = Symtab::new();
        terminals.add(END_LABEL);
        for name in &self.terminals {
            check_reserved(name)?;
            if terminals.contains(name) {
                return Err(GrammarError::DuplicateTerminal { name: name.clone() });
            }
            terminals.add(name);
        }

        let first = self.rules.first().ok_or(GrammarError::Empty)?;
        let mut nonterminals = Symtab::new();
        nonterminals.add(START_LABEL);
        for rule in &self.rules {
            check_reserved(&rule.lhs)?;
            if terminals.contains(&rule.lhs) {
                return Err(GrammarError::TerminalAsLhs {
                    name: rule.lhs.clone(),
                });
            }
            nonterminals.add(&rule.lhs);
        }
        if terminals.len() > usize::from(u16::MAX) {
            return Err(GrammarError::TooLarge {
                what: "terminals",
                count: terminals.len(),
            });
        }
        if nonterminals.len() > usize::from(u16::MAX) {
            return Err(GrammarError::TooLarge {
                what: "non-terminals",
                count: nonterminals.len(),
            });
        }

        let start_name = self.start.as_ref().unwrap_or(&first.lhs);
        let start = nonterminals
            .idx(start_name)
            .filter(|&i| i != 0)
            .ok_or_else(|| GrammarError::NoProductions {
                name: start_name.clone(),
            })?;

        let mut term_prec = vec![None; terminals.len()];
        for (level, (assoc, names)) in self.levels.iter().enumerate() {
            let prec = Precedence {
                level: level as u16 + 1,
                assoc: *assoc,
            };
            for name in names {
                let t = lookup_terminal(&terminals, name)?;
                if term_prec[t.index()].replace(prec).is_some() {
                    return Err(GrammarError::DuplicatePrecedence { name: name.clone() });
                }
            }
        }

        let mut productions = Vec::with_capacity(self.rules.len() + 1);
        let mut prod_prec = Vec::with_capacity(self.rules.len() + 1);
        productions.push(Production::new(
            NonTerminal::START,
            vec![Symbol::NonTerminal(NonTerminal::new(start as u16))],
            "start",
        ));
        prod_prec.push(None);

        for (i, rule) in self.rules.iter().enumerate() {
            let id = i + 1;
            let lhs = NonTerminal::new(nonterminals.idx(&rule.lhs).unwrap_or_default() as u16);
            let mut rhs = Vec::with_capacity(rule.rhs.len());
            for name in &rule.rhs {
                check_reserved(name)?;
                let sym = if let Some(t) = terminals.idx(name) {
                    Symbol::Terminal(Terminal::new(t as u16))
                } else if let Some(n) = nonterminals.idx(name) {
                    Symbol::NonTerminal(NonTerminal::new(n as u16))
                } else {
                    return Err(GrammarError::UnknownSymbol {
                        name: name.clone(),
                        rule: id,
                    });
                };
                rhs.push(sym);
            }
            let label = match &rule.label {
                Some(label) => label.clone(),
                None => format!("rule{}", id).into(),
            };
            let prod = Production::new(lhs, rhs, &label);
            let prec = match &rule.prec {
                Some(name) => term_prec[lookup_terminal(&terminals, name)?.index()],
                None => prod.rightmost_terminal().and_then(|t| term_prec[t.index()]),
            };
            productions.push(prod);
            prod_prec.push(prec);
        }

        Ok(Grammar {
            terminals,
            nonterminals,
            productions,
            term_prec,
            prod_prec,
        })
    }
}

fn check_reserved(name: &str) -> Result<(), GrammarError> {
    if name == END_LABEL || name == START_LABEL {
        return Err(GrammarError::ReservedName { name: name.into() });
    }
    Ok(())
}

fn lookup_terminal(terminals: &Symtab, name: &str) -> Result<Terminal, GrammarError> {
    terminals
        .idx(name)
        .filter(|&t| t != 0)
        .map(|t| Terminal::new(t as u16))
        .ok_or_else(|| GrammarError::UnknownTerminal { name: name.into() })
}

/// An augmented grammar with resolved symbols and precedences.
#[derive(Debug, Clone)]
pub struct Grammar {
    terminals: Symtab,
    nonterminals: Symtab,
    productions: Vec<Production>,
    term_prec: Vec<Option<Precedence>>,
    prod_prec: Vec<Option<Precedence>>,
}

impl Grammar {
    pub fn builder() -> GrammarBuilder {
        GrammarBuilder::new()
    }

    pub fn terminal_count(&self) -> usize {
        self.terminals.len()
    }

    pub fn nonterminal_count(&self) -> usize {
        self.nonterminals.len()
    }

    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    /// The user's start symbol (the right-hand side of production 0).
    pub fn start(&self) -> NonTerminal {
        match self.productions[0].rhs[0] {
            Symbol::NonTerminal(n) => n,
            Symbol::Terminal(_) => NonTerminal::START,
        }
    }

    pub fn terminal(&self, name: &str) -> Option<Terminal> {
        self.terminals.idx(name).map(|t| Terminal::new(t as u16))
    }

    pub fn nonterminal(&self, name: &str) -> Option<NonTerminal> {
        self.nonterminals.idx(name).map(|n| NonTerminal::new(n as u16))
    }

    pub fn terminal_label(&self, terminal: Terminal) -> &str {
        self.terminals.sym(terminal.index()).unwrap_or("?")
    }

    pub fn nonterminal_label(&self, nonterminal: NonTerminal) -> &str {
        self.nonterminals.sym(nonterminal.index()).unwrap_or("?")
    }

    pub fn symbol_label(&self, symbol: Symbol) -> &str {
        match symbol {
            Symbol::Terminal(t) => self.terminal_label(t),
            Symbol::NonTerminal(n) => self.nonterminal_label(n),
        }
    }

    pub fn terminal_precedence(&self, terminal: Terminal) -> Option<Precedence> {
        self.term_prec.get(terminal.index()).copied().flatten()
    }

    pub fn production_precedence(&self, prod: ProdId) -> Option<Precedence> {
        self.prod_prec.get(prod.index()).copied().flatten()
    }

    /// Renders a production as `E -> E + T`; an ε-production as `A ->`.
    pub fn production_text(&self, prod: ProdId) -> String {
        let mut out = String::new();
        let Some(p) = self.productions.get(prod.index()) else {
            return out;
        };
        let _ = write!(out, "{} ->", self.nonterminal_label(p.lhs));
        for sym in &p.rhs {
            let _ = write!(out, " {}", self.symbol_label(*sym));
        }
        out
    }

    pub(crate) fn terminal_labels(&self) -> Vec<String> {
        self.terminals.to_vec()
    }

    pub(crate) fn nonterminal_labels(&self) -> Vec<String> {
        self.nonterminals.to_vec()
    }
}
