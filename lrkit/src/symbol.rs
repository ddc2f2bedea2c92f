//! Grammar symbols, state and production identifiers.
//!
//! All identifiers are small `Copy` newtypes over unsigned integers so that
//! they can be used directly as row/column indices into the flat action and
//! goto tables. Conversions into `usize` are provided through `From`, the same
//! way generated table data indexes its rows.

use smartstring::alias::String;
use std::fmt;

/// Identifier of a lexical category (token kind).
///
/// [`Terminal::END`] (index `0`) is reserved for the end-of-input marker in
/// every table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Terminal(u16);

impl Terminal {
    /// The reserved end-of-input terminal.
    pub const END: Self = Self(0);

    #[inline]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_end(self) -> bool {
        self.0 == 0
    }
}

impl From<Terminal> for usize {
    fn from(t: Terminal) -> Self {
        t.0 as usize
    }
}

/// Identifier of a grammar rule family.
///
/// Index `0` is the augmented start symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonTerminal(u16);

impl NonTerminal {
    /// The augmented start symbol.
    pub const START: Self = Self(0);

    #[inline]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<NonTerminal> for usize {
    fn from(n: NonTerminal) -> Self {
        n.0 as usize
    }
}

/// A grammar symbol: either a terminal or a non-terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    Terminal(Terminal),
    NonTerminal(NonTerminal),
}

impl From<Terminal> for Symbol {
    fn from(t: Terminal) -> Self {
        Symbol::Terminal(t)
    }
}

impl From<NonTerminal> for Symbol {
    fn from(n: NonTerminal) -> Self {
        Symbol::NonTerminal(n)
    }
}

/// A row in the action/goto tables. State `0` is the initial state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StateId(u32);

impl StateId {
    pub const START: Self = Self(0);

    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<StateId> for usize {
    fn from(s: StateId) -> Self {
        s.0 as usize
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable production index, used as the payload of reduce actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProdId(u32);

impl ProdId {
    /// The augmented start production `Start -> S`.
    pub const START: Self = Self(0);

    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<ProdId> for usize {
    fn from(p: ProdId) -> Self {
        p.0 as usize
    }
}

/// One grammar rule: a left-hand non-terminal and its ordered right-hand side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
    pub lhs: NonTerminal,
    pub rhs: Vec<Symbol>,
    /// Human-readable name, e.g. `expr1`.
    pub label: String,
}

impl Production {
    pub fn new(lhs: NonTerminal, rhs: Vec<Symbol>, label: &str) -> Self {
        Self {
            lhs,
            rhs,
            label: label.into(),
        }
    }

    /// Number of right-hand-side symbols, i.e. how many stack entries a
    /// reduction by this production pops.
    #[inline]
    pub fn len(&self) -> usize {
        self.rhs.len()
    }

    /// `true` for an ε-production.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rhs.is_empty()
    }

    /// Index of the rightmost terminal on the right-hand side, if any.
    pub fn rightmost_terminal(&self) -> Option<Terminal> {
        self.rhs.iter().rev().find_map(|sym| match sym {
            Symbol::Terminal(t) => Some(*t),
            Symbol::NonTerminal(_) => None,
        })
    }
}
