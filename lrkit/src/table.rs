//! The table model: parser actions, the [`ParserData`] contract and the dense
//! runtime [`ParseTable`].
//!
//! Tables are immutable once built and are read by any number of concurrent
//! parses. Every entry is resolved ahead of time: the engine never sees a
//! conflict, and a missing entry is a syntax error rather than an ambiguity.

use crate::error::InvalidTable;
use crate::symbol::{NonTerminal, ProdId, Production, StateId, Symbol, Terminal};
use smartstring::alias::String;

/// A parser action for one (state, terminal) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Action {
    #[default]
    Error,
    Accept,
    Shift(StateId),
    Reduce(ProdId),
}

impl Action {
    #[inline]
    pub const fn shift(state: u32) -> Self {
        Action::Shift(StateId::new(state))
    }

    #[inline]
    pub const fn reduce(prod: u32) -> Self {
        Action::Reduce(ProdId::new(prod))
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Action::Error)
    }
}

/// Read-only access to a compiled LR automaton.
///
/// Implemented by [`ParseTable`]; generated table types may implement it
/// directly. Implementations must be immutable for as long as any parse uses
/// them.
pub trait ParserData {
    fn state_count(&self) -> usize;
    fn terminal_count(&self) -> usize;
    fn nonterminal_count(&self) -> usize;
    fn production_count(&self) -> usize;

    /// The initial state of the automaton.
    fn start_state(&self) -> StateId {
        StateId::START
    }

    /// The reserved end-of-input terminal.
    fn end_terminal(&self) -> Terminal {
        Terminal::END
    }

    /// Looks up the action for `(state, terminal)`.
    ///
    /// Fails only when `state` does not exist. A terminal the table does not
    /// know, or a pair without a rule, is [`Action::Error`].
    fn action(&self, state: StateId, terminal: Terminal) -> Result<Action, InvalidTable>;

    /// Looks up the state to enter after reducing to `nonterminal` with
    /// `state` exposed on top of the stack.
    ///
    /// An undefined pair is a table-generation bug reported as
    /// [`InvalidTable::MissingGoto`].
    fn goto(&self, state: StateId, nonterminal: NonTerminal) -> Result<StateId, InvalidTable>;

    fn production(&self, prod: ProdId) -> Result<&Production, InvalidTable>;

    fn terminal_label(&self, terminal: Terminal) -> &str;
    fn nonterminal_label(&self, nonterminal: NonTerminal) -> &str;

    /// Terminals that have a non-error action in `state`, in index order.
    fn expected_terminals(&self, state: StateId) -> Vec<Terminal> {
        (0..self.terminal_count())
            .map(|t| Terminal::new(t as u16))
            .filter(|&t| matches!(self.action(state, t), Ok(action) if !action.is_error()))
            .collect()
    }

    /// Checks that the table is internally consistent.
    ///
    /// Every shift and goto target must be an existing state, every reduce must
    /// name an existing production, every production must reference existing
    /// symbols, the end terminal must never be shifted, accept must only happen
    /// on the end terminal, and at least one accept must exist.
    fn validate(&self) -> Result<(), InvalidTable> {
        let n_states = self.state_count();
        let n_prods = self.production_count();
        if n_states == 0 {
            return Err(InvalidTable::Empty);
        }
        if self.terminal_count() == 0 {
            return Err(InvalidTable::NoTerminals);
        }
        if n_prods == 0 {
            return Err(InvalidTable::NoProductions);
        }
        check_id_ranges(
            self.terminal_count(),
            self.nonterminal_count(),
            n_states,
            n_prods,
        )?;
        let start = self.start_state();
        if start.index() >= n_states {
            return Err(InvalidTable::StateOutOfRange {
                state: start,
                count: n_states,
            });
        }

        for p in 0..n_prods {
            let prod_id = ProdId::new(p as u32);
            let prod = self.production(prod_id)?;
            if prod.lhs.index() >= self.nonterminal_count() {
                return Err(InvalidTable::NonTerminalOutOfRange {
                    prod: prod_id,
                    nonterminal: prod.lhs,
                });
            }
            for sym in &prod.rhs {
                match *sym {
                    Symbol::Terminal(t) if t.index() >= self.terminal_count() => {
                        return Err(InvalidTable::TerminalOutOfRange {
                            prod: prod_id,
                            terminal: t,
                        });
                    }
                    Symbol::NonTerminal(n) if n.index() >= self.nonterminal_count() => {
                        return Err(InvalidTable::NonTerminalOutOfRange {
                            prod: prod_id,
                            nonterminal: n,
                        });
                    }
                    _ => {}
                }
            }
        }

        let end = self.end_terminal();
        let mut accepts = 0;
        for s in 0..n_states {
            let state = StateId::new(s as u32);
            for t in 0..self.terminal_count() {
                let terminal = Terminal::new(t as u16);
                match self.action(state, terminal)? {
                    Action::Shift(target) if target.index() >= n_states => {
                        return Err(InvalidTable::StateOutOfRange {
                            state: target,
                            count: n_states,
                        });
                    }
                    Action::Shift(_) if terminal == end => {
                        return Err(InvalidTable::ShiftOnEnd { state });
                    }
                    Action::Reduce(prod) if prod.index() >= n_prods => {
                        return Err(InvalidTable::ProductionOutOfRange {
                            prod,
                            count: n_prods,
                        });
                    }
                    Action::Accept if terminal != end => {
                        return Err(InvalidTable::AcceptOnTerminal { state, terminal });
                    }
                    Action::Accept => accepts += 1,
                    _ => {}
                }
            }
            for n in 0..self.nonterminal_count() {
                match self.goto(state, NonTerminal::new(n as u16)) {
                    Ok(target) if target.index() >= n_states => {
                        return Err(InvalidTable::StateOutOfRange {
                            state: target,
                            count: n_states,
                        });
                    }
                    Ok(_) | Err(InvalidTable::MissingGoto { .. }) => {}
                    Err(err) => return Err(err),
                }
            }
        }
        if accepts == 0 {
            return Err(InvalidTable::NoAccept);
        }
        Ok(())
    }
}

/// Fails when a count exceeds what its identifier type can index: terminals
/// and non-terminals are `u16`, states and productions `u32`.
fn check_id_ranges(
    terminals: usize,
    nonterminals: usize,
    states: usize,
    productions: usize,
) -> Result<(), InvalidTable> {
    const U16_IDS: usize = u16::MAX as usize + 1;
    const U32_IDS: u64 = u32::MAX as u64 + 1;
    let too_large = |what, count| Err(InvalidTable::TooLarge { what, count });
    if terminals > U16_IDS {
        return too_large("terminals", terminals);
    }
    if nonterminals > U16_IDS {
        return too_large("non-terminals", nonterminals);
    }
    if states as u64 > U32_IDS {
        return too_large("states", states);
    }
    if productions as u64 > U32_IDS {
        return too_large("productions", productions);
    }
    Ok(())
}

/// A dense, row-major action/goto table.
///
/// Rows are states; action columns are terminals and goto columns are
/// non-terminals. Both tables are stored flat so that a lookup is a single
/// multiply-add and bounds check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTable {
    terminals: Vec<String>,
    nonterminals: Vec<String>,
    productions: Vec<Production>,
    actions: Box<[Action]>,
    gotos: Box<[Option<StateId>]>,
    n_states: usize,
}

impl ParseTable {
    /// Assembles a table from per-state rows.
    ///
    /// Only the shape is checked here: each action row must have one entry per
    /// terminal, each goto row one entry per non-terminal, and every count must
    /// fit its identifier type. References
    /// (targets, production ids) are checked by [`ParserData::validate`],
    /// which [`Parser::new`](crate::Parser::new) runs before any token is
    /// consumed.
    pub fn new(
        terminals: Vec<String>,
        nonterminals: Vec<String>,
        productions: Vec<Production>,
        actions: Vec<Vec<Action>>,
        gotos: Vec<Vec<Option<StateId>>>,
    ) -> Result<Self, InvalidTable> {
        if actions.is_empty() {
            return Err(InvalidTable::Empty);
        }
        if terminals.is_empty() {
            return Err(InvalidTable::NoTerminals);
        }
        if actions.len() != gotos.len() {
            return Err(InvalidTable::RowCountMismatch {
                actions: actions.len(),
                gotos: gotos.len(),
            });
        }
        let n_states = actions.len();
        check_id_ranges(
            terminals.len(),
            nonterminals.len(),
            n_states,
            productions.len(),
        )?;
        let mut flat_actions = Vec::with_capacity(n_states * terminals.len());
        for (state, row) in actions.into_iter().enumerate() {
            if row.len() != terminals.len() {
                return Err(InvalidTable::ActionRowWidth {
                    state,
                    expected: terminals.len(),
                    found: row.len(),
                });
            }
            flat_actions.extend(row);
        }
        let mut flat_gotos = Vec::with_capacity(n_states * nonterminals.len());
        for (state, row) in gotos.into_iter().enumerate() {
            if row.len() != nonterminals.len() {
                return Err(InvalidTable::GotoRowWidth {
                    state,
                    expected: nonterminals.len(),
                    found: row.len(),
                });
            }
            flat_gotos.extend(row);
        }
        Ok(Self {
            terminals,
            nonterminals,
            productions,
            actions: flat_actions.into_boxed_slice(),
            gotos: flat_gotos.into_boxed_slice(),
            n_states,
        })
    }

    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    pub fn terminals(&self) -> &[String] {
        &self.terminals
    }

    pub fn nonterminals(&self) -> &[String] {
        &self.nonterminals
    }

    /// Looks up a terminal by label.
    pub fn terminal(&self, label: &str) -> Option<Terminal> {
        self.terminals
            .iter()
            .position(|t| t.as_str() == label)
            .map(|i| Terminal::new(i as u16))
    }

    /// Looks up a non-terminal by label.
    pub fn nonterminal(&self, label: &str) -> Option<NonTerminal> {
        self.nonterminals
            .iter()
            .position(|n| n.as_str() == label)
            .map(|i| NonTerminal::new(i as u16))
    }

    /// The action row of `state`, one entry per terminal.
    pub fn action_row(&self, state: StateId) -> Option<&[Action]> {
        let width = self.terminals.len();
        let start = state.index().checked_mul(width)?;
        self.actions.get(start..start + width)
    }

    /// The goto row of `state`, one entry per non-terminal.
    pub fn goto_row(&self, state: StateId) -> Option<&[Option<StateId>]> {
        let width = self.nonterminals.len();
        let start = state.index().checked_mul(width)?;
        self.gotos.get(start..start + width)
    }
}

impl ParserData for ParseTable {
    #[inline]
    fn state_count(&self) -> usize {
        self.n_states
    }

    #[inline]
    fn terminal_count(&self) -> usize {
        self.terminals.len()
    }

    #[inline]
    fn nonterminal_count(&self) -> usize {
        self.nonterminals.len()
    }

    #[inline]
    fn production_count(&self) -> usize {
        self.productions.len()
    }

    #[inline]
    fn action(&self, state: StateId, terminal: Terminal) -> Result<Action, InvalidTable> {
        if state.index() >= self.n_states {
            return Err(InvalidTable::StateOutOfRange {
                state,
                count: self.n_states,
            });
        }
        let width = self.terminals.len();
        if terminal.index() >= width {
            return Ok(Action::Error);
        }
        Ok(self.actions[state.index() * width + terminal.index()])
    }

    #[inline]
    fn goto(&self, state: StateId, nonterminal: NonTerminal) -> Result<StateId, InvalidTable> {
        if state.index() >= self.n_states {
            return Err(InvalidTable::StateOutOfRange {
                state,
                count: self.n_states,
            });
        }
        let width = self.nonterminals.len();
        if nonterminal.index() >= width {
            return Err(InvalidTable::MissingGoto { state, nonterminal });
        }
        self.gotos[state.index() * width + nonterminal.index()]
            .ok_or(InvalidTable::MissingGoto { state, nonterminal })
    }

    #[inline]
    fn production(&self, prod: ProdId) -> Result<&Production, InvalidTable> {
        self.productions
            .get(prod.index())
            .ok_or(InvalidTable::ProductionOutOfRange {
                prod,
                count: self.productions.len(),
            })
    }

    fn terminal_label(&self, terminal: Terminal) -> &str {
        self.terminals
            .get(terminal.index())
            .map(|s| s.as_str())
            .unwrap_or("?")
    }

    fn nonterminal_label(&self, nonterminal: NonTerminal) -> &str {
        self.nonterminals
            .get(nonterminal.index())
            .map(|s| s.as_str())
            .unwrap_or("?")
    }
}
