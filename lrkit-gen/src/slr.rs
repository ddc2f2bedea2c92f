// This module defines LR(0) item machinery, FIRST/FOLLOW computations,
// and SLR(1) parse table construction with build-time conflict resolution.

use crate::error::GrammarError;
use crate::grammar::{Assoc, Grammar};
use indexmap::IndexSet;
use lrkit::{Action, ProdId, Production, StateId, Symbol, Terminal};
use std::collections::BTreeSet;

/// An LR(0) item: a production index and a dot position within its
/// right-hand side.
///
/// For production `E -> E + T`, the item `E -> E . + T` has `dot == 1`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Item {
    pub prod: usize,
    pub dot: usize,
}

impl Item {
    /// The symbol right after the dot, if any.
    #[inline]
    pub fn next_symbol(&self, prods: &[Production]) -> Option<Symbol> {
        prods[self.prod].rhs.get(self.dot).copied()
    }

    #[inline]
    pub fn is_complete(&self, prods: &[Production]) -> bool {
        self.dot == prods[self.prod].len()
    }
}

/// A set of LR(0) items.
pub type ItemSet = BTreeSet<Item>;

/// Computes the LR(0) closure of `items`: for every item whose dot precedes a
/// non-terminal, adds that non-terminal's productions with the dot at the
/// start, until nothing new is added.
pub fn closure(items: &ItemSet, prods: &[Production]) -> ItemSet {
    let mut c = items.clone();
    let mut work: Vec<Item> = items.iter().copied().collect();
    while let Some(item) = work.pop() {
        if let Some(Symbol::NonTerminal(n)) = item.next_symbol(prods) {
            for (j, p) in prods.iter().enumerate() {
                if p.lhs == n {
                    let new_item = Item { prod: j, dot: 0 };
                    if c.insert(new_item) {
                        work.push(new_item);
                    }
                }
            }
        }
    }
    c
}

/// Computes the LR(0) goto of `items` on `sym`: the closure of every item
/// advanced past `sym`.
pub fn goto(items: &ItemSet, sym: Symbol, prods: &[Production]) -> ItemSet {
    let moved: ItemSet = items
        .iter()
        .filter(|item| item.next_symbol(prods) == Some(sym))
        .map(|item| Item {
            prod: item.prod,
            dot: item.dot + 1,
        })
        .collect();
    closure(&moved, prods)
}

/// The canonical collection of LR(0) item sets and its transitions.
///
/// States are numbered in discovery order, starting from the closure of
/// `Start -> . S` as state 0; a state's successors are discovered in the
/// order their symbols first follow a dot in the state's items.
#[derive(Debug, Clone)]
pub struct Automaton {
    pub states: IndexSet<ItemSet>,
    /// Outgoing `(symbol, state)` edges per state.
    pub transitions: Vec<Vec<(Symbol, usize)>>,
}

impl Automaton {
    pub fn build(prods: &[Production]) -> Self {
        let mut states = IndexSet::new();
        let mut transitions = Vec::new();
        let start = ItemSet::from([Item { prod: 0, dot: 0 }]);
        states.insert(closure(&start, prods));

        let mut i = 0;
        while i < states.len() {
            let mut symbols: Vec<Symbol> = Vec::new();
            for item in &states[i] {
                if let Some(sym) = item.next_symbol(prods) {
                    if !symbols.contains(&sym) {
                        symbols.push(sym);
                    }
                }
            }
            let mut row = Vec::with_capacity(symbols.len());
            for sym in symbols {
                let next = goto(&states[i], sym, prods);
                let (j, _) = states.insert_full(next);
                row.push((sym, j));
            }
            transitions.push(row);
            i += 1;
        }
        Self {
            states,
            transitions,
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// FIRST, nullable and FOLLOW, indexed by non-terminal.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub first: Vec<BTreeSet<Terminal>>,
    pub nullable: Vec<bool>,
    pub follow: Vec<BTreeSet<Terminal>>,
}

impl Analysis {
    pub fn new(grammar: &Grammar) -> Self {
        let prods = grammar.productions();
        let (first, nullable) = first_sets(prods, grammar.nonterminal_count());
        let follow = follow_sets(prods, grammar.nonterminal_count(), &first, &nullable);
        Self {
            first,
            nullable,
            follow,
        }
    }
}

/// Computes FIRST sets and nullability for every non-terminal by iterating
/// to a fixed point.
pub fn first_sets(prods: &[Production], n_nonterm: usize) -> (Vec<BTreeSet<Terminal>>, Vec<bool>) {
    let mut first: Vec<BTreeSet<Terminal>> = vec![BTreeSet::new(); n_nonterm];
    let mut nullable = vec![false; n_nonterm];
    let mut changed = true;
    while changed {
        changed = false;
        for prod in prods {
            let lhs = prod.lhs.index();
            let mut all_nullable = true;
            for sym in &prod.rhs {
                match *sym {
                    Symbol::Terminal(t) => {
                        changed |= first[lhs].insert(t);
                        all_nullable = false;
                    }
                    Symbol::NonTerminal(n) => {
                        // Clone FIRST(n) to avoid simultaneous borrow
                        let first_sym = first[n.index()].clone();
                        for t in first_sym {
                            changed |= first[lhs].insert(t);
                        }
                        all_nullable = nullable[n.index()];
                    }
                }
                if !all_nullable {
                    break;
                }
            }
            if all_nullable && !nullable[lhs] {
                nullable[lhs] = true;
                changed = true;
            }
        }
    }
    (first, nullable)
}

/// Computes FOLLOW sets for every non-terminal. The augmented start symbol
/// is followed by the end-of-input terminal.
pub fn follow_sets(
    prods: &[Production],
    n_nonterm: usize,
    first: &[BTreeSet<Terminal>],
    nullable: &[bool],
) -> Vec<BTreeSet<Terminal>> {
    let mut follow: Vec<BTreeSet<Terminal>> = vec![BTreeSet::new(); n_nonterm];
    follow[0].insert(Terminal::END);
    let mut changed = true;
    while changed {
        changed = false;
        for prod in prods {
            let lhs = prod.lhs.index();
            for (i, sym) in prod.rhs.iter().enumerate() {
                let Symbol::NonTerminal(b) = *sym else {
                    continue;
                };
                // FIRST of the suffix after `b`
                let mut beta_nullable = true;
                let mut first_beta = BTreeSet::new();
                for sym in &prod.rhs[i + 1..] {
                    match *sym {
                        Symbol::Terminal(t) => {
                            first_beta.insert(t);
                            beta_nullable = false;
                        }
                        Symbol::NonTerminal(n) => {
                            first_beta.extend(first[n.index()].iter().copied());
                            beta_nullable = nullable[n.index()];
                        }
                    }
                    if !beta_nullable {
                        break;
                    }
                }
                for t in first_beta {
                    changed |= follow[b.index()].insert(t);
                }
                if beta_nullable {
                    let follow_lhs = follow[lhs].clone();
                    for t in follow_lhs {
                        changed |= follow[b.index()].insert(t);
                    }
                }
            }
        }
    }
    follow
}

/// A table cell during construction. A non-associative tie is remembered so
/// that a later reduce in the same cell still reports a conflict.
#[derive(Clone, Copy, Debug)]
enum Cell {
    Action(Action),
    NonAssoc(ProdId),
}

/// Dense action and goto rows ready for [`lrkit::ParseTable::new`].
#[derive(Debug, Clone)]
pub struct Tables {
    pub actions: Vec<Vec<Action>>,
    pub gotos: Vec<Vec<Option<StateId>>>,
    /// Shift/reduce conflicts settled by precedence.
    pub resolved: usize,
}

/// Constructs the SLR(1) action and goto tables.
///
/// Shifts and gotos come from the automaton's transitions, reduces from
/// completed items over the FOLLOW set of their left-hand side, and accept
/// from the completed start item on `$`. Every cell ends up with exactly one
/// action or the construction fails with [`GrammarError::Conflict`].
pub fn construct_slr(
    grammar: &Grammar,
    automaton: &Automaton,
    follow: &[BTreeSet<Terminal>],
) -> Result<Tables, GrammarError> {
    let prods = grammar.productions();
    let n_states = automaton.len();
    let mut cells = vec![vec![Cell::Action(Action::Error); grammar.terminal_count()]; n_states];
    let mut gotos = vec![vec![None; grammar.nonterminal_count()]; n_states];

    for (state, row) in automaton.transitions.iter().enumerate() {
        for &(sym, target) in row {
            let target = StateId::new(target as u32);
            match sym {
                Symbol::Terminal(t) => cells[state][t.index()] = Cell::Action(Action::Shift(target)),
                Symbol::NonTerminal(n) => gotos[state][n.index()] = Some(target),
            }
        }
    }

    let mut resolved = 0;
    for (state, items) in automaton.states.iter().enumerate() {
        let state_id = StateId::new(state as u32);
        for item in items.iter().filter(|item| item.is_complete(prods)) {
            let prod = ProdId::new(item.prod as u32);
            if prod == ProdId::START {
                cells[state][Terminal::END.index()] = Cell::Action(Action::Accept);
                continue;
            }
            for &t in &follow[prods[item.prod].lhs.index()] {
                let cell = &mut cells[state][t.index()];
                let (next, settled) = resolve(grammar, state_id, t, *cell, prod)?;
                *cell = next;
                resolved += usize::from(settled);
            }
        }
    }

    let actions = cells
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| match cell {
                    Cell::Action(action) => action,
                    Cell::NonAssoc(_) => Action::Error,
                })
                .collect()
        })
        .collect();
    Ok(Tables {
        actions,
        gotos,
        resolved,
    })
}

/// Places `Reduce(prod)` into `cell`. Returns the new cell and whether a
/// shift/reduce conflict was settled by precedence.
fn resolve(
    grammar: &Grammar,
    state: StateId,
    terminal: Terminal,
    cell: Cell,
    prod: ProdId,
) -> Result<(Cell, bool), GrammarError> {
    let conflict = |first: String| GrammarError::Conflict {
        state,
        terminal: grammar.terminal_label(terminal).into(),
        first: first.into(),
        second: format!("reduce {}", grammar.production_text(prod)).into(),
    };
    let reduce = Cell::Action(Action::Reduce(prod));
    match cell {
        Cell::Action(Action::Error) => Ok((reduce, false)),
        Cell::Action(Action::Shift(target)) => {
            let (Some(pp), Some(tp)) = (
                grammar.production_precedence(prod),
                grammar.terminal_precedence(terminal),
            ) else {
                return Err(conflict(format!("shift {}", target)));
            };
            let next = if pp.level > tp.level {
                reduce
            } else if pp.level < tp.level {
                cell
            } else {
                match tp.assoc {
                    Assoc::Left => reduce,
                    Assoc::Right => cell,
                    Assoc::NonAssoc => Cell::NonAssoc(prod),
                }
            };
            log::debug!(
                "state {}: shift/reduce on `{}` resolved as {:?}",
                state,
                grammar.terminal_label(terminal),
                next
            );
            Ok((next, true))
        }
        Cell::Action(Action::Reduce(other)) | Cell::NonAssoc(other) => Err(conflict(format!(
            "reduce {}",
            grammar.production_text(other)
        ))),
        Cell::Action(Action::Accept) => Err(conflict("accept".to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::GrammarBuilder;
    use lrkit::NonTerminal;

    fn expr_grammar() -> Grammar {
        GrammarBuilder::new()
            .terminals(&["+", "*", "(", ")", "id"])
            .rule("E", &["E", "+", "T"])
            .rule("E", &["T"])
            .rule("T", &["T", "*", "F"])
            .rule("T", &["F"])
            .rule("F", &["(", "E", ")"])
            .rule("F", &["id"])
            .build()
            .unwrap()
    }

    fn terminals(g: &Grammar, names: &[&str]) -> BTreeSet<Terminal> {
        names.iter().map(|n| g.terminal(n).unwrap()).collect()
    }

    #[test]
    fn closure_of_start_item() {
        let g = expr_grammar();
        let start = ItemSet::from([Item { prod: 0, dot: 0 }]);
        let c = closure(&start, g.productions());
        assert_eq!(c.len(), 7);
        assert!(c.iter().all(|item| item.dot == 0));
    }

    #[test]
    fn expression_grammar_has_twelve_states() {
        let g = expr_grammar();
        let automaton = Automaton::build(g.productions());
        assert_eq!(automaton.len(), 12);
        let targets: Vec<usize> = automaton.transitions[0].iter().map(|&(_, s)| s).collect();
        assert_eq!(targets, vec![1, 2, 3, 4, 5]);
        assert_eq!(
            automaton.transitions[0][0].0,
            Symbol::NonTerminal(g.nonterminal("E").unwrap())
        );
    }

    #[test]
    fn first_and_follow_of_expression_grammar() {
        let g = expr_grammar();
        let a = Analysis::new(&g);
        let e = g.nonterminal("E").unwrap().index();
        let t = g.nonterminal("T").unwrap().index();
        let f = g.nonterminal("F").unwrap().index();
        assert_eq!(a.first[e], terminals(&g, &["(", "id"]));
        assert_eq!(a.first[f], terminals(&g, &["(", "id"]));
        assert!(a.nullable.iter().all(|&n| !n));
        assert_eq!(a.follow[e], terminals(&g, &["$", "+", ")"]));
        assert_eq!(a.follow[t], terminals(&g, &["$", "+", "*", ")"]));
        assert_eq!(a.follow[f], a.follow[t]);
    }

    #[test]
    fn nullable_prefix_contributes_to_first_and_follow() {
        let g = GrammarBuilder::new()
            .terminals(&["a", "b"])
            .rule("S", &["A", "B", "b"])
            .rule("A", &[])
            .rule("A", &["a"])
            .rule("B", &[])
            .build()
            .unwrap();
        let an = Analysis::new(&g);
        let s = g.nonterminal("S").unwrap().index();
        let a = g.nonterminal("A").unwrap().index();
        let b = g.nonterminal("B").unwrap().index();
        assert_eq!(an.first[s], terminals(&g, &["a", "b"]));
        assert!(an.nullable[a] && an.nullable[b] && !an.nullable[s]);
        assert_eq!(an.follow[a], terminals(&g, &["b"]));
        assert_eq!(an.follow[NonTerminal::START.index()], terminals(&g, &["$"]));
    }

    #[test]
    fn reduce_reduce_is_always_a_conflict() {
        let g = GrammarBuilder::new()
            .terminal("x")
            .left(&["x"])
            .rule("S", &["A"])
            .rule("S", &["B"])
            .rule("A", &["x"])
            .rule("B", &["x"])
            .build()
            .unwrap();
        let automaton = Automaton::build(g.productions());
        let an = Analysis::new(&g);
        let err = construct_slr(&g, &automaton, &an.follow).unwrap_err();
        let GrammarError::Conflict {
            terminal,
            first,
            second,
            ..
        } = err
        else {
            panic!("expected conflict, got {err:?}");
        };
        assert_eq!(terminal.as_str(), "$");
        assert_eq!(first.as_str(), "reduce A -> x");
        assert_eq!(second.as_str(), "reduce B -> x");
    }
}
