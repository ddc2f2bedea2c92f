use indexmap::IndexSet;
use smartstring::alias::String;

/// Interned symbol names; an index is assigned on first insertion and never
/// changes.
#[derive(Default, Debug, Clone)]
pub struct Symtab {
    set: IndexSet<String>,
}

impl Symtab {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, sym: &str) -> usize {
        if let Some(idx) = self.set.get_index_of(sym) {
            return idx;
        }
        self.set.insert_full(sym.into()).0
    }

    pub fn idx(&self, sym: &str) -> Option<usize> {
        self.set.get_index_of(sym)
    }

    pub fn sym(&self, idx: usize) -> Option<&str> {
        self.set.get_index(idx).map(|s| s.as_str())
    }

    pub fn contains(&self, sym: &str) -> bool {
        self.set.contains(sym)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.set.iter().cloned().collect()
    }
}
