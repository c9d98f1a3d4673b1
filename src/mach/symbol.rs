use super::Val;
use std::collections::BTreeMap;

/// ## Variable memory
///
/// One flat namespace per runtime. The ordered map keeps LIST output
/// sorted without an extra pass.

#[derive(Debug, Default)]
pub struct SymbolTable {
    vars: BTreeMap<String, Val>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable::default()
    }

    pub fn insert(&mut self, name: &str, val: Val) {
        self.vars.insert(name.to_string(), val);
    }

    pub fn get(&self, name: &str) -> Option<&Val> {
        self.vars.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Val> {
        self.vars.get_mut(name)
    }

    pub fn remove_all(&mut self) {
        self.vars.clear();
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Every entry, sorted by name, rendered for display.
    pub fn list(&self) -> Vec<(String, String)> {
        self.vars
            .iter()
            .map(|(name, val)| (name.clone(), val.to_string()))
            .collect()
    }
}
