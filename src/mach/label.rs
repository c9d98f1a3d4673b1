use crate::lang::LineIndex;
use std::collections::HashMap;

/// ## Jump targets
///
/// Two maps populated by the pre-run label scan: numeric labels such as
/// `10` and identifier labels such as `Skip`. A duplicate label keeps the
/// last occurrence.

#[derive(Debug, Default)]
pub struct LabelTable {
    numbers: HashMap<i64, LineIndex>,
    names: HashMap<String, LineIndex>,
}

impl LabelTable {
    pub fn new() -> LabelTable {
        LabelTable::default()
    }

    pub fn clear(&mut self) {
        self.numbers.clear();
        self.names.clear();
    }

    pub fn insert_number(&mut self, label: i64, line: LineIndex) {
        self.numbers.insert(label, line);
    }

    pub fn insert_name(&mut self, label: &str, line: LineIndex) {
        self.names.insert(label.to_string(), line);
    }

    pub fn number(&self, label: i64) -> Option<LineIndex> {
        self.numbers.get(&label).copied()
    }

    pub fn name(&self, label: &str) -> Option<LineIndex> {
        self.names.get(label).copied()
    }
}
