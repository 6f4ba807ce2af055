use crate::lang::{LineNumber, Statement};
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// ## Program memory
///
/// Numbered statements kept in ascending line number order. A number
/// holds at most one statement; storing to an existing number replaces it.

#[derive(Debug, Clone, Default)]
pub struct Listing {
    source: BTreeMap<LineNumber, Statement>,
}

impl Listing {
    pub fn clear(&mut self) {
        self.source.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn insert(&mut self, number: LineNumber, statement: Statement) -> Option<Statement> {
        self.source.insert(number, statement)
    }

    pub fn remove(&mut self, number: LineNumber) -> Option<Statement> {
        self.source.remove(&number)
    }

    pub fn get(&self, number: LineNumber) -> Option<&Statement> {
        self.source.get(&number)
    }

    pub fn contains(&self, number: LineNumber) -> bool {
        self.source.contains_key(&number)
    }

    pub fn first(&self) -> Option<LineNumber> {
        self.source.keys().next().copied()
    }

    /// The line after `number`, whether or not `number` itself still exists.
    pub fn after(&self, number: LineNumber) -> Option<LineNumber> {
        let next = number.checked_add(1)?;
        self.source.range(next..).next().map(|(n, _)| *n)
    }

    pub fn lines(&self) -> impl Iterator<Item = (LineNumber, &Statement)> {
        self.source.iter().map(|(n, s)| (*n, s))
    }

    pub fn range(
        &self,
        range: RangeInclusive<LineNumber>,
    ) -> impl Iterator<Item = (LineNumber, &Statement)> {
        self.source.range(range).map(|(n, s)| (*n, s))
    }

    /// Rough storage cost, used by FREE.
    pub fn bytes_used(&self) -> usize {
        self.source.values().map(|s| 6 + s.args().len()).sum()
    }
}
