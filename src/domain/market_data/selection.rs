use super::value_objects::Symbol;
use crate::domain::errors::ValidationError;

/// Maximum number of symbols compared on one chart
pub const MAX_SELECTION: usize = 10;

/// Insertion-ordered set of chosen symbols, capped at [`MAX_SELECTION`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    symbols: Vec<Symbol>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a symbol. Duplicates and a full set are rejected unchanged.
    pub fn add(&mut self, symbol: Symbol) -> Result<(), ValidationError> {
        if self.contains(&symbol) {
            return Err(ValidationError::DuplicateSymbol(symbol.value().to_string()));
        }
        if self.symbols.len() >= MAX_SELECTION {
            return Err(ValidationError::SelectionFull { max: MAX_SELECTION });
        }
        self.symbols.push(symbol);
        Ok(())
    }

    /// Returns whether the symbol was present
    pub fn remove(&mut self, symbol: &Symbol) -> bool {
        let before = self.symbols.len();
        self.symbols.retain(|s| s != symbol);
        self.symbols.len() != before
    }

    pub fn clear(&mut self) {
        self.symbols.clear();
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.symbols.contains(symbol)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.symbols.len() >= MAX_SELECTION
    }

    pub fn as_slice(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut set = SelectionSet::new();
        for s in ["TSLA", "AAPL", "MSFT"] {
            set.add(Symbol::from(s)).unwrap();
        }
        let order: Vec<&str> = set.iter().map(|s| s.value()).collect();
        assert_eq!(order, ["TSLA", "AAPL", "MSFT"]);
    }

    #[test]
    fn duplicate_is_rejected() {
        let mut set = SelectionSet::new();
        set.add(Symbol::from("AAPL")).unwrap();
        assert_eq!(
            set.add(Symbol::from("aapl")),
            Err(ValidationError::DuplicateSymbol("AAPL".into()))
        );
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn remove_reports_presence() {
        let mut set = SelectionSet::new();
        set.add(Symbol::from("AAPL")).unwrap();
        assert!(set.remove(&Symbol::from("AAPL")));
        assert!(!set.remove(&Symbol::from("AAPL")));
        assert!(set.is_empty());
    }
}
