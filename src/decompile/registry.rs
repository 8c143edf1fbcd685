//! Identifier to symbolic-name registry.
//!
//! Filled once from every resource in the snapshot before any output is
//! produced, then consulted while rendering attribute values. The only state
//! that changes after population is the per-entry `referenced` flag.

use rustc_hash::FxHashMap;

/// One registered resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    /// `<resource type>.<normalized name>`
    pub symbol: String,
    pub referenced: bool,
}

/// Maps raw resource identifiers to `<type>.<name>` symbols.
#[derive(Debug, Default)]
pub struct SymbolRegistry {
    entries: FxHashMap<String, SymbolEntry>,
}

impl SymbolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an identifier. The first registration of an id wins.
    pub fn register(&mut self, id: &str, symbol: impl Into<String>) {
        self.entries
            .entry(id.to_string())
            .or_insert_with(|| SymbolEntry {
                symbol: symbol.into(),
                referenced: false,
            });
    }

    /// Resolve an identifier to its symbol, marking it referenced.
    ///
    /// Unknown identifiers (device hardware ids, objects outside this
    /// snapshot) are returned unchanged.
    pub fn resolve<'a>(&'a mut self, id: &'a str) -> &'a str {
        match self.entries.get_mut(id) {
            Some(entry) => {
                entry.referenced = true;
                &entry.symbol
            }
            None => id,
        }
    }

    /// Whether `id` has been resolved at least once. Does not mark.
    pub fn was_referenced(&self, id: &str) -> bool {
        self.entries.get(id).is_some_and(|entry| entry.referenced)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AAA: &str = "11111111-2222-3333-4444-555555555555";
    const UNKNOWN: &str = "99999999-8888-7777-6666-555555555555";

    fn registry() -> SymbolRegistry {
        let mut registry = SymbolRegistry::new();
        registry.register(AAA, "sdwan_feature_template.Global_AAA");
        registry
    }

    #[test]
    fn test_resolve_registered() {
        let mut registry = registry();
        assert_eq!(registry.resolve(AAA), "sdwan_feature_template.Global_AAA");
    }

    #[test]
    fn test_resolve_unknown_passes_through() {
        let mut registry = registry();
        assert_eq!(registry.resolve(UNKNOWN), UNKNOWN);
        assert!(!registry.was_referenced(UNKNOWN));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_resolve_marks_referenced() {
        let mut registry = registry();
        assert!(!registry.was_referenced(AAA));

        registry.resolve(AAA);
        assert!(registry.was_referenced(AAA));
    }

    #[test]
    fn test_was_referenced_does_not_mark() {
        let registry = registry();
        assert!(!registry.was_referenced(AAA));
        assert!(!registry.was_referenced(AAA));
        assert!(!registry.was_referenced(UNKNOWN));
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = registry();
        registry.register(AAA, "sdwan_other.Name");

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.resolve(AAA), "sdwan_feature_template.Global_AAA");
    }
}
