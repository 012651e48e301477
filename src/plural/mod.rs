pub mod english;

use crate::error::{InflectError, Result};
use std::collections::HashMap;
use std::fmt;

pub use english::EnglishAdapter;

/// Word inflection provider behind `to_plural` and `to_singular`.
pub trait InflectorAdapter: Send + Sync {
    /// Name the adapter is registered and selected under.
    fn name(&self) -> &str;

    fn to_singular(&self, plural_word: &str) -> String;

    fn to_plural(&self, singular_word: &str) -> String;
}

/// Leaves every word as it is.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityAdapter;

impl IdentityAdapter {
    pub const NAME: &'static str = "identity";
}

impl InflectorAdapter for IdentityAdapter {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn to_singular(&self, plural_word: &str) -> String {
        plural_word.to_string()
    }

    fn to_plural(&self, singular_word: &str) -> String {
        singular_word.to_string()
    }
}

pub type AdapterFactory = fn() -> Box<dyn InflectorAdapter>;

pub const DEFAULT_ADAPTER: &str = EnglishAdapter::NAME;

/// Holds the selected adapter name and a lazily built instance of it.
///
/// The instance is rebuilt whenever its name no longer matches the selection,
/// so an adapter injected with [`Pluralizer::set_adapter`] only survives while
/// the selection names it.
pub struct Pluralizer {
    selected: String,
    factories: HashMap<String, AdapterFactory>,
    active: Option<Box<dyn InflectorAdapter>>,
}

impl Pluralizer {
    /// A pluralizer with the bundled adapters registered and `selected`
    /// chosen. Unknown names are only reported by [`Pluralizer::adapter`].
    pub fn new(selected: impl Into<String>) -> Self {
        let mut pluralizer = Self {
            selected: selected.into(),
            factories: HashMap::new(),
            active: None,
        };
        pluralizer.register(EnglishAdapter::NAME, || Box::new(EnglishAdapter));
        pluralizer.register(IdentityAdapter::NAME, || Box::new(IdentityAdapter));
        pluralizer
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn select(&mut self, name: impl Into<String>) {
        self.selected = name.into();
    }

    pub fn register(&mut self, name: impl Into<String>, factory: AdapterFactory) {
        self.factories.insert(name.into(), factory);
    }

    pub fn registered(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Inject a ready-made adapter instance.
    pub fn set_adapter(&mut self, adapter: Box<dyn InflectorAdapter>) {
        self.active = Some(adapter);
    }

    /// The active adapter, rebuilt from its factory if the cached instance is
    /// missing or does not match the selected name.
    pub fn adapter(&mut self) -> Result<&dyn InflectorAdapter> {
        let stale = self
            .active
            .as_ref()
            .map_or(true, |active| active.name() != self.selected);

        if stale {
            let factory = match self.factories.get(&self.selected) {
                Some(factory) => factory,
                None => {
                    tracing::warn!(adapter = %self.selected, "no inflector adapter registered under this name");
                    return Err(InflectError::UnknownAdapter(self.selected.clone()));
                }
            };
            tracing::debug!(adapter = %self.selected, "instantiating inflector adapter");
            self.active = Some(factory());
        }

        self.active
            .as_deref()
            .ok_or_else(|| InflectError::UnknownAdapter(self.selected.clone()))
    }

    pub fn to_plural(&mut self, singular_word: &str) -> Result<String> {
        Ok(self.adapter()?.to_plural(singular_word))
    }

    pub fn to_singular(&mut self, plural_word: &str) -> Result<String> {
        Ok(self.adapter()?.to_singular(plural_word))
    }
}

impl Default for Pluralizer {
    fn default() -> Self {
        Self::new(DEFAULT_ADAPTER)
    }
}

impl fmt::Debug for Pluralizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pluralizer")
            .field("selected", &self.selected)
            .field("registered", &self.registered())
            .field("active", &self.active.as_ref().map(|a| a.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ShoutingAdapter;

    impl InflectorAdapter for ShoutingAdapter {
        fn name(&self) -> &str {
            "shouting"
        }

        fn to_singular(&self, plural_word: &str) -> String {
            plural_word.to_uppercase()
        }

        fn to_plural(&self, singular_word: &str) -> String {
            format!("{}S", singular_word.to_uppercase())
        }
    }

    #[test]
    fn test_default_adapter_is_english() {
        let mut pluralizer = Pluralizer::default();
        assert_eq!(pluralizer.adapter().unwrap().name(), EnglishAdapter::NAME);
        assert_eq!(pluralizer.to_plural("address").unwrap(), "addresses");
        assert_eq!(pluralizer.to_singular("batches").unwrap(), "batch");
    }

    #[test]
    fn test_instance_is_reused_while_selection_matches() {
        let mut pluralizer = Pluralizer::default();
        let first = pluralizer.adapter().unwrap() as *const dyn InflectorAdapter as *const ();
        let second = pluralizer.adapter().unwrap() as *const dyn InflectorAdapter as *const ();
        assert_eq!(first, second);
    }

    #[test]
    fn test_changed_selection_replaces_instance() {
        let mut pluralizer = Pluralizer::default();
        pluralizer.adapter().unwrap();

        pluralizer.select(IdentityAdapter::NAME);
        assert_eq!(pluralizer.adapter().unwrap().name(), IdentityAdapter::NAME);
        assert_eq!(pluralizer.to_plural("address").unwrap(), "address");

        pluralizer.select(EnglishAdapter::NAME);
        assert_eq!(pluralizer.adapter().unwrap().name(), EnglishAdapter::NAME);
    }

    #[test]
    fn test_injected_instance_is_replaced_when_not_selected() {
        let mut pluralizer = Pluralizer::default();
        pluralizer.set_adapter(Box::new(ShoutingAdapter));
        assert_eq!(pluralizer.adapter().unwrap().name(), EnglishAdapter::NAME);
    }

    #[test]
    fn test_injected_instance_is_used_when_selected() {
        let mut pluralizer = Pluralizer::new("shouting");
        pluralizer.set_adapter(Box::new(ShoutingAdapter));
        assert_eq!(pluralizer.to_plural("box").unwrap(), "BOXS");
    }

    #[test]
    fn test_registered_factory() {
        let mut pluralizer = Pluralizer::new("shouting");
        pluralizer.register("shouting", || Box::new(ShoutingAdapter));
        assert_eq!(pluralizer.to_singular("boxes").unwrap(), "BOXES");
        assert_eq!(pluralizer.registered(), vec!["english", "identity", "shouting"]);
    }

    #[test]
    fn test_unknown_adapter_fails_at_first_use() {
        let mut pluralizer = Pluralizer::new("klingon");
        assert_eq!(pluralizer.selected(), "klingon");
        assert_eq!(
            pluralizer.to_plural("word").unwrap_err(),
            InflectError::UnknownAdapter("klingon".to_string())
        );
    }
}
