//! The editable style model.
//!
//! An ordered map of selector to [`RuleSet`], where each rule set is an
//! ordered map of property name to [`Property`]. Insertion order is iteration
//! order at both levels, which keeps serialization deterministic.

use indexmap::IndexMap;

use crate::parser::{Declaration, selectors::classify_selector};

/// A property value with its enabled flag.
///
/// A disabled property stays in the model but is left out of serialized
/// text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub value: String,
    pub enabled: bool,
}

impl Property {
    pub fn new(value: impl Into<String>, enabled: bool) -> Self {
        Self {
            value: value.into(),
            enabled,
        }
    }
}

/// The declarations owned by one selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    properties: IndexMap<String, Property>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }

    /// Sets a property. An existing property keeps its position.
    pub fn set(&mut self, name: impl Into<String>, property: Property) {
        self.properties.insert(name.into(), property);
    }

    pub fn remove(&mut self, name: &str) -> Option<Property> {
        self.properties.shift_remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Property)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates enabled properties in order.
    pub fn enabled(&self) -> impl Iterator<Item = (&str, &Property)> {
        self.iter().filter(|(_, p)| p.enabled)
    }

    pub fn has_enabled(&self) -> bool {
        self.properties.values().any(|p| p.enabled)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Serialization bucket of a selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectorKind {
    Id,
    Class,
    Other,
}

impl SelectorKind {
    /// Emission order: other, then class, then id.
    pub const EMISSION_ORDER: [SelectorKind; 3] =
        [SelectorKind::Other, SelectorKind::Class, SelectorKind::Id];
}

/// Selectors partitioned by bucket, each in model order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorGroups {
    pub id: Vec<String>,
    pub class: Vec<String>,
    pub other: Vec<String>,
}

impl SelectorGroups {
    pub fn of(&self, kind: SelectorKind) -> &[String] {
        match kind {
            SelectorKind::Id => &self.id,
            SelectorKind::Class => &self.class,
            SelectorKind::Other => &self.other,
        }
    }
}

/// Ordered mapping from selector to rule set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleModel {
    rules: IndexMap<String, RuleSet>,
}

impl StyleModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty rule set for `selector`. Returns false if it exists.
    pub fn add_selector(&mut self, selector: impl Into<String>) -> bool {
        let selector = selector.into();
        if self.rules.contains_key(&selector) {
            return false;
        }
        self.rules.insert(selector, RuleSet::new());
        true
    }

    pub fn remove_selector(&mut self, selector: &str) -> Option<RuleSet> {
        self.rules.shift_remove(selector)
    }

    pub fn contains(&self, selector: &str) -> bool {
        self.rules.contains_key(selector)
    }

    /// Sets a property, creating the selector's rule set if needed.
    pub fn set_property(
        &mut self,
        selector: &str,
        name: &str,
        value: impl Into<String>,
        enabled: bool,
    ) {
        self.rule_set_mut(selector)
            .set(name, Property::new(value, enabled));
    }

    pub fn property(&self, selector: &str, name: &str) -> Option<&Property> {
        self.rules.get(selector)?.get(name)
    }

    pub fn remove_property(&mut self, selector: &str, name: &str) -> Option<Property> {
        self.rules.get_mut(selector)?.remove(name)
    }

    pub fn rule_set(&self, selector: &str) -> Option<&RuleSet> {
        self.rules.get(selector)
    }

    /// Returns the selector's rule set, creating an empty one if needed.
    pub fn rule_set_mut(&mut self, selector: &str) -> &mut RuleSet {
        self.rules.entry(selector.to_string()).or_default()
    }

    /// Sets each declaration as an enabled property of `selector`.
    pub fn merge_declarations(&mut self, selector: &str, declarations: &[Declaration]) {
        let rule_set = self.rule_set_mut(selector);
        for declaration in declarations {
            rule_set.set(
                declaration.name.as_str(),
                Property::new(declaration.value.as_str(), true),
            );
        }
    }

    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleSet)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Partitions the selectors into id, class and other buckets.
    pub fn get_selectors(&self) -> SelectorGroups {
        let mut groups = SelectorGroups::default();
        for selector in self.rules.keys() {
            let bucket = match classify_selector(selector) {
                SelectorKind::Id => &mut groups.id,
                SelectorKind::Class => &mut groups.class,
                SelectorKind::Other => &mut groups.other,
            };
            bucket.push(selector.clone());
        }
        groups
    }

    pub fn get_selectors_of(&self, kind: SelectorKind) -> Vec<String> {
        self.rules
            .keys()
            .filter(|s| classify_selector(s) == kind)
            .cloned()
            .collect()
    }
}
