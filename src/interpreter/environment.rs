use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// The variable environment of one script run.
///
/// Maps variable names to their current values. Iteration follows the order
/// in which names were first bound; rebinding a name replaces its value
/// without moving it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Environment {
    entries: Vec<(String, Value)>,
    index:   HashMap<String, usize>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.index.get(name).map(|&slot| &self.entries[slot].1)
    }

    /// Binds `name` to `value`, overwriting any previous binding.
    ///
    /// # Example
    /// ```
    /// use flo::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// env.set("x", Value::Integer(1));
    /// env.set("x", Value::Integer(2));
    ///
    /// assert_eq!(env.get("x"), Some(&Value::Integer(2)));
    /// assert_eq!(env.len(), 1);
    /// ```
    pub fn set(&mut self, name: &str, value: Value) {
        if let Some(&slot) = self.index.get(name) {
            self.entries[slot].1 = value;
        } else {
            self.index.insert(name.to_string(), self.entries.len());
            self.entries.push((name.to_string(), value));
        }
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no variable is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all bindings in first-binding order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebinding_keeps_first_binding_order() {
        let mut env = Environment::new();
        env.set("b", Value::Integer(1));
        env.set("a", Value::from("x"));
        env.set("b", Value::Real(2.5));

        let names: Vec<&str> = env.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["b", "a"]);
        assert_eq!(env.get("b"), Some(&Value::Real(2.5)));
    }

    #[test]
    fn unknown_names_are_absent() {
        let env = Environment::new();
        assert!(env.is_empty());
        assert!(!env.contains("x"));
        assert_eq!(env.get("x"), None);
    }
}
