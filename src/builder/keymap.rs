//! Keyboard shortcuts mirroring the operator buttons.

use crate::builder::error::BuildError;
use crate::core::BinaryOp;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A key press forwarded by the UI layer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Key {
    /// A printable character
    Char(char),
    /// The Enter / Return key
    Enter,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "'{}'", c),
            Self::Enter => write!(f, "Enter"),
        }
    }
}

/// What a bound key asks the calculator to do.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum KeyAction {
    /// Apply a binary operator
    Operator(BinaryOp),
    /// Resolve the pending action
    Compute,
}

impl fmt::Display for KeyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operator(op) => write!(f, "{}", op.name()),
            Self::Compute => write!(f, "Compute"),
        }
    }
}

/// Key bindings consulted by `Calculator::handle_key`.
///
/// The default keymap binds `+ - * /` to their operators and both `Enter`
/// and `=` to compute.
///
/// # Example
///
/// ```rust
/// use tally::builder::{Key, KeyAction, Keymap};
/// use tally::core::BinaryOp;
///
/// let keymap = Keymap::default();
/// assert_eq!(keymap.lookup(Key::Char('*')), Some(KeyAction::Operator(BinaryOp::Multiply)));
/// assert_eq!(keymap.lookup(Key::Enter), Some(KeyAction::Compute));
/// assert_eq!(keymap.lookup(Key::Char('x')), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Keymap {
    bindings: HashMap<Key, KeyAction>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            bindings: default_bindings().into_iter().collect(),
        }
    }
}

impl Keymap {
    /// Start building a keymap from the default bindings.
    pub fn builder() -> KeymapBuilder {
        KeymapBuilder::new()
    }

    /// Action bound to `key`, if any.
    pub fn lookup(&self, key: Key) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    /// Every key bound to `action`, for button hints.
    pub fn keys_for(&self, action: KeyAction) -> Vec<Key> {
        let mut keys: Vec<Key> = self
            .bindings
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(key, _)| *key)
            .collect();
        keys.sort_by_key(|key| match key {
            Key::Enter => (0, '\0'),
            Key::Char(c) => (1, *c),
        });
        keys
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

fn default_bindings() -> Vec<(Key, KeyAction)> {
    let mut bindings: Vec<(Key, KeyAction)> = BinaryOp::ALL
        .into_iter()
        .map(|op| (Key::Char(op.symbol()), KeyAction::Operator(op)))
        .collect();
    bindings.push((Key::Enter, KeyAction::Compute));
    bindings.push((Key::Char('='), KeyAction::Compute));
    bindings
}

/// Builder for keymaps with a fluent API.
pub struct KeymapBuilder {
    bindings: Vec<(Key, KeyAction)>,
}

impl KeymapBuilder {
    /// Create a builder seeded with the default bindings.
    pub fn new() -> Self {
        Self {
            bindings: default_bindings(),
        }
    }

    /// Create a builder with no bindings.
    pub fn empty() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Bind `key` to `action`.
    pub fn bind(mut self, key: Key, action: KeyAction) -> Self {
        self.bindings.push((key, action));
        self
    }

    /// Remove every binding for `key`.
    pub fn unbind(mut self, key: Key) -> Self {
        self.bindings.retain(|(bound, _)| *bound != key);
        self
    }

    /// Build the keymap.
    /// Returns an error if a key is bound to two different actions.
    pub fn build(self) -> Result<Keymap, BuildError> {
        let mut bindings = HashMap::new();

        for (key, action) in self.bindings {
            if let Some(first) = bindings.insert(key, action) {
                if first != action {
                    return Err(BuildError::ConflictingBinding {
                        key,
                        first,
                        second: action,
                    });
                }
            }
        }

        Ok(Keymap { bindings })
    }
}

impl Default for KeymapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keymap_mirrors_buttons() {
        let keymap = Keymap::default();

        for op in BinaryOp::ALL {
            assert_eq!(
                keymap.lookup(Key::Char(op.symbol())),
                Some(KeyAction::Operator(op))
            );
        }
        assert_eq!(keymap.lookup(Key::Enter), Some(KeyAction::Compute));
        assert_eq!(keymap.lookup(Key::Char('=')), Some(KeyAction::Compute));
        assert_eq!(keymap.len(), 6);
    }

    #[test]
    fn builder_matches_default() {
        let keymap = KeymapBuilder::new().build().unwrap();
        assert_eq!(keymap, Keymap::default());
    }

    #[test]
    fn rebinding_to_same_action_is_allowed() {
        let keymap = KeymapBuilder::new()
            .bind(Key::Enter, KeyAction::Compute)
            .build();

        assert!(keymap.is_ok());
    }

    #[test]
    fn builder_rejects_conflicting_bindings() {
        let result = KeymapBuilder::new()
            .bind(Key::Char('+'), KeyAction::Compute)
            .build();

        assert_eq!(
            result,
            Err(BuildError::ConflictingBinding {
                key: Key::Char('+'),
                first: KeyAction::Operator(BinaryOp::Add),
                second: KeyAction::Compute,
            })
        );
    }

    #[test]
    fn unbind_frees_key_for_rebinding() {
        let keymap = KeymapBuilder::new()
            .unbind(Key::Char('*'))
            .bind(Key::Char('x'), KeyAction::Operator(BinaryOp::Multiply))
            .bind(Key::Char('*'), KeyAction::Compute)
            .build()
            .unwrap();

        assert_eq!(keymap.lookup(Key::Char('*')), Some(KeyAction::Compute));
        assert_eq!(
            keymap.lookup(Key::Char('x')),
            Some(KeyAction::Operator(BinaryOp::Multiply))
        );
    }

    #[test]
    fn empty_builder_has_no_bindings() {
        let keymap = KeymapBuilder::empty().build().unwrap();
        assert!(keymap.is_empty());
        assert_eq!(keymap.lookup(Key::Enter), None);
    }

    #[test]
    fn keys_for_lists_enter_first() {
        let keymap = Keymap::default();
        assert_eq!(
            keymap.keys_for(KeyAction::Compute),
            vec![Key::Enter, Key::Char('=')]
        );
    }

    #[test]
    fn conflict_message_names_both_actions() {
        let error = BuildError::ConflictingBinding {
            key: Key::Char('+'),
            first: KeyAction::Operator(BinaryOp::Add),
            second: KeyAction::Compute,
        };
        assert_eq!(
            error.to_string(),
            "Key '+' is bound to both Add and Compute. Call .unbind(key) first"
        );
    }

    #[test]
    fn key_action_serializes_correctly() {
        let action = KeyAction::Operator(BinaryOp::Divide);
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: KeyAction = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }
}
