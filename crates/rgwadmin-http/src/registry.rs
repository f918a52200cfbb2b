//! Error-code registry.

use std::collections::HashMap;

use rgwadmin_model::AdminErrorCode;

/// Maps envelope `Code` strings to typed error codes.
///
/// [`ErrorRegistry::default`] knows every built-in code. Codes that are not
/// registered classify as [`AdminErrorCode::Unknown`].
#[derive(Debug, Clone)]
pub struct ErrorRegistry {
    codes: HashMap<String, AdminErrorCode>,
}

impl ErrorRegistry {
    /// A registry with no codes at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            codes: HashMap::new(),
        }
    }

    /// Register (or override) the classification of `code`.
    pub fn register(&mut self, code: impl Into<String>, kind: AdminErrorCode) -> &mut Self {
        self.codes.insert(code.into(), kind);
        self
    }

    /// Register `code` as a [`AdminErrorCode::Custom`] kind of its own.
    pub fn register_custom(&mut self, code: &'static str) -> &mut Self {
        self.register(code, AdminErrorCode::Custom(code))
    }

    /// Look up the classification of `code`.
    #[must_use]
    pub fn resolve(&self, code: &str) -> Option<AdminErrorCode> {
        self.codes.get(code).copied()
    }

    /// Number of registered codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for ErrorRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        for code in AdminErrorCode::ALL {
            registry.register(code.as_str(), code);
        }
        registry
    }
}
