//! Translator configuration

use serde::{Deserialize, Serialize};

/// Settings for one translation unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Tag attached to every diagnostic
    pub tag: String,
    /// Name prefix of conditional merge variables
    pub temp_prefix: String,
    /// File name used in source spans
    pub filename: String,
    /// Name of the host function expressions are translated into
    pub function_name: String,
    /// Known function names, the global function table
    pub functions: Vec<String>,
    /// Typedef names the parser treats as types
    pub typedefs: Vec<String>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            tag: "c2ssa".to_string(),
            temp_prefix: "$ternary".to_string(),
            filename: "<input>".to_string(),
            function_name: "main".to_string(),
            functions: Vec::new(),
            typedefs: Vec::new(),
        }
    }
}

impl TranslatorConfig {
    pub fn with_functions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.functions.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_typedefs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.typedefs.extend(names.into_iter().map(Into::into));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: TranslatorConfig = serde_json::from_str(r#"{ "tag": "lint" }"#).unwrap();
        assert_eq!(config.tag, "lint");
        assert_eq!(config.temp_prefix, "$ternary");
        assert!(config.functions.is_empty());
    }
}
