//! Error code registry.
//!
//! Maps error codes (E0001, E0200, etc.) to titles and categories.
//! Used by `slate explain <code>` and the JSON report.

use std::collections::HashMap;

/// Registry of all known error codes.
pub struct ErrorCodeRegistry {
    codes: HashMap<&'static str, ErrorCodeInfo>,
}

/// Information about a single error code.
pub struct ErrorCodeInfo {
    pub code: &'static str,
    pub title: &'static str,
    pub category: ErrorCategory,
}

/// Error category for grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Syntax,
    Resolution,
    Type,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Syntax => write!(f, "Syntax"),
            ErrorCategory::Resolution => write!(f, "Resolution"),
            ErrorCategory::Type => write!(f, "Type"),
        }
    }
}

macro_rules! register_codes {
    ($($code:literal => ($title:literal, $cat:expr)),* $(,)?) => {{
        let mut map = HashMap::new();
        $(
            map.insert($code, ErrorCodeInfo {
                code: $code,
                title: $title,
                category: $cat,
            });
        )*
        map
    }};
}

impl Default for ErrorCodeRegistry {
    fn default() -> Self {
        use ErrorCategory::*;

        Self {
            codes: register_codes! {
                // Lexer errors (E00xx)
                "E0001" => ("unexpected character", Syntax),
                "E0002" => ("unterminated string literal", Syntax),
                "E0003" => ("integer literal too large", Syntax),

                // Parser errors (E01xx)
                "E0100" => ("unexpected token", Syntax),

                // Resolver errors (E02xx)
                "E0200" => ("undefined value", Resolution),
                "E0201" => ("duplicate function", Resolution),
                "E0202" => ("duplicate parameter", Resolution),
                "E0203" => ("undefined type", Resolution),

                // Type errors (E03xx)
                "E0300" => ("expression cannot be typed", Type),
            },
        }
    }
}

impl ErrorCodeRegistry {
    pub fn get(&self, code: &str) -> Option<&ErrorCodeInfo> {
        self.codes.get(code)
    }

    /// Every registered code, sorted.
    pub fn all(&self) -> Vec<&ErrorCodeInfo> {
        let mut all: Vec<_> = self.codes.values().collect();
        all.sort_by_key(|info| info.code);
        all
    }
}
