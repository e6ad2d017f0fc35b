//! `--format json` output: one report per run, diagnostics enriched with
//! line/column and the offending source line.

use serde::Serialize;
use slate_ast::LineMap;

use crate::codes::ErrorCodeRegistry;
use crate::{Diagnostic, LabelStyle, Span};

/// Everything one phase command reported.
#[derive(Debug, Serialize)]
pub struct DiagnosticReport {
    pub version: u32,
    pub file: String,
    /// `true` when there are no diagnostics.
    pub success: bool,
    /// `lex`, `parse`, `resolve` or `check`.
    pub phase: String,
    pub diagnostics: Vec<JsonDiagnostic>,
    pub error_count: usize,
}

#[derive(Debug, Serialize)]
pub struct JsonDiagnostic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Error category (e.g., "Syntax", "Resolution").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
    pub labels: Vec<JsonLabel>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

/// 1-based line and column of a primary label.
#[derive(Debug, Serialize)]
pub struct SourceLocation {
    pub line: u32,
    pub column: u32,
    pub byte_offset: usize,
    pub source_line: String,
}

#[derive(Debug, Serialize)]
pub struct JsonLabel {
    /// `primary` or `secondary`
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub line: u32,
    pub column: u32,
    /// Width in characters.
    pub length: usize,
}

/// Build the report for `phase`. Line and column come from each
/// diagnostic's primary span.
pub fn to_json_report(
    diagnostics: &[Diagnostic],
    source: &str,
    file: &str,
    phase: &str,
) -> DiagnosticReport {
    let registry = ErrorCodeRegistry::default();
    let line_map = LineMap::new(source);
    let json_diags: Vec<JsonDiagnostic> = diagnostics
        .iter()
        .map(|d| to_json_diagnostic(d, source, &line_map, &registry))
        .collect();

    DiagnosticReport {
        version: 1,
        file: file.to_string(),
        success: diagnostics.is_empty(),
        phase: phase.to_string(),
        diagnostics: json_diags,
        error_count: diagnostics.len(),
    }
}

fn to_json_diagnostic(
    diag: &Diagnostic,
    source: &str,
    line_map: &LineMap,
    registry: &ErrorCodeRegistry,
) -> JsonDiagnostic {
    let code = diag.code.as_ref().map(|c| c.0.clone());
    let category = code
        .as_ref()
        .and_then(|c| registry.get(c))
        .map(|info| info.category.to_string());

    let location = diag.primary_span().map(|Span { pos, .. }| SourceLocation {
        line: pos.line,
        column: pos.col,
        byte_offset: pos.index,
        source_line: line_map.line_text(source, pos.line).unwrap_or("").to_string(),
    });

    let labels = diag
        .labels
        .iter()
        .map(|l| JsonLabel {
            role: match l.style {
                LabelStyle::Primary => "primary".to_string(),
                LabelStyle::Secondary => "secondary".to_string(),
            },
            message: l.message.clone(),
            line: l.span.pos.line,
            column: l.span.pos.col,
            length: l.span.len,
        })
        .collect();

    JsonDiagnostic {
        code,
        category,
        message: diag.message.clone(),
        location,
        labels,
        notes: diag.notes.clone(),
        help: diag.help.clone(),
    }
}

pub fn to_json_string(report: &DiagnosticReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use slate_ast::Pos;

    #[test]
    fn report_fields() {
        let source = "let a = 1;\nlet b = c;";
        let diags = vec![
            Diagnostic::error("use of undefined value `c`")
                .with_code("E0200")
                .with_primary(Span::new(Pos::new(19, 2, 9), 1), "not found in this scope"),
            Diagnostic::error("no location"),
        ];
        let report = to_json_report(&diags, source, "main.sl", "resolve");
        assert!(!report.success);
        assert_eq!(report.error_count, 2);

        let json: serde_json::Value =
            serde_json::from_str(&to_json_string(&report)).expect("valid json");
        assert_eq!(json["version"], 1);
        assert_eq!(json["phase"], "resolve");
        let first = &json["diagnostics"][0];
        assert_eq!(first["category"], "Resolution");
        assert_eq!(first["location"]["line"], 2);
        assert_eq!(first["location"]["column"], 9);
        assert_eq!(first["location"]["source_line"], "let b = c;");
        assert_eq!(first["labels"][0]["role"], "primary");
        assert!(json["diagnostics"][1].get("location").is_none());
    }

    #[test]
    fn empty_report_succeeds() {
        let report = to_json_report(&[], "", "main.sl", "check");
        assert!(report.success);
        assert!(report.diagnostics.is_empty());
    }
}
