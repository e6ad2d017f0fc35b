// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Rich terminal formatter for diagnostics.
//!
//! Produces multi-line, color-coded error output:
//!
//! ```text
//! error[E0201]: redefinition of function `f`
//!   --> main.sl:3:1
//!    |
//!  1 | fn f() {}
//!    | -- previously defined here
//!   ...
//!  3 | fn f() { g(); }
//!    | ^^ redefined here
//!    |
//!    = help: functions in the same block must have distinct names
//! ```

use std::collections::BTreeMap;

use colored::Colorize;
use slate_ast::LineMap;

use crate::{Diagnostic, LabelStyle};

/// Formats diagnostics for terminal output.
pub struct DiagnosticFormatter<'a> {
    source: &'a str,
    file_name: Option<&'a str>,
    line_map: LineMap,
}

/// A source line with its labels.
struct AnnotatedLine {
    line_num: usize,
    text: String,
    annotations: Vec<Annotation>,
}

/// Columns are 1-based character columns; `col_end` is exclusive.
struct Annotation {
    col_start: usize,
    col_end: usize,
    style: LabelStyle,
    message: Option<String>,
}

impl<'a> DiagnosticFormatter<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            file_name: None,
            line_map: LineMap::new(source),
        }
    }

    pub fn with_file_name(mut self, name: &'a str) -> Self {
        self.file_name = Some(name);
        self
    }

    pub fn format(&self, diagnostic: &Diagnostic) -> String {
        let mut out = String::new();

        self.format_header(&mut out, diagnostic);

        let annotated = self.collect_annotated_lines(diagnostic);
        let Some(primary) = diagnostic.primary_span() else {
            self.format_footer(&mut out, diagnostic);
            return out;
        };

        let file = self.file_name.unwrap_or("<source>");
        out.push_str(&format!(
            "  {} {}:{}:{}\n",
            "-->".blue(),
            file,
            primary.pos.line,
            primary.pos.col
        ));

        let max_line = annotated.last().map(|a| a.line_num).unwrap_or(1);
        let gutter_width = max_line.to_string().len().max(2);

        let gutter = format!("{} {}", " ".repeat(gutter_width), "|".blue());
        out.push_str(&format!("{gutter}\n"));

        let mut prev_line_num: Option<usize> = None;
        for annotated_line in &annotated {
            if let Some(prev) = prev_line_num {
                if annotated_line.line_num > prev + 1 {
                    out.push_str(&format!("{}{}\n", " ".repeat(gutter_width), "...".blue()));
                }
            }

            let line_num = format!("{:>width$}", annotated_line.line_num, width = gutter_width);
            out.push_str(&format!(
                "{} {} {}\n",
                line_num.blue().bold(),
                "|".blue(),
                annotated_line.text,
            ));

            self.format_annotations(&mut out, annotated_line, gutter_width);

            prev_line_num = Some(annotated_line.line_num);
        }

        if !diagnostic.notes.is_empty() || diagnostic.help.is_some() {
            out.push_str(&format!("{gutter}\n"));
        }
        self.format_footer(&mut out, diagnostic);

        out
    }

    fn format_header(&self, out: &mut String, diagnostic: &Diagnostic) {
        let header = "error".red().bold();

        if let Some(ref code) = diagnostic.code {
            out.push_str(&format!(
                "{}[{}]: {}\n",
                header,
                code.0.clone().red().bold(),
                diagnostic.message.bold()
            ));
        } else {
            out.push_str(&format!("{}: {}\n", header, diagnostic.message.bold()));
        }
    }

    fn format_footer(&self, out: &mut String, diagnostic: &Diagnostic) {
        let indent = "  ";

        for note in &diagnostic.notes {
            out.push_str(&format!("{} {} {}: {}\n", indent, "=".cyan(), "note".cyan().bold(), note));
        }
        if let Some(ref help) = diagnostic.help {
            out.push_str(&format!("{} {} {}: {}\n", indent, "=".cyan(), "help".cyan().bold(), help));
        }
    }

    fn collect_annotated_lines(&self, diagnostic: &Diagnostic) -> Vec<AnnotatedLine> {
        let mut lines_map: BTreeMap<usize, AnnotatedLine> = BTreeMap::new();

        for label in &diagnostic.labels {
            let line_num = label.span.pos.line as usize;
            let text = self
                .line_map
                .line_text(self.source, label.span.pos.line)
                .unwrap_or("");

            let entry = lines_map.entry(line_num).or_insert_with(|| AnnotatedLine {
                line_num,
                text: text.to_string(),
                annotations: Vec::new(),
            });

            let col_start = (label.span.pos.col as usize).max(1);
            entry.annotations.push(Annotation {
                col_start,
                col_end: col_start + label.span.len.max(1),
                style: label.style,
                message: label.message.clone(),
            });
        }

        lines_map.into_values().collect()
    }

    fn format_annotations(&self, out: &mut String, annotated_line: &AnnotatedLine, gutter_width: usize) {
        let mut sorted: Vec<&Annotation> = annotated_line.annotations.iter().collect();
        sorted.sort_by_key(|a| (a.style.cmp_priority(), a.col_start));

        let width = sorted.iter().map(|a| a.col_end).max().unwrap_or(1);
        let mut underline = vec![' '; width];
        let mut messages: Vec<(usize, LabelStyle, &str)> = Vec::new();

        for ann in &sorted {
            let ch = match ann.style {
                LabelStyle::Primary => '^',
                LabelStyle::Secondary => '-',
            };
            for slot in &mut underline[ann.col_start - 1..ann.col_end - 1] {
                if *slot == ' ' {
                    *slot = ch;
                }
            }
            if let Some(ref msg) = ann.message {
                if !msg.is_empty() {
                    messages.push((ann.col_start, ann.style, msg.as_str()));
                }
            }
        }

        let underline_str: String = underline.iter().collect::<String>().trim_end().to_string();
        let colored_underline = color_underline(&underline_str);
        let gutter = format!("{} {}", " ".repeat(gutter_width), "|".blue());

        if messages.len() <= 1 {
            match messages.first() {
                Some((_, style, msg)) => out.push_str(&format!(
                    "{} {} {}\n",
                    gutter,
                    colored_underline,
                    style_message(*style, msg)
                )),
                None => out.push_str(&format!("{} {}\n", gutter, colored_underline)),
            }
            return;
        }

        // Several labels on one line: underline first, then one message per
        // line, rightmost first.
        out.push_str(&format!("{} {}\n", gutter, colored_underline));
        messages.sort_by_key(|&(col, _, _)| std::cmp::Reverse(col));
        for (col, style, msg) in messages {
            let pipe = match style {
                LabelStyle::Primary => "|".red().bold().to_string(),
                LabelStyle::Secondary => "|".blue().to_string(),
            };
            out.push_str(&format!(
                "{} {}{} {}\n",
                gutter,
                " ".repeat(col - 1),
                pipe,
                style_message(style, msg)
            ));
        }
    }
}

impl LabelStyle {
    fn cmp_priority(&self) -> u8 {
        match self {
            LabelStyle::Primary => 0,
            LabelStyle::Secondary => 1,
        }
    }
}

fn style_message(style: LabelStyle, msg: &str) -> String {
    match style {
        LabelStyle::Primary => msg.red().bold().to_string(),
        LabelStyle::Secondary => msg.blue().to_string(),
    }
}

/// Color the underline characters (^ in red, - in blue).
fn color_underline(s: &str) -> String {
    let mut result = String::new();
    let mut current_char = None;
    let mut run = String::new();

    for ch in s.chars() {
        let kind = matches!(ch, '^' | '-').then_some(ch);
        if kind != current_char && !run.is_empty() {
            result.push_str(&flush_run(&run, current_char));
            run.clear();
        }
        run.push(ch);
        current_char = kind;
    }

    if !run.is_empty() {
        result.push_str(&flush_run(&run, current_char));
    }

    result
}

fn flush_run(run: &str, kind: Option<char>) -> String {
    match kind {
        Some('^') => run.red().bold().to_string(),
        Some('-') => run.blue().to_string(),
        _ => run.to_string(),
    }
}
