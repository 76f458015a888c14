//! Terminal rendering for command results
//!
//! Every command produces the same three pieces: a one-line headline, zero
//! or more detail lines (one per record or marker), and a JSON payload of
//! the same data. Human mode prints the headline and indented details;
//! JSON mode prints only the payload, so scripted callers get the bare
//! record array or snapshot with no envelope around it.

use anyhow::Result;
use serde_json::Value;

/// Output mode selected by the global `--json` flag
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl OutputFormat {
    #[must_use]
    pub fn is_json(&self) -> bool {
        matches!(self, OutputFormat::Json)
    }

    /// Prints one command result in the selected mode
    pub fn emit(&self, headline: &str, details: &[String], payload: &Value) -> Result<()> {
        println!("{}", self.render(headline, details, payload)?);
        Ok(())
    }

    /// Reports a non-fatal problem on stderr
    pub fn problem(&self, message: &str) {
        match self {
            OutputFormat::Human => eprintln!("error: {message}"),
            OutputFormat::Json => eprintln!("{}", serde_json::json!({ "error": message })),
        }
    }

    fn render(&self, headline: &str, details: &[String], payload: &Value) -> Result<String> {
        match self {
            OutputFormat::Human => {
                let mut out = headline.to_string();
                for line in details {
                    out.push_str("\n  ");
                    out.push_str(line);
                }
                Ok(out)
            }
            OutputFormat::Json => Ok(serde_json::to_string_pretty(payload)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_human_mode_indents_detail_lines() {
        let rendered = OutputFormat::Human
            .render(
                "2 photo(s), newest first",
                &["[0] b.jpeg".to_string(), "[1] a.jpeg".to_string()],
                &json!([]),
            )
            .unwrap();
        assert_eq!(rendered, "2 photo(s), newest first\n  [0] b.jpeg\n  [1] a.jpeg");
    }

    #[test]
    fn test_json_mode_prints_payload_only() {
        let payload = json!([{ "filePath": "1.jpeg" }]);
        let rendered = OutputFormat::Json
            .render("ignored headline", &["ignored detail".to_string()], &payload)
            .unwrap();
        assert!(!rendered.contains("ignored"));
        assert_eq!(serde_json::from_str::<Value>(&rendered).unwrap(), payload);
    }

    #[test]
    fn test_headline_alone_renders_without_trailing_indent() {
        let rendered = OutputFormat::Human
            .render("Gallery is empty", &[], &json!([]))
            .unwrap();
        assert_eq!(rendered, "Gallery is empty");
    }
}
