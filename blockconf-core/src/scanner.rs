use regex::Regex;
use thiserror::Error;

use crate::grammar::BlockGrammar;
use crate::record::RuleRecord;

/// Errors that can occur while building a [`BlockScanner`].
#[derive(Debug, Error)]
pub enum ScanError {
    /// A grammar literal produced an uncompilable scan pattern.
    #[error("failed to compile scan pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Three-stage scanner over a block-structured configuration document.
///
/// Stage one isolates the section between the grammar's opener phrase
/// and the nearest terminator keyword. Stage two segments the section
/// into record blocks. Stage three pulls the quoted name field out of
/// each block. All three patterns span newlines and are compiled once
/// at construction.
pub struct BlockScanner {
    section: Regex,
    record: Regex,
    name: Regex,
}

impl BlockScanner {
    /// Compile the scan patterns for `grammar`.
    ///
    /// Grammar literals are escaped before being spliced into the
    /// patterns, so any text keyword is accepted.
    pub fn new(grammar: &BlockGrammar) -> Result<Self, ScanError> {
        let section = Regex::new(&format!(
            r"(?is){}\s*(.*?)\s*{}",
            regex::escape(&grammar.section_opener),
            regex::escape(&grammar.section_terminator),
        ))?;
        let record = Regex::new(&format!(
            r"(?s){}\s+(\d+)\s*(.*?)\s*{}",
            regex::escape(&grammar.record_opener),
            regex::escape(&grammar.record_terminator),
        ))?;
        let keyword = grammar
            .field_keyword
            .split_whitespace()
            .map(|word| regex::escape(word))
            .collect::<Vec<_>>()
            .join(r"\s+");
        let name = Regex::new(&format!(r#"(?is){keyword}\s+["']([^"']*)["']"#))?;

        Ok(Self {
            section,
            record,
            name,
        })
    }

    /// Return the body of the first section in `document`, if any.
    ///
    /// The opener phrase and terminator keyword match case-insensitively
    /// and the body may span newlines. Only the first occurrence of the
    /// opener is considered; later sections with the same opener are
    /// ignored. A known constraint, not nesting-aware.
    pub fn locate_section<'a>(&self, document: &'a str) -> Option<&'a str> {
        self.section
            .captures(document)
            .and_then(|caps| caps.get(1))
            .map(|body| body.as_str())
    }

    /// Segment a section body into `(id, body)` record blocks.
    ///
    /// Matches are non-overlapping, case-sensitive, and emitted in
    /// order of appearance. An opener without a decimal ID after it is
    /// not a record and produces nothing.
    pub fn split_records<'a>(&self, section: &'a str) -> Vec<(&'a str, &'a str)> {
        self.record
            .captures_iter(section)
            .filter_map(|caps| {
                let id = caps.get(1)?.as_str();
                let body = caps.get(2)?.as_str();
                Some((id, body))
            })
            .collect()
    }

    /// Extract the quoted name field from a record body.
    ///
    /// The field keyword matches case-insensitively; the value is
    /// delimited by straight double or single quotes and taken verbatim
    /// with no escape processing, so an embedded quote of either kind
    /// ends the capture early. Falls back to the `<unnamed-rule-{id}>`
    /// placeholder when no field is present. A quoted empty value stays
    /// empty.
    pub fn extract_name(&self, body: &str, id: &str) -> String {
        match self.name.captures(body) {
            Some(caps) => caps[1].to_string(),
            None => RuleRecord::placeholder_name(id),
        }
    }

    /// Scan a whole document into an ordered list of records.
    ///
    /// Returns an empty list when the section is absent; callers that
    /// need to tell "no section" from "empty section" can use
    /// [`locate_section`](Self::locate_section) directly.
    pub fn parse(&self, document: &str) -> Vec<RuleRecord> {
        let Some(section) = self.locate_section(document) else {
            return Vec::new();
        };

        self.split_records(section)
            .into_iter()
            .map(|(id, body)| RuleRecord::new(id, self.extract_name(body, id)))
            .collect()
    }
}
