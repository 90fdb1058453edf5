use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use blockconf_core::{BlockGrammar, BlockScanner, RuleRecord};
use thiserror::Error;

/// Errors raised while locating and reading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("path is not a file: {}", .0.display())]
    NotAFile(PathBuf),
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
}

/// Grammar literals for the FortiGate 7.2.x firewall policy section.
///
/// The `edit`/`next` record keywords are matched case-sensitively; the
/// surrounding section keywords and `set name` fold case.
pub fn policy_grammar() -> BlockGrammar {
    BlockGrammar::new("config firewall policy", "end", "edit", "next", "set name")
}

/// Read a configuration file, dropping undecodable byte runs.
///
/// FortiGate exports occasionally carry stray non-UTF-8 bytes (vendor
/// banners, pasted Windows-1252 text). Those runs are discarded rather
/// than failing the whole read, matching the tolerant decode the rest
/// of the pipeline expects.
pub fn read_config(path: &Path) -> Result<String, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(ConfigFileError::NotAFile(path.to_path_buf()));
    }

    let bytes = fs::read(path)?;
    Ok(decode_dropping_invalid(&bytes))
}

/// Extract firewall policy rules from the configuration file at `path`.
pub fn extract_rules(path: &Path) -> Result<Vec<RuleRecord>> {
    let content = read_config(path)
        .with_context(|| format!("cannot read configuration {}", path.display()))?;
    let scanner =
        BlockScanner::new(&policy_grammar()).context("failed to compile policy scanner")?;
    Ok(scanner.parse(&content))
}

fn decode_dropping_invalid(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{decode_dropping_invalid, policy_grammar, read_config, ConfigFileError};
    use blockconf_core::BlockScanner;

    #[test]
    fn invalid_bytes_are_dropped_not_replaced() {
        let bytes = b"set name \"a\xff\xfeb\"";
        assert_eq!(decode_dropping_invalid(bytes), "set name \"ab\"");
    }

    #[test]
    fn valid_utf8_passes_through_untouched() {
        let text = "config firewall policy\n edit 1\n next\nend\n";
        assert_eq!(decode_dropping_invalid(text.as_bytes()), text);
    }

    #[test]
    fn missing_path_is_reported_as_not_found() {
        let err = read_config(std::path::Path::new("/no/such/config.conf")).unwrap_err();
        assert!(matches!(err, ConfigFileError::NotFound(_)));
    }

    #[test]
    fn directory_path_is_reported_as_not_a_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = read_config(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigFileError::NotAFile(_)));
    }

    #[test]
    fn policy_grammar_compiles() {
        assert!(BlockScanner::new(&policy_grammar()).is_ok());
    }
}
