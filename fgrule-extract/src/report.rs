use blockconf_core::RuleRecord;

/// Render one rule name per line, in record order.
pub fn render_simple(rules: &[RuleRecord]) -> String {
    rules
        .iter()
        .map(|rule| rule.name.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a count header followed by aligned ID/name lines.
pub fn render_detailed(rules: &[RuleRecord]) -> String {
    let mut out = Vec::new();
    out.push(format!("Found {} firewall rule(s):\n", rules.len()));
    for rule in rules {
        out.push(format!("  ID: {:>6}  |  Name: {}", rule.id, rule.name));
    }
    out.join("\n")
}

/// Render an `id,name` CSV with embedded double quotes doubled.
pub fn render_csv(rules: &[RuleRecord]) -> String {
    let mut out = vec!["id,name".to_string()];
    for rule in rules {
        out.push(format!("{},\"{}\"", rule.id, rule.name.replace('"', "\"\"")));
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{render_csv, render_detailed, render_simple};
    use blockconf_core::RuleRecord;

    fn rules() -> Vec<RuleRecord> {
        vec![
            RuleRecord::new("12", "allow-dns"),
            RuleRecord::new("3", "<unnamed-rule-3>"),
        ]
    }

    #[test]
    fn simple_lists_names_only() {
        assert_eq!(render_simple(&rules()), "allow-dns\n<unnamed-rule-3>");
    }

    #[test]
    fn detailed_has_header_blank_line_and_aligned_ids() {
        let expected = "Found 2 firewall rule(s):\n\n  ID:     12  |  Name: allow-dns\n  ID:      3  |  Name: <unnamed-rule-3>";
        assert_eq!(render_detailed(&rules()), expected);
    }

    #[test]
    fn csv_doubles_embedded_double_quotes() {
        let rules = vec![RuleRecord::new("1", "say \"hi\"")];
        assert_eq!(render_csv(&rules), "id,name\n1,\"say \"\"hi\"\"\"");
    }

    #[test]
    fn csv_keeps_single_quotes_and_commas_inside_quoted_field() {
        let rules = vec![RuleRecord::new("2", "it's a,b")];
        assert_eq!(render_csv(&rules), "id,name\n2,\"it's a,b\"");
    }
}
