use serde::Serialize;

/// One extracted record: a numeric ID and its name.
///
/// `id` is always the contiguous digit run captured after the record
/// opener. `name` is either the quoted field value taken verbatim or
/// the `<unnamed-rule-{id}>` placeholder when the field is absent. An
/// explicitly quoted empty name stays empty and is distinct from the
/// placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleRecord {
    pub id: String,
    pub name: String,
}

impl RuleRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Placeholder name for a record block without a name field.
    pub fn placeholder_name(id: &str) -> String {
        format!("<unnamed-rule-{id}>")
    }
}

#[cfg(test)]
mod tests {
    use super::RuleRecord;

    #[test]
    fn placeholder_embeds_id_verbatim() {
        assert_eq!(RuleRecord::placeholder_name("42"), "<unnamed-rule-42>");
        assert_eq!(RuleRecord::placeholder_name("007"), "<unnamed-rule-007>");
    }
}
