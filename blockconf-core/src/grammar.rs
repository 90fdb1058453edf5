/// Literal keywords that delimit sections, records, and the name field.
///
/// Case policy is fixed by the scanner rather than the grammar: the
/// section opener, section terminator, and field keyword match
/// case-insensitively, while the record opener and terminator (and the
/// numeric ID after the opener) match case-sensitively. This asymmetry
/// mirrors how real device exports are written and is relied on by
/// callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockGrammar {
    /// Phrase that opens the section, e.g. `config firewall policy`.
    pub section_opener: String,
    /// Keyword that closes the section, e.g. `end`.
    pub section_terminator: String,
    /// Keyword that opens a record block, followed by a decimal ID.
    pub record_opener: String,
    /// Keyword that closes a record block, e.g. `next`.
    pub record_terminator: String,
    /// Phrase that introduces the quoted name field, e.g. `set name`.
    pub field_keyword: String,
}

impl BlockGrammar {
    pub fn new(
        section_opener: impl Into<String>,
        section_terminator: impl Into<String>,
        record_opener: impl Into<String>,
        record_terminator: impl Into<String>,
        field_keyword: impl Into<String>,
    ) -> Self {
        Self {
            section_opener: section_opener.into(),
            section_terminator: section_terminator.into(),
            record_opener: record_opener.into(),
            record_terminator: record_terminator.into(),
            field_keyword: field_keyword.into(),
        }
    }
}
