// src/parser/section.rs
//! Line-oriented section scanner over free-form completion text.
//!
//! A table of trigger keywords drives a two-state scanner: a line containing
//! a trigger (case-insensitive) opens or switches the current section, later
//! non-empty lines accumulate into it, and a blank line closes it. Text with
//! no recognizable trigger is never dropped - it lands whole in the schema's
//! overflow field.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy)]
pub struct SectionField {
    pub name: &'static str,
    pub trigger: &'static str,
}

impl SectionField {
    pub const fn new(name: &'static str, trigger: &'static str) -> Self {
        Self { name, trigger }
    }
}

/// Fixed enumeration of canonical section names with their trigger keywords,
/// plus the overflow field for wholly-unrecognized responses
#[derive(Debug, Clone)]
pub struct SectionSchema {
    fields: Vec<SectionField>,
    overflow: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    NoSection,
    InSection(&'static str),
}

impl SectionSchema {
    pub fn new(fields: Vec<SectionField>, overflow: &'static str) -> Self {
        Self { fields, overflow }
    }

    pub fn overflow_field(&self) -> &'static str {
        self.overflow
    }

    fn match_trigger(&self, line: &str) -> Option<&'static str> {
        let lower = line.to_lowercase();
        self.fields
            .iter()
            .find(|field| lower.contains(field.trigger))
            .map(|field| field.name)
    }

    /// Field names in schema enumeration order, overflow last
    fn field_order(&self) -> Vec<&'static str> {
        let mut order: Vec<&'static str> = self.fields.iter().map(|f| f.name).collect();
        if !order.contains(&self.overflow) {
            order.push(self.overflow);
        }
        order
    }
}

/// Extracted sections, iterated in schema order rather than source order
#[derive(Debug, Clone)]
pub struct ParsedSections {
    order: Vec<&'static str>,
    values: HashMap<&'static str, String>,
}

impl ParsedSections {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(|s| s.as_str())
    }

    pub fn get_or_default(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    /// Non-empty sections in schema enumeration order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.order
            .iter()
            .filter_map(|name| self.values.get(name).map(|v| (*name, v.as_str())))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Scan completion text against a schema of trigger keywords
pub fn extract_sections(text: &str, schema: &SectionSchema) -> ParsedSections {
    let mut values: HashMap<&'static str, String> = HashMap::new();
    let mut state = ScanState::NoSection;
    let mut any_trigger = false;

    for raw_line in text.lines() {
        let line = raw_line.trim();

        if line.is_empty() {
            state = ScanState::NoSection;
            continue;
        }

        if let Some(name) = schema.match_trigger(line) {
            state = ScanState::InSection(name);
            any_trigger = true;
            continue;
        }

        if let ScanState::InSection(name) = state {
            let value = values.entry(name).or_default();
            value.push_str(line);
            value.push('\n');
        }
        // Lines preceding any trigger are discarded
    }

    if !any_trigger && !text.trim().is_empty() {
        values.insert(schema.overflow_field(), text.to_string());
    }

    ParsedSections {
        order: schema.field_order(),
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> SectionSchema {
        SectionSchema::new(
            vec![
                SectionField::new("summary", "summary"),
                SectionField::new("skills", "skill"),
                SectionField::new("timeline", "timeline"),
            ],
            "details",
        )
    }

    #[test]
    fn test_basic_section_extraction() {
        let parsed = extract_sections("Summary:\nGreat candidate.\n\nSkills:\nPython, SQL", &schema());

        assert_eq!(parsed.get("summary"), Some("Great candidate.\n"));
        assert_eq!(parsed.get("skills"), Some("Python, SQL\n"));
        assert_eq!(parsed.get("timeline"), None);
    }

    #[test]
    fn test_trigger_is_case_insensitive_substring() {
        let parsed = extract_sections("## Professional SUMMARY\nSolid.\n", &schema());

        assert_eq!(parsed.get("summary"), Some("Solid.\n"));
    }

    #[test]
    fn test_lines_before_first_trigger_are_discarded() {
        let parsed = extract_sections("preamble chatter\nSkills:\nRust\n", &schema());

        assert_eq!(parsed.get("skills"), Some("Rust\n"));
        assert_eq!(parsed.get("details"), None);
    }

    #[test]
    fn test_blank_line_closes_section() {
        let parsed = extract_sections("Skills:\nRust\n\norphaned line\n", &schema());

        assert_eq!(parsed.get("skills"), Some("Rust\n"));
    }

    #[test]
    fn test_unrecognized_text_lands_in_overflow() {
        let text = "Nothing here matches any keyword.\nStill nothing.";
        let parsed = extract_sections(text, &schema());

        assert_eq!(parsed.get("details"), Some(text));
    }

    #[test]
    fn test_empty_input_yields_no_sections() {
        let parsed = extract_sections("", &schema());

        assert!(parsed.is_empty());
    }

    #[test]
    fn test_iter_follows_schema_order() {
        // Source order is skills before summary; iteration must not be
        let parsed = extract_sections("Skills:\nRust\n\nSummary:\nFine.\n", &schema());
        let names: Vec<&str> = parsed.iter().map(|(name, _)| name).collect();

        assert_eq!(names, vec!["summary", "skills"]);
    }

    #[test]
    fn test_reparse_of_rendered_sections_is_stable() {
        let parsed = extract_sections("Summary:\nGreat candidate.\n\nSkills:\nPython, SQL", &schema());

        let mut rendered = String::new();
        for (name, content) in parsed.iter() {
            rendered.push_str(&format!("{}:\n{}\n", name, content));
        }

        let reparsed = extract_sections(&rendered, &schema());
        assert_eq!(reparsed.get("summary"), parsed.get("summary"));
        assert_eq!(reparsed.get("skills"), parsed.get("skills"));
    }
}
