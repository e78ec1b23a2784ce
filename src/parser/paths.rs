// src/parser/paths.rs
//! Career-path block parser: blank-line-delimited blocks with keyword-tagged
//! fields. An unparseable completion becomes a single fallback suggestion
//! carrying the full text, so nothing is silently discarded.

/// One suggested career path pulled out of a completion
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CareerSuggestion {
    pub title: Option<String>,
    pub industry: Option<String>,
    pub fit_reason: Option<String>,
    pub salary: Option<String>,
    pub timeline: Option<String>,
    pub description: Option<String>,
}

impl CareerSuggestion {
    fn has_content(&self) -> bool {
        self.title.is_some()
            || self.industry.is_some()
            || self.fit_reason.is_some()
            || self.salary.is_some()
            || self.timeline.is_some()
            || self.description.is_some()
    }

    /// Display title, falling back to a positional label
    pub fn title_or(&self, index: usize) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("Career Path {}", index + 1))
    }
}

/// Text after the field label, or the whole line when there is no label
fn field_value(line: &str) -> String {
    match line.split_once(':') {
        Some((_, value)) if !value.trim().is_empty() => value.trim().to_string(),
        _ => line.to_string(),
    }
}

pub fn extract_career_suggestions(text: &str) -> Vec<CareerSuggestion> {
    let mut suggestions = Vec::new();
    let mut current = CareerSuggestion::default();

    for raw_line in text.lines() {
        let line = raw_line.trim();

        if line.is_empty() {
            if current.has_content() {
                suggestions.push(std::mem::take(&mut current));
            }
            continue;
        }

        let lower = line.to_lowercase();
        let is_title_line = line.contains(':')
            && ["path", "career", "role"].iter().any(|k| lower.contains(k));

        if is_title_line {
            if let Some(title) = line.rsplit(':').next() {
                let title = title.trim();
                if !title.is_empty() {
                    current.title = Some(title.to_string());
                }
            }
        } else if lower.contains("industry") {
            current.industry = Some(field_value(line));
        } else if lower.contains("fit") || lower.contains("why") {
            current.fit_reason = Some(field_value(line));
        } else if lower.contains("salary") {
            current.salary = Some(field_value(line));
        } else if lower.contains("timeline") {
            current.timeline = Some(field_value(line));
        }
    }

    if current.has_content() {
        suggestions.push(current);
    }

    if suggestions.is_empty() {
        suggestions.push(CareerSuggestion {
            title: Some("Custom Career Path".to_string()),
            description: Some(text.to_string()),
            ..Default::default()
        });
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = "\
Career Path 1: Data Analyst
Industry: Healthcare technology companies
Why it fits: strong SQL background
Salary range: $60,000 - $80,000
Timeline: 6-9 months

Career Path 2: Machine Learning Engineer
Industry: Technology
Salary range: $110,000 - $150,000
Timeline: 18-24 months";

    #[test]
    fn test_blocks_split_on_blank_lines() {
        let suggestions = extract_career_suggestions(FIXTURE);

        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].title.as_deref(), Some("Data Analyst"));
        assert_eq!(
            suggestions[1].title.as_deref(),
            Some("Machine Learning Engineer")
        );
    }

    #[test]
    fn test_fields_are_captured() {
        let suggestions = extract_career_suggestions(FIXTURE);
        let first = &suggestions[0];

        assert!(first.industry.as_deref().unwrap().contains("Healthcare"));
        assert!(first.fit_reason.as_deref().unwrap().contains("SQL"));
        assert!(first.salary.as_deref().unwrap().contains("$60,000"));
        // Field labels are stripped from captured values
        assert_eq!(first.timeline.as_deref(), Some("6-9 months"));
    }

    #[test]
    fn test_unparseable_text_becomes_single_fallback() {
        let text = "The model rambled about nothing in particular.";
        let suggestions = extract_career_suggestions(text);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].title.as_deref(), Some("Custom Career Path"));
        assert_eq!(suggestions[0].description.as_deref(), Some(text));
    }

    #[test]
    fn test_title_or_falls_back_to_position() {
        let suggestion = CareerSuggestion::default();
        assert_eq!(suggestion.title_or(2), "Career Path 3");
    }
}
