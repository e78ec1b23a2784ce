// src/parser/mod.rs
pub mod paths;
pub mod score;
pub mod section;

pub use paths::{extract_career_suggestions, CareerSuggestion};
pub use score::extract_match_score;
pub use section::{extract_sections, ParsedSections, SectionField, SectionSchema};
