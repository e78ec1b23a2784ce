// src/services/skill_analysis.rs
//! Skill assessment: keyword extraction over fixed categories, then two
//! completions (gap analysis, learning recommendations) folded into one report

use crate::inference::Completion;
use crate::prompt;
use std::sync::Arc;
use tracing::error;

const GAP_PLACEHOLDER: &str = "Unable to analyze skill gaps at this time.";
const RECOMMENDATIONS_PLACEHOLDER: &str = "Unable to generate recommendations at this time.";

const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Technical",
        &[
            "python",
            "java",
            "javascript",
            "rust",
            "sql",
            "aws",
            "machine learning",
            "data science",
        ],
    ),
    (
        "Soft Skills",
        &[
            "communication",
            "leadership",
            "teamwork",
            "problem solving",
            "creativity",
        ],
    ),
    (
        "Industry",
        &[
            "healthcare",
            "finance",
            "technology",
            "education",
            "retail",
            "manufacturing",
        ],
    ),
    (
        "Tools",
        &[
            "excel", "tableau", "power bi", "jira", "git", "docker", "kubernetes",
        ],
    ),
];

/// Skills found per category, in category enumeration order
#[derive(Debug, Clone, Default)]
pub struct ExtractedSkills {
    pub categories: Vec<(&'static str, Vec<String>)>,
}

impl ExtractedSkills {
    fn joined(&self, category: &str) -> String {
        self.categories
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, skills)| skills.join(", "))
            .unwrap_or_default()
    }
}

/// Match category keywords against the combined input text
pub fn extract_skills(text: &str) -> ExtractedSkills {
    let lower = text.to_lowercase();

    let categories = SKILL_CATEGORIES
        .iter()
        .map(|(name, keywords)| {
            let found = keywords
                .iter()
                .filter(|keyword| lower.contains(*keyword))
                .map(|keyword| title_case(keyword))
                .collect();
            (*name, found)
        })
        .collect();

    ExtractedSkills { categories }
}

fn title_case(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub struct SkillAnalyzer<C> {
    client: Arc<C>,
}

impl<C: Completion> SkillAnalyzer<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Analyze user skills and render the assessment report. A failed model
    /// step degrades to its placeholder; the rest of the report still renders.
    pub async fn analyze(&self, user_input: &str, resume_text: &str) -> String {
        let combined = format!("{}\n\n{}", user_input, resume_text);
        let skills = extract_skills(combined.trim());

        let gap_prompt = prompt::skill_gap_analysis(
            &skills.joined("Technical"),
            &skills.joined("Soft Skills"),
            &skills.joined("Industry"),
            &skills.joined("Tools"),
            user_input,
        );
        let gap_analysis = match self.client.complete(&gap_prompt, 800, 0.4).await {
            Ok(text) => text,
            Err(e) => {
                error!("Skill gap analysis error: {}", e);
                GAP_PLACEHOLDER.to_string()
            }
        };

        let current_skills: Vec<String> = skills
            .categories
            .iter()
            .filter(|(_, found)| !found.is_empty())
            .map(|(name, found)| format!("{}: {}", name, found.join(", ")))
            .collect();

        let recommendations_prompt =
            prompt::learning_recommendations(&current_skills.join("; "), &gap_analysis);
        let recommendations = match self.client.complete(&recommendations_prompt, 800, 0.5).await {
            Ok(text) => text,
            Err(e) => {
                error!("Recommendation generation error: {}", e);
                RECOMMENDATIONS_PLACEHOLDER.to_string()
            }
        };

        format_analysis_results(&skills, &gap_analysis, &recommendations)
    }
}

fn format_analysis_results(
    skills: &ExtractedSkills,
    gap_analysis: &str,
    recommendations: &str,
) -> String {
    let mut result = String::from("## 🎯 Skill Analysis Results\n\n");

    result.push_str("### 💪 Your Current Skills\n\n");
    for (category, found) in &skills.categories {
        if !found.is_empty() {
            result.push_str(&format!("**{}:** {}\n\n", category, found.join(", ")));
        }
    }

    result.push_str("### 📊 Skill Gap Analysis\n\n");
    result.push_str(gap_analysis);
    result.push_str("\n\n");

    result.push_str("### 🎓 Learning Recommendations\n\n");
    result.push_str(recommendations);
    result.push_str("\n\n");

    result.push_str("### ✅ Next Steps\n\n");
    result.push_str("1. Review the skill gaps and prioritize based on your career goals\n");
    result.push_str("2. Start with high-priority skills that have immediate impact\n");
    result.push_str("3. Create a learning schedule and track your progress\n");
    result.push_str("4. Build portfolio projects to demonstrate new skills\n");
    result.push_str("5. Update your resume and LinkedIn profile as you develop new skills\n");

    result
}
