// src/services/career_planning.rs
//! Career path suggestions: profile analysis, suggestion generation, and a
//! 12-month roadmap per suggested path, rendered into one report

use crate::inference::Completion;
use crate::parser::{extract_career_suggestions, CareerSuggestion};
use crate::prompt;
use std::sync::Arc;
use tracing::error;

const ANALYSIS_PLACEHOLDER: &str = "Unable to analyze profile at this time.";
const SUGGESTIONS_PLACEHOLDER: &str = "Unable to generate suggestions.";
const ROADMAP_PLACEHOLDER: &str = "Roadmap temporarily unavailable.";

/// Suggestions beyond this count get no roadmap and are not rendered
const MAX_RENDERED_PATHS: usize = 3;

pub struct CareerPlanner<C> {
    client: Arc<C>,
}

impl<C: Completion> CareerPlanner<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Generate personalized career path suggestions. Later prompts embed
    /// earlier completions; a failure in any single roadmap leaves the other
    /// paths intact.
    pub async fn suggest_paths(&self, skills: &str, interests: &str, experience: &str) -> String {
        let analysis = self.analyze_profile(skills, interests, experience).await;
        let suggestions = self.generate_suggestions(&analysis).await;
        let roadmaps = self.create_roadmaps(&suggestions, skills, experience).await;

        format_career_suggestions(&suggestions, &roadmaps)
    }

    async fn analyze_profile(&self, skills: &str, interests: &str, experience: &str) -> String {
        let prompt = prompt::profile_analysis(skills, interests, experience);

        match self.client.complete(&prompt, 1000, 0.4).await {
            Ok(text) => text,
            Err(e) => {
                error!("Profile analysis error: {}", e);
                ANALYSIS_PLACEHOLDER.to_string()
            }
        }
    }

    async fn generate_suggestions(&self, analysis: &str) -> Vec<CareerSuggestion> {
        let prompt = prompt::career_suggestions(analysis);

        match self.client.complete(&prompt, 1200, 0.5).await {
            Ok(text) => extract_career_suggestions(&text),
            Err(e) => {
                error!("Career suggestions error: {}", e);
                vec![CareerSuggestion {
                    title: Some("Error".to_string()),
                    description: Some(SUGGESTIONS_PLACEHOLDER.to_string()),
                    ..Default::default()
                }]
            }
        }
    }

    /// One roadmap per rendered suggestion, failures localized
    async fn create_roadmaps(
        &self,
        suggestions: &[CareerSuggestion],
        skills: &str,
        experience: &str,
    ) -> Vec<String> {
        let mut roadmaps = Vec::new();

        for (i, suggestion) in suggestions.iter().take(MAX_RENDERED_PATHS).enumerate() {
            let title = suggestion.title_or(i);
            let goal = suggestion.description.clone().unwrap_or_else(|| title.clone());
            let prompt = prompt::career_roadmap(&title, &goal, skills, experience);

            let roadmap = match self.client.complete(&prompt, 1000, 0.4).await {
                Ok(text) => text,
                Err(e) => {
                    error!("Roadmap creation error for {}: {}", title, e);
                    ROADMAP_PLACEHOLDER.to_string()
                }
            };
            roadmaps.push(roadmap);
        }

        roadmaps
    }
}

fn format_career_suggestions(suggestions: &[CareerSuggestion], roadmaps: &[String]) -> String {
    let mut result = String::from("## 🚀 Personalized Career Path Suggestions\n\n");

    for (i, suggestion) in suggestions.iter().take(MAX_RENDERED_PATHS).enumerate() {
        let title = suggestion.title_or(i);
        result.push_str(&format!("### {}. {}\n\n", i + 1, title));

        // Fields in fixed order regardless of source text order
        let fields: [(&str, &Option<String>); 5] = [
            ("Industry", &suggestion.industry),
            ("Fit Reason", &suggestion.fit_reason),
            ("Salary", &suggestion.salary),
            ("Timeline", &suggestion.timeline),
            ("Description", &suggestion.description),
        ];
        for (label, value) in fields {
            if let Some(value) = value {
                result.push_str(&format!("**{}:** {}\n\n", label, value));
            }
        }

        if let Some(roadmap) = roadmaps.get(i) {
            result.push_str(&format!("#### 📋 12-Month Roadmap for {}\n\n", title));
            result.push_str(roadmap);
            result.push_str("\n\n");
        }

        result.push_str("---\n\n");
    }

    result.push_str("## 💡 Next Steps\n\n");
    result.push_str("1. **Choose Your Path**: Review the suggestions and select the one that resonates most with your goals\n");
    result.push_str("2. **Start Learning**: Begin with the first quarter's skill development recommendations\n");
    result.push_str("3. **Build Your Network**: Connect with professionals in your chosen field\n");
    result.push_str("4. **Create a Portfolio**: Start working on projects that demonstrate your growing skills\n");
    result.push_str("5. **Track Progress**: Set monthly check-ins to review your progress and adjust the plan\n\n");

    result.push_str("Remember: Career paths are flexible. You can pivot and adjust as you learn and grow! 🌟");

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{FailingClient, FixedClient};

    const FIXTURE: &str = "\
Career Path 1: Data Analyst
Industry: Healthcare
Salary range: $60,000 - $80,000
Timeline: 6-9 months

Career Path 2: Health Informatics Specialist
Industry: Healthcare technology
Timeline: 12 months

Career Path 3: Clinical Data Manager
Industry: Pharma
Salary range: $75,000 - $95,000";

    #[tokio::test]
    async fn test_report_has_three_titled_sections_with_roadmaps() {
        let planner = CareerPlanner::new(Arc::new(FixedClient::new(FIXTURE)));

        let report = planner
            .suggest_paths("Python, SQL", "Healthcare", "Entry-level")
            .await;

        assert_eq!(report.matches("\n### ").count(), 3);
        assert_eq!(report.matches("#### 📋 12-Month Roadmap for ").count(), 3);
        assert!(report.contains("### 1. Data Analyst"));
        assert!(report.contains("### 3. Clinical Data Manager"));

        // Static next-step tips render verbatim at the end
        assert!(report.contains("## 💡 Next Steps"));
        assert!(report.contains("1. **Choose Your Path**"));
        assert!(report.contains("5. **Track Progress**"));
    }

    #[tokio::test]
    async fn test_fields_render_in_fixed_order() {
        let planner = CareerPlanner::new(Arc::new(FixedClient::new(FIXTURE)));

        let report = planner.suggest_paths("SQL", "Healthcare", "Entry").await;

        let industry = report.find("**Industry:** Healthcare").unwrap();
        let salary = report.find("**Salary:**").unwrap();
        let timeline = report.find("**Timeline:**").unwrap();
        assert!(industry < salary && salary < timeline);
    }

    #[tokio::test]
    async fn test_unstructured_completion_yields_one_fallback_path() {
        let planner = CareerPlanner::new(Arc::new(FixedClient::new(
            "Some free-form advice with no recognizable structure at all.",
        )));

        let report = planner.suggest_paths("SQL", "Finance", "Mid").await;

        assert!(report.contains("### 1. Custom Career Path"));
        assert!(report.contains("no recognizable structure"));
        assert!(report.contains("## 💡 Next Steps"));
    }

    #[tokio::test]
    async fn test_total_failure_still_renders_report() {
        let planner = CareerPlanner::new(Arc::new(FailingClient));

        let report = planner.suggest_paths("SQL", "Finance", "Mid").await;

        assert!(report.contains("### 1. Error"));
        assert!(report.contains("Unable to generate suggestions."));
        assert!(report.contains("Roadmap temporarily unavailable."));
        assert!(report.contains("## 💡 Next Steps"));
    }
}
