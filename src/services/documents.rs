// src/services/documents.rs
//! Resume, cover letter and LinkedIn summary generation. Resume completions
//! are section-parsed back into a fixed template; the other two documents are
//! rendered with static tips appended.

use crate::inference::Completion;
use crate::parser::{extract_sections, SectionField, SectionSchema};
use crate::prompt;
use chrono::Utc;
use std::sync::Arc;
use tracing::error;

const COVER_LETTER_PLACEHOLDER: &str = "Unable to generate cover letter at this time.";
const LINKEDIN_PLACEHOLDER: &str = "Unable to generate LinkedIn summary at this time.";

const FALLBACK_SUMMARY: &str =
    "Motivated professional with strong skills and experience seeking new opportunities.";

fn resume_schema() -> SectionSchema {
    SectionSchema::new(
        vec![
            SectionField::new("summary", "summary"),
            SectionField::new("skills", "skill"),
            SectionField::new("experience", "experience"),
            SectionField::new("education", "education"),
            SectionField::new("projects", "project"),
        ],
        "summary",
    )
}

/// Candidate details to personalize the generated documents
#[derive(Debug, Clone, Default)]
pub struct UserProfile {
    pub skills: String,
    pub interests: String,
    pub experience: String,
    pub goals: String,
    pub achievements: String,
    pub industry: String,
}

#[derive(Debug, Clone)]
struct ResumeContent {
    name: String,
    contact_info: String,
    summary: String,
    skills: String,
    experience: String,
    education: String,
    projects: String,
}

pub struct DocumentGenerator<C> {
    client: Arc<C>,
}

impl<C: Completion> DocumentGenerator<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Generate a personalized resume. A failed invocation falls back to
    /// basic content built from the raw inputs.
    pub async fn create_resume(
        &self,
        personal_info: &str,
        experience: &str,
        skills: &str,
    ) -> String {
        let prompt = prompt::resume(personal_info, experience, skills);

        let content = match self.client.complete(&prompt, 1200, 0.3).await {
            Ok(text) => parse_resume_content(&text, personal_info),
            Err(e) => {
                error!("Resume content generation error: {}", e);
                basic_resume_content(personal_info, experience, skills)
            }
        };

        format_resume(&content)
    }

    /// Generate a cover letter tailored to one job description
    pub async fn create_cover_letter(&self, job_description: &str, profile: &UserProfile) -> String {
        let prompt = prompt::cover_letter(
            job_description,
            &profile.skills,
            &profile.experience,
            &profile.achievements,
        );

        let content = match self.client.complete(&prompt, 800, 0.4).await {
            Ok(text) => text,
            Err(e) => {
                error!("Cover letter generation error: {}", e);
                COVER_LETTER_PLACEHOLDER.to_string()
            }
        };

        format_cover_letter(&content)
    }

    /// Generate a LinkedIn profile summary
    pub async fn create_linkedin_summary(&self, profile: &UserProfile) -> String {
        let prompt = prompt::linkedin_summary(
            &profile.skills,
            &profile.experience,
            &profile.goals,
            &profile.industry,
        );

        let summary = match self.client.complete(&prompt, 600, 0.5).await {
            Ok(text) => text,
            Err(e) => {
                error!("LinkedIn summary generation error: {}", e);
                LINKEDIN_PLACEHOLDER.to_string()
            }
        };

        format_linkedin_summary(&summary)
    }
}

fn parse_resume_content(completion: &str, personal_info: &str) -> ResumeContent {
    let sections = extract_sections(completion, &resume_schema());

    ResumeContent {
        name: extract_name(personal_info),
        contact_info: extract_contact_info(personal_info),
        summary: sections.get_or_default("summary").to_string(),
        skills: sections.get_or_default("skills").to_string(),
        experience: sections.get_or_default("experience").to_string(),
        education: sections.get_or_default("education").to_string(),
        projects: sections.get_or_default("projects").to_string(),
    }
}

fn basic_resume_content(personal_info: &str, experience: &str, skills: &str) -> ResumeContent {
    ResumeContent {
        name: extract_name(personal_info),
        contact_info: extract_contact_info(personal_info),
        summary: FALLBACK_SUMMARY.to_string(),
        skills: skills.to_string(),
        experience: experience.to_string(),
        education: "Education details to be added".to_string(),
        projects: "Notable projects to be highlighted".to_string(),
    }
}

fn extract_name(personal_info: &str) -> String {
    for line in personal_info.lines() {
        if line.to_lowercase().contains("name") {
            if let Some((_, value)) = line.split_once(':') {
                let value = value.trim();
                if !value.is_empty() {
                    return value.to_string();
                }
            }
        }
    }
    "Your Name".to_string()
}

fn extract_contact_info(personal_info: &str) -> String {
    let contact_lines: Vec<&str> = personal_info
        .lines()
        .filter(|line| {
            let lower = line.to_lowercase();
            ["email", "phone", "linkedin", "address"]
                .iter()
                .any(|k| lower.contains(k))
        })
        .map(|line| line.trim())
        .collect();

    if contact_lines.is_empty() {
        "Contact Information".to_string()
    } else {
        contact_lines.join("\n")
    }
}

fn format_resume(content: &ResumeContent) -> String {
    format!(
        "# 📄 Professional Resume\n\n\
         ## {}\n\
         {}\n\n\
         ---\n\n\
         ## 🎯 Professional Summary\n\
         {}\n\n\
         ---\n\n\
         ## 💪 Skills\n\
         {}\n\n\
         ---\n\n\
         ## 💼 Professional Experience\n\
         {}\n\n\
         ---\n\n\
         ## 🎓 Education\n\
         {}\n\n\
         ---\n\n\
         ## 🚀 Projects\n\
         {}\n\n\
         ---\n\n\
         *Resume generated by LaunchPad.AI on {}*\n",
        content.name,
        content.contact_info,
        content.summary,
        content.skills,
        content.experience,
        content.education,
        content.projects,
        Utc::now().format("%B %d, %Y"),
    )
}

fn format_cover_letter(content: &str) -> String {
    format!(
        "# 📝 Cover Letter\n\n\
         {}\n\n\
         ---\n\n\
         *Cover letter generated by LaunchPad.AI on {}*\n\n\
         ## 💡 Tips for Success:\n\
         - Customize the company name and specific role details\n\
         - Add specific examples from your experience\n\
         - Proofread for grammar and spelling\n\
         - Keep it to one page when printed\n\
         - Save as PDF for applications\n",
        content,
        Utc::now().format("%B %d, %Y"),
    )
}

fn format_linkedin_summary(summary: &str) -> String {
    format!(
        "# 💼 LinkedIn Profile Summary\n\n\
         {}\n\n\
         ---\n\n\
         *Summary generated by LaunchPad.AI on {}*\n\n\
         ## 📝 Optimization Tips:\n\
         - Add relevant keywords for your industry\n\
         - Include a professional headshot\n\
         - Keep it under 2,000 characters\n\
         - Update regularly as you grow\n\
         - Engage with your network's content\n",
        summary,
        Utc::now().format("%B %d, %Y"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{FailingClient, FixedClient};

    const PERSONAL_INFO: &str = "Name: Jane Smith\nEmail: jane@example.com\nPhone: 555-0101";

    #[test]
    fn test_extract_name_and_contact() {
        assert_eq!(extract_name(PERSONAL_INFO), "Jane Smith");
        assert_eq!(
            extract_contact_info(PERSONAL_INFO),
            "Email: jane@example.com\nPhone: 555-0101"
        );
        assert_eq!(extract_name("no structure"), "Your Name");
        assert_eq!(extract_contact_info("no structure"), "Contact Information");
    }

    #[tokio::test]
    async fn test_resume_sections_parsed_into_template() {
        let completion = "Professional Summary:\nSeasoned engineer.\n\n\
                          Skills:\nRust, SQL\n\n\
                          Experience:\nBuilt things.\n";
        let generator = DocumentGenerator::new(Arc::new(FixedClient::new(completion)));

        let resume = generator.create_resume(PERSONAL_INFO, "", "").await;

        assert!(resume.contains("## Jane Smith"));
        assert!(resume.contains("Seasoned engineer."));
        assert!(resume.contains("Rust, SQL"));
        assert!(resume.contains("Built things."));
        assert!(resume.contains("*Resume generated by LaunchPad.AI on"));
    }

    #[tokio::test]
    async fn test_resume_falls_back_to_basic_content_on_failure() {
        let generator = DocumentGenerator::new(Arc::new(FailingClient));

        let resume = generator
            .create_resume(PERSONAL_INFO, "Ten years in retail", "Rust, SQL")
            .await;

        assert!(resume.contains(FALLBACK_SUMMARY));
        assert!(resume.contains("Ten years in retail"));
        assert!(resume.contains("Rust, SQL"));
        assert!(resume.contains("Education details to be added"));
    }

    #[tokio::test]
    async fn test_cover_letter_appends_static_tips() {
        let generator = DocumentGenerator::new(Arc::new(FixedClient::new("Dear hiring team,")));

        let letter = generator
            .create_cover_letter("Backend role", &UserProfile::default())
            .await;

        assert!(letter.starts_with("# 📝 Cover Letter"));
        assert!(letter.contains("Dear hiring team,"));
        assert!(letter.contains("## 💡 Tips for Success:"));
        assert!(letter.contains("- Save as PDF for applications"));
    }

    #[tokio::test]
    async fn test_linkedin_summary_placeholder_on_failure() {
        let generator = DocumentGenerator::new(Arc::new(FailingClient));

        let summary = generator.create_linkedin_summary(&UserProfile::default()).await;

        assert!(summary.contains(LINKEDIN_PLACEHOLDER));
        assert!(summary.contains("## 📝 Optimization Tips:"));
    }
}
