// src/services/mod.rs
pub mod agent;
pub mod career_planning;
pub mod documents;
pub mod job_search;
pub mod skill_analysis;

pub use agent::CareerAgent;
pub use career_planning::CareerPlanner;
pub use documents::{DocumentGenerator, UserProfile};
pub use job_search::{filter_jobs, job_catalog, JobListing, JobSearcher};
pub use skill_analysis::{extract_skills, ExtractedSkills, SkillAnalyzer};
