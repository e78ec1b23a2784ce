// src/prompt.rs
//! Prompt assembly - pure string construction, no validation beyond treating
//! absent fields as empty

/// Bounded window of prior (user, agent) exchanges rendered into chat context
pub const HISTORY_WINDOW: usize = 3;

pub const SYSTEM_PROMPT: &str = "\
You are LaunchPad.AI, an expert AI career copilot. Your role is to help users \
navigate their career journey from dream to job offer.

Core capabilities:
- Analyze skills and identify gaps
- Suggest personalized career paths
- Recommend learning resources
- Generate resumes and cover letters
- Find job opportunities
- Provide interview preparation

Always be:
- Encouraging and supportive
- Data-driven and practical
- Personalized to user's situation
- Action-oriented with clear next steps

Use reasoning to understand user goals, assess their current situation, and \
provide tailored guidance.";

/// One prior exchange in a conversation
#[derive(Debug, Clone)]
pub struct Turn {
    pub user: String,
    pub agent: String,
}

/// Conversation context: persona preamble, the last few exchanges, then the
/// current message
pub fn chat_context(message: &str, history: &[Turn]) -> String {
    let mut context = format!("{}\n\n", SYSTEM_PROMPT);

    if !history.is_empty() {
        context.push_str("Previous conversation:\n");
        let start = history.len().saturating_sub(HISTORY_WINDOW);
        for turn in &history[start..] {
            context.push_str(&format!("User: {}\n", turn.user));
            context.push_str(&format!("Assistant: {}\n\n", turn.agent));
        }
    }

    context.push_str(&format!("Current user message: {}\n\n", message));
    context.push_str("Provide a helpful, personalized response as LaunchPad.AI:");

    context
}

pub fn profile_analysis(skills: &str, interests: &str, experience: &str) -> String {
    format!(
        "Analyze this user profile for career planning:\n\n\
         Skills: {skills}\n\
         Interests: {interests}\n\
         Experience Level: {experience}\n\n\
         Provide analysis in these areas:\n\
         1. Strengths and unique value proposition\n\
         2. Industry alignment based on interests\n\
         3. Career stage and progression potential\n\
         4. Growth areas and development needs\n\
         5. Personality and work style indicators\n\n\
         Be specific and actionable in your analysis."
    )
}

pub fn career_suggestions(profile_analysis: &str) -> String {
    format!(
        "Based on this profile analysis, suggest 3-5 specific career paths:\n\n\
         Profile Analysis: {profile_analysis}\n\n\
         For each career path, provide:\n\
         1. Job title/role name\n\
         2. Industry and company types\n\
         3. Why it's a good fit (2-3 reasons)\n\
         4. Salary range expectations\n\
         5. Growth potential and trajectory\n\
         6. Key requirements and qualifications\n\
         7. Timeline to reach this role\n\n\
         Make suggestions realistic and achievable while being aspirational.\n\
         Format as structured text with clear sections for each career path."
    )
}

pub fn career_roadmap(title: &str, goal: &str, skills: &str, experience: &str) -> String {
    format!(
        "Create a detailed 12-month career roadmap for: {title}\n\n\
         Current Skills: {skills}\n\
         Experience Level: {experience}\n\
         Career Goal: {goal}\n\n\
         Provide a month-by-month plan including:\n\
         - Skills to develop each quarter\n\
         - Certifications or courses to complete\n\
         - Networking and professional development activities\n\
         - Portfolio projects or experience to gain\n\
         - Job search and application timeline\n\
         - Milestones and success metrics\n\n\
         Make it specific and actionable."
    )
}

pub fn skill_gap_analysis(
    technical: &str,
    soft_skills: &str,
    industry: &str,
    tools: &str,
    user_goals: &str,
) -> String {
    format!(
        "Based on these extracted skills and user goals, identify skill gaps \
         and areas for improvement:\n\n\
         Current Skills:\n\
         - Technical: {technical}\n\
         - Soft Skills: {soft_skills}\n\
         - Industry: {industry}\n\
         - Tools: {tools}\n\n\
         User Goals: {user_goals}\n\n\
         Provide:\n\
         1. Missing critical skills for their goals\n\
         2. Skills that need improvement\n\
         3. Emerging skills they should consider\n\
         4. Priority level for each gap (High/Medium/Low)\n\n\
         Format as structured text."
    )
}

pub fn learning_recommendations(current_skills: &str, gap_analysis: &str) -> String {
    format!(
        "Based on this skill analysis, provide specific learning recommendations:\n\n\
         Current Skills: {current_skills}\n\
         Gap Analysis: {gap_analysis}\n\n\
         Provide:\n\
         1. Top 5 recommended courses/certifications\n\
         2. Practical projects to build portfolio\n\
         3. Timeline for skill development\n\
         4. Free and paid learning resources\n\n\
         Make recommendations specific and actionable."
    )
}

pub fn resume(personal_info: &str, experience: &str, skills: &str) -> String {
    format!(
        "Create a professional resume based on this information:\n\n\
         Personal Information: {personal_info}\n\
         Experience: {experience}\n\
         Skills: {skills}\n\n\
         Generate content for each section:\n\
         1. Professional Summary (3-4 sentences highlighting key strengths)\n\
         2. Skills (organized by category: Technical, Soft Skills, Tools)\n\
         3. Experience (formatted with achievements and metrics)\n\
         4. Education (if mentioned)\n\
         5. Notable Projects (if applicable)\n\n\
         Make it ATS-friendly and professionally written. Use action verbs and \
         quantify achievements where possible.\n\n\
         Format the response as structured sections I can parse."
    )
}

pub fn cover_letter(job_description: &str, skills: &str, experience: &str, achievements: &str) -> String {
    format!(
        "Write a compelling cover letter for this job:\n\n\
         Job Description: {job_description}\n\n\
         Candidate Profile:\n\
         - Skills: {skills}\n\
         - Experience: {experience}\n\
         - Achievements: {achievements}\n\n\
         Structure:\n\
         1. Opening paragraph: Hook and position interest\n\
         2. Body paragraphs: Match qualifications to job requirements\n\
         3. Closing: Call to action and next steps\n\n\
         Make it professional, enthusiastic, and specific to the role."
    )
}

pub fn linkedin_summary(skills: &str, experience: &str, goals: &str, industry: &str) -> String {
    format!(
        "Create an engaging LinkedIn summary for:\n\n\
         Skills: {skills}\n\
         Experience: {experience}\n\
         Goals: {goals}\n\
         Industry: {industry}\n\n\
         Requirements:\n\
         - 2-3 paragraphs, conversational tone\n\
         - Include relevant keywords for searchability\n\
         - Highlight unique value proposition\n\
         - End with a call to action\n\
         - Be authentic and professional\n\n\
         Write in first person and make it engaging."
    )
}

pub fn job_match(
    target_role: &str,
    experience_level: &str,
    title: &str,
    company: &str,
    location: &str,
    description: &str,
    requirements: &str,
    company_size: &str,
) -> String {
    format!(
        "Analyze this job opportunity for a candidate seeking: {target_role} \
         at {experience_level} level\n\n\
         Job Details:\n\
         Title: {title}\n\
         Company: {company}\n\
         Location: {location}\n\
         Description: {description}\n\
         Requirements: {requirements}\n\
         Company Size: {company_size}\n\n\
         Provide analysis including:\n\
         1. Match score (0-100) - be realistic\n\
         2. Why this is a good/poor match\n\
         3. Skill alignment assessment\n\
         4. Growth potential\n\
         5. Any red flags or concerns\n\n\
         Be honest and specific in your assessment."
    )
}

pub fn application_tips(job_title: &str) -> String {
    format!(
        "Provide specific application tips for someone applying to a \
         {job_title} position.\n\n\
         Include:\n\
         1. Key skills to highlight\n\
         2. Resume optimization tips\n\
         3. Interview preparation advice\n\
         4. Common questions to expect\n\
         5. What employers look for\n\n\
         Make it actionable and specific to this role."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(user: &str, agent: &str) -> Turn {
        Turn {
            user: user.to_string(),
            agent: agent.to_string(),
        }
    }

    #[test]
    fn test_chat_context_embeds_message_and_persona() {
        let context = chat_context("How do I become a data analyst?", &[]);

        assert!(context.starts_with("You are LaunchPad.AI"));
        assert!(context.contains("Current user message: How do I become a data analyst?"));
        assert!(!context.contains("Previous conversation:"));
    }

    #[test]
    fn test_chat_context_bounds_history_to_last_three_turns() {
        let history = vec![
            turn("first", "a1"),
            turn("second", "a2"),
            turn("third", "a3"),
            turn("fourth", "a4"),
        ];

        let context = chat_context("now", &history);

        assert!(!context.contains("User: first"));
        assert!(context.contains("User: second"));
        assert!(context.contains("User: third"));
        assert!(context.contains("User: fourth"));
    }

    #[test]
    fn test_inputs_embedded_verbatim() {
        let prompt = profile_analysis("Python, SQL", "Healthcare", "Entry-level");

        assert!(prompt.contains("Skills: Python, SQL"));
        assert!(prompt.contains("Interests: Healthcare"));
        assert!(prompt.contains("Experience Level: Entry-level"));
    }

    #[test]
    fn test_absent_fields_render_as_empty() {
        let prompt = linkedin_summary("", "", "", "");

        assert!(prompt.contains("Skills: \n"));
        assert!(prompt.contains("Goals: \n"));
    }
}
