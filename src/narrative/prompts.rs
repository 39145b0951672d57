//! Prompt construction for the language-model critique

use crate::Report;

/// Builds the prompts sent to the narrative generator
pub struct PromptBuilder;

impl PromptBuilder {
    /// Full critique prompt: resume text, computed score and the band summary
    pub fn analysis(resume_text: &str, report: &Report) -> String {
        format!(
            r#"You are an expert resume coach. Analyze this resume and provide concise, actionable improvement advice.

RESUME TEXT:
{resume_text}

CURRENT ATS SCORE: {score}/100

CONTEXT:
{summary}

YOUR TASK:
Write a brief, focused analysis (250-350 words max) that tells the candidate exactly what to improve. Use this structure:

OVERVIEW
[One paragraph: What's working well and the main issue holding this resume back]

TOP 3 IMPROVEMENTS

1. [Title]
What to do: [Specific action in 1-2 sentences]
Example: [Quick before/after or concrete example]

2. [Title]
What to do: [Specific action in 1-2 sentences]
Example: [Quick before/after or concrete example]

3. [Title]
What to do: [Specific action in 1-2 sentences]
Example: [Quick before/after or concrete example]

QUICK WINS
[One short paragraph listing 2-3 easy changes they can make today]

WRITING GUIDELINES:
- NO emojis, keep it professional
- Use UPPERCASE for section headers only
- Write in clear, short paragraphs (3-4 lines max)
- Be direct and specific - focus on WHAT TO CHANGE, not explanations
- Reference actual content from the resume
- Skip generic advice - make it personal to this resume
- Keep total response under 350 words
- Use conversational but professional tone

Focus on the highest-impact changes that will improve their ATS score and get them interviews."#,
            resume_text = resume_text,
            score = report.total_score,
            summary = report.summary,
        )
    }

    /// Bulleted suggestions for one criterion, by display name
    pub fn improvement_suggestions(resume_text: &str, criterion_name: &str) -> String {
        format!(
            r#"Analyze this resume and provide 3-5 specific, actionable suggestions to improve the "{criterion_name}" aspect:

RESUME TEXT:
{resume_text}

Provide only a bulleted list of concrete suggestions. Be specific and actionable."#
        )
    }

    /// Advice for tailoring the resume to a target role
    pub fn tailored_advice(resume_text: &str, target_role: &str) -> String {
        format!(
            r#"This candidate is targeting a {target_role} position. Review their resume and provide specific advice on:

1. How to better tailor this resume for {target_role} roles
2. What keywords or skills are missing for this target role
3. How to restructure accomplishments to appeal to {target_role} hiring managers

RESUME TEXT:
{resume_text}

Keep your response concise and actionable (200-300 words)."#
        )
    }
}
