//! Prompt template value object and built-in templates

use crate::sdg::catalogue::all_goals;

/// Placeholder replaced by the patent text.
pub const DESCRIPTION_PLACEHOLDER: &str = "{description}";

/// Placeholder replaced by the classified goal list (citation template).
pub const SDG_PLACEHOLDER: &str = "{sdg}";

/// Name of the built-in classification template.
pub const LABEL_TEMPLATE: &str = "sdg_label";

/// Name of the built-in citation template.
pub const CITATION_TEMPLATE: &str = "sdg_citation";

/// A named prompt template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    name: String,
    body: String,
}

impl PromptTemplate {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Built-in template by name, if one exists.
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            LABEL_TEMPLATE => Some(Self::label_default()),
            CITATION_TEMPLATE => Some(Self::citation_default()),
            _ => None,
        }
    }

    /// Classification prompt asking for `<sdg>` and `<reason>` tags.
    pub fn label_default() -> Self {
        let goals = all_goals()
            .iter()
            .map(|g| format!("SDG{}: {} - {}", g.number, g.short_name, g.title))
            .collect::<Vec<_>>()
            .join("\n");

        let body = format!(
            r#"You are an expert in patent analysis and the United Nations Sustainable Development Goals.

The 17 goals are:
{goals}

Read the patent description below and decide which goals the invention directly contributes to.
Only list a goal when the description gives concrete evidence for it.
If no goal is relevant, answer None.

Answer with exactly two tags:
<sdg>comma-separated goals, e.g. SDG3, SDG7, or None</sdg>
<reason>one short paragraph justifying the answer</reason>

Patent description:
{DESCRIPTION_PLACEHOLDER}"#
        );
        Self::new(LABEL_TEMPLATE, body)
    }

    /// Evidence prompt asking for a summary and citation/explanation pairs.
    pub fn citation_default() -> Self {
        let body = format!(
            r#"You are an expert in patent analysis and the United Nations Sustainable Development Goals.

The patent below was classified under: {SDG_PLACEHOLDER}

Quote the passages of the patent that support this classification.
For each passage, give the exact quote and explain how it relates to the goal.

Answer using only these tags:
<summary>two or three sentences on how the invention serves the goal</summary>
<citation>exact quote from the patent</citation>
<explanation>why this quote supports the goal</explanation>
(repeat citation and explanation for each passage)

Patent text:
{DESCRIPTION_PLACEHOLDER}"#
        );
        Self::new(CITATION_TEMPLATE, body)
    }

    pub fn has_placeholder(&self, placeholder: &str) -> bool {
        self.body.contains(placeholder)
    }

    /// Substitute the description.
    pub fn render(&self, description: &str) -> String {
        self.body.replace(DESCRIPTION_PLACEHOLDER, description)
    }

    /// Substitute the goal list first, then the description, so that patent
    /// text containing `{sdg}` is left untouched.
    pub fn render_with_sdg(&self, description: &str, sdg: &str) -> String {
        self.body
            .replace(SDG_PLACEHOLDER, sdg)
            .replace(DESCRIPTION_PLACEHOLDER, description)
    }
}
