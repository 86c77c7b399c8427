//! Frontend-agnostic view models for the questionnaire and summary views.

use std::fmt::Write as _;

use mowajih_types::{Answer, Recommendation, ResponseKind};

use crate::{Controller, QuestionnaireStore};

/// Substituted for absent recommendation fields.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Substituted for an absent score.
pub const NO_SCORE: &str = "N/A";

/// Shown when no answers have been collected.
pub const NO_ANSWERS: &str = "No answers available.";

/// Shown when there are no recommendations.
pub const NO_RECOMMENDATIONS: &str = "No recommendations available.";

/// The input widget a question calls for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAffordance {
    TextField,
    NumberField,
    Choice { options: Vec<String> },
}

/// What the questionnaire view shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionnaireView {
    /// Questions are not loaded, or the position is out of bounds.
    Loading,

    Prompt {
        prompt: String,
        input: InputAffordance,
        response: String,
        submit_label: &'static str,
        submit_enabled: bool,
        /// One-based `(current, total)`.
        progress: (usize, usize),
    },
}

impl QuestionnaireView {
    pub fn build(store: &QuestionnaireStore, controller: &Controller) -> Self {
        let Some(question) = store.current_question() else {
            return Self::Loading;
        };
        let input = match question.kind() {
            ResponseKind::Text => InputAffordance::TextField,
            ResponseKind::Number => InputAffordance::NumberField,
            ResponseKind::Dropdown => InputAffordance::Choice {
                options: question.options().to_vec(),
            },
        };
        Self::Prompt {
            prompt: question.prompt().to_string(),
            input,
            response: controller.response().to_string(),
            submit_label: controller.submit_label(store),
            submit_enabled: controller.can_submit(store),
            progress: store.progress(),
        }
    }
}

/// A recommendation with every field ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationCard {
    pub title: String,
    pub description: String,
    pub opportunities: String,
    pub access_conditions: String,
    pub score: String,
}

impl From<&Recommendation> for RecommendationCard {
    fn from(rec: &Recommendation) -> Self {
        let or_placeholder = |field: &Option<String>| {
            field
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or(NOT_SPECIFIED)
                .to_string()
        };
        let opportunities = rec.opportunities.join(", ");
        Self {
            title: or_placeholder(&rec.title),
            description: or_placeholder(&rec.description),
            opportunities: if opportunities.is_empty() {
                NOT_SPECIFIED.to_string()
            } else {
                opportunities
            },
            access_conditions: or_placeholder(&rec.access_conditions),
            score: rec
                .score
                .map_or_else(|| NO_SCORE.to_string(), |score| format!("{score:.2}")),
        }
    }
}

/// What the summary view shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryView {
    /// `(prompt, value)` pairs in answer order.
    pub answers: Vec<(String, String)>,
    pub recommendations: Vec<RecommendationCard>,
}

impl SummaryView {
    pub fn build(store: &QuestionnaireStore) -> Self {
        Self {
            answers: store
                .answers()
                .iter()
                .map(|Answer { prompt, value, .. }| (prompt.clone(), value.clone()))
                .collect(),
            recommendations: store
                .recommendations()
                .iter()
                .map(RecommendationCard::from)
                .collect(),
        }
    }

    /// Check if there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty() && self.recommendations.is_empty()
    }

    /// Plain-text rendering, used by line-oriented frontends.
    pub fn render_text(&self) -> String {
        let mut out = String::from("Summary\n\nYour Answers\n");
        if self.answers.is_empty() {
            let _ = writeln!(out, "  {NO_ANSWERS}");
        }
        for (prompt, value) in &self.answers {
            let _ = writeln!(out, "  {prompt}\n    {value}");
        }

        out.push_str("\nRecommended Programs\n");
        if self.recommendations.is_empty() {
            let _ = writeln!(out, "  {NO_RECOMMENDATIONS}");
        }
        for card in &self.recommendations {
            let _ = writeln!(out, "  {}", card.title);
            let _ = writeln!(out, "    {}", card.description);
            let _ = writeln!(out, "    Opportunities: {}", card.opportunities);
            let _ = writeln!(out, "    Access Conditions: {}", card.access_conditions);
            let _ = writeln!(out, "    Relevance Score: {}", card.score);
        }
        out
    }
}
