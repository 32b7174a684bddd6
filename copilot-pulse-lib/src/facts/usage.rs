use chrono::NaiveDate;
use serde::Deserialize;

/// One calendar day of Copilot code-completion activity across the enterprise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageDay {
    pub date: NaiveDate,
    pub suggestions: u64,
    pub acceptances: u64,
    pub lines_suggested: u64,
    pub lines_accepted: u64,
    pub active_users: u64,
}

/// A day as returned by the `copilot/metrics` endpoint, with only the fields we need
#[derive(Debug, Deserialize)]
pub(super) struct MetricsDay {
    date: NaiveDate,
    #[serde(default)]
    total_active_users: u64,
    #[serde(default)]
    copilot_ide_code_completions: Option<CodeCompletions>,
}

#[derive(Debug, Deserialize)]
struct CodeCompletions {
    #[serde(default)]
    editors: Vec<Editor>,
}

#[derive(Debug, Deserialize)]
struct Editor {
    #[serde(default)]
    models: Vec<Model>,
}

#[derive(Debug, Deserialize)]
struct Model {
    #[serde(default)]
    languages: Vec<Language>,
}

#[derive(Debug, Deserialize)]
#[expect(clippy::struct_field_names, reason = "field names match GitHub API exactly")]
struct Language {
    #[serde(default)]
    total_code_suggestions: u64,
    #[serde(default)]
    total_code_acceptances: u64,
    #[serde(default)]
    total_code_lines_suggested: u64,
    #[serde(default)]
    total_code_lines_accepted: u64,
}

impl From<MetricsDay> for UsageDay {
    fn from(day: MetricsDay) -> Self {
        let mut usage = Self {
            date: day.date,
            suggestions: 0,
            acceptances: 0,
            lines_suggested: 0,
            lines_accepted: 0,
            active_users: day.total_active_users,
        };

        let languages = day
            .copilot_ide_code_completions
            .iter()
            .flat_map(|completions| &completions.editors)
            .flat_map(|editor| &editor.models)
            .flat_map(|model| &model.languages);

        for language in languages {
            usage.suggestions = usage.suggestions.saturating_add(language.total_code_suggestions);
            usage.acceptances = usage.acceptances.saturating_add(language.total_code_acceptances);
            usage.lines_suggested = usage.lines_suggested.saturating_add(language.total_code_lines_suggested);
            usage.lines_accepted = usage.lines_accepted.saturating_add(language.total_code_lines_accepted);
        }

        usage
    }
}
