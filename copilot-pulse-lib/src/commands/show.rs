use super::Host;
use super::common::{ColorMode, ConsoleSection, LogLevel, init_logging};
use super::config::{Config, FetchErrorPolicy};
use crate::Result;
use crate::facts::{FetchError, FetchSettings, Fetcher};
use crate::metrics::{AdoptionStatus, MODERATE_THRESHOLD, MetricsSummary, generate_fallback};
use crate::reports::{ConsoleOutputMode, Dashboard, DataSource, generate_console, generate_json};
use camino::Utf8PathBuf;
use chrono::{Local, NaiveDate};
use clap::Parser;
use ohno::{EnrichableExt, IntoAppError, app_err};
use rand::Rng;
use std::fs;
use std::io::Write;

const LOG_TARGET: &str = "      show";

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// GitHub token with access to the enterprise Copilot endpoints
    #[arg(long, value_name = "TOKEN", env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Enterprise slug (overrides the configuration file)
    #[arg(long, short = 'e', value_name = "SLUG")]
    pub enterprise: Option<String>,

    /// Base URL of the GitHub REST API (overrides the configuration file)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Path to configuration file (default is `pulse.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Whether to use colors in the console output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Log level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    pub log_level: LogLevel,

    /// Write the dashboard as JSON to the given file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json: Option<Utf8PathBuf>,

    /// Output the dashboard to the console, showing the specified sections.
    /// Defaults to showing all sections. If omitted entirely, console output is shown only when no JSON file is written.
    #[arg(
        long,
        value_name = "SECTIONS",
        value_delimiter = ',',
        default_missing_value = "cards,chart,assessment",
        num_args = 0..=1,
        help_heading = "Report Output"
    )]
    pub console: Option<Vec<ConsoleSection>>,

    /// What to do when live data cannot be fetched (overrides the configuration file)
    #[arg(long, value_name = "POLICY")]
    pub on_fetch_error: Option<FetchErrorPolicy>,

    /// Exit with an error if seat utilization is below the moderate threshold
    #[arg(long)]
    pub error_if_underutilized: bool,
}

/// Settle a fetch outcome according to the fetch-error policy.
///
/// Live data passes through. On failure, the `fallback` policy substitutes a synthetic
/// summary for the week ending `today`, while the `error` policy hands the failure back.
///
/// # Errors
///
/// Returns the fetch error when the policy is [`FetchErrorPolicy::Error`]
pub fn apply_fetch_policy<R: Rng + ?Sized>(
    fetched: Result<MetricsSummary, FetchError>,
    policy: FetchErrorPolicy,
    today: NaiveDate,
    rng: &mut R,
) -> Result<(MetricsSummary, DataSource), FetchError> {
    match fetched {
        Ok(summary) => Ok((summary, DataSource::Live)),
        Err(e) => match policy {
            FetchErrorPolicy::Error => Err(e),
            FetchErrorPolicy::Fallback => {
                log::warn!(target: LOG_TARGET, "Could not fetch live Copilot data, using synthetic data instead: {e}");
                Ok((generate_fallback(today, rng), DataSource::Synthetic))
            }
        },
    }
}

/// Configuration from file or defaults with command-line overrides applied, checked as a whole
fn effective_config(args: &ShowArgs) -> Result<Config> {
    let mut config = Config::load(&Utf8PathBuf::from("."), args.config.as_ref())?;

    if let Some(enterprise) = &args.enterprise {
        config.enterprise.clone_from(enterprise);
    }

    if let Some(api_url) = &args.api_url {
        config.api_base_url.clone_from(api_url);
    }

    if let Some(policy) = args.on_fetch_error {
        config.on_fetch_error = policy;
    }

    config.validate()?;
    Ok(config)
}

fn console_mode(args: &ShowArgs) -> Option<ConsoleOutputMode> {
    match &args.console {
        Some(sections) => Some(ConsoleOutputMode {
            cards: sections.contains(&ConsoleSection::Cards),
            chart: sections.contains(&ConsoleSection::Chart),
            assessment: sections.contains(&ConsoleSection::Assessment),
        }),
        None if args.json.is_none() => Some(ConsoleOutputMode::full()),
        None => None,
    }
}

/// Fetch, summarize, and render the Copilot dashboard
///
/// # Errors
///
/// Returns an error if the configuration is invalid, if live data is unavailable under the
/// `error` policy, if a report cannot be written, or if `--error-if-underutilized` trips
pub async fn show_dashboard<H: Host>(host: &mut H, args: &ShowArgs) -> Result<()> {
    init_logging(args.log_level);

    let config = effective_config(args)?;
    let policy = config.on_fetch_error;

    let settings = FetchSettings {
        token: args.github_token.clone(),
        enterprise: config.enterprise,
        api_base_url: config.api_base_url,
        api_version: config.api_version,
        request_timeout: config.request_timeout,
    };

    let fetcher = Fetcher::new(settings);
    let fetched = fetcher.fetch_metrics().await;

    let now = Local::now();
    let (summary, source) = match apply_fetch_policy(fetched, policy, now.date_naive(), &mut rand::thread_rng()) {
        Ok(outcome) => outcome,
        Err(e) => {
            let _ = writeln!(host.error(), "❌ Could not fetch Copilot data: {e}");
            return Err(ohno::AppError::new(e).enrich(format!("fetching Copilot data for '{}'", fetcher.enterprise())));
        }
    };

    let dashboard = Dashboard::new(fetcher.enterprise(), now, source, summary);

    if let Some(mode) = console_mode(args) {
        let mut console_output = String::new();
        generate_console(&dashboard, args.color.use_colors(), &mode, &mut console_output)?;
        let _ = write!(host.output(), "{console_output}");
    }

    if let Some(filename) = &args.json {
        let mut json_output = String::new();
        generate_json(&dashboard, &mut json_output)?;
        fs::write(filename, json_output).into_app_err_with(|| format!("writing JSON report to '{filename}'"))?;
        log::info!(target: LOG_TARGET, "Wrote JSON report to '{filename}'");
    }

    if args.error_if_underutilized && dashboard.adoption.status == AdoptionStatus::Underutilized {
        return Err(app_err!(
            "Copilot seat utilization is {}%, below the {}% needed for moderate adoption",
            dashboard.adoption.ratio,
            MODERATE_THRESHOLD
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{FALLBACK_ACTIVE_USERS, FALLBACK_RATE_BAND, FALLBACK_TOTAL_SEATS, WINDOW_DAYS};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 13).unwrap()
    }

    fn live_summary() -> MetricsSummary {
        MetricsSummary {
            total_seats: 10,
            active_users: 9,
            acceptance_rate: 50,
            usage_trend: -3,
            daily_acceptance_rates: Vec::new(),
        }
    }

    fn parse(args: &[&str]) -> ShowArgs {
        ShowArgs::parse_from(core::iter::once("show").chain(args.iter().copied()))
    }

    #[test]
    fn test_live_data_passes_through_either_policy() {
        for policy in [FetchErrorPolicy::Fallback, FetchErrorPolicy::Error] {
            let mut rng = StdRng::seed_from_u64(7);
            let (summary, source) = apply_fetch_policy(Ok(live_summary()), policy, today(), &mut rng).unwrap();
            assert_eq!(summary, live_summary());
            assert_eq!(source, DataSource::Live);
        }
    }

    #[test]
    fn test_fallback_policy_substitutes_synthetic_data() {
        let mut rng = StdRng::seed_from_u64(7);
        let (summary, source) =
            apply_fetch_policy(Err(FetchError::MissingCredential), FetchErrorPolicy::Fallback, today(), &mut rng).unwrap();

        assert_eq!(source, DataSource::Synthetic);
        assert_eq!(summary.total_seats, FALLBACK_TOTAL_SEATS);
        assert_eq!(summary.daily_acceptance_rates.len(), WINDOW_DAYS);
        assert_eq!(summary.daily_acceptance_rates.last().unwrap().label, "Sun Oct 13");
    }

    #[tokio::test]
    async fn test_missing_token_with_fallback_yields_synthetic_week() {
        let fetcher = Fetcher::new(FetchSettings {
            token: None,
            enterprise: "acme".to_string(),
            api_base_url: "http://127.0.0.1:9".to_string(),
            api_version: "2022-11-28".to_string(),
            request_timeout: core::time::Duration::from_secs(1),
        });

        let mut rng = StdRng::seed_from_u64(42);
        let (summary, source) =
            apply_fetch_policy(fetcher.fetch_metrics().await, FetchErrorPolicy::Fallback, today(), &mut rng).unwrap();

        assert_eq!(source, DataSource::Synthetic);
        assert_eq!(summary.total_seats, FALLBACK_TOTAL_SEATS);
        assert_eq!(summary.active_users, FALLBACK_ACTIVE_USERS);
        assert_eq!(summary.daily_acceptance_rates.len(), WINDOW_DAYS);
        assert!(
            summary
                .daily_acceptance_rates
                .iter()
                .all(|day| FALLBACK_RATE_BAND.contains(&day.rate))
        );
    }

    #[test]
    fn test_error_policy_surfaces_failure() {
        let mut rng = StdRng::seed_from_u64(7);
        let result = apply_fetch_policy(Err(FetchError::MissingCredential), FetchErrorPolicy::Error, today(), &mut rng);
        assert!(matches!(result, Err(FetchError::MissingCredential)));
    }

    #[test]
    fn test_console_defaults_to_full_without_json() {
        let args = parse(&[]);
        assert_eq!(console_mode(&args), Some(ConsoleOutputMode::full()));
    }

    #[test]
    fn test_console_suppressed_when_writing_json() {
        let args = parse(&["--json", "out.json"]);
        assert_eq!(console_mode(&args), None);
    }

    #[test]
    fn test_console_flag_without_sections_shows_everything() {
        let args = parse(&["--json", "out.json", "--console"]);
        assert_eq!(console_mode(&args), Some(ConsoleOutputMode::full()));
    }

    #[test]
    fn test_console_selected_sections() {
        let args = parse(&["--console=chart,assessment"]);
        assert_eq!(
            console_mode(&args),
            Some(ConsoleOutputMode {
                cards: false,
                chart: true,
                assessment: true,
            })
        );
    }

    #[test]
    fn test_effective_config_applies_overrides() {
        let args = parse(&["--enterprise", "acme", "--api-url", "http://localhost:1", "--on-fetch-error", "error"]);
        let config = effective_config(&args).unwrap();

        assert_eq!(config.enterprise, "acme");
        assert_eq!(config.api_base_url, "http://localhost:1");
        assert_eq!(config.on_fetch_error, FetchErrorPolicy::Error);
    }

    #[test]
    fn test_effective_config_rejects_bad_enterprise_override() {
        for enterprise in ["../orgs/other", "acme/copilot", "", "acme?page=2"] {
            let args = parse(&["--enterprise", enterprise]);
            assert!(effective_config(&args).is_err(), "accepted enterprise {enterprise:?}");
        }
    }

    #[test]
    fn test_effective_config_rejects_bad_api_url_override() {
        let args = parse(&["--api-url", "file:///etc/passwd"]);
        assert!(effective_config(&args).is_err());
    }

    #[test]
    fn test_cli_overrides_parse() {
        let args = parse(&["--enterprise", "acme", "--api-url", "http://localhost:1", "--on-fetch-error", "error"]);
        assert_eq!(args.enterprise.as_deref(), Some("acme"));
        assert_eq!(args.api_url.as_deref(), Some("http://localhost:1"));
        assert_eq!(args.on_fetch_error, Some(FetchErrorPolicy::Error));
        assert!(!args.error_if_underutilized);
    }
}
