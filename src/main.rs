//! Tally CLI entrypoint for pull request comment statistics.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use tally::{
    CommentStats, CommentStatsCollector, PersonalAccessToken, ReqwestCommentGateway, TallyConfig,
    TallyError,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), TallyError> {
    let config = load_config()?;

    let locator = config.locator()?;
    let token = PersonalAccessToken::new(config.resolve_token()?)?;
    let policy = config.exclusion_policy()?;

    let gateway = ReqwestCommentGateway::new(token)?;
    let collector = CommentStatsCollector::new(&gateway);
    let stats = collector.collect(&locator, &policy).await?;

    write_summary(&stats)
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`TallyError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<TallyConfig, TallyError> {
    TallyConfig::load().map_err(|error| TallyError::Configuration {
        message: error.to_string(),
    })
}

fn write_summary(stats: &CommentStats) -> Result<(), TallyError> {
    let mut stdout = io::stdout().lock();
    write_summary_to(&mut stdout, stats)
}

fn write_summary_to<W: Write>(writer: &mut W, stats: &CommentStats) -> Result<(), TallyError> {
    let message = format!(
        "Comment statistics:\n\
         Discussion:\n  \
         - parent comments: {parents}\n  \
         - child comments: {children}\n\
         Issue comments: {issues}\n\
         Review feedback: {feedback}\n\
         Total reviews (excluding child comments): {total}",
        parents = stats.discussion_parents,
        children = stats.discussion_children,
        issues = stats.issue_comments,
        feedback = stats.review_feedback,
        total = stats.total_reviews(),
    );

    writeln!(writer, "{message}").map_err(|error| TallyError::Io {
        message: error.to_string(),
    })
}
