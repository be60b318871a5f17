use crate::args::ThanosSnapArgs;
use anyhow::Result;
use colored::Colorize;
use ghpm_lib::{GitHubClient, Privatizer, PrivatizerConfig, RunReport};
use log::warn;

pub async fn run(args: &ThanosSnapArgs) -> Result<()> {
    let github = GitHubClient::new(args.api_url.as_str(), &args.github_token)?;
    let config = PrivatizerConfig {
        stars_threshold: args.stars_threshold,
        skip_forks: !args.include_forks,
    };

    let report = Privatizer::new(github, config)
        .run_until(interrupted())
        .await?;

    print_summary(&report);
    Ok(())
}

async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("could not listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
}

fn print_summary(report: &RunReport) {
    println!("summary for {}", report.identity.login.yellow());
    println!(
        "{} privatized, {} skipped, {} failed",
        report.privatized().to_string().green(),
        report.skipped().to_string().cyan(),
        report.failed().to_string().red(),
    );

    if report.needs_web_interface() {
        println!(
            "{}",
            "Some repositories can only be switched to private from the GitHub web interface."
                .yellow()
        );
    }

    if report.should_retry() {
        println!(
            "{}",
            "Some requests failed on GitHub's side or in transit. Run the command again later."
                .yellow()
        );
    }

    if report.cancelled {
        println!("{}", "Interrupted before all repositories were processed.".red());
    }
}
