//! Asks for an address, geocodes it, and saves the first match as the
//! location that `collect` searches around.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use kakao_places::{
    api::KakaoClient,
    config::Config,
    location::{resolve, LocateOutcome},
    prompt::Prompt,
};

/// Save the coordinate of an address to location.json.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    config: Config,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    kakao_places::init_logging();
    let cli = Cli::parse();

    match run(&cli.config).await {
        Ok(LocateOutcome::Saved(coordinate)) => {
            println!(
                "위도: {}, 경도: {} - location.json에 저장되었습니다.",
                coordinate.lat, coordinate.lng
            );
            ExitCode::SUCCESS
        }
        Ok(LocateOutcome::NoResults) => {
            println!("검색 결과가 없습니다.");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("Error fetching location: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &Config) -> Result<LocateOutcome> {
    let query =
        Prompt::stdio().ask("검색하고 싶은 주소를 입력하세요: ")?;
    let api = KakaoClient::new(config)?;
    let outcome = resolve(&api, &query, &config.location_path())
        .await
        .with_context(|| format!("address search for {query:?}"))?;
    Ok(outcome)
}
