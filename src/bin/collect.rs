//! Asks for a keyword, searches for matching places around the saved
//! location, and appends the ones not seen before to places_data.csv.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use kakao_places::{
    api::KakaoClient,
    collect::{collect, CollectOutcome, DEFAULT_RADIUS},
    config::Config,
    prompt::Prompt,
};

/// Collect places near the saved location into a CSV file.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    config: Config,

    /// Search radius in meters
    #[arg(long, env = "SEARCH_RADIUS", default_value_t = DEFAULT_RADIUS)]
    radius: u32,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    kakao_places::init_logging();
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(CollectOutcome::NoResults) => {
            println!("결과가 없습니다.");
            ExitCode::SUCCESS
        }
        Ok(CollectOutcome::AllDuplicates) => {
            println!("중복된 데이터만 존재하여 추가할 내용이 없습니다.");
            ExitCode::SUCCESS
        }
        Ok(CollectOutcome::Appended { path, rows }) => {
            println!(
                "{} 파일에 중복되지 않은 내용 {}건이 추가되었습니다.",
                path.display(),
                rows.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error fetching places: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<CollectOutcome> {
    let keyword =
        Prompt::stdio().ask("검색할 키워드를 입력하세요 (예: 카페): ")?;
    let api = KakaoClient::new(&cli.config)?;
    let outcome = collect(&api, &keyword, &cli.config, cli.radius)
        .await
        .with_context(|| format!("place search for {keyword:?}"))?;
    Ok(outcome)
}
