use std::path::PathBuf;

use clap::Args;

/// Default root of the Kakao Local API.
pub const DEFAULT_API_BASE: &str = "https://dapi.kakao.com";

const LOCATION_FILE: &str = "location.json";
const STORE_FILE: &str = "places_data.csv";

/// Settings shared by both programs, resolved once at process start.
///
/// Every value can come from the environment (or a `.env` file), so running
/// either program with no flags at all is the normal case.
#[derive(Debug, Clone, Args)]
pub struct Config {
    /// Kakao REST API key, sent as `Authorization: KakaoAK <key>`.
    ///
    /// Only ever read from `API_KEY`, never from the command line.
    #[arg(skip = std::env::var("API_KEY").unwrap_or_default())]
    pub api_key: String,

    /// Directory holding location.json and places_data.csv
    #[arg(
        long,
        env = "OUTPUT_DIR",
        value_name = "DIR",
        default_value = "output"
    )]
    pub output_dir: PathBuf,

    /// Root URL of the search API
    #[arg(
        long,
        env = "KAKAO_API_BASE",
        value_name = "URL",
        default_value = DEFAULT_API_BASE
    )]
    pub api_base: String,
}

impl Config {
    /// Settings with an explicit key and directory and the default API root.
    pub fn new(
        api_key: impl Into<String>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            output_dir: output_dir.into(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Where the resolved coordinate is written and later read back.
    pub fn location_path(&self) -> PathBuf {
        self.output_dir.join(LOCATION_FILE)
    }

    /// The append-only CSV of collected places.
    pub fn store_path(&self) -> PathBuf {
        self.output_dir.join(STORE_FILE)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct Cli {
        #[command(flatten)]
        config: Config,
    }

    #[test]
    fn paths_live_under_output_dir() {
        let config = Config::new("key", "/tmp/out");
        assert_eq!(
            config.location_path(),
            PathBuf::from("/tmp/out/location.json")
        );
        assert_eq!(
            config.store_path(),
            PathBuf::from("/tmp/out/places_data.csv")
        );
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn api_key_is_not_a_flag() {
        let parsed = Cli::try_parse_from(["locate", "--api-key", "secret"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn output_dir_flag_overrides_default() {
        let cli =
            Cli::try_parse_from(["locate", "--output-dir", "/data"]).unwrap();
        assert_eq!(cli.config.output_dir, PathBuf::from("/data"));
    }
}
