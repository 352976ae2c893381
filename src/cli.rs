use crate::models::{Language, QueryType};
use clap::{Args, Parser, Subcommand};
use serde_json::{json, Map, Value};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "agriassist",
    version,
    about = "Crop, soil and fertilizer advisory service"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the query log data directory
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Send advisory commands to the configured backend instead of running locally
    #[arg(long, global = true)]
    pub remote: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API (default)
    Serve {
        /// Bind host, overrides server.host
        #[arg(long)]
        host: Option<String>,
        /// Port, overrides server.port
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Re-run interactive setup
    Init,
    /// Validate config, open the query log and ping the backend
    Check,
    /// Recommend crops for soil and weather readings
    Crop {
        #[arg(long)]
        nitrogen: f64,
        #[arg(long)]
        phosphorus: f64,
        #[arg(long)]
        potassium: f64,
        #[arg(long)]
        ph: f64,
        #[arg(long)]
        temperature: f64,
        #[arg(long)]
        rainfall: f64,
        #[arg(long)]
        humidity: Option<f64>,
        #[command(flatten)]
        lang: LangArg,
    },
    /// Score soil health and list remedies
    Soil {
        #[arg(long)]
        nitrogen: f64,
        #[arg(long)]
        phosphorus: f64,
        #[arg(long)]
        potassium: f64,
        #[arg(long)]
        ph: f64,
        #[arg(long)]
        soil_type: Option<String>,
        #[command(flatten)]
        lang: LangArg,
    },
    /// Fertilizer plan for a crop's growth stage
    Fertilizer {
        #[arg(long)]
        crop: String,
        #[arg(long)]
        nitrogen: f64,
        #[arg(long)]
        phosphorus: f64,
        #[arg(long)]
        potassium: f64,
        /// seedling, vegetative or flowering
        #[arg(long)]
        growth_stage: Option<String>,
        #[arg(long)]
        soil_type: Option<String>,
        #[command(flatten)]
        lang: LangArg,
    },
    /// Pest control advisory
    Pest {
        #[arg(long)]
        crop: String,
        #[arg(long)]
        description: Option<String>,
        #[command(flatten)]
        lang: LangArg,
    },
    /// Market price quote
    Market {
        #[arg(long)]
        crop: String,
        #[arg(long)]
        location: Option<String>,
        #[command(flatten)]
        lang: LangArg,
    },
    /// Weather report and advisory
    Weather {
        #[arg(long)]
        location: Option<String>,
        #[command(flatten)]
        lang: LangArg,
    },
    /// Show recently logged queries
    History {
        #[arg(short = 'n', long, default_value_t = 20)]
        limit: usize,
    },
}

#[derive(Args, Clone)]
pub struct LangArg {
    /// Response language: en, hi, mr or kn (defaults to config default_language)
    #[arg(short, long)]
    pub language: Option<String>,
}

impl LangArg {
    fn resolve(&self, default: Language) -> Value {
        match &self.language {
            Some(code) => Value::String(code.clone()),
            None => Value::String(default.as_str().to_string()),
        }
    }
}

impl Commands {
    /// Request body for the advisory subcommands, in the same shape the API
    /// accepts. `None` for the non-advisory commands.
    pub fn advisory_request(&self, default_language: Language) -> Option<(QueryType, Value)> {
        let (query_type, mut body, lang) = match self {
            Commands::Crop {
                nitrogen,
                phosphorus,
                potassium,
                ph,
                temperature,
                rainfall,
                humidity,
                lang,
            } => (
                QueryType::Crop,
                json!({
                    "nitrogen": nitrogen,
                    "phosphorus": phosphorus,
                    "potassium": potassium,
                    "ph": ph,
                    "temperature": temperature,
                    "rainfall": rainfall,
                    "humidity": humidity,
                }),
                lang,
            ),
            Commands::Soil {
                nitrogen,
                phosphorus,
                potassium,
                ph,
                soil_type,
                lang,
            } => (
                QueryType::Soil,
                json!({
                    "nitrogen": nitrogen,
                    "phosphorus": phosphorus,
                    "potassium": potassium,
                    "ph": ph,
                    "soil_type": soil_type,
                }),
                lang,
            ),
            Commands::Fertilizer {
                crop,
                nitrogen,
                phosphorus,
                potassium,
                growth_stage,
                soil_type,
                lang,
            } => (
                QueryType::Fertilizer,
                json!({
                    "crop": crop,
                    "nitrogen": nitrogen,
                    "phosphorus": phosphorus,
                    "potassium": potassium,
                    "growth_stage": growth_stage,
                    "soil_type": soil_type,
                }),
                lang,
            ),
            Commands::Pest {
                crop,
                description,
                lang,
            } => (
                QueryType::Pest,
                json!({ "crop": crop, "pest_description": description }),
                lang,
            ),
            Commands::Market {
                crop,
                location,
                lang,
            } => (
                QueryType::Market,
                json!({ "crop": crop, "location": location }),
                lang,
            ),
            Commands::Weather { location, lang } => {
                (QueryType::Weather, json!({ "location": location }), lang)
            }
            _ => return None,
        };

        if let Value::Object(map) = &mut body {
            strip_nulls(map);
            map.insert("language".into(), lang.resolve(default_language));
        }

        Some((query_type, body))
    }
}

fn strip_nulls(map: &mut Map<String, Value>) {
    map.retain(|_, v| !v.is_null());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve() {
        let cli = Cli::try_parse_from(["agriassist"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.remote);
    }

    #[test]
    fn crop_command_builds_api_body() {
        let cli = Cli::try_parse_from([
            "agriassist",
            "crop",
            "--nitrogen",
            "100",
            "--phosphorus",
            "50",
            "--potassium",
            "50",
            "--ph",
            "6.5",
            "--temperature",
            "25",
            "--rainfall",
            "200",
            "-l",
            "mr",
        ])
        .unwrap();

        let (query_type, body) = cli
            .command
            .unwrap()
            .advisory_request(Language::En)
            .unwrap();
        assert_eq!(query_type, QueryType::Crop);
        assert_eq!(body["language"], "mr");
        assert_eq!(body["ph"], 6.5);
        assert!(body.get("humidity").is_none());
    }

    #[test]
    fn language_falls_back_to_config_default() {
        let cli =
            Cli::try_parse_from(["agriassist", "market", "--crop", "wheat", "--remote"]).unwrap();
        assert!(cli.remote);

        let (query_type, body) = cli
            .command
            .unwrap()
            .advisory_request(Language::Hi)
            .unwrap();
        assert_eq!(query_type, QueryType::Market);
        assert_eq!(body["language"], "hi");
        assert!(body.get("location").is_none());
    }

    #[test]
    fn non_advisory_commands_have_no_body() {
        let cli = Cli::try_parse_from(["agriassist", "history", "-n", "5"]).unwrap();
        assert!(cli
            .command
            .unwrap()
            .advisory_request(Language::En)
            .is_none());
    }
}
