mod app_config;

use lib::*;

use clap::{Parser, Subcommand};
use model::read_dataset;
use std::{
  error::Error,
  path::{Path, PathBuf},
};
use tracing::info;

use crate::app_config::AppConfig;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATASET: &str = "workout.csv";

#[derive(Parser)]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Train on the dataset, then serve predictions
  Serve {
    /// CSV dataset with the workout columns
    #[arg(short, long, value_name = "PATH")]
    data: Option<PathBuf>,
    #[arg(short, long)]
    port: Option<u16>,
    /// YAML config file; command line flags win over it
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
  },
  /// Send one prediction request to a running server
  Predict {
    /// JSON file with the seven input fields
    #[arg(long, value_name = "PATH")]
    input_file: PathBuf,
    /// Host of the prediction service
    #[arg(long, default_value = "127.0.0.1")]
    url: String,
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,
  },
  /// Fit the model and print its coefficients without serving
  Model {
    #[arg(short, long, value_name = "PATH")]
    data: PathBuf,
  },
}

fn load_config(path: Option<&Path>) -> Result<AppConfig, Box<dyn Error>> {
  match path {
    Some(path) => {
      let content = std::fs::read_to_string(path)?;
      Ok(serde_yaml::from_str(&content)?)
    }
    None => Ok(AppConfig::default()),
  }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
  utils::init_logging()?;
  let args = Cli::parse();

  match args.command {
    Command::Serve { data, port, config } => {
      let file_config = load_config(config.as_deref())?;
      let config = file_config.merge(AppConfig { port, dataset: data });

      let port = config.port.unwrap_or(DEFAULT_PORT);
      let dataset_path = config
        .dataset
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET));

      let dataset = read_dataset(&dataset_path)?;
      info!("loaded {} rows from {}", dataset.len(), dataset_path.display());
      let trained = model::fit(&dataset)?;
      info!("model fitted, starting server");

      let app = subcommands::Server::new(port, trained);
      app.run().await?;
    }
    Command::Predict {
      input_file,
      url,
      port,
    } => {
      let true_url = format!("http://{}:{}/predict", url, port);
      let app = subcommands::Client::new(&input_file, true_url)?;
      app.run().await?;
    }
    Command::Model { data } => {
      let dataset = read_dataset(&data)?;
      let trained = model::fit(&dataset)?;
      println!("{}", trained);
    }
  }
  Ok(())
}
