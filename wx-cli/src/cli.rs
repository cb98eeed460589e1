use clap::{Parser, Subcommand};
use wx_core::{DEFAULT_ZIP, Endpoints, ErrorKind, HttpFetcher, NoaaClient, View};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wx", version, about = "Get NOAA weather.")]
pub struct Cli {
    /// Log requests and decoding details to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 7 day NOAA weather forecast.
    #[command(visible_alias = "f")]
    Forecast {
        /// Five digit US ZIP code.
        #[arg(value_name = "ZIPCODE", default_value = DEFAULT_ZIP)]
        zipcode: String,
    },

    /// Current NOAA weather.
    #[command(visible_alias = "c")]
    Current {
        /// Five digit US ZIP code.
        #[arg(value_name = "ZIPCODE", default_value = DEFAULT_ZIP)]
        zipcode: String,
    },
}

impl Command {
    fn view(&self) -> (View, &str) {
        match self {
            Command::Forecast { zipcode } => (View::Forecast, zipcode.as_str()),
            Command::Current { zipcode } => (View::Current, zipcode.as_str()),
        }
    }
}

impl Cli {
    /// Run the selected command and return the text to print.
    pub async fn run(self) -> anyhow::Result<String> {
        let (view, zip) = self.command.view();
        let client = NoaaClient::new(HttpFetcher::new(), Endpoints::default());

        client.report(view, zip).await.map_err(|err| match err.kind() {
            // Already names the rejected input.
            ErrorKind::Validation => anyhow::Error::new(err),
            _ => anyhow::Error::new(err).context(format!("Failed to get {view} for ZIP code {zip}")),
        })
    }
}
