use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use skyroute_cli::commands::{
    airlines::{handle_airlines_command, AirlinesCommandArgs},
    airports::{handle_airports_command, AirportsCommandArgs},
    open_network,
    route::{handle_route_command, AlgorithmArg, RouteCommandArgs},
};
use skyroute_cli::output::OutputFormat;
use skyroute_lib::DEFAULT_MAX_PATHS;

#[derive(Parser, Debug)]
#[command(author, version, about = "Flight route planning over a CSV route dataset")]
struct Cli {
    /// Route dataset file, or a directory containing `routes.csv`.
    ///
    /// Falls back to `SKYROUTE_DATA_DIR`, then the platform data directory.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// JSON file overriding the dataset column layout.
    #[arg(long, global = true)]
    layout: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan a route between two airports (codes or names).
    Route {
        /// Departure airport code or name.
        #[arg(long = "from")]
        from: String,
        /// Arrival airport code or name.
        #[arg(long = "to")]
        to: String,
        /// Search strategy.
        #[arg(long, value_enum, default_value_t = AlgorithmArg::Cheapest)]
        algorithm: AlgorithmArg,
        /// Maximum number of alternatives for `shortest-hops`.
        #[arg(long, default_value_t = DEFAULT_MAX_PATHS)]
        paths: usize,
    },
    /// Browse countries, cities and airports with departing flights.
    Airports {
        /// List the cities of this country.
        #[arg(long, conflicts_with = "city")]
        country: Option<String>,
        /// List the airports of this city.
        #[arg(long)]
        city: Option<String>,
    },
    /// List the airlines flying directly between two airports.
    Airlines {
        /// Departure airport code or name.
        #[arg(long = "from")]
        from: String,
        /// Arrival airport code or name.
        #[arg(long = "to")]
        to: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let network = open_network(cli.data.as_deref(), cli.layout.as_deref())?;

    match cli.command {
        Command::Route {
            from,
            to,
            algorithm,
            paths,
        } => {
            let args = RouteCommandArgs {
                from,
                to,
                algorithm,
                paths,
            };
            handle_route_command(&network, cli.format, &args)
        }
        Command::Airports { country, city } => {
            handle_airports_command(&network, cli.format, &AirportsCommandArgs { country, city })
        }
        Command::Airlines { from, to } => {
            handle_airlines_command(&network, cli.format, &AirlinesCommandArgs { from, to })
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
