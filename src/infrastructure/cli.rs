use clap::Parser;

use crate::{domain::location::Location, utils::version};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,

    #[arg(
        short,
        long,
        value_name = "LOCATION",
        help = "Initial listing, e.g. \"/?page=2&category=electronics\"",
        default_value = "/"
    )]
    pub location: Location,

    #[arg(long, value_name = "URL", help = "Product API base URL (overrides config)")]
    pub api_url: Option<String>,

    #[arg(long, help = "Start offline and never probe the API")]
    pub offline: bool,

    #[arg(long, help = "Keep the offline cache in memory only")]
    pub no_cache_file: bool,
}
