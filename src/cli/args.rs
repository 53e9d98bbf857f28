use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(
    name = "bark",
    about = format!("bark - {}", super::SUMMARY),
    version
)]
#[command(after_help = "Examples:
  bark --set-email you@example.com --set-api-key <KEY>   # Store credentials
  bark --set-mission-id 1701                              # Choose the mission to query
  bark --info                                             # Print mission info
  bark -l                                                 # List packets for the mission

Configuration is stored in the per-user config directory (bark/config.yaml),
or in $BARK_CONFIG_DIR when set. Set BARK_LOG to control log output.")]
pub struct Cli {
    #[arg(long, value_name = "EMAIL", help = "Set NearSpace Launch user email")]
    pub set_email: Option<String>,
    #[arg(long, value_name = "KEY", help = "Set NearSpace Launch API key")]
    pub set_api_key: Option<String>,
    #[arg(long, value_name = "ID", help = "Set the mission to query")]
    pub set_mission_id: Option<String>,

    #[arg(long, help = "Print the stored NearSpace Launch user email")]
    pub get_email: bool,
    #[arg(long, help = "Print the stored NearSpace Launch API key")]
    pub get_api_key: bool,
    #[arg(long, help = "Print the stored mission id")]
    pub get_mission_id: bool,

    #[arg(long, help = "Fetch info for the configured mission")]
    pub info: bool,
    #[arg(short = 'l', long, help = "List packets for the configured mission")]
    pub list: bool,

    #[arg(short, long, help = "Log requests and config access to stderr")]
    pub verbose: bool,
}
