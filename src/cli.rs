use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Live football scoreboard
///
/// Replays a match script (teams, games and timed events in TOML) and prints
/// the scoreboard: one line per game, highest combined score first.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Match script to replay
    #[arg(value_name = "SCRIPT", required_unless_present = "list_config")]
    pub script: Option<String>,

    /// Print the report as JSON instead of text lines
    #[arg(long, help_heading = "Display Options")]
    pub json: bool,

    /// Drop ended games from the report, overriding the configured policy
    #[arg(long = "remove-finished", help_heading = "Display Options")]
    pub remove_finished: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to stdout.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
