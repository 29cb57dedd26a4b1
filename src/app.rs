use crate::cli::Args;
use live_scoreboard::config::Config;
use live_scoreboard::error::AppError;
use live_scoreboard::scoreboard::{EndedGamePolicy, ScoreBoard};
use live_scoreboard::script::MatchScript;

/// Picks the ended game policy: the command line flag wins over the config.
pub fn ended_game_policy(args: &Args, config: &Config) -> EndedGamePolicy {
    if args.remove_finished {
        EndedGamePolicy::Remove
    } else {
        config.ended_games
    }
}

/// Renders the scoreboard as text lines or as pretty JSON.
pub fn render_report(board: &ScoreBoard, json: bool) -> Result<String, AppError> {
    if json {
        Ok(serde_json::to_string_pretty(&board.summaries())?)
    } else {
        Ok(board.get_scores())
    }
}

/// Suggests where to look in the script when an event was rejected by a game.
pub fn failure_hint(error: &AppError) -> Option<&'static str> {
    match error {
        AppError::ScriptEvent { source, .. } if source.is_caller_error() => {
            Some("Check the team ids and score values of the failing event")
        }
        AppError::ScriptEvent { .. } => {
            Some("Check the order of start, half-time and end events for that game")
        }
        _ => None,
    }
}

/// Replays the script named on the command line and prints the report.
pub async fn run_script(args: &Args, config: &Config) -> Result<(), AppError> {
    let Some(path) = args.script.as_deref() else {
        return Err(AppError::config_error("No match script given"));
    };

    let script = MatchScript::load(path).await?;
    let policy = ended_game_policy(args, config);
    tracing::info!("Replaying match script {path} (ended games: {policy})");

    let replay = script.replay(policy).inspect_err(|e| {
        tracing::error!("Replay of {path} failed: {e}");
        if let Some(hint) = failure_hint(e) {
            eprintln!("{hint}");
        }
    })?;
    let report = render_report(&replay.board, args.json)?;
    if report.is_empty() {
        println!("No games on the scoreboard");
    } else {
        println!("{report}");
    }
    Ok(())
}
