use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;

use throwsense::{AnalysisConfig, LandmarkFrame, SessionController, SettingsStore};

/// Replay a recorded landmark stream through the throw-analysis engine.
///
/// The recording is JSON lines, one landmark frame per line, as captured
/// from the pose provider. Prints coaching feedback as it changes and the
/// final session summary as pretty JSON.
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Cli {
    /// JSON-lines file with one landmark frame per line
    recording: PathBuf,

    /// Settings file overriding the default analysis thresholds
    #[clap(short, long)]
    settings: Option<PathBuf>,

    /// Print every frame's metrics instead of only feedback changes
    #[clap(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    let config = match &cli.settings {
        Some(path) => SettingsStore::new(path.clone())?.analysis(),
        None => AnalysisConfig::default(),
    };

    let file = File::open(&cli.recording)
        .with_context(|| format!("failed to open recording {}", cli.recording.display()))?;

    let mut controller = SessionController::new(config);
    controller.start();

    let mut last_message: Option<String> = None;
    for (line_no, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let frame: LandmarkFrame = serde_json::from_str(&line)
            .with_context(|| format!("bad landmark frame on line {}", line_no + 1))?;
        let output = controller.process_frame(&frame)?;

        let message = output.feedback.as_ref().map(|f| f.message.clone());
        if cli.verbose {
            println!(
                "[{:>8.3}s] rom={:>5} tilt={:>4} velocity={:>4} stable={:.2}s",
                frame.timestamp,
                fmt_degrees(output.snapshot.elbow_rom),
                fmt_degrees(output.snapshot.trunk_tilt),
                output
                    .snapshot
                    .velocity
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "-".into()),
                output.snapshot.stable_seconds,
            );
        }
        if message != last_message {
            if let Some(feedback) = &output.feedback {
                println!(
                    "[{:>8.3}s] {:>7}: {}",
                    frame.timestamp,
                    feedback.severity.as_str(),
                    feedback.message
                );
            }
            last_message = message;
        }
    }

    let summary = controller.finalize()?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}

fn fmt_degrees(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.0}°", v))
        .unwrap_or_else(|| "-".into())
}
