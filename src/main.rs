use clap::Parser;
use log::warn;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use mastery::core::config::{self, CliOverrides};

#[derive(Parser)]
#[command(name = "mastery", about = "Riverpod lessons with a built-in tutor")]
struct Args {
    /// Lesson to open first (e.g. intro, state, crud-model, async)
    #[arg(short, long)]
    lesson: Option<String>,

    /// Gemini model to ask (overrides config and MASTERY_MODEL)
    #[arg(short, long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to mastery.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("mastery.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        warn!("Ignoring config file: {}", e);
        Default::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            model: args.model,
            lesson: args.lesson,
        },
    );

    log::info!(
        "Riverpod Mastery starting up with model: {}",
        resolved.model_name
    );

    mastery::tui::run(resolved)
}
