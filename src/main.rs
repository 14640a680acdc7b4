use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tracksynth::cli::{BackendCommand, Cli};
use tracksynth::domain::batch::{BatchService, BatchSummary};
use tracksynth::domain::track::parse_track_list;
use tracksynth::domain::tts::LanguageCode;
use tracksynth::error::{AppError, AppResult};
use tracksynth::infrastructure::backends::{
    GoogleTtsBackend, PollyTtsBackend, SayTtsBackend, TtsBackend,
};
use tracksynth::infrastructure::config::{Config, LogFormat};
use tracksynth::infrastructure::output::TrackWriter;

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::from_env();
    init_logging(&config);

    let cli = Cli::parse();

    match run(cli).await {
        Ok(summary) => {
            tracing::info!(
                total = summary.total,
                written = summary.written,
                failed = summary.failed,
                "All tracks processed"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Run failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> AppResult<BatchSummary> {
    let backend: Arc<dyn TtsBackend> = match &cli.backend {
        BackendCommand::Google { google_key, .. } => {
            Arc::new(GoogleTtsBackend::new(google_key.clone())?)
        }
        BackendCommand::Polly { .. } => Arc::new(PollyTtsBackend::new()),
        BackendCommand::Say { .. } => Arc::new(SayTtsBackend::new()),
    };

    let common = cli.backend.common();
    if !common.input.is_file() {
        return Err(AppError::InputFileNotFound(common.input.clone()));
    }
    if !common.output.is_dir() {
        return Err(AppError::OutputDirMissing(common.output.clone()));
    }

    let raw = std::fs::read_to_string(&common.input)?;
    let entries = parse_track_list(&raw)?;
    tracing::info!(
        input = %common.input.display(),
        tracks = entries.len(),
        "Track list parsed"
    );

    let writer = TrackWriter::new(&common.output);
    let language = LanguageCode::from(common.lang.as_str());
    let service = BatchService::new(backend, writer, language);

    Ok(service.run(&entries).await?)
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tracksynth=info".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
