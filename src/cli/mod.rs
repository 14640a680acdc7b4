use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Convert a track list into spoken-word MP3 files.
#[derive(Debug, Parser)]
#[command(name = "tracksynth", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub backend: BackendCommand,
}

/// The subcommand selects which synthesis backend does the work.
#[derive(Debug, Subcommand)]
pub enum BackendCommand {
    /// Use Google Cloud Text-to-Speech to synthesize the texts
    Google {
        #[command(flatten)]
        common: CommonArgs,

        /// The API key for the Google text-to-speech account
        #[arg(long = "google-key", value_name = "KEY", env = "GOOGLE_TTS_KEY")]
        google_key: String,
    },

    /// Use AWS Polly to synthesize the texts (not implemented yet)
    Polly {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Use the macOS say voices to synthesize the texts (not implemented yet)
    Say {
        #[command(flatten)]
        common: CommonArgs,
    },
}

impl BackendCommand {
    pub fn common(&self) -> &CommonArgs {
        match self {
            BackendCommand::Google { common, .. } => common,
            BackendCommand::Polly { common } => common,
            BackendCommand::Say { common } => common,
        }
    }
}

#[derive(Debug, Args)]
pub struct CommonArgs {
    /// The input file with the audio tracks
    #[arg(short, long, default_value = "audio_tracks.de.txt")]
    pub input: PathBuf,

    /// The directory where the generated audio tracks are saved
    #[arg(short, long, default_value = "sd-card")]
    pub output: PathBuf,

    /// The language in which the texts should be pronounced
    #[arg(long, default_value = "de")]
    pub lang: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_should_apply_the_documented_defaults() {
        let cli = Cli::try_parse_from(["tracksynth", "google", "--google-key", "k"]).unwrap();

        let common = cli.backend.common();
        assert_eq!(common.input, PathBuf::from("audio_tracks.de.txt"));
        assert_eq!(common.output, PathBuf::from("sd-card"));
        assert_eq!(common.lang, "de");
    }

    #[test]
    fn it_should_require_a_backend_subcommand() {
        assert!(Cli::try_parse_from(["tracksynth"]).is_err());
    }

    #[test]
    fn it_should_require_the_google_key() {
        assert!(Cli::try_parse_from(["tracksynth", "google"]).is_err());
    }

    #[test]
    fn it_should_parse_the_stub_backends_without_a_key() {
        let cli = Cli::try_parse_from(["tracksynth", "say", "--lang", "en"]).unwrap();

        match cli.backend {
            BackendCommand::Say { common } => assert_eq!(common.lang, "en"),
            other => panic!("unexpected backend: {other:?}"),
        }
    }
}
