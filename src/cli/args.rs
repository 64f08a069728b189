//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::style::StylePreset;

/// Turn a photo into a news article
#[derive(Parser, Debug)]
#[command(name = "newsify")]
#[command(version, about = "Turn a photo into a news article", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// newsify service base URL (default: $NEWSIFY_ENDPOINT or http://127.0.0.1:5000)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Write the returned theme stylesheet to this file
    #[arg(long, global = true)]
    pub css_out: Option<PathBuf>,

    /// Origin prepended to the result page URL
    #[arg(long, global = true)]
    pub origin: Option<String>,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Upload an image file and generate an article
    Submit {
        /// Image to upload (png, jpg, jpeg, heif, heic, gif, webp, bmp)
        image: PathBuf,

        /// Article style (default: from config, else formal)
        #[arg(long, short)]
        style: Option<StylePreset>,
    },
    /// Capture a still frame from the camera and generate an article
    Capture {
        /// Snapshot file kept up to date by the webcam (default: from config)
        #[arg(long)]
        snapshot: Option<PathBuf>,

        /// Article style (default: from config, else formal)
        #[arg(long, short)]
        style: Option<StylePreset>,
    },
    /// List available article styles
    Styles,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_defaults() {
        let args = Args::parse_from(["newsify", "submit", "cat.png"]);
        match args.command {
            Command::Submit { image, style } => {
                assert_eq!(image, PathBuf::from("cat.png"));
                assert!(style.is_none());
            }
            other => panic!("Expected Submit subcommand, got {:?}", other),
        }
        assert!(args.endpoint.is_none());
        assert!(args.css_out.is_none());
        assert!(args.config.is_none());
    }

    #[test]
    fn test_submit_style_values() {
        for (value, expected) in [
            ("formal", StylePreset::Formal),
            ("tabloid", StylePreset::Tabloid),
            ("blog", StylePreset::Blog),
            ("social", StylePreset::Social),
        ] {
            let args = Args::parse_from(["newsify", "submit", "cat.png", "--style", value]);
            assert!(matches!(
                args.command,
                Command::Submit { style: Some(s), .. } if s == expected
            ));
        }
    }

    #[test]
    fn test_unknown_style_rejected() {
        let result = Args::try_parse_from(["newsify", "submit", "cat.png", "-s", "gossip"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_capture_subcommand() {
        let args = Args::parse_from([
            "newsify",
            "capture",
            "--snapshot",
            "/tmp/frame.jpg",
            "-s",
            "social",
        ]);
        match args.command {
            Command::Capture { snapshot, style } => {
                assert_eq!(snapshot, Some(PathBuf::from("/tmp/frame.jpg")));
                assert_eq!(style, Some(StylePreset::Social));
            }
            other => panic!("Expected Capture subcommand, got {:?}", other),
        }
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args = Args::parse_from([
            "newsify",
            "submit",
            "cat.png",
            "--endpoint",
            "http://localhost:8080",
            "--css-out",
            "theme.css",
            "-c",
            "/tmp/test.toml",
        ]);
        assert_eq!(args.endpoint.as_deref(), Some("http://localhost:8080"));
        assert_eq!(args.css_out, Some(PathBuf::from("theme.css")));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/test.toml")));
    }

    #[test]
    fn test_config_subcommands() {
        let args = Args::parse_from(["newsify", "config", "show"]);
        assert!(matches!(
            args.command,
            Command::Config {
                action: ConfigAction::Show
            }
        ));

        let args = Args::parse_from(["newsify", "config", "init"]);
        assert!(matches!(
            args.command,
            Command::Config {
                action: ConfigAction::Init
            }
        ));
    }

    #[test]
    fn test_styles_subcommand() {
        let args = Args::parse_from(["newsify", "styles"]);
        assert!(matches!(args.command, Command::Styles));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Args::try_parse_from(["newsify"]).is_err());
    }
}
