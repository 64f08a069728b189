//! Subcommand handlers for submit, capture, styles and config actions.

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::args::ConfigAction;
use crate::api::{ApiError, NewsifyClient};
use crate::camera::{CameraError, SnapshotCamera};
use crate::config::{init_file, Config, ConfigError};
use crate::image::ImageError;
use crate::presentation::{NoPresentation, Presentation, StylesheetFile};
use crate::session::{Session, SubmitError};
use crate::style::StylePreset;

/// Settings resolved from the config file, environment and flags.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub base_url: String,
    pub timeout: Duration,
    pub result_page: String,
    pub origin: Option<String>,
    pub stylesheet: Option<PathBuf>,
}

impl RunContext {
    fn client(&self) -> Result<NewsifyClient, ApiError> {
        NewsifyClient::with_timeout(self.base_url.clone(), self.timeout)
    }
}

/// Errors reported by the submit and capture commands.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Image(#[from] ImageError),

    #[error(transparent)]
    Camera(#[from] CameraError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Submit(#[from] SubmitError),

    #[error("No camera snapshot configured. Pass --snapshot or set [camera] snapshot in the config file")]
    NoSnapshot,
}

/// Upload an image file and return the result page URL.
pub async fn submit_file(
    ctx: &RunContext,
    image: &Path,
    style: StylePreset,
) -> Result<String, CommandError> {
    let mut session = Session::with_result_page(ctx.result_page.clone());
    session.choose_image();
    let preview = session.upload_path(image)?;
    log::debug!("Preview: {}", preview);
    session.set_style(style);

    finish(ctx, &mut session).await
}

/// Capture a frame from the snapshot camera and return the result page URL.
pub async fn capture_and_submit(
    ctx: &RunContext,
    snapshot: Option<PathBuf>,
    style: StylePreset,
) -> Result<String, CommandError> {
    let snapshot = snapshot.ok_or(CommandError::NoSnapshot)?;
    let mut camera = SnapshotCamera::new(snapshot);

    let mut session = Session::with_result_page(ctx.result_page.clone());
    session.choose_image();
    if !session.request_camera(&mut camera).await.is_granted() {
        return Err(CameraError::PermissionDenied.into());
    }
    session.capture(&mut camera).await?;
    session.set_style(style);

    finish(ctx, &mut session).await
}

async fn finish(ctx: &RunContext, session: &mut Session) -> Result<String, CommandError> {
    let client = ctx.client()?;

    let mut presentation: Box<dyn Presentation> = match &ctx.stylesheet {
        Some(path) => Box::new(StylesheetFile::new(path)),
        None => Box::new(NoPresentation),
    };

    let location = session.submit(&client, presentation.as_mut()).await?;

    if let Some(result) = session.result() {
        println!("{}", result.article);
        println!();
    }

    Ok(match &ctx.origin {
        Some(origin) => location.with_origin(origin),
        None => location.to_string(),
    })
}

/// Print the available styles.
pub fn list_styles(default: StylePreset) {
    println!("Available styles:");
    for style in StylePreset::ALL {
        let marker = if style == default { " (default)" } else { "" };
        println!("  {:<8} {}{}", style.as_str(), style.label(), marker);
    }
    println!();
    println!("Use --style <name> to select a style.");
}

/// Handle config subcommand actions.
pub fn handle_config_action(
    action: ConfigAction,
    config: &Config,
    ctx: &RunContext,
    config_path: &Path,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Show => {
            println!("Current configuration:");
            println!("  Endpoint: {}", ctx.base_url);
            println!("  Timeout: {}s", ctx.timeout.as_secs());
            println!("  Result page: {}", ctx.result_page);
            println!(
                "  Origin: {}",
                ctx.origin.as_deref().unwrap_or("(none)")
            );
            println!(
                "  Stylesheet: {}",
                ctx.stylesheet
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(not written)".to_string())
            );
            println!(
                "  Camera snapshot: {}",
                config
                    .camera
                    .snapshot
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(none)".to_string())
            );
            println!("  Default style: {}", config.style.default);
            println!();

            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
        }
        ConfigAction::Init => {
            init_file(config_path)?;
            println!("Created config file: {}", config_path.display());
        }
    }
    Ok(())
}
