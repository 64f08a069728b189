//! Newsify session: acquisition, style selection and submission.
//!
//! A session walks through
//! `Idle -> AcquiringSource -> ImageReady -> Submitting -> Resulted`.
//! Going back returns to `Idle` from any phase and clears everything the user
//! acquired or generated. A failed submission returns to `ImageReady` with
//! the image and style untouched.

use std::path::Path;

use crate::api::{ApiError, NewsifyClient, SubmissionResult};
use crate::camera::{CameraDevice, CameraError, CameraPermission, PERMISSION_DENIED_MESSAGE};
use crate::image::{normalize, AcquiredImage, ImageError, ImageFile, PreviewRef};
use crate::navigation::{ResultLocation, DEFAULT_RESULT_PAGE};
use crate::presentation::Presentation;
use crate::style::StylePreset;

/// Where an image is being acquired from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Upload,
    Camera,
}

/// Current phase of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    AcquiringSource(Source),
    ImageReady,
    Submitting,
    /// The article was generated; the caller should navigate away.
    Resulted,
}

/// In-memory state of one newsify session.
#[derive(Debug, Clone)]
pub struct Session {
    phase: Phase,
    image: Option<AcquiredImage>,
    preview: Option<PreviewRef>,
    style: StylePreset,
    result: Option<SubmissionResult>,
    prompt_visible: bool,
    camera_active: bool,
    camera_permission: CameraPermission,
    result_page: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_result_page(DEFAULT_RESULT_PAGE)
    }

    /// Create a session that navigates to a custom result page.
    pub fn with_result_page(page: impl Into<String>) -> Self {
        Self {
            phase: Phase::Idle,
            image: None,
            preview: None,
            style: StylePreset::default(),
            result: None,
            prompt_visible: false,
            camera_active: false,
            camera_permission: CameraPermission::Unknown,
            result_page: page.into(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn image(&self) -> Option<&AcquiredImage> {
        self.image.as_ref()
    }

    pub fn preview(&self) -> Option<&PreviewRef> {
        self.preview.as_ref()
    }

    pub fn style(&self) -> StylePreset {
        self.style
    }

    /// The last generated article, if it is still current.
    pub fn result(&self) -> Option<&SubmissionResult> {
        self.result.as_ref()
    }

    pub fn is_prompt_visible(&self) -> bool {
        self.prompt_visible
    }

    pub fn is_camera_active(&self) -> bool {
        self.camera_active
    }

    pub fn camera_permission(&self) -> CameraPermission {
        self.camera_permission
    }

    /// Inline message to show after camera access was refused.
    pub fn permission_message(&self) -> Option<&'static str> {
        match self.camera_permission {
            CameraPermission::Denied => Some(PERMISSION_DENIED_MESSAGE),
            _ => None,
        }
    }

    /// Whether the upload option is offered (it is hidden while the camera is live).
    pub fn upload_available(&self) -> bool {
        !self.camera_active
    }

    /// Open the source prompt.
    pub fn choose_image(&mut self) {
        self.prompt_visible = true;
        self.result = None;
        self.phase = Phase::AcquiringSource(if self.camera_active {
            Source::Camera
        } else {
            Source::Upload
        });
    }

    /// Close the source prompt without acquiring anything.
    pub fn close_prompt(&mut self) {
        self.prompt_visible = false;
        if matches!(self.phase, Phase::AcquiringSource(_)) {
            self.phase = self.settled_phase();
        }
    }

    /// Use a picked file as the acquired image.
    pub fn select_file(&mut self, file: ImageFile) -> &PreviewRef {
        self.set_image(AcquiredImage::BinaryFile(file))
    }

    /// Read an image file from disk and use it as the acquired image.
    ///
    /// On error the session is left unchanged.
    pub fn upload_path(&mut self, path: &Path) -> Result<&PreviewRef, ImageError> {
        let file = ImageFile::from_path(path)?;
        Ok(self.select_file(file))
    }

    /// Ask the camera for permission and activate it when granted.
    pub async fn request_camera<C: CameraDevice>(&mut self, camera: &mut C) -> CameraPermission {
        let permission = camera.request_permission().await;
        self.camera_permission = permission;

        if permission.is_granted() {
            self.camera_active = true;
            self.result = None;
            self.phase = Phase::AcquiringSource(Source::Camera);
        } else {
            log::warn!("Camera permission denied");
        }
        permission
    }

    /// Capture a still frame from the active camera and use it as the image.
    ///
    /// A device that returns no frame leaves the session unchanged.
    pub async fn capture<C: CameraDevice>(
        &mut self,
        camera: &mut C,
    ) -> Result<&PreviewRef, CameraError> {
        if !self.camera_active {
            return Err(CameraError::NotActive);
        }

        match camera.capture_frame().await {
            Some(frame) => Ok(self.set_image(AcquiredImage::DataUrl(frame))),
            None => {
                log::error!("Failed to capture screenshot.");
                Err(CameraError::NoFrame)
            }
        }
    }

    /// Change the article style; any generated article is discarded.
    pub fn set_style(&mut self, style: StylePreset) {
        self.style = style;
        self.result = None;
        if self.phase == Phase::Resulted {
            self.phase = self.settled_phase();
        }
    }

    /// Reset everything the user acquired or generated.
    ///
    /// The camera permission outcome is kept; it belongs to the host.
    pub fn go_back(&mut self) {
        let permission = self.camera_permission;
        let page = std::mem::take(&mut self.result_page);
        *self = Self::with_result_page(page);
        self.camera_permission = permission;
    }

    /// Submit the acquired image and style to the service.
    ///
    /// Submissions are serialized: the session is borrowed mutably for the
    /// whole request. On success the stylesheet (if any) is handed to
    /// `presentation` and the result location is returned. On failure, or if
    /// the returned future is dropped before it completes, the image and
    /// style are kept and the session returns to `ImageReady`.
    pub async fn submit<P: Presentation + ?Sized>(
        &mut self,
        client: &NewsifyClient,
        presentation: &mut P,
    ) -> Result<ResultLocation, SubmitError> {
        if self.phase == Phase::Resulted {
            return Err(SubmitError::AlreadySubmitted);
        }
        let image = self.image.as_ref().ok_or(SubmitError::MissingImage)?;

        let part = normalize(image).map_err(|e| {
            log::error!("Invalid image type: {}", e);
            SubmitError::Image(e)
        })?;

        let style = self.style;
        let outcome = {
            let _submitting = SubmittingGuard::enter(&mut self.phase);
            client.upload(part, style).await
        };

        let result = match outcome {
            Ok(result) => result,
            Err(e) => {
                log::error!("Error uploading image: {}", e);
                return Err(SubmitError::Api(e));
            }
        };

        if let Some(css) = result.theme_css.as_deref() {
            if let Err(e) = presentation.apply_stylesheet(css) {
                log::warn!("Failed to apply theme stylesheet: {}", e);
            }
        }

        let location = ResultLocation::new(self.result_page.clone(), &result);
        log::info!("Navigating to {}", location);

        self.result = Some(result);
        self.prompt_visible = false;
        self.phase = Phase::Resulted;
        Ok(location)
    }

    fn set_image(&mut self, image: AcquiredImage) -> &PreviewRef {
        self.prompt_visible = false;
        self.result = None;
        self.phase = Phase::ImageReady;
        let preview = image.preview();
        self.image = Some(image);
        self.preview.insert(preview)
    }

    fn settled_phase(&self) -> Phase {
        if self.image.is_some() {
            Phase::ImageReady
        } else {
            Phase::Idle
        }
    }
}

/// Holds the session in `Submitting` while a request is in flight.
///
/// Dropping the guard, on completion or because the submit future was
/// dropped, puts the session back in `ImageReady`.
struct SubmittingGuard<'a> {
    phase: &'a mut Phase,
}

impl<'a> SubmittingGuard<'a> {
    fn enter(phase: &'a mut Phase) -> Self {
        *phase = Phase::Submitting;
        Self { phase }
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        if *self.phase == Phase::Submitting {
            *self.phase = Phase::ImageReady;
        }
    }
}

/// Errors that abort a submission.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("No image selected")]
    MissingImage,

    #[error("Article already generated; change the style or go back to submit again")]
    AlreadySubmitted,

    #[error(transparent)]
    Image(#[from] ImageError),

    #[error(transparent)]
    Api(#[from] ApiError),
}
