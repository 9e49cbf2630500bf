use std::fmt;
use std::sync::Arc;

use crate::core::interfaces::ports::ScreenCaptureBackend;
use crate::core::models::{CaptureError, CaptureRequest, MonitorDescriptor, RgbaImage};
use crate::core::pixel_normalizer::normalize_native_frame;
use crate::global_constants::LOG_TAG_CAPTURE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapturePhase {
    Idle,
    Resolving,
    Acquiring,
    Normalizing,
    Done,
    Failed,
}

impl fmt::Display for CapturePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapturePhase::Idle => write!(f, "Idle"),
            CapturePhase::Resolving => write!(f, "Resolving"),
            CapturePhase::Acquiring => write!(f, "Acquiring"),
            CapturePhase::Normalizing => write!(f, "Normalizing"),
            CapturePhase::Done => write!(f, "Done"),
            CapturePhase::Failed => write!(f, "Failed"),
        }
    }
}

/// Runs Resolving -> Acquiring -> Normalizing for one request on the calling
/// thread. The first failing stage ends the capture; nothing is retried.
pub struct CaptureOrchestrator<B: ScreenCaptureBackend> {
    backend: Arc<B>,
}

impl<B: ScreenCaptureBackend> CaptureOrchestrator<B> {
    pub fn build(backend: Arc<B>) -> Self {
        Self { backend }
    }

    pub fn list_monitors(&self) -> Result<Vec<MonitorDescriptor>, CaptureError> {
        self.backend.enumerate_monitors()
    }

    pub fn capture(&self, request: &CaptureRequest) -> Result<RgbaImage, CaptureError> {
        let mut phase = CapturePhase::Idle;
        self.run_pipeline(request, &mut phase)
    }

    fn run_pipeline(
        &self,
        request: &CaptureRequest,
        phase: &mut CapturePhase,
    ) -> Result<RgbaImage, CaptureError> {
        log::debug!("{} capturing monitor {}", LOG_TAG_CAPTURE, request);

        let result = self.run_stages(request, phase);

        match &result {
            Ok(image) => {
                transition(phase, CapturePhase::Done);
                log::info!(
                    "{} captured {}x{} screenshot, {} bytes",
                    LOG_TAG_CAPTURE,
                    image.width(),
                    image.height(),
                    image.len()
                );
            }
            Err(error) => {
                log::warn!(
                    "{} capture of {} failed while {}: {}",
                    LOG_TAG_CAPTURE,
                    request,
                    phase,
                    error
                );
                transition(phase, CapturePhase::Failed);
            }
        }

        result
    }

    fn run_stages(
        &self,
        request: &CaptureRequest,
        phase: &mut CapturePhase,
    ) -> Result<RgbaImage, CaptureError> {
        transition(phase, CapturePhase::Resolving);
        let monitor = self.backend.resolve_monitor(request)?;

        transition(phase, CapturePhase::Acquiring);
        let frame = self.backend.acquire_frame(&monitor)?;

        transition(phase, CapturePhase::Normalizing);
        normalize_native_frame(frame)
    }
}

fn transition(phase: &mut CapturePhase, next: CapturePhase) {
    log::debug!("{} {} -> {}", LOG_TAG_CAPTURE, phase, next);
    *phase = next;
}
