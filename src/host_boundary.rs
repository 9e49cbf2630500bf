//! The single operation an embedding host calls: `getScreenshotForBounds`.

use std::sync::Arc;

use serde_json::Value;

use crate::core::interfaces::ports::ScreenCaptureBackend;
use crate::core::models::{CaptureError, CaptureRequest, RgbaImage};
use crate::core::orchestrators::CaptureOrchestrator;
use crate::global_constants::{
    ERROR_ARGUMENT_NOT_A_NUMBER, ERROR_ARGUMENT_OUT_OF_RANGE, ERROR_WRONG_ARGUMENT_COUNT,
    HOST_ARGUMENT_COUNT, HOST_FUNCTION_NAME, LOG_TAG_HOST,
};
use crate::ports::PlatformScreenCapturer;

/// Captures the monitor at `[x, y, width, height]` with this platform's backend.
///
/// Arguments are checked before any platform call is made.
pub fn get_screenshot_for_bounds(arguments: &[Value]) -> Result<RgbaImage, CaptureError> {
    let request = parse_capture_request(arguments)?;
    let orchestrator = CaptureOrchestrator::build(Arc::new(PlatformScreenCapturer::initialize()));
    orchestrator.capture(&request)
}

pub fn get_screenshot_for_bounds_with<B: ScreenCaptureBackend>(
    orchestrator: &CaptureOrchestrator<B>,
    arguments: &[Value],
) -> Result<RgbaImage, CaptureError> {
    let request = parse_capture_request(arguments)?;
    orchestrator.capture(&request)
}

pub fn parse_capture_request(arguments: &[Value]) -> Result<CaptureRequest, CaptureError> {
    log::debug!(
        "{} {} called with {} arguments",
        LOG_TAG_HOST,
        HOST_FUNCTION_NAME,
        arguments.len()
    );

    let [x, y, width, height] = arguments else {
        log::warn!(
            "{} expected {} arguments, got {}",
            LOG_TAG_HOST,
            HOST_ARGUMENT_COUNT,
            arguments.len()
        );
        return Err(CaptureError::invalid_argument(ERROR_WRONG_ARGUMENT_COUNT));
    };

    Ok(CaptureRequest::for_bounds(
        coordinate_argument(x)?,
        coordinate_argument(y)?,
        dimension_argument(width)?,
        dimension_argument(height)?,
    ))
}

/// Host numbers become integers by truncation toward zero.
fn integral_argument(value: &Value) -> Result<f64, CaptureError> {
    value
        .as_f64()
        .filter(|number| number.is_finite())
        .map(f64::trunc)
        .ok_or_else(|| CaptureError::invalid_argument(ERROR_ARGUMENT_NOT_A_NUMBER))
}

fn coordinate_argument(value: &Value) -> Result<i32, CaptureError> {
    let number = integral_argument(value)?;
    if number < f64::from(i32::MIN) || number > f64::from(i32::MAX) {
        return Err(CaptureError::invalid_argument(ERROR_ARGUMENT_OUT_OF_RANGE));
    }

    Ok(number as i32)
}

fn dimension_argument(value: &Value) -> Result<u32, CaptureError> {
    let number = integral_argument(value)?;
    if number < 1.0 || number > f64::from(u32::MAX) {
        return Err(CaptureError::invalid_argument(ERROR_ARGUMENT_OUT_OF_RANGE));
    }

    Ok(number as u32)
}
