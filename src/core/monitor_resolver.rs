use crate::core::models::{CaptureError, CaptureRequest, MonitorDescriptor};
use crate::global_constants::{LOG_TAG_RESOLVER, MESSAGE_MONITOR_MATCHED, MESSAGE_MONITOR_SCANNED};

/// First monitor, in enumeration order, whose geometry equals the request on
/// all four fields. There is no nearest-match fallback.
pub fn find_exact_monitor(
    monitors: &[MonitorDescriptor],
    request: &CaptureRequest,
) -> Result<MonitorDescriptor, CaptureError> {
    for monitor in monitors {
        if monitor.matches_exactly(request) {
            log::debug!(
                "{} {} x: {}, y: {}, automatic: {}",
                LOG_TAG_RESOLVER,
                MESSAGE_MONITOR_MATCHED,
                monitor.x,
                monitor.y,
                monitor.flags.automatic
            );
            return Ok(*monitor);
        }

        log::debug!(
            "{} {} x: {}, y: {} - no match!",
            LOG_TAG_RESOLVER,
            MESSAGE_MONITOR_SCANNED,
            monitor.x,
            monitor.y
        );
    }

    log::warn!(
        "{} no monitor among {} matches {}",
        LOG_TAG_RESOLVER,
        monitors.len(),
        request
    );

    Err(CaptureError::MonitorNotFound { request: *request })
}
