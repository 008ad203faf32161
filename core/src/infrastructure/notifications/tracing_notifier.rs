use crate::domain::food_analysis::{
    ports::NotificationSink,
    value_objects::{Notice, NoticeLevel},
};

/// Forwards notices to the log under the `nutriscan::notice` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotificationSink;

impl NotificationSink for TracingNotificationSink {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Info => tracing::info!(target: "nutriscan::notice", "{}", notice.message),
            NoticeLevel::Error => tracing::warn!(target: "nutriscan::notice", "{}", notice.message),
        }
    }
}
