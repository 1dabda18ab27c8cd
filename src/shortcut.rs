use chrono::NaiveDateTime;
use serde::Serialize;
use thiserror::Error;

use crate::alarm::model::format_ymd;
use crate::alarm::range::AlarmSlot;

/// Name of the Shortcuts automation that creates the alarms on the device.
pub const BATCH_SHORTCUT_NAME: &str = "교번-알람-만들기";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PlatformKind {
    Ios,
    Desktop,
}

pub fn detect_platform() -> PlatformKind {
    if cfg!(target_os = "ios") {
        PlatformKind::Ios
    } else {
        PlatformKind::Desktop
    }
}

#[derive(Debug, Error)]
pub enum ShortcutError {
    #[error("no arrival time is set; nothing to schedule")]
    MissingArrival,
    #[error("the Shortcuts automation is only available on iOS devices")]
    UnsupportedPlatform,
    #[error("no valid alarms in the configured range")]
    EmptyBatch,
    #[error("failed to encode shortcut payload: {0}")]
    Payload(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Eq, PartialEq)]
pub struct ShortcutTime {
    pub hour: u32,
    pub minute: u32,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Eq, PartialEq)]
pub struct ShortcutPayload {
    pub times: Vec<ShortcutTime>,
}

/// Label carried by every alarm in the batch.
pub fn wake_label(who: &str, arrival: NaiveDateTime) -> String {
    format!("[{who}] 기상 ({})", format_ymd(arrival.date()))
}

pub fn build_shortcut_url(name: &str, payload: &ShortcutPayload) -> Result<String, ShortcutError> {
    let json = serde_json::to_string(payload)?;
    Ok(format!(
        "shortcuts://run-shortcut?name={}&input={}",
        urlencoding::encode(name),
        urlencoding::encode(&json)
    ))
}

/// Builds the deep link asking the device automation to create the whole
/// batch. Refuses with a user-facing error when the arrival time is absent,
/// the platform cannot run Shortcuts, or the batch is empty.
pub fn batch_shortcut_url(
    who: &str,
    arrival: Option<NaiveDateTime>,
    slots: &[AlarmSlot],
    platform: PlatformKind,
) -> Result<String, ShortcutError> {
    let arrival = arrival.ok_or(ShortcutError::MissingArrival)?;
    if platform != PlatformKind::Ios {
        return Err(ShortcutError::UnsupportedPlatform);
    }
    if slots.is_empty() {
        return Err(ShortcutError::EmptyBatch);
    }

    let label = wake_label(who, arrival);
    let times = slots
        .iter()
        .map(|slot| ShortcutTime {
            hour: slot.hour,
            minute: slot.minute,
            label: label.clone(),
        })
        .collect();
    build_shortcut_url(BATCH_SHORTCUT_NAME, &ShortcutPayload { times })
}
