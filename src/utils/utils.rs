use std::io;
use std::time::Duration;
use chrono::{DateTime, Local};
use indicatif::{ProgressBar, ProgressStyle};
use log;
use crate::service::traits::i_service::ClockTrait;

pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

pub fn setup_logging(log_level: &str) -> io::Result<()> {
    let log_level_filter = match log_level {
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("日誌初始化失敗: {}", e)))?;
    Ok(())
}

/// 系統時鐘，使用本地時間
pub struct SystemClock;

impl ClockTrait for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

pub fn format_timestamp(time: &DateTime<Local>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// 等待容器時顯示的轉圈提示，no_progress 時隱藏
pub fn create_spinner(message: &str, no_progress: bool) -> ProgressBar {
    if no_progress {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg} 已經過: {elapsed}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamp_uses_compact_format() {
        let time = Local.with_ymd_and_hms(2019, 3, 7, 9, 5, 1).unwrap();
        assert_eq!(format_timestamp(&time), "20190307090501");
    }

    #[test]
    fn hidden_spinner_when_progress_disabled() {
        let pb = create_spinner("轉換中", true);
        assert!(pb.is_hidden());
    }
}
