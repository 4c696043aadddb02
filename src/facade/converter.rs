use std::collections::HashMap;
use std::sync::Arc;
use log::debug;
use crate::facade::pandoc::PandocConverter;
use crate::facade::traits::i_conversion::ConverterTrait;
use crate::models::error::{ConvertError, Result};
use crate::service::traits::i_service::{ClockTrait, ContainerServiceTrait};

/// 應用程式支援的輸出格式
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ConverterFormat {
    Epub,
}

impl ConverterFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConverterFormat::Epub => "epub",
        }
    }
}

/// 建立轉換策略後依序套用的設定，第一個失敗即中止
pub type ConverterOption = Box<dyn FnOnce(&mut dyn ConverterTrait) -> Result<()>>;

fn allowed_converter_formats() -> HashMap<&'static str, ConverterFormat> {
    [ConverterFormat::Epub]
        .into_iter()
        .map(|format| (format.as_str(), format))
        .collect()
}

pub fn parse_format(format: &str) -> Result<ConverterFormat> {
    allowed_converter_formats()
        .get(format)
        .copied()
        .ok_or_else(|| ConvertError::UnsupportedFormat(format.to_string()))
}

/// 在連線 Docker 之前檢查格式與網頁檔案
pub fn validate_request(format: &str, web_files: &[String]) -> Result<ConverterFormat> {
    let format = parse_format(format)?;
    if web_files.is_empty() {
        return Err(ConvertError::EmptyWebFiles);
    }
    Ok(format)
}

/// 依輸出格式選擇轉換策略並套用設定
/// # 參數
/// - format: 輸出格式，目前僅支援 "epub"
/// - container_service: 策略使用的容器服務
/// - clock: 產生輸出檔名時間戳的時間來源
/// - opts: 依序套用的設定
pub fn new_converter(
    format: &str,
    container_service: Arc<dyn ContainerServiceTrait>,
    clock: Arc<dyn ClockTrait>,
    opts: Vec<ConverterOption>,
) -> Result<Box<dyn ConverterTrait>> {
    let mut converter: Box<dyn ConverterTrait> = match parse_format(format)? {
        ConverterFormat::Epub => Box::new(PandocConverter::new(container_service, clock)),
    };
    debug!("選擇轉換策略：{}", format);

    for opt in opts {
        opt(converter.as_mut())?;
    }

    Ok(converter)
}

pub fn with_output_dir(output_dir: String) -> ConverterOption {
    Box::new(move |c: &mut dyn ConverterTrait| c.set_output_dir(output_dir))
}

pub fn with_web_files(web_files: Vec<String>) -> ConverterOption {
    Box::new(move |c: &mut dyn ConverterTrait| c.set_web_files(web_files))
}

pub fn with_no_progress(no_progress: bool) -> ConverterOption {
    Box::new(move |c: &mut dyn ConverterTrait| c.set_no_progress(no_progress))
}
