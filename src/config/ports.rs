use crate::models::conversion::ConversionInput;
use crate::models::error::Result;

// 應用配置結構體，封裝所有參數
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub format: String,
    pub output_dir: String,
    pub web_files: Vec<String>,
    pub no_progress: bool,
}

impl From<AppConfig> for ConversionInput {
    fn from(config: AppConfig) -> Self {
        ConversionInput {
            format: config.format,
            web_files: config.web_files,
            output_dir: config.output_dir,
            no_progress: config.no_progress,
        }
    }
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> Result<AppConfig>;
}
