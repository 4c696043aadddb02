use std::sync::Arc;
use anyhow::Context;
use clap::Parser;
use crate::config::config::{Cli, Command, ConvertArgs};
use crate::config::ports::{AppConfig, ConfigPort};
use crate::facade::conversion_facade::ConversionFacade;
use crate::facade::converter::validate_request;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::ConversionOutput;
use crate::models::error::Result;
use crate::service::config_service::ConfigService;
use crate::service::docker_service::DockerService;
use crate::utils::utils::{setup_logging, SystemClock};

pub fn process_args(args: Vec<String>) -> anyhow::Result<ConversionOutput> {
    let cli = Cli::parse_from(args);
    setup_logging(&cli.log_level)?;

    match cli.command {
        Command::Convert(args) => process_convert(args),
    }
}

pub fn process_convert(args: ConvertArgs) -> anyhow::Result<ConversionOutput> {
    let config_service = ConfigService::new(Box::new(CliConfigAdapter::new(args)));
    let config = config_service.get_config().context("讀取配置失敗")?;
    validate_request(&config.format, &config.web_files).context("配置無效")?;

    // 啟動時必須能連線至 Docker daemon
    let docker = DockerService::connect().context("無法存取本機 Docker daemon")?;
    let facade = ConversionFacade::new(Arc::new(docker), Arc::new(SystemClock));

    let output = facade
        .execute_conversion(config.into())
        .context("轉換網頁為 epub 失敗")?;
    Ok(output)
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    args: ConvertArgs,
}

impl CliConfigAdapter {
    pub fn new(args: ConvertArgs) -> Self {
        CliConfigAdapter { args }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> Result<AppConfig> {
        // 去除逗號分隔時留下的空白項目
        let web_files: Vec<String> = self
            .args
            .web
            .iter()
            .map(|f| f.trim())
            .filter(|f| !f.is_empty())
            .map(String::from)
            .collect();

        if web_files.len() != self.args.web.len() {
            log::warn!("已忽略空白的網頁檔案項目：{:?}", self.args.web);
        }

        Ok(AppConfig {
            format: self.args.format.clone(),
            output_dir: self.args.output.clone(),
            web_files,
            no_progress: self.args.no_progress,
        })
    }
}
