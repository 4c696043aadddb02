use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use log::{debug, info, warn};
use crate::facade::traits::i_conversion::ConverterTrait;
use crate::models::container::ContainerSpec;
use crate::models::conversion::ConversionOutput;
use crate::models::error::{ConvertError, Result};
use crate::service::traits::i_service::{ClockTrait, ContainerServiceTrait};
use crate::utils::utils::{create_spinner, format_timestamp};

pub const PANDOC_IMAGE: &str = "jagregory/pandoc";
pub const PANDOC_WORKING_DIR: &str = "/source";
const PANDOC_OUTPUT_PREFIX: &str = "fogo_pandoc_";
const ARCHIVE_PREFIX: &str = "fogo_generated_epub_";

/// 以 pandoc 容器將網頁轉為 epub 的轉換策略
pub struct PandocConverter {
    container_service: Arc<dyn ContainerServiceTrait>,
    clock: Arc<dyn ClockTrait>,
    output_dir: String,
    web_files: Vec<String>,
    no_progress: bool,
}

// 單次轉換使用的檔名，兩者共用同一個時間戳
#[derive(Debug, Clone, PartialEq)]
pub struct OutputNames {
    pub container_path: String,
    pub archive_name: String,
}

impl OutputNames {
    pub fn at(timestamp: &str) -> Self {
        OutputNames {
            container_path: format!("{}/{}{}.epub", PANDOC_WORKING_DIR, PANDOC_OUTPUT_PREFIX, timestamp),
            archive_name: format!("{}{}.tar.gz", ARCHIVE_PREFIX, timestamp),
        }
    }
}

impl PandocConverter {
    pub fn new(container_service: Arc<dyn ContainerServiceTrait>, clock: Arc<dyn ClockTrait>) -> Self {
        PandocConverter {
            container_service,
            clock,
            output_dir: String::new(),
            web_files: Vec::new(),
            no_progress: true,
        }
    }

    /// pandoc 的命令列：輸出路徑、standalone、以 HTML 讀取，最後接上網頁檔案
    pub fn build_command(&self, container_path: &str) -> Vec<String> {
        let mut cmd: Vec<String> = ["-o", container_path, "-s", "-r", "html"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        cmd.extend(self.web_files.iter().cloned());
        cmd
    }

    pub fn container_spec(&self, container_path: &str) -> ContainerSpec {
        ContainerSpec {
            image: PANDOC_IMAGE.to_string(),
            cmd: self.build_command(container_path),
            working_dir: PANDOC_WORKING_DIR.to_string(),
            tty: true,
        }
    }

    fn output_path(&self, archive_name: &str) -> PathBuf {
        if self.output_dir.is_empty() {
            PathBuf::from(archive_name)
        } else {
            Path::new(&self.output_dir).join(archive_name)
        }
    }

    fn exec(&self, id: &str) -> Result<()> {
        self.container_service
            .start(id)
            .map_err(|source| ConvertError::StartContainer { id: id.to_string(), source })?;
        info!("容器已啟動：{}", id);

        let spinner = create_spinner("pandoc 轉換中", self.no_progress);
        let outcome = self.container_service.wait(id);
        spinner.finish_and_clear();

        match outcome {
            Ok(outcome) if outcome.is_success() => {
                info!("容器 {} 執行完成，結束代碼 0", id);
                Ok(())
            }
            Ok(outcome) => Err(ConvertError::NonZeroExit {
                id: id.to_string(),
                status: outcome.status_code(),
            }),
            Err(source) => Err(ConvertError::WaitContainer { id: id.to_string(), source }),
        }
    }

    fn save_output_file(&self, id: &str, names: &OutputNames) -> Result<(PathBuf, usize)> {
        let mut archive = self
            .container_service
            .copy_from(id, &names.container_path)
            .map_err(|source| ConvertError::ArtifactNotFound {
                id: id.to_string(),
                path: names.container_path.clone(),
                source,
            })?;

        let mut content = Vec::new();
        archive
            .read_to_end(&mut content)
            .map_err(|source| ConvertError::ReadArtifact { path: names.container_path.clone(), source })?;
        info!("取得輸出檔案 {}，大小：{} 位元組", names.container_path, content.len());

        let output_path = self.output_path(&names.archive_name);
        if !self.output_dir.is_empty() {
            fs::create_dir_all(&self.output_dir)
                .map_err(|source| ConvertError::WriteOutput { path: output_path.clone(), source })?;
        }
        fs::write(&output_path, &content)
            .map_err(|source| ConvertError::WriteOutput { path: output_path.clone(), source })?;
        info!("已寫入輸出檔案：{}", output_path.display());

        Ok((output_path, content.len()))
    }

    fn remove_container(&self, id: &str) {
        if let Err(source) = self.container_service.remove(id) {
            let cause = source.to_string();
            let err = ConvertError::RemoveContainer { id: id.to_string(), source };
            warn!("{}：{}", err, cause);
        } else {
            debug!("已移除容器：{}", id);
        }
    }
}

impl ConverterTrait for PandocConverter {
    fn convert(&mut self) -> Result<ConversionOutput> {
        if self.web_files.is_empty() {
            return Err(ConvertError::EmptyWebFiles);
        }

        let names = OutputNames::at(&format_timestamp(&self.clock.now()));
        let spec = self.container_spec(&names.container_path);
        debug!("pandoc 命令列：{:?}", spec.cmd);

        self.container_service
            .ensure_image(&spec.image)
            .map_err(|source| ConvertError::ImagePull { image: spec.image.clone(), source })?;

        let id = self
            .container_service
            .create(&spec)
            .map_err(|source| ConvertError::CreateContainer { image: spec.image.clone(), source })?;
        info!("已建立容器：{}", id);

        // 容器建立後無論成功與否都要移除
        let result = self
            .exec(&id)
            .and_then(|_| self.save_output_file(&id, &names));
        self.remove_container(&id);

        let (output_path, size) = result?;
        Ok(ConversionOutput {
            output_path,
            container_id: id,
            size,
        })
    }

    fn set_output_dir(&mut self, output_dir: String) -> Result<()> {
        self.output_dir = output_dir;
        Ok(())
    }

    fn set_web_files(&mut self, web_files: Vec<String>) -> Result<()> {
        if web_files.is_empty() {
            return Err(ConvertError::EmptyWebFiles);
        }
        self.web_files = web_files;
        Ok(())
    }

    fn set_no_progress(&mut self, no_progress: bool) -> Result<()> {
        self.no_progress = no_progress;
        Ok(())
    }
}
