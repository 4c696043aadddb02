use std::io::{Cursor, Read};
use bollard::container::{
    Config, CreateContainerOptions, DownloadFromContainerOptions, RemoveContainerOptions,
    StartContainerOptions, WaitContainerOptions,
};
use bollard::errors::Error as DockerError;
use bollard::image::CreateImageOptions;
use bollard::Docker;
use futures_util::TryStreamExt;
use log::{debug, info};
use tokio::runtime::{Builder, Runtime};
use crate::models::container::{ContainerSpec, WaitOutcome};
use crate::models::error::{BoxError, ConvertError, Result};
use crate::service::traits::i_service::ContainerServiceTrait;

/// Docker 服務，透過 Docker Engine API 管理容器並實現 ContainerServiceTrait
///
/// bollard 為非同步 API，這裡持有一個單執行緒 tokio runtime，每個呼叫都阻塞至完成。
pub struct DockerService {
    docker: Docker,
    runtime: Runtime,
}

impl DockerService {
    /// 連線至本機 Docker daemon（DOCKER_HOST 或預設 socket），並以 ping 確認可用
    pub fn connect() -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ConvertError::DaemonUnavailable(Box::new(e)))?;
        let docker = Docker::connect_with_local_defaults()
            .map_err(|e| ConvertError::DaemonUnavailable(Box::new(e)))?;
        let pong = runtime
            .block_on(docker.ping())
            .map_err(|e| ConvertError::DaemonUnavailable(Box::new(e)))?;
        debug!("Docker daemon 回應：{}", pong);
        Ok(DockerService { docker, runtime })
    }
}

impl ContainerServiceTrait for DockerService {
    fn ensure_image(&self, image: &str) -> std::result::Result<(), BoxError> {
        match self.runtime.block_on(self.docker.inspect_image(image)) {
            Ok(_) => {
                debug!("映像檔已存在：{}", image);
                return Ok(());
            }
            Err(DockerError::DockerResponseServerError { status_code: 404, .. }) => {}
            Err(e) => return Err(Box::new(e)),
        }

        info!("本機找不到映像檔 {}，開始拉取", image);
        let (from_image, tag) = split_image_tag(image);
        let options = CreateImageOptions {
            from_image,
            tag,
            ..Default::default()
        };
        self.runtime
            .block_on(self.docker.create_image(Some(options), None, None).try_collect::<Vec<_>>())?;
        info!("映像檔拉取完成：{}", image);
        Ok(())
    }

    fn create(&self, spec: &ContainerSpec) -> std::result::Result<String, BoxError> {
        let config = Config {
            image: Some(spec.image.clone()),
            cmd: Some(spec.cmd.clone()),
            working_dir: Some(spec.working_dir.clone()),
            tty: Some(spec.tty),
            ..Default::default()
        };
        let response = self.runtime.block_on(
            self.docker
                .create_container(None::<CreateContainerOptions<String>>, config),
        )?;
        for warning in &response.warnings {
            log::warn!("建立容器時的警告：{}", warning);
        }
        Ok(response.id)
    }

    fn start(&self, id: &str) -> std::result::Result<(), BoxError> {
        self.runtime.block_on(
            self.docker
                .start_container(id, None::<StartContainerOptions<String>>),
        )?;
        Ok(())
    }

    fn wait(&self, id: &str) -> std::result::Result<WaitOutcome, BoxError> {
        let options = WaitContainerOptions {
            condition: "not-running",
        };
        let result = self.runtime.block_on(
            self.docker
                .wait_container(id, Some(options))
                .try_collect::<Vec<_>>(),
        );

        match result {
            Ok(responses) => {
                let status = responses
                    .last()
                    .map(|r| r.status_code)
                    .ok_or_else(|| -> BoxError { "等待容器時未收到結束狀態".into() })?;
                Ok(WaitOutcome::Exited(status))
            }
            // bollard 將非零結束代碼回報為錯誤，這裡還原成結束狀態
            Err(DockerError::DockerContainerWaitError { code, .. }) => Ok(WaitOutcome::Exited(code)),
            Err(e) => Err(Box::new(e)),
        }
    }

    fn copy_from(&self, id: &str, path: &str) -> std::result::Result<Box<dyn Read + Send>, BoxError> {
        let options = DownloadFromContainerOptions { path };
        let chunks = self.runtime.block_on(
            self.docker
                .download_from_container(id, Some(options))
                .try_collect::<Vec<_>>(),
        )?;
        let data: Vec<u8> = chunks.iter().flat_map(|chunk| chunk.iter().copied()).collect();
        Ok(Box::new(Cursor::new(data)))
    }

    fn remove(&self, id: &str) -> std::result::Result<(), BoxError> {
        let options = RemoveContainerOptions {
            force: true,
            ..Default::default()
        };
        self.runtime
            .block_on(self.docker.remove_container(id, Some(options)))?;
        Ok(())
    }
}

// 未指定 tag 時拉取 latest，避免拉取所有 tag
fn split_image_tag(image: &str) -> (&str, &str) {
    match image.rsplit_once(':') {
        Some((name, tag)) if !tag.contains('/') => (name, tag),
        _ => (image, "latest"),
    }
}
