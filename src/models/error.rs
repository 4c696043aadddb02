use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// 容器執行環境回傳的底層錯誤
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

pub type Result<T> = std::result::Result<T, ConvertError>;

// 轉換流程中所有可能的錯誤
#[derive(Debug)]
pub enum ConvertError {
    UnsupportedFormat(String),
    EmptyWebFiles,
    DaemonUnavailable(BoxError),
    ImagePull { image: String, source: BoxError },
    CreateContainer { image: String, source: BoxError },
    StartContainer { id: String, source: BoxError },
    WaitContainer { id: String, source: BoxError },
    NonZeroExit { id: String, status: i64 },
    ArtifactNotFound { id: String, path: String, source: BoxError },
    ReadArtifact { path: String, source: io::Error },
    WriteOutput { path: PathBuf, source: io::Error },
    RemoveContainer { id: String, source: BoxError },
}

impl ConvertError {
    /// 是否為在呼叫容器執行環境之前就能偵測的配置錯誤
    pub fn is_config_error(&self) -> bool {
        matches!(self, ConvertError::UnsupportedFormat(_) | ConvertError::EmptyWebFiles)
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::UnsupportedFormat(format) => write!(f, "不支援的輸出格式：{}", format),
            ConvertError::EmptyWebFiles => write!(f, "至少需要指定一個網頁檔案"),
            ConvertError::DaemonUnavailable(_) => write!(f, "無法連線至本機 Docker daemon"),
            ConvertError::ImagePull { image, .. } => write!(f, "無法取得映像檔 {}", image),
            ConvertError::CreateContainer { image, .. } => {
                write!(f, "無法以映像檔 {} 建立轉換 epub 的容器", image)
            }
            ConvertError::StartContainer { id, .. } => write!(f, "無法啟動容器 {}", id),
            ConvertError::WaitContainer { id, .. } => write!(f, "等待容器 {} 結束時發生錯誤", id),
            ConvertError::NonZeroExit { id, status } => {
                write!(f, "容器 {} 預期結束代碼為 0，實際為 {}", id, status)
            }
            ConvertError::ArtifactNotFound { id, path, .. } => {
                write!(f, "容器 {} 中找不到輸出檔案 {}", id, path)
            }
            ConvertError::ReadArtifact { path, .. } => write!(f, "無法讀取輸出檔案 {}", path),
            ConvertError::WriteOutput { path, .. } => {
                write!(f, "無法寫入輸出檔案 {}", path.display())
            }
            ConvertError::RemoveContainer { id, .. } => write!(f, "無法移除容器 {}", id),
        }
    }
}

impl Error for ConvertError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConvertError::UnsupportedFormat(_)
            | ConvertError::EmptyWebFiles
            | ConvertError::NonZeroExit { .. } => None,
            ConvertError::DaemonUnavailable(source)
            | ConvertError::ImagePull { source, .. }
            | ConvertError::CreateContainer { source, .. }
            | ConvertError::StartContainer { source, .. }
            | ConvertError::WaitContainer { source, .. }
            | ConvertError::ArtifactNotFound { source, .. }
            | ConvertError::RemoveContainer { source, .. } => Some(source.as_ref()),
            ConvertError::ReadArtifact { source, .. } | ConvertError::WriteOutput { source, .. } => {
                Some(source)
            }
        }
    }
}
