use std::io::Read;
use chrono::{DateTime, Local};
use crate::models::container::{ContainerSpec, WaitOutcome};
use crate::models::error::BoxError;

// 容器服務接口，負責容器的生命週期
pub trait ContainerServiceTrait: Send + Sync {
    /// 確認映像檔存在，不存在時拉取
    /// # 參數
    /// - image: 映像檔名稱
    fn ensure_image(&self, image: &str) -> Result<(), BoxError>;

    /// 建立容器
    /// # 回傳
    /// - 成功時返回容器 ID
    fn create(&self, spec: &ContainerSpec) -> Result<String, BoxError>;

    /// 啟動容器
    fn start(&self, id: &str) -> Result<(), BoxError>;

    /// 阻塞直到容器不再執行
    /// # 回傳
    /// - 成功時返回容器的結束代碼，等待失敗時返回錯誤
    fn wait(&self, id: &str) -> Result<WaitOutcome, BoxError>;

    /// 從容器中複製檔案
    /// # 參數
    /// - id: 容器 ID
    /// - path: 容器內的檔案路徑
    /// # 回傳
    /// - 成功時返回檔案內容的讀取器
    fn copy_from(&self, id: &str, path: &str) -> Result<Box<dyn Read + Send>, BoxError>;

    /// 移除容器
    fn remove(&self, id: &str) -> Result<(), BoxError>;
}

// 時間來源接口，用於產生輸出檔名的時間戳
pub trait ClockTrait: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}
