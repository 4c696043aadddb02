use crate::models::conversion::{ConversionInput, ConversionOutput};
use crate::models::error::Result;

// 轉換策略接口，每種輸出格式實作一個
pub trait ConverterTrait: Send {
    /// 執行轉換並將結果寫入輸出目錄
    /// # 回傳
    /// - 成功時返回輸出檔案資訊，失敗時返回對應步驟的錯誤
    fn convert(&mut self) -> Result<ConversionOutput>;

    /// 設定輸出目錄，空字串代表目前目錄
    fn set_output_dir(&mut self, output_dir: String) -> Result<()>;

    /// 設定要轉換的網頁檔案，不可為空
    fn set_web_files(&mut self, web_files: Vec<String>) -> Result<()>;

    fn set_no_progress(&mut self, _no_progress: bool) -> Result<()> {
        Ok(())
    }
}

// Facade 接口，負責協調檔案轉換流程
pub trait ConversionFacadeTrait {
    /// 執行檔案轉換，根據輸入配置生成輸出
    /// # 參數
    /// - input: 轉換所需的輸入參數
    /// # 回傳
    /// - 成功時返回轉換結果，失敗時返回轉換錯誤
    fn execute_conversion(&self, input: ConversionInput) -> Result<ConversionOutput>;
}
