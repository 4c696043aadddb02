// 建立容器所需的設定
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerSpec {
    pub image: String,
    pub cmd: Vec<String>,
    pub working_dir: String,
    pub tty: bool,
}

// 等待容器結束的結果，等待本身失敗時由 Err 表示
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    Exited(i64),
}

impl WaitOutcome {
    pub fn status_code(&self) -> i64 {
        match self {
            WaitOutcome::Exited(code) => *code,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code() == 0
    }
}
