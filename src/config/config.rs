use clap::{Args, Parser, Subcommand};

#[derive(Parser, Clone, Debug)]
#[command(
    name = "web_to_epub",
    about = "將網頁檔案轉換為 epub",
    long_about = "透過 Docker 容器中的 pandoc 將 HTML/Markdown 網頁轉換為 epub，並將結果以 tar.gz 封存於輸出目錄。\n需要可連線的 Docker daemon（DOCKER_HOST 或本機 socket）。",
    arg_required_else_help = true
)]
pub struct Cli {
    #[arg(long, global = true, default_value = "info", value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: String,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    /// 將網頁檔案轉換為 epub
    Convert(ConvertArgs),
}

#[derive(Args, Clone, Debug, PartialEq)]
pub struct ConvertArgs {
    /// 輸出格式
    #[arg(short, long, default_value = "epub")]
    pub format: String,
    /// 儲存 tar.gz 的輸出目錄，空白代表目前目錄
    #[arg(short, long, default_value = "")]
    pub output: String,
    /// 要轉換為 epub 的外部網頁檔案（以逗號分隔）
    #[arg(long, value_delimiter = ',')]
    pub web: Vec<String>,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
}
