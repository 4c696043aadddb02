use web_to_epub::action::cli::process_args;
use web_to_epub::models::error::ConvertError;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    match process_args(args) {
        Ok(output) => {
            log::info!("程式執行完成，容器：{}，大小：{} 位元組", output.container_id, output.size);
            println!("轉換完成！輸出檔案位於：{}", output.output_path.display());
        }
        Err(err) => {
            log::error!("{:#}", err);
            if err
                .downcast_ref::<ConvertError>()
                .is_some_and(ConvertError::is_config_error)
            {
                eprintln!("使用 `web_to_epub convert --help` 查看參數用法");
            }
            std::process::exit(1);
        }
    }
}
