use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct ConversionInput {
    pub format: String,
    pub web_files: Vec<String>,
    pub output_dir: String,
    pub no_progress: bool,
}

#[derive(Debug)]
pub struct ConversionOutput {
    pub output_path: PathBuf,
    pub container_id: String,
    pub size: usize,
}
