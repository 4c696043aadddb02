use std::sync::Arc;
use log::info;
use crate::facade::converter::{new_converter, with_no_progress, with_output_dir, with_web_files};
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{ConversionInput, ConversionOutput};
use crate::models::error::Result;
use crate::service::traits::i_service::{ClockTrait, ContainerServiceTrait};

pub struct ConversionFacade {
    container_service: Arc<dyn ContainerServiceTrait>,
    clock: Arc<dyn ClockTrait>,
}

impl ConversionFacade {
    pub fn new(container_service: Arc<dyn ContainerServiceTrait>, clock: Arc<dyn ClockTrait>) -> Self {
        ConversionFacade {
            container_service,
            clock,
        }
    }
}

impl ConversionFacadeTrait for ConversionFacade {
    fn execute_conversion(&self, input: ConversionInput) -> Result<ConversionOutput> {
        info!(
            "開始轉換，格式：{}，網頁檔案：{:?}，輸出目錄：{}",
            input.format, input.web_files, input.output_dir
        );

        let mut converter = new_converter(
            &input.format,
            Arc::clone(&self.container_service),
            Arc::clone(&self.clock),
            vec![
                with_output_dir(input.output_dir),
                with_web_files(input.web_files),
                with_no_progress(input.no_progress),
            ],
        )?;

        converter.convert()
    }
}
