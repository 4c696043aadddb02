pub mod service {
    pub mod config_service;
    pub mod docker_service;
    pub mod traits {
        pub mod i_service;
    }
}

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod action {
    pub mod cli;
}

pub mod facade {
    pub mod conversion_facade;
    pub mod converter;
    pub mod pandoc;
    pub mod traits {
        pub mod i_conversion;
    }
}

pub mod models {
    pub mod container;
    pub mod conversion;
    pub mod error;
}

pub mod utils {
    pub mod utils;
}
