pub mod loader_config;

pub use loader_config::{LoaderConfig, ENV_LANDOFILE, ENV_POST_LANDOFILES, ENV_PRE_LANDOFILES};
