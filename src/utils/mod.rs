pub mod config_store;

pub use config_store::{default_config_path, load_config, load_config_or_default, save_config};
