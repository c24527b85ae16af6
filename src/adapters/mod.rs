pub mod config_to_probe;
pub mod health_check;
