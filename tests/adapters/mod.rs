mod config_to_probe;
