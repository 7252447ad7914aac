use std::path::PathBuf;

pub fn config_dir() -> Option<PathBuf> {
    dirs_next::config_dir().map(|config_dir| config_dir.join("dns-embed"))
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|config_dir| config_dir.join("config.toml"))
}
