use std::{io::Error, path::Path};

use tokio::fs;

pub async fn read_to_string(path: &Path) -> Result<String, Error> {
    log::debug!("read_to_string {:?}", path);
    fs::read_to_string(path).await
}

pub async fn write(path: &Path, contents: &str) -> Result<(), Error> {
    log::debug!("write {:?} {} bytes", path, contents.len());
    fs::write(path, contents).await
}

pub async fn create_dir_all(path: &Path) -> Result<(), Error> {
    log::debug!("create_dir_all {:?}", path);
    fs::create_dir_all(path).await
}
