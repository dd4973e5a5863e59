pub mod grid;
pub mod point;
pub mod trace;
pub mod version;

use std::error::Error;
use std::fs;
use std::path::Path;

use efield_solve::{from_json_slice, to_canonical_json_bytes};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Reads a JSON request file.
pub fn read_request<T: DeserializeOwned>(path: &Path) -> Result<T, Box<dyn Error>> {
    let bytes = fs::read(path)?;
    from_json_slice(&bytes).map_err(|err| Box::new(err) as Box<dyn Error>)
}

/// Writes a response as canonical JSON, creating parent directories as
/// needed.
pub fn write_response<T: Serialize>(path: &Path, value: &T) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let bytes = to_canonical_json_bytes(value).map_err(|err| Box::new(err) as Box<dyn Error>)?;
    fs::write(path, bytes)?;
    Ok(())
}
