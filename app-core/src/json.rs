use serde::de::DeserializeOwned;
use serde_json::from_reader;
use std::{io::BufReader, path::Path};

use super::string_error::ErrorStringExt;

/// Deserializes the JSON file at `path` into `T`.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let file = std::fs::File::open(path).err_to_string("could not open json file")?;
    let value =
        from_reader(BufReader::new(file)).err_to_string("could not parse json file")?;
    log::debug!("loaded json from {:?}", path);
    Ok(value)
}
