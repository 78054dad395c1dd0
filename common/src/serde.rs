use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::file_format::SerdeFormat;

pub type Result<T> = anyhow::Result<T>;

pub fn serialize<T: Serialize>(value: &T, format: SerdeFormat) -> Result<Vec<u8>> {
    let text = match format {
        SerdeFormat::Yaml => serde_yml::to_string(value)?,
        SerdeFormat::Json => serde_json::to_string_pretty(value)?,
    };

    Ok(text.into_bytes())
}

pub fn deserialize<T: DeserializeOwned>(serialized: &[u8], format: SerdeFormat) -> Result<T> {
    let text = std::str::from_utf8(serialized)?;
    match format {
        SerdeFormat::Yaml => Ok(serde_yml::from_str(text)?),
        SerdeFormat::Json => Ok(serde_json::from_str(text)?),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        values: Vec<i32>,
    }

    #[test]
    fn roundtrip_all_formats() {
        let sample = Sample {
            name: "zones".to_string(),
            values: vec![-1, 0, 7],
        };

        for format in SerdeFormat::all_formats_for_testing() {
            let bytes = serialize(&sample, format).unwrap();
            let back: Sample = deserialize(&bytes, format).unwrap();
            assert_eq!(back, sample, "format {format:?}");
        }
    }

    #[test]
    fn deserialize_rejects_invalid_utf8() {
        let result: Result<Sample> = deserialize(&[0xff, 0xfe], SerdeFormat::Json);
        assert!(result.is_err());
    }

    #[test]
    fn deserialize_reports_malformed_input() {
        let result: Result<Sample> = deserialize(b"{ not json", SerdeFormat::Json);
        assert!(result.is_err());
    }
}
