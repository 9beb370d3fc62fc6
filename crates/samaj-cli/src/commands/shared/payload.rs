use std::io::Read;

use anyhow::Context;
use serde::de::DeserializeOwned;

/// Read a JSON form from `path`, or from stdin when `path` is `-`.
pub fn read_json<T: DeserializeOwned>(path: &str) -> anyhow::Result<T> {
    let raw = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read JSON from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?
    };
    serde_json::from_str(&raw).with_context(|| format!("{path} is not a valid JSON form"))
}

#[cfg(test)]
mod tests {
    use samaj_core::entities::Village;

    use super::read_json;

    #[test]
    fn reads_camel_case_form() {
        let dir = tempfile::TempDir::new().expect("tmp dir");
        let path = dir.path().join("village.json");
        std::fs::write(&path, r#"{"name":"Rampura","chokhlaId":"chk-1","hasSchool":true}"#)
            .expect("write");

        let village: Village = read_json(path.to_str().expect("utf-8 path")).expect("should parse");
        assert_eq!(village.name, "Rampura");
        assert!(village.has_school);
    }

    #[test]
    fn reports_the_file_on_bad_json() {
        let dir = tempfile::TempDir::new().expect("tmp dir");
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{").expect("write");

        let err = read_json::<Village>(path.to_str().expect("utf-8 path")).expect_err("should fail");
        assert!(format!("{err:#}").contains("broken.json"));
    }
}
