//! Reading command inputs from files or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;

/// Read `path`, or all of stdin when `None`.
pub fn read_text(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Parse the JSON file at `path` as `T`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid JSON in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use sp_core::FieldDescriptor;

    use super::{read_json, read_text};

    #[test]
    fn reads_field_descriptors_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "email", "type": "email"}}, {{"name": "plan", "type": "select-one", "options": ["free", "pro"]}}]"#
        )
        .unwrap();

        let fields: Vec<FieldDescriptor> = read_json(file.path()).unwrap();
        assert_eq!(
            fields,
            vec![
                FieldDescriptor::new("email", "email"),
                FieldDescriptor::select("plan", ["free", "pro"]),
            ]
        );
    }

    #[test]
    fn invalid_json_names_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = read_json::<Vec<FieldDescriptor>>(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("invalid JSON in"));
    }

    #[test]
    fn reads_text_file_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.txt");
        std::fs::write(&path, "line one\nline two\n").unwrap();

        assert_eq!(read_text(Some(&path)).unwrap(), "line one\nline two\n");
        assert!(read_text(Some(&dir.path().join("missing.txt"))).is_err());
    }
}
