//! Fixtures shared by the CLI unit and behaviour tests.

use camino::{Utf8Path, Utf8PathBuf};
use std::io::Write;
use tempfile::TempDir;

/// A reference route with a single northbound step on Main Street.
pub(super) const MAIN_STREET_REFERENCE: &str = r#"{
  "routes": [{
    "legs": [{
      "steps": [
        {
          "instructions": "Head <b>north</b> on <b>Main Street</b>",
          "distance": { "text": "0.3 km", "value": 300 },
          "duration": { "text": "4 mins", "value": 240 }
        },
        {
          "instructions": "Destination will be ahead",
          "distance": { "text": "1 m", "value": 1 },
          "duration": { "text": "1 min", "value": 1 }
        }
      ]
    }]
  }]
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    let mut file = navigator_fs::create_utf8_file(path).expect("create fixture file");
    file.write_all(contents).expect("write fixture file");
}

/// A temporary directory holding CLI inputs.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn reference(&self) -> Utf8PathBuf {
        let path = self.path("reference.json");
        write_utf8(&path, MAIN_STREET_REFERENCE.as_bytes());
        path
    }
}
