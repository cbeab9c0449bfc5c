//! Pretty-printed JSON documents in a single data directory.
//!
//! All access goes through a `cap_std` directory handle opened once at
//! startup. Writes go to a uniquely named temporary file in the same
//! directory which is then renamed over the target, so readers only ever
//! see a complete document. Blocking file I/O runs on the blocking pool.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use cap_std::{ambient_authority, fs::Dir};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

/// Errors raised by [`JsonFileStore`].
#[derive(Debug, Error)]
pub enum JsonStoreError {
    /// Filesystem access failed.
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A stored document is not valid JSON for the expected type.
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A document could not be serialised.
    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The blocking task running the I/O did not complete.
    #[error("blocking file task failed: {message}")]
    Task { message: String },
}

impl JsonStoreError {
    /// Whether the error means the document exists but is unreadable.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

/// Handle on the data directory holding the JSON documents.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: Arc<Dir>,
    root: PathBuf,
}

impl JsonFileStore {
    /// Open `root`, creating it and any missing parents.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, JsonStoreError> {
        let root = root.into();
        Dir::create_ambient_dir_all(&root, ambient_authority()).map_err(|source| {
            JsonStoreError::Io {
                path: root.clone(),
                source,
            }
        })?;
        let dir = Dir::open_ambient_dir(&root, ambient_authority()).map_err(|source| {
            JsonStoreError::Io {
                path: root.clone(),
                source,
            }
        })?;
        Ok(Self {
            dir: Arc::new(dir),
            root,
        })
    }

    /// Directory the documents live in.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn display_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Read and decode `name`, returning `None` when the file does not exist.
    pub async fn read<T>(&self, name: &'static str) -> Result<Option<T>, JsonStoreError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let dir = Arc::clone(&self.dir);
        let path = self.display_path(name);
        run_blocking(move || match dir.read_to_string(name) {
            Ok(contents) => serde_json::from_str(&contents)
                .map(Some)
                .map_err(|source| JsonStoreError::Decode { path, source }),
            Err(source) if source.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(JsonStoreError::Io { path, source }),
        })
        .await
    }

    /// Encode `value` and atomically replace `name` with it.
    pub async fn write<T>(&self, name: &'static str, value: &T) -> Result<(), JsonStoreError>
    where
        T: Serialize + ?Sized,
    {
        let path = self.display_path(name);
        let mut contents =
            serde_json::to_vec_pretty(value).map_err(|source| JsonStoreError::Encode {
                path: path.clone(),
                source,
            })?;
        contents.push(b'\n');

        let dir = Arc::clone(&self.dir);
        run_blocking(move || replace_file(&dir, name, &contents, &path)).await
    }
}

async fn run_blocking<T, F>(task: F) -> Result<T, JsonStoreError>
where
    F: FnOnce() -> Result<T, JsonStoreError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|err| JsonStoreError::Task {
            message: err.to_string(),
        })?
}

fn replace_file(dir: &Dir, name: &str, contents: &[u8], path: &Path) -> Result<(), JsonStoreError> {
    let temp_name = format!(".{name}.{}.tmp", Uuid::new_v4());
    let io_error = |source: io::Error| JsonStoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    let written = dir.create(&temp_name).and_then(|mut file| {
        file.write_all(contents)?;
        file.sync_all()
    });
    if let Err(source) = written.and_then(|()| dir.rename(&temp_name, dir, name)) {
        if let Err(cleanup) = dir.remove_file(&temp_name)
            && cleanup.kind() != io::ErrorKind::NotFound
        {
            warn!(file = %temp_name, error = %cleanup, "failed to remove temporary file");
        }
        return Err(io_error(source));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::{fixture, rstest};
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        names: Vec<String>,
    }

    #[fixture]
    fn temp_dir() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn entries(dir: &Dir) -> Vec<String> {
        dir.entries()
            .expect("list dir")
            .map(|entry| {
                entry
                    .expect("dir entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect()
    }

    #[rstest]
    #[tokio::test]
    async fn missing_document_reads_as_none(temp_dir: TempDir) {
        let store = JsonFileStore::open(temp_dir.path()).expect("open store");
        let loaded: Option<Sample> = store.read("sample.json").await.expect("read");
        assert!(loaded.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn written_document_is_pretty_and_readable(temp_dir: TempDir) {
        let store = JsonFileStore::open(temp_dir.path()).expect("open store");
        let sample = Sample {
            names: vec!["김민수".to_owned()],
        };
        store.write("sample.json", &sample).await.expect("write");

        let raw = store.dir.read_to_string("sample.json").expect("raw read");
        assert!(raw.contains("\n  \"names\""));
        assert!(raw.contains("김민수"));

        let loaded: Option<Sample> = store.read("sample.json").await.expect("read");
        assert_eq!(loaded, Some(sample));
    }

    #[rstest]
    #[tokio::test]
    async fn overwrite_leaves_no_temporary_files(temp_dir: TempDir) {
        let store = JsonFileStore::open(temp_dir.path()).expect("open store");
        for count in 0..3 {
            let sample = Sample {
                names: vec![format!("name-{count}")],
            };
            store.write("sample.json", &sample).await.expect("write");
        }
        assert_eq!(entries(&store.dir), ["sample.json"]);
    }

    #[rstest]
    #[tokio::test]
    async fn invalid_json_is_reported_as_corrupt(temp_dir: TempDir) {
        let store = JsonFileStore::open(temp_dir.path()).expect("open store");
        store
            .dir
            .write("sample.json", b"{ not json")
            .expect("seed corrupt file");

        let err = store
            .read::<Sample>("sample.json")
            .await
            .expect_err("corrupt document");
        assert!(err.is_corrupt());
    }

    #[rstest]
    fn open_creates_nested_directories(temp_dir: TempDir) {
        let nested = temp_dir.path().join("a").join("b");
        let store = JsonFileStore::open(&nested).expect("open nested");
        assert_eq!(store.root(), nested.as_path());
        assert!(nested.is_dir());
    }
}
