//! Repository layer: in-memory collections mirrored to JSON files

pub mod books;
pub mod expenses;

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

pub use books::{LibraryStore, Shelf};
pub use expenses::{ExpenseStore, Ledger};

/// Errors raised while loading or saving a collection file
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A record with a numeric identity
pub trait Record {
    fn id(&self) -> i64;
}

/// JSON file backing one collection
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file, `None` when it does not exist yet
    pub async fn load<T: DeserializeOwned>(&self) -> Result<Option<T>, StorageError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| StorageError::Json {
                path: self.path.clone(),
                source,
            })
    }

    /// Replace the file contents: write a sibling temp file, then rename it over the target
    pub async fn save<T: Serialize + ?Sized>(&self, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_vec(value).map_err(|source| StorageError::Json {
            path: self.path.clone(),
            source,
        })?;

        let tmp = self.tmp_path();
        let io_err = |source: std::io::Error| StorageError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
        }
        tokio::fs::write(&tmp, &json).await.map_err(io_err)?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(io_err)?;

        tracing::trace!(path = %self.path.display(), bytes = json.len(), "Collection saved");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Ordered collection held in memory and mirrored to a [`JsonFile`]
#[derive(Debug)]
pub struct Collection<T> {
    items: Vec<T>,
    file: JsonFile,
    last_id: i64,
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Load the collection, seeding it when the file does not exist
    pub async fn load(file: JsonFile, seed: impl FnOnce() -> Vec<T>) -> Result<Self, StorageError> {
        let items = match file.load::<Vec<T>>().await? {
            Some(items) => {
                tracing::info!(path = %file.path().display(), count = items.len(), "Collection loaded");
                items
            }
            None => seed(),
        };

        Ok(Self {
            items,
            file,
            last_id: 0,
        })
    }

    pub fn list(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a record at the end
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn position(&self, pred: impl FnMut(&T) -> bool) -> Option<usize> {
        self.items.iter().position(pred)
    }

    pub fn remove_at(&mut self, index: usize) -> T {
        self.items.remove(index)
    }

    /// Keep only matching records, returning how many were dropped
    pub fn retain(&mut self, f: impl FnMut(&T) -> bool) -> usize {
        let before = self.items.len();
        self.items.retain(f);
        before - self.items.len()
    }

    /// Mirror the current contents to disk
    pub async fn save(&self) -> Result<(), StorageError> {
        self.file.save(&self.items).await
    }
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned + Record,
{
    pub fn get(&self, id: i64) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Apply `f` to the record with `id`, returning the updated record
    pub fn update<R>(&mut self, id: i64, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.items.iter_mut().find(|item| item.id() == id).map(f)
    }

    pub fn remove(&mut self, id: i64) -> Option<T> {
        let index = self.position(|item| item.id() == id)?;
        Some(self.remove_at(index))
    }

    /// Next creation-timestamp id: milliseconds since epoch, bumped past
    /// every id issued or loaded so far
    pub fn next_id(&mut self) -> i64 {
        let highest = self
            .items
            .iter()
            .map(Record::id)
            .max()
            .unwrap_or(0)
            .max(self.last_id);
        let id = Utc::now().timestamp_millis().max(highest.saturating_add(1));
        self.last_id = id;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: i64,
        text: String,
    }

    impl Record for Note {
        fn id(&self) -> i64 {
            self.id
        }
    }

    #[tokio::test]
    async fn test_missing_file_uses_seed() {
        let dir = tempfile::tempdir().unwrap();
        let file = JsonFile::new(dir.path().join("notes.json"));

        let notes: Collection<String> = Collection::load(file, || vec!["seed".to_string()])
            .await
            .unwrap();
        assert_eq!(notes.list(), ["seed".to_string()]);
    }

    #[tokio::test]
    async fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("notes.json");

        let mut notes: Collection<Note> =
            Collection::load(JsonFile::new(&path), Vec::new).await.unwrap();
        let id = notes.next_id();
        notes.insert(Note { id, text: "first".into() });
        notes.save().await.unwrap();

        assert!(!dir.path().join("nested").join("notes.json.tmp").exists());

        let reloaded: Collection<Note> = Collection::load(JsonFile::new(&path), Vec::new)
            .await
            .unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.get(id).unwrap().text, "first");
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        std::fs::write(&path, b"[{\"id\": 1,").unwrap();

        let result = Collection::<Note>::load(JsonFile::new(&path), Vec::new).await;
        assert!(matches!(result, Err(StorageError::Json { .. })));
    }

    #[tokio::test]
    async fn test_next_id_is_strictly_increasing() {
        let dir = tempfile::tempdir().unwrap();
        let mut notes: Collection<Note> =
            Collection::load(JsonFile::new(dir.path().join("n.json")), Vec::new)
                .await
                .unwrap();

        let far_future = Utc::now().timestamp_millis() + 1_000_000;
        notes.insert(Note { id: far_future, text: "loaded".into() });

        let a = notes.next_id();
        let b = notes.next_id();
        assert_eq!(a, far_future + 1);
        assert_eq!(b, far_future + 2);

        // Removing the highest record must not let its id come back
        notes.remove(far_future);
        assert!(notes.next_id() > b);
    }

    #[tokio::test]
    async fn test_next_id_at_upper_bound() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("n.json");
        std::fs::write(&path, format!(r#"[{{"id": {}, "text": "max"}}]"#, i64::MAX)).unwrap();

        let mut notes: Collection<Note> = Collection::load(JsonFile::new(&path), Vec::new)
            .await
            .unwrap();
        assert_eq!(notes.next_id(), i64::MAX);
    }

    #[tokio::test]
    async fn test_update_and_remove() {
        let dir = tempfile::tempdir().unwrap();
        let mut notes = Collection::load(JsonFile::new(dir.path().join("n.json")), || {
            vec![
                Note { id: 1, text: "a".into() },
                Note { id: 2, text: "b".into() },
            ]
        })
        .await
        .unwrap();

        let updated = notes.update(2, |n| {
            n.text = "B".into();
            n.clone()
        });
        assert_eq!(updated.unwrap().text, "B");
        assert!(notes.update(3, |_| ()).is_none());

        assert_eq!(notes.remove(1).unwrap().text, "a");
        assert!(notes.remove(1).is_none());
        assert_eq!(notes.len(), 1);
    }
}
