// src/store.rs
//
// Persistence for the buffer: an opaque key → blob store plus the
// load/save policy around it. Loading never fails: a missing, unreadable
// or corrupt blob is an empty buffer.

use std::collections::HashMap;
use std::{fs, io, path::{Path, PathBuf}};

use crate::buffer::Buffer;
use crate::config::consts::STORE_EXT;

pub trait BlobStore {
    fn get(&self, key: &str) -> io::Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
    /// Removing a missing key is not an error.
    fn delete(&mut self, key: &str) -> io::Result<()>;
}

/// One file per key: `<dir>/<key>.json`.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path { &self.dir }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(join!(key, ".", STORE_EXT))
    }
}

impl BlobStore for FileStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        if !self.dir.as_os_str().is_empty() {
            fs::create_dir_all(&self.dir)?;
        }
        fs::write(self.path_for(key), value)
    }

    fn delete(&mut self, key: &str) -> io::Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

/// In-process store (tests, embedding).
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self { Self::default() }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.blobs.insert(s!(key), s!(value));
        Ok(())
    }

    fn delete(&mut self, key: &str) -> io::Result<()> {
        self.blobs.remove(key);
        Ok(())
    }
}

/// Parse a persisted blob; any failure is an empty buffer.
pub fn parse_buffer(text: &str) -> Buffer {
    if text.trim().is_empty() {
        return Buffer::new();
    }
    match serde_json::from_str::<Buffer>(text) {
        Ok(mut buf) => {
            if buf.repair() {
                buf
            } else {
                loge!("Store: Buffer row order out of range, starting empty");
                Buffer::new()
            }
        }
        Err(e) => {
            loge!("Store: Corrupt buffer blob, starting empty ({})", e);
            Buffer::new()
        }
    }
}

pub fn load_buffer(store: &dyn BlobStore, key: &str) -> Buffer {
    match store.get(key) {
        Ok(Some(text)) => {
            let buf = parse_buffer(&text);
            logd!("Store: Loaded {:?} (rows={}, cols={})", key, buf.row_count(), buf.column_count());
            buf
        }
        Ok(None) => {
            logd!("Store: No buffer under {:?}", key);
            Buffer::new()
        }
        Err(e) => {
            loge!("Store: Read failed for {:?}, starting empty ({})", key, e);
            Buffer::new()
        }
    }
}

pub fn save_buffer(store: &mut dyn BlobStore, key: &str, buf: &Buffer) -> io::Result<()> {
    let text = serde_json::to_string(buf)?;
    store.set(key, &text)?;
    logd!("Store: Saved {:?} (rows={}, cols={})", key, buf.row_count(), buf.column_count());
    Ok(())
}

pub fn delete_buffer(store: &mut dyn BlobStore, key: &str) -> io::Result<()> {
    store.delete(key)?;
    logd!("Store: Deleted {:?}", key);
    Ok(())
}
