//! Test utilities for building torrent fixtures on disk.
//!
//! This module is only compiled for tests and with the `test-utils` feature.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::bencode::{Value, encode};
use crate::metainfo::MetaInfo;

pub const DEFAULT_TRACKER: &str = "http://tracker.example.com/announce";

const PIECE_LENGTH: i64 = 262_144;

/// Builder for bencoded `.torrent` contents.
#[derive(Debug, Clone)]
pub struct TorrentBuilder {
    name: String,
    single_length: Option<u64>,
    files: Vec<(Vec<String>, u64)>,
    announce: Option<String>,
    announce_list: Vec<Vec<String>>,
    creation_date: Option<i64>,
    comment: Option<String>,
    created_by: Option<String>,
    encoding: Option<String>,
    web_seeds: Vec<String>,
}

impl TorrentBuilder {
    /// A single-file torrent announcing to [`DEFAULT_TRACKER`].
    pub fn single(name: &str, length: u64) -> Self {
        Self {
            single_length: Some(length),
            ..Self::empty(name)
        }
    }

    /// A multi-file torrent; add entries with [`TorrentBuilder::file`].
    pub fn multi(name: &str) -> Self {
        Self::empty(name)
    }

    fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            single_length: None,
            files: Vec::new(),
            announce: Some(DEFAULT_TRACKER.to_string()),
            announce_list: Vec::new(),
            creation_date: None,
            comment: None,
            created_by: None,
            encoding: None,
            web_seeds: Vec::new(),
        }
    }

    pub fn file(mut self, path: &[&str], length: u64) -> Self {
        self.files
            .push((path.iter().map(|s| s.to_string()).collect(), length));
        self
    }

    pub fn announce(mut self, url: &str) -> Self {
        self.announce = Some(url.to_string());
        self
    }

    pub fn tier(mut self, urls: &[&str]) -> Self {
        self.announce_list
            .push(urls.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Removes every tracker.
    pub fn trackerless(mut self) -> Self {
        self.announce = None;
        self.announce_list.clear();
        self
    }

    pub fn creation_date(mut self, timestamp: i64) -> Self {
        self.creation_date = Some(timestamp);
        self
    }

    pub fn comment(mut self, comment: &str) -> Self {
        self.comment = Some(comment.to_string());
        self
    }

    pub fn created_by(mut self, created_by: &str) -> Self {
        self.created_by = Some(created_by.to_string());
        self
    }

    pub fn encoding(mut self, encoding: &str) -> Self {
        self.encoding = Some(encoding.to_string());
        self
    }

    pub fn web_seed(mut self, url: &str) -> Self {
        self.web_seeds.push(url.to_string());
        self
    }

    pub fn to_value(&self) -> Value {
        let mut info = BTreeMap::new();
        info.insert(b"name".to_vec(), Value::string(&self.name));
        info.insert(b"piece length".to_vec(), Value::Integer(PIECE_LENGTH));
        info.insert(b"pieces".to_vec(), Value::Bytes(vec![0; 20]));
        if let Some(length) = self.single_length {
            info.insert(b"length".to_vec(), Value::Integer(length as i64));
        } else {
            let files = self
                .files
                .iter()
                .map(|(path, length)| {
                    let mut file = BTreeMap::new();
                    file.insert(b"length".to_vec(), Value::Integer(*length as i64));
                    file.insert(
                        b"path".to_vec(),
                        Value::List(path.iter().map(|s| Value::string(s)).collect()),
                    );
                    Value::Dict(file)
                })
                .collect();
            info.insert(b"files".to_vec(), Value::List(files));
        }

        let mut root = BTreeMap::new();
        root.insert(b"info".to_vec(), Value::Dict(info));
        if let Some(announce) = &self.announce {
            root.insert(b"announce".to_vec(), Value::string(announce));
        }
        if !self.announce_list.is_empty() {
            let tiers = self
                .announce_list
                .iter()
                .map(|tier| Value::List(tier.iter().map(|u| Value::string(u)).collect()))
                .collect();
            root.insert(b"announce-list".to_vec(), Value::List(tiers));
        }
        if let Some(date) = self.creation_date {
            root.insert(b"creation date".to_vec(), Value::Integer(date));
        }
        let optional = [
            ("comment", &self.comment),
            ("created by", &self.created_by),
            ("encoding", &self.encoding),
        ];
        for (key, value) in optional {
            if let Some(v) = value {
                root.insert(key.as_bytes().to_vec(), Value::string(v));
            }
        }
        if !self.web_seeds.is_empty() {
            root.insert(
                b"url-list".to_vec(),
                Value::List(self.web_seeds.iter().map(|u| Value::string(u)).collect()),
            );
        }
        Value::Dict(root)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        encode(&self.to_value())
    }

    /// Decodes the built torrent, panicking if it does not decode.
    pub fn build(&self) -> MetaInfo {
        MetaInfo::from_bytes(&self.to_bytes()).expect("fixture torrent should decode")
    }
}

/// A temporary directory holding torrent fixtures.
///
/// The directory is removed when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write an encoded torrent at `path`, creating parent directories.
    pub fn add_torrent(&self, path: &str, torrent: &TorrentBuilder) -> PathBuf {
        self.add_file(path, &torrent.to_bytes())
    }

    /// Write raw bytes at `path`, creating parent directories.
    pub fn add_file(&self, path: &str, content: &[u8]) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
