use std::fs;
use std::path::{Path, PathBuf};

use super::error::MetainfoError;
use crate::bencode::{self, Value};

/// Decoded contents of a `.torrent` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaInfo {
    /// Suggested name for the file or directory.
    pub name: String,
    /// Program that created the torrent; empty when absent.
    pub created_by: String,
    /// Unix timestamp; 0 when absent.
    pub creation_date: i64,
    pub comment: String,
    pub encoding: String,
    /// Tracker tiers ([BEP-12](http://bittorrent.org/beps/bep_0012.html)).
    /// Falls back to `[[announce]]` when the file has no `announce-list`.
    /// Never empty for a decoded file.
    pub announce_list: Vec<Vec<String>>,
    /// HTTP seeds ([BEP-19](http://bittorrent.org/beps/bep_0019.html)).
    pub web_seed_urls: Vec<String>,
    /// Files in the torrent. A single-file torrent has exactly one entry,
    /// whose path is the torrent name.
    pub files: Vec<FileEntry>,
}

/// A file within a torrent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub length: u64,
    /// Path segments relative to the torrent's root directory.
    pub path: Vec<String>,
}

impl FileEntry {
    pub fn joined_path(&self) -> PathBuf {
        self.path.iter().collect()
    }
}

/// Reads and decodes the torrent file at `path`.
pub fn decode(path: &Path) -> Result<MetaInfo, MetainfoError> {
    let data = fs::read(path)?;
    MetaInfo::from_bytes(&data)
}

impl MetaInfo {
    /// Parses a torrent from raw bytes.
    ///
    /// Fails when the data is not bencode, when `info`, `name` or the file
    /// layout is missing, or when the torrent names no tracker at all.
    pub fn from_bytes(data: &[u8]) -> Result<Self, MetainfoError> {
        let root = bencode::decode(data)?;
        if root.as_dict().is_none() {
            return Err(MetainfoError::InvalidField("root"));
        }

        let info = root.get(b"info").ok_or(MetainfoError::MissingField("info"))?;
        if info.as_dict().is_none() {
            return Err(MetainfoError::InvalidField("info"));
        }

        let name = utf8_field(info, "name")?.ok_or(MetainfoError::MissingField("name"))?;
        let files = parse_files(info, &name)?;
        let announce_list = parse_announce_list(&root)?;

        let creation_date = match root.get(b"creation date") {
            None => 0,
            Some(v) => v
                .as_integer()
                .ok_or(MetainfoError::InvalidField("creation date"))?,
        };

        Ok(Self {
            name,
            created_by: text_field(&root, "created by")?,
            creation_date,
            comment: text_field(&root, "comment")?,
            encoding: text_field(&root, "encoding")?,
            announce_list,
            web_seed_urls: parse_url_list(&root)?,
            files,
        })
    }

    pub fn is_single_file(&self) -> bool {
        self.files.len() == 1
    }

    /// Sum of all file lengths. Decoded torrents never exceed `u64::MAX`;
    /// hand-built values saturate.
    pub fn total_length(&self) -> u64 {
        self.files
            .iter()
            .fold(0u64, |total, f| total.saturating_add(f.length))
    }

    /// The primary tracker, `announce_list[0][0]`.
    pub fn tracker_url(&self) -> Option<&str> {
        self.announce_list
            .first()
            .and_then(|tier| tier.first())
            .map(String::as_str)
    }
}

/// Reads a UTF-8 string field, preferring the `<key>.utf-8` variant some
/// clients write alongside a legacy-encoded `<key>`.
fn utf8_field(dict: &Value, key: &'static str) -> Result<Option<String>, MetainfoError> {
    let utf8_key = format!("{}.utf-8", key);
    let value = dict
        .get(utf8_key.as_bytes())
        .or_else(|| dict.get(key.as_bytes()));

    match value {
        None => Ok(None),
        Some(v) => v
            .as_str()
            .map(|s| Some(s.to_string()))
            .ok_or(MetainfoError::InvalidField(key)),
    }
}

/// Reads an optional free-text field; undecodable bytes are replaced.
fn text_field(dict: &Value, key: &'static str) -> Result<String, MetainfoError> {
    match dict.get(key.as_bytes()) {
        None => Ok(String::new()),
        Some(v) => v
            .as_bytes()
            .map(|b| String::from_utf8_lossy(b).into_owned())
            .ok_or(MetainfoError::InvalidField(key)),
    }
}

fn parse_files(info: &Value, name: &str) -> Result<Vec<FileEntry>, MetainfoError> {
    if let Some(length) = info.get(b"length") {
        let length = file_length(length)?;
        return Ok(vec![FileEntry {
            length,
            path: vec![name.to_string()],
        }]);
    }

    let list = info
        .get(b"files")
        .ok_or(MetainfoError::MissingField("length"))?
        .as_list()
        .ok_or(MetainfoError::InvalidField("files"))?;

    if list.is_empty() {
        return Err(MetainfoError::InvalidField("files"));
    }

    let files = list
        .iter()
        .map(|file| {
            if file.as_dict().is_none() {
                return Err(MetainfoError::InvalidField("files"));
            }
            let length = file
                .get(b"length")
                .ok_or(MetainfoError::MissingField("length"))
                .and_then(file_length)?;
            let segments = file
                .get(b"path.utf-8")
                .or_else(|| file.get(b"path"))
                .ok_or(MetainfoError::MissingField("path"))?
                .as_list()
                .ok_or(MetainfoError::InvalidField("path"))?;
            let path = segments
                .iter()
                .map(|s| s.as_str().map(String::from))
                .collect::<Option<Vec<_>>>()
                .filter(|p| !p.is_empty())
                .ok_or(MetainfoError::InvalidField("path"))?;
            Ok(FileEntry { length, path })
        })
        .collect::<Result<Vec<_>, _>>()?;

    // The total must fit for size rendering.
    files
        .iter()
        .try_fold(0u64, |total, f| total.checked_add(f.length))
        .ok_or(MetainfoError::InvalidField("length"))?;

    Ok(files)
}

fn file_length(value: &Value) -> Result<u64, MetainfoError> {
    value
        .as_integer()
        .and_then(|l| u64::try_from(l).ok())
        .ok_or(MetainfoError::InvalidField("length"))
}

fn parse_announce_list(root: &Value) -> Result<Vec<Vec<String>>, MetainfoError> {
    let mut tiers = Vec::new();

    if let Some(list) = root.get(b"announce-list") {
        let list = list
            .as_list()
            .ok_or(MetainfoError::InvalidField("announce-list"))?;
        for tier in list {
            let urls: Vec<String> = tier
                .as_list()
                .ok_or(MetainfoError::InvalidField("announce-list"))?
                .iter()
                .filter_map(|u| u.as_str())
                .filter(|u| !u.is_empty())
                .map(String::from)
                .collect();
            if !urls.is_empty() {
                tiers.push(urls);
            }
        }
    }

    if tiers.is_empty() {
        let announce = utf8_field(root, "announce")?.filter(|a| !a.is_empty());
        tiers.push(vec![announce.ok_or(MetainfoError::MissingField("announce"))?]);
    }

    Ok(tiers)
}

fn parse_url_list(root: &Value) -> Result<Vec<String>, MetainfoError> {
    match root.get(b"url-list") {
        None => Ok(Vec::new()),
        Some(Value::Bytes(b)) if b.is_empty() => Ok(Vec::new()),
        Some(Value::Bytes(b)) => Ok(vec![String::from_utf8_lossy(b).into_owned()]),
        Some(Value::List(urls)) => Ok(urls
            .iter()
            .filter_map(|u| u.as_str())
            .map(String::from)
            .collect()),
        Some(_) => Err(MetainfoError::InvalidField("url-list")),
    }
}
