//! Conversation transcripts on disk.
//!
//! One pretty-printed JSON file per conversation, `<name>.json`, in a
//! flat store directory. Names are validated before any path is built,
//! and listings read only file metadata so a corrupt transcript cannot
//! break the menu.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::chat::message::ChatMessage;

/// A conversation's message history plus bookkeeping timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Fresh empty transcript. A configured system prompt becomes the
    /// opening message.
    pub fn new(system_prompt: Option<&str>) -> Self {
        let now = Utc::now();
        let messages = system_prompt
            .map(|prompt| vec![ChatMessage::system(prompt)])
            .unwrap_or_default();
        Self {
            created_at: now,
            updated_at: now,
            messages,
        }
    }

    /// Append a message and refresh the update timestamp.
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.updated_at = Utc::now();
    }
}

/// Listing row for one saved conversation.
#[derive(Debug, Clone)]
pub struct TranscriptEntry {
    pub name: String,
    pub updated: DateTime<Local>,
}

/// Flat directory of `<name>.json` transcript files.
#[derive(Debug, Clone)]
pub struct TranscriptStore {
    root: PathBuf,
}

impl TranscriptStore {
    /// Open the store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).with_context(|| {
            format!("Failed to create transcript directory {}", root.display())
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// True when `name` can safely become a file stem: non-empty after
    /// trimming, no path separators, no leading dot.
    pub fn is_valid_name(name: &str) -> bool {
        let name = name.trim();
        !name.is_empty()
            && !name.starts_with('.')
            && !name.contains('/')
            && !name.contains('\\')
    }

    fn path_for(&self, name: &str) -> Result<PathBuf> {
        if !Self::is_valid_name(name) {
            bail!(
                "Invalid conversation name '{}': names must be non-empty and may not \
                 contain path separators or start with a dot",
                name
            );
        }
        Ok(self.root.join(format!("{}.json", name.trim())))
    }

    /// Write `transcript` as pretty-printed JSON under `name`.
    pub fn save(&self, name: &str, transcript: &Transcript) -> Result<()> {
        let path = self.path_for(name)?;
        let json = serde_json::to_string_pretty(transcript)
            .context("Failed to serialize transcript")?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write transcript {}", path.display()))?;
        Ok(())
    }

    /// Load the named transcript. Missing or malformed files are errors;
    /// the menu only offers names it just listed.
    pub fn load(&self, name: &str) -> Result<Transcript> {
        let path = self.path_for(name)?;
        let json = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read transcript {}", path.display()))?;
        let transcript = serde_json::from_str(&json)
            .with_context(|| format!("Transcript {} is not valid JSON", path.display()))?;
        Ok(transcript)
    }

    /// Remove the named transcript. `Ok(false)` when it never existed.
    pub fn delete(&self, name: &str) -> Result<bool> {
        let path = self.path_for(name)?;
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)
            .with_context(|| format!("Failed to delete transcript {}", path.display()))?;
        Ok(true)
    }

    /// Names of all saved transcripts, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        Ok(self.entries()?.into_iter().map(|entry| entry.name).collect())
    }

    /// Listing rows for all saved transcripts, sorted by name. Reads
    /// directory metadata only.
    pub fn entries(&self) -> Result<Vec<TranscriptEntry>> {
        let mut entries = Vec::new();
        let dir = fs::read_dir(&self.root).with_context(|| {
            format!("Failed to read transcript directory {}", self.root.display())
        })?;
        for entry in dir {
            let entry = entry.with_context(|| {
                format!("Failed to read transcript directory {}", self.root.display())
            })?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let modified = entry
                .metadata()
                .and_then(|meta| meta.modified())
                .with_context(|| format!("Failed to stat transcript {}", path.display()))?;
            entries.push(TranscriptEntry {
                name: name.to_string(),
                updated: modified.into(),
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}
