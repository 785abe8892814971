//! Message Store - append-only conversation history
//!
//! Messages are appended as JSON lines to a single history file. Writes
//! go through a mutex so concurrent request handlers never interleave
//! lines; reads tolerate unparseable lines (a torn write loses one line,
//! not the file).
//!
//! Store failures are the caller's to swallow: answering a question must
//! never fail because history could not be written.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use parking_lot::Mutex;

use crate::types::{GuideResult, Message};

/// Append-only JSONL store for conversation messages.
pub struct MessageStore {
    file_path: String,
    write_lock: Mutex<()>,
}

impl MessageStore {
    /// Create a store using `GUIDE_HISTORY_PATH` (or `messages.jsonl` in
    /// the current directory when unset). Relative paths are resolved
    /// against the current directory.
    pub fn new() -> Self {
        let current_dir = env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
        let default_path = current_dir.join("messages.jsonl");

        let file_path = match env::var("GUIDE_HISTORY_PATH") {
            Ok(path) => {
                if Path::new(&path).is_absolute() {
                    path
                } else {
                    current_dir.join(path).to_string_lossy().to_string()
                }
            }
            Err(_) => default_path.to_string_lossy().to_string(),
        };

        Self::with_file_path(file_path)
    }

    /// Create a store with an explicit history file path.
    pub fn with_file_path(file_path: String) -> Self {
        Self {
            file_path,
            write_lock: Mutex::new(()),
        }
    }

    /// Append a message to the history file.
    pub fn append(&self, message: &Message) -> GuideResult<()> {
        let line = serde_json::to_string(message)?;

        let _guard = self.write_lock.lock();

        if let Some(parent) = Path::new(&self.file_path).parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file_path)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }

    /// Load all parseable messages in stored (chronological) order.
    fn load_all(&self) -> GuideResult<Vec<Message>> {
        if !Path::new(&self.file_path).exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.file_path)?;
        let messages = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| serde_json::from_str::<Message>(line).ok())
            .collect();

        Ok(messages)
    }

    /// All stored messages, most recent first, optionally filtered by
    /// conversation. Callers paginate on top of this so page cuts never
    /// distort totals.
    pub fn history(&self, conversation_id: Option<&str>) -> GuideResult<Vec<Message>> {
        let mut messages = self.load_all()?;

        if let Some(id) = conversation_id {
            messages.retain(|m| m.conversation_id.as_deref() == Some(id));
        }

        messages.reverse();
        Ok(messages)
    }

    /// Most recent messages first, capped at `limit`.
    pub fn recent(&self, limit: usize, conversation_id: Option<&str>) -> GuideResult<Vec<Message>> {
        let mut messages = self.history(conversation_id)?;
        messages.truncate(limit);
        Ok(messages)
    }

    /// Total number of stored messages.
    pub fn count(&self) -> GuideResult<usize> {
        Ok(self.load_all()?.len())
    }

    /// Whether the history file can currently be opened for appending.
    ///
    /// A missing file counts as available (the first append creates it);
    /// the probe itself must not create anything.
    pub fn is_available(&self) -> bool {
        match OpenOptions::new().append(true).open(&self.file_path) {
            Ok(_) => true,
            Err(e) => e.kind() == io::ErrorKind::NotFound,
        }
    }

    /// Path of the history file.
    pub fn file_path(&self) -> &str {
        &self.file_path
    }
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::new()
    }
}
