//! Journal runtime.
//!
//! Bridges the sync game loop with an async file writer: the loop pushes
//! records into an unbounded channel and never waits on disk.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::record::{JournalEvent, JournalRecord};
use crate::types::GameEvent;

/// Running journal instance.
pub struct Journal {
    rt: Runtime,
    tx: mpsc::UnboundedSender<JournalRecord>,
    writer: JoinHandle<Result<u64>>,
    seq: u64,
}

impl Journal {
    /// Start appending to `path` on a background runtime.
    pub fn start(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let rt = Runtime::new().context("create journal runtime")?;
        let (tx, rx) = mpsc::unbounded_channel::<JournalRecord>();

        let writer = rt.spawn(async move {
            let result = write_records(&path, rx).await;
            if let Err(e) = &result {
                tracing::warn!(path = %path.display(), "journal writer stopped: {e:#}");
            }
            result
        });

        Ok(Self {
            rt,
            tx,
            writer,
            seq: 0,
        })
    }

    /// Queue one event. Dropped silently if the writer has stopped.
    pub fn record(&mut self, event: &GameEvent) {
        self.seq += 1;
        let rec = JournalRecord {
            seq: self.seq,
            ts: now_ms(),
            event: JournalEvent::from(event),
        };
        let _ = self.tx.send(rec);
    }

    /// Records queued so far.
    pub fn queued(&self) -> u64 {
        self.seq
    }

    /// Close the channel and wait for every queued record to hit the file.
    ///
    /// Returns the number of records written.
    pub fn finish(self) -> Result<u64> {
        let Journal { rt, tx, writer, .. } = self;
        drop(tx);
        rt.block_on(writer).context("journal writer panicked")?
    }
}

/// Append records from `rx` to `path` as JSON lines until the channel closes.
pub async fn write_records(
    path: &Path,
    mut rx: mpsc::UnboundedReceiver<JournalRecord>,
) -> Result<u64> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .with_context(|| format!("open journal {}", path.display()))?;

    let mut buf: Vec<u8> = Vec::with_capacity(256);
    let mut written = 0u64;

    while let Some(rec) = rx.recv().await {
        buf.clear();
        serde_json::to_writer(&mut buf, &rec).context("encode journal record")?;
        buf.push(b'\n');
        file.write_all(&buf).await.context("write journal record")?;
        written += 1;
    }

    file.flush().await.context("flush journal")?;
    Ok(written)
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
