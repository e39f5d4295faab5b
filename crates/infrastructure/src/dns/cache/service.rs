use super::clock::Clock;
use super::tree::RecordTree;
use async_trait::async_trait;
use std::sync::Arc;
use tern_dns_application::ports::RecordCache;
use tern_dns_domain::{Label, QueryType, ResourceRecord};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

const COMMAND_QUEUE: usize = 1024;

enum CacheCommand {
    Get {
        name: Label,
        qtype: QueryType,
        now: u64,
        reply: oneshot::Sender<Vec<ResourceRecord>>,
    },
    Put {
        records: Vec<ResourceRecord>,
        now: u64,
    },
}

/// Owns the [`RecordTree`]; every read and write goes through its queue, in
/// arrival order.
///
/// Commands carry the time at which the caller issued them, so a busy queue
/// never stretches a record's lifetime.
pub struct CacheService {
    tree: RecordTree,
    commands: mpsc::Receiver<CacheCommand>,
}

impl CacheService {
    pub fn spawn(max_records: usize, clock: impl Clock) -> (CacheHandle, JoinHandle<()>) {
        let (tx, rx) = mpsc::channel(COMMAND_QUEUE);
        let service = Self {
            tree: RecordTree::new(max_records),
            commands: rx,
        };

        info!(max_records, "Record cache started");
        let task = tokio::spawn(service.run());
        let handle = CacheHandle {
            commands: tx,
            clock: Arc::new(clock),
        };
        (handle, task)
    }

    async fn run(mut self) {
        while let Some(command) = self.commands.recv().await {
            match command {
                CacheCommand::Get {
                    name,
                    qtype,
                    now,
                    reply,
                } => {
                    let records = match qtype {
                        QueryType::Record(record_type) => self.tree.get(&name, record_type, now),
                        _ => Vec::new(),
                    };
                    if records.is_empty() {
                        debug!(name = %name, qtype = %qtype, "Cache miss");
                    } else {
                        debug!(name = %name, qtype = %qtype, count = records.len(), "Cache hit");
                    }
                    let _ = reply.send(records);
                }
                CacheCommand::Put { records, now } => {
                    let stored = self.tree.put(records, now);
                    debug!(stored, cached = self.tree.len(), "Cache updated");
                }
            }
        }
        debug!("Record cache stopped");
    }
}

/// Cloneable front door to a running [`CacheService`].
#[derive(Clone)]
pub struct CacheHandle {
    commands: mpsc::Sender<CacheCommand>,
    clock: Arc<dyn Clock>,
}

#[async_trait]
impl RecordCache for CacheHandle {
    async fn get(&self, name: &Label, qtype: QueryType) -> Vec<ResourceRecord> {
        if qtype.is_meta() {
            return Vec::new();
        }

        let (reply, response) = oneshot::channel();
        let command = CacheCommand::Get {
            name: name.clone(),
            qtype,
            now: self.clock.now_secs(),
            reply,
        };
        if self.commands.send(command).await.is_err() {
            return Vec::new();
        }
        response.await.unwrap_or_default()
    }

    async fn put(&self, records: Vec<ResourceRecord>) {
        if records.is_empty() {
            return;
        }
        let now = self.clock.now_secs();
        if self.commands.send(CacheCommand::Put { records, now }).await.is_err() {
            warn!("Record cache is not running, dropping answers");
        }
    }
}
