use crate::{
    config::RetentionConfig,
    models::{Decision, ScanOutcome},
    report::ReportSink,
};
use chrono::{DateTime, NaiveDate, Utc};
use log::{debug, error};
use std::{
    fs,
    path::{Path, PathBuf},
    time::SystemTime,
};

const SEPARATOR: &str = "----------------------------------------------------";

/// Executes one full cleanup run: banner, scan pass, end marker.
pub fn run(config: &RetentionConfig, sink: &ReportSink) {
    sink.print("START **********************************************");
    sink.print(SEPARATOR);
    sink.print(&format!(
        "File cleanup {}",
        Utc::now().format("%d/%m/%Y - %H.%M.%S")
    ));
    sink.print(SEPARATOR);
    sink.print(&format!("CLEAN_ROOT: {}", config.root.display()));
    sink.print(&format!("CLEAN_DAYS: {}", config.retention_days));
    sink.print(SEPARATOR);

    Janitor::new(config).scan(Utc::now().date_naive(), sink);

    sink.print("END   **********************************************");
}

/// Age-based purger for the immediate children of a root directory.
#[derive(Debug)]
pub struct Janitor {
    root: PathBuf,
    retention_days: i64,
}

impl Janitor {
    pub fn new(config: &RetentionConfig) -> Self {
        Janitor {
            root: config.root.clone(),
            retention_days: config.retention_days,
        }
    }

    /// One scan pass. Lists the root's immediate children in enumeration
    /// order, computes each entry's age in whole days relative to `today`
    /// and deletes entries older than the retention threshold. Every
    /// decision is emitted through the sink; nothing is retained in memory.
    pub fn scan(&self, today: NaiveDate, sink: &ReportSink) {
        // 列目录之前先验证根目录
        if !self.root.is_dir() {
            sink.print(&format!(
                "Error: CLEAN_ROOT {} is not a valid directory.",
                self.root.display()
            ));
            return;
        }

        let entries = match fs::read_dir(&self.root) {
            Ok(read) => read
                .filter_map(|entry| match entry {
                    Ok(entry) => Some(entry),
                    Err(e) => {
                        error!("Failed to read a directory entry: {e}");
                        None
                    }
                })
                .collect::<Vec<_>>(),
            Err(e) => {
                error!("Failed to list {}: {e}", self.root.display());
                Vec::new()
            }
        };

        if entries.is_empty() {
            sink.print(&format!("No files in directory: {}", self.root.display()));
            return;
        }

        sink.print("## --> File --> Created --> Age (days) --> Outcome");

        for (index, entry) in entries.iter().enumerate() {
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();
            let created = creation_date(&path);
            let age_days = (today - created).num_days();

            let decision = if age_days > self.retention_days {
                match remove_entry(&path) {
                    Ok(()) => {
                        debug!("Deleted expired entry: {}", path.display());
                        Decision::Deleted
                    }
                    Err(e) => {
                        // 单个删除失败不中断扫描
                        error!("Failed to delete {}: {e}", path.display());
                        Decision::FailedToDelete
                    }
                }
            } else {
                Decision::Retained
            };

            sink.emit(&ScanOutcome {
                seq: index + 1,
                name,
                created,
                age_days,
                decision,
            });
        }
    }
}

// 创建时间截断为 UTC 日历日。拿不到创建时间则退回修改时间，再退回纪元，
// 缺少时间戳的条目仍然照常处理。
fn creation_date(path: &Path) -> NaiveDate {
    let time = fs::metadata(path)
        .map(|metadata| {
            metadata
                .created()
                .or_else(|_| metadata.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH)
        })
        .unwrap_or(SystemTime::UNIX_EPOCH);

    DateTime::<Utc>::from(time).date_naive()
}

fn remove_entry(path: &Path) -> std::io::Result<()> {
    if path.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}
