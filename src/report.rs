use crate::models::ScanOutcome;
use log::error;
use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::PathBuf,
};

/// Dual log sink: every line goes to stdout and is appended to the
/// persistent run log. The log file is opened per write and closed
/// immediately, so there is no handle held across the run.
pub struct ReportSink {
    log_path: PathBuf,
    json_stdout: bool,
}

impl ReportSink {
    pub fn new(log_path: impl Into<PathBuf>) -> Self {
        ReportSink {
            log_path: log_path.into(),
            json_stdout: false,
        }
    }

    pub fn with_json_stdout(mut self, json_stdout: bool) -> Self {
        self.json_stdout = json_stdout;
        self
    }

    /// Writes a plain report line (banners and diagnostics).
    pub fn print(&self, line: &str) {
        println!("{line}");
        self.append(line);
    }

    /// Writes a per-entry outcome. The run log always receives the classic
    /// text format; stdout renders JSON when requested.
    pub fn emit(&self, outcome: &ScanOutcome) {
        let line = outcome.to_string();
        if self.json_stdout {
            match serde_json::to_string(outcome) {
                Ok(json) => println!("{json}"),
                Err(e) => error!("Failed to serialize outcome: {e}"),
            }
        } else {
            println!("{line}");
        }
        self.append(&line);
    }

    // 运行日志写入失败只汇报到诊断通道，不中断运行
    fn append(&self, line: &str) {
        if let Err(e) = self.try_append(line) {
            error!("Failed to write run log {}: {e}", self.log_path.display());
        }
    }

    fn try_append(&self, line: &str) -> io::Result<()> {
        if let Some(parent) = self.log_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;

        writeln!(file, "{line}")
    }
}
