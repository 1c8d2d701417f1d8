use chrono::NaiveDate;
use serde::Serialize;

/// What happened to a single directory entry during a scan pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
pub enum Decision {
    #[strum(serialize = "Deleted")]
    Deleted,
    #[strum(serialize = "ERROR deleting")]
    FailedToDelete,
    #[strum(serialize = "Retained")]
    Retained,
}

/// Per-entry scan record. Only lives long enough to be rendered into a
/// report line.
#[derive(Debug, Clone, Serialize)]
pub struct ScanOutcome {
    // 从 1 开始的序号
    pub seq: usize,
    pub name: String,
    pub created: NaiveDate,
    pub age_days: i64,
    pub decision: Decision,
}

impl std::fmt::Display for ScanOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02} --> {} --> {} --> {} --> {}",
            self.seq,
            self.name,
            self.created.format("%d/%m/%Y"),
            self.age_days,
            self.decision
        )
    }
}
