pub type Result<T> = std::result::Result<T, Error>;

// 扫描过程中的状况（根目录无效、目录为空、单个删除失败）不属于这里：
// 它们只通过日志汇报，不跨进程边界传播。
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // 配置文件不存在
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),
    // 配置文件不可读
    #[error("configuration file {path} is unreadable: {source}")]
    ConfigUnreadable {
        path: String,
        source: std::io::Error,
    },
    // 缺少必需的配置键
    #[error("missing required configuration key: {0}")]
    MissingKey(&'static str),
    // 配置值格式错误
    #[error("malformed value for configuration key {key}: {value:?}")]
    MalformedValue { key: &'static str, value: String },
    // 根目录为空
    #[error("clean.root must not be empty")]
    EmptyRoot,
    // 保留天数为负
    #[error("clean.days must not be negative, provided: {0}")]
    NegativeRetention(i64),
    // 包装 JobSchedulerError
    #[error("job scheduler error: {0}")]
    JobScheduler(#[from] tokio_cron_scheduler::JobSchedulerError),
}
