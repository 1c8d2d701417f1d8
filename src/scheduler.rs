use crate::{
    config::RetentionConfig,
    errors::Result,
    janitor,
    report::ReportSink,
    vars::{DIRCLEAN_LOG_PATH, DIRCLEAN_SCHEDULE},
};
use chrono::{DateTime, Utc};
use std::{pin::Pin, sync::Arc};
use tracing::info;
use tokio_cron_scheduler::{Job, JobScheduler};
use uuid::Uuid;

type TaskRun = Arc<
    dyn Fn() -> Pin<Box<dyn std::future::Future<Output = ()> + Send + Sync + 'static>>
        + Send
        + Sync
        + 'static,
>;

pub struct Task {
    run: TaskRun,
}

impl Task {
    pub fn new<F, Fut>(run: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = ()> + Send + Sync + 'static,
    {
        Self {
            run: Arc::new(move || Box::pin(run())),
        }
    }

    pub fn create_job(&self, schedule: &str) -> Result<Job> {
        let run = Arc::clone(&self.run);
        let job = Job::new_async(schedule, move |_, _| run())?;

        Ok(job)
    }
}

pub struct CleanupScheduler {
    sched: JobScheduler,
    cleanup_job_id: Uuid,
}

impl CleanupScheduler {
    pub async fn next_run(&mut self) -> Result<Option<DateTime<Utc>>> {
        Ok(self.sched.next_tick_for_job(self.cleanup_job_id).await?)
    }
}

/// Keeps the process resident and executes the cleanup run on the configured
/// cron schedule until a shutdown signal arrives.
pub async fn run(config: RetentionConfig, json_stdout: bool) -> Result<()> {
    let mut sched = JobScheduler::new().await?;

    let cleanup = Task::new(move || {
        let config = config.clone();
        async move {
            let sink = ReportSink::new(*DIRCLEAN_LOG_PATH).with_json_stdout(json_stdout);
            janitor::run(&config, &sink);
        }
    });

    let schedule = *DIRCLEAN_SCHEDULE;
    let cleanup_job = cleanup.create_job(schedule)?;
    let cleanup_job_id = cleanup_job.guid();

    sched.add(cleanup_job).await?;
    info!("Cleanup scheduled with cron expression: {schedule}");

    // Feature 'signal' must be enabled
    sched.shutdown_on_ctrl_c();
    sched.set_shutdown_handler(Box::new(|| {
        Box::pin(async move {
            info!("Job scheduler is shutting down");
        })
    }));

    sched.start().await?;

    let mut scheduler = CleanupScheduler {
        sched,
        cleanup_job_id,
    };
    if let Some(next) = scheduler.next_run().await? {
        info!("Next cleanup run at {next}");
    }

    shutdown_signal().await;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler")
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
