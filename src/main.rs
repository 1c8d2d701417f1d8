use crate::{
    cli::Args,
    config::RetentionConfig,
    errors::Result,
    report::ReportSink,
    vars::{DIRCLEAN_CONFIG_PATH, DIRCLEAN_LOG_PATH},
};
use clap::Parser;
use log::{error, info};
use std::path::Path;

mod cli;
mod config;
mod errors;
mod janitor;
mod logger;
mod models;
mod report;
mod scheduler;
mod vars;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    // Initialize the logger
    logger::init();
    // Load environment variables from .env file if it exists
    if dotenvy::dotenv().is_ok() {
        info!("loaded .env file");
    }

    // 配置加载失败即中止，以非零退出码结束
    let config = match RetentionConfig::load(Path::new(*DIRCLEAN_CONFIG_PATH)) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {e}");
            return Err(e);
        }
    };

    if args.watch {
        scheduler::run(config, args.json).await
    } else {
        let sink = ReportSink::new(*DIRCLEAN_LOG_PATH).with_json_stdout(args.json);
        janitor::run(&config, &sink);
        Ok(())
    }
}
