use clap::Parser;

#[derive(Parser, Debug)]
pub struct Args {
    // 常驻运行，按 cron 计划执行清理
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub watch: bool,
    // stdout 逐条输出 JSON（运行日志始终为文本格式）
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub json: bool,
}
