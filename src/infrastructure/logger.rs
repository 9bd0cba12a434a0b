//! 日志基础设施

use tracing::{level_filters::LevelFilter, Level};
use tracing_subscriber::EnvFilter;

pub struct Logger;

impl Logger {
    /// 优先使用 `RUST_LOG`，未设置时使用 `level`
    pub fn init(level: Level) {
        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(level).into())
            .from_env_lossy();

        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
