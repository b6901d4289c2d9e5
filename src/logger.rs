use simplelog::*;
use std::fs::File;

use crate::config::get_exe_dir;

pub fn init() -> anyhow::Result<()> {
    // Ensure data/logs directory exists
    let log_dir = get_exe_dir().join("data").join("logs");
    if !log_dir.exists() {
        std::fs::create_dir_all(&log_dir)?;
    }

    let log_file = File::create(log_dir.join("app.log"))?;

    WriteLogger::init(
        LevelFilter::Info,
        Config::default(),
        log_file,
    )?;

    Ok(())
}
