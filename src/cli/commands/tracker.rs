use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tracker::TrackerLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::tracker::TrackerStatus;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Tracker {
        tracker,
        terminate,
        restore: _,
    } = cmd
    {
        let status = if *terminate {
            TrackerStatus::Terminated
        } else {
            TrackerStatus::Active
        };

        let mut pool = DbPool::new(&cfg.database)?;
        TrackerLogic::set_status(&mut pool, tracker, status)?;
    }
    Ok(())
}
