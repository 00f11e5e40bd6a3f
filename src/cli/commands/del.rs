use crate::cli::commands::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { tracker, entry } = cmd {
        //
        // Confirmation prompt
        //
        let prompt = match entry {
            Some(i) => format!(
                "Delete entry #{} of '{}'? This action is irreversible.",
                i, tracker
            ),
            None => format!(
                "Delete tracker '{}' and ALL its employment entries? This action is irreversible.",
                tracker
            ),
        };

        if !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion
        //
        let mut pool = DbPool::new(&cfg.database)?;
        DeleteLogic::apply(&mut pool, tracker, *entry)?;

        match entry {
            Some(i) => success(format!("Entry #{} of '{}' has been deleted.", i, tracker)),
            None => success(format!("Tracker '{}' has been deleted.", tracker)),
        }
    }

    Ok(())
}
