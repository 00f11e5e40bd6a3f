use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::employment::EmploymentPatch;

/// Add or edit an employment entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        tracker,
        employer,
        title,
        from,
        to,
        explain,
        reason,
        fmcsr,
        safety_sensitive,
        at,
        entry,
        edit,
    } = cmd
    {
        // flags left out keep the stored value on --edit
        let patch = EmploymentPatch {
            employer_name: employer.clone(),
            job_title: title.clone(),
            from: from.clone(),
            to: to.clone(),
            gap_explanation_before: explain.clone(),
            reason_for_leaving: reason.clone(),
            subject_to_fmcsr: *fmcsr,
            safety_sensitive: *safety_sensitive,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        AddLogic::apply(&mut pool, tracker, patch, *at, *edit, *entry)?;
    }

    Ok(())
}
