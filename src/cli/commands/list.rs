use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::check::{CheckLogic, CheckedHistory};
use crate::db::pool::DbPool;
use crate::db::queries::{list_trackers, require_tracker};
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{
    GREY, RED, RESET, YELLOW, color_for_coverage, color_for_status, colorize, colorize_optional,
};
use crate::utils::date::format_date;
use crate::utils::formatting::{describe_role, truncate};
use crate::utils::table::{Column, Table};
use crate::utils::days2readable;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { tracker, details } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match tracker {
            Some(name) => {
                let t = require_tracker(&pool.conn, name)?;
                let checked = CheckLogic::tracker(&mut pool, name, cfg)?;

                header(format!("{} ({})", t.name, t.status.to_db_str()));
                print_timeline(&checked, cfg, *details);
            }
            None => print_trackers(&mut pool, cfg)?,
        }
    }
    Ok(())
}

fn print_trackers(pool: &mut DbPool, cfg: &Config) -> AppResult<()> {
    let trackers = list_trackers(&pool.conn)?;

    if trackers.is_empty() {
        info("No trackers yet. Use `add` or `import` to create one.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("TRACKER"),
        Column::new("STATUS"),
        Column::new("ENTRIES"),
        Column::new("COVERED"),
        Column::new("COVERAGE"),
        Column::new("ISSUES"),
    ])
    .with_separator(cfg.separator());

    for t in &trackers {
        let checked = CheckLogic::tracker(pool, &t.name, cfg)?;
        let s = &checked.summary;

        let status = if t.status.is_active() {
            t.status.to_db_str().to_string()
        } else {
            colorize(t.status.to_db_str(), GREY)
        };

        let coverage = s.coverage.status.as_str();
        let issues = match (s.error_count(), s.warning_count()) {
            (0, 0) => colorize_optional("0"),
            (0, w) => colorize(&format!("{} warning(s)", w), YELLOW),
            (e, _) => colorize(&format!("{} error(s)", e), RED),
        };

        table.add_row(vec![
            t.name.clone(),
            status,
            checked.entries.len().to_string(),
            days2readable(s.timeline.total_days, true),
            colorize(coverage, color_for_coverage(coverage)),
            issues,
        ]);
    }

    print!("{}", table.render());
    Ok(())
}

/// Timeline table, gaps and coverage of one history.
pub(crate) fn print_timeline(checked: &CheckedHistory, cfg: &Config, details: bool) {
    let s = &checked.summary;

    if checked.entries.is_empty() {
        info("No employment entries.");
    }

    let mut columns = vec![
        Column::new("#"),
        Column::new("ROLE"),
        Column::new("EMPLOYER"),
        Column::new("FROM"),
        Column::new("TO"),
        Column::new("DURATION"),
        Column::new("STATUS"),
        Column::new("GAP BEFORE"),
    ];
    if details {
        columns.push(Column::new("TITLE"));
        columns.push(Column::new("REASON FOR LEAVING"));
    }

    let mut table = Table::new(columns).with_separator(cfg.separator());

    for (seg, entry) in s.timeline.segments.iter().zip(&checked.entries) {
        let (role, role_color) = describe_role(seg.role.as_str());
        let status = seg.status.as_str();

        let gap = match s.gap_before(seg.index) {
            Some(g) if entry.has_gap_explanation() => format!("{} days (explained)", g.days),
            Some(g) => colorize(&format!("{} days", g.days), RED),
            None => colorize_optional("--"),
        };

        // keep unparseable input visible
        let from = match seg.from {
            Some(_) => format_date(seg.from, &cfg.date_format),
            None => colorize_optional(&entry.from),
        };
        let to = match seg.to {
            Some(_) => format_date(seg.to, &cfg.date_format),
            None => colorize_optional(&entry.to),
        };

        let mut row = vec![
            seg.index.to_string(),
            colorize(&role, role_color),
            truncate(entry.display_name(), 32),
            from,
            to,
            colorize_optional(&if seg.is_counted() {
                days2readable(seg.duration_days, false)
            } else {
                "--".to_string()
            }),
            colorize(status, color_for_status(status)),
            gap,
        ];
        if details {
            row.push(truncate(&entry.job_title, 24));
            row.push(truncate(&entry.reason_for_leaving, 32));
        }
        table.add_row(row);
    }

    print!("{}", table.render());

    if details {
        for g in &s.gaps {
            let text = checked
                .entries
                .get(g.index)
                .and_then(|e| e.gap_explanation_before.clone())
                .unwrap_or_else(|| format!("{GREY}(no explanation){RESET}"));

            println!(
                "\nGap before #{} ({} → {}, {} days):",
                g.index, g.from, g.to, g.days
            );
            for line in textwrap::wrap(&text, 72) {
                println!("    {}", line);
            }
        }
    }

    let cov = &s.coverage;
    let cov_status = cov.status.as_str();
    println!(
        "\nTotal: {} days ({} months, {}) | Required: {} days | Coverage: {}",
        s.timeline.total_days,
        s.timeline.total_months,
        days2readable(s.timeline.total_days, true),
        cov.required_days,
        colorize(cov_status, color_for_coverage(cov_status)),
    );
    if cov.missing_days > 0 {
        println!("Missing: {} days", cov.missing_days);
    }
}
