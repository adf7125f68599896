use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::{Entry, EntryStore};
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date::{self, end_of_week, iso_week_key, start_of_week};
use crate::utils::formatting::{pad_left, separator};
use crate::utils::mins2readable;
use crate::utils::time::{TIME_FMT, minutes_to_hours};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        date: day,
        from,
        to,
        week,
        json,
    } = cmd
    {
        let store = EntryStore::new(&cfg.database);

        let (title, entries) = match (from, to, week) {
            (Some(f), Some(t), _) => {
                let start = date::parse_date(f)?;
                let end = date::parse_date(t)?;
                (
                    format!("{} .. {}", start, end),
                    store.list_between(start, end)?,
                )
            }
            (_, _, Some(w)) => {
                let d = date::parse_date(w)?;
                (
                    format!("{} ({} .. {})", iso_week_key(d), start_of_week(d), end_of_week(d)),
                    store.list_between(start_of_week(d), end_of_week(d))?,
                )
            }
            _ => {
                let d = match day {
                    Some(s) => date::parse_date(s)?,
                    None => date::today(),
                };
                (d.to_string(), store.list_by_date(d)?)
            }
        };

        if *json {
            let out = serde_json::to_string_pretty(&entries)?;
            println!("{}", out);
            return Ok(());
        }

        if entries.is_empty() {
            info(format!("No entries for {}", title));
            return Ok(());
        }

        print_entries(&title, &entries);
    }
    Ok(())
}

fn print_entries(title: &str, entries: &[Entry]) {
    println!("\n=== {} ===", title);
    println!(
        "{}  {:<10}  {:<5}  {:<5}  {:>5}  {:>8}",
        pad_left("ID", 4),
        "DATE",
        "START",
        "END",
        "LUNCH",
        "WORKED"
    );
    println!("{}", separator('-', 48));

    for e in entries {
        println!(
            "{}  {:<10}  {:<5}  {:<5}  {:>5}  {:>8}",
            pad_left(&e.id.to_string(), 4),
            e.work_date,
            e.start_time.format(TIME_FMT).to_string(),
            e.end_time.format(TIME_FMT).to_string(),
            e.lunch_minutes,
            mins2readable(e.worked_minutes, false, true),
        );
    }

    let total: i64 = entries.iter().map(|e| e.worked_minutes).sum();
    println!("{}", separator('-', 48));
    println!(
        "Total: {} ({:.2} h)",
        mins2readable(total, false, false),
        minutes_to_hours(total)
    );
}
