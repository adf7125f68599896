use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{WeekLogic, WeekSummary};
use crate::db::EntryStore;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::date::{self, weekday_str};
use crate::utils::formatting::separator;
use crate::utils::mins2readable;
use crate::utils::time::minutes_to_hours;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Week { date: day, json } = cmd {
        let d = match day {
            Some(s) => date::parse_date(s)?,
            None => date::today(),
        };

        let store = EntryStore::new(&cfg.database);
        let summary = WeekLogic::summary(&store, d, cfg.daily_target_minutes()?)?;

        if *json {
            let out = serde_json::to_string_pretty(&summary)?;
            println!("{}", out);
        } else {
            print_summary(&summary);
        }
    }
    Ok(())
}

fn print_summary(s: &WeekSummary) {
    header(format!("{} ({} .. {})", s.key, s.start, s.end));

    for day in &s.days {
        let worked = if day.entries.is_empty() {
            "--".to_string()
        } else {
            format!(
                "{} ({:.2} h)",
                mins2readable(day.worked_minutes, false, true),
                minutes_to_hours(day.worked_minutes)
            )
        };
        println!("{} {}  {}", weekday_str(day.date), day.date, worked);
    }

    println!("{}", separator('-', 36));
    println!("Days worked: {}", s.days_worked());
    println!(
        "Total:    {} ({:.2} h)",
        mins2readable(s.total_minutes, false, false),
        minutes_to_hours(s.total_minutes)
    );
    println!("Expected: {}", mins2readable(s.expected_minutes, false, false));
    println!("Surplus:  {}", mins2readable(s.surplus_minutes, true, false));
}
