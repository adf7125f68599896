use crate::db::EntryStore;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;

const MAX_TARGET_WIDTH: usize = 40;

fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(store: &EntryStore) -> AppResult<()> {
        let lines = store.load_log()?;

        if lines.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        let id_w = lines
            .iter()
            .map(|l| l.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = lines.iter().map(|l| l.date.len()).max().unwrap_or(10);
        let target_w = lines
            .iter()
            .map(|l| l.target.chars().count())
            .max()
            .unwrap_or(0)
            .min(MAX_TARGET_WIDTH);

        println!("📜 Internal log:\n");

        for l in lines {
            let date = chrono::DateTime::parse_from_rfc3339(&l.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(l.date);

            let target: String = if l.target.chars().count() > MAX_TARGET_WIDTH {
                let mut s: String = l.target.chars().take(MAX_TARGET_WIDTH - 3).collect();
                s.push_str("...");
                s
            } else {
                l.target
            };

            // padding computed before painting: ANSI codes have no width
            let op = format!("{:<5}", l.operation);
            println!(
                "{:>id_w$}: {:<date_w$} | {} {:<target_w$} => {}",
                l.id,
                date,
                color_for_operation(&l.operation).paint(op),
                target,
                l.message,
                id_w = id_w,
                date_w = date_w,
                target_w = target_w
            );
        }

        Ok(())
    }
}
