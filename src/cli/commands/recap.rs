use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::errors::AppResult;
use crate::models::RecapEntry;
use crate::ui::messages::header;
use crate::utils::colors::{colorize_optional, colorize_status};
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Recap { json } = cmd {
        let service = ctx.service()?;
        let (today, recap) = service.dated_recap()?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&recap)?);
            return Ok(());
        }

        print_recap(today, &recap);
    }

    Ok(())
}

fn print_recap(date: NaiveDate, recap: &[RecapEntry]) {
    header(format!("Recap {date}"));

    let mut table = Table::new(vec![
        Column::new("ID", 4),
        Column::new("NAME", 24),
        Column::new("STATUS", 6),
        Column::new("TIME", 8),
    ]);

    for entry in recap {
        table.add_row(vec![
            entry.id.to_string(),
            entry.name.clone(),
            colorize_status(entry.status.as_str(), entry.status.is_present()),
            colorize_optional(&entry.time_str()),
        ]);
    }

    print!("{}", table.render());

    let present = recap.iter().filter(|e| e.status.is_present()).count();
    println!("\nPresent: {} | Absent: {}", present, recap.len() - present);
}
