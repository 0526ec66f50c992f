use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::errors::AppResult;
use crate::utils::colors::colorize_optional;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Students { json } = cmd {
        let service = ctx.service()?;
        let students = service.students()?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&students)?);
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("ID", 4),
            Column::new("NAME", 24),
            Column::new("QR", 3),
        ]);
        for s in &students {
            let qr = if s.has_qr_code() { "✔" } else { "-" };
            table.add_row(vec![s.id.to_string(), s.name.clone(), colorize_optional(qr)]);
        }

        print!("{}", table.render());
        println!("{} students", students.len());
    }

    Ok(())
}
