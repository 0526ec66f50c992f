use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Qr { refresh, show } = cmd {
        let store = ctx.store()?;

        if *refresh {
            let refresher = ctx.refresher_with(store.clone())?;
            let report = refresher.run_cycle()?;

            if report.store_repaired {
                warning("Student store was rebuilt; QR codes will be generated on the next refresh.");
            } else if report.failed > 0 {
                warning(format!(
                    "QR codes refreshed for {} students, {} failed.",
                    report.refreshed, report.failed
                ));
            } else {
                success(format!("QR codes refreshed for {} students.", report.refreshed));
            }
        }

        if let Some(id) = show {
            let students = store.load_students()?;
            let student = students
                .iter()
                .find(|s| s.id == *id)
                .ok_or(AppError::StudentNotFound(*id))?;

            if student.has_qr_code() {
                println!("{}", student.qr_code);
            } else {
                warning(format!("{} has no QR code yet.", student.name));
            }
        }
    }

    Ok(())
}
