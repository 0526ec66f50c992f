use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::errors::AppResult;
use crate::ui::messages::success;
use serde_json::json;

/// Record attendance. Rejections come back as errors so the process exits
/// with a non-zero status.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Checkin { student_id, json } = cmd {
        let service = ctx.service()?;
        let record = service.check_in(*student_id)?;

        if *json {
            let body = json!({
                "success": true,
                "message": "Attendance recorded",
                "data": record,
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        } else {
            success(format!(
                "Attendance recorded: #{} {} on {} at {} ({}).",
                record.id,
                record.student_name,
                record.date_str(),
                record.time_str(),
                record.status.as_str()
            ));
        }
    }

    Ok(())
}
