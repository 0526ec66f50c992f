use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Status { json } = cmd {
        let window = ctx.config.window()?;
        let status = ctx.service()?.time_status();

        if *json {
            println!("{}", serde_json::to_string_pretty(&status)?);
        } else if status.within_time {
            info(format!(
                "Check-in is open ({} - {}). Current time: {}",
                window.start().format("%H:%M"),
                window.end().format("%H:%M"),
                status.current_time
            ));
        } else {
            warning(format!(
                "Check-in is closed ({} - {}). Current time: {}",
                window.start().format("%H:%M"),
                window.end().format("%H:%M"),
                status.current_time
            ));
        }
    }

    Ok(())
}
