use crate::api;
use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::errors::AppResult;

/// Runs until Ctrl+C / SIGTERM.
pub fn handle(cmd: &Commands, ctx: &mut AppContext) -> AppResult<()> {
    if let Commands::Serve { port } = cmd {
        if let Some(p) = port {
            ctx.config.port = *p;
        }

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        runtime.block_on(api::serve(ctx))?;
    }

    Ok(())
}
