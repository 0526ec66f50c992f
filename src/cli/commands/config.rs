use crate::cli::parser::Commands;
use crate::config::Config;
use crate::context::AppContext;
use crate::errors::AppResult;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Config { print_config, path } = cmd {
        if *path {
            println!("{}", Config::config_file().display());
        }

        if *print_config || !*path {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(&ctx.config)?);
        }
    }

    Ok(())
}
