use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped with `--test`)
///  - the data directory
///  - both JSON collections (seed roster, empty attendance log)
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.data_dir.clone(), cli.test)?;

    println!("⚙️  Initializing rabsen…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Data dir    : {}", cfg.data_path().display());

    let store = RecordStore::new(cfg.data_path());
    store.init()?;

    let students = store.load_students()?;
    let attendance = store.load_attendance()?;

    success(format!(
        "Store ready: {} students, {} attendance records.",
        students.len(),
        attendance.len()
    ));
    Ok(())
}
