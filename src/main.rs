// On Windows, hide the console window for GUI applications
#![cfg_attr(
    all(target_os = "windows", not(debug_assertions)),
    windows_subsystem = "windows"
)]

use inkkit::init_logging;

fn main() -> anyhow::Result<()> {
    init_logging()?;

    tracing::info!(version = inkkit::VERSION, built = inkkit::BUILD_DATE, "starting InkKit");
    inkkit_ui::gtk_app::main();

    Ok(())
}
