use log::LevelFilter;
use std::io::Write;

/// Log target of the comparison library.
const LIBRARY_TARGET: &str = "imgsim";

pub fn init_logger_exe() {
    let name = std::env::current_exe()
        .ok()
        .and_then(|path| path.file_stem().and_then(|s| s.to_str()).map(str::to_owned))
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
    init_logger(name);
}

/// Binary names use dashes, log targets use the crate's underscore form.
pub fn logger_target(name: &str) -> String {
    name.trim().replace('-', "_")
}

/// Traces the calling binary and shows the library's info records; `RUST_LOG`
/// can still override both.
pub fn init_logger(name: impl Into<String>) {
    let crate_name = logger_target(&name.into());

    env_logger::builder()
        .filter(Some(&crate_name), LevelFilter::Trace)
        .filter(Some(LIBRARY_TARGET), LevelFilter::Info)
        .parse_default_env()
        .format(move |f, rec| {
            let now = humantime::format_rfc3339_millis(std::time::SystemTime::now());
            let level = rec.level();
            let location = match (rec.module_path(), rec.line()) {
                (Some(module), Some(line)) => format!("{}:{}", module, line),
                (Some(module), None) => module.to_string(),
                _ => rec.target().to_string(),
            };

            writeln!(f, "[{} {} {} {}] {}", level, crate_name, now, location, rec.args())
        })
        .init();
}
