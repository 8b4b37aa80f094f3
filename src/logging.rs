/*
 * Diagnostics plumbing. The crate only talks to the `log` facade; a host that
 * wants to see those records opts in through `EnableDebugOutput`, which installs
 * a sink writing to the debugger output stream. The level is supplied by the
 * host as a plain integer so it can cross the C boundary.
 */

use log::{LevelFilter, Record};

/// Maps the host's level number to a filter: 0 is off, 1..=5 run from error to
/// trace, anything higher clamps to trace. Negative values are rejected.
pub fn level_filter_from_raw(level: i32) -> Option<LevelFilter> {
    match level {
        i32::MIN..=-1 => None,
        0 => Some(LevelFilter::Off),
        1 => Some(LevelFilter::Error),
        2 => Some(LevelFilter::Warn),
        3 => Some(LevelFilter::Info),
        4 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    }
}

#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
pub(crate) fn format_record(record: &Record<'_>) -> String {
    format!(
        "[swapchain_panel_interop] {} {}: {}\n",
        record.level(),
        record.target(),
        record.args()
    )
}

#[cfg(target_os = "windows")]
pub(crate) use debug_output::install_debug_output;

#[cfg(target_os = "windows")]
mod debug_output {
    use super::format_record;
    use log::{LevelFilter, Log, Metadata, Record};
    use windows::Win32::System::Diagnostics::Debug::OutputDebugStringW;
    use windows::core::HSTRING;

    /// Writes each record as one line via `OutputDebugStringW`.
    #[derive(Debug)]
    struct DebugOutputLogger;

    static LOGGER: DebugOutputLogger = DebugOutputLogger;

    impl Log for DebugOutputLogger {
        fn enabled(&self, metadata: &Metadata<'_>) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record<'_>) {
            if !self.enabled(record.metadata()) {
                return;
            }
            let line = HSTRING::from(format_record(record));
            unsafe { OutputDebugStringW(&line) };
        }

        fn flush(&self) {}
    }

    /*
     * Installs the sink and applies `level`. Returns `false` when some other
     * logger already owns the facade; the level is applied either way.
     */
    pub(crate) fn install_debug_output(level: LevelFilter) -> bool {
        let installed = log::set_logger(&LOGGER).is_ok();
        log::set_max_level(level);
        installed
    }
}
