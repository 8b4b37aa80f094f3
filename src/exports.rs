/*
 * Flat C-linkage exports loaded by the managed host (`LibraryImport` with
 * `CallConvCdecl`). Each export converts its raw arguments, forwards to the
 * safe implementation and returns a raw status code. No export panics.
 *
 * Threading: `SwapchainPanelNativeWrapper_SetSwapchain` mutates the panel and
 * must be called on the thread that owns it. The library does not marshal the
 * call; hosts that register their UI thread get a warning in debug builds when
 * the rule is broken.
 */
#![allow(non_snake_case)]

use crate::adapter;
use crate::affinity::UI_THREAD;
use crate::status::Status;

/// Returns `a + b` with 32-bit wraparound. Lets the host check that the
/// library loaded and the calling convention matches before anything else.
#[unsafe(no_mangle)]
pub extern "C" fn SwapchainPanelNativeWrapper_Add(a: i32, b: i32) -> i32 {
    adapter::add(a, b)
}

/// Marks the calling thread as the UI thread. `S_OK` on first registration,
/// `S_FALSE` afterwards.
#[unsafe(no_mangle)]
pub extern "C" fn SwapchainPanelNativeWrapper_RegisterUiThread() -> i32 {
    let status = if UI_THREAD.register_current() {
        Status::OK
    } else {
        Status::FALSE
    };
    log::debug!("Exports: RegisterUiThread -> {status}");
    status.code()
}

#[cfg(target_os = "windows")]
pub use windows_exports::*;

#[cfg(target_os = "windows")]
mod windows_exports {
    use super::UI_THREAD;
    use crate::logging::{install_debug_output, level_filter_from_raw};
    use crate::panel_native::attach_raw;
    use crate::status::Status;
    use std::ffi::c_void;

    /// Attaches `swap_chain` (an `IDXGISwapChain*`, may be null) to the WinUI
    /// panel behind `panel` (any interface pointer of the panel object).
    /// Returns the HRESULT of the interface query or of `SetSwapChain`,
    /// unchanged, or `E_POINTER` when `panel` is null.
    ///
    /// # Safety
    /// Both pointers must be null or valid for the duration of the call, and
    /// the call must happen on the panel's UI thread.
    #[unsafe(no_mangle)]
    pub unsafe extern "C" fn SwapchainPanelNativeWrapper_SetSwapchain(
        panel: *mut c_void,
        swap_chain: *mut c_void,
    ) -> i32 {
        UI_THREAD.warn_if_foreign("SetSwapchain");
        match unsafe { attach_raw(panel, swap_chain) } {
            Ok(status) => status.code(),
            Err(err) => {
                log::debug!("Exports: SetSwapchain failed: {err}");
                Status::from(err).code()
            }
        }
    }

    /// Routes the crate's log records to the debugger output. `level`: 0 off,
    /// 1 error, 2 warn, 3 info, 4 debug, 5 trace. Returns `S_OK` when the sink
    /// was installed, `S_FALSE` when a logger already existed (the level is
    /// still applied) and `E_INVALIDARG` for a negative level.
    #[unsafe(no_mangle)]
    pub extern "C" fn SwapchainPanelNativeWrapper_EnableDebugOutput(level: i32) -> i32 {
        let Some(filter) = level_filter_from_raw(level) else {
            return Status::INVALID_ARG.code();
        };
        let status = if install_debug_output(filter) {
            Status::OK
        } else {
            Status::FALSE
        };
        log::info!("Exports: debug output enabled at {filter}");
        status.code()
    }
}
