/*
 * Native shim loaded by a WinUI 3 host to bind a XAML `SwapChainPanel` to a
 * DXGI swap chain the host created. The host cannot reach the panel's private
 * `ISwapChainPanelNative` interface from managed code, so it passes the raw
 * panel and swap chain pointers here and gets the raw HRESULT back.
 *
 * The attach protocol itself (`adapter`) is free of COM so it can be compiled
 * and tested on every platform; `panel_native` supplies the COM implementation
 * and `exports` the C-linkage surface. The library keeps no platform object
 * between calls.
 */
pub mod adapter;
pub mod affinity;
pub mod error;
pub mod exports;
pub mod logging;
#[cfg(target_os = "windows")]
pub mod panel_native;
pub mod status;

pub use adapter::{CapabilitySource, SwapChainAttach, add, attach_swap_chain};
pub use affinity::UiThreadAffinity;
pub use error::{InteropError, Result as InteropResult};
#[cfg(target_os = "windows")]
pub use panel_native::ISwapChainPanelNative;
pub use status::Status;
