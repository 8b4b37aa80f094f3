/*
 * COM side of the adapter for WinUI 3. The XAML `SwapChainPanel` hands out a
 * private `ISwapChainPanelNative` interface (declared in
 * `microsoft.ui.xaml.media.dxinterop.h`) through `QueryInterface`; its single
 * method makes a DXGI swap chain the panel's presentation target.
 *
 * Note: this is the Windows App SDK interface. The UWP variant in
 * `windows.ui.xaml.media.dxinterop.h` carries a different IID and is not
 * what `Microsoft.UI.Xaml` panels answer to.
 */
#![allow(non_snake_case)]

use crate::adapter::{CapabilitySource, SwapChainAttach, attach_swap_chain};
use crate::error::{InteropError, Result};
use crate::status::Status;

use std::ffi::c_void;
use windows::Win32::Graphics::Dxgi::IDXGISwapChain;
use windows_core::{HRESULT, IUnknown, IUnknown_Vtbl, Interface, interface};

#[interface("63aad0b8-7c24-40ff-85a8-640d944cc325")]
pub unsafe trait ISwapChainPanelNative: IUnknown {
    unsafe fn SetSwapChain(&self, swap_chain: *mut c_void) -> HRESULT;
}

impl CapabilitySource for IUnknown {
    type Capability = ISwapChainPanelNative;

    fn query_capability(&self) -> std::result::Result<ISwapChainPanelNative, Status> {
        self.cast::<ISwapChainPanelNative>().map_err(Status::from)
    }
}

impl SwapChainAttach for ISwapChainPanelNative {
    type SwapChain = IDXGISwapChain;

    fn attach(&self, swap_chain: Option<&IDXGISwapChain>) -> Status {
        let raw = swap_chain.map_or(std::ptr::null_mut(), Interface::as_raw);
        // The panel takes its own reference to the swap chain.
        unsafe { self.SetSwapChain(raw) }.into()
    }
}

/*
 * Borrows the two raw pointers as COM references (no AddRef/Release on either)
 * and runs the attach protocol. A null panel is refused before any query.
 *
 * # Safety
 * `panel` must be null or a live COM object pointer, and `swap_chain` must be
 * null or a live `IDXGISwapChain` pointer, both for the duration of the call.
 */
pub(crate) unsafe fn attach_raw(panel: *mut c_void, swap_chain: *mut c_void) -> Result<Status> {
    let Some(panel_ref) = (unsafe { IUnknown::from_raw_borrowed(&panel) }) else {
        log::warn!("PanelNative: SetSwapchain called with a null panel handle");
        return Err(InteropError::NullPanel);
    };
    let swap_chain_ref = unsafe { IDXGISwapChain::from_raw_borrowed(&swap_chain) };

    log::debug!("PanelNative: attaching swap chain {swap_chain:?} to panel {panel:?}");
    attach_swap_chain(panel_ref, swap_chain_ref)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::sync::{Arc, Mutex};
    use windows_core::implement;

    /// Panel double that records every swap chain pointer it is given.
    #[implement(ISwapChainPanelNative)]
    pub(crate) struct FakeSwapChainPanel {
        pub(crate) attached: Arc<Mutex<Vec<usize>>>,
        pub(crate) result: HRESULT,
    }

    impl ISwapChainPanelNative_Impl for FakeSwapChainPanel_Impl {
        unsafe fn SetSwapChain(&self, swap_chain: *mut c_void) -> HRESULT {
            self.attached.lock().unwrap().push(swap_chain as usize);
            self.result
        }
    }

    #[interface("0c3a4f6e-2b1d-4a8e-9f57-6d2e8b1c7a90")]
    pub(crate) unsafe trait IUnrelated: IUnknown {
        unsafe fn Ping(&self) -> HRESULT;
    }

    /// A COM object that is not a swap chain panel.
    #[implement(IUnrelated)]
    pub(crate) struct PlainObject;

    impl IUnrelated_Impl for PlainObject_Impl {
        unsafe fn Ping(&self) -> HRESULT {
            HRESULT(0)
        }
    }

    pub(crate) fn fake_panel(result: HRESULT) -> (IUnknown, Arc<Mutex<Vec<usize>>>) {
        let attached = Arc::new(Mutex::new(Vec::new()));
        let native: ISwapChainPanelNative = FakeSwapChainPanel {
            attached: Arc::clone(&attached),
            result,
        }
        .into();
        (native.cast::<IUnknown>().unwrap(), attached)
    }

    pub(crate) fn plain_object() -> IUnknown {
        let unrelated: IUnrelated = PlainObject.into();
        unrelated.cast::<IUnknown>().unwrap()
    }

    /// Current reference count, read through an AddRef/Release pair.
    pub(crate) fn ref_count(unknown: &IUnknown) -> u32 {
        unsafe {
            (unknown.vtable().AddRef)(unknown.as_raw());
            (unknown.vtable().Release)(unknown.as_raw())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use windows::Win32::Foundation::{E_NOINTERFACE, S_OK};

    const FAKE_CHAIN: usize = 0x5000;

    #[test]
    fn query_finds_native_interface_on_panel() {
        let (panel, _) = fake_panel(S_OK);
        assert!(panel.query_capability().is_ok());
    }

    #[test]
    fn query_on_plain_object_reports_no_interface() {
        let object = plain_object();
        assert_eq!(
            object.query_capability().err(),
            Some(Status::from(E_NOINTERFACE))
        );
    }

    #[test]
    fn attach_raw_forwards_swap_chain_pointer() {
        // Arrange
        let (panel, attached) = fake_panel(S_OK);
        // Act
        let result = unsafe { attach_raw(panel.as_raw(), FAKE_CHAIN as *mut c_void) };
        // Assert
        assert_eq!(result, Ok(Status::OK));
        assert_eq!(*attached.lock().unwrap(), vec![FAKE_CHAIN]);
    }

    #[test]
    fn attach_raw_passes_null_swap_chain() {
        let (panel, attached) = fake_panel(S_OK);

        let result = unsafe { attach_raw(panel.as_raw(), std::ptr::null_mut()) };

        assert_eq!(result, Ok(Status::OK));
        assert_eq!(*attached.lock().unwrap(), vec![0]);
    }

    #[test]
    fn attach_raw_refuses_null_panel() {
        let result = unsafe { attach_raw(std::ptr::null_mut(), FAKE_CHAIN as *mut c_void) };
        assert_eq!(result, Err(InteropError::NullPanel));
    }

    #[test]
    fn capability_reference_is_released_after_call() {
        let (panel, _) = fake_panel(S_OK);
        let (rejecting, _) = fake_panel(HRESULT(0x887A_0001_u32 as i32));
        let object = plain_object();
        let baselines = [ref_count(&panel), ref_count(&rejecting), ref_count(&object)];

        let _ = unsafe { attach_raw(panel.as_raw(), FAKE_CHAIN as *mut c_void) };
        let _ = unsafe { attach_raw(rejecting.as_raw(), FAKE_CHAIN as *mut c_void) };
        let _ = unsafe { attach_raw(object.as_raw(), FAKE_CHAIN as *mut c_void) };

        assert_eq!(
            [ref_count(&panel), ref_count(&rejecting), ref_count(&object)],
            baselines
        );
    }
}
