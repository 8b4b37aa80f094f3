/*
 * The attach protocol between a UI panel and a swap chain, independent of COM.
 *
 * A panel is anything that can be asked for its swap-chain attachment
 * capability (`CapabilitySource`). The capability is an owned, reference
 * counted handle whose only job is `attach` (`SwapChainAttach`). The
 * capability lives for exactly one `attach_swap_chain` call and is released
 * when it goes out of scope, on every return path.
 *
 * Precondition for every attach: the caller is on the thread that owns the
 * panel. See `affinity` for the opt-in debug check.
 */

use crate::error::{InteropError, Result};
use crate::status::Status;

/// An object that may expose the swap-chain attachment capability.
pub trait CapabilitySource {
    type Capability: SwapChainAttach;

    /// Asks for the capability. On failure the raw status of the query is
    /// returned untouched.
    fn query_capability(&self) -> std::result::Result<Self::Capability, Status>;
}

/// The narrow interface that can make a swap chain the presentation target.
pub trait SwapChainAttach {
    type SwapChain: ?Sized;

    /// `None` detaches the current swap chain, where the platform allows it.
    fn attach(&self, swap_chain: Option<&Self::SwapChain>) -> Status;
}

/// Load check for hosts: 32-bit sum with wraparound.
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/*
 * Queries `panel` for its attachment capability and hands it `swap_chain`.
 * A failed query short-circuits before anything is attached. The success code
 * from `attach` is returned as-is (it may be `S_FALSE` rather than `S_OK`).
 */
pub fn attach_swap_chain<P>(
    panel: &P,
    swap_chain: Option<&<P::Capability as SwapChainAttach>::SwapChain>,
) -> Result<Status>
where
    P: CapabilitySource + ?Sized,
{
    let capability = panel.query_capability().map_err(|status| {
        log::debug!("Adapter: capability query failed with {status}");
        InteropError::CapabilityUnavailable(status)
    })?;

    let status = capability.attach(swap_chain);
    if status.is_failure() {
        log::debug!("Adapter: attach rejected with {status}");
        return Err(InteropError::AttachRejected(status));
    }

    log::debug!(
        "Adapter: swap chain {} with {status}",
        if swap_chain.is_some() { "attached" } else { "detached" }
    );
    Ok(status)
}
