/*
 * Raw status codes as seen across the export boundary. A `Status` is the exact
 * 32-bit value the platform produced (HRESULT layout): negative values are
 * failures, everything else is success. The adapter never invents or rewrites
 * codes; it only carries them.
 */

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Status(pub i32);

impl Status {
    pub const OK: Self = Self(0);
    pub const FALSE: Self = Self(1);
    /// `E_NOINTERFACE`: the object does not support the requested interface.
    pub const NO_INTERFACE: Self = Self(0x8000_4002_u32 as i32);
    /// `E_POINTER`: a required pointer argument was null.
    pub const POINTER: Self = Self(0x8000_4003_u32 as i32);
    pub const FAIL: Self = Self(0x8000_4005_u32 as i32);
    pub const INVALID_ARG: Self = Self(0x8007_0057_u32 as i32);

    pub const fn code(self) -> i32 {
        self.0
    }

    pub const fn is_success(self) -> bool {
        self.0 >= 0
    }

    pub const fn is_failure(self) -> bool {
        self.0 < 0
    }
}

impl From<i32> for Status {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl From<Status> for i32 {
    fn from(status: Status) -> Self {
        status.0
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0 as u32)
    }
}

#[cfg(target_os = "windows")]
impl From<windows::core::HRESULT> for Status {
    fn from(hr: windows::core::HRESULT) -> Self {
        Self(hr.0)
    }
}

#[cfg(target_os = "windows")]
impl From<Status> for windows::core::HRESULT {
    fn from(status: Status) -> Self {
        windows::core::HRESULT(status.0)
    }
}

#[cfg(target_os = "windows")]
impl From<windows::core::Error> for Status {
    fn from(err: windows::core::Error) -> Self {
        Self(err.code().0)
    }
}
