//! Primary display adapter lookup.
//!
//! The device string of the OS primary display adapter is what the GPU
//! enumerator correlates device names against to mark a device primary.
//! Only Windows reports it; other platforms return `None` and the
//! enumerator proceeds without a primary-flagged GPU.

/// Device string of the primary display adapter, as reported by the OS.
#[cfg(windows)]
pub fn primary_adapter_name() -> Option<String> {
    use winapi::um::wingdi::{DISPLAY_DEVICEW, DISPLAY_DEVICE_PRIMARY_DEVICE};
    use winapi::um::winuser::EnumDisplayDevicesW;

    let mut device: DISPLAY_DEVICEW = unsafe { std::mem::zeroed() };
    device.cb = std::mem::size_of::<DISPLAY_DEVICEW>() as u32;

    let mut index = 0;
    while unsafe { EnumDisplayDevicesW(std::ptr::null(), index, &mut device, 0) } != 0 {
        if device.StateFlags & DISPLAY_DEVICE_PRIMARY_DEVICE != 0 {
            let len = device
                .DeviceString
                .iter()
                .position(|&c| c == 0)
                .unwrap_or(device.DeviceString.len());
            return Some(String::from_utf16_lossy(&device.DeviceString[..len]));
        }
        index += 1;
    }

    None
}

/// Device string of the primary display adapter, as reported by the OS.
#[cfg(not(windows))]
pub fn primary_adapter_name() -> Option<String> {
    None
}
