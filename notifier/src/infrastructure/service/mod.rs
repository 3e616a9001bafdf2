mod alert_sink;
mod device_state;

#[rustfmt::skip]
pub use {
    alert_sink::{LogAlertSink, NotifySendSink},
    device_state::{DeviceState, HostDeviceState},
};
