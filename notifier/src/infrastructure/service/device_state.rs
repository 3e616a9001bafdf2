use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use async_trait::async_trait;
use tokio::net::TcpStream;
use url::Url;

/// Conditions a scheduled job may wait for.
#[async_trait]
pub trait DeviceState: Send + Sync {
    async fn network_available(&self) -> bool;
    async fn battery_not_low(&self) -> bool;
}

/// Percentage at or below which a discharging battery counts as low.
const LOW_BATTERY_PERCENT: u8 = 15;

/// Probes the backend host over TCP and reads batteries from sysfs.
pub struct HostDeviceState {
    host: String,
    port: u16,
    timeout: Duration,
    power_supply_dir: PathBuf,
}

impl HostDeviceState {
    pub fn for_backend(base_url: &Url, timeout: Duration) -> anyhow::Result<Self> {
        let host = base_url
            .host_str()
            .ok_or_else(|| anyhow::anyhow!("{base_url} has no host"))?
            .to_string();
        let port = base_url
            .port_or_known_default()
            .ok_or_else(|| anyhow::anyhow!("{base_url} has no port"))?;
        Ok(Self {
            host,
            port,
            timeout,
            power_supply_dir: PathBuf::from("/sys/class/power_supply"),
        })
    }
}

#[async_trait]
impl DeviceState for HostDeviceState {
    async fn network_available(&self) -> bool {
        let connect = TcpStream::connect((self.host.as_str(), self.port));
        matches!(tokio::time::timeout(self.timeout, connect).await, Ok(Ok(_)))
    }

    async fn battery_not_low(&self) -> bool {
        match any_battery_low(&self.power_supply_dir).await {
            Ok(low) => !low,
            Err(e) => {
                tracing::debug!("No battery information: {e}");
                true
            }
        }
    }
}

async fn any_battery_low(dir: &Path) -> anyhow::Result<bool> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let supply = entry.path();
        if read_trimmed(&supply.join("type")).await.as_deref() != Some("Battery") {
            continue;
        }
        let capacity = read_trimmed(&supply.join("capacity"))
            .await
            .and_then(|c| c.parse::<u8>().ok());
        let charging = read_trimmed(&supply.join("status")).await.as_deref() == Some("Charging");
        if !charging && capacity.is_some_and(|c| c <= LOW_BATTERY_PERCENT) {
            return Ok(true);
        }
    }
    Ok(false)
}

async fn read_trimmed(path: &Path) -> Option<String> {
    tokio::fs::read_to_string(path)
        .await
        .ok()
        .map(|s| s.trim().to_string())
}
