//! D-Bus client for the Bluetooth HID transport service.
//!
//! The transport service owns the L2CAP control/interrupt channels to the
//! paired host and exposes two methods on the system bus:
//!
//! | Method          | Signature | Effect                                  |
//! |-----------------|-----------|-----------------------------------------|
//! | `send_keys`     | `ay`      | writes one report to the interrupt channel |
//! | `switch_device` | (none)    | moves to the next paired host           |
//!
//! Both keyboard and mouse reports go through `send_keys`; the report ID in
//! byte 1 tells them apart.
//!
//! # What is D-Bus? (for beginners)
//!
//! D-Bus is the Linux desktop's local RPC bus.  A service claims a
//! well-known name (`org.yaptb.btkbservice`), exports objects at paths
//! (`/org/yaptb/btkbservice`) and groups methods into interfaces.  A client
//! calls a method by naming all three.  The *system* bus is shared by all
//! users and is where Bluetooth services live.

use async_trait::async_trait;
use bthid_core::HidReport;
use tracing::{debug, info};
use zbus::{Connection, Proxy};

use crate::application::report_sink::{ReportSink, TransportError};

/// Default well-known name of the transport service.
pub const DEFAULT_SERVICE: &str = "org.yaptb.btkbservice";

/// Default object path of the transport service.
pub const DEFAULT_OBJECT_PATH: &str = "/org/yaptb/btkbservice";

/// Default interface of the transport service.
pub const DEFAULT_INTERFACE: &str = "org.yaptb.btkbservice";

const SEND_METHOD: &str = "send_keys";
const SWITCH_METHOD: &str = "switch_device";

/// Where the transport service lives on the bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbusTarget {
    pub service: String,
    pub object_path: String,
    pub interface: String,
}

impl Default for DbusTarget {
    fn default() -> Self {
        Self {
            service: DEFAULT_SERVICE.to_string(),
            object_path: DEFAULT_OBJECT_PATH.to_string(),
            interface: DEFAULT_INTERFACE.to_string(),
        }
    }
}

/// [`ReportSink`] calling the transport service over the system bus.
pub struct DbusReportSink {
    proxy: Proxy<'static>,
}

impl DbusReportSink {
    /// Connects to the system bus and binds a proxy to `target`.
    ///
    /// The service does not have to be running yet; calls made while it is
    /// absent fail individually.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Unavailable`] if the system bus cannot be
    /// reached or `target` contains an invalid name or path.
    pub async fn connect(target: &DbusTarget) -> Result<Self, TransportError> {
        let connection = Connection::system()
            .await
            .map_err(|e| TransportError::Unavailable(e.to_string()))?;
        let proxy = Proxy::new(
            &connection,
            target.service.clone(),
            target.object_path.clone(),
            target.interface.clone(),
        )
        .await
        .map_err(|e| TransportError::Unavailable(e.to_string()))?;
        info!(
            "report transport: {} {} {}",
            target.service, target.object_path, target.interface
        );
        Ok(Self { proxy })
    }
}

#[async_trait]
impl ReportSink for DbusReportSink {
    async fn send_report(&self, report: &HidReport) -> Result<(), TransportError> {
        let bytes: Vec<u8> = report.as_bytes().to_vec();
        self.proxy
            .call_method(SEND_METHOD, &(bytes,))
            .await
            .map_err(|e| TransportError::CallFailed {
                method: SEND_METHOD,
                message: e.to_string(),
            })?;
        debug!(%report, "report sent");
        Ok(())
    }

    async fn switch_host(&self) -> Result<(), TransportError> {
        self.proxy
            .call_method(SWITCH_METHOD, &())
            .await
            .map_err(|e| TransportError::CallFailed {
                method: SWITCH_METHOD,
                message: e.to_string(),
            })?;
        Ok(())
    }
}
