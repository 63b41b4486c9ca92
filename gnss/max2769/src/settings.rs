//! Integration with a host runtime-settings service.
//!
//! The driver does not own a settings framework. It exposes the registration
//! data for its one runtime-tunable setting and a handler entry point for the
//! host to invoke when that setting changes:
//!
//! 1. After [`Driver::init`](crate::Driver::init), register
//!    [`AntennaSelection::SETTING`] with the host settings service.
//! 2. Wire the service's change notification to
//!    [`ChangeHandler::changed`] on the driver.

use crate::antenna::AntennaSelection;

/// Registration descriptor for an enumerated runtime setting.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EnumSetting {
    pub group: &'static str,
    pub name: &'static str,
    pub values: &'static [&'static str],
}

impl AntennaSelection {
    /// Registration descriptor for the antenna selection setting.
    pub const SETTING: EnumSetting = EnumSetting {
        group: "frontend",
        name: "antenna_selection",
        values: &[
            AntennaSelection::Auto.as_str(),
            AntennaSelection::Patch.as_str(),
            AntennaSelection::External.as_str(),
        ],
    };
}

/// Handler invoked by the host settings service with a candidate value.
pub trait ChangeHandler {
    /// Apply `candidate`, returning whether it was accepted.
    async fn changed(&mut self, candidate: &str) -> bool;
}
