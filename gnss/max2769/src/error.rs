use crate::antenna::InvalidAntennaSelection;

/// Errors returned by [`Driver`](crate::Driver) operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError<Spi, Pin> {
    /// The candidate setting value was rejected by validation.
    InvalidAntennaSelection,
    /// The SPI transaction failed.
    Spi(Spi),
    /// Driving one of the control lines failed.
    Pin(Pin),
}

impl<Spi, Pin> From<InvalidAntennaSelection> for DriverError<Spi, Pin> {
    fn from(_: InvalidAntennaSelection) -> Self {
        Self::InvalidAntennaSelection
    }
}
