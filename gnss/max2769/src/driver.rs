use crate::{
    antenna::AntennaSelection,
    config::Config,
    error::DriverError,
    regs::{Conf1, Register, RegisterAddress},
    settings::ChangeHandler,
};
use embedded_hal::digital::OutputPin;
use embedded_hal_async::spi::SpiDevice;

/// Number of logical registers in the device register map.
pub const REGISTER_COUNT: usize = 10;

/// Configuration driver for the MAX2769 front-end.
///
/// The device is write only: there is no register read-back, so the driver
/// keeps a shadow of the payload last written to each register and rewrites a
/// whole register from its shadow whenever a single field changes.
///
/// The three control lines must be configured as push-pull outputs by the
/// platform HAL before the driver is constructed (PGM pulled down, NSHDN and
/// NIDLE pulled up).
pub struct Driver<Spi, Pgm, Shdn, Idle> {
    spi: Spi,
    pgm: Pgm,
    nshdn: Shdn,
    nidle: Idle,
    shadow: [u32; REGISTER_COUNT],
}

impl<Spi, Pgm, Shdn, Idle> Driver<Spi, Pgm, Shdn, Idle>
where
    Spi: SpiDevice,
    Pgm: OutputPin,
    Shdn: OutputPin<Error = Pgm::Error>,
    Idle: OutputPin<Error = Pgm::Error>,
{
    pub const fn new(spi: Spi, pgm: Pgm, nshdn: Shdn, nidle: Idle) -> Self {
        Self {
            spi,
            pgm,
            nshdn,
            nidle,
            shadow: [0; REGISTER_COUNT],
        }
    }

    /// Drive the control lines to their operating levels and program the
    /// startup configuration.
    ///
    /// Call once at startup, before any other operation on the device. The
    /// registers are written in the fixed order CONF1..CLK; later writes rely
    /// on PLL and clock state established by earlier ones.
    pub async fn init(
        &mut self,
        config: &Config,
    ) -> Result<(), DriverError<Spi::Error, Pgm::Error>> {
        // PGM low selects SPI programming, NSHDN and NIDLE are active low.
        self.pgm.set_low().map_err(DriverError::Pin)?;
        self.nshdn.set_high().map_err(DriverError::Pin)?;
        self.nidle.set_high().map_err(DriverError::Pin)?;

        self.write_reg(config.conf1()).await?;
        self.write_reg(config.conf2()).await?;
        self.write_reg(config.conf3()).await?;
        self.write_reg(config.pllconf()).await?;
        self.write_reg(config.div()).await?;
        self.write_reg(config.fdiv()).await?;
        self.write_reg(config.clk()).await?;

        Ok(())
    }

    /// Write a register value to the chip, updating its shadow first.
    ///
    /// One bus transaction per call; chip select is released by the
    /// `SpiDevice` implementation even if the transfer fails. The device
    /// offers no acknowledgment, so the write is not verified or retried.
    pub async fn write_reg<R: Register>(
        &mut self,
        reg: R,
    ) -> Result<(), DriverError<Spi::Error, Pgm::Error>> {
        self.shadow[R::ADDRESS.idx()] = reg.payload();
        self.spi.write(&reg.frame()).await.map_err(DriverError::Spi)
    }

    /// The payload last written to `R`.
    pub fn shadow<R: Register>(&self) -> R {
        R::from(self.shadow[R::ADDRESS.idx()])
    }

    /// The payload last written to the register at `address`.
    pub fn shadow_raw(&self, address: RegisterAddress) -> u32 {
        self.shadow[address.idx()]
    }

    /// Select the LNA input, rewriting CONF1 with all other fields preserved.
    pub async fn set_antenna(
        &mut self,
        selection: AntennaSelection,
    ) -> Result<(), DriverError<Spi::Error, Pgm::Error>> {
        let mut conf1 = self.shadow::<Conf1>();
        conf1.set_lnamode(selection.lna_mode());
        self.write_reg(conf1).await
    }

    /// Change entry point for the `frontend.antenna_selection` setting.
    ///
    /// An unrecognized candidate is rejected without touching the shadow set
    /// or the bus; the device keeps its previous configuration.
    pub async fn antenna_changed(
        &mut self,
        candidate: &str,
    ) -> Result<AntennaSelection, DriverError<Spi::Error, Pgm::Error>> {
        let selection = candidate.parse::<AntennaSelection>()?;
        self.set_antenna(selection).await?;
        #[cfg(feature = "defmt")]
        defmt::info!("antenna selection changed to {}", selection.as_str());
        Ok(selection)
    }
}

impl<Spi, Pgm, Shdn, Idle> ChangeHandler for Driver<Spi, Pgm, Shdn, Idle>
where
    Spi: SpiDevice,
    Pgm: OutputPin,
    Shdn: OutputPin<Error = Pgm::Error>,
    Idle: OutputPin<Error = Pgm::Error>,
{
    async fn changed(&mut self, candidate: &str) -> bool {
        self.antenna_changed(candidate).await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regs::{Clk, Conf2, Conf3, Div, Fdiv, LnaMode, PllConf};
    use embedded_hal_async::spi::Operation;
    use embedded_hal_async_mocks::{
        digital::MockOutputPin,
        spi::{MockSpiDevice, SpiError},
    };
    use mockall::Sequence;

    const LNAMODE_MASK: u32 = 0x3 << 13;

    const INIT_WORDS: [u32; 7] = [
        0xBFF9_8190, // CONF1
        0x8550_C401, // CONF2
        0xEAFF_0002, // CONF3
        0x98C0_2083, // PLLCONF
        0x0C24_0804, // DIV
        0x8000_0705, // FDIV
        0x001F_FF27, // CLK
    ];

    fn expect_write(spi: &mut MockSpiDevice<u8>, seq: &mut Sequence, word: u32) {
        let frame = word.to_be_bytes();
        spi.expect_transaction()
            .withf(move |operations| {
                operations.len() == 1
                    && match &operations[0] {
                        Operation::Write(tx) => tx[..] == frame[..],
                        _ => false,
                    }
            })
            .times(1)
            .in_sequence(seq)
            .returning(|_| Ok(()));
    }

    async fn initialized_driver() -> Driver<MockSpiDevice<u8>, MockOutputPin, MockOutputPin, MockOutputPin>
    {
        let mut seq = Sequence::new();
        let mut spi = MockSpiDevice::new();
        let mut pgm = MockOutputPin::new();
        let mut nshdn = MockOutputPin::new();
        let mut nidle = MockOutputPin::new();

        pgm.expect_set_low()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));
        nshdn
            .expect_set_high()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));
        nidle
            .expect_set_high()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));
        for word in INIT_WORDS {
            expect_write(&mut spi, &mut seq, word);
        }

        let mut driver = Driver::new(spi, pgm, nshdn, nidle);
        driver.init(&Config::default()).await.unwrap();
        driver
    }

    #[tokio::test]
    async fn init_writes_startup_configuration_in_order() {
        // Given/When
        let driver = initialized_driver().await;

        // Then
        assert_eq!(0x0BFF_9819, driver.shadow::<Conf1>().payload());
        assert_eq!(0x0855_0C40, driver.shadow::<Conf2>().payload());
        assert_eq!(0x0EAF_F000, driver.shadow::<Conf3>().payload());
        assert_eq!(0x098C_0208, driver.shadow::<PllConf>().payload());
        assert_eq!(0x00C2_4080, driver.shadow::<Div>().payload());
        assert_eq!(0x0800_0070, driver.shadow::<Fdiv>().payload());
        assert_eq!(0x0001_FFF2, driver.shadow::<Clk>().payload());
        assert_eq!(0, driver.shadow_raw(RegisterAddress::STRM));
        assert_eq!(LnaMode::Gated, driver.shadow::<Conf1>().lnamode());
    }

    #[tokio::test]
    async fn antenna_change_rewrites_conf1_only() {
        // Given
        let mut driver = initialized_driver().await;
        let before = driver.shadow_raw(RegisterAddress::CONF1);
        let mut seq = Sequence::new();
        expect_write(&mut driver.spi, &mut seq, 0xBFFD_8190);

        // When
        let selection = driver.antenna_changed("Patch").await.unwrap();

        // Then
        assert_eq!(AntennaSelection::Patch, selection);
        let conf1 = driver.shadow::<Conf1>();
        assert_eq!(LnaMode::Lna1, conf1.lnamode());
        assert_eq!(before & !LNAMODE_MASK, conf1.payload() & !LNAMODE_MASK);
    }

    #[tokio::test]
    async fn rejected_candidate_leaves_device_untouched() {
        // Given
        let mut driver = initialized_driver().await;
        let before = driver.shadow_raw(RegisterAddress::CONF1);

        // When
        let result = driver.antenna_changed("Banana").await;

        // Then
        assert_eq!(Err(DriverError::InvalidAntennaSelection), result);
        assert_eq!(before, driver.shadow_raw(RegisterAddress::CONF1));
    }

    #[tokio::test]
    async fn repeated_change_repeats_the_same_word() {
        // Given
        let mut driver = initialized_driver().await;
        let mut seq = Sequence::new();
        expect_write(&mut driver.spi, &mut seq, 0xBFFB_8190);
        expect_write(&mut driver.spi, &mut seq, 0xBFFB_8190);

        // When
        driver.antenna_changed("External").await.unwrap();
        driver.antenna_changed("External").await.unwrap();

        // Then
        assert_eq!(LnaMode::Lna2, driver.shadow::<Conf1>().lnamode());
    }

    #[tokio::test]
    async fn changing_back_to_auto_restores_the_startup_word() {
        // Given
        let mut driver = initialized_driver().await;
        let mut seq = Sequence::new();
        expect_write(&mut driver.spi, &mut seq, 0xBFFB_8190);
        expect_write(&mut driver.spi, &mut seq, 0xBFF9_8190);

        // When
        driver.antenna_changed("External").await.unwrap();
        driver.antenna_changed("Auto").await.unwrap();

        // Then
        assert_eq!(0x0BFF_9819, driver.shadow_raw(RegisterAddress::CONF1));
        assert_eq!(LnaMode::Gated, driver.shadow::<Conf1>().lnamode());
    }

    #[tokio::test]
    async fn spi_errors_propagate() {
        // Given
        let mut driver = initialized_driver().await;
        driver
            .spi
            .expect_transaction()
            .times(1)
            .returning(|_| Err(SpiError));

        // When
        let result = driver.antenna_changed("Patch").await;

        // Then
        assert_eq!(Err(DriverError::Spi(SpiError)), result);
    }

    #[tokio::test]
    async fn change_handler_reports_acceptance() {
        // Given
        let mut driver = initialized_driver().await;
        let mut seq = Sequence::new();
        expect_write(&mut driver.spi, &mut seq, 0xBFFD_8190);

        // When/Then
        assert!(ChangeHandler::changed(&mut driver, "Patch").await);
        assert!(!ChangeHandler::changed(&mut driver, "Banana").await);
    }
}
