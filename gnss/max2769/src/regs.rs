use bitfield::bitfield;
use num_traits::FromPrimitive;

/// Register address, transmitted in the low nibble of every wire word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterAddress(pub u8);

impl RegisterAddress {
    pub const CONF1: RegisterAddress = RegisterAddress(0x0);
    pub const CONF2: RegisterAddress = RegisterAddress(0x1);
    pub const CONF3: RegisterAddress = RegisterAddress(0x2);
    pub const PLLCONF: RegisterAddress = RegisterAddress(0x3);
    pub const DIV: RegisterAddress = RegisterAddress(0x4);
    pub const FDIV: RegisterAddress = RegisterAddress(0x5);
    pub const STRM: RegisterAddress = RegisterAddress(0x6);
    pub const CLK: RegisterAddress = RegisterAddress(0x7);
    pub const TEST1: RegisterAddress = RegisterAddress(0x8);
    pub const TEST2: RegisterAddress = RegisterAddress(0x9);

    /// Shadow slot for this address.
    pub const fn idx(self) -> usize {
        (self.0 & 0x0F) as usize
    }
}

/// A configuration register with a fixed address and a 28 bit payload.
pub trait Register: From<u32> + Copy {
    const ADDRESS: RegisterAddress;

    fn payload(&self) -> u32;

    /// The four bytes transmitted for this register, most significant first.
    fn frame(&self) -> [u8; 4] {
        frame(Self::ADDRESS, self.payload())
    }
}

/// Pack a register address and payload into the 32 bit wire word.
///
/// Payload bits above 27 and address bits above 3 are silently discarded.
pub const fn wire_word(address: RegisterAddress, payload: u32) -> u32 {
    ((payload << 4) & 0xFFFF_FFF0) | ((address.0 & 0x0F) as u32)
}

/// The wire word split into bytes in transmission order.
pub const fn frame(address: RegisterAddress, payload: u32) -> [u8; 4] {
    wire_word(address, payload).to_be_bytes()
}

macro_rules! register {
    ($reg:ident, $address:ident) => {
        impl Register for $reg {
            const ADDRESS: RegisterAddress = RegisterAddress::$address;

            fn payload(&self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $reg {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }
    };
}

/// LNA input selection, CONF1 LNAMODE.
#[derive(Clone, Copy, Debug, PartialEq, Eq, FromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LnaMode {
    /// The antenna bias circuit picks the active input.
    Gated = 0b00,
    Lna2 = 0b01,
    Lna1 = 0b10,
    Off = 0b11,
}

/// Mixer pole selection, CONF1 MIXPOLE.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MixerPole {
    Low13Mhz = 0,
    Wide36Mhz = 1,
}

/// IF filter bandwidth, CONF1 FBW.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterBandwidth {
    Bw2_5Mhz = 0b00,
    Bw8Mhz = 0b01,
    Bw4_2Mhz = 0b10,
    Bw18Mhz = 0b11,
}

/// IF filter order, CONF1 F3OR5.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterOrder {
    Fifth = 0,
    Third = 1,
}

/// IF filter center mode, CONF1 FCENX.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterCenter {
    Lowpass = 0,
    Bandpass = 1,
}

/// IF filter gain, CONF1 FGAIN.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterGain {
    /// Filter gain reduced by 6 dB.
    Low = 0,
    High = 1,
}

/// AGC mode control, CONF2 AGCMODE.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgcMode {
    Independent = 0b00,
    Locked = 0b01,
    /// Gain is taken from the CONF3 GAININ field.
    GainIn = 0b10,
}

/// Output data format, CONF2 FORMAT.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Unsigned = 0b00,
    SignMagnitude = 0b01,
    TwosComplement = 0b10,
}

/// ADC quantization depth, CONF2 BITS.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdcBits {
    One = 0b00,
    OneAndHalf = 0b01,
    Two = 0b10,
    Three = 0b11,
}

/// Output driver configuration, CONF2 DRVCFG.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputDriver {
    Cmos = 0b00,
    LimitedDifferential = 0b01,
    Analog = 0b10,
}

/// Reference clock scaling for the output clock, PLLCONF REFDIV.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefDiv {
    Mul2 = 0b00,
    Div4 = 0b01,
    Div2 = 0b10,
    Div1 = 0b11,
}

/// Crystal oscillator/buffer current programming, PLLCONF IXTAL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum XtalCurrent {
    OscNormal = 0b00,
    BufferNormal = 0b01,
    OscMedium = 0b10,
    OscHigh = 0b11,
}

/// Charge pump current selection, PLLCONF ICP.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CpCurrent {
    HalfMa = 0,
    OneMa = 1,
}

bitfield! {
    /// CONF1, front-end block enables and IF filter configuration.
    #[derive(Clone, Copy)]
    pub struct Conf1(u32);
    pub chipen, set_chipen: 27;
    pub idle, set_idle: 26;
    pub ilna1, set_ilna1: 25, 22;
    pub ilna2, set_ilna2: 21, 20;
    pub ilo, set_ilo: 19, 18;
    pub imix, set_imix: 17, 16;
    pub mixpole, set_mixpole: 15, 15;
    lnamode_bits, set_lnamode_bits: 14, 13;
    pub mixen, set_mixen: 12;
    pub anten, set_anten: 11;
    pub fcen, set_fcen: 10, 5;
    pub fbw, set_fbw: 4, 3;
    pub f3or5, set_f3or5: 2, 2;
    pub fcenx, set_fcenx: 1, 1;
    pub fgain, set_fgain: 0, 0;
}

register!(Conf1, CONF1);

impl Conf1 {
    pub fn lnamode(&self) -> LnaMode {
        LnaMode::from_u32(self.lnamode_bits()).unwrap_or(LnaMode::Gated)
    }

    pub fn set_lnamode(&mut self, value: LnaMode) {
        self.set_lnamode_bits(value as u32);
    }
}

bitfield! {
    /// CONF2, AGC and output interface configuration.
    #[derive(Clone, Copy)]
    pub struct Conf2(u32);
    pub iqen, set_iqen: 27;
    pub gainref, set_gainref: 26, 15;
    pub agcmode, set_agcmode: 14, 13;
    pub format, set_format: 12, 11;
    pub adc_bits, set_adc_bits: 10, 9;
    pub drvcfg, set_drvcfg: 8, 7;
    pub loen, set_loen: 6;
    pub dieid, _: 5, 4;
}

register!(Conf2, CONF2);

bitfield! {
    /// CONF3, gain, enables and the unused streaming block.
    #[derive(Clone, Copy)]
    pub struct Conf3(u32);
    pub gainin, set_gainin: 27, 22;
    pub fslowen, set_fslowen: 21;
    pub hiloaden, set_hiloaden: 20;
    pub adcen, set_adcen: 19;
    pub drven, set_drven: 18;
    pub fofsten, set_fofsten: 17;
    pub filten, set_filten: 16;
    pub fhipen, set_fhipen: 15;
    pub pgaien, set_pgaien: 13;
    pub pgaqen, set_pgaqen: 12;
    pub strmen, _: 11;
    pub strmstart, _: 10;
    pub strmstop, _: 9;
    pub strmcount, _: 8, 7;
    pub strmbits, _: 6, 5;
    pub stampen, _: 4;
    pub timesyncen, _: 3;
    pub datsyncen, _: 2;
    pub strmrst, _: 1;
}

register!(Conf3, CONF3);

impl Conf3 {
    /// Bit 14 must be programmed to one.
    pub const RESERVED: u32 = 1 << 14;
}

bitfield! {
    /// PLLCONF, synthesizer and reference oscillator configuration.
    #[derive(Clone, Copy)]
    pub struct PllConf(u32);
    pub vcoen, set_vcoen: 27;
    pub ivco, set_ivco: 26;
    pub refouten, set_refouten: 24;
    pub refdiv, set_refdiv: 22, 21;
    pub ixtal, set_ixtal: 20, 19;
    pub xtalcap, set_xtalcap: 18, 14;
    pub ldmux, set_ldmux: 13, 10;
    pub icp, set_icp: 9, 9;
    pub pwrsav, set_pwrsav: 8;
    pub intpll, set_intpll: 3;
    pub cptest, set_cptest: 2, 1;
}

register!(PllConf, PLLCONF);

impl PllConf {
    /// Bit 23 must be programmed to one.
    pub const RESERVED: u32 = 1 << 23;
}

bitfield! {
    /// DIV, PLL integer and reference division ratios.
    #[derive(Clone, Copy)]
    pub struct Div(u32);
    pub ndiv, set_ndiv: 27, 13;
    pub rdiv, set_rdiv: 12, 3;
}

register!(Div, DIV);

bitfield! {
    /// FDIV, PLL fractional division ratio.
    #[derive(Clone, Copy)]
    pub struct Fdiv(u32);
    pub fdiv, set_fdiv: 27, 8;
}

register!(Fdiv, FDIV);

impl Fdiv {
    /// Bits 7:0 must be programmed to 0x70.
    pub const RESERVED: u32 = 0x70;
}

bitfield! {
    /// CLK, output clock fractional divider.
    #[derive(Clone, Copy)]
    pub struct Clk(u32);
    pub l_cnt, set_l_cnt: 27, 16;
    pub m_cnt, set_m_cnt: 15, 4;
    pub fclkin, set_fclkin: 3;
    pub adcclk, set_adcclk: 2;
    pub serclk, set_serclk: 1;
    pub mode, set_mode: 0;
}

register!(Clk, CLK);
