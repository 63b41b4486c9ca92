use crate::regs::{
    AdcBits, AgcMode, Clk, Conf1, Conf2, Conf3, CpCurrent, Div, Fdiv, FilterBandwidth,
    FilterCenter, FilterGain, FilterOrder, LnaMode, MixerPole, OutputDriver, OutputFormat, PllConf,
    RefDiv, XtalCurrent,
};

/// Startup configuration for every register programmed by
/// [`Driver::init`](crate::Driver::init).
///
/// One composition method per register turns the named fields into the
/// register's 28 bit payload. The default selects the board's fixed frequency
/// plan: a 16.368 MHz reference divided to a 1.023 MHz comparison frequency,
/// the integer divider at 1554 (LO at 1589.742 MHz) and the sample clock at
/// 32 x 1.023 MHz.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    // CONF1
    pub chip_enable: bool,
    pub idle: bool,
    pub lna1_current: u8,
    pub lna2_current: u8,
    pub lo_current: u8,
    pub mixer_current: u8,
    pub mixer_pole: MixerPole,
    pub lna_mode: LnaMode,
    pub mixer_enable: bool,
    pub antenna_bias: bool,
    pub if_center: u8,
    pub if_bandwidth: FilterBandwidth,
    pub filter_order: FilterOrder,
    pub filter_center: FilterCenter,
    pub filter_gain: FilterGain,
    // CONF2
    pub iq_enable: bool,
    pub agc_gain_ref: u16,
    pub agc_mode: AgcMode,
    pub output_format: OutputFormat,
    pub adc_bits: AdcBits,
    pub output_driver: OutputDriver,
    pub lo_buffer_enable: bool,
    // CONF3
    pub input_gain: u8,
    pub adc_fs_low: bool,
    pub high_load: bool,
    pub adc_enable: bool,
    pub driver_enable: bool,
    pub offset_cancel: bool,
    pub filter_enable: bool,
    pub highpass_coupling: bool,
    pub pga_i_enable: bool,
    pub pga_q_enable: bool,
    // PLLCONF
    pub vco_enable: bool,
    pub vco_high_current: bool,
    pub ref_out_enable: bool,
    pub ref_div: RefDiv,
    pub xtal_current: XtalCurrent,
    pub xtal_cap: u8,
    pub ld_mux: u8,
    pub cp_current: CpCurrent,
    pub power_save: bool,
    pub integer_pll: bool,
    pub cp_test: u8,
    // DIV
    pub n_div: u16,
    pub r_div: u16,
    // FDIV
    pub frac_div: u32,
    // CLK
    pub l_count: u16,
    pub m_count: u16,
    pub fclk_in: bool,
    pub adc_clk: bool,
    pub serial_clk: bool,
    pub clk_mode: bool,
}

impl Config {
    pub fn conf1(&self) -> Conf1 {
        let mut r = Conf1(0);
        r.set_chipen(self.chip_enable);
        r.set_idle(self.idle);
        r.set_ilna1(self.lna1_current as u32);
        r.set_ilna2(self.lna2_current as u32);
        r.set_ilo(self.lo_current as u32);
        r.set_imix(self.mixer_current as u32);
        r.set_mixpole(self.mixer_pole as u32);
        r.set_lnamode(self.lna_mode);
        r.set_mixen(self.mixer_enable);
        r.set_anten(self.antenna_bias);
        r.set_fcen(self.if_center as u32);
        r.set_fbw(self.if_bandwidth as u32);
        r.set_f3or5(self.filter_order as u32);
        r.set_fcenx(self.filter_center as u32);
        r.set_fgain(self.filter_gain as u32);
        r
    }

    pub fn conf2(&self) -> Conf2 {
        let mut r = Conf2(0);
        r.set_iqen(self.iq_enable);
        r.set_gainref(self.agc_gain_ref as u32);
        r.set_agcmode(self.agc_mode as u32);
        r.set_format(self.output_format as u32);
        r.set_adc_bits(self.adc_bits as u32);
        r.set_drvcfg(self.output_driver as u32);
        r.set_loen(self.lo_buffer_enable);
        r
    }

    pub fn conf3(&self) -> Conf3 {
        let mut r = Conf3(Conf3::RESERVED);
        r.set_gainin(self.input_gain as u32);
        r.set_fslowen(self.adc_fs_low);
        r.set_hiloaden(self.high_load);
        r.set_adcen(self.adc_enable);
        r.set_drven(self.driver_enable);
        r.set_fofsten(self.offset_cancel);
        r.set_filten(self.filter_enable);
        r.set_fhipen(self.highpass_coupling);
        r.set_pgaien(self.pga_i_enable);
        r.set_pgaqen(self.pga_q_enable);
        r
    }

    pub fn pllconf(&self) -> PllConf {
        let mut r = PllConf(PllConf::RESERVED);
        r.set_vcoen(self.vco_enable);
        r.set_ivco(self.vco_high_current);
        r.set_refouten(self.ref_out_enable);
        r.set_refdiv(self.ref_div as u32);
        r.set_ixtal(self.xtal_current as u32);
        r.set_xtalcap(self.xtal_cap as u32);
        r.set_ldmux(self.ld_mux as u32);
        r.set_icp(self.cp_current as u32);
        r.set_pwrsav(self.power_save);
        r.set_intpll(self.integer_pll);
        r.set_cptest(self.cp_test as u32);
        r
    }

    pub fn div(&self) -> Div {
        let mut r = Div(0);
        r.set_ndiv(self.n_div as u32);
        r.set_rdiv(self.r_div as u32);
        r
    }

    pub fn fdiv(&self) -> Fdiv {
        let mut r = Fdiv(Fdiv::RESERVED);
        r.set_fdiv(self.frac_div);
        r
    }

    pub fn clk(&self) -> Clk {
        let mut r = Clk(0);
        r.set_l_cnt(self.l_count as u32);
        r.set_m_cnt(self.m_count as u32);
        r.set_fclkin(self.fclk_in);
        r.set_adcclk(self.adc_clk);
        r.set_serclk(self.serial_clk);
        r.set_mode(self.clk_mode);
        r
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            // CONF1
            chip_enable: true,
            idle: false,
            lna1_current: 15,
            lna2_current: 3,
            lo_current: 3,
            mixer_current: 3,
            mixer_pole: MixerPole::Wide36Mhz,
            lna_mode: LnaMode::Gated,
            mixer_enable: true,
            antenna_bias: true,
            if_center: 0,
            if_bandwidth: FilterBandwidth::Bw18Mhz,
            filter_order: FilterOrder::Fifth,
            filter_center: FilterCenter::Lowpass,
            filter_gain: FilterGain::High,
            // CONF2
            iq_enable: true,
            agc_gain_ref: 170, // optimal for 2 bit quantization
            agc_mode: AgcMode::Independent,
            output_format: OutputFormat::SignMagnitude,
            adc_bits: AdcBits::Two,
            output_driver: OutputDriver::Cmos,
            lo_buffer_enable: true,
            // CONF3
            input_gain: 58,
            adc_fs_low: true,
            high_load: false,
            adc_enable: true,
            driver_enable: true,
            offset_cancel: true,
            filter_enable: true,
            highpass_coupling: true,
            pga_i_enable: true,
            pga_q_enable: true,
            // PLLCONF
            vco_enable: true,
            vco_high_current: false,
            ref_out_enable: true,
            ref_div: RefDiv::Mul2, // 32 x 1.023 MHz sample clock
            xtal_current: XtalCurrent::BufferNormal,
            xtal_cap: 0b10000,
            ld_mux: 0,
            cp_current: CpCurrent::OneMa,
            power_save: false,
            integer_pll: true,
            cp_test: 0,
            // DIV
            n_div: 1554, // LO at 1554 x 1.023 MHz
            r_div: 16,
            // FDIV
            frac_div: 0x80000,
            // CLK
            l_count: 1,
            m_count: 4095,
            fclk_in: false,
            adc_clk: false,
            serial_clk: true,
            clk_mode: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regs::Register;

    #[test]
    fn default_conf1_payload() {
        assert_eq!(0x0BFF_9819, Config::default().conf1().payload());
    }

    #[test]
    fn default_conf2_payload() {
        assert_eq!(0x0855_0C40, Config::default().conf2().payload());
    }

    #[test]
    fn default_conf3_payload() {
        assert_eq!(0x0EAF_F000, Config::default().conf3().payload());
    }

    #[test]
    fn default_pllconf_payload() {
        assert_eq!(0x098C_0208, Config::default().pllconf().payload());
    }

    #[test]
    fn default_div_payload() {
        assert_eq!(0x00C2_4080, Config::default().div().payload());
    }

    #[test]
    fn default_fdiv_payload() {
        assert_eq!(0x0800_0070, Config::default().fdiv().payload());
    }

    #[test]
    fn default_clk_payload() {
        assert_eq!(0x0001_FFF2, Config::default().clk().payload());
    }

    #[test]
    fn default_selects_gated_lna_mode() {
        assert_eq!(LnaMode::Gated, Config::default().conf1().lnamode());
    }

    #[test]
    fn reserved_bits_survive_composition() {
        let config = Config::default();
        assert_eq!(Conf3::RESERVED, config.conf3().payload() & Conf3::RESERVED);
        assert_eq!(
            PllConf::RESERVED,
            config.pllconf().payload() & PllConf::RESERVED
        );
        assert_eq!(Fdiv::RESERVED, config.fdiv().payload() & Fdiv::RESERVED);
    }
}
