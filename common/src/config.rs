use crate::conversion::ConversionMode;

#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// How committed addresses are converted.
    pub mode: ConversionMode,
    pub no_banner: bool,
    /// 0 prints everything, 1 drops headers, 2 prints results only.
    pub quiet: u8,
}
