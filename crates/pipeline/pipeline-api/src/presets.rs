//! Named configurations for the four reference instruments.

use crate::config::{PreprocessConfig, PreprocessMode};
use decomposition_spi::DecompositionKind;
use pipeline_spi::{PipelineError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// NASDAQ composite, one year, 400 returns for CEEMDAN.
    NasdaqCeemdan,
    /// Bitcoin, six months, 500 returns for EMD.
    BitcoinEmd,
    /// VIX, six months, 256 z-scored levels for the synchrosqueezed CWT.
    VixSsq,
    /// S&P 500, two years, 1024 returns for a db4 wavelet decomposition.
    Sp500Dwt,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::NasdaqCeemdan,
        Preset::BitcoinEmd,
        Preset::VixSsq,
        Preset::Sp500Dwt,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::NasdaqCeemdan => "nasdaq-ceemdan",
            Preset::BitcoinEmd => "bitcoin-emd",
            Preset::VixSsq => "vix-ssq",
            Preset::Sp500Dwt => "sp500-dwt",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Preset::NasdaqCeemdan => "NASDAQ composite daily log returns for CEEMDAN",
            Preset::BitcoinEmd => "Bitcoin daily log returns for EMD",
            Preset::VixSsq => "Normalized VIX levels for the synchrosqueezed wavelet transform",
            Preset::Sp500Dwt => "S&P 500 daily log returns for a 5-level db4 wavelet decomposition",
        }
    }

    /// Decomposition the preset's signal is prepared for.
    pub fn kind(&self) -> DecompositionKind {
        match self {
            Preset::NasdaqCeemdan => DecompositionKind::Ceemdan,
            Preset::BitcoinEmd => DecompositionKind::Emd,
            Preset::VixSsq => DecompositionKind::SynchrosqueezedCwt,
            Preset::Sp500Dwt => DecompositionKind::Dwt,
        }
    }

    /// Window length is the decomposition's preferred window.
    pub fn config(&self) -> PreprocessConfig {
        let (symbol, lookback_days, mode) = match self {
            Preset::NasdaqCeemdan => ("^IXIC", 365, PreprocessMode::LogReturn),
            Preset::BitcoinEmd => ("BTC-USD", 180, PreprocessMode::LogReturn),
            Preset::VixSsq => ("^VIX", 180, PreprocessMode::ZScore),
            Preset::Sp500Dwt => ("^GSPC", 730, PreprocessMode::LogReturn),
        };
        PreprocessConfig::new(symbol, lookback_days, self.kind().preferred_window(), mode)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let known: Vec<&str> = Preset::ALL.iter().map(|p| p.name()).collect();
                PipelineError::invalid_parameter(
                    "preset",
                    format!("unknown preset '{}', expected one of {}", s, known.join(", ")),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_presets_validate() {
        for preset in Preset::ALL {
            assert!(preset.config().validate().is_ok(), "{}", preset);
        }
    }

    #[test]
    fn test_only_vix_uses_z_score() {
        let z: Vec<Preset> = Preset::ALL
            .into_iter()
            .filter(|p| p.config().mode == PreprocessMode::ZScore)
            .collect();
        assert_eq!(z, vec![Preset::VixSsq]);
    }

    #[test]
    fn test_window_lengths() {
        let lengths: Vec<usize> = Preset::ALL.iter().map(|p| p.config().target_length).collect();
        assert_eq!(lengths, vec![400, 500, 256, 1024]);
    }

    #[test]
    fn test_window_follows_decomposition_kind() {
        for preset in Preset::ALL {
            assert_eq!(preset.config().target_length, preset.kind().preferred_window());
        }
        assert_eq!(Preset::VixSsq.kind(), DecompositionKind::SynchrosqueezedCwt);
        assert!(!Preset::Sp500Dwt.kind().is_additive());
    }

    #[test]
    fn test_parse_round_trip_names() {
        for preset in Preset::ALL {
            assert_eq!(preset.name().parse::<Preset>().unwrap(), preset);
        }
        assert!("dax-emd".parse::<Preset>().is_err());
    }
}
