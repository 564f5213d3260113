//! Configuration types for a PAYE tax regime.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, plus the built-in
//! statutory regime.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Metadata about the tax regime.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegimeMetadata {
    /// Short code identifying the regime (e.g., "NG-PITA-2011").
    pub code: String,
    /// The human-readable name of the regime.
    pub name: String,
    /// The version or effective date of the regime.
    pub version: String,
    /// URL to the governing legislation.
    pub source_url: String,
}

/// Statutory relief and deduction parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReliefConfig {
    /// Fixed CRA floor compared against the percentage alternative.
    pub cra_floor: Decimal,
    /// Flat share of annual gross always granted as CRA.
    pub cra_gross_rate: Decimal,
    /// Share of annual gross compared against the floor.
    pub cra_alternative_rate: Decimal,
    /// NHF contribution rate applied to basic salary.
    pub nhf_rate: Decimal,
    /// Multiplier used to annualize monthly figures, and the divisor that
    /// turns annual tax into the monthly figure. Twelve in every shipped
    /// regime.
    pub months_per_year: u32,
    /// Reference to the provision granting CRA.
    pub cra_clause: String,
    /// Reference to the provision for pension contributions.
    pub pension_clause: String,
    /// Reference to the provision for NHF contributions.
    pub nhf_clause: String,
}

impl ReliefConfig {
    /// Checks the parameters keep every computation finite.
    ///
    /// `months_per_year` must be positive, the CRA floor non-negative and
    /// every rate within `[0, 1]`.
    pub fn validate(&self) -> EngineResult<()> {
        if self.months_per_year == 0 {
            return Err(EngineError::InvalidReliefConfig {
                message: "months_per_year must be positive".to_string(),
            });
        }

        if self.cra_floor < Decimal::ZERO {
            return Err(EngineError::InvalidReliefConfig {
                message: format!("cra_floor must not be negative, got {}", self.cra_floor),
            });
        }

        let rates = [
            ("cra_gross_rate", self.cra_gross_rate),
            ("cra_alternative_rate", self.cra_alternative_rate),
            ("nhf_rate", self.nhf_rate),
        ];
        for (name, rate) in rates {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(EngineError::InvalidReliefConfig {
                    message: format!("{} {} is outside [0, 1]", name, rate),
                });
            }
        }

        Ok(())
    }
}

/// One slice of the progressive band table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxBand {
    /// Width of the slice. `None` marks the unbounded top band.
    #[serde(default)]
    pub width: Option<Decimal>,
    /// Rate applied to income within the slice.
    pub rate: Decimal,
}

impl TaxBand {
    /// A band covering a fixed width of income.
    pub fn bounded(width: Decimal, rate: Decimal) -> Self {
        Self {
            width: Some(width),
            rate,
        }
    }

    /// The band that absorbs all remaining income.
    pub fn unbounded(rate: Decimal) -> Self {
        Self { width: None, rate }
    }
}

/// Band table configuration file structure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BandTable {
    /// Reference to the schedule defining the bands.
    pub clause: String,
    /// Bands in the order they consume taxable income.
    pub bands: Vec<TaxBand>,
}

impl BandTable {
    /// Checks the table can be applied greedily.
    ///
    /// Every band except the last must have a positive width, the last band
    /// must be unbounded, and every rate must lie in `[0, 1]`.
    pub fn validate(&self) -> EngineResult<()> {
        let Some((last, leading)) = self.bands.split_last() else {
            return Err(EngineError::InvalidBandTable {
                message: "at least one band is required".to_string(),
            });
        };

        for (index, band) in leading.iter().enumerate() {
            match band.width {
                Some(width) if width > Decimal::ZERO => {}
                Some(width) => {
                    return Err(EngineError::InvalidBandTable {
                        message: format!("band {} has non-positive width {}", index + 1, width),
                    });
                }
                None => {
                    return Err(EngineError::InvalidBandTable {
                        message: format!("only the last band may be unbounded, band {} is", index + 1),
                    });
                }
            }
        }

        if last.width.is_some() {
            return Err(EngineError::InvalidBandTable {
                message: "last band must be unbounded".to_string(),
            });
        }

        for (index, band) in self.bands.iter().enumerate() {
            if band.rate < Decimal::ZERO || band.rate > Decimal::ONE {
                return Err(EngineError::InvalidBandTable {
                    message: format!("band {} rate {} is outside [0, 1]", index + 1, band.rate),
                });
            }
        }

        Ok(())
    }

    /// Combined width of all bounded bands.
    pub fn bounded_width(&self) -> Decimal {
        self.bands.iter().filter_map(|b| b.width).sum()
    }
}

/// A complete tax regime: metadata, reliefs and band table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxRegime {
    metadata: RegimeMetadata,
    reliefs: ReliefConfig,
    bands: BandTable,
}

impl TaxRegime {
    /// Creates a regime from its component parts, validating the relief
    /// parameters and the band table.
    pub fn new(
        metadata: RegimeMetadata,
        reliefs: ReliefConfig,
        bands: BandTable,
    ) -> EngineResult<Self> {
        reliefs.validate()?;
        bands.validate()?;
        Ok(Self {
            metadata,
            reliefs,
            bands,
        })
    }

    /// The Personal Income Tax (Amendment) Act 2011 regime.
    ///
    /// CRA of 20% of gross plus the higher of ₦200,000 or 1% of gross, NHF at
    /// 2.5% of basic salary, and the six-band table of the Sixth Schedule.
    pub fn statutory() -> Self {
        Self {
            metadata: RegimeMetadata {
                code: "NG-PITA-2011".to_string(),
                name: "Personal Income Tax (Amendment) Act 2011".to_string(),
                version: "2011-06-14".to_string(),
                source_url: "https://www.firs.gov.ng/".to_string(),
            },
            reliefs: ReliefConfig {
                cra_floor: Decimal::new(200_000, 0),
                cra_gross_rate: Decimal::new(20, 2),
                cra_alternative_rate: Decimal::new(1, 2),
                nhf_rate: Decimal::new(25, 3),
                months_per_year: 12,
                cra_clause: "PITA s.33(1)".to_string(),
                pension_clause: "PRA 2014 s.4".to_string(),
                nhf_clause: "NHF Act s.4".to_string(),
            },
            bands: BandTable {
                clause: "PITA Sixth Schedule".to_string(),
                bands: vec![
                    TaxBand::bounded(Decimal::new(300_000, 0), Decimal::new(7, 2)),
                    TaxBand::bounded(Decimal::new(300_000, 0), Decimal::new(11, 2)),
                    TaxBand::bounded(Decimal::new(500_000, 0), Decimal::new(15, 2)),
                    TaxBand::bounded(Decimal::new(500_000, 0), Decimal::new(19, 2)),
                    TaxBand::bounded(Decimal::new(1_600_000, 0), Decimal::new(21, 2)),
                    TaxBand::unbounded(Decimal::new(24, 2)),
                ],
            },
        }
    }

    /// Returns the regime metadata.
    pub fn metadata(&self) -> &RegimeMetadata {
        &self.metadata
    }

    /// Returns the relief parameters.
    pub fn reliefs(&self) -> &ReliefConfig {
        &self.reliefs
    }

    /// Returns the band table.
    pub fn bands(&self) -> &BandTable {
        &self.bands
    }
}

impl Default for TaxRegime {
    fn default() -> Self {
        Self::statutory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_statutory_band_table_is_valid() {
        assert!(TaxRegime::statutory().bands().validate().is_ok());
    }

    #[test]
    fn test_statutory_bounded_width_is_3_2_million() {
        assert_eq!(
            TaxRegime::statutory().bands().bounded_width(),
            dec("3200000")
        );
    }

    #[test]
    fn test_statutory_relief_constants() {
        let regime = TaxRegime::statutory();
        let reliefs = regime.reliefs();
        assert_eq!(reliefs.cra_floor, dec("200000"));
        assert_eq!(reliefs.cra_gross_rate, dec("0.20"));
        assert_eq!(reliefs.cra_alternative_rate, dec("0.01"));
        assert_eq!(reliefs.nhf_rate, dec("0.025"));
        assert_eq!(reliefs.months_per_year, 12);
    }

    #[test]
    fn test_statutory_reliefs_are_valid() {
        assert!(TaxRegime::statutory().reliefs().validate().is_ok());
    }

    #[test]
    fn test_zero_months_per_year_is_rejected() {
        let reliefs = ReliefConfig {
            months_per_year: 0,
            ..TaxRegime::statutory().reliefs().clone()
        };
        match reliefs.validate() {
            Err(EngineError::InvalidReliefConfig { message }) => {
                assert!(message.contains("months_per_year"));
            }
            other => panic!("Expected InvalidReliefConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_cra_floor_is_rejected() {
        let reliefs = ReliefConfig {
            cra_floor: dec("-1"),
            ..TaxRegime::statutory().reliefs().clone()
        };
        assert!(matches!(
            reliefs.validate(),
            Err(EngineError::InvalidReliefConfig { .. })
        ));
    }

    #[test]
    fn test_relief_rates_outside_unit_interval_are_rejected() {
        let statutory = TaxRegime::statutory().reliefs().clone();
        let cases = [
            ReliefConfig { nhf_rate: dec("-0.025"), ..statutory.clone() },
            ReliefConfig { cra_gross_rate: dec("1.2"), ..statutory.clone() },
            ReliefConfig { cra_alternative_rate: dec("-0.01"), ..statutory.clone() },
        ];
        for reliefs in cases {
            match reliefs.validate() {
                Err(EngineError::InvalidReliefConfig { message }) => {
                    assert!(message.contains("outside [0, 1]"));
                }
                other => panic!("Expected InvalidReliefConfig, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_regime_new_validates_reliefs() {
        let regime = TaxRegime::statutory();
        let result = TaxRegime::new(
            regime.metadata().clone(),
            ReliefConfig {
                months_per_year: 0,
                ..regime.reliefs().clone()
            },
            regime.bands().clone(),
        );
        assert!(matches!(
            result,
            Err(EngineError::InvalidReliefConfig { .. })
        ));
    }

    #[test]
    fn test_empty_band_table_is_rejected() {
        let table = BandTable {
            clause: "test".to_string(),
            bands: vec![],
        };
        assert!(matches!(
            table.validate(),
            Err(EngineError::InvalidBandTable { .. })
        ));
    }

    #[test]
    fn test_bounded_last_band_is_rejected() {
        let table = BandTable {
            clause: "test".to_string(),
            bands: vec![TaxBand::bounded(dec("1000"), dec("0.1"))],
        };
        match table.validate() {
            Err(EngineError::InvalidBandTable { message }) => {
                assert!(message.contains("last band"));
            }
            other => panic!("Expected InvalidBandTable, got {:?}", other),
        }
    }

    #[test]
    fn test_unbounded_middle_band_is_rejected() {
        let table = BandTable {
            clause: "test".to_string(),
            bands: vec![
                TaxBand::unbounded(dec("0.1")),
                TaxBand::unbounded(dec("0.2")),
            ],
        };
        match table.validate() {
            Err(EngineError::InvalidBandTable { message }) => {
                assert!(message.contains("band 1"));
            }
            other => panic!("Expected InvalidBandTable, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_width_band_is_rejected() {
        let table = BandTable {
            clause: "test".to_string(),
            bands: vec![
                TaxBand::bounded(Decimal::ZERO, dec("0.1")),
                TaxBand::unbounded(dec("0.2")),
            ],
        };
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_rate_above_one_is_rejected() {
        let table = BandTable {
            clause: "test".to_string(),
            bands: vec![TaxBand::unbounded(dec("1.5"))],
        };
        match table.validate() {
            Err(EngineError::InvalidBandTable { message }) => {
                assert!(message.contains("outside [0, 1]"));
            }
            other => panic!("Expected InvalidBandTable, got {:?}", other),
        }
    }

    #[test]
    fn test_regime_new_validates_bands() {
        let regime = TaxRegime::statutory();
        let result = TaxRegime::new(
            regime.metadata().clone(),
            regime.reliefs().clone(),
            BandTable {
                clause: "test".to_string(),
                bands: vec![],
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_band_deserializes_without_width() {
        let band: TaxBand = serde_yaml::from_str("rate: \"0.24\"").unwrap();
        assert_eq!(band, TaxBand::unbounded(dec("0.24")));
    }
}
