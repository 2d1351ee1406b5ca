use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeasureError {
    #[error("Unknown volume unit: '{0}'")]
    UnknownUnit(String),
}

/// Alcohol by volume, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Abv(Decimal);

impl Abv {
    pub fn from_percent(percent: Decimal) -> Self {
        Abv(percent)
    }

    /// US proof is exactly twice the ABV percentage.
    pub fn from_proof(proof: Decimal) -> Self {
        Abv(proof / Decimal::TWO)
    }

    pub fn percent(self) -> Decimal {
        self.0
    }

    pub fn proof(self) -> Decimal {
        self.0 * Decimal::TWO
    }
}

impl fmt::Display for Abv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0.normalize())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolumeUnit {
    #[serde(rename = "ml")]
    Milliliters,
    #[serde(rename = "l")]
    Liters,
    #[serde(rename = "fl_oz")]
    FluidOunces,
}

impl fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VolumeUnit::Milliliters => write!(f, "ml"),
            VolumeUnit::Liters => write!(f, "l"),
            VolumeUnit::FluidOunces => write!(f, "fl_oz"),
        }
    }
}

impl std::str::FromStr for VolumeUnit {
    type Err = MeasureError;

    /// Accepts the spellings found on labels, including the common OCR
    /// misread of "ml" as "mI".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '.')
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "ml" | "mi" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => {
                Ok(VolumeUnit::Milliliters)
            }
            "l" | "liter" | "liters" | "litre" | "litres" => Ok(VolumeUnit::Liters),
            "oz" | "floz" | "fl_oz" | "fluidounce" | "fluidounces" => Ok(VolumeUnit::FluidOunces),
            _ => Err(MeasureError::UnknownUnit(s.to_string())),
        }
    }
}

/// Declared volume of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetContents {
    pub amount: Decimal,
    pub unit: VolumeUnit,
}

impl NetContents {
    pub fn new(amount: Decimal, unit: VolumeUnit) -> Self {
        Self { amount, unit }
    }

    pub fn milliliters(amount: u32) -> Self {
        Self { amount: Decimal::from(amount), unit: VolumeUnit::Milliliters }
    }
}

impl fmt::Display for NetContents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self.unit {
            VolumeUnit::Milliliters => "mL",
            VolumeUnit::Liters => "L",
            VolumeUnit::FluidOunces => "fl oz",
        };
        write!(f, "{} {unit}", self.amount.normalize())
    }
}
