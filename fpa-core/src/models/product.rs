use std::{fmt::Display, str::FromStr};

/// The four fuel products whose prices are tracked on every record.
///
/// Any external vocabulary must be mapped onto exactly these tags. Parsing
/// an unknown tag is an error, never an empty result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ProductType {
    /// Premium motor spirit (petrol)
    Pms,
    /// Automotive gas oil (diesel)
    Ago,
    /// Dual purpose kerosene
    Dpk,
    /// Liquefied petroleum gas
    Lpg,
}

impl ProductType {
    /// Every product, in the order multi-product results are reported.
    pub const ALL: [ProductType; 4] = [Self::Pms, Self::Ago, Self::Dpk, Self::Lpg];

    /// The lowercase tag used on the wire and in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pms => "pms",
            Self::Ago => "ago",
            Self::Dpk => "dpk",
            Self::Lpg => "lpg",
        }
    }
}

impl Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductType {
    type Err = ProductTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pms" => Ok(Self::Pms),
            "ago" => Ok(Self::Ago),
            "dpk" => Ok(Self::Dpk),
            "lpg" => Ok(Self::Lpg),
            _ => Err(ProductTypeError(s.to_owned())),
        }
    }
}

/// The error produced when a tag is not one of the four known products.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid product \"{0}\", must be one of pms, ago, dpk, lpg")]
pub struct ProductTypeError(pub String);
