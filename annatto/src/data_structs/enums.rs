use std::convert::Infallible;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Strand of a genomic interval.
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug, PartialOrd, Ord)]
pub enum Strand {
    /// Forward strand.
    Forward,
    /// Reverse strand.
    Reverse,
    /// Strand not known or not applicable.
    Unknown,
}

impl FromStr for Strand {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Strand::Forward),
            "-" => Ok(Strand::Reverse),
            _ => Ok(Strand::Unknown),
        }
    }
}

impl From<Strand> for char {
    fn from(value: Strand) -> Self {
        match value {
            Strand::Forward => '+',
            Strand::Reverse => '-',
            Strand::Unknown => '.',
        }
    }
}

impl Display for Strand {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

/// Coarse taxonomic classification of the input.
///
/// Only used to select the order in which reference databases are searched
/// during CDS reannotation; it never changes the database set itself.
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "console", derive(clap::ValueEnum))]
pub enum Kingdom {
    #[default]
    Bacteria,
    Archaea,
    Viruses,
}

impl FromStr for Kingdom {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bacteria" => Ok(Kingdom::Bacteria),
            "archaea" => Ok(Kingdom::Archaea),
            "viruses" => Ok(Kingdom::Viruses),
            other => Err(format!("unknown kingdom `{}`", other)),
        }
    }
}

impl Display for Kingdom {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Kingdom::Bacteria => write!(f, "bacteria"),
            Kingdom::Archaea => write!(f, "archaea"),
            Kingdom::Viruses => write!(f, "viruses"),
        }
    }
}

impl Serialize for Kingdom {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer, {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Kingdom {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>, {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(serde::de::Error::custom)
    }
}
