use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown colour map '{0}'")]
pub struct UnknownColourMap(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JuliaValueColourMapKind {
    #[default]
    HslPolar,
    PolarProjection,
}

impl JuliaValueColourMapKind {
    pub const ALL: &'static [Self] = &[Self::HslPolar, Self::PolarProjection];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::HslPolar => "HSL polar",
            Self::PolarProjection => "Polar projection",
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::HslPolar => "hsl-polar",
            Self::PolarProjection => "polar-projection",
        }
    }
}

impl std::fmt::Display for JuliaValueColourMapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for JuliaValueColourMapKind {
    type Err = UnknownColourMap;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownColourMap(s.to_owned()))
    }
}
