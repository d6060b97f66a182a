use crate::core::data::field_params::FieldParams;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::escape_time::escape_time_field;
use crate::core::fractals::julia_value::julia_value_field;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field kind '{0}'")]
pub struct UnknownFieldKind(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    #[default]
    EscapeTime,
    JuliaValue,
}

impl FieldKind {
    pub const ALL: &'static [Self] = &[Self::EscapeTime, Self::JuliaValue];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::EscapeTime => "Escape time",
            Self::JuliaValue => "Julia value",
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::EscapeTime => "escape-time",
            Self::JuliaValue => "julia-value",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for FieldKind {
    type Err = UnknownFieldKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownFieldKind(s.to_owned()))
    }
}

/// Renders whichever field `kind` names.
#[must_use]
pub fn render_field(kind: FieldKind, params: &FieldParams) -> PixelBuffer {
    match kind {
        FieldKind::EscapeTime => escape_time_field(params),
        FieldKind::JuliaValue => julia_value_field(params),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::image_size::ImageSize;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(FieldKind::ALL.first(), Some(&FieldKind::default()));
    }

    #[test]
    fn keys_parse_back_for_all_kinds() {
        for &kind in FieldKind::ALL {
            assert_eq!(kind.key().parse::<FieldKind>(), Ok(kind));
        }
        assert_eq!("JULIA-VALUE".parse::<FieldKind>(), Ok(FieldKind::JuliaValue));
        assert!("buddhabrot".parse::<FieldKind>().is_err());
    }

    #[test]
    fn render_field_dispatches_by_kind() {
        let params = FieldParams {
            image_size: ImageSize::new(3, 2),
            max_iterations: 10,
            iterations: 2,
            ..FieldParams::default()
        };

        assert_eq!(render_field(FieldKind::EscapeTime, &params), escape_time_field(&params));
        assert_eq!(render_field(FieldKind::JuliaValue, &params), julia_value_field(&params));
    }
}
