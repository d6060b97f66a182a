use crate::core::fractals::julia_value::colour_mapping::{
    kinds::JuliaValueColourMapKind,
    map::JuliaValueColourMap,
    maps::{hsl_polar::JuliaValueHslPolar, polar_projection::JuliaValuePolarProjection},
};

#[must_use]
pub fn julia_value_colour_map_factory(kind: JuliaValueColourMapKind) -> Box<dyn JuliaValueColourMap> {
    match kind {
        JuliaValueColourMapKind::HslPolar => Box::new(JuliaValueHslPolar::new()),
        JuliaValueColourMapKind::PolarProjection => Box::new(JuliaValuePolarProjection::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(
            JuliaValueColourMapKind::ALL.first(),
            Some(&JuliaValueColourMapKind::default())
        );
    }

    #[test]
    fn factory_round_trip_for_all_kinds() {
        for &kind in JuliaValueColourMapKind::ALL {
            let map = julia_value_colour_map_factory(kind);
            assert_eq!(map.kind(), kind);
        }
    }

    #[test]
    fn display_names_match_between_kind_and_concrete() {
        for &kind in JuliaValueColourMapKind::ALL {
            let map = julia_value_colour_map_factory(kind);
            assert_eq!(map.display_name(), kind.display_name());
        }
    }

    #[test]
    fn keys_parse_back_for_all_kinds() {
        for &kind in JuliaValueColourMapKind::ALL {
            assert_eq!(kind.key().parse::<JuliaValueColourMapKind>(), Ok(kind));
        }
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = JuliaValueColourMapKind::ALL
            .iter()
            .map(|k| k.display_name())
            .collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }
}
