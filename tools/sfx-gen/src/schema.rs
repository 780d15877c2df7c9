//! Fixed ZzFX parameter schema
//!
//! The synthesis call takes exactly 20 positional numeric parameters. The
//! order here matches the ZzFX argument list and is also the positional
//! layout of catalog entries, so it must never change at runtime.

/// One named slot in the synthesis parameter vector
pub struct Column {
    pub name: &'static str,
    /// Built-in fallback used for `null` and missing trailing values
    pub default: f64,
}

/// The ZzFX parameter vector, in call order
pub const COLUMNS: [Column; 20] = [
    Column { name: "volume", default: 1.0 },
    Column { name: "randomness", default: 0.05 },
    Column { name: "frequency", default: 220.0 },
    Column { name: "attack", default: 0.0 },
    Column { name: "sustain", default: 0.0 },
    Column { name: "release", default: 0.1 },
    Column { name: "shape", default: 0.0 },
    Column { name: "shapeCurve", default: 1.0 },
    Column { name: "slide", default: 0.0 },
    Column { name: "deltaSlide", default: 0.0 },
    Column { name: "pitchJump", default: 0.0 },
    Column { name: "pitchJumpTime", default: 0.0 },
    Column { name: "repeatTime", default: 0.0 },
    Column { name: "noise", default: 0.0 },
    Column { name: "modulation", default: 0.0 },
    Column { name: "bitCrush", default: 0.0 },
    Column { name: "delay", default: 0.0 },
    Column { name: "sustainVolume", default: 1.0 },
    Column { name: "decay", default: 0.0 },
    Column { name: "tremolo", default: 0.0 },
];

/// Schema width; every normalized record has exactly this many values
pub const WIDTH: usize = COLUMNS.len();

/// Look up a column's position by name
pub fn column_index(name: &str) -> Option<usize> {
    COLUMNS.iter().position(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_width() {
        assert_eq!(WIDTH, 20);
    }

    #[test]
    fn test_column_order_matches_zzfx_call() {
        assert_eq!(COLUMNS[0].name, "volume");
        assert_eq!(COLUMNS[2].name, "frequency");
        assert_eq!(COLUMNS[19].name, "tremolo");
    }

    #[test]
    fn test_column_index() {
        assert_eq!(column_index("volume"), Some(0));
        assert_eq!(column_index("tremolo"), Some(19));
        assert_eq!(column_index("reverb"), None);
    }

    #[test]
    fn test_builtin_defaults() {
        assert_eq!(COLUMNS[column_index("randomness").unwrap()].default, 0.05);
        assert_eq!(COLUMNS[column_index("frequency").unwrap()].default, 220.0);
        assert_eq!(COLUMNS[column_index("sustainVolume").unwrap()].default, 1.0);
    }
}
