//! Quantization modes and their index variants.
//!
//! Every mode maps to one copy of the same index:
//!
//! | Mode   | Index variant        | Rescoring        |
//! |--------|----------------------|------------------|
//! | `none` | `<base>`             | -                |
//! | `int8` | `<base>_int8`        | -                |
//! | `int4` | `<base>_int4`        | oversample x2.0  |
//! | `bbq`  | `<base>_bbq`         | -                |

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Vector precision scheme of an index variant.
///
/// `None` is the full-fidelity baseline. The default is `Int8`, the variant
/// compared when the caller does not pick one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantizationMode {
    /// Full-fidelity float vectors
    None,
    /// 8-bit scalar quantization
    #[default]
    Int8,
    /// 4-bit scalar quantization
    Int4,
    /// Better Binary Quantization
    Bbq,
}

impl QuantizationMode {
    /// All modes, baseline first
    pub const ALL: [QuantizationMode; 4] = [
        QuantizationMode::None,
        QuantizationMode::Int8,
        QuantizationMode::Int4,
        QuantizationMode::Bbq,
    ];

    /// Suffix appended to the base index name, if any
    pub fn index_suffix(&self) -> Option<&'static str> {
        match self {
            QuantizationMode::None => None,
            QuantizationMode::Int8 => Some("int8"),
            QuantizationMode::Int4 => Some("int4"),
            QuantizationMode::Bbq => Some("bbq"),
        }
    }

    /// Name of the index variant holding vectors in this precision
    pub fn index_name(&self, base: &str) -> String {
        match self.index_suffix() {
            Some(suffix) => format!("{}_{}", base, suffix),
            None => base.to_string(),
        }
    }

    /// Whether this is the full-fidelity baseline
    pub fn is_baseline(&self) -> bool {
        matches!(self, QuantizationMode::None)
    }

    /// Whether queries against this variant rescore an oversampled candidate set
    pub fn uses_rescoring(&self) -> bool {
        matches!(self, QuantizationMode::Int4)
    }

    /// Short label for display
    pub fn description(&self) -> &'static str {
        match self {
            QuantizationMode::None => "Full fidelity (float32)",
            QuantizationMode::Int8 => "int8 scalar quantization",
            QuantizationMode::Int4 => "int4 scalar quantization (rescored)",
            QuantizationMode::Bbq => "Better Binary Quantization",
        }
    }
}

impl fmt::Display for QuantizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantizationMode::None => write!(f, "none"),
            QuantizationMode::Int8 => write!(f, "int8"),
            QuantizationMode::Int4 => write!(f, "int4"),
            QuantizationMode::Bbq => write!(f, "bbq"),
        }
    }
}

impl std::str::FromStr for QuantizationMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(QuantizationMode::None),
            "int8" => Ok(QuantizationMode::Int8),
            "int4" => Ok(QuantizationMode::Int4),
            "bbq" => Ok(QuantizationMode::Bbq),
            _ => Err(DomainError::InvalidQuantization(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_int8() {
        assert_eq!(QuantizationMode::default(), QuantizationMode::Int8);
    }

    #[test]
    fn test_index_names() {
        assert_eq!(QuantizationMode::None.index_name("properties"), "properties");
        assert_eq!(
            QuantizationMode::Int8.index_name("properties"),
            "properties_int8"
        );
        assert_eq!(
            QuantizationMode::Int4.index_name("properties"),
            "properties_int4"
        );
        assert_eq!(QuantizationMode::Bbq.index_name("properties"), "properties_bbq");
    }

    #[test]
    fn test_only_int4_rescores() {
        let rescoring: Vec<_> = QuantizationMode::ALL
            .iter()
            .filter(|m| m.uses_rescoring())
            .collect();
        assert_eq!(rescoring, vec![&QuantizationMode::Int4]);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("none".parse::<QuantizationMode>(), Ok(QuantizationMode::None));
        assert_eq!("INT8".parse::<QuantizationMode>(), Ok(QuantizationMode::Int8));
        assert_eq!(" int4 ".parse::<QuantizationMode>(), Ok(QuantizationMode::Int4));
        assert_eq!("bbq".parse::<QuantizationMode>(), Ok(QuantizationMode::Bbq));
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "fp16".parse::<QuantizationMode>().unwrap_err();
        assert_eq!(err, DomainError::InvalidQuantization("fp16".to_string()));
        assert!("".parse::<QuantizationMode>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for mode in QuantizationMode::ALL {
            assert_eq!(mode.to_string().parse::<QuantizationMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&QuantizationMode::Bbq).unwrap(),
            "\"bbq\""
        );
        let mode: QuantizationMode = serde_json::from_str("\"int4\"").unwrap();
        assert_eq!(mode, QuantizationMode::Int4);
    }
}
