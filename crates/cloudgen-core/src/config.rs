use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::Bounds;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_count() -> usize {
    512
}
const fn default_stddev() -> f64 {
    0.02
}
const fn default_radius() -> f64 {
    1.0
}
const fn default_major_radius() -> f64 {
    1.0
}
const fn default_minor_radius() -> f64 {
    0.25
}
const fn default_offset() -> f64 {
    1.0
}
const fn default_two_circle_radius() -> f64 {
    0.5
}

// ---------------------------------------------------------------------------
// Strategy
// ---------------------------------------------------------------------------

/// How parameter vectors are chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Independent uniform draws per dimension; exactly `count` points.
    #[default]
    Random,
    /// Evenly spaced half-open grid; `floor(count^(1/N))^N` points.
    Regular,
}

impl Strategy {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Regular => "regular",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(Self::Random),
            "regular" => Ok(Self::Regular),
            other => Err(ConfigError::InvalidValue {
                field: "strategy".into(),
                message: format!("unknown strategy '{other}' (expected random or regular)"),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// ManifoldSpec
// ---------------------------------------------------------------------------

/// Which built-in manifold to sample, with its shape parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ManifoldSpec {
    Circle {
        #[serde(default = "default_radius")]
        radius: f64,
    },
    Sphere {
        #[serde(default = "default_radius")]
        radius: f64,
    },
    Torus {
        #[serde(default = "default_major_radius")]
        major_radius: f64,
        #[serde(default = "default_minor_radius")]
        minor_radius: f64,
    },
    /// Two disjoint circles of equal radius, the second shifted along x.
    TwoCircles {
        #[serde(default = "default_two_circle_radius")]
        radius: f64,
        #[serde(default = "default_offset")]
        offset: f64,
    },
}

impl Default for ManifoldSpec {
    fn default() -> Self {
        Self::Circle {
            radius: default_radius(),
        }
    }
}

impl ManifoldSpec {
    /// Default-parameter spec for a manifold kind name.
    ///
    /// Accepts both `two_circles` and `two-circles`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for unknown names.
    pub fn from_kind(kind: &str) -> Result<Self, ConfigError> {
        match kind {
            "circle" => Ok(Self::Circle {
                radius: default_radius(),
            }),
            "sphere" => Ok(Self::Sphere {
                radius: default_radius(),
            }),
            "torus" => Ok(Self::Torus {
                major_radius: default_major_radius(),
                minor_radius: default_minor_radius(),
            }),
            "two_circles" | "two-circles" => Ok(Self::TwoCircles {
                radius: default_two_circle_radius(),
                offset: default_offset(),
            }),
            other => Err(ConfigError::InvalidValue {
                field: "manifold".into(),
                message: format!("unknown manifold kind '{other}'"),
            }),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Circle { .. } => "circle",
            Self::Sphere { .. } => "sphere",
            Self::Torus { .. } => "torus",
            Self::TwoCircles { .. } => "two_circles",
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let radii = match *self {
            Self::Circle { radius } | Self::Sphere { radius } => vec![("radius", radius)],
            Self::Torus {
                major_radius,
                minor_radius,
            } => vec![
                ("major_radius", major_radius),
                ("minor_radius", minor_radius),
            ],
            Self::TwoCircles { radius, offset } => {
                if !offset.is_finite() {
                    return Err(ConfigError::InvalidValue {
                        field: "offset".into(),
                        message: format!("must be finite, got {offset}"),
                    });
                }
                vec![("radius", radius)]
            }
        };
        for (field, value) in radii {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: field.into(),
                    message: format!("must be finite and > 0, got {value}"),
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GenerationConfig
// ---------------------------------------------------------------------------

/// One point-cloud generation run, loadable from TOML.
///
/// ```toml
/// strategy = "regular"
/// count = 1000
/// stddev = 0.01
/// seed = 42
/// bounds = [[0.0, 6.283185307179586], [0.0, 6.283185307179586]]
///
/// [manifold]
/// kind = "torus"
/// major_radius = 1.0
/// minor_radius = 0.3
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Sampling strategy (default: random).
    #[serde(default)]
    pub strategy: Strategy,

    /// Requested number of points (default: 512). The regular strategy
    /// treats this as an upper target and usually delivers fewer.
    #[serde(default = "default_count")]
    pub count: usize,

    /// Per-coordinate Gaussian noise standard deviation (default: 0.02).
    #[serde(default = "default_stddev")]
    pub stddev: f64,

    /// RNG seed. `None` draws one from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Manifold to sample (default: unit circle).
    #[serde(default)]
    pub manifold: ManifoldSpec,

    /// Parameter bounds. `None` uses the manifold's natural domain.
    #[serde(default)]
    pub bounds: Option<Bounds>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            count: default_count(),
            stddev: default_stddev(),
            seed: None,
            manifold: ManifoldSpec::default(),
            bounds: None,
        }
    }
}

impl GenerationConfig {
    /// Validate configuration. Returns Err on invalid values.
    ///
    /// Bounds arity is checked later against the manifold, by the sampler.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a negative or non-finite
    /// `stddev` or an invalid manifold parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.stddev.is_finite() || self.stddev < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "stddev".into(),
                message: format!("must be finite and >= 0, got {}", self.stddev),
            });
        }
        self.manifold.validate()
    }

    /// Parse from a TOML string and validate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] on malformed input or any
    /// [`validate`](Self::validate) error.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // ---- defaults ----

    #[test]
    fn generation_config_default_values() {
        let cfg = GenerationConfig::default();
        assert_eq!(cfg.strategy, Strategy::Random);
        assert_eq!(cfg.count, 512);
        assert!((cfg.stddev - 0.02).abs() < f64::EPSILON);
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.manifold, ManifoldSpec::Circle { radius: 1.0 });
        assert!(cfg.bounds.is_none());
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg = GenerationConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, GenerationConfig::default());
    }

    // ---- parsing ----

    #[test]
    fn full_toml_parses() {
        let cfg = GenerationConfig::from_toml_str(
            r#"
            strategy = "regular"
            count = 1000
            stddev = 0.0
            seed = 7
            bounds = [[0.0, 1.0], [0.0, 2.0]]

            [manifold]
            kind = "torus"
            major_radius = 2.0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.strategy, Strategy::Regular);
        assert_eq!(cfg.count, 1000);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(
            cfg.manifold,
            ManifoldSpec::Torus {
                major_radius: 2.0,
                minor_radius: 0.25
            }
        );
        assert_eq!(cfg.bounds.unwrap().len(), 2);
    }

    #[test]
    fn two_circles_kind_parses() {
        let cfg = GenerationConfig::from_toml_str("[manifold]\nkind = \"two_circles\"\n").unwrap();
        assert_eq!(cfg.manifold.kind(), "two_circles");
    }

    #[test]
    fn unknown_strategy_is_toml_error() {
        let err = GenerationConfig::from_toml_str("strategy = \"sobol\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn inverted_bounds_is_toml_error() {
        let err = GenerationConfig::from_toml_str("bounds = [[1.0, 0.0]]").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    // ---- validate ----

    #[test]
    fn negative_stddev_rejected() {
        let err = GenerationConfig::from_toml_str("stddev = -0.1").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "stddev"));
    }

    #[test]
    fn non_positive_radius_rejected() {
        let cfg = GenerationConfig {
            manifold: ManifoldSpec::Sphere { radius: 0.0 },
            ..GenerationConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn torus_minor_radius_validated() {
        let cfg = GenerationConfig {
            manifold: ManifoldSpec::Torus {
                major_radius: 1.0,
                minor_radius: f64::NAN,
            },
            ..GenerationConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("minor_radius"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = GenerationConfig::from_file("/nonexistent/cloudgen.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    // ---- Strategy / ManifoldSpec helpers ----

    #[test]
    fn strategy_from_str_round_trips() {
        for s in [Strategy::Random, Strategy::Regular] {
            assert_eq!(s.to_string().parse::<Strategy>().unwrap(), s);
        }
        assert!("grid".parse::<Strategy>().is_err());
    }

    #[test]
    fn manifold_from_kind_accepts_dash_alias() {
        assert_eq!(
            ManifoldSpec::from_kind("two-circles").unwrap(),
            ManifoldSpec::from_kind("two_circles").unwrap()
        );
        assert!(ManifoldSpec::from_kind("klein").is_err());
    }

    #[test]
    fn config_serializes_back_to_toml() {
        let cfg = GenerationConfig {
            seed: Some(3),
            ..GenerationConfig::default()
        };
        let text = toml::to_string(&cfg).unwrap();
        let back = GenerationConfig::from_toml_str(&text).unwrap();
        assert_eq!(back, cfg);
    }
}
