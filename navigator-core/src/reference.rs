//! Reference routes as delivered by a directions service.
//!
//! The shape follows the common directions payload:
//! `routes[].legs[].steps[]`, where each step carries HTML `instructions`
//! plus `distance` and `duration` objects with `text` and `value` fields.
//! Only the first leg of the first route alternative is scored.
//!
//! Decoding is lenient: missing fields and values of the wrong JSON type fall
//! back to their defaults instead of failing the whole payload.

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
#[cfg(feature = "serde")]
use thiserror::Error;

/// A textual measurement paired with its numeric value.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TextValue {
    /// Human-readable form, e.g. `0.2 km`.
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "lenient"))]
    pub text: String,
    /// Numeric value in the service's base unit (metres or seconds).
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "lenient"))]
    pub value: f64,
}

impl TextValue {
    /// Construct a measurement from its text and value.
    #[must_use]
    pub fn new(text: impl Into<String>, value: f64) -> Self {
        Self {
            text: text.into(),
            value,
        }
    }
}

/// One turn-by-turn instruction.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RouteStep {
    /// Instruction text, possibly containing inline markup.
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "lenient"))]
    pub instructions: String,
    /// Distance covered by the step.
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "lenient"))]
    pub distance: TextValue,
    /// Time taken by the step.
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "lenient"))]
    pub duration: TextValue,
}

impl RouteStep {
    /// Construct a step from its instruction and human-readable measurements.
    ///
    /// Numeric values are left at zero; the scorer only consults text.
    #[must_use]
    pub fn new(
        instructions: impl Into<String>,
        distance: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            instructions: instructions.into(),
            distance: TextValue::new(distance, 0.0),
            duration: TextValue::new(duration, 0.0),
        }
    }
}

/// An ordered sequence of steps between two waypoints.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RouteLeg {
    /// Steps in travel order.
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "lenient"))]
    pub steps: Vec<RouteStep>,
}

/// One suggested route.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RouteAlternative {
    /// Legs in travel order.
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "lenient"))]
    pub legs: Vec<RouteLeg>,
}

/// The full directions result used as ground truth for scoring.
///
/// # Examples
/// ```
/// use navigator_core::{ReferenceRoute, RouteStep};
///
/// let reference = ReferenceRoute::from_steps(vec![RouteStep::new(
///     "Head <b>north</b> on <b>Main St</b>",
///     "0.3 km",
///     "1 min",
/// )]);
/// assert_eq!(reference.primary_steps().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReferenceRoute {
    /// Route alternatives; the first is the primary suggestion.
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "lenient"))]
    pub routes: Vec<RouteAlternative>,
}

impl ReferenceRoute {
    /// Build a single-alternative, single-leg route from steps.
    #[must_use]
    pub fn from_steps(steps: Vec<RouteStep>) -> Self {
        Self {
            routes: vec![RouteAlternative {
                legs: vec![RouteLeg { steps }],
            }],
        }
    }

    /// Return the first leg of the first alternative, if present.
    #[must_use]
    pub fn primary_leg(&self) -> Option<&RouteLeg> {
        self.routes.first().and_then(|route| route.legs.first())
    }

    /// Return the steps of the primary leg, or an empty slice.
    #[must_use]
    pub fn primary_steps(&self) -> &[RouteStep] {
        self.primary_leg()
            .map(|leg| leg.steps.as_slice())
            .unwrap_or_default()
    }
}

/// Errors raised while decoding a reference route.
#[cfg(feature = "serde")]
#[derive(Debug, Error)]
pub enum ReferenceRouteError {
    /// The payload was not valid JSON.
    #[error("failed to decode reference route JSON")]
    Decode {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(feature = "serde")]
impl ReferenceRoute {
    /// Decode a reference route from a JSON string.
    ///
    /// # Errors
    /// Returns [`ReferenceRouteError::Decode`] when the input is not JSON.
    /// Structurally unexpected JSON decodes to defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ReferenceRouteError> {
        serde_json::from_str(json).map_err(|source| ReferenceRouteError::Decode { source })
    }

    /// Decode a reference route from a JSON reader.
    ///
    /// # Errors
    /// Returns [`ReferenceRouteError::Decode`] when the input is not JSON or
    /// cannot be read.
    pub fn from_reader(reader: impl std::io::Read) -> Result<Self, ReferenceRouteError> {
        serde_json::from_reader(reader).map_err(|source| ReferenceRouteError::Decode { source })
    }
}

/// Deserialise any JSON value, substituting the default when it does not fit
/// the target type.
#[cfg(feature = "serde")]
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}
