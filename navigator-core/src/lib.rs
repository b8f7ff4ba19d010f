//! Core text analysis for the Blind Navigator route game.
//!
//! A player describes a route in free text; this crate turns that text and the
//! directions service's reference route into comparable features:
//!
//! - [`normalize`] extracts direction keywords, street phrases, landmarks,
//!   distance tokens, and a word count from a description.
//! - [`extract_steps`] strips markup from the reference route's primary leg
//!   and assigns each step a single canonical [`Direction`].
//!
//! Every matcher runs in a single linear pass over its input, so
//! user-controlled text cannot trigger pathological matching cost.
//!
//! # Examples
//!
//! ```
//! use navigator_core::{ReferenceRoute, RouteStep, extract_steps, normalize, reference_streets};
//!
//! let user = normalize("Go north on Main Street");
//! let reference = ReferenceRoute::from_steps(vec![RouteStep::new(
//!     "Head <b>north</b> on <b>Main Street</b>",
//!     "0.4 km",
//!     "1 min",
//! )]);
//! let steps = extract_steps(&reference);
//! assert_eq!(user.streets, reference_streets(&steps));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod direction;
mod markup;
mod normalize;
mod reference;
mod scan;
mod step;
pub mod vocabulary;

pub use direction::Direction;
pub use markup::strip_markup;
pub use normalize::{NormalizedRoute, extract_distances, extract_streets, normalize, normalize_opt};
#[cfg(feature = "serde")]
pub use reference::ReferenceRouteError;
pub use reference::{ReferenceRoute, RouteAlternative, RouteLeg, RouteStep, TextValue};
pub use step::{RouteStepFeature, extract_steps, reference_directions, reference_streets};
