//! Water Sources and Mixing
//!
//! ## Overview
//!
//! The base of every nutrient solution is its water. The engine knows three
//! ways to describe it:
//!
//! 1. **Mixed sources**: a list of [`WaterSource`] entries, each with its own
//!    pH, EC, ions and volume, blended by [`WaterMixer`]
//! 2. **Preset water type**: tap or reverse osmosis ([`WaterType`])
//! 3. **Custom profile**: a manually entered [`CustomWaterProfile`]
//!
//! ## Mixing Physics
//!
//! pH is a log-scale quantity. Averaging pH values directly would claim that
//! equal parts pH 4 and pH 8 give pH 6, when the hydrogen-ion concentration
//! of the blend is dominated by the acidic part. Mixing therefore happens in
//! concentration space:
//!
//! ```text
//! H_i   = 10^(-pH_i)
//! H_mix = Σ(H_i × V_i) / Σ V_i
//! pH    = -log10(H_mix)
//! ```
//!
//! EC and every ion are volume-weighted linearly.
//!
//! ## Staged Sources
//!
//! A source at volume 0 stays in the list but carries no weight. When every
//! source is at 0 there is nothing to mix and [`WaterMixer::mix`] returns
//! `None`; callers fall back to a preset or the custom profile.
//!
//! ```rust
//! use nutricalc_core::water::{WaterMixer, WaterSourceList};
//!
//! let sources = WaterSourceList::default();
//! let mixed = WaterMixer::mix(sources.as_slice()).unwrap();
//!
//! // Tap at 100 L, RO staged at 0 L
//! assert_eq!(mixed.total_volume, 100.0);
//! assert!((mixed.ph - 7.5).abs() < 1e-9);
//! ```

mod mixer;
mod source;

pub use mixer::{MixedWaterProfile, WaterMixer};
pub use source::{
    CustomWaterProfile, WaterField, WaterPreset, WaterSource, WaterSourceList, WaterType,
};
