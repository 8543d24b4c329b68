//! Display helpers shared by both schemes

use crate::{
    constants::classification::{GAUGE_HEADROOM_FACTOR, GAUGE_MAX_PERCENT},
    traits::Validatable,
};

use super::Band;

/// Fill level of a gauge whose full scale sits 20% above the band maximum
///
/// Returns 0 without a band, for a zero maximum, or for a non-finite value.
pub fn gauge_percent(value: f64, band: Option<Band>) -> f64 {
    let Some(band) = band else {
        return 0.0;
    };
    if band.max == 0.0 || !value.is_valid() {
        return 0.0;
    }

    let full_scale = band.max * GAUGE_HEADROOM_FACTOR;
    (value / full_scale * 100.0).min(GAUGE_MAX_PERCENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauge_scales_to_headroom() {
        let band = Band::new(50.0, 100.0);
        assert_eq!(gauge_percent(60.0, Some(band)), 50.0);
        assert_eq!(gauge_percent(120.0, Some(band)), 100.0);
        assert_eq!(gauge_percent(500.0, Some(band)), 100.0);
    }

    #[test]
    fn gauge_degenerate_inputs() {
        assert_eq!(gauge_percent(10.0, None), 0.0);
        assert_eq!(gauge_percent(10.0, Some(Band::new(0.0, 0.0))), 0.0);
        assert_eq!(gauge_percent(f64::NAN, Some(Band::new(1.0, 2.0))), 0.0);
    }
}
