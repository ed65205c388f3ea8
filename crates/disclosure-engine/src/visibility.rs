use tracing::trace;

use crate::level::DisclosureLevel;
use crate::schema::AttributeCatalog;

/// Decide whether an attribute may be disclosed at `level`.
///
/// The fail-open rule lives here and only here: an `attribute_id` the
/// catalog does not know is never hidden.  For known attributes the rule is
/// `level >= threshold`, which makes visibility monotonic in level.
///
/// Total function: no side effects, no error cases.
pub fn is_visible(attribute_id: &str, level: DisclosureLevel, catalog: &AttributeCatalog) -> bool {
    match catalog.get(attribute_id) {
        None => true,
        Some(attribute) => {
            let visible = level >= attribute.threshold;
            trace!(
                attribute = attribute_id,
                level = %level,
                threshold = %attribute.threshold,
                visible,
                "visibility decision"
            );
            visible
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;

    fn level(value: u8) -> DisclosureLevel {
        DisclosureLevel::new(value).unwrap()
    }

    #[test]
    fn visible_at_and_above_threshold() {
        let catalog = default_catalog();
        // ID-04 (biography) has threshold 3.
        assert!(!is_visible("ID-04", level(2), &catalog));
        assert!(is_visible("ID-04", level(3), &catalog));
        assert!(is_visible("ID-04", level(4), &catalog));
    }

    #[test]
    fn monotonic_in_level_for_every_attribute() {
        let catalog = default_catalog();
        for id in catalog.keys() {
            for low in 0..4u8 {
                for high in (low + 1)..=4 {
                    if is_visible(id, level(low), &catalog) {
                        assert!(
                            is_visible(id, level(high), &catalog),
                            "{id} visible at {low} but not at {high}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn unknown_attribute_is_always_visible() {
        let catalog = default_catalog();
        for value in 0..=4 {
            assert!(is_visible("ZZ-99", level(value), &catalog));
        }
        assert!(is_visible("", level(0), &catalog));
    }

    #[test]
    fn full_disclosure_shows_whole_catalog() {
        let catalog = default_catalog();
        for id in catalog.keys() {
            assert!(
                is_visible(id, DisclosureLevel::MAX, &catalog),
                "{id} hidden at full disclosure"
            );
        }
    }

    #[test]
    fn zero_disclosure_hides_everything_above_threshold_zero() {
        let catalog = default_catalog();
        for (id, attribute) in &catalog {
            if attribute.threshold > DisclosureLevel::MIN {
                assert!(
                    !is_visible(id, DisclosureLevel::MIN, &catalog),
                    "{id} visible at zero disclosure"
                );
            }
        }
    }
}
