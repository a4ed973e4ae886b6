//! Service catalog helpers: the custom-service rule and the card filter.

use super::visibility::Visibility;

/// Select value that requests a free-text service name.
pub const CUSTOM_SERVICE_VALUE: &str = "custom";

/// Service categories offered by the shop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceType {
    /// Haircut.
    Hair,
    /// Eyebrow shaping.
    Eyebrow,
    /// Beard trim.
    Beard,
    /// Kids haircut.
    KidsHaircut,
    /// Hair treatment.
    HairTreatment,
    /// Free-text service entered by the barber.
    Custom,
}

impl ServiceType {
    /// Every catalog entry in select order.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Hair,
            Self::Eyebrow,
            Self::Beard,
            Self::KidsHaircut,
            Self::HairTreatment,
            Self::Custom,
        ]
    }

    /// Form value for the type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hair => "hair",
            Self::Eyebrow => "eyebrow",
            Self::Beard => "beard",
            Self::KidsHaircut => "kids_haircut",
            Self::HairTreatment => "hair_treatment",
            Self::Custom => CUSTOM_SERVICE_VALUE,
        }
    }

    /// Parse a form value. Matching is exact; unknown values yield `None`.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::all().into_iter().find(|ty| ty.as_str() == value)
    }
}

/// Visibility of the custom-service field for a select value.
#[must_use]
pub fn custom_field_visibility(select_value: &str) -> Visibility {
    if ServiceType::from_value(select_value) == Some(ServiceType::Custom) {
        Visibility::Visible
    } else {
        Visibility::Hidden
    }
}

/// Category filter applied to the service cards. An empty category shows everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceFilter(Option<String>);

impl ServiceFilter {
    /// Build a filter from the raw category string.
    #[must_use]
    pub fn new(category: &str) -> Self {
        if category.is_empty() {
            Self(None)
        } else {
            Self(Some(category.to_string()))
        }
    }

    /// Active category, `None` when every item is shown.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Visibility of an item carrying `item_category` (absent when the attribute is missing).
    #[must_use]
    pub fn visibility_for(&self, item_category: Option<&str>) -> Visibility {
        let shown = match self.category() {
            None => true,
            Some(wanted) => item_category == Some(wanted),
        };
        Visibility::from_hidden_marker(!shown)
    }
}

/// Outcome of applying a [`ServiceFilter`] to the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterSummary {
    /// Items left visible.
    pub shown: usize,
    /// Items hidden by the filter.
    pub hidden: usize,
}

impl FilterSummary {
    /// Count one item in its bucket.
    pub const fn record(&mut self, visibility: Visibility) {
        match visibility {
            Visibility::Visible => self.shown += 1,
            Visibility::Hidden => self.hidden += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_custom_shows_the_field() {
        assert_eq!(custom_field_visibility("custom"), Visibility::Visible);
        assert_eq!(custom_field_visibility("hair"), Visibility::Hidden);
        assert_eq!(custom_field_visibility(""), Visibility::Hidden);
        assert_eq!(custom_field_visibility("Custom"), Visibility::Hidden);
        assert_eq!(custom_field_visibility(" custom"), Visibility::Hidden);
    }

    #[test]
    fn catalog_values_parse_back() {
        for ty in ServiceType::all() {
            assert_eq!(ServiceType::from_value(ty.as_str()), Some(ty));
        }
        assert_eq!(ServiceType::from_value("plumbing"), None);
    }

    #[test]
    fn empty_filter_shows_everything() {
        let filter = ServiceFilter::new("");
        assert_eq!(filter.category(), None);
        assert_eq!(filter.visibility_for(Some("beard")), Visibility::Visible);
        assert_eq!(filter.visibility_for(None), Visibility::Visible);
    }

    #[test]
    fn category_filter_requires_exact_match() {
        let filter = ServiceFilter::new("plumbing");
        assert_eq!(filter.visibility_for(Some("plumbing")), Visibility::Visible);
        assert_eq!(filter.visibility_for(Some("Plumbing")), Visibility::Hidden);
        assert_eq!(filter.visibility_for(Some("hair")), Visibility::Hidden);
        assert_eq!(filter.visibility_for(None), Visibility::Hidden);
    }

    #[test]
    fn summary_counts_buckets() {
        let mut summary = FilterSummary::default();
        summary.record(Visibility::Visible);
        summary.record(Visibility::Hidden);
        summary.record(Visibility::Hidden);
        assert_eq!(summary, FilterSummary { shown: 1, hidden: 2 });
    }
}
