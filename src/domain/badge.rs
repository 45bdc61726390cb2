use percent_encoding::percent_decode_str;
use std::collections::HashSet;
use std::time::Duration;

pub const DEFAULT_COLOUR: &str = "blue";
pub const DEFAULT_LABEL_COLOUR: &str = "grey";
pub const DEFAULT_STYLE: &str = "flat";
pub const DEFAULT_LABEL: &str = "Visitors";
pub const DEFAULT_LOGO_COLOUR: &str = "white";

pub const CODE_REPOSITORY: &str = "https://github.com/Nathan13888/VisitorBadgeReloaded";
pub const COUNT_PLACEHOLDER: &str = "CNT";
/// How far `Date` and `Expires` are pushed from now on a cacheable badge.
pub const BADGE_CACHE_WINDOW: Duration = Duration::from_secs(10 * 60);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeOptions {
    pub label: String,
    pub message: String,
    pub colour: String,
    pub label_colour: String,
    pub style: String,
    pub logo: String,
    pub logo_colour: String,
}

/// Query string of `/badge`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeQuery {
    pub page_id: String,
    pub color: String,
    pub lcolor: String,
    pub style: String,
    pub text: String,
    pub logo: String,
    pub logo_color: String,
    pub cache: String,
    pub custom: String,
    pub non_unique: String,
}

impl Default for BadgeQuery {
    fn default() -> Self {
        Self {
            page_id: String::new(),
            color: DEFAULT_COLOUR.into(),
            lcolor: DEFAULT_LABEL_COLOUR.into(),
            style: DEFAULT_STYLE.into(),
            text: DEFAULT_LABEL.into(),
            logo: String::new(),
            logo_color: DEFAULT_LOGO_COLOUR.into(),
            cache: String::new(),
            custom: String::new(),
            non_unique: String::new(),
        }
    }
}

impl BadgeQuery {
    /// Builds the query from decoded pairs. The first occurrence of a key wins
    /// and unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut q = Self::default();
        let mut seen = HashSet::new();
        for (k, v) in pairs {
            let slot = match k.as_str() {
                "page_id" => &mut q.page_id,
                "color" => &mut q.color,
                "lcolor" => &mut q.lcolor,
                "style" => &mut q.style,
                "text" => &mut q.text,
                "logo" => &mut q.logo,
                "logoColor" => &mut q.logo_color,
                "cache" => &mut q.cache,
                "custom" => &mut q.custom,
                "non-unique" => &mut q.non_unique,
                _ => continue,
            };
            if seen.insert(k) {
                *slot = v;
            }
        }
        q
    }

    /// Any non-empty `cache` value means read the count without bumping it.
    pub fn bypass_cache(&self) -> bool { !self.cache.is_empty() }

    pub fn non_unique(&self) -> bool { !self.non_unique.is_empty() }

    /// Badge message for `count`, honouring a `custom` template.
    pub fn message(&self, count: &str) -> String {
        if self.custom.is_empty() {
            count.to_string()
        } else {
            unescape(&self.custom).replacen(COUNT_PLACEHOLDER, count, 1)
        }
    }

    pub fn options(&self, count: &str) -> BadgeOptions {
        BadgeOptions {
            label: self.text.clone(),
            message: self.message(count),
            colour: self.color.clone(),
            label_colour: self.lcolor.clone(),
            style: self.style.clone(),
            logo: self.logo.clone(),
            logo_colour: self.logo_color.clone(),
        }
    }
}

/// Second round of query unescaping applied to `custom`, so a template sent
/// double-encoded still renders as plain text. Malformed escapes stay as-is.
fn unescape(raw: &str) -> String {
    percent_decode_str(&raw.replace('+', " ")).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> BadgeQuery {
        BadgeQuery::from_pairs(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())))
    }

    #[test]
    fn defaults_fill_missing_params() {
        let q = query(&[("page_id", "p")]);
        let opts = q.options("7");
        assert_eq!(opts.label, DEFAULT_LABEL);
        assert_eq!(opts.message, "7");
        assert_eq!(opts.colour, DEFAULT_COLOUR);
        assert_eq!(opts.label_colour, DEFAULT_LABEL_COLOUR);
        assert_eq!(opts.style, DEFAULT_STYLE);
        assert_eq!(opts.logo, "");
        assert_eq!(opts.logo_colour, DEFAULT_LOGO_COLOUR);
        assert!(!q.bypass_cache());
        assert!(!q.non_unique());
    }

    #[test]
    fn custom_replaces_first_placeholder_only() {
        let q = query(&[("page_id", "p"), ("custom", "CNT views (CNT)")]);
        assert_eq!(q.message("42"), "42 views (CNT)");

        let q = query(&[("page_id", "p"), ("custom", "no placeholder")]);
        assert_eq!(q.message("42"), "no placeholder");
    }

    #[test]
    fn custom_is_unescaped_once_more() {
        let q = query(&[("custom", "CNT%20hits")]);
        assert_eq!(q.message("2"), "2 hits");

        let q = query(&[("custom", "CNT+views+%2B1")]);
        assert_eq!(q.message("2"), "2 views +1");

        let q = query(&[("custom", "100%zz CNT")]);
        assert_eq!(q.message("2"), "100%zz 2");
    }

    #[test]
    fn first_repeated_value_wins() {
        let q = query(&[("page_id", "a"), ("page_id", "b"), ("style", "plastic"), ("style", "flat")]);
        assert_eq!(q.page_id, "a");
        assert_eq!(q.style, "plastic");
    }

    #[test]
    fn flags_renamed_fields_and_unknown_keys() {
        let q = query(&[("page_id", "p"), ("cache", "1"), ("non-unique", "yes"), ("logoColor", "red"), ("utm", "x")]);
        assert!(q.bypass_cache());
        assert!(q.non_unique());
        assert_eq!(q.logo_color, "red");
    }
}
