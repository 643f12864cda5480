/// A purely visual CSS filter applied to the preview. Never touches the
/// bytes sent for analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayFilter {
    pub name: &'static str,
    pub css: &'static str,
}

pub static DISPLAY_FILTERS: [DisplayFilter; 3] = [
    DisplayFilter {
        name: "Original",
        css: "none",
    },
    DisplayFilter {
        name: "X-Ray",
        css: "saturate(0) contrast(1.75) brightness(1.2) invert(1)",
    },
    DisplayFilter {
        name: "Thermal",
        css: "hue-rotate(180deg) saturate(200%) brightness(80%)",
    },
];

/// Inline style for the main preview image.
pub fn preview_style(filter: &DisplayFilter, zoom: f64, contrast: f64) -> String {
    // `none` cannot be combined with other filter functions.
    if filter.css == "none" {
        return compare_style(zoom, contrast);
    }
    format!(
        "transform: scale({}); filter: contrast({}%) {}; transition: transform 0.3s ease-out, filter 0.3s ease-out;",
        zoom, contrast, filter.css
    )
}

/// Inline style for the unfiltered half shown in compare mode.
pub fn compare_style(zoom: f64, contrast: f64) -> String {
    format!(
        "transform: scale({}); filter: contrast({}%); transition: transform 0.3s ease-out, filter 0.3s ease-out;",
        zoom, contrast
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_filter_is_unmodified() {
        assert_eq!(DISPLAY_FILTERS[0].css, "none");
        assert_eq!(DISPLAY_FILTERS.len(), 3);
    }

    #[test]
    fn preview_style_combines_contrast_and_filter() {
        let style = preview_style(&DISPLAY_FILTERS[2], 1.5, 120.0);
        assert!(style.contains("transform: scale(1.5)"));
        assert!(style.contains("filter: contrast(120%) hue-rotate(180deg) saturate(200%) brightness(80%)"));
    }

    #[test]
    fn original_filter_keeps_css_valid() {
        let style = preview_style(&DISPLAY_FILTERS[0], 2.0, 80.0);
        assert!(style.contains("filter: contrast(80%);"));
        assert!(!style.contains("none"));
    }

    #[test]
    fn compare_style_has_no_display_filter() {
        let style = compare_style(1.0, 100.0);
        assert!(style.contains("filter: contrast(100%);"));
        assert!(!style.contains("invert"));
    }
}
