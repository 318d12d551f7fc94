//! Device breakpoints and the media queries derived from them.

use serde::{Deserialize, Serialize};
use trellis_types::Device;

/// Max-width thresholds, in pixels. Desktop is the unconstrained base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    pub tablet: u32,
    pub phone: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            tablet: 980,
            phone: 767,
        }
    }
}

impl Breakpoints {
    pub fn max_width(&self, device: Device) -> Option<u32> {
        match device {
            Device::Desktop => None,
            Device::Tablet => Some(self.tablet),
            Device::Phone => Some(self.phone),
        }
    }

    /// `(max-width: Npx)` for tablet and phone. Rules under it cascade down to
    /// every narrower device.
    pub fn max_width_query(&self, device: Device) -> Option<String> {
        self.max_width(device)
            .map(|px| format!("(max-width: {}px)", px))
    }

    /// A query matching exactly one device's range.
    pub fn only_query(&self, device: Device) -> String {
        match device {
            Device::Desktop => format!("(min-width: {}px)", self.tablet.saturating_add(1)),
            Device::Tablet => format!(
                "(max-width: {}px) and (min-width: {}px)",
                self.tablet,
                self.phone.saturating_add(1)
            ),
            Device::Phone => format!("(max-width: {}px)", self.phone),
        }
    }
}

/// What CSS generators need to know beyond the settings they are given.
#[derive(Debug, Clone, PartialEq)]
pub struct CssContext {
    pub breakpoints: Breakpoints,
    /// Prefix for generated class and keyframe names (`trellis-animated`, ...).
    pub class_prefix: String,
}

impl CssContext {
    pub fn new(breakpoints: Breakpoints, class_prefix: impl Into<String>) -> Self {
        Self {
            breakpoints,
            class_prefix: class_prefix.into(),
        }
    }

    /// `"{prefix}-{name}"`, or `name` alone when the prefix is empty.
    pub fn prefixed(&self, name: &str) -> String {
        if self.class_prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}-{}", self.class_prefix, name)
        }
    }
}

impl Default for CssContext {
    fn default() -> Self {
        Self::new(Breakpoints::default(), "trellis")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_breakpoints() {
        let bp = Breakpoints::default();
        assert_eq!(bp.max_width(Device::Desktop), None);
        assert_eq!(bp.max_width_query(Device::Tablet).unwrap(), "(max-width: 980px)");
        assert_eq!(bp.max_width_query(Device::Phone).unwrap(), "(max-width: 767px)");
    }

    #[test]
    fn test_only_queries_do_not_overlap() {
        let bp = Breakpoints::default();
        assert_eq!(bp.only_query(Device::Desktop), "(min-width: 981px)");
        assert_eq!(
            bp.only_query(Device::Tablet),
            "(max-width: 980px) and (min-width: 768px)"
        );
        assert_eq!(bp.only_query(Device::Phone), "(max-width: 767px)");
    }

    #[test]
    fn test_only_queries_at_the_numeric_limit() {
        let bp = Breakpoints { tablet: u32::MAX, phone: u32::MAX };
        assert_eq!(bp.only_query(Device::Desktop), "(min-width: 4294967295px)");
        assert_eq!(
            bp.only_query(Device::Tablet),
            "(max-width: 4294967295px) and (min-width: 4294967295px)"
        );
    }

    #[test]
    fn test_partial_config_keeps_other_default() {
        let bp: Breakpoints = serde_json::from_str(r#"{ "tablet": 1024 }"#).unwrap();
        assert_eq!(bp.tablet, 1024);
        assert_eq!(bp.phone, 767);
    }

    #[test]
    fn test_prefixed_names() {
        assert_eq!(CssContext::default().prefixed("animated"), "trellis-animated");
        let bare = CssContext::new(Breakpoints::default(), "");
        assert_eq!(bare.prefixed("fade"), "fade");
    }
}
