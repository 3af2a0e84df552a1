//! The `@available` directive inserted above declarations.

use crate::config::{DEFAULT_IOS_VERSION, DEFAULT_MACOS_VERSION, DEFAULT_WATCHOS_VERSION};

/// Keyword every availability annotation starts with.
pub const ANNOTATION_KEYWORD: &str = "@available";

/// Platform versions written into the directive.
///
/// `ios` is used for both the iOS and tvOS fields; macOS and watchOS carry
/// their own values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityAnnotation {
    pub ios: String,
    pub macos: String,
    pub watchos: String,
}

impl Default for AvailabilityAnnotation {
    fn default() -> Self {
        Self {
            ios: DEFAULT_IOS_VERSION.to_string(),
            macos: DEFAULT_MACOS_VERSION.to_string(),
            watchos: DEFAULT_WATCHOS_VERSION.to_string(),
        }
    }
}

impl AvailabilityAnnotation {
    /// Annotation with the given iOS version and default macOS / watchOS versions.
    pub fn for_ios(ios: impl Into<String>) -> Self {
        Self {
            ios: ios.into(),
            ..Default::default()
        }
    }

    pub fn directive(&self) -> String {
        format!(
            "{}(iOS {}, macOS {}, tvOS {}, watchOS {}, *)",
            ANNOTATION_KEYWORD, self.ios, self.macos, self.ios, self.watchos
        )
    }

    /// Full annotation line placed above a declaration with the given indentation.
    pub fn line(&self, indentation: &str) -> String {
        format!("{}{}", indentation, self.directive())
    }
}
