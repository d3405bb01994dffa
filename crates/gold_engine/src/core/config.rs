//! # Unified Configuration System
//!
//! This module consolidates the configuration structures for the window
//! bootstrap, the OpenGL context request, and the renderer into a single,
//! coherent system. Every bootstrap unit takes its inputs from here rather
//! than from hard-coded values inside the rendering code.
//!
//! ## Design Goals
//!
//! - **Centralized**: All configuration types in one place for easy discovery
//! - **Serializable**: TOML support for tooling and tests
//! - **Type Safe**: Strong typing with validation and defaults
//!
//! The defaults encode the demo application's fixed values: an 800x600
//! window titled "GoldOre", an OpenGL 3.3 core-profile context, and a
//! teal clear color.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// TOML parsing failed
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A configured value is outside its valid range
    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// # Window Configuration
///
/// Size and title for the application window. The window owns the OS-level
/// rendering surface for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial window width in screen coordinates
    pub width: u32,
    /// Initial window height in screen coordinates
    pub height: u32,
}

impl WindowConfig {
    /// Create a new window configuration
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
        }
    }

    /// Set the window title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the initial window size
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new("GoldOre", 800, 600)
    }
}

/// # Context Configuration
///
/// The OpenGL version and profile requested from the windowing library at
/// window creation time. An unsupported combination makes window creation
/// fail with an error rather than a crash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Requested OpenGL major version
    pub major: u32,
    /// Requested OpenGL minor version
    pub minor: u32,
    /// Request the core profile (no deprecated legacy functionality)
    pub core_profile: bool,
}

impl ContextConfig {
    /// Request a specific OpenGL version with the core profile
    pub const fn new(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            core_profile: true,
        }
    }

    /// Enable or disable the core profile request
    #[must_use]
    pub const fn with_core_profile(mut self, core_profile: bool) -> Self {
        self.core_profile = core_profile;
        self
    }
}

impl Default for ContextConfig {
    /// OpenGL 3.3 core, the version the demo shaders are written against
    fn default() -> Self {
        Self::new(3, 3)
    }
}

/// # Renderer Configuration
///
/// Settings consumed by the render loop itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Background clear color [R, G, B, A] (0.0-1.0 range)
    pub clear_color: [f32; 4],
}

impl RendererConfig {
    /// Set the background clear color [R, G, B, A] (0.0-1.0 range)
    #[must_use]
    pub const fn with_clear_color(mut self, color: [f32; 4]) -> Self {
        self.clear_color = color;
        self
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            clear_color: [0.2, 0.3, 0.3, 1.0],
        }
    }
}

/// # Application Configuration
///
/// Top-level configuration aggregating the window, context, and renderer
/// sections. The demo binaries use `AppConfig::default()`; the TOML entry
/// point exists for tooling and is exercised by the test suite.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Window configuration
    pub window: WindowConfig,
    /// OpenGL context request
    pub context: ContextConfig,
    /// Render loop configuration
    pub renderer: RendererConfig,
}

impl AppConfig {
    /// Parse a configuration from TOML text
    ///
    /// Missing sections and fields fall back to their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the window section
    #[must_use]
    pub fn with_window(mut self, window: WindowConfig) -> Self {
        self.window = window;
        self
    }

    /// Replace the context section
    #[must_use]
    pub const fn with_context(mut self, context: ContextConfig) -> Self {
        self.context = context;
        self
    }

    /// Replace the renderer section
    #[must_use]
    pub fn with_renderer(mut self, renderer: RendererConfig) -> Self {
        self.renderer = renderer;
        self
    }

    /// Validate configured values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.context.major == 0 {
            return Err(ConfigError::Invalid(
                "context major version must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_demo_literals() {
        let config = AppConfig::default();

        assert_eq!(config.window.title, "GoldOre");
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.context.major, 3);
        assert_eq!(config.context.minor, 3);
        assert!(config.context.core_profile);
        assert_eq!(config.renderer.clear_color, [0.2, 0.3, 0.3, 1.0]);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = AppConfig::default()
            .with_window(WindowConfig::new("Test", 1024, 768))
            .with_context(ContextConfig::new(4, 1))
            .with_renderer(RendererConfig::default().with_clear_color([0.0, 0.0, 0.0, 1.0]));

        assert_eq!(config.window.title, "Test");
        assert_eq!(config.window.width, 1024);
        assert_eq!(config.context.major, 4);
        assert_eq!(config.renderer.clear_color, [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_from_toml_partial_sections_use_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [window]
            title = "Custom"
            "#,
        )
        .unwrap();

        assert_eq!(config.window.title, "Custom");
        assert_eq!(config.window.width, 800);
        assert_eq!(config.context, ContextConfig::default());
    }

    #[test]
    fn test_from_toml_full_override() {
        let config = AppConfig::from_toml_str(
            r#"
            [window]
            title = "Big"
            width = 1920
            height = 1080

            [context]
            major = 4
            minor = 6
            core_profile = false

            [renderer]
            clear_color = [0.0, 0.0, 0.0, 0.0]
            "#,
        )
        .unwrap();

        assert_eq!(config.window.width, 1920);
        assert_eq!(config.context.minor, 6);
        assert!(!config.context.core_profile);
        assert_eq!(config.renderer.clear_color, [0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_from_toml_rejects_zero_size() {
        let result = AppConfig::from_toml_str(
            r#"
            [window]
            width = 0
            "#,
        );

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_from_toml_rejects_malformed_text() {
        let result = AppConfig::from_toml_str("[window\ntitle = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig::default().with_window(WindowConfig::new("RoundTrip", 640, 480));
        let text = toml::to_string(&config).unwrap();
        let parsed = AppConfig::from_toml_str(&text).unwrap();

        assert_eq!(parsed, config);
    }
}
