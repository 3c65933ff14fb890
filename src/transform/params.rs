//! Transform parameter definitions.
//!
//! All types derive Serde traits so requests can be declared in config or
//! fixture files as well as built in code.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Resize behavior applied by the transform service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeMode {
    /// Scale to fit within the target box, preserving aspect ratio.
    Fit,
    /// Cut down to the target box.
    Crop,
    /// Scale to fill the target box, ignoring aspect ratio.
    Stretch,
}

impl fmt::Display for ResizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResizeMode::Fit => "fit",
            ResizeMode::Crop => "crop",
            ResizeMode::Stretch => "stretch",
        };
        f.write_str(s)
    }
}

/// Output encoding requested from the transform service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Jpeg,
    Png,
    Webp,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Png => "png",
            OutputFormat::Webp => "webp",
        };
        f.write_str(s)
    }
}

/// Crop rectangle, serialized as `crop=x,y,w,h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crop {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// Declarative post-processing options appended to a resolved URL.
///
/// Constructed fresh per call site and consumed only during serialization;
/// the cache key does not include these, so callers sharing a source list
/// but using different params still share one resolution.
///
/// Field declaration order is serialization order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PixelParams {
    pub mode: Option<ResizeMode>,
    pub crop: Option<Crop>,
    /// Device pixel ratio multiplier.
    pub dpr: Option<f32>,
    pub blur: Option<u32>,
    pub brightness: Option<i32>,
    pub contrast: Option<i32>,
    pub hue: Option<i32>,
    pub saturation: Option<i32>,
    pub gamma: Option<f32>,
    pub quality: Option<u8>,
    pub format: Option<OutputFormat>,
    /// Allow the service to upscale beyond the source resolution.
    pub upscale: Option<bool>,
    pub debug: Option<bool>,
}

impl PixelParams {
    /// Serialize the set options as a query string: `key=value` pairs in
    /// declaration order, joined with `&`, no trailing separator. Returns
    /// an empty string when nothing is set.
    pub fn to_query(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(mode) = self.mode {
            parts.push(format!("mode={mode}"));
        }
        if let Some(crop) = self.crop {
            parts.push(format!("crop={},{},{},{}", crop.x, crop.y, crop.w, crop.h));
        }
        if let Some(dpr) = self.dpr {
            parts.push(format!("dpr={dpr}"));
        }
        if let Some(blur) = self.blur {
            parts.push(format!("blur={blur}"));
        }
        if let Some(brightness) = self.brightness {
            parts.push(format!("brightness={brightness}"));
        }
        if let Some(contrast) = self.contrast {
            parts.push(format!("contrast={contrast}"));
        }
        if let Some(hue) = self.hue {
            parts.push(format!("hue={hue}"));
        }
        if let Some(saturation) = self.saturation {
            parts.push(format!("saturation={saturation}"));
        }
        if let Some(gamma) = self.gamma {
            parts.push(format!("gamma={gamma}"));
        }
        if let Some(quality) = self.quality {
            parts.push(format!("quality={quality}"));
        }
        if let Some(format) = self.format {
            parts.push(format!("format={format}"));
        }
        if let Some(upscale) = self.upscale {
            parts.push(format!("upscale={upscale}"));
        }
        if let Some(debug) = self.debug {
            parts.push(format!("debug={debug}"));
        }
        parts.join("&")
    }

    /// Append the serialized options to a resolved locator. A value with no
    /// options set leaves the locator untouched.
    pub fn apply(&self, src: &str) -> String {
        let query = self.to_query();
        if query.is_empty() {
            src.to_string()
        } else {
            format!("{src}?{query}")
        }
    }
}
