//! Typed parsing of the camera fields this crate recognises out of a scene
//! document. Geometry/material/light records are threaded through only by
//! name (the `objects` list); their schemas belong to the scene-building
//! collaborator, not this crate.

use crate::core::targets;
use crate::core::types::{Number, Vector3};
use crate::error::ConfigError;
use serde::Deserialize;
use std::collections::HashMap;

/// The top-level scene document: four named collections. Only `cameras` is
/// interpreted here; the others are kept as opaque JSON so a caller with the
/// matching geometry/material/light schema can parse them itself.
#[derive(Debug, Deserialize)]
pub struct SceneDesc {
    #[serde(default)]
    pub lights: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub materials: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub geometry: HashMap<String, serde_json::Value>,
    pub cameras: HashMap<String, CameraDesc>,
}

fn default_samples_per_pixel() -> usize {
    1
}

fn default_filter_width() -> Number {
    2.0
}

/// The recognised subset of a camera record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraDesc {
    #[serde(rename = "type")]
    pub kind: String,
    pub translate: [Number; 3],
    pub rotate_angle: Number,
    pub rotate_axis: [Number; 3],
    #[serde(default)]
    pub objects: Vec<String>,
    pub width: u32,
    pub height: u32,
    pub fov: Number,
    pub focal_length: Number,
    pub f_stop: Number,
    /// Engine extension, not part of the original scene format: samples
    /// taken per pixel per iteration.
    #[serde(default = "default_samples_per_pixel")]
    pub samples_per_pixel: usize,
    /// Engine extension: reconstruction filter radius in pixels.
    #[serde(default = "default_filter_width")]
    pub filter_width: Number,
}

impl CameraDesc {
    pub fn translate_vec(&self) -> Vector3 {
        Vector3::from(self.translate)
    }

    pub fn rotate_axis_vec(&self) -> Vector3 {
        Vector3::from(self.rotate_axis)
    }
}

impl SceneDesc {
    /// Parses a scene document from JSON text.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let desc: SceneDesc = serde_json::from_str(text)?;
        tracing::debug!(
            target: targets::SCENE,
            cameras = desc.cameras.len(),
            geometry = desc.geometry.len(),
            "parsed scene document"
        );
        Ok(desc)
    }

    /// Looks up a named camera record, validating its `type`.
    pub fn camera(&self, name: &str) -> Result<&CameraDesc, ConfigError> {
        let cam = self.cameras.get(name).ok_or_else(|| ConfigError::MissingCamera(name.to_string()))?;
        if cam.kind != "persp" {
            return Err(ConfigError::UnknownCameraType(cam.kind.clone()));
        }
        Ok(cam)
    }
}
