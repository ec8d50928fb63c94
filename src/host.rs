//! Adapters that write calculator results into host scene state.
//!
//! The host owns the state; callers pass it in explicitly and read it back.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HostError {
    #[error("Cannot apply resolution with height 0.")]
    ZeroHeight,
    #[error("No camera selected. Please select a camera (transform or shape).")]
    NoSelection,
    #[error("No camera shape nodes found in selection. Please select a camera transform or shape.")]
    NoCameraInSelection,
    #[error("Aspect Ratio is N/A. Calculate aspect ratio first.")]
    RatioUnavailable,
}

impl HostError {
    pub fn kind(&self) -> &'static str {
        match self {
            HostError::ZeroHeight => "zero_height",
            HostError::NoSelection => "no_selection",
            HostError::NoCameraInSelection => "no_camera_in_selection",
            HostError::RatioUnavailable => "ratio_unavailable",
        }
    }
}

/// Render resolution settings of a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderResolution {
    pub width: i64,
    pub height: i64,
    pub pixel_aspect: f64,
    pub device_aspect_ratio: f64,
}

/// Film back of a camera, in the host's aperture units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraAperture {
    pub horizontal: f64,
    pub vertical: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub name: String,
    pub aperture: CameraAperture,
}

/// A selected scene node. Transforms carry the camera shapes parented
/// under them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SceneNode {
    Camera(Camera),
    Transform { name: String, cameras: Vec<Camera> },
    Other { name: String },
}

impl Default for RenderResolution {
    fn default() -> Self {
        RenderResolution {
            width: 1920,
            height: 1080,
            pixel_aspect: 1.0,
            device_aspect_ratio: 1920.0 / 1080.0,
        }
    }
}

/// Sets square pixels and the given resolution. The device aspect ratio
/// follows from `width / height`.
pub fn apply_resolution(resolution: &mut RenderResolution, width: i64, height: i64) -> Result<(), HostError> {
    if height == 0 {
        return Err(HostError::ZeroHeight);
    }

    resolution.pixel_aspect = 1.0;
    resolution.width = width;
    resolution.height = height;
    resolution.device_aspect_ratio = width as f64 / height as f64 * resolution.pixel_aspect;

    Ok(())
}

/// A camera picked out of a selection, with the transform it was found
/// under.
#[derive(Debug, PartialEq)]
pub struct SelectedCamera<'a> {
    pub transform: Option<&'a str>,
    pub camera: &'a mut Camera,
}

impl SelectedCamera<'_> {
    /// Transform name when known, otherwise the camera shape's own name.
    pub fn display_name(&self) -> &str {
        self.transform.unwrap_or(self.camera.name.as_str())
    }
}

/// Finds the first camera in `selection`, looking through transforms.
pub fn first_camera(selection: &mut [SceneNode]) -> Result<SelectedCamera<'_>, HostError> {
    if selection.is_empty() {
        return Err(HostError::NoSelection);
    }

    selection
        .iter_mut()
        .find_map(|node| match node {
            SceneNode::Camera(camera) => Some(SelectedCamera { transform: None, camera }),
            SceneNode::Transform { name, cameras } => {
                let name: &str = name;
                cameras
                    .first_mut()
                    .map(move |camera| SelectedCamera { transform: Some(name), camera })
            },
            SceneNode::Other { .. } => None,
        })
        .ok_or(HostError::NoCameraInSelection)
}

/// Matches the film back to `ratio` by widening or narrowing the
/// horizontal aperture; the vertical aperture is left alone.
pub fn apply_film_aspect(aperture: &mut CameraAperture, ratio: f64) {
    aperture.horizontal = aperture.vertical * ratio;
}
