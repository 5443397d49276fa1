//! Audio Module
//!
//! Sound playback through rodio with simple distance attenuation for
//! positional sounds. Audio is optional: when no output device is available
//! or a file cannot be decoded, the failure is logged and the scene carries
//! on silently.

pub mod backend;
pub mod spatial;

use std::path::Path;

use glam::Vec3;
use thiserror::Error;

pub use backend::{RodioBackend, SoundHandle};
pub use spatial::{SpatialAudio, SpatialConfig};

/// Audio errors
#[derive(Error, Debug)]
pub enum AudioError {
    #[error("Audio backend initialization failed: {0}")]
    InitializationFailed(String),

    #[error("Playback failed: {0}")]
    PlaybackFailed(String),

    #[error("Invalid sound handle")]
    InvalidHandle,
}

#[derive(Debug, Clone, Copy)]
struct PositionalSound {
    handle: SoundHandle,
    position: Vec3,
    base_volume: f32,
}

/// Scene-facing audio facade.
pub struct AudioSystem {
    backend: Option<RodioBackend>,
    spatial: SpatialAudio,
    positional: Vec<PositionalSound>,
}

impl AudioSystem {
    /// Open the default output device, or fall back to a silent system.
    pub fn new(spatial: SpatialConfig) -> Self {
        let backend = match RodioBackend::open_default() {
            Ok(backend) => Some(backend),
            Err(e) => {
                log::warn!("Audio disabled: {}", e);
                None
            }
        };
        Self {
            backend,
            spatial: SpatialAudio::new(spatial),
            positional: Vec::new(),
        }
    }

    /// A system that never plays anything.
    pub fn silent() -> Self {
        Self {
            backend: None,
            spatial: SpatialAudio::new(SpatialConfig::default()),
            positional: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.backend.is_some()
    }

    /// Fire-and-forget sound that ignores the listener position.
    pub fn play_one_shot(&mut self, path: &Path, volume: f32) {
        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        if let Err(e) = backend.play_file(path, volume, false) {
            log::warn!("Could not play {}: {}", path.display(), e);
        }
    }

    /// Looping sound at a world position, attenuated by listener distance.
    pub fn play_positional_loop(&mut self, path: &Path, position: Vec3, volume: f32) -> Option<SoundHandle> {
        let backend = self.backend.as_mut()?;
        let gain = volume * self.spatial.calculate_attenuation(position);
        match backend.play_file(path, gain, true) {
            Ok(handle) => {
                self.positional.push(PositionalSound {
                    handle,
                    position,
                    base_volume: volume,
                });
                Some(handle)
            }
            Err(e) => {
                log::warn!("Could not play {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Move the listener and refresh the gain of every positional sound.
    pub fn set_listener_position(&mut self, position: Vec3) {
        self.spatial.set_listener_position(position);
        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        for sound in &self.positional {
            let gain = sound.base_volume * self.spatial.calculate_attenuation(sound.position);
            if let Err(e) = backend.set_volume(sound.handle, gain) {
                log::debug!("Positional sound {:?} gone: {}", sound.handle, e);
            }
        }
    }

    /// Drop finished one-shot sounds.
    pub fn update(&mut self) {
        if let Some(backend) = self.backend.as_mut() {
            backend.update();
        }
    }
}
