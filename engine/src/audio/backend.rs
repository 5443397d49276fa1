//! Rodio playback backend
//!
//! Each playing sound owns a `Sink`; handles index the active sinks.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

use super::AudioError;

/// Handle for controlling a playing sound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundHandle {
    pub id: u32,
}

pub struct RodioBackend {
    /// Must outlive every sink
    _output_stream: OutputStream,
    stream_handle: OutputStreamHandle,
    active_sounds: HashMap<SoundHandle, Sink>,
    next_id: u32,
}

impl RodioBackend {
    pub fn open_default() -> Result<Self, AudioError> {
        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| AudioError::InitializationFailed(e.to_string()))?;
        log::info!("Audio output initialized");
        Ok(Self {
            _output_stream: stream,
            stream_handle,
            active_sounds: HashMap::new(),
            next_id: 0,
        })
    }

    fn next_handle(&mut self) -> SoundHandle {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        SoundHandle { id }
    }

    /// Decode a file and start playing it.
    pub fn play_file(&mut self, path: &Path, volume: f32, looping: bool) -> Result<SoundHandle, AudioError> {
        let sink = Sink::try_new(&self.stream_handle)
            .map_err(|e| AudioError::PlaybackFailed(format!("Failed to create sink: {}", e)))?;

        let file = File::open(path)
            .map_err(|e| AudioError::PlaybackFailed(format!("Failed to open audio file: {}", e)))?;
        let source = Decoder::new(BufReader::new(file))
            .map_err(|e| AudioError::PlaybackFailed(format!("Failed to decode audio: {}", e)))?;

        sink.set_volume(volume);
        if looping {
            sink.append(source.repeat_infinite());
        } else {
            sink.append(source);
        }

        let handle = self.next_handle();
        self.active_sounds.insert(handle, sink);
        Ok(handle)
    }

    pub fn set_volume(&mut self, handle: SoundHandle, volume: f32) -> Result<(), AudioError> {
        let sink = self.active_sounds.get(&handle).ok_or(AudioError::InvalidHandle)?;
        sink.set_volume(volume.max(0.0));
        Ok(())
    }

    /// Remove sinks that have run dry.
    pub fn update(&mut self) {
        self.active_sounds.retain(|_, sink| !sink.empty());
    }
}

impl Drop for RodioBackend {
    fn drop(&mut self) {
        for (_, sink) in self.active_sounds.drain() {
            sink.stop();
        }
    }
}
