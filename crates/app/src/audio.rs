use std::collections::HashMap;
use std::sync::mpsc;
use std::thread;

use quiz_core::SoundCue;
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, Sink};
use services::{SoundError, SoundPlayer, sfx};

/// Plays the synthesized cues on the default output device.
///
/// The rodio stream is not `Send`, so it lives on its own thread and cues
/// are forwarded over a channel.
pub struct RodioPlayer {
    cues: mpsc::Sender<SoundCue>,
}

impl RodioPlayer {
    /// Open the default output device.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::Output` if no device is available or the audio
    /// thread cannot be started.
    pub fn spawn() -> Result<Self, SoundError> {
        let (cues, rx) = mpsc::channel::<SoundCue>();
        let (ready_tx, ready_rx) = mpsc::sync_channel::<Result<(), String>>(1);

        thread::Builder::new()
            .name("audio".into())
            .spawn(move || {
                let (_stream, handle) = match OutputStream::try_default() {
                    Ok(pair) => pair,
                    Err(err) => {
                        let _ = ready_tx.send(Err(err.to_string()));
                        return;
                    }
                };
                let _ = ready_tx.send(Ok(()));

                let buffers: HashMap<SoundCue, Vec<f32>> = SoundCue::ALL
                    .into_iter()
                    .map(|cue| (cue, sfx::synthesize(cue)))
                    .collect();

                for cue in rx {
                    let Some(samples) = buffers.get(&cue) else {
                        continue;
                    };
                    match Sink::try_new(&handle) {
                        Ok(sink) => {
                            sink.append(SamplesBuffer::new(1, sfx::SAMPLE_RATE, samples.clone()));
                            sink.detach();
                        }
                        Err(err) => {
                            tracing::warn!(
                                cue = cue.as_str(),
                                error = %err,
                                "audio sink unavailable"
                            );
                        }
                    }
                }
                tracing::debug!("audio thread stopped");
            })
            .map_err(|err| SoundError::Output(err.to_string()))?;

        ready_rx
            .recv()
            .map_err(|err| SoundError::Output(err.to_string()))?
            .map_err(SoundError::Output)?;
        Ok(Self { cues })
    }
}

impl SoundPlayer for RodioPlayer {
    fn play(&self, cue: SoundCue) -> Result<(), SoundError> {
        self.cues
            .send(cue)
            .map_err(|_| SoundError::Output("audio thread stopped".into()))
    }
}
