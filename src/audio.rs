//! Procedurally generated music and sound effects. Everything here is
//! best-effort: a sound that failed to load simply never plays.

use std::f32::consts::TAU;

use macroquad::audio::{self, load_sound_from_bytes, PlaySoundParams, Sound};
use macroquad::logging::{info, warn};

use crate::config::SAMPLE_RATE;

pub struct GameAudio {
    music: Option<Sound>,
    eat: Option<Sound>,
    game_over: Option<Sound>,
}

impl GameAudio {
    pub async fn load(enabled: bool) -> Self {
        if !enabled {
            info!("audio disabled");
            return GameAudio {
                music: None,
                eat: None,
                game_over: None,
            };
        }
        GameAudio {
            music: decode("music", &music_wav()).await,
            eat: decode("eat", &eat_wav()).await,
            game_over: decode("game over", &game_over_wav()).await,
        }
    }

    pub fn start_music(&self) {
        if let Some(sound) = &self.music {
            audio::play_sound(
                sound,
                PlaySoundParams {
                    looped: true,
                    volume: 1.0,
                },
            );
        }
    }

    pub fn stop_music(&self) {
        if let Some(sound) = &self.music {
            audio::stop_sound(sound);
        }
    }

    pub fn play_eat(&self) {
        if let Some(sound) = &self.eat {
            audio::play_sound_once(sound);
        }
    }

    pub fn play_game_over(&self) {
        if let Some(sound) = &self.game_over {
            audio::play_sound_once(sound);
        }
    }
}

async fn decode(name: &str, wav: &[u8]) -> Option<Sound> {
    match load_sound_from_bytes(wav).await {
        Ok(sound) => Some(sound),
        Err(err) => {
            warn!("{} sound unavailable: {}", name, err);
            None
        }
    }
}

/// Four seconds of a soft two-tone chord, faded at both ends so the loop
/// seam doesn't click.
fn music_wav() -> Vec<u8> {
    let n = (SAMPLE_RATE as f32 * 4.0) as usize;
    let mut samples: Vec<f32> = (0..n)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE as f32;
            0.15 * ((TAU * 110.0 * t).sin() + 0.6 * (TAU * 164.0 * t).sin())
        })
        .collect();
    let fade = 400.min(n / 2);
    for i in 0..fade {
        let gain = i as f32 / fade as f32;
        samples[i] *= gain;
        samples[n - 1 - i] *= gain;
    }
    wav_pcm16(&samples)
}

fn eat_wav() -> Vec<u8> {
    let n = (SAMPLE_RATE as f32 * 0.12) as usize;
    let samples: Vec<f32> = (0..n)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE as f32;
            0.3 * (TAU * 880.0 * t).sin() * (-t * 20.0).exp()
        })
        .collect();
    wav_pcm16(&samples)
}

/// Descending sweep from 400 Hz, losing 70% of the pitch over 0.4 s.
fn game_over_wav() -> Vec<u8> {
    let n = (SAMPLE_RATE as f32 * 0.4) as usize;
    let samples: Vec<f32> = (0..n)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE as f32;
            let freq = 400.0 * (1.0 - 0.7 * i as f32 / n as f32);
            0.25 * (TAU * freq * t).sin()
        })
        .collect();
    wav_pcm16(&samples)
}

/// Wrap samples in a PCM16 mono RIFF/WAVE container.
fn wav_pcm16(samples: &[f32]) -> Vec<u8> {
    let block_align: u16 = 2;
    let byte_rate: u32 = SAMPLE_RATE * block_align as u32;
    let data_size: u32 = samples.len() as u32 * 2;
    let chunk_size: u32 = 36 + data_size;

    let mut data = Vec::with_capacity(44 + data_size as usize);
    data.extend_from_slice(b"RIFF");
    data.extend_from_slice(&chunk_size.to_le_bytes());
    data.extend_from_slice(b"WAVE");
    data.extend_from_slice(b"fmt ");
    data.extend_from_slice(&16u32.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes()); // PCM
    data.extend_from_slice(&1u16.to_le_bytes()); // mono
    data.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    data.extend_from_slice(&byte_rate.to_le_bytes());
    data.extend_from_slice(&block_align.to_le_bytes());
    data.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    data.extend_from_slice(b"data");
    data.extend_from_slice(&data_size.to_le_bytes());
    for sample in samples {
        let value = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
        data.extend_from_slice(&value.to_le_bytes());
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wav_container_is_well_formed() {
        let samples = vec![0.0f32; 100];
        let wav = wav_pcm16(&samples);
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(wav.len(), 44 + 200);
        let data_size = u32::from_le_bytes(wav[40..44].try_into().unwrap());
        assert_eq!(data_size, 200);
        let rate = u32::from_le_bytes(wav[24..28].try_into().unwrap());
        assert_eq!(rate, SAMPLE_RATE);
    }

    #[test]
    fn clipping_samples_are_clamped() {
        let wav = wav_pcm16(&[2.0, -2.0]);
        let first = i16::from_le_bytes(wav[44..46].try_into().unwrap());
        let second = i16::from_le_bytes(wav[46..48].try_into().unwrap());
        assert_eq!(first, i16::MAX);
        assert_eq!(second, -i16::MAX);
    }

    #[test]
    fn tones_have_expected_length() {
        assert_eq!(eat_wav().len(), 44 + (SAMPLE_RATE as f32 * 0.12) as usize * 2);
        assert_eq!(
            game_over_wav().len(),
            44 + (SAMPLE_RATE as f32 * 0.4) as usize * 2
        );
        assert_eq!(music_wav().len(), 44 + SAMPLE_RATE as usize * 4 * 2);
    }
}
