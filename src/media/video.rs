use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoEvent {
    Loaded,
    Error,
    Play,
    Pause,
    ToggleMute,
}

/// Hero video with a poster image fallback.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroVideo {
    pub video_src: String,
    pub poster_src: String,
    pub is_loaded: bool,
    pub has_error: bool,
    pub is_playing: bool,
    pub is_muted: bool,
}

impl HeroVideo {
    pub fn new(video_src: impl Into<String>, poster_src: impl Into<String>) -> HeroVideo {
        HeroVideo {
            video_src: video_src.into(),
            poster_src: poster_src.into(),
            is_loaded: false,
            has_error: false,
            // autoplay is only allowed muted
            is_playing: false,
            is_muted: true,
        }
    }

    pub fn apply(&mut self, event: VideoEvent) {
        match event {
            VideoEvent::Loaded => {
                self.is_loaded = true;
                self.has_error = false;
            }
            VideoEvent::Error => {
                self.has_error = true;
                self.is_playing = false;
            }
            VideoEvent::Play => {
                if self.is_loaded && !self.has_error {
                    self.is_playing = true;
                }
            }
            VideoEvent::Pause => self.is_playing = false,
            VideoEvent::ToggleMute => self.is_muted = !self.is_muted,
        }
    }

    pub fn shows_poster(&self) -> bool {
        !self.is_loaded || self.has_error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poster_until_loaded() {
        let mut video = HeroVideo::new("/videos/hero.mp4", "/images/hero.jpg");
        assert!(video.shows_poster());
        assert!(video.is_muted);

        video.apply(VideoEvent::Play);
        assert!(!video.is_playing);

        video.apply(VideoEvent::Loaded);
        video.apply(VideoEvent::Play);
        assert!(video.is_playing);
        assert!(!video.shows_poster());
    }

    #[test]
    fn error_stops_playback_and_restores_poster() {
        let mut video = HeroVideo::new("/videos/hero.mp4", "/images/hero.jpg");
        video.apply(VideoEvent::Loaded);
        video.apply(VideoEvent::Play);
        video.apply(VideoEvent::Error);

        assert!(!video.is_playing);
        assert!(video.shows_poster());

        video.apply(VideoEvent::ToggleMute);
        assert!(!video.is_muted);
    }
}
