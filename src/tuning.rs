//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives in [`Tuning`]. Defaults
//! match [`crate::consts`]; overrides are JSON, read from LocalStorage in the
//! browser or from a file natively.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Why a tuning override was rejected
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("tuning is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("could not read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("`{field}` must be a finite number (got {value})")]
    NotFinite { field: &'static str, value: f32 },
    #[error("`{field}` must be positive (got {value})")]
    NotPositive { field: &'static str, value: f32 },
    #[error("`{field}` must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },
    #[error("paddle height {paddle} does not fit a court of height {court}")]
    PaddleTooTall { paddle: f32, court: f32 },
    #[error("paddles overlap: court width {court} leaves no room between them")]
    PaddlesOverlap { court: f32 },
    #[error("ball diameter {diameter} does not fit a court of height {court}")]
    BallTooLarge { diameter: f32, court: f32 },
    #[error("score_to_win must be at least 1")]
    ZeroWinScore,
}

/// Gameplay constants for one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub court_width: f32,
    pub court_height: f32,

    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,

    pub ball_radius: f32,
    pub ball_speed: f32,
    /// Added to |vx| on every paddle hit
    pub paddle_speedup: f32,
    /// Vertical velocity added for a hit at the very tip of a paddle
    pub english_factor: f32,

    /// Fixed per-step move of the AI paddle
    pub ai_speed: f32,
    /// Half-width of the band around the ball where the AI does not steer
    pub ai_dead_zone: f32,
    /// Amplitude of the uniform noise added to the AI paddle every step
    pub ai_jitter: f32,

    pub score_to_win: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            court_width: COURT_WIDTH,
            court_height: COURT_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_margin: PADDLE_MARGIN,
            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            paddle_speedup: PADDLE_SPEEDUP,
            english_factor: ENGLISH_FACTOR,
            ai_speed: AI_SPEED,
            ai_dead_zone: AI_DEAD_ZONE,
            ai_jitter: AI_JITTER,
            score_to_win: SCORE_TO_WIN,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON override. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read a JSON override from disk
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_path(path: &std::path::Path) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check that the court can hold both paddles and the ball
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("court_width", self.court_width),
            ("court_height", self.court_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
            ("ai_speed", self.ai_speed),
        ];
        let non_negative = [
            ("paddle_margin", self.paddle_margin),
            ("paddle_speedup", self.paddle_speedup),
            ("english_factor", self.english_factor),
            ("ai_dead_zone", self.ai_dead_zone),
            ("ai_jitter", self.ai_jitter),
        ];

        // Out-of-range JSON numbers arrive as infinities
        for (field, value) in positive.iter().chain(non_negative.iter()).copied() {
            if !value.is_finite() {
                return Err(TuningError::NotFinite { field, value });
            }
        }
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(TuningError::NotPositive { field, value });
            }
        }
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(TuningError::Negative { field, value });
            }
        }

        if self.paddle_height >= self.court_height {
            return Err(TuningError::PaddleTooTall {
                paddle: self.paddle_height,
                court: self.court_height,
            });
        }
        if 2.0 * (self.paddle_margin + self.paddle_width) >= self.court_width {
            return Err(TuningError::PaddlesOverlap {
                court: self.court_width,
            });
        }
        if 2.0 * self.ball_radius >= self.court_height {
            return Err(TuningError::BallTooLarge {
                diameter: 2.0 * self.ball_radius,
                court: self.court_height,
            });
        }
        if self.score_to_win == 0 {
            return Err(TuningError::ZeroWinScore);
        }
        Ok(())
    }

    /// Lowest valid paddle top
    pub fn paddle_max_y(&self) -> f32 {
        self.court_height - self.paddle_height
    }

    /// Paddle top that vertically centers a paddle in the court
    pub fn paddle_center_y(&self) -> f32 {
        self.court_height / 2.0 - self.paddle_height / 2.0
    }

    /// x of the player paddle's right (ball-facing) edge
    pub fn player_face_x(&self) -> f32 {
        self.paddle_margin + self.paddle_width
    }

    /// x of the AI paddle's left (ball-facing) edge
    pub fn ai_face_x(&self) -> f32 {
        self.court_width - self.paddle_margin - self.paddle_width
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "court_pong_tuning";

    /// Load tuning from LocalStorage (WASM only), falling back to defaults
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring stored tuning: {}", e),
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Load tuning from an optional file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: Option<&std::path::Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default tuning");
            return Self::default();
        };

        match Self::from_path(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring tuning override {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.paddle_max_y(), COURT_HEIGHT - PADDLE_HEIGHT);
        assert_eq!(tuning.player_face_x(), 32.0);
        assert_eq!(tuning.ai_face_x(), COURT_WIDTH - 32.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "ai_speed": 5.5, "score_to_win": 11 }"#).unwrap();
        assert_eq!(tuning.ai_speed, 5.5);
        assert_eq!(tuning.score_to_win, 11);
        assert_eq!(tuning.ball_speed, BALL_SPEED);
        assert_eq!(tuning.court_width, COURT_WIDTH);
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Tuning::from_json("{ ai_speed: "),
            Err(TuningError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_bad_geometry() {
        assert!(matches!(
            Tuning::from_json(r#"{ "paddle_height": 600.0 }"#),
            Err(TuningError::PaddleTooTall { .. })
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "court_width": 60.0 }"#),
            Err(TuningError::PaddlesOverlap { .. })
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "ball_speed": -1.0 }"#),
            Err(TuningError::NotPositive { field: "ball_speed", .. })
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "score_to_win": 0 }"#),
            Err(TuningError::ZeroWinScore)
        ));
    }

    #[test]
    fn test_rejects_negative_offsets_and_gains() {
        for field in [
            "paddle_margin",
            "paddle_speedup",
            "english_factor",
            "ai_dead_zone",
            "ai_jitter",
        ] {
            let json = format!(r#"{{ "{}": -3.0 }}"#, field);
            match Tuning::from_json(&json) {
                Err(TuningError::Negative { field: rejected, value }) => {
                    assert_eq!(rejected, field);
                    assert_eq!(value, -3.0);
                }
                other => panic!("{} accepted a negative value: {:?}", field, other),
            }
        }

        // Zero is allowed: no speed-up, no english, no jitter
        let tuning =
            Tuning::from_json(r#"{ "paddle_speedup": 0.0, "ai_jitter": 0.0 }"#).unwrap();
        assert_eq!(tuning.paddle_speedup, 0.0);
        assert_eq!(tuning.ai_jitter, 0.0);
    }

    #[test]
    fn test_rejects_infinite_values() {
        for field in [
            "court_width",
            "court_height",
            "paddle_width",
            "paddle_height",
            "paddle_margin",
            "ball_radius",
            "ball_speed",
            "paddle_speedup",
            "english_factor",
            "ai_speed",
            "ai_dead_zone",
            "ai_jitter",
        ] {
            let mut tuning = Tuning::default();
            let value = f32::INFINITY;
            match field {
                "court_width" => tuning.court_width = value,
                "court_height" => tuning.court_height = value,
                "paddle_width" => tuning.paddle_width = value,
                "paddle_height" => tuning.paddle_height = value,
                "paddle_margin" => tuning.paddle_margin = value,
                "ball_radius" => tuning.ball_radius = value,
                "ball_speed" => tuning.ball_speed = value,
                "paddle_speedup" => tuning.paddle_speedup = value,
                "english_factor" => tuning.english_factor = value,
                "ai_speed" => tuning.ai_speed = value,
                "ai_dead_zone" => tuning.ai_dead_zone = value,
                _ => tuning.ai_jitter = value,
            }
            assert!(
                matches!(
                    tuning.validate(),
                    Err(TuningError::NotFinite { field: rejected, .. }) if rejected == field
                ),
                "{} accepted infinity",
                field
            );
        }

        let mut tuning = Tuning::default();
        tuning.ball_speed = f32::NAN;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::NotFinite { field: "ball_speed", .. })
        ));

        // Too large for f32, parsed as infinity
        assert!(matches!(
            Tuning::from_json(r#"{ "ai_jitter": 1e39 }"#),
            Err(TuningError::NotFinite { field: "ai_jitter", .. })
        ));
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let tuning = Tuning::load(Some(std::path::Path::new("/nonexistent/court-pong.json")));
        assert_eq!(tuning, Tuning::default());
    }
}
