/// Host loop configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    /// Label used in log output.
    pub title: String,

    /// Frame pacing target. `None` runs frames back to back.
    pub target_fps: Option<u32>,

    /// Stop after this many frames. `None` runs until a state requests exit.
    pub max_frames: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "twod".to_string(),
            target_fps: Some(60),
            max_frames: None,
        }
    }
}

impl RuntimeConfig {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn target_fps(mut self, fps: Option<u32>) -> Self {
        self.target_fps = fps;
        self
    }

    pub fn max_frames(mut self, frames: Option<u64>) -> Self {
        self.max_frames = frames;
        self
    }
}
