use crate::renderer::Error;

/// Errors that can occur in the audio layer.
#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("audio device reported {0:?}")]
    Device(Error),

    #[error("failed to parse renderer config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize renderer config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}
