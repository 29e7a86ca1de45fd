use std::fmt;

/// Rejection reasons for a scene snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    /// More lights than the shader's fixed-size light array can hold.
    TooManyLights { count: usize, max: usize },
    /// Camera contains NaN or infinite components.
    NonFiniteCamera,
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyLights { count, max } => {
                write!(f, "scene has {count} lights but the shader supports at most {max}")
            }
            Self::NonFiniteCamera => write!(f, "camera parameters are not finite"),
        }
    }
}

impl std::error::Error for SceneError {}
