use drawer_ui_layout::Gravity;

/// Errors raised while building a drawer behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawerError {
    /// Only START, END, LEFT or RIGHT may be used as drawer gravity.
    UnsupportedGravity { gravity: Gravity },
    /// The minimum fling velocity must be a positive finite number of dp/s.
    InvalidFlingVelocity { value: f32 },
}

impl std::fmt::Display for DrawerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawerError::UnsupportedGravity { gravity } => write!(
                f,
                "unsupported drawer gravity {:#x}; only START, END, LEFT or RIGHT is supported",
                gravity.bits()
            ),
            DrawerError::InvalidFlingVelocity { value } => {
                write!(f, "minimum fling velocity must be positive and finite, got {value}")
            }
        }
    }
}

impl std::error::Error for DrawerError {}
