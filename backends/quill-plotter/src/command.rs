//! G-code the arm understands

use std::fmt;

/// One instruction for the device, rendered as G-code by [`fmt::Display`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Linear move; absent axes keep their current value
    Move {
        x: Option<i64>,
        y: Option<i64>,
        z: Option<i64>,
    },
    /// Return to the home position
    Home,
    /// Record the following moves into a memory slot
    StartRecording(u32),
    StopRecording,
}

impl Command {
    pub const fn move_xy(x: i64, y: i64) -> Self {
        Command::Move {
            x: Some(x),
            y: Some(y),
            z: None,
        }
    }

    pub const fn move_z(z: i64) -> Self {
        Command::Move {
            x: None,
            y: None,
            z: Some(z),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Move { x, y, z } => {
                f.write_str("G01")?;
                for (axis, value) in [('X', x), ('Y', y), ('Z', z)] {
                    if let Some(v) = value {
                        write!(f, " {axis}{v}")?;
                    }
                }
                Ok(())
            },
            Command::Home => f.write_str("G28"),
            Command::StartRecording(slot) => write!(f, "M28 S{slot}"),
            Command::StopRecording => f.write_str("M29"),
        }
    }
}
