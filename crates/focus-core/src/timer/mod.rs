mod engine;
mod mode;

pub use engine::{TimerEngine, TimerState};
pub use mode::{
    ModeSpec, TimerMode, CUSTOM_MINUTES_DEFAULT, CUSTOM_MINUTES_MAX, CUSTOM_MINUTES_MIN,
};
