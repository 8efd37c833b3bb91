//! Built-in scenarios, runnable with `--demo`.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scenario {
    pub caption: &'static str,
    pub config: &'static [i64],
    pub commands: &'static [i64],
}

impl Scenario {
    const fn new(caption: &'static str, commands: &'static [i64]) -> Self {
        Self {
            caption,
            config: &[4, 4, 2, 2],
            commands,
        }
    }
}

pub const SCENARIOS: [Scenario; 5] = [
    Scenario::new("rotation CW for 360 deg", &[3, 3, 3, 3]),
    Scenario::new("rotation CCW for 360 deg", &[4, 4, 4, 4]),
    Scenario::new("move forward / backward", &[1, 1, 2, 2, 1, 1]),
    Scenario::new("unexpected command", &[1, 12, 2, 2, 1, 1]),
    Scenario::new("task example data", &[1, 4, 1, 3, 2, 3, 2, 4, 1, 0]),
];
