//! # Display state
//!
//! What the widget shows, derived from each observed count.
//!
//! The machine starts in `Loading`, moves to `Showing` on the first successful
//! poll, and can bounce between `Showing` and `Error` for the rest of its life.
//! The last rendered value survives error episodes, so a recovery poll still
//! computes its direction against the value the viewer last saw rather than
//! starting over.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Increasing,
    Decreasing,
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Display {
    Loading,
    Showing { count: i64, direction: Direction },
    Error,
}

pub struct DisplayState {
    display: Display,
    previous: Option<i64>,
    direction: Direction,
}

impl DisplayState {
    pub fn new() -> Self {
        Self {
            display: Display::Loading,
            previous: None,
            direction: Direction::Unknown,
        }
    }

    /// A poll succeeded. Direction compares against the last rendered value;
    /// an equal value carries the previous direction forward.
    pub fn observe(&mut self, count: i64) {
        if let Some(previous) = self.previous {
            if count > previous {
                self.direction = Direction::Increasing;
            } else if count < previous {
                self.direction = Direction::Decreasing;
            }
        }

        self.previous = Some(count);
        self.display = Display::Showing {
            count,
            direction: self.direction,
        };
    }

    /// A poll failed. The comparison baseline is kept so the next successful
    /// poll self-heals with a correct direction.
    pub fn fail(&mut self) {
        self.display = Display::Error;
    }

    pub fn display(&self) -> Display {
        self.display
    }

    pub fn render(&self) -> String {
        match self.display {
            Display::Loading => "Loading viewer count...".to_string(),
            Display::Error => "Unable to load viewer count. Please try again later.".to_string(),
            Display::Showing { count, direction } => {
                let noun = if count == 1 { "viewer" } else { "viewers" };
                let arrow = match direction {
                    Direction::Increasing => " ↑",
                    Direction::Decreasing => " ↓",
                    Direction::Unknown => "",
                };

                format!("{count} {noun} online{arrow}")
            }
        }
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, Display, DisplayState};

    #[test]
    fn starts_loading() {
        let state = DisplayState::new();

        assert_eq!(state.display(), Display::Loading);
        assert_eq!(state.render(), "Loading viewer count...");
    }

    #[test]
    fn first_observation_has_no_direction() {
        let mut state = DisplayState::new();
        state.observe(3);

        assert_eq!(
            state.display(),
            Display::Showing {
                count: 3,
                direction: Direction::Unknown
            }
        );
        assert_eq!(state.render(), "3 viewers online");
    }

    #[test]
    fn direction_follows_the_comparison() {
        let mut state = DisplayState::new();

        state.observe(1);
        state.observe(4);
        assert_eq!(
            state.display(),
            Display::Showing {
                count: 4,
                direction: Direction::Increasing
            }
        );

        state.observe(2);
        assert_eq!(
            state.display(),
            Display::Showing {
                count: 2,
                direction: Direction::Decreasing
            }
        );
        assert_eq!(state.render(), "2 viewers online ↓");
    }

    #[test]
    fn equal_values_carry_the_previous_direction() {
        let mut state = DisplayState::new();

        state.observe(1);
        state.observe(2);
        state.observe(2);
        assert_eq!(
            state.display(),
            Display::Showing {
                count: 2,
                direction: Direction::Increasing
            }
        );
    }

    #[test]
    fn errors_keep_the_comparison_baseline() {
        let mut state = DisplayState::new();

        state.observe(3);
        state.fail();
        assert_eq!(state.display(), Display::Error);
        assert_eq!(
            state.render(),
            "Unable to load viewer count. Please try again later."
        );

        state.observe(1);
        assert_eq!(
            state.display(),
            Display::Showing {
                count: 1,
                direction: Direction::Decreasing
            }
        );
        assert_eq!(state.render(), "1 viewer online ↓");
    }
}
