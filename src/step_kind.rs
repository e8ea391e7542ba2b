//! Structural role of a script step, used to rebuild indentation.

/// Step names that open a nested block.
pub const OPEN_STEPS: [&str; 2] = ["Loop", "If"];
/// Step names that close a nested block.
pub const CLOSE_STEPS: [&str; 2] = ["End Loop", "End If"];
/// Step names that sit between the branches of a block.
pub const MIDDLE_STEPS: [&str; 2] = ["Else", "Else If"];

/// Names of steps that only hold a human comment. FileMaker labels the step
/// after the UI language of the exporting client.
pub const COMMENT_STEPS: [&str; 2] = ["# (コメント)", "# (comment)"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Open,
    Close,
    Middle,
    Other,
}

impl StepKind {
    pub fn classify(name: &str) -> Self {
        if OPEN_STEPS.contains(&name) {
            StepKind::Open
        } else if CLOSE_STEPS.contains(&name) {
            StepKind::Close
        } else if MIDDLE_STEPS.contains(&name) {
            StepKind::Middle
        } else {
            StepKind::Other
        }
    }

    /// Depth change applied before the step's own lines are emitted.
    pub fn before_delta(self) -> isize {
        match self {
            StepKind::Close | StepKind::Middle => -1,
            StepKind::Open | StepKind::Other => 0,
        }
    }

    /// Depth change applied after the step's own lines are emitted.
    pub fn after_delta(self) -> isize {
        match self {
            StepKind::Open | StepKind::Middle => 1,
            StepKind::Close | StepKind::Other => 0,
        }
    }
}

pub fn is_comment_step(name: &str) -> bool {
    COMMENT_STEPS.contains(&name)
}

/// Apply a signed delta to an indentation depth, never going below zero.
pub fn apply_delta(depth: usize, delta: isize) -> usize {
    depth.saturating_add_signed(delta)
}
