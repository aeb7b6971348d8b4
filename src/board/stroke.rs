use serde::{Deserialize, Serialize};

use crate::types::Point;

/// Freehand tools. Erase is a visual eraser: a thick white stroke, not a
/// transparency removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tool {
    Draw,
    Erase,
}

impl Tool {
    pub fn stroke_color(self) -> &'static str {
        match self {
            Tool::Draw => "#000000",
            Tool::Erase => "#ffffff",
        }
    }

    pub fn stroke_width(self) -> f64 {
        match self {
            Tool::Draw => 2.0,
            Tool::Erase => 20.0,
        }
    }
}

/// Which tool is armed, if any. Draw and erase are mutually exclusive;
/// enabling one disables the other, and toggling the active tool turns it off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolState {
    active: Option<Tool>,
}

impl ToolState {
    pub fn active(&self) -> Option<Tool> {
        self.active
    }

    pub fn is_active(&self, tool: Tool) -> bool {
        self.active == Some(tool)
    }

    pub fn toggle(&mut self, tool: Tool) {
        self.active = if self.active == Some(tool) {
            None
        } else {
            Some(tool)
        };
    }
}

/// One line segment of an in-progress stroke
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Pointer-driven stroke capture, modeled as an explicit two-state machine
/// (idle / stroking) instead of a boolean flag.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum StrokePhase {
    #[default]
    Idle,
    Stroking {
        last: Point,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StrokeMachine {
    phase: StrokePhase,
}

impl StrokeMachine {
    pub fn is_stroking(&self) -> bool {
        matches!(self.phase, StrokePhase::Stroking { .. })
    }

    /// Pointer-down: enter the stroking phase at the start point
    pub fn begin(&mut self, at: Point) {
        self.phase = StrokePhase::Stroking { last: at };
    }

    /// Pointer-move: when stroking, yields the segment from the previous
    /// point and advances. Ignored while idle.
    pub fn extend(&mut self, to: Point) -> Option<Segment> {
        match self.phase {
            StrokePhase::Stroking { last } => {
                self.phase = StrokePhase::Stroking { last: to };
                Some(Segment { from: last, to })
            }
            StrokePhase::Idle => None,
        }
    }

    /// Pointer-up/cancel/leave: back to idle. Returns true when a stroke was
    /// actually in progress, which is the caller's cue to snapshot the canvas.
    pub fn finish(&mut self) -> bool {
        let was_stroking = self.is_stroking();
        self.phase = StrokePhase::Idle;
        was_stroking
    }
}

/// Ticket for one asynchronous snapshot restore
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// Guard for the image-decode race: a restore started before a newer page
/// switch or resize must not paint over current state. Every restore is
/// issued a generation; completions whose generation is no longer current
/// are dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestoreGuard {
    current: u64,
}

impl RestoreGuard {
    /// Start a new restore, invalidating every earlier one
    pub fn issue(&mut self) -> Generation {
        self.current += 1;
        Generation(self.current)
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        generation.0 == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tools_are_mutually_exclusive() {
        let mut tools = ToolState::default();
        tools.toggle(Tool::Draw);
        assert!(tools.is_active(Tool::Draw));

        // Enabling erase must deactivate draw
        tools.toggle(Tool::Erase);
        assert!(tools.is_active(Tool::Erase));
        assert!(!tools.is_active(Tool::Draw));

        // And vice versa
        tools.toggle(Tool::Draw);
        assert!(tools.is_active(Tool::Draw));
        assert!(!tools.is_active(Tool::Erase));
    }

    #[test]
    fn test_toggling_active_tool_turns_it_off() {
        let mut tools = ToolState::default();
        tools.toggle(Tool::Erase);
        tools.toggle(Tool::Erase);
        assert_eq!(tools.active(), None);
    }

    #[test]
    fn test_stroke_machine_idle_ignores_moves() {
        let mut machine = StrokeMachine::default();
        assert_eq!(machine.extend(Point::new(10.0, 10.0)), None);
        assert!(!machine.finish());
    }

    #[test]
    fn test_stroke_machine_emits_segments_while_stroking() {
        let mut machine = StrokeMachine::default();
        machine.begin(Point::new(0.0, 0.0));
        assert!(machine.is_stroking());

        let seg = machine.extend(Point::new(3.0, 4.0)).unwrap();
        assert_eq!(seg.from, Point::new(0.0, 0.0));
        assert_eq!(seg.to, Point::new(3.0, 4.0));

        let seg = machine.extend(Point::new(5.0, 5.0)).unwrap();
        assert_eq!(seg.from, Point::new(3.0, 4.0));

        assert!(machine.finish());
        assert!(!machine.is_stroking());
    }

    #[test]
    fn test_restore_guard_drops_stale_generations() {
        let mut guard = RestoreGuard::default();
        let first = guard.issue();
        assert!(guard.is_current(first));

        // A newer restore supersedes the in-flight one
        let second = guard.issue();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn test_tool_styles() {
        assert_eq!(Tool::Draw.stroke_color(), "#000000");
        assert_eq!(Tool::Draw.stroke_width(), 2.0);
        assert_eq!(Tool::Erase.stroke_color(), "#ffffff");
        assert_eq!(Tool::Erase.stroke_width(), 20.0);
    }
}
