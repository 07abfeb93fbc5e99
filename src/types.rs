// src/types.rs

// Run state of the widget
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum RunState {
    #[default]
    Running,
    Paused,
}

impl RunState {
    pub fn toggled(self) -> Self {
        match self {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
        }
    }

    pub fn is_running(self) -> bool {
        self == RunState::Running
    }

    // Caption of the run button: the action it will perform next
    pub fn button_label(self) -> &'static str {
        match self {
            RunState::Running => "Stop",
            RunState::Paused => "Continue",
        }
    }
}

// Commands the host dispatcher sends to the controller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetCommand {
    Tick,
    ToggleRun,
    ShowAverage,
}
