/// Form lifecycle: Idle -> Loading -> {Success, Error}. Success and Error
/// keep their panel visible until the next submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// What the page shows for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelVisibility {
    pub loading: bool,
    pub error: bool,
    pub result: bool,
    pub submit_enabled: bool,
}

impl FormState {
    /// A valid submission starts a request. Fails while one is in flight.
    pub fn begin(self) -> Option<FormState> {
        match self {
            FormState::Loading => None,
            _ => Some(FormState::Loading),
        }
    }

    pub fn succeed(self) -> Option<FormState> {
        match self {
            FormState::Loading => Some(FormState::Success),
            _ => None,
        }
    }

    /// A request that came back without an image.
    pub fn fail(self) -> Option<FormState> {
        match self {
            FormState::Loading => Some(FormState::Error),
            _ => None,
        }
    }

    /// A local failure (rejected prompt, nothing to download, file write
    /// error). No request is in flight, so Loading can't be interrupted.
    pub fn reject(self) -> Option<FormState> {
        match self {
            FormState::Loading => None,
            _ => Some(FormState::Error),
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, FormState::Loading)
    }

    pub fn panels(&self) -> PanelVisibility {
        match self {
            FormState::Idle => PanelVisibility {
                loading: false,
                error: false,
                result: false,
                submit_enabled: true,
            },
            FormState::Loading => PanelVisibility {
                loading: true,
                error: false,
                result: false,
                submit_enabled: false,
            },
            FormState::Success => PanelVisibility {
                loading: false,
                error: false,
                result: true,
                submit_enabled: true,
            },
            FormState::Error => PanelVisibility {
                loading: false,
                error: true,
                result: false,
                submit_enabled: true,
            },
        }
    }
}
