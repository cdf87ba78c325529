/// Which auth modal, if any, is on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    SigningIn,
    SigningUp,
}

impl ModalState {
    #[inline]
    pub fn sign_in_visible(self) -> bool {
        self == ModalState::SigningIn
    }

    #[inline]
    pub fn sign_up_visible(self) -> bool {
        self == ModalState::SigningUp
    }

    #[inline]
    pub fn is_open(self) -> bool {
        self != ModalState::Closed
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalAction {
    OpenSignIn,
    OpenSignUp,
    Close,
    SwitchToSignUp,
    SwitchToSignIn,
}

/// Pure transition function. Returns `None` when the action does not apply
/// in `state` (switching from the wrong modal, closing when closed).
pub fn transition(state: ModalState, action: ModalAction) -> Option<ModalState> {
    use ModalAction as A;
    use ModalState as S;
    match (state, action) {
        (_, A::OpenSignIn) => Some(S::SigningIn),
        (_, A::OpenSignUp) => Some(S::SigningUp),
        (S::Closed, A::Close) => None,
        (_, A::Close) => Some(S::Closed),
        (S::SigningIn, A::SwitchToSignUp) => Some(S::SigningUp),
        (S::SigningUp, A::SwitchToSignIn) => Some(S::SigningIn),
        (_, A::SwitchToSignUp | A::SwitchToSignIn) => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellAction {
    Modal(ModalAction),
    ToggleMobileMenu,
    TogglePasswordVisibility,
}

/// Presentation state owned by the page shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShellState {
    pub modal: ModalState,
    pub mobile_menu_open: bool,
    pub password_visible: bool,
}

impl ShellState {
    /// Apply an action; returns whether anything changed.
    pub fn apply(&mut self, action: ShellAction) -> bool {
        let before = *self;
        match action {
            ShellAction::Modal(a) => {
                if let Some(next) = transition(self.modal, a) {
                    self.modal = next;
                    self.password_visible = false;
                }
            }
            ShellAction::ToggleMobileMenu => self.mobile_menu_open = !self.mobile_menu_open,
            ShellAction::TogglePasswordVisibility => {
                if self.modal.is_open() {
                    self.password_visible = !self.password_visible;
                }
            }
        }
        *self != before
    }
}

/// Global keyboard shortcuts understood by the shell.
#[inline]
pub fn action_for_key(key: &str, state: &ShellState) -> Option<ShellAction> {
    match key {
        "Escape" | "Esc" if state.modal.is_open() => Some(ShellAction::Modal(ModalAction::Close)),
        _ => None,
    }
}
