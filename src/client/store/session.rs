use crate::model::session::SessionDto;

/// Session state shown in the navbar.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub session: Option<SessionDto>,
    /// Whether the session request has completed
    pub fetched: bool,
}
