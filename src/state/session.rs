#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Caller-owned session holding the accepted identity, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub username: Option<String>,
}

impl SessionState {
    pub fn accept(&mut self, name: String) {
        self.username = Some(name);
    }

    pub fn leave(&mut self) {
        self.username = None;
    }

    pub fn is_signed_in(&self) -> bool {
        self.username.is_some()
    }
}
