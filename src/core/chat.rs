/// Text typed into the chat box. Sending only hands the text back for logging.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatDraft {
    text: String,
}

impl ChatDraft {
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn can_send(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Take the draft if it has content, leaving it empty.
    pub fn send(&mut self) -> Option<String> {
        if !self.can_send() {
            return None;
        }
        Some(std::mem::take(&mut self.text))
    }
}
