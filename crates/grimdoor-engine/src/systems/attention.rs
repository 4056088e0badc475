//! Tab-title attention trick: swap the document title while the tab is
//! hidden, restore it when the visitor comes back.

/// Default attention string shown while the tab is hidden.
pub const DEFAULT_ATTENTION_TITLE: &str = "⚠️ DON'T LOOK BEHIND YOU";

#[derive(Debug)]
pub struct TabAttention {
    page_title: String,
    attention_title: String,
    hidden: bool,
}

impl TabAttention {
    pub fn new(attention_title: impl Into<String>) -> Self {
        Self {
            page_title: String::new(),
            attention_title: attention_title.into(),
            hidden: false,
        }
    }

    /// Remember the real page title, captured by the bridge at startup.
    pub fn set_page_title(&mut self, title: &str) {
        self.page_title = title.to_owned();
    }

    /// Visibility changed. Returns the title to display, or `None` when the
    /// state did not actually change.
    pub fn on_visibility_change(&mut self, hidden: bool) -> Option<&str> {
        if hidden == self.hidden {
            return None;
        }
        self.hidden = hidden;
        Some(if hidden {
            &self.attention_title
        } else {
            &self.page_title
        })
    }
}

impl Default for TabAttention {
    fn default() -> Self {
        Self::new(DEFAULT_ATTENTION_TITLE)
    }
}
