/// A single subtitle display event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    pub(crate) start_time: String,
    pub(crate) end_time: String,
    pub(crate) text: String,
}

impl Cue {
    pub fn new(start_time: &str, end_time: &str) -> Self {
        Self {
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            text: String::new(),
        }
    }

    pub fn append_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(text);
    }

    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }
}
