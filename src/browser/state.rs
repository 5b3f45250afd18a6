//! View state of the Notebook Browser.
//!
//! Holds the selected directory, selected file and loaded content, and
//! hands out request tickets so late responses can be recognised and dropped.

/// A UI region that a remote response writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Directories,
    Files,
    Preview,
    Import,
}

impl Slot {
    fn index(self) -> usize {
        match self {
            Slot::Directories => 0,
            Slot::Files => 1,
            Slot::Preview => 2,
            Slot::Import => 3,
        }
    }
}

/// Issued before a request; a response is applied only while its ticket is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    slot: Slot,
    seq: u64,
}

#[derive(Debug, Default, Clone)]
pub struct ViewState {
    current_directory: Option<String>,
    current_file: Option<String>,
    file_content: Option<String>,
    seq: u64,
    latest: [u64; 4],
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_directory(&self) -> Option<&str> {
        self.current_directory.as_deref()
    }

    pub fn current_file(&self) -> Option<&str> {
        self.current_file.as_deref()
    }

    pub fn file_content(&self) -> Option<&str> {
        self.file_content.as_deref()
    }

    /// The (directory, file) pair an import would target.
    pub fn selected_pair(&self) -> Option<(&str, &str)> {
        match (&self.current_directory, &self.current_file) {
            (Some(dir), Some(file)) => Some((dir.as_str(), file.as_str())),
            _ => None,
        }
    }

    pub fn import_enabled(&self) -> bool {
        self.selected_pair().is_some() && self.file_content.is_some()
    }

    // ------------------------------------------------------------------------
    // Tickets
    // ------------------------------------------------------------------------

    pub fn issue(&mut self, slot: Slot) -> Ticket {
        self.seq += 1;
        self.latest[slot.index()] = self.seq;
        Ticket { slot, seq: self.seq }
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.latest[ticket.slot.index()] == ticket.seq
    }

    /// Make every outstanding ticket for `slot` stale.
    pub fn invalidate(&mut self, slot: Slot) {
        self.seq += 1;
        self.latest[slot.index()] = self.seq;
    }

    // ------------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------------

    /// Switch directory. Drops the file selection and any in-flight preview.
    pub fn enter_directory(&mut self, directory: &str) {
        self.current_directory = if directory.is_empty() {
            None
        } else {
            Some(directory.to_string())
        };
        self.clear_file();
        self.invalidate(Slot::Files);
        self.invalidate(Slot::Preview);
    }

    pub fn load_file(&mut self, file: &str, content: String) {
        self.current_file = Some(file.to_string());
        self.file_content = Some(content);
    }

    pub fn clear_file(&mut self) {
        self.current_file = None;
        self.file_content = None;
    }
}
