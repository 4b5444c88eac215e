use crate::domain::model::{PathwayEntry, PathwayModel, SelectorEvent, SelectorSnapshot};
use crate::utils::error::Result;

/// Whole-file storage boundary. Everything here is synchronous; selector
/// sessions run on a single event-dispatch thread.
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn session_name(&self) -> &str;
    fn values_file(&self) -> Option<&str>;
    /// Explicit domain bounds; `None` means derive them from the data set.
    fn explicit_bounds(&self) -> Option<(f64, f64)>;
    fn output_path(&self) -> &str;

    fn report_filename(&self) -> &str {
        "highlight_report.json"
    }
}

/// Supplies user interactions to a selector session. `Ok(None)` means the
/// input is exhausted and the session ends as cancelled.
pub trait EventSource {
    fn next_event(&mut self) -> Result<Option<SelectorEvent>>;
}

/// Receives redisplay and warning notifications from a selector session.
pub trait SelectionView {
    fn render(&mut self, snapshot: &SelectorSnapshot);
    fn warn(&mut self, message: &str);
}

/// Capability view of a pathway hierarchy: enough to mirror it into a check
/// tree without depending on any ontology library.
pub trait PathwaySource {
    type Node;

    fn roots(&self) -> Vec<&Self::Node>;
    fn children<'a>(&self, node: &'a Self::Node) -> Vec<&'a Self::Node>;
    fn display_name<'a>(&self, node: &'a Self::Node) -> &'a str;
}

impl PathwaySource for PathwayModel {
    type Node = PathwayEntry;

    fn roots(&self) -> Vec<&PathwayEntry> {
        self.pathways.iter().collect()
    }

    fn children<'a>(&self, node: &'a PathwayEntry) -> Vec<&'a PathwayEntry> {
        node.children.iter().collect()
    }

    fn display_name<'a>(&self, node: &'a PathwayEntry) -> &'a str {
        &node.name
    }
}
