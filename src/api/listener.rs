/// Receives user-driven selection changes and tooltip taps.
///
/// Not invoked for programmatic selection or redraws.
pub trait SelectionListener {
    fn on_item_selected(&mut self, index: Option<usize>);
}

impl<F> SelectionListener for F
where
    F: FnMut(Option<usize>),
{
    fn on_item_selected(&mut self, index: Option<usize>) {
        self(index);
    }
}

/// Listener that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreSelection;

impl SelectionListener for IgnoreSelection {
    fn on_item_selected(&mut self, _index: Option<usize>) {}
}

/// Listener that keeps every notification, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionLog {
    pub events: Vec<Option<usize>>,
}

impl SelectionListener for SelectionLog {
    fn on_item_selected(&mut self, index: Option<usize>) {
        self.events.push(index);
    }
}
