use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Selection of at most one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectionState {
    #[default]
    Unselected,
    Selected(usize),
}

impl SelectionState {
    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Unselected => None,
            Self::Selected(index) => Some(index),
        }
    }

    #[must_use]
    pub fn from_index(index: Option<usize>) -> Self {
        index.map_or(Self::Unselected, Self::Selected)
    }
}

/// Outcome of one selection transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionChange {
    pub previous: SelectionState,
    pub current: SelectionState,
    /// Items whose appearance changed: the one deselected and the one
    /// selected, in that order.
    pub dirty: SmallVec<[usize; 2]>,
}

impl SelectionChange {
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.previous == self.current
    }
}

/// What a tap landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TapTarget {
    Tooltip,
    Item(usize),
    Nothing,
}

/// Selection state machine owned by a chart controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    state: SelectionState,
}

impl Selection {
    #[must_use]
    pub fn state(self) -> SelectionState {
        self.state
    }

    #[must_use]
    pub fn selected(self) -> Option<usize> {
        self.state.index()
    }

    #[must_use]
    pub fn is_selected(self, index: usize) -> bool {
        self.state == SelectionState::Selected(index)
    }

    /// Tapping the selected item deselects it; tapping any other selects it.
    pub fn toggle(&mut self, index: usize) -> SelectionChange {
        let next = if self.is_selected(index) {
            SelectionState::Unselected
        } else {
            SelectionState::Selected(index)
        };
        self.transition(next)
    }

    pub fn set(&mut self, index: Option<usize>) -> SelectionChange {
        self.transition(SelectionState::from_index(index))
    }

    pub fn clear(&mut self) -> SelectionChange {
        self.transition(SelectionState::Unselected)
    }

    fn transition(&mut self, next: SelectionState) -> SelectionChange {
        let previous = self.state;
        self.state = next;

        let mut dirty = SmallVec::new();
        if previous != next {
            dirty.extend(previous.index());
            dirty.extend(next.index());
        }
        SelectionChange {
            previous,
            current: next,
            dirty,
        }
    }
}
