//! Directory listing records and sort state.

use serde::{Deserialize, Serialize};

/// Display name of the synthetic "go to parent" row.
pub const PARENT_ENTRY_NAME: &str = "..";

/// One file or directory returned by a listing call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Last path component; directories keep their trailing `/`.
    pub name: String,
    /// Full object key.
    pub key: String,
    /// Size in bytes, `None` for directories.
    pub size: Option<u64>,
    /// Unix timestamp in seconds, `None` for directories.
    pub last_modified: Option<i64>,
}

impl Entry {
    /// The synthetic row that navigates to the parent directory.
    pub fn parent() -> Self {
        Self {
            name: PARENT_ENTRY_NAME.to_string(),
            key: String::new(),
            size: None,
            last_modified: None,
        }
    }

    pub fn is_parent(&self) -> bool {
        self.key.is_empty() && self.name == PARENT_ENTRY_NAME
    }

    pub fn is_dir(&self) -> bool {
        self.name.ends_with('/')
    }
}

/// Column a listing can be sorted by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    Name,
    Size,
    LastModified,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascend,
    Descend,
}

/// User-selected ordering. Both fields unset means the default name order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    pub field: Option<SortField>,
    pub direction: Option<SortDirection>,
}

impl SortState {
    /// Advances the column header click cycle: ascend, descend, then unset.
    ///
    /// Clicking a different column always starts it at ascend.
    pub fn cycle(self, field: SortField) -> Self {
        if self.field != Some(field) {
            return Self {
                field: Some(field),
                direction: Some(SortDirection::Ascend),
            };
        }
        match self.direction {
            None => Self {
                field: Some(field),
                direction: Some(SortDirection::Ascend),
            },
            Some(SortDirection::Ascend) => Self {
                field: Some(field),
                direction: Some(SortDirection::Descend),
            },
            Some(SortDirection::Descend) => Self::default(),
        }
    }

    /// Direction shown on the given column header, if it is the active one.
    pub fn direction_for(&self, field: SortField) -> Option<SortDirection> {
        if self.field == Some(field) {
            self.direction
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_entry() {
        let parent = Entry::parent();
        assert!(parent.is_parent());
        assert!(!parent.is_dir());
        assert_eq!(parent.key, "");
    }

    #[test]
    fn test_sort_cycle_returns_to_default() {
        let s = SortState::default().cycle(SortField::Size);
        assert_eq!(s.direction_for(SortField::Size), Some(SortDirection::Ascend));
        let s = s.cycle(SortField::Size);
        assert_eq!(s.direction_for(SortField::Size), Some(SortDirection::Descend));
        let s = s.cycle(SortField::Size);
        assert_eq!(s, SortState::default());
    }

    #[test]
    fn test_sort_cycle_switches_column() {
        let s = SortState::default()
            .cycle(SortField::Name)
            .cycle(SortField::Name)
            .cycle(SortField::LastModified);
        assert_eq!(s.field, Some(SortField::LastModified));
        assert_eq!(s.direction, Some(SortDirection::Ascend));
        assert_eq!(s.direction_for(SortField::Name), None);
    }

    #[test]
    fn test_entry_deserializes_backend_shape() {
        let json = r#"{"name":"a/","key":"x/a/","size":null,"last_modified":null}"#;
        let e: Entry = serde_json::from_str(json).unwrap();
        assert!(e.is_dir());
        assert_eq!(e.size, None);
    }
}
