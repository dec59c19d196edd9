//! Directory listing UI.
//!
//! Components:
//! - [`FileList`] - One listing instance (full browser or directory picker)
//! - `Breadcrumb` - Path bar with inline editor and favorite star
//! - `Toolbar` - Batch operations, upload, refresh, load all
//! - `ListTable` - Sortable table with per-row actions
//! - `FavoritesPanel` - Saved keys for quick navigation
//! - Dialogs for move/copy (with a nested picker), rename and batch delete

mod breadcrumb;
mod context;
mod dialogs;
mod favorites;
#[allow(clippy::module_inception)]
mod file_list;
mod table;
mod toolbar;
mod upload;

pub use file_list::FileList;
