//! One directory listing instance.
//!
//! ## Layout
//!
//! - **Desktop (> 768px)**: favorites panel to the left of the table
//! - **Mobile (< 768px)**: favorites panel stacked above the table

use leptos::prelude::*;
use leptos_use::use_media_query;

use super::breadcrumb::Breadcrumb;
use super::context::ListContext;
use super::dialogs::{DeleteDialog, RenameDialog, TransferDialog};
use super::favorites::FavoritesPanel;
use super::table::ListTable;
use super::toolbar::Toolbar;
use super::upload::UploadList;
use crate::components::notify::use_notifier;
use crate::components::router::{use_navigation, use_oss_path};
use crate::config::NARROW_LAYOUT_QUERY;

stylance::import_crate_style!(css, "src/components/file_list/file_list.module.css");

/// Listing of one bucket directory.
///
/// In the default mode the directory is the URL path and every operation is
/// available. With `picker` set, the directory is local state seeded from
/// `root`, only directories are listed, and the list is reduced to
/// navigation; `on_change` reports each directory the user opens.
#[component]
pub fn FileList(
    #[prop(optional)] root: Option<String>,
    #[prop(optional)] picker: bool,
    #[prop(optional)] on_change: Option<Callback<String>>,
) -> impl IntoView {
    let oss = use_oss_path();
    let list = ListContext::new(
        oss.credentials,
        use_navigation(),
        use_notifier(),
        root.unwrap_or_default(),
        picker,
        on_change,
    );
    provide_context(list);
    list.start_fetching();

    let narrow = use_media_query(NARROW_LAYOUT_QUERY);
    let body_class = move || {
        if narrow.get() {
            format!("{} {}", css::body, css::stacked)
        } else {
            css::body.to_string()
        }
    };

    view! {
        <div class=if picker { css::pickerList } else { css::fileList }>
            <Breadcrumb />
            <Toolbar />
            {(!picker).then(|| view! { <UploadList /> })}
            <div class=body_class>
                <Show when=move || list.show_favorite.get()>
                    <FavoritesPanel />
                </Show>
                <ListTable />
            </div>
            {(!picker).then(|| view! {
                <TransferDialog />
                <RenameDialog />
                <DeleteDialog />
            })}
        </div>
    }
}
