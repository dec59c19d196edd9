//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuCopy as CopyKey, LuCornerLeftUp as ParentDir,
        LuDownload as Download, LuEllipsisVertical as More, LuEye as Preview, LuFile as File,
        LuFolder as Folder, LuHouse as Home, LuMinus as Empty, LuPencil as Edit,
        LuRotateCw as Refresh, LuShare2 as Share, LuSlash as Separator, LuStar as Star,
        LuStar as StarFilled, LuTrash2 as Delete, LuUpload as Upload, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowClockwise as Refresh, BsArrowUpLeft as ParentDir,
        BsClipboard as CopyKey, BsDash as Empty, BsDownload as Download, BsEye as Preview,
        BsFileEarmark as File, BsFolderFill as Folder, BsHouseFill as Home, BsPencil as Edit,
        BsShare as Share, BsSlashLg as Separator, BsStar as Star, BsStarFill as StarFilled,
        BsThreeDotsVertical as More, BsTrash as Delete, BsUpload as Upload, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(HOME, Home);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(PARENT_DIR, ParentDir);
themed_icon!(EMPTY, Empty);
themed_icon!(EDIT, Edit);
themed_icon!(SEPARATOR, Separator);
themed_icon!(STAR, Star);
themed_icon!(STAR_FILLED, StarFilled);
themed_icon!(MORE, More);
themed_icon!(COPY_KEY, CopyKey);
themed_icon!(PREVIEW, Preview);
themed_icon!(DOWNLOAD, Download);
themed_icon!(SHARE, Share);
themed_icon!(DELETE, Delete);
themed_icon!(UPLOAD, Upload);
themed_icon!(REFRESH, Refresh);
themed_icon!(CLOSE, Close);
