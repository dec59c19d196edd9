//! Object-key path helpers.
//!
//! Directories are keys ending in `/`. The bucket root is the empty string,
//! never `/`.

/// Parent directory of a key, `""` when the key sits at the root.
///
/// Works for both files (`a/b.txt` → `a/`) and directories (`a/b/` → `a/`).
pub fn parent_dir(key: &str) -> String {
    let trimmed = key.strip_suffix('/').unwrap_or(key);
    match trimmed.rfind('/') {
        Some(idx) => trimmed[..=idx].to_string(),
        None => String::new(),
    }
}

/// Last component of a key; directories keep their trailing `/`.
pub fn basename(key: &str) -> String {
    match key.strip_suffix('/') {
        Some(dir) => format!("{}/", dir.rsplit('/').next().unwrap_or(dir)),
        None => key.rsplit('/').next().unwrap_or(key).to_string(),
    }
}

/// Normalize a raw path typed into the breadcrumb editor.
///
/// A missing trailing `/` is appended; an empty input stays the root.
pub fn normalize_dir_input(raw: &str) -> String {
    if raw.is_empty() || raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    }
}

/// Directory a favorite navigates to: itself, or its parent for files.
pub fn favorite_target(key: &str) -> String {
    if key.ends_with('/') {
        key.to_string()
    } else {
        parent_dir(key)
    }
}

/// Breadcrumb segment: label plus the directory it navigates to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub target: String,
}

/// Clickable ancestor segments of a directory, root excluded.
///
/// `a/b/` yields `a` → `a/` and `b` → `a/b/`. Empty segments from `//` are
/// kept with an empty label so every target stays a real prefix of `dir`.
pub fn breadcrumbs(dir: &str) -> Vec<Crumb> {
    if dir.is_empty() {
        return Vec::new();
    }
    let mut target = String::new();
    dir.strip_suffix('/')
        .unwrap_or(dir)
        .split('/')
        .map(|segment| {
            target.push_str(segment);
            target.push('/');
            Crumb {
                label: segment.to_string(),
                target: target.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_dir() {
        assert_eq!(parent_dir(""), "");
        assert_eq!(parent_dir("a/"), "");
        assert_eq!(parent_dir("a.txt"), "");
        assert_eq!(parent_dir("a/b/"), "a/");
        assert_eq!(parent_dir("a/b.txt"), "a/");
        assert_eq!(parent_dir("a/b/c/"), "a/b/");
    }

    #[test]
    fn test_basename() {
        assert_eq!(basename("a/b/"), "b/");
        assert_eq!(basename("a/b.txt"), "b.txt");
        assert_eq!(basename("top/"), "top/");
        assert_eq!(basename("file"), "file");
    }

    #[test]
    fn test_normalize_dir_input() {
        assert_eq!(normalize_dir_input(""), "");
        assert_eq!(normalize_dir_input("a/b"), "a/b/");
        assert_eq!(normalize_dir_input("a/b/"), "a/b/");
    }

    #[test]
    fn test_favorite_target() {
        assert_eq!(favorite_target("a/b/"), "a/b/");
        assert_eq!(favorite_target("a/b/c.txt"), "a/b/");
        assert_eq!(favorite_target("c.txt"), "");
    }

    #[test]
    fn test_breadcrumbs() {
        assert!(breadcrumbs("").is_empty());
        let crumbs = breadcrumbs("a/b/");
        assert_eq!(
            crumbs,
            vec![
                Crumb {
                    label: "a".into(),
                    target: "a/".into()
                },
                Crumb {
                    label: "b".into(),
                    target: "a/b/".into()
                },
            ]
        );
    }

    #[test]
    fn test_breadcrumbs_keep_empty_segments() {
        let targets: Vec<String> = breadcrumbs("a//b/").into_iter().map(|c| c.target).collect();
        assert_eq!(targets, vec!["a/", "a//", "a//b/"]);
        assert_eq!(breadcrumbs("a//b/")[1].label, "");

        let leading = breadcrumbs("/x/");
        assert_eq!(leading[0].target, "/");
        assert_eq!(leading.last().map(|c| c.target.as_str()), Some("/x/"));
    }
}
