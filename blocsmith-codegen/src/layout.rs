//! Output directory planning.

use std::path::{Path, PathBuf};

/// Where the generated files go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Directory the files are written into
    pub target_dir: PathBuf,
    /// Whether a folder named after the class was requested
    pub create_subfolder: bool,
}

impl Layout {
    /// Decide the target directory for `snake` under `base_dir`.
    ///
    /// With `create_subfolder`, a base directory whose last segment already
    /// equals `snake` is reused instead of nesting `snake/snake`.
    pub fn resolve(base_dir: &Path, snake: &str, create_subfolder: bool) -> Self {
        let target_dir = if create_subfolder && !ends_with_segment(base_dir, snake) {
            base_dir.join(snake)
        } else {
            base_dir.to_path_buf()
        };

        Self {
            target_dir,
            create_subfolder,
        }
    }
}

fn ends_with_segment(dir: &Path, segment: &str) -> bool {
    dir.file_name().is_some_and(|name| name == segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subfolder_uses_base() {
        let layout = Layout::resolve(Path::new("/proj/cart"), "cart", false);
        assert_eq!(layout.target_dir, PathBuf::from("/proj/cart"));
        assert!(!layout.create_subfolder);

        let layout = Layout::resolve(Path::new("/proj"), "cart", false);
        assert_eq!(layout.target_dir, PathBuf::from("/proj"));
    }

    #[test]
    fn test_subfolder_is_joined() {
        let layout = Layout::resolve(Path::new("/proj"), "order_summary", true);
        assert_eq!(layout.target_dir, PathBuf::from("/proj/order_summary"));
        assert!(layout.create_subfolder);
    }

    #[test]
    fn test_subfolder_not_nested_twice() {
        let layout = Layout::resolve(Path::new("/x/user_profile"), "user_profile", true);
        assert_eq!(layout.target_dir, PathBuf::from("/x/user_profile"));
    }

    #[test]
    fn test_trailing_separator_is_ignored() {
        let layout = Layout::resolve(Path::new("/x/user_profile/"), "user_profile", true);
        assert_eq!(layout.target_dir, PathBuf::from("/x/user_profile/"));
    }

    #[test]
    fn test_partial_segment_match_still_nests() {
        let layout = Layout::resolve(Path::new("/x/my_user_profile"), "user_profile", true);
        assert_eq!(
            layout.target_dir,
            PathBuf::from("/x/my_user_profile/user_profile")
        );
    }
}
