use std::path::{Path, PathBuf};

/// Sheet file name looked up inside the icons directory.
pub const SHEET_NAME: &str = "sheets.svg";

/// Where the sheet is read from and the icons are written to.
/// Icons land next to the sheet they were cut from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub sheet: PathBuf,
    pub output_dir: PathBuf,
}

impl Layout {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            sheet: dir.join(SHEET_NAME),
            output_dir: dir.to_owned(),
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn in_dir_test() {
        let layout = Layout::in_dir("app/src/assets/icons");
        assert_eq!(
            layout.sheet,
            Path::new("app/src/assets/icons/sheets.svg")
        );
        assert_eq!(layout.output_dir, Path::new("app/src/assets/icons"));
    }
}
