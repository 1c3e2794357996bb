use crate::config::Layout;
use crate::scanner::Blocks;
use crate::sheet_file::{read_sheet, write_icon, Error, Result};
use log::{info, warn};
use sanitize_filename::sanitize;
use std::borrow::Cow;
use std::io::{stdout, Write};
use std::path::{Component, Path};

pub const COMPLETION: &str = "\nAll icons extracted successfully!";

/// Cut every marked block out of `source` into `output_dir`,
/// reporting progress on stdout. Returns the number of icons written.
pub fn split(source: &str, output_dir: &Path) -> Result<usize> {
    split_to(source, output_dir, &mut stdout().lock())
}

/// As `split`, reporting to `report`.
/// Icons already written stay in place if a later write fails.
pub fn split_to(source: &str, output_dir: &Path, report: &mut impl Write) -> Result<usize> {
    let mut count = 0;
    for block in Blocks::new(source) {
        let fname = icon_name(&block.filename);
        if fname != block.filename {
            warn!("marker {} written as {fname}", block.filename);
        }
        write_icon(&output_dir.join(&*fname), &block.content)?;
        writeln!(report, "Created: {fname}").map_err(Error::Report)?;
        count += 1;
    }
    writeln!(report, "{COMPLETION}").map_err(Error::Report)?;
    Ok(count)
}

/// The marker name as is, unless it would reach outside the output directory.
fn icon_name(name: &str) -> Cow<'_, str> {
    let mut components = Path::new(name).components();
    let plain = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if plain && !name.contains(['/', '\\']) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(sanitize(name))
    }
}

pub fn split_sheet(layout: &Layout) -> Result<usize> {
    let source = read_sheet(&layout.sheet)?;
    let count = split(&source, &layout.output_dir)?;
    info!("{count} icons written to {}", layout.output_dir.display());
    Ok(count)
}
