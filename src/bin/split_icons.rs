use icon_split::{config::Layout, sheet_file::Result, split::split_sheet};
use log::debug;

fn main() -> Result<()> {
    env_logger::init();
    let layout = Layout::default();
    debug!("{layout:?}");
    split_sheet(&layout)?;
    Ok(())
}
