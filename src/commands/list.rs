use anyhow::Result;

pub fn cmd() -> Result<()> {
    let mut coordinator = super::coordinator()?;
    coordinator.show_list();
    Ok(())
}
