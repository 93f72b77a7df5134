use anyhow::Result;

/// Interactive loop over the list and detail screens until the user quits.
pub fn cmd() -> Result<()> {
    super::coordinator()?.run()
}
