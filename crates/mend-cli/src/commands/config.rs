use mend_core::{MendConfig, MendResult};

pub fn handle(config: &MendConfig) -> MendResult<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}
