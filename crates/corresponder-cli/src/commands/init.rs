//! Module for writing a [`corresponder`] configuration file.

use super::*;

/// Arguments that can be used for the [`Commands::Init`]
#[derive(Args, Clone)]
pub struct InitArgs {
  /// Overwrite an existing configuration file without asking
  #[arg(long)]
  pub force: bool,
}

/// Function for the [`Commands::Init`] in the CLI.
pub fn init<I: UserInteraction>(interaction: &I, path: &Path, init_args: &InitArgs) -> Result<()> {
  if path.exists()
    && !init_args.force
    && !interaction.confirm(&format!(
      "A configuration already exists at {}, do you want to overwrite it?",
      path.display()
    ))?
  {
    interaction.reply(ResponseContent::Info("Keeping the existing configuration"))?;
    return Ok(());
  }

  Config::default().save(path)?;
  interaction.reply(ResponseContent::Success(&format!(
    "Wrote default configuration to {}",
    path.display()
  )))
}
