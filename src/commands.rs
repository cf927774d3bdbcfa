//! Plugin commands.
//!
//! Event scripts talk to the region system through two commands, `hide` and
//! `show`, each taking a region id. Arguments arrive as text and are validated
//! here; the region core trusts what it receives.

use std::fmt;
use std::str::FromStr;

use crate::error::CommandError;
use crate::region::RegionId;

/// Region targeted when a command omits its argument.
pub const DEFAULT_REGION: RegionId = RegionId(1);

/// A validated plugin command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PluginCommand {
    Hide(RegionId),
    Show(RegionId),
}

impl PluginCommand {
    pub fn region(&self) -> RegionId {
        match self {
            PluginCommand::Hide(region) | PluginCommand::Show(region) => *region,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PluginCommand::Hide(_) => "hide",
            PluginCommand::Show(_) => "show",
        }
    }
}

impl fmt::Display for PluginCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.region())
    }
}

impl FromStr for PluginCommand {
    type Err = CommandError;

    /// Parse `"hide 5"` / `"SHOW 12"`. A missing region id means region 1.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let verb = parts.next().unwrap_or_default();
        let command: fn(RegionId) -> PluginCommand = match verb.to_ascii_lowercase().as_str() {
            "hide" => PluginCommand::Hide,
            "show" => PluginCommand::Show,
            _ => return Err(CommandError::UnknownCommand(verb.to_string())),
        };

        let region = match parts.next() {
            Some(arg) => {
                let value: i64 = arg
                    .parse()
                    .map_err(|_| CommandError::InvalidArgument(arg.to_string()))?;
                RegionId::new(value)?
            }
            None => DEFAULT_REGION,
        };

        if let Some(extra) = parts.next() {
            return Err(CommandError::TrailingArgument(extra.to_string()));
        }

        Ok(command(region))
    }
}

/// Parse a command script: one command per line, `#` starts a comment.
pub fn parse_script(script: &str) -> Result<Vec<PluginCommand>, CommandError> {
    let mut commands = Vec::new();
    for (i, raw) in script.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let command = line.parse::<PluginCommand>().map_err(|e| CommandError::Script {
            line: i + 1,
            source: Box::new(e),
        })?;
        commands.push(command);
    }
    Ok(commands)
}
