//! CLI - Command Line Interface for Remotui
//!
//! Run without arguments to launch the shell with the saved configuration;
//! flags override individual settings for one run without touching the
//! config file.
//!
//! # Examples
//!
//! ```bash
//! # Launch with defaults
//! remotui
//!
//! # Bigger cursor steps, denser sky
//! remotui --step 4 --stars 400
//!
//! # Reproducible sky layout, or none at all
//! remotui --seed 1918
//! remotui --no-starfield
//! ```

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Upper bound on configurable stars; denser skies stop reading as sky
pub const MAX_STARS: u16 = 2_000;

/// Remotui - remote-cursor media shell for the terminal
#[derive(Parser, Debug)]
#[command(
    name = "remotui",
    version,
    about = "Remote-cursor media shell for the terminal",
    long_about = "A night-sky terminal media shell driven entirely by a \
                  remote-style D-pad cursor.\n\n\
                  Arrow keys move the on-screen cursor, Enter clicks whatever \
                  sits under it. Flags override the saved configuration for \
                  one run.",
    after_help = "EXAMPLES:\n\
                  remotui                     Launch with saved config\n\
                  remotui --step 4            Coarser cursor steps\n\
                  remotui --stars 400         Denser starfield\n\
                  remotui --no-starfield      Plain dark backdrop"
)]
pub struct Cli {
    /// Cursor step size in cells per key press
    #[arg(long, value_name = "CELLS")]
    pub step: Option<f32>,

    /// Number of stars in the backdrop
    #[arg(long, value_name = "COUNT")]
    pub stars: Option<u16>,

    /// Star layout seed (same seed, same sky)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Disable the starfield backdrop
    #[arg(long)]
    pub no_starfield: bool,

    /// Path to config file
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Merge CLI overrides onto a loaded config, validating as we go
    pub fn apply(&self, config: &mut Config) -> Result<(), String> {
        if let Some(step) = self.step {
            validate_step(step)?;
            config.step_size = step;
        }
        if let Some(stars) = self.stars {
            validate_star_count(stars)?;
            config.star_count = stars;
        }
        if let Some(seed) = self.seed {
            config.star_seed = seed;
        }
        if self.no_starfield {
            config.starfield = false;
        }
        Ok(())
    }
}

/// Validate a cursor step size: must be a positive, finite number
pub fn validate_step(step: f32) -> Result<(), String> {
    if !step.is_finite() || step <= 0.0 {
        return Err(format!(
            "invalid step size '{}': must be a positive number",
            step
        ));
    }
    Ok(())
}

/// Validate a star count against the upper bound
pub fn validate_star_count(count: u16) -> Result<(), String> {
    if count > MAX_STARS {
        return Err(format!(
            "invalid star count '{}': at most {} stars",
            count, MAX_STARS
        ));
    }
    Ok(())
}
