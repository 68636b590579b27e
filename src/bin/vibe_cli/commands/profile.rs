// ABOUTME: Profile commands for vibe-cli
// ABOUTME: Stores a profile, shows it, derives macros, and logs out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{anyhow, bail, Result};
use std::fs;
use std::path::Path;
use tracing::info;
use vibe_fitness::intelligence::derive_macros;
use vibe_fitness::models::UserProfile;
use vibe_fitness::session::SessionController;
use vibe_fitness::storage::{self, StateStore};

use crate::helpers::display::{display_json, display_macros, display_profile};
use crate::helpers::state::persist;

fn read_profile(path: &Path) -> Result<UserProfile> {
    let raw = fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read {}: {e}", path.display()))?;
    let profile: UserProfile = serde_json::from_str(&raw)
        .map_err(|e| anyhow!("{} is not a valid profile: {e}", path.display()))?;
    profile.validate()?;
    Ok(profile)
}

/// Store a profile and print the derived macro targets
///
/// An existing session keeps its tasks and points.
pub fn set(store: &dyn StateStore, file: &Path, json: bool) -> Result<()> {
    let profile = read_profile(file)?;

    let state = storage::load_session(store)?;
    let mut session = SessionController::from_state(state);
    session.set_profile(profile);
    info!(path = %file.display(), "Profile stored");

    match session.macros() {
        Some(macros) if json => display_json(macros)?,
        Some(macros) => display_macros(macros),
        None => bail!("Macro targets were not derived"),
    }

    persist(store, session)
}

/// Print the stored profile
pub fn show(store: &dyn StateStore, json: bool) -> Result<()> {
    let Some(profile) = storage::load_profile(store)? else {
        bail!("No profile stored. Run `vibe-cli profile set <file>` first");
    };

    if json {
        display_json(&profile)
    } else {
        display_profile(&profile);
        Ok(())
    }
}

/// Print macro targets for a profile file, or for the stored profile
pub fn macros(store: &dyn StateStore, file: Option<&Path>, json: bool) -> Result<()> {
    let profile = match file {
        Some(path) => read_profile(path)?,
        None => storage::load_profile(store)?
            .ok_or_else(|| anyhow!("No profile stored; pass --profile <file>"))?,
    };

    let targets = derive_macros(&profile);
    if json {
        display_json(&targets)
    } else {
        display_macros(&targets);
        Ok(())
    }
}

/// Remove the stored profile and session
pub fn logout(store: &dyn StateStore) -> Result<()> {
    storage::clear_session(store)?;
    println!("Logged out. Stored profile and progress removed.");
    Ok(())
}
