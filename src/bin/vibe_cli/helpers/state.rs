// ABOUTME: Stored-session helpers for vibe-cli
// ABOUTME: Loads the session controller from disk and writes it back after a mutation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{anyhow, bail, Result};
use vibe_fitness::models::UserProfile;
use vibe_fitness::session::SessionController;
use vibe_fitness::storage::{self, StateStore};

/// Load the stored session; fails when nobody has onboarded yet
pub fn load_onboarded(store: &dyn StateStore) -> Result<SessionController> {
    let state = storage::load_session(store)?;
    if !state.is_onboarded() {
        bail!("No profile stored. Run `vibe-cli profile set <file>` first");
    }
    Ok(SessionController::from_state(state))
}

/// Persist the controller's state
pub fn persist(store: &dyn StateStore, session: SessionController) -> Result<()> {
    storage::save_session(store, &session.into_state())?;
    Ok(())
}

/// Profile of an onboarded session
pub fn profile_of(session: &SessionController) -> Result<&UserProfile> {
    session
        .profile()
        .ok_or_else(|| anyhow!("Session has no profile"))
}
