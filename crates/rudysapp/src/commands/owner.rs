use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Provider;
use crate::session::SessionState;
use crate::store::StorageBackend;

pub fn login_google<B: StorageBackend>(session: &mut SessionState<B>) -> Result<CmdResult> {
    let owner = session.login_with_google()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Signed in as {}", owner.name)));
    result.owner = Some(owner);
    Ok(result)
}

/// Starts an email or phone sign-in; the code is checked by [`complete_verification`].
pub fn begin_verification<B: StorageBackend>(
    session: &mut SessionState<B>,
    provider: Provider,
    name: &str,
    contact: &str,
) -> Result<CmdResult> {
    let pending = session.begin_verification(provider, name, contact)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Verification code sent to {}",
        pending.contact
    )));
    result.pending = Some(pending);
    Ok(result)
}

pub fn complete_verification<B: StorageBackend>(
    session: &mut SessionState<B>,
    code: &str,
) -> Result<CmdResult> {
    let owner = session.complete_verification(code)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Verified. Signed in as {} via {}",
        owner.name, owner.provider
    )));
    result.owner = Some(owner);
    Ok(result)
}

pub fn logout<B: StorageBackend>(session: &mut SessionState<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if session.is_logged_in() {
        session.logout()?;
        result.add_message(CmdMessage::success("Signed out"));
    } else {
        result.add_message(CmdMessage::info("Not signed in"));
    }
    Ok(result)
}

pub fn whoami<B: StorageBackend>(session: &SessionState<B>) -> CmdResult {
    let mut result = CmdResult::default();
    match session.current_owner() {
        Some(owner) => result.owner = Some(owner.clone()),
        None => {
            if let Some(pending) = session.pending_verification() {
                result.add_message(CmdMessage::info(format!(
                    "Waiting for the verification code sent to {}",
                    pending.contact
                )));
                result.pending = Some(pending);
            } else {
                result.add_message(CmdMessage::info("Not signed in"));
            }
        }
    }
    result
}
