//! Credential file watcher
//!
//! Another polltui instance logging in or out rewrites or deletes the shared
//! credential file. The watcher reloads the session whenever that file is
//! touched; the session then publishes the new authenticated flag on its
//! `watch` channel, which the render loop picks up.

use std::path::Path;

use anyhow::{Context, Result};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::session::Session;

/// Whether a filesystem event concerns the credential file
pub fn touches_credential(event: &Event, credential_path: &Path) -> bool {
    let relevant_kind = matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) | EventKind::Any
    );
    relevant_kind
        && event
            .paths
            .iter()
            .any(|p| p.file_name() == credential_path.file_name())
}

/// Start watching the session's credential file.
///
/// The returned watcher must be kept alive for as long as events are wanted.
pub fn spawn_session_watcher(session: Session) -> Result<RecommendedWatcher> {
    let credential_path = session.path().to_path_buf();
    let dir = credential_path
        .parent()
        .map(Path::to_path_buf)
        .context("credential path has no parent directory")?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
        match res {
            Ok(event) => {
                if touches_credential(&event, &credential_path) && session.reload() {
                    tracing::info!(
                        authenticated = session.is_authenticated(),
                        "credential changed by another instance"
                    );
                }
            }
            Err(e) => tracing::warn!(error = %e, "credential watcher error"),
        }
    })
    .context("Failed to create credential watcher")?;

    // The file itself may not exist yet, so watch its directory
    watcher
        .watch(&dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("Failed to watch {}", dir.display()))?;

    Ok(watcher)
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, ModifyKind, RemoveKind};
    use std::path::PathBuf;

    fn event(kind: EventKind, path: &str) -> Event {
        Event::new(kind).add_path(PathBuf::from(path))
    }

    #[test]
    fn test_touches_credential_matches_file_name() {
        let cred = Path::new("/home/u/.config/polltui/token");
        assert!(touches_credential(
            &event(EventKind::Create(CreateKind::File), "/home/u/.config/polltui/token"),
            cred
        ));
        assert!(touches_credential(
            &event(EventKind::Remove(RemoveKind::File), "/home/u/.config/polltui/token"),
            cred
        ));
        assert!(touches_credential(
            &event(EventKind::Modify(ModifyKind::Any), "/home/u/.config/polltui/token"),
            cred
        ));
    }

    #[test]
    fn test_other_files_ignored() {
        let cred = Path::new("/home/u/.config/polltui/token");
        assert!(!touches_credential(
            &event(EventKind::Create(CreateKind::File), "/home/u/.config/polltui/config.yaml"),
            cred
        ));
        assert!(!touches_credential(
            &event(EventKind::Access(notify::event::AccessKind::Any), "/home/u/.config/polltui/token"),
            cred
        ));
    }
}
