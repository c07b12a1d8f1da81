use crate::error::{ChartError, ChartResult};
use crate::extensions::{MARKER_PLUGIN_NAME, OverlayHook};

use super::{Plot, PlotHost};

impl<H: PlotHost> Plot<H> {
    /// Registers an extra overlay hook with a unique identifier.
    ///
    /// The marker overlay is always present under `marker`; that id cannot be
    /// taken by another hook.
    pub fn register_overlay_hook(&mut self, hook: Box<dyn OverlayHook>) -> ChartResult<()> {
        let hook_id = hook.id().to_owned();
        if hook_id.is_empty() {
            return Err(ChartError::InvalidData(
                "overlay hook id must not be empty".to_owned(),
            ));
        }
        if self.has_overlay_hook(&hook_id) {
            return Err(ChartError::InvalidData(format!(
                "overlay hook with id `{hook_id}` is already registered"
            )));
        }
        self.overlay_hooks.push(hook);
        self.request_overlay_redraw();
        Ok(())
    }

    /// Unregisters a hook by id. Returns `true` when removed.
    ///
    /// The built-in marker overlay cannot be unregistered.
    pub fn unregister_overlay_hook(&mut self, hook_id: &str) -> bool {
        if let Some(position) = self
            .overlay_hooks
            .iter()
            .position(|entry| entry.id() == hook_id)
        {
            self.overlay_hooks.remove(position);
            self.request_overlay_redraw();
            return true;
        }
        false
    }

    /// Number of overlay hooks, including the marker overlay.
    #[must_use]
    pub fn overlay_hook_count(&self) -> usize {
        self.overlay_hooks.len() + 1
    }

    #[must_use]
    pub fn has_overlay_hook(&self, hook_id: &str) -> bool {
        hook_id == MARKER_PLUGIN_NAME || self.overlay_hooks.iter().any(|hook| hook.id() == hook_id)
    }

    /// Hook ids in the order they run during an overlay pass.
    #[must_use]
    pub fn overlay_hook_ids(&self) -> Vec<&str> {
        std::iter::once(MARKER_PLUGIN_NAME)
            .chain(self.overlay_hooks.iter().map(|hook| hook.id()))
            .collect()
    }
}
