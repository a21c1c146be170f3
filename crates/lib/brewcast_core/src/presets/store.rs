//! Preset session store.
//!
//! Owns the editable draft, the last-synced snapshot, and the preset name
//! list, and mediates every lifecycle operation against the remote
//! resource. One mutating operation may be outstanding at a time; selection
//! loads supersede each other and carry a request token so a stale response
//! never overwrites a newer selection.

use tracing::{debug, warn};

use crate::models::preset::PresetConfig;

pub use crate::models::preset::DEFAULT_PRESET;

use super::PresetError;
use super::api::PresetApi;
use super::fields;
use super::ingest::{self, PresetRecord};

/// Kind of user-facing status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
    Info,
}

/// User-facing feedback from the last operation.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    kind: StatusKind,
    text: String,
}

impl StatusMessage {
    fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }

    fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn kind(&self) -> StatusKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// How a new preset sources its initial configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationMode {
    /// Start from the canonical defaults.
    New,
    /// Copy the currently selected preset, re-fetched from the backend.
    Duplicate,
}

/// State of the open preset-creation dialog.
#[derive(Debug, Clone)]
pub struct CreateDialog {
    pub mode: CreationMode,
    pub name: String,
}

/// Handle for one selection load. Responses for superseded tokens are
/// discarded by [`PresetStore::apply_load`].
#[derive(Debug, Clone)]
pub struct LoadRequest {
    name: String,
    token: u64,
}

impl LoadRequest {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Session store for one settings editor.
pub struct PresetStore<A: PresetApi> {
    api: A,
    defaults: PresetConfig,
    selected: Option<String>,
    draft: PresetConfig,
    saved: PresetConfig,
    available: Vec<String>,
    dialog: Option<CreateDialog>,
    status: Option<StatusMessage>,
    mutating: bool,
    issued_loads: u64,
    settled_loads: u64,
}

impl<A: PresetApi> PresetStore<A> {
    pub fn new(api: A) -> Self {
        let defaults = PresetConfig::default();
        Self {
            api,
            draft: defaults.clone(),
            saved: defaults.clone(),
            defaults,
            selected: None,
            available: Vec::new(),
            dialog: None,
            status: None,
            mutating: false,
            issued_loads: 0,
            settled_loads: 0,
        }
    }

    // -----------------------------------------------------------------------
    // Session state
    // -----------------------------------------------------------------------

    pub fn draft(&self) -> &PresetConfig {
        &self.draft
    }

    pub fn saved(&self) -> &PresetConfig {
        &self.saved
    }

    pub fn defaults(&self) -> &PresetConfig {
        &self.defaults
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Preset names in backend order.
    pub fn available(&self) -> &[String] {
        &self.available
    }

    pub fn dialog(&self) -> Option<&CreateDialog> {
        self.dialog.as_ref()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// True while any network-bound operation is outstanding.
    pub fn is_loading(&self) -> bool {
        self.mutating || self.settled_loads < self.issued_loads
    }

    /// True when the draft differs from the last-synced snapshot.
    pub fn is_dirty(&self) -> bool {
        self.draft != self.saved
    }

    /// Apply one text input to the draft. Purely local: never touches the
    /// snapshot, never performs I/O. A parse failure leaves the draft
    /// untouched.
    pub fn update_field(&mut self, field: &str, raw: &str) -> Result<(), PresetError> {
        fields::apply_field(&mut self.draft, field, raw)
            .map_err(|err| self.fail(err, "Invalid input"))
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Fetch the preset name list, in backend order. On the first
    /// successful load the first name becomes the selection if nothing is
    /// selected yet. On failure the prior list is kept.
    pub async fn refresh_presets(&mut self) -> Result<Vec<String>, PresetError> {
        match self.api.list_presets().await {
            Ok(records) => {
                let names: Vec<String> =
                    records.into_iter().filter_map(|r| r.preset_name).collect();
                self.available = names.clone();
                if self.selected.is_none()
                    && let Some(first) = self.available.first()
                {
                    self.selected = Some(first.clone());
                }
                Ok(names)
            }
            Err(err) => Err(self.fail(err, "Failed to load available presets")),
        }
    }

    /// Start a selection load. A newer call supersedes any in-flight load;
    /// refused only while a mutation is outstanding.
    pub fn begin_load(&mut self, name: &str) -> Result<LoadRequest, PresetError> {
        if self.mutating {
            return Err(self.fail(PresetError::Busy, ""));
        }
        self.issued_loads += 1;
        self.selected = Some(name.to_string());
        debug!(preset = name, token = self.issued_loads, "preset load started");
        Ok(LoadRequest {
            name: name.to_string(),
            token: self.issued_loads,
        })
    }

    /// Settle a selection load. A response for a superseded token is
    /// discarded without touching any session state. On success both draft
    /// and snapshot take the normalized config and the status message is
    /// cleared; on failure both are left as they were.
    pub fn apply_load(
        &mut self,
        request: &LoadRequest,
        result: Result<PresetRecord, PresetError>,
    ) -> Result<(), PresetError> {
        if request.token != self.issued_loads {
            warn!(
                preset = %request.name,
                token = request.token,
                current = self.issued_loads,
                "discarding stale preset response"
            );
            return Ok(());
        }
        self.settled_loads = request.token;
        match result {
            Ok(record) => {
                let config = ingest::normalize(record, &self.defaults);
                self.draft = config.clone();
                self.saved = config;
                self.status = None;
                Ok(())
            }
            Err(err) => Err(self.fail(err, "Failed to load preset settings")),
        }
    }

    /// Select and fetch a preset in one step.
    pub async fn load_preset(&mut self, name: &str) -> Result<(), PresetError> {
        let request = self.begin_load(name)?;
        let result = self.api.get_preset(name).await;
        self.apply_load(&request, result)
    }

    /// Fetch the preset list and load the selected preset.
    pub async fn initialize(&mut self) -> Result<(), PresetError> {
        self.refresh_presets().await?;
        if let Some(name) = self.selected.clone() {
            self.load_preset(&name).await?;
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Persist the draft to the selected preset. On success the snapshot
    /// takes the draft (the dirty flag clears); on failure the draft is
    /// preserved.
    pub async fn save(&mut self) -> Result<(), PresetError> {
        self.ensure_idle()?;
        let Some(name) = self.selected.clone() else {
            return Err(self.fail(PresetError::Validation("No preset selected".into()), ""));
        };

        self.status = None;
        self.mutating = true;
        let result = self.api.update_preset(&name, &self.draft).await;
        self.mutating = false;

        match result {
            Ok(()) => {
                self.saved = self.draft.clone();
                self.status = Some(StatusMessage::success(format!(
                    "Preset '{name}' saved successfully!"
                )));
                Ok(())
            }
            Err(err) => Err(self.fail(err, "Failed to save preset")),
        }
    }

    pub fn open_create_dialog(&mut self, mode: CreationMode) {
        self.dialog = Some(CreateDialog {
            mode,
            name: String::new(),
        });
    }

    pub fn set_new_preset_name(&mut self, name: &str) {
        if let Some(dialog) = self.dialog.as_mut() {
            dialog.name = name.to_string();
        }
    }

    pub fn close_create_dialog(&mut self) {
        self.dialog = None;
    }

    /// Create the preset described by the open dialog. An empty trimmed
    /// name is refused locally. `Duplicate` mode re-fetches the selected
    /// preset from the backend so an unsaved draft is never duplicated.
    /// On success the list is refreshed and the new preset selected and
    /// loaded; on failure the dialog is preserved.
    pub async fn create_preset(&mut self) -> Result<(), PresetError> {
        self.ensure_idle()?;
        let Some(dialog) = self.dialog.clone() else {
            return Err(self.fail(
                PresetError::Validation("No preset creation in progress".into()),
                "",
            ));
        };
        let name = dialog.name.trim().to_string();
        if name.is_empty() {
            return Err(self.fail(
                PresetError::Validation("Please enter a preset name".into()),
                "",
            ));
        }

        self.status = None;
        self.mutating = true;
        let result = self.create_from_source(&name, dialog.mode).await;
        self.mutating = false;

        match result {
            Ok(()) => {
                self.dialog = None;
                self.selected = Some(name.clone());
                self.status = Some(StatusMessage::success(format!(
                    "Preset '{name}' created successfully!"
                )));
                // Post-create refresh failures surface through the status
                // message but do not undo a successful create.
                if let Err(err) = self.refresh_presets().await {
                    debug!(%err, "post-create list refresh failed");
                } else if let Err(err) = self.load_preset(&name).await {
                    debug!(%err, "post-create load failed");
                }
                Ok(())
            }
            Err(err) => Err(self.fail(err, "Failed to create preset")),
        }
    }

    async fn create_from_source(
        &mut self,
        name: &str,
        mode: CreationMode,
    ) -> Result<(), PresetError> {
        let source = match mode {
            CreationMode::New => self.defaults.clone(),
            CreationMode::Duplicate => {
                let Some(selected) = self.selected.clone() else {
                    return Err(PresetError::Validation(
                        "No preset selected to duplicate".into(),
                    ));
                };
                let record = self.api.get_preset(&selected).await?;
                ingest::normalize(record, &self.defaults)
            }
        };
        self.api.create_preset(name, &source).await
    }

    /// Delete a preset after confirmation. `"Default"` is refused locally
    /// with no network call. On success the list is refreshed and the
    /// selection falls back to `"Default"`; on failure the selection is
    /// unchanged.
    pub async fn delete_preset(
        &mut self,
        name: &str,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Result<(), PresetError> {
        if name == DEFAULT_PRESET {
            return Err(self.fail(
                PresetError::Validation("Cannot delete the Default preset".into()),
                "",
            ));
        }
        self.ensure_idle()?;
        if !confirm(name) {
            return Ok(());
        }

        self.status = None;
        self.mutating = true;
        let result = self.api.delete_preset(name).await;
        self.mutating = false;

        match result {
            Ok(()) => {
                self.status = Some(StatusMessage::success(format!(
                    "Preset '{name}' deleted successfully!"
                )));
                if let Err(err) = self.refresh_presets().await {
                    debug!(%err, "post-delete list refresh failed");
                }
                if let Err(err) = self.load_preset(DEFAULT_PRESET).await {
                    debug!(%err, "post-delete fallback load failed");
                }
                Ok(())
            }
            Err(err) => Err(self.fail(err, "Failed to delete preset")),
        }
    }

    /// Overwrite the selected preset with the canonical defaults, after
    /// confirmation. The draft takes the defaults immediately; the
    /// snapshot follows only once the backend accepts the overwrite.
    pub async fn reset_to_defaults(
        &mut self,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Result<(), PresetError> {
        self.ensure_idle()?;
        let Some(name) = self.selected.clone() else {
            return Err(self.fail(PresetError::Validation("No preset selected".into()), ""));
        };
        if !confirm(&name) {
            return Ok(());
        }

        self.draft = self.defaults.clone();
        self.status = None;
        self.mutating = true;
        let result = self.api.update_preset(&name, &self.draft).await;
        self.mutating = false;

        match result {
            Ok(()) => {
                self.saved = self.draft.clone();
                self.status = Some(StatusMessage::info("Settings reset to defaults"));
                Ok(())
            }
            Err(err) => Err(self.fail(err, "Failed to save preset")),
        }
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn ensure_idle(&mut self) -> Result<(), PresetError> {
        if self.is_loading() {
            return Err(self.fail(PresetError::Busy, ""));
        }
        Ok(())
    }

    /// Convert an operation failure into the session status message.
    /// Validation and backend messages surface verbatim; fetch failures
    /// use the operation's generic fallback.
    fn fail(&mut self, err: PresetError, fallback: &str) -> PresetError {
        let text = match &err {
            PresetError::Validation(message) | PresetError::Backend(message) => message.clone(),
            PresetError::Busy => "Another operation is in progress".to_string(),
            PresetError::Fetch(_) => fallback.to_string(),
        };
        self.status = Some(StatusMessage::error(text));
        err
    }
}
