use std::sync::Arc;

use crate::domain::PermissionGateway;
use crate::utils::constants::permission_prompt;

/// What a prompting platform shows the user. The copy is fixed at this
/// layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionPrompt {
    pub title: &'static str,
    pub message: &'static str,
    pub button_neutral: &'static str,
    pub button_negative: &'static str,
    pub button_positive: &'static str,
}

impl PermissionPrompt {
    pub fn fine_location() -> Self {
        Self {
            title: permission_prompt::TITLE,
            message: permission_prompt::MESSAGE,
            button_neutral: permission_prompt::BUTTON_NEUTRAL,
            button_negative: permission_prompt::BUTTON_NEGATIVE,
            button_positive: permission_prompt::BUTTON_POSITIVE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionDecision {
    Granted,
    Denied,
}

/// Raw platform permission subsystem. Marshaling the actual OS call
/// lives outside the core; this seam is what the production gateway
/// consumes.
#[async_trait::async_trait]
pub trait PermissionApi {
    /// Whether this platform requires an explicit consent prompt.
    /// Platforms that grant location implicitly return `false`.
    fn requires_prompt(&self) -> bool;

    async fn request_fine_location(
        &self,
        prompt: &PermissionPrompt,
    ) -> color_eyre::Result<PermissionDecision>;
}

pub type PermissionApiType = Arc<dyn PermissionApi + Send + Sync>;

/// Production gateway over the platform permission subsystem. A user
/// decline and an internal platform failure both come back as `false`;
/// the latter additionally logs a diagnostic.
pub struct SystemPermissionGateway {
    api: PermissionApiType,
}

impl SystemPermissionGateway {
    pub fn new(api: PermissionApiType) -> Self {
        Self { api }
    }
}

#[async_trait::async_trait]
impl PermissionGateway for SystemPermissionGateway {
    #[tracing::instrument(name = "Requesting location permission", skip(self))]
    async fn request_location_permission(&self) -> bool {
        if !self.api.requires_prompt() {
            return true;
        }

        match self
            .api
            .request_fine_location(&PermissionPrompt::fine_location())
            .await
        {
            Ok(PermissionDecision::Granted) => true,
            Ok(PermissionDecision::Denied) => false,
            Err(e) => {
                tracing::warn!("Permission subsystem failed: {e:#}");
                false
            }
        }
    }
}
