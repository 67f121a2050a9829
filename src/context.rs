use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{ClipboardService, LanguageModelService, VersionControlService};

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub version_control: Arc<dyn VersionControlService>,
    pub language_model: Arc<dyn LanguageModelService>,
    pub clipboard: Arc<dyn ClipboardService>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        version_control: Arc<dyn VersionControlService>,
        language_model: Arc<dyn LanguageModelService>,
        clipboard: Arc<dyn ClipboardService>,
    ) -> Self {
        Self {
            config,
            version_control,
            language_model,
            clipboard,
        }
    }
}
