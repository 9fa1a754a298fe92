//! Host side of the plugin lifecycle.
//!
//! [`Pipeline`] owns the registered plugins and drives them through one run:
//! every issue is announced to every plugin in registration order, then
//! publication completion is announced exactly once. The first fatal error
//! stops the run.

use tracing::{error, info, instrument};

use crate::errors::PluginError;
use crate::models::Issue;
use crate::plugin::PublicationPlugin;

/// Drives registered [`PublicationPlugin`]s through a publication run.
#[derive(Default)]
pub struct Pipeline<'a> {
    plugins: Vec<Box<dyn PublicationPlugin<'a> + 'a>>,
}

impl<'a> Pipeline<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, plugin: Box<dyn PublicationPlugin<'a> + 'a>) {
        info!(plugin = plugin.name(), "Registered plugin");
        self.plugins.push(plugin);
    }

    /// Process `issues` in order, then complete the publication.
    ///
    /// Consumes the pipeline: a run cannot be repeated with the same plugins.
    #[instrument(
        level = "info",
        skip_all,
        fields(issues = issues.len(), plugins = self.plugins.len())
    )]
    pub fn run(mut self, issues: &'a [Issue]) -> Result<(), PluginError> {
        for issue in issues {
            for plugin in &mut self.plugins {
                plugin.on_issue_complete(issue).inspect_err(|e| {
                    error!(
                        plugin = plugin.name(),
                        issue = issue.number,
                        error = %e,
                        "Issue processing failed"
                    );
                })?;
            }
        }

        for plugin in &mut self.plugins {
            plugin.on_publication_complete().inspect_err(|e| {
                error!(plugin = plugin.name(), error = %e, "Publication completion failed");
            })?;
        }

        info!("Publication complete");
        Ok(())
    }
}
