//! Pipeline lifecycle hooks and the author list stage.
//!
//! The publication pipeline notifies every registered [`PublicationPlugin`]
//! twice over:
//!
//! 1. [`on_issue_complete`](PublicationPlugin::on_issue_complete) once per
//!    issue, after the issue's articles are finalized
//! 2. [`on_publication_complete`](PublicationPlugin::on_publication_complete)
//!    exactly once, after the last issue
//!
//! [`AuthorListPlugin`] maps the first hook to [`AuthorIndex::ingest`] and the
//! second to rendering and writing `authors.html`. Once publication is
//! complete the plugin refuses further calls with
//! [`PluginError::AlreadyFinalized`]; nothing is rendered or written again.

use std::path::PathBuf;

use tracing::{info, instrument, warn};

use crate::authors::AuthorIndex;
use crate::collation::{KeyComparator, LocaleCollator};
use crate::config::AuthorIndexConfig;
use crate::errors::{ConfigError, PluginError};
use crate::models::Issue;
use crate::outputs::{AUTHORS_FILE_NAME, DirectoryWriter, HtmlRenderer, OutputWriter, Renderer};
use crate::sanitize::Sanitizer;

/// A stage invoked by the pipeline host.
///
/// `'a` is the lifetime of the issues handed in; plugins may keep
/// references into them until publication completes.
pub trait PublicationPlugin<'a> {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// All articles of `issue` have been processed.
    fn on_issue_complete(&mut self, issue: &'a Issue) -> Result<(), PluginError>;

    /// Every issue has been processed.
    fn on_publication_complete(&mut self) -> Result<(), PluginError>;
}

/// Builds the consolidated author index page.
pub struct AuthorListPlugin<'a, C, R, W> {
    index: AuthorIndex<'a, C>,
    renderer: R,
    writer: W,
    finalized: bool,
}

impl<'a> AuthorListPlugin<'a, LocaleCollator, HtmlRenderer<LocaleCollator>, DirectoryWriter> {
    /// Wire the plugin with the ICU collator, the HTML renderer bucketing
    /// by the locale's base letters, and a writer targeting `output_dir`.
    pub fn from_config(
        config: &AuthorIndexConfig,
        output_dir: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let index = AuthorIndex::new(
            Sanitizer::new(config.remove_nickname_quotes),
            LocaleCollator::new(&config.locale)?,
            config.grouping,
        );
        let renderer = HtmlRenderer::with_letters(
            config.page_title.clone(),
            LocaleCollator::primary(&config.locale)?,
        );
        Ok(Self::new(index, renderer, DirectoryWriter::new(output_dir)))
    }
}

impl<'a, C, R, W> AuthorListPlugin<'a, C, R, W>
where
    C: KeyComparator,
    R: Renderer,
    W: OutputWriter,
{
    pub fn new(index: AuthorIndex<'a, C>, renderer: R, writer: W) -> Self {
        Self {
            index,
            renderer,
            writer,
            finalized: false,
        }
    }

    pub fn index(&self) -> &AuthorIndex<'a, C> {
        &self.index
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    fn ensure_open(&self) -> Result<(), PluginError> {
        if self.is_finalized() {
            warn!(
                plugin = self.name(),
                "Lifecycle hook called after publication completed"
            );
            return Err(PluginError::AlreadyFinalized(self.name().to_string()));
        }
        Ok(())
    }
}

impl<'a, C, R, W> PublicationPlugin<'a> for AuthorListPlugin<'a, C, R, W>
where
    C: KeyComparator,
    R: Renderer,
    W: OutputWriter,
{
    fn name(&self) -> &str {
        "author-list"
    }

    fn on_issue_complete(&mut self, issue: &'a Issue) -> Result<(), PluginError> {
        self.ensure_open()?;
        info!(issue = issue.number, published = ?issue.published, "Building author list");
        self.index.ingest(issue);
        Ok(())
    }

    #[instrument(level = "info", skip_all, fields(file = AUTHORS_FILE_NAME))]
    fn on_publication_complete(&mut self) -> Result<(), PluginError> {
        self.ensure_open()?;
        self.finalized = true;

        let stats = self.index.stats();
        info!(
            issues = stats.issues,
            pairs = stats.pairs,
            skipped_articles = stats.skipped_articles,
            authors = self.index.groups().len(),
            "Rendering author list"
        );

        if self.index.is_empty() {
            info!("No authors indexed; writing an empty author list");
        }

        let markup = self.renderer.render(self.index.groups())?;
        let path = self.writer.write(AUTHORS_FILE_NAME, &markup)?;

        info!(path = %path.display(), "Written author list");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authors::Grouping;
    use crate::errors::{OutputWriteError, RenderError};
    use crate::models::{Article, AuthorGroup};
    use std::cell::RefCell;
    use std::io;
    use std::path::PathBuf;
    use std::rc::Rc;

    type Snapshot = Vec<(String, Vec<String>)>;

    #[derive(Clone, Default)]
    struct RecordingRenderer {
        calls: Rc<RefCell<Vec<Snapshot>>>,
    }

    impl Renderer for RecordingRenderer {
        fn render(&self, groups: &[AuthorGroup<'_>]) -> Result<String, RenderError> {
            let snapshot: Snapshot = groups
                .iter()
                .map(|g| {
                    (
                        g.key.to_string(),
                        g.articles.iter().map(|a| a.id.clone()).collect(),
                    )
                })
                .collect();
            self.calls.borrow_mut().push(snapshot);
            Ok(format!("<ul>{}</ul>", groups.len()))
        }
    }

    struct FailingRenderer;

    impl Renderer for FailingRenderer {
        fn render(&self, _groups: &[AuthorGroup<'_>]) -> Result<String, RenderError> {
            Err(RenderError::new("template exploded"))
        }
    }

    #[derive(Clone, Default)]
    struct RecordingWriter {
        writes: Rc<RefCell<Vec<(String, String)>>>,
    }

    impl OutputWriter for RecordingWriter {
        fn write(&self, file_name: &str, contents: &str) -> Result<PathBuf, OutputWriteError> {
            self.writes
                .borrow_mut()
                .push((file_name.to_string(), contents.to_string()));
            Ok(PathBuf::from("/out").join(file_name))
        }
    }

    struct FailingWriter;

    impl OutputWriter for FailingWriter {
        fn write(&self, file_name: &str, _contents: &str) -> Result<PathBuf, OutputWriteError> {
            Err(OutputWriteError {
                path: PathBuf::from("/read-only").join(file_name),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only file system"),
            })
        }
    }

    fn article(id: &str, authors: &[&str]) -> Article {
        Article {
            id: id.to_string(),
            title: id.to_uppercase(),
            authors: Some(authors.iter().map(|a| a.to_string()).collect()),
            href: None,
        }
    }

    fn czech_index<'a>() -> AuthorIndex<'a, LocaleCollator> {
        AuthorIndex::new(
            Sanitizer::default(),
            LocaleCollator::new("cs").unwrap(),
            Grouping::Collation,
        )
    }

    fn recording_plugin<'a>(
        renderer: &RecordingRenderer,
        writer: &RecordingWriter,
    ) -> AuthorListPlugin<'a, LocaleCollator, RecordingRenderer, RecordingWriter> {
        AuthorListPlugin::new(czech_index(), renderer.clone(), writer.clone())
    }

    #[test]
    fn test_renders_and_writes_once() {
        let issues = vec![
            Issue {
                number: 1,
                published: None,
                articles: vec![article("a1", &["Žáková", "Adam"])],
            },
            Issue {
                number: 2,
                published: None,
                articles: vec![article("b1", &["zelenka", "„Bílý“"])],
            },
        ];
        let renderer = RecordingRenderer::default();
        let writer = RecordingWriter::default();
        let mut plugin = recording_plugin(&renderer, &writer);

        for issue in &issues {
            plugin.on_issue_complete(issue).unwrap();
        }
        plugin.on_publication_complete().unwrap();

        let calls = renderer.calls.borrow();
        assert_eq!(calls.len(), 1);
        let names: Vec<&str> = calls[0].iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, vec!["Adam", "Bílý", "zelenka", "Žáková"]);

        let writes = writer.writes.borrow();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0], ("authors.html".to_string(), "<ul>4</ul>".to_string()));
        assert!(plugin.is_finalized());
    }

    #[test]
    fn test_zero_issues_still_writes_page() {
        let renderer = RecordingRenderer::default();
        let writer = RecordingWriter::default();
        let mut plugin = recording_plugin(&renderer, &writer);

        plugin.on_publication_complete().unwrap();

        assert_eq!(renderer.calls.borrow().len(), 1);
        assert!(renderer.calls.borrow()[0].is_empty());
        assert_eq!(writer.writes.borrow().len(), 1);
    }

    #[test]
    fn test_second_finalize_is_rejected() {
        let renderer = RecordingRenderer::default();
        let writer = RecordingWriter::default();
        let mut plugin = recording_plugin(&renderer, &writer);

        plugin.on_publication_complete().unwrap();
        let err = plugin.on_publication_complete().unwrap_err();

        assert!(matches!(err, PluginError::AlreadyFinalized(_)));
        assert_eq!(renderer.calls.borrow().len(), 1);
        assert_eq!(writer.writes.borrow().len(), 1);
    }

    #[test]
    fn test_ingest_after_finalize_is_rejected() {
        let issue = Issue {
            number: 3,
            published: None,
            articles: vec![article("c1", &["Adam"])],
        };
        let renderer = RecordingRenderer::default();
        let writer = RecordingWriter::default();
        let mut plugin = recording_plugin(&renderer, &writer);

        plugin.on_publication_complete().unwrap();
        let err = plugin.on_issue_complete(&issue).unwrap_err();

        assert!(matches!(err, PluginError::AlreadyFinalized(_)));
        assert!(plugin.index().is_empty());
    }

    #[test]
    fn test_render_failure_propagates_without_writing() {
        let writer = RecordingWriter::default();
        let mut plugin = AuthorListPlugin::new(czech_index(), FailingRenderer, writer.clone());

        let err = plugin.on_publication_complete().unwrap_err();

        assert!(matches!(err, PluginError::Render(_)));
        assert_eq!(err.to_string(), "rendering failed: template exploded");
        assert!(writer.writes.borrow().is_empty());
    }

    #[test]
    fn test_write_failure_is_surfaced_with_cause() {
        let renderer = RecordingRenderer::default();
        let mut plugin = AuthorListPlugin::new(czech_index(), renderer.clone(), FailingWriter);

        let err = plugin.on_publication_complete().unwrap_err();

        match err {
            PluginError::Output(e) => {
                assert_eq!(e.path, PathBuf::from("/read-only/authors.html"));
                assert_eq!(e.source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(renderer.calls.borrow().len(), 1);
    }

    #[test]
    fn test_from_config_writes_html_to_directory() {
        let dir = tempfile::tempdir().unwrap();
        let issue = Issue {
            number: 1,
            published: None,
            articles: vec![article("a1", &["„Alhmar“"])],
        };
        let mut plugin =
            AuthorListPlugin::from_config(&AuthorIndexConfig::default(), dir.path()).unwrap();

        plugin.on_issue_complete(&issue).unwrap();
        plugin.on_publication_complete().unwrap();

        let html = std::fs::read_to_string(dir.path().join("authors.html")).unwrap();
        assert!(html.contains(">Alhmar<"));
        assert!(!html.contains("„Alhmar"));
    }

    #[test]
    fn test_from_config_without_nickname_removal() {
        let dir = tempfile::tempdir().unwrap();
        let issue = Issue {
            number: 1,
            published: None,
            articles: vec![article("a1", &["„Alhmar‟"])],
        };
        let config = AuthorIndexConfig {
            remove_nickname_quotes: false,
            ..AuthorIndexConfig::default()
        };
        let mut plugin = AuthorListPlugin::from_config(&config, dir.path()).unwrap();

        plugin.on_issue_complete(&issue).unwrap();
        assert_eq!(plugin.index().groups()[0].key.as_str(), "„Alhmar‟");
    }

    #[test]
    fn test_from_config_rejects_bad_locale() {
        let config = AuthorIndexConfig {
            locale: "??".to_string(),
            ..AuthorIndexConfig::default()
        };
        assert!(AuthorListPlugin::from_config(&config, "/tmp").is_err());
    }

    #[test]
    fn test_czech_page_has_one_section_per_letter() {
        let dir = tempfile::tempdir().unwrap();
        let names = ["Cibulka", "Hora", "Chalupa", "Ivan", "Adam", "Ádám", "Alois"];
        let issue = Issue {
            number: 1,
            published: None,
            articles: names
                .iter()
                .enumerate()
                .map(|(i, name)| article(&format!("a{i}"), &[*name]))
                .collect(),
        };
        let mut plugin =
            AuthorListPlugin::from_config(&AuthorIndexConfig::default(), dir.path()).unwrap();

        plugin.on_issue_complete(&issue).unwrap();
        let order: Vec<&str> = plugin.index().groups().iter().map(|g| g.key.as_str()).collect();
        assert_eq!(
            order,
            vec!["Adam", "Ádám", "Alois", "Cibulka", "Hora", "Chalupa", "Ivan"]
        );
        plugin.on_publication_complete().unwrap();

        let html = std::fs::read_to_string(dir.path().join(AUTHORS_FILE_NAME)).unwrap();
        assert_eq!(html.matches("<h2>A</h2>").count(), 1);
        assert_eq!(html.matches("<h2>C</h2>").count(), 1);
        assert_eq!(html.matches("<section").count(), 4);
    }

    #[test]
    fn test_writes_to_fixed_file_name() {
        let renderer = RecordingRenderer::default();
        let writer = RecordingWriter::default();
        let mut plugin = recording_plugin(&renderer, &writer);

        plugin.on_publication_complete().unwrap();
        assert_eq!(writer.writes.borrow()[0].0, AUTHORS_FILE_NAME);
    }
}
