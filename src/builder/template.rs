//! Project templates and population of generated projects.
//!
//! Templates are Handlebars files. The built-in set is embedded in the
//! binary; a template directory can replace it, in which case every
//! template must be present there as `<file name>.hbs`.

use std::io;
use std::path::{Path, PathBuf};

use handlebars::Handlebars;
use miette::Diagnostic as MietteDiagnostic;
use serde::Serialize;
use thiserror::Error;

use crate::builder::author::author_name;
use crate::core::{Package, PATH_LIST_SEPARATOR};
use crate::util::fs::{absolute, write_atomic};

/// File name of the generated Gradle build file.
pub const BUILD_GRADLE: &str = "build.gradle";

/// Extension of template files in a template directory.
pub const TEMPLATE_EXTENSION: &str = "hbs";

/// Files every project gets, each rendered from the template of the same name.
pub const PROJECT_FILES: [&str; 1] = [BUILD_GRADLE];

const BUILD_GRADLE_TEMPLATE: &str = include_str!("templates/build.gradle.hbs");

/// Error rendering or writing project templates.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum TemplateError {
    #[error("template `{name}` not found at {}", path.display())]
    #[diagnostic(
        code(genjava::template::not_found),
        help("Remove `[templates] dir` from the config to use the built-in templates")
    )]
    NotFound { name: String, path: PathBuf },

    #[error("template `{name}` is invalid")]
    #[diagnostic(code(genjava::template::invalid))]
    Invalid {
        name: String,
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    #[error("failed to render template `{name}`")]
    #[diagnostic(code(genjava::template::render))]
    Render {
        name: String,
        #[source]
        source: Box<handlebars::RenderError>,
    },

    #[error("failed to write {}", path.display())]
    #[diagnostic(
        code(genjava::template::write),
        help("Check that the output directory exists and is writable")
    )]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Parameters substituted into project templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectParams {
    pub project_name: String,
    pub project_version: String,
    /// Absolute directory of the message package
    pub pkg_directory: String,
    pub author: String,
    /// Dependency block, one newline-terminated line per dependency
    pub msg_dependencies: String,
    /// Extra message source paths, joined with the platform separator
    pub sources_dir: String,
    pub artifact_group: String,
    pub path_separator: String,
}

impl ProjectParams {
    /// Collect the parameters for `target`.
    pub fn new(
        target: &Package,
        dependency_text: &str,
        sources_dir: Option<&str>,
        artifact_group: &str,
        author: String,
    ) -> Self {
        ProjectParams {
            project_name: target.name().to_string(),
            project_version: target.version().to_string(),
            pkg_directory: absolute(target.root()).display().to_string(),
            author,
            msg_dependencies: dependency_text.to_string(),
            sources_dir: normalize_sources_dir(sources_dir),
            artifact_group: artifact_group.to_string(),
            path_separator: PATH_LIST_SEPARATOR.to_string(),
        }
    }
}

/// Normalize an extra sources path list: absent becomes empty, and `;`
/// separators become the platform separator.
pub fn normalize_sources_dir(sources_dir: Option<&str>) -> String {
    sources_dir
        .unwrap_or_default()
        .replace(';', &PATH_LIST_SEPARATOR.to_string())
}

/// A loaded, ready to render set of project templates.
pub struct TemplateSet {
    handlebars: Handlebars<'static>,
}

impl TemplateSet {
    fn engine() -> Handlebars<'static> {
        let mut hb = Handlebars::new();
        hb.register_escape_fn(handlebars::no_escape);
        hb.set_strict_mode(true);
        hb
    }

    fn register(hb: &mut Handlebars<'static>, name: &str, source: &str) -> Result<(), TemplateError> {
        hb.register_template_string(name, source)
            .map_err(|e| TemplateError::Invalid {
                name: name.to_string(),
                source: Box::new(e),
            })
    }

    /// The templates embedded in the binary.
    pub fn builtin() -> Result<Self, TemplateError> {
        let mut hb = Self::engine();
        Self::register(&mut hb, BUILD_GRADLE, BUILD_GRADLE_TEMPLATE)?;
        Ok(TemplateSet { handlebars: hb })
    }

    /// Load every project template from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self, TemplateError> {
        let mut hb = Self::engine();
        for name in PROJECT_FILES {
            let path = dir.join(format!("{}.{}", name, TEMPLATE_EXTENSION));
            let source = std::fs::read_to_string(&path).map_err(|_| TemplateError::NotFound {
                name: name.to_string(),
                path: path.clone(),
            })?;
            Self::register(&mut hb, name, &source)?;
        }
        Ok(TemplateSet { handlebars: hb })
    }

    /// Render one template.
    pub fn render(&self, name: &str, params: &ProjectParams) -> Result<String, TemplateError> {
        if !self.handlebars.has_template(name) {
            return Err(TemplateError::NotFound {
                name: name.to_string(),
                path: PathBuf::from(name),
            });
        }
        self.handlebars
            .render(name, params)
            .map_err(|e| TemplateError::Render {
                name: name.to_string(),
                source: Box::new(e),
            })
    }
}

/// Render every project file into `output_dir`, overwriting existing files.
///
/// `output_dir` must already exist. Returns the written paths.
pub fn populate_project(
    templates: &TemplateSet,
    target: &Package,
    output_dir: &Path,
    dependency_text: &str,
    sources_dir: Option<&str>,
    artifact_group: &str,
) -> Result<Vec<PathBuf>, TemplateError> {
    let params = ProjectParams::new(
        target,
        dependency_text,
        sources_dir,
        artifact_group,
        author_name(),
    );
    write_project_files(templates, &params, output_dir)
}

/// Render every project file for `params` into `output_dir`.
pub fn write_project_files(
    templates: &TemplateSet,
    params: &ProjectParams,
    output_dir: &Path,
) -> Result<Vec<PathBuf>, TemplateError> {
    let mut written = Vec::with_capacity(PROJECT_FILES.len());
    for name in PROJECT_FILES {
        let contents = templates.render(name, params)?;
        let path = absolute(&output_dir.join(name));
        write_atomic(&path, &contents).map_err(|source| TemplateError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!("created {}", path.display());
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::DEFAULT_ARTIFACT_GROUP;
    use crate::test_support::package_at;
    use tempfile::TempDir;

    fn params(sources: Option<&str>) -> ProjectParams {
        let target = package_at("/ws/src/foo_msgs", "foo_msgs", "2.0.0", &["message_generation"]);
        ProjectParams::new(
            &target,
            "  compile 'org.ros.rosjava_messages:bar_msgs:1.0.0'\n",
            sources,
            DEFAULT_ARTIFACT_GROUP,
            "Jane Doe".to_string(),
        )
    }

    #[test]
    #[cfg(not(windows))]
    fn test_normalize_sources_dir() {
        assert_eq!(normalize_sources_dir(None), "");
        assert_eq!(normalize_sources_dir(Some("/a;/b:/c")), "/a:/b:/c");
    }

    #[test]
    fn test_render_builtin_build_gradle() {
        let templates = TemplateSet::builtin().unwrap();
        let out = templates.render(BUILD_GRADLE, &params(None)).unwrap();

        assert!(out.contains("version = '2.0.0'"));
        assert!(out.contains("group = 'org.ros.rosjava_messages'"));
        assert!(out.contains("Author: Jane Doe"));
        assert!(out.contains("'--package-path=/ws/src/foo_msgs', 'foo_msgs'"));
        assert!(out.contains("  compile 'org.ros.rosjava_messages:bar_msgs:1.0.0'\n"));
        // Not HTML-escaped.
        assert!(!out.contains("&#x27;"));
    }

    #[test]
    fn test_dependency_block_has_no_blank_line() {
        let templates = TemplateSet::builtin().unwrap();

        let out = templates.render(BUILD_GRADLE, &params(None)).unwrap();
        assert!(out.contains("bar_msgs:1.0.0'\n}\n"));

        let mut empty = params(None);
        empty.msg_dependencies = String::new();
        let out = templates.render(BUILD_GRADLE, &empty).unwrap();
        assert!(out.contains("message_generation:[0.3,0.4)'\n}\n"));
    }

    #[test]
    #[cfg(not(windows))]
    fn test_render_with_sources_dir() {
        let templates = TemplateSet::builtin().unwrap();
        let out = templates.render(BUILD_GRADLE, &params(Some("/extra/a;/extra/b"))).unwrap();
        assert!(out.contains("--package-path=/ws/src/foo_msgs:/extra/a:/extra/b'"));
    }

    #[test]
    fn test_populate_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let templates = TemplateSet::builtin().unwrap();
        let params = params(Some("/extra"));

        let written = write_project_files(&templates, &params, tmp.path()).unwrap();
        assert_eq!(written.len(), 1);
        let first = std::fs::read(&written[0]).unwrap();

        std::fs::remove_file(&written[0]).unwrap();
        write_project_files(&templates, &params, tmp.path()).unwrap();
        let second = std::fs::read(&written[0]).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_populate_project_writes_build_gradle() {
        let tmp = TempDir::new().unwrap();
        let templates = TemplateSet::builtin().unwrap();
        let target = package_at("/ws/src/foo_msgs", "foo_msgs", "2.0.0", &[]);

        let written =
            populate_project(&templates, &target, tmp.path(), "", None, "com.example").unwrap();

        let contents = std::fs::read_to_string(&written[0]).unwrap();
        assert!(written[0].ends_with(BUILD_GRADLE));
        assert!(contents.contains("group = 'com.example'"));
    }

    #[test]
    fn test_populate_missing_output_dir_is_write_error() {
        let tmp = TempDir::new().unwrap();
        let templates = TemplateSet::builtin().unwrap();
        let err = write_project_files(&templates, &params(None), &tmp.path().join("missing"))
            .unwrap_err();
        assert!(matches!(err, TemplateError::Write { .. }));
    }

    #[test]
    fn test_template_dir_override_and_missing() {
        let tmp = TempDir::new().unwrap();

        let err = TemplateSet::from_dir(tmp.path()).err().unwrap();
        assert!(matches!(err, TemplateError::NotFound { .. }));

        std::fs::write(
            tmp.path().join("build.gradle.hbs"),
            "name={{project_name}} version={{project_version}}\n",
        )
        .unwrap();
        let templates = TemplateSet::from_dir(tmp.path()).unwrap();
        let out = templates.render(BUILD_GRADLE, &params(None)).unwrap();
        assert_eq!(out, "name=foo_msgs version=2.0.0\n");
    }

    #[test]
    fn test_unknown_variable_is_render_error() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("build.gradle.hbs"), "{{no_such_param}}").unwrap();

        let templates = TemplateSet::from_dir(tmp.path()).unwrap();
        let err = templates.render(BUILD_GRADLE, &params(None)).unwrap_err();
        assert!(matches!(err, TemplateError::Render { .. }));
    }
}
