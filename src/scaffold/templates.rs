//! Template rendering for the generated package.
//!
//! The skeleton files ship embedded in the binary. Most are copied
//! verbatim; `package.json`, `README.md` and `sample/dll.html` go through
//! handlebars to receive the package name, dependency versions and the
//! DLL output configuration.

use std::fs;
use std::path::Path;

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::{Result, ScaffoldError};
use crate::language::Language;
use crate::logger::Logger;
use crate::package_name::DerivedIdentifiers;
use crate::versions::DependencyVersions;

/// Values substituted into the templates that need filling.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateData {
    pub name: String,
    pub ckeditor5_version: String,
    pub dev_utils_version: String,
    pub eslint_config_ckeditor5_version: String,
    pub stylelint_config_ckeditor5_version: String,
    pub package_tools_version: String,
    pub dll_file_name: String,
    pub dll_library: String,
    pub typescript: bool,
}

impl TemplateData {
    pub fn new(
        package_name: &str,
        language: Language,
        versions: &DependencyVersions,
        identifiers: &DerivedIdentifiers,
    ) -> Self {
        Self {
            name: package_name.to_string(),
            ckeditor5_version: versions.ckeditor5.clone(),
            dev_utils_version: versions.dev_utils.clone(),
            eslint_config_ckeditor5_version: versions.eslint_config_ckeditor5.clone(),
            stylelint_config_ckeditor5_version: versions.stylelint_config_ckeditor5.clone(),
            package_tools_version: versions.package_tools.clone(),
            dll_file_name: identifiers.output_file_name.clone(),
            dll_library: identifiers.global_key.clone(),
            typescript: language == Language::TypeScript,
        }
    }
}

struct TemplateFile {
    /// Destination path, relative to the package directory.
    path: &'static str,
    contents: &'static str,
    /// Whether the file is rendered through handlebars or copied verbatim.
    fill: bool,
    /// `None` for files shared by both language variants.
    language: Option<Language>,
}

const TEMPLATES: &[TemplateFile] = &[
    TemplateFile {
        path: "package.json",
        contents: include_str!("../../templates/common/package.json"),
        fill: true,
        language: None,
    },
    TemplateFile {
        path: "README.md",
        contents: include_str!("../../templates/common/README.md"),
        fill: true,
        language: None,
    },
    TemplateFile {
        path: "sample/dll.html",
        contents: include_str!("../../templates/common/sample/dll.html"),
        fill: true,
        language: None,
    },
    TemplateFile {
        path: ".gitignore",
        contents: include_str!("../../templates/common/.gitignore"),
        fill: false,
        language: None,
    },
    TemplateFile {
        path: ".editorconfig",
        contents: include_str!("../../templates/common/.editorconfig"),
        fill: false,
        language: None,
    },
    TemplateFile {
        path: "src/index.js",
        contents: include_str!("../../templates/js/src/index.js"),
        fill: false,
        language: Some(Language::JavaScript),
    },
    TemplateFile {
        path: "src/myplugin.js",
        contents: include_str!("../../templates/js/src/myplugin.js"),
        fill: false,
        language: Some(Language::JavaScript),
    },
    TemplateFile {
        path: "src/index.ts",
        contents: include_str!("../../templates/ts/src/index.ts"),
        fill: false,
        language: Some(Language::TypeScript),
    },
    TemplateFile {
        path: "src/myplugin.ts",
        contents: include_str!("../../templates/ts/src/myplugin.ts"),
        fill: false,
        language: Some(Language::TypeScript),
    },
    TemplateFile {
        path: "tsconfig.json",
        contents: include_str!("../../templates/ts/tsconfig.json"),
        fill: false,
        language: Some(Language::TypeScript),
    },
];

/// Writes the skeleton for `language` into `destination`.
pub fn render_into(
    destination: &Path,
    language: Language,
    data: &TemplateData,
    logger: &Logger,
) -> Result<()> {
    let handlebars = Handlebars::new();

    for template in TEMPLATES
        .iter()
        .filter(|t| t.language.map_or(true, |l| l == language))
    {
        logger.detail(format!("Copying \"{}\"...", template.path));

        let contents = if template.fill {
            handlebars
                .render_template(template.contents, data)
                .map_err(|source| ScaffoldError::Template {
                    path: template.path.to_string(),
                    source,
                })?
        } else {
            template.contents.to_string()
        };

        let target = destination.join(template.path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(target, contents)?;
    }

    Ok(())
}
