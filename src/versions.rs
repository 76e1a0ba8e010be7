//! Dependency version ranges for the generated `package.json`.

/// ckeditor5 release the generated package builds against.
const CKEDITOR5_VERSION: &str = "^31.1.0";
const DEV_UTILS_VERSION: &str = "^25.4.5";
const ESLINT_CONFIG_CKEDITOR5_VERSION: &str = "^4.0.2";
const STYLELINT_CONFIG_CKEDITOR5_VERSION: &str = "^2.0.1";
const PACKAGE_TOOLS_VERSION: &str = "^1.0.0-beta.8";

/// Local checkout used instead of the registry release in `--dev` mode.
/// The assumption is that the entire repository is cloned then; an
/// executable installed from the registry cannot run in dev mode.
const PACKAGE_TOOLS_DEV_PATH: &str = "file:../ckeditor5-package-tools";

/// Version ranges substituted into the dependency slots of the generated
/// `package.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyVersions {
    pub ckeditor5: String,
    pub dev_utils: String,
    pub eslint_config_ckeditor5: String,
    pub stylelint_config_ckeditor5: String,
    pub package_tools: String,
}

impl DependencyVersions {
    /// Resolves the version set; `dev_mode` swaps the package tools for a
    /// local checkout so changes to them are picked up without publishing.
    pub fn resolve(dev_mode: bool) -> Self {
        let package_tools = if dev_mode {
            PACKAGE_TOOLS_DEV_PATH.to_string()
        } else {
            PACKAGE_TOOLS_VERSION.to_string()
        };

        Self {
            ckeditor5: CKEDITOR5_VERSION.to_string(),
            dev_utils: DEV_UTILS_VERSION.to_string(),
            eslint_config_ckeditor5: ESLINT_CONFIG_CKEDITOR5_VERSION.to_string(),
            stylelint_config_ckeditor5: STYLELINT_CONFIG_CKEDITOR5_VERSION.to_string(),
            package_tools,
        }
    }
}
