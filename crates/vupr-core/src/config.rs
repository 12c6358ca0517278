use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Browser to launch and the profile used when no rule matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Path to the browser executable.
    pub path: PathBuf,
    /// Profile folder used when no rule matches (e.g. "Default").
    #[serde(rename = "default")]
    pub default_profile: String,
}

/// External dmenu-style chooser (optional `[picker]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Program followed by its arguments, e.g. `["rofi", "-dmenu"]`.
    pub command: Vec<String>,
}

/// One `[[mapping]]` entry: a profile and the URLs routed to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileMapping {
    /// Human-readable label shown in the profile picker.
    pub name: String,
    /// Profile directory passed via `--profile-directory`.
    pub folder: String,
    /// URLs whose host opens in this profile.
    pub urls: Vec<String>,
}

/// Router configuration loaded from `~/.config/vupr/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouterConfig {
    /// URLs whose host always asks which profile to use.
    #[serde(default)]
    pub select_profile: Vec<String>,
    pub browser: BrowserConfig,
    /// Optional external picker; if missing, the terminal prompt is used.
    #[serde(default)]
    pub picker: Option<PickerConfig>,
    #[serde(default)]
    pub mapping: Vec<ProfileMapping>,
}

/// Written on first run so the user has something to edit.
pub const STARTER_CONFIG: &str = r#"# vupr configuration.
#
# URLs whose host should always ask which profile to open.
select_profile = []

[browser]
# Browser executable.
path = "/usr/bin/vivaldi"
# Profile folder used when no mapping matches.
default = "Default"

# Optional dmenu-style picker: profile names on stdin, chosen name on stdout.
# "{url}" in an argument is replaced by the URL; $VUPR_URL holds it as well.
# [picker]
# command = ["rofi", "-dmenu", "-p", "Profile", "-mesg", "{url}"]

# [[mapping]]
# name = "Work"
# folder = "Profile 2"
# urls = ["https://mail.example.com"]
"#;

impl RouterConfig {
    /// Schema check: required fields present and URLs well-formed.
    ///
    /// Runs before the routing table is built; duplicate detection is a
    /// separate step ([`crate::routing::validate`]).
    pub fn check(&self) -> Result<()> {
        if self.browser.path.as_os_str().is_empty() {
            bail!("browser.path is required");
        }
        if !self.browser.path.is_file() {
            bail!(
                "browser.path {} is not an existing file",
                self.browser.path.display()
            );
        }
        if self.browser.default_profile.trim().is_empty() {
            bail!("browser.default is required");
        }

        for (i, url) in self.select_profile.iter().enumerate() {
            check_url(url).with_context(|| format!("select_profile[{i}]"))?;
        }

        if let Some(picker) = &self.picker {
            if picker.command.first().map_or(true, |p| p.trim().is_empty()) {
                bail!("picker.command must name a program");
            }
        }

        let mut names = HashSet::new();
        for (i, m) in self.mapping.iter().enumerate() {
            if m.name.trim().is_empty() {
                bail!("mapping[{i}].name is required");
            }
            if !names.insert(m.name.as_str()) {
                bail!("mapping[{i}].name {:?} is used more than once", m.name);
            }
            if m.folder.trim().is_empty() {
                bail!("mapping[{i}].folder is required");
            }
            if m.urls.is_empty() {
                bail!("mapping[{i}].urls needs at least one URL");
            }
            for (j, url) in m.urls.iter().enumerate() {
                check_url(url).with_context(|| format!("mapping[{i}].urls[{j}]"))?;
            }
        }
        Ok(())
    }
}

fn check_url(raw: &str) -> Result<()> {
    let parsed = url::Url::parse(raw).with_context(|| format!("invalid URL {raw:?}"))?;
    if !parsed.has_host() {
        bail!("URL {raw:?} has no host");
    }
    Ok(())
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("vupr")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load and parse a config file.
pub fn load_from_path(path: &Path) -> Result<RouterConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: RouterConfig =
        toml::from_str(&data).with_context(|| format!("failed to parse config {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}

/// Load configuration from the XDG config dir.
///
/// If no file exists yet a starter config is written and an error is
/// returned, since routing without a browser path is impossible.
pub fn load_or_init() -> Result<RouterConfig> {
    let path = config_path()?;
    if !path.exists() {
        write_starter(&path)?;
        bail!(
            "no configuration found; a starter config was written to {}, edit it and retry",
            path.display()
        );
    }
    load_from_path(&path)
}

fn write_starter(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, STARTER_CONFIG)?;
    tracing::info!("created starter config at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn parse(toml: &str) -> RouterConfig {
        toml::from_str(toml).unwrap()
    }

    fn with_browser(browser: &Path, tables: &str) -> RouterConfig {
        let path = browser.display().to_string();
        parse(&format!("[browser]\npath = {path:?}\ndefault = \"Default\"\n{tables}"))
    }

    #[test]
    fn starter_config_parses() {
        let cfg = parse(STARTER_CONFIG);
        assert_eq!(cfg.browser.default_profile, "Default");
        assert!(cfg.select_profile.is_empty());
        assert!(cfg.mapping.is_empty());
        assert!(cfg.picker.is_none());
    }

    #[test]
    fn full_config_parses() {
        let cfg = parse(
            r#"
            select_profile = ["https://ambiguous.example.com"]

            [browser]
            path = "/usr/bin/vivaldi"
            default = "Default"

            [picker]
            command = ["rofi", "-dmenu"]

            [[mapping]]
            name = "Work"
            folder = "Profile 2"
            urls = ["https://mail.example.com", "https://docs.example.com"]

            [[mapping]]
            name = "Private"
            folder = "Profile 3"
            urls = ["https://social.example.org"]
        "#,
        );
        assert_eq!(cfg.browser.path, PathBuf::from("/usr/bin/vivaldi"));
        assert_eq!(cfg.select_profile, ["https://ambiguous.example.com"]);
        assert_eq!(cfg.picker.as_ref().unwrap().command, ["rofi", "-dmenu"]);
        assert_eq!(cfg.mapping.len(), 2);
        assert_eq!(cfg.mapping[0].folder, "Profile 2");
        assert_eq!(cfg.mapping[1].urls, ["https://social.example.org"]);
    }

    #[test]
    fn missing_browser_section_is_a_parse_error() {
        let res: std::result::Result<RouterConfig, _> = toml::from_str("select_profile = []");
        assert!(res.is_err());
    }

    #[test]
    fn check_accepts_valid_config() {
        let browser = NamedTempFile::new().unwrap();
        let cfg = with_browser(
            browser.path(),
            r#"
            [[mapping]]
            name = "Work"
            folder = "Profile 2"
            urls = ["https://mail.example.com"]
            "#,
        );
        cfg.check().unwrap();
    }

    #[test]
    fn check_rejects_missing_browser_binary() {
        let cfg = parse(
            r#"
            [browser]
            path = "/definitely/not/here/vivaldi"
            default = "Default"
            "#,
        );
        let err = cfg.check().unwrap_err();
        assert!(err.to_string().contains("not an existing file"));
    }

    #[test]
    fn check_rejects_empty_default_profile() {
        let browser = NamedTempFile::new().unwrap();
        let mut cfg = with_browser(browser.path(), "");
        cfg.browser.default_profile = "  ".to_string();
        assert!(cfg.check().is_err());
    }

    #[test]
    fn check_rejects_mapping_without_urls() {
        let browser = NamedTempFile::new().unwrap();
        let cfg = with_browser(
            browser.path(),
            r#"
            [[mapping]]
            name = "Work"
            folder = "Profile 2"
            urls = []
            "#,
        );
        let err = cfg.check().unwrap_err();
        assert!(err.to_string().contains("mapping[0].urls"));
    }

    #[test]
    fn check_names_the_bad_url() {
        let browser = NamedTempFile::new().unwrap();
        let cfg = with_browser(
            browser.path(),
            r#"
            [[mapping]]
            name = "Work"
            folder = "Profile 2"
            urls = ["https://ok.example.com", "mail.example.com"]
            "#,
        );
        let err = cfg.check().unwrap_err();
        assert_eq!(err.to_string(), "mapping[0].urls[1]");
        assert!(format!("{err:#}").contains("mail.example.com"));
    }

    #[test]
    fn check_rejects_duplicate_names() {
        let browser = NamedTempFile::new().unwrap();
        let cfg = with_browser(
            browser.path(),
            r#"
            [[mapping]]
            name = "Work"
            folder = "Profile 2"
            urls = ["https://a.example.com"]

            [[mapping]]
            name = "Work"
            folder = "Profile 3"
            urls = ["https://b.example.com"]
            "#,
        );
        let err = cfg.check().unwrap_err();
        assert!(err.to_string().contains("used more than once"));
    }

    #[test]
    fn check_rejects_empty_picker_command() {
        let browser = NamedTempFile::new().unwrap();
        let mut cfg = with_browser(browser.path(), "");
        cfg.picker = Some(PickerConfig { command: Vec::new() });
        assert!(cfg.check().is_err());
    }

    #[test]
    fn load_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, STARTER_CONFIG).unwrap();
        let cfg = load_from_path(&path).unwrap();
        assert_eq!(cfg.browser.path, PathBuf::from("/usr/bin/vivaldi"));
    }

    #[test]
    fn load_from_path_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[browser\npath = 1").unwrap();
        let err = load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse config"));
    }
}
