use crate::config::RouterConfig;
use crate::error::RouterError;
use crate::url_model::CanonicalHost;

/// One browser profile and the URLs that should open in it.
#[derive(Debug, Clone)]
pub struct RoutingRule {
    pub name: String,
    pub folder: String,
    pub target_urls: Vec<String>,
    /// Canonical hosts of `target_urls`, in order; unparseable entries are skipped.
    target_hosts: Vec<CanonicalHost>,
}

impl RoutingRule {
    pub fn new(name: impl Into<String>, folder: impl Into<String>, target_urls: Vec<String>) -> Self {
        let target_hosts = canonical_hosts(&target_urls);
        Self {
            name: name.into(),
            folder: folder.into(),
            target_urls,
            target_hosts,
        }
    }

    pub fn target_hosts(&self) -> &[CanonicalHost] {
        &self.target_hosts
    }
}

/// Immutable routing state built once at startup.
///
/// Holds the ordered rules, the "always ask" URLs and the default profile
/// folder. Construct it, run [`super::validate`] over it, then share it by
/// reference for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct RoutingTable {
    default_folder: String,
    select_profile: Vec<String>,
    trigger_hosts: Vec<CanonicalHost>,
    rules: Vec<RoutingRule>,
}

impl RoutingTable {
    pub fn new(
        default_folder: impl Into<String>,
        select_profile: Vec<String>,
        rules: Vec<RoutingRule>,
    ) -> Self {
        let trigger_hosts = canonical_hosts(&select_profile);
        Self {
            default_folder: default_folder.into(),
            select_profile,
            trigger_hosts,
            rules,
        }
    }

    pub fn from_config(cfg: &RouterConfig) -> Self {
        let rules = cfg
            .mapping
            .iter()
            .map(|m| RoutingRule::new(m.name.clone(), m.folder.clone(), m.urls.clone()))
            .collect();
        Self::new(
            cfg.browser.default_profile.clone(),
            cfg.select_profile.clone(),
            rules,
        )
    }

    /// [`Self::from_config`] followed by [`super::validate`].
    pub fn load(cfg: &RouterConfig) -> Result<Self, RouterError> {
        let table = Self::from_config(cfg);
        super::validate(&table)?;
        Ok(table)
    }

    pub fn default_folder(&self) -> &str {
        &self.default_folder
    }

    /// Configured "always ask" URLs, as written.
    pub fn select_profile(&self) -> &[String] {
        &self.select_profile
    }

    pub fn trigger_hosts(&self) -> &[CanonicalHost] {
        &self.trigger_hosts
    }

    pub fn rules(&self) -> &[RoutingRule] {
        &self.rules
    }
}

fn canonical_hosts(urls: &[String]) -> Vec<CanonicalHost> {
    urls.iter()
        .filter_map(|u| {
            let host = CanonicalHost::from_config_url(u);
            if host.is_none() {
                tracing::warn!("ignoring configured URL without a usable host: {u:?}");
            }
            host
        })
        .collect()
}
