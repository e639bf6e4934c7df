//! Environment-derived cluster metadata exposed by `/api/kubernetes`.

use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Cluster placement info, read once at startup from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterInfo {
    /// Node hostname (`HOSTNAME`, set by the kubelet).
    pub node: String,
    /// Namespace the pod runs in (`NAMESPACE`, via the downward API).
    pub namespace: String,
}

impl ClusterInfo {
    /// Build cluster info from the loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            node: config.hostname.clone(),
            namespace: config.namespace.clone(),
        }
    }
}

/// The orchestration features this demo illustrates, shown verbatim in the
/// frontend feature list.
pub fn demo_features() -> Vec<String> {
    [
        "Health and readiness probes",
        "Service discovery",
        "Environment-based configuration",
        "Horizontal pod autoscaling",
        "Rolling deployments",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cluster_info_mirrors_config() {
        let config = Config {
            hostname: "node-7".to_string(),
            namespace: "demo".to_string(),
            ..Config::default()
        };

        let info = ClusterInfo::from_config(&config);
        assert_eq!(info.node, "node-7");
        assert_eq!(info.namespace, "demo");
    }

    #[test]
    fn feature_list_is_non_empty() {
        let features = demo_features();
        assert!(!features.is_empty());
        assert!(features.iter().all(|f| !f.is_empty()));
    }
}
