//! Aggregate resource sets for one component and one environment.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::adapters::*;
use crate::merge::{is_zero, merge_positional, Merge};
use crate::model::{
    BuildConfig, Deployment, DeploymentConfig, ImageStream, PersistentVolumeClaim, RoleBinding,
    Route, Secret, Service, ServiceAccount,
};

/// CustomObject is every resource generated for one component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomObject {
    #[serde(skip_serializing_if = "is_zero")]
    pub persistent_volume_claims: Vec<PersistentVolumeClaim>,
    #[serde(skip_serializing_if = "is_zero")]
    pub service_accounts: Vec<ServiceAccount>,
    #[serde(skip_serializing_if = "is_zero")]
    pub secrets: Vec<Secret>,
    #[serde(skip_serializing_if = "is_zero")]
    pub role_bindings: Vec<RoleBinding>,
    #[serde(skip_serializing_if = "is_zero")]
    pub deployment_configs: Vec<DeploymentConfig>,
    #[serde(skip_serializing_if = "is_zero")]
    pub deployments: Vec<Deployment>,
    #[serde(skip_serializing_if = "is_zero")]
    pub build_configs: Vec<BuildConfig>,
    #[serde(skip_serializing_if = "is_zero")]
    pub image_streams: Vec<ImageStream>,
    #[serde(skip_serializing_if = "is_zero")]
    pub services: Vec<Service>,
    #[serde(skip_serializing_if = "is_zero")]
    pub routes: Vec<Route>,
}

impl CustomObject {
    /// Returns the total number of resources.
    pub fn len(&self) -> usize {
        self.persistent_volume_claims.len()
            + self.service_accounts.len()
            + self.secrets.len()
            + self.role_bindings.len()
            + self.deployment_configs.len()
            + self.deployments.len()
            + self.build_configs.len()
            + self.image_streams.len()
            + self.services.len()
            + self.routes.len()
    }

    /// Returns true if there are no resources.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Environment is the full resource set of a deployment profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Environment {
    pub console: CustomObject,
    pub smart_router: CustomObject,
    #[serde(skip_serializing_if = "is_zero")]
    pub servers: Vec<CustomObject>,
    #[serde(skip_serializing_if = "is_zero")]
    pub others: Vec<CustomObject>,
}

/// Merges every collection of two custom objects.
pub fn merge_custom_object(baseline: &CustomObject, overlay: &CustomObject) -> CustomObject {
    CustomObject {
        persistent_volume_claims: merge_persistent_volume_claims(
            &baseline.persistent_volume_claims,
            &overlay.persistent_volume_claims,
        ),
        service_accounts: merge_service_accounts(
            &baseline.service_accounts,
            &overlay.service_accounts,
        ),
        secrets: merge_secrets(&baseline.secrets, &overlay.secrets),
        role_bindings: merge_role_bindings(&baseline.role_bindings, &overlay.role_bindings),
        deployment_configs: merge_deployment_configs(
            &baseline.deployment_configs,
            &overlay.deployment_configs,
        ),
        deployments: merge_deployments(&baseline.deployments, &overlay.deployments),
        build_configs: merge_build_configs(&baseline.build_configs, &overlay.build_configs),
        image_streams: merge_image_streams(&baseline.image_streams, &overlay.image_streams),
        services: merge_services(&baseline.services, &overlay.services),
        routes: merge_routes(&baseline.routes, &overlay.routes),
    }
}

/// Merges two environments.
///
/// Console and smart router merge as whole objects. Servers and other
/// components have no identity and merge by position.
pub fn merge_environment(baseline: &Environment, overlay: &Environment) -> Environment {
    debug!(
        servers = baseline.servers.len().max(overlay.servers.len()),
        others = baseline.others.len().max(overlay.others.len()),
        "merging environment"
    );
    Environment {
        console: merge_custom_object(&baseline.console, &overlay.console),
        smart_router: merge_custom_object(&baseline.smart_router, &overlay.smart_router),
        servers: merge_positional(&baseline.servers, &overlay.servers),
        others: merge_positional(&baseline.others, &overlay.others),
    }
}

impl Merge for CustomObject {
    fn merge(&self, overlay: &Self) -> Self {
        merge_custom_object(self, overlay)
    }
}

impl Merge for Environment {
    fn merge(&self, overlay: &Self) -> Self {
        merge_environment(self, overlay)
    }
}

crate::positional_element!(CustomObject);
