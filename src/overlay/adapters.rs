//! Typed merge entry points, one per top-level collection.

use tracing::debug;

use crate::merge::{merge_named, Merge};
use crate::model::{
    BuildConfig, Deployment, DeploymentConfig, ImageStream, Object, PersistentVolumeClaim,
    RoleBinding, Route, Secret, Service, ServiceAccount,
};

/// Merges a whole singleton object.
pub fn merge_object<T: Merge>(baseline: &T, overlay: &T) -> T {
    baseline.merge(overlay)
}

/// Merges a named collection of top-level objects.
///
/// Objects are matched by `metadata.name`; an overlay object annotated
/// `delete: "true"` removes its baseline counterpart.
pub fn merge_collection<T: Object>(baseline: &[T], overlay: &[T]) -> Vec<T> {
    let merged = merge_named(baseline, overlay);
    debug!(
        kind = T::KIND,
        baseline = baseline.len(),
        overlay = overlay.len(),
        merged = merged.len(),
        "merged collection"
    );
    merged
}

pub fn merge_services(baseline: &[Service], overlay: &[Service]) -> Vec<Service> {
    merge_collection(baseline, overlay)
}

pub fn merge_routes(baseline: &[Route], overlay: &[Route]) -> Vec<Route> {
    merge_collection(baseline, overlay)
}

pub fn merge_deployment_configs(
    baseline: &[DeploymentConfig],
    overlay: &[DeploymentConfig],
) -> Vec<DeploymentConfig> {
    merge_collection(baseline, overlay)
}

pub fn merge_deployments(baseline: &[Deployment], overlay: &[Deployment]) -> Vec<Deployment> {
    merge_collection(baseline, overlay)
}

pub fn merge_build_configs(baseline: &[BuildConfig], overlay: &[BuildConfig]) -> Vec<BuildConfig> {
    merge_collection(baseline, overlay)
}

pub fn merge_image_streams(baseline: &[ImageStream], overlay: &[ImageStream]) -> Vec<ImageStream> {
    merge_collection(baseline, overlay)
}

pub fn merge_persistent_volume_claims(
    baseline: &[PersistentVolumeClaim],
    overlay: &[PersistentVolumeClaim],
) -> Vec<PersistentVolumeClaim> {
    merge_collection(baseline, overlay)
}

pub fn merge_service_accounts(
    baseline: &[ServiceAccount],
    overlay: &[ServiceAccount],
) -> Vec<ServiceAccount> {
    merge_collection(baseline, overlay)
}

pub fn merge_secrets(baseline: &[Secret], overlay: &[Secret]) -> Vec<Secret> {
    merge_collection(baseline, overlay)
}

pub fn merge_role_bindings(baseline: &[RoleBinding], overlay: &[RoleBinding]) -> Vec<RoleBinding> {
    merge_collection(baseline, overlay)
}

/// Merges a singleton deployment, such as the console.
pub fn merge_deployment(baseline: &Deployment, overlay: &Deployment) -> Deployment {
    let merged = merge_object(baseline, overlay);
    debug!(name = %merged.metadata.name, "merged deployment");
    merged
}

/// Applies several overlays in order, each on top of the previous result.
///
/// A deletion in one layer only affects what earlier layers produced: a
/// later layer can add the same name again.
pub fn merge_layers<T: Merge>(baseline: &T, overlays: &[T]) -> T {
    overlays
        .iter()
        .fold(baseline.clone(), |merged, overlay| merged.merge(overlay))
}
