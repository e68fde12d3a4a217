//! Tests for manifest decoding and runtime-typed merges.

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::error::Error;
    use crate::model::{ObjectMeta, Route, Service};
    use crate::overlay::CustomObject;
    use crate::resource::{decode_resources, encode_resources, Resource};

    const MANIFEST: &str = r#"
apiVersion: v1
kind: Service
metadata:
  name: test-rhpamcentr
  labels:
    application: test
spec:
  ports:
  - name: http
    port: 8080
    targetPort: 8080
---
---
apiVersion: route.openshift.io/v1
kind: Route
metadata:
  name: test-rhpamcentr
spec:
  to:
    kind: Service
    name: test-rhpamcentr
---
apiVersion: v1
kind: Service
metadata:
  name: test-kieserver
"#;

    #[test]
    fn test_decode_skips_empty_documents() {
        let resources = decode_resources(MANIFEST).unwrap();
        let kinds: Vec<(&str, &str)> = resources.iter().map(|r| (r.kind(), r.name())).collect();
        assert_eq!(
            kinds,
            vec![
                ("Service", "test-rhpamcentr"),
                ("Route", "test-rhpamcentr"),
                ("Service", "test-kieserver"),
            ]
        );
    }

    #[test]
    fn test_decode_errors() {
        let err = decode_resources("metadata:\n  name: nameless\n").unwrap_err();
        assert!(matches!(err, Error::MissingKind));

        let err = decode_resources("kind: ConfigMap\nmetadata:\n  name: cm\n").unwrap_err();
        assert!(matches!(err, Error::UnknownKind(ref kind) if kind == "ConfigMap"));

        let err = decode_resources("kind: Service\nspec: [not, a, map]\n").unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
    }

    #[test]
    fn test_resource_merge_same_kind() {
        let resources = decode_resources(MANIFEST).unwrap();
        let overlay: Resource = serde_yaml::from_str(
            r#"
kind: Service
metadata:
  name: test-rhpamcentr
  labels:
    source: overlay
"#,
        )
        .unwrap();

        let merged = resources[0].merge(&overlay).unwrap();
        let Resource::Service(service) = merged else {
            panic!("expected a Service");
        };
        assert_eq!(service.metadata.labels.len(), 2);
        assert_eq!(service.spec.ports[0].port, 8080);
    }

    #[test]
    fn test_resource_merge_kind_mismatch() {
        let resources = decode_resources(MANIFEST).unwrap();
        let err = resources[0].merge(&resources[1]).unwrap_err();
        assert_eq!(err.to_string(), "cannot merge Route overlay onto Service baseline");
    }

    #[test]
    fn test_is_tombstone() {
        let mut metadata = ObjectMeta::named("test-rhpamcentr");
        let live = Resource::from(Service {
            metadata: metadata.clone(),
            ..Default::default()
        });
        assert!(!live.is_tombstone());

        metadata.mark_deleted();
        let tombstone = Resource::from(Route {
            metadata,
            ..Default::default()
        });
        assert!(tombstone.is_tombstone());
    }

    #[test]
    fn test_custom_object_grouping() {
        let resources = decode_resources(MANIFEST).unwrap();
        let object = CustomObject::from_resources(resources);
        assert_eq!(object.len(), 3);
        assert_eq!(object.services[0].metadata.name, "test-rhpamcentr");
        assert_eq!(object.services[1].metadata.name, "test-kieserver");
        assert_eq!(object.routes.len(), 1);

        let names: Vec<String> = object
            .into_resources()
            .iter()
            .map(|r| format!("{}/{}", r.kind(), r.name()))
            .collect();
        assert_eq!(
            names,
            vec![
                "Service/test-rhpamcentr",
                "Service/test-kieserver",
                "Route/test-rhpamcentr",
            ]
        );
    }

    #[test]
    fn test_into_resources_fills_type_meta() {
        let object = CustomObject {
            routes: vec![Route {
                metadata: ObjectMeta::named("test-rhpamcentr"),
                ..Default::default()
            }],
            ..Default::default()
        };

        let yaml = encode_resources(&object.into_resources()).unwrap();
        assert!(
            yaml.starts_with("apiVersion: route.openshift.io/v1\nkind: Route\nmetadata:\n  name: test-rhpamcentr\n"),
            "unexpected output: {}",
            yaml
        );
    }

    #[test]
    fn test_encode_separates_documents() {
        let resources = decode_resources(MANIFEST).unwrap();
        let yaml = encode_resources(&resources).unwrap();
        assert_eq!(yaml.matches("---\n").count(), 2);
        assert_eq!(decode_resources(&yaml).unwrap(), resources);
    }
}
