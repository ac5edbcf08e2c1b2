// src/outcome/reason.rs

//! Why a package was picked for a build.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::Result;
use crate::sumtype::{SumType, fmt_variant};

/// One changed version-check entry: its index in the checker config and the
/// name of the source it came from.
pub type NvCheckerItem = (usize, String);

/// The trigger behind a build attempt.
///
/// Serializes as a flat mapping of the variant's fields plus a `name` key
/// holding the variant name, e.g. `{"name": "Depended", "depender": "foo"}`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name")]
pub enum BuildReason {
    /// Upstream version checks reported new versions.
    NvChecker { items: Vec<NvCheckerItem> },
    /// A package that failed last time has been updated.
    UpdatedFailed,
    /// The package release number was bumped.
    UpdatedPkgrel,
    /// Another package being built needs this one.
    Depended { depender: String },
    /// Dependencies that were failing have recovered.
    ///
    /// Provisional: `deps` is passed through as given.
    DepsRecovered { deps: Vec<String> },
    /// Requested explicitly on the command line.
    Cmdline,
}

impl BuildReason {
    /// Public fields plus `name`, for structured logging.
    pub fn to_mapping(&self) -> Result<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(anyhow::anyhow!("build reason serialized to a non-object: {other}").into()),
        }
    }

    /// Rebuild a reason from a mapping produced by [`BuildReason::to_mapping`]
    /// (or hand-written in the same shape).
    ///
    /// Fails with [`crate::errors::BuildcmdError::ReasonError`] on an unknown `name` or a
    /// missing/mistyped payload field.
    pub fn from_mapping(map: Map<String, Value>) -> Result<Self> {
        Ok(serde_json::from_value(Value::Object(map))?)
    }
}

impl SumType for BuildReason {
    const BASE: &'static str = "BuildReason";
    const VARIANTS: &'static [&'static str] = &[
        "NvChecker",
        "UpdatedFailed",
        "UpdatedPkgrel",
        "Depended",
        "DepsRecovered",
        "Cmdline",
    ];

    fn variant_name(&self) -> &'static str {
        match self {
            BuildReason::NvChecker { .. } => "NvChecker",
            BuildReason::UpdatedFailed => "UpdatedFailed",
            BuildReason::UpdatedPkgrel => "UpdatedPkgrel",
            BuildReason::Depended { .. } => "Depended",
            BuildReason::DepsRecovered { .. } => "DepsRecovered",
            BuildReason::Cmdline => "Cmdline",
        }
    }

    fn extra_info(&self) -> Option<String> {
        match self {
            BuildReason::NvChecker { items } => Some(format!("{items:?}")),
            BuildReason::Depended { depender } => Some(depender.clone()),
            _ => None,
        }
    }
}

impl fmt::Debug for BuildReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_variant(self, f)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::errors::BuildcmdError;

    fn mapping(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn depended_mapping_has_name_and_depender() {
        let reason = BuildReason::Depended {
            depender: "foo".into(),
        };
        assert_eq!(
            reason.to_mapping().unwrap(),
            mapping(json!({"name": "Depended", "depender": "foo"}))
        );
    }

    #[test]
    fn unit_variants_map_to_name_only() {
        assert_eq!(
            BuildReason::Cmdline.to_mapping().unwrap(),
            mapping(json!({"name": "Cmdline"}))
        );
        assert_eq!(
            BuildReason::UpdatedPkgrel.to_mapping().unwrap(),
            mapping(json!({"name": "UpdatedPkgrel"}))
        );
    }

    #[test]
    fn nvchecker_items_keep_their_order() {
        let reason = BuildReason::NvChecker {
            items: vec![(2, "github".into()), (0, "aur".into())],
        };
        assert_eq!(
            reason.to_mapping().unwrap(),
            mapping(json!({"name": "NvChecker", "items": [[2, "github"], [0, "aur"]]}))
        );
        assert_eq!(
            reason.describe(),
            "<BuildReason.NvChecker: [(2, \"github\"), (0, \"aur\")]>"
        );
    }

    #[test]
    fn describe_shows_depender_and_omits_empty_payloads() {
        let reason = BuildReason::Depended {
            depender: "python-foo".into(),
        };
        assert_eq!(reason.describe(), "<BuildReason.Depended: python-foo>");
        assert_eq!(
            format!("{:?}", BuildReason::UpdatedFailed),
            "<BuildReason.UpdatedFailed>"
        );
        let recovered = BuildReason::DepsRecovered {
            deps: vec!["a".into()],
        };
        assert_eq!(recovered.describe(), "<BuildReason.DepsRecovered>");
    }

    #[test]
    fn missing_payload_is_a_construction_error() {
        let err = BuildReason::from_mapping(mapping(json!({"name": "Depended"}))).unwrap_err();
        match err {
            BuildcmdError::ReasonError(e) => assert!(e.to_string().contains("depender")),
            other => panic!("expected ReasonError, got {other:?}"),
        }
    }

    #[test]
    fn unknown_variant_is_rejected() {
        let err = BuildReason::from_mapping(mapping(json!({"name": "Nightly"}))).unwrap_err();
        assert!(matches!(err, BuildcmdError::ReasonError(_)));
    }

    #[test]
    fn mapping_round_trips_through_describe() {
        let built = BuildReason::from_mapping(mapping(json!({
            "name": "Depended",
            "depender": "foo",
        })))
        .unwrap();
        assert_eq!(
            built,
            BuildReason::Depended {
                depender: "foo".into()
            }
        );
        assert_eq!(built.describe(), "<BuildReason.Depended: foo>");
        assert_eq!(
            BuildReason::from_mapping(built.to_mapping().unwrap()).unwrap(),
            built
        );
    }
}
