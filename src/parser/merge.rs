//! Parameter merge: declaration signature plus comment prose.
//!
//! The declaration decides which parameters exist, their order, names and
//! types. Comment annotations only contribute descriptions, matched by name.

use super::annotation::Annotations;
use crate::model::ParamInfo;

/// Merge declared `(type, name)` pairs with annotated descriptions.
///
/// An empty declaration list falls back to the annotated list as written,
/// for older scripts that only documented parameters in comments.
pub fn merge_params(declared: &[(String, String)], annotations: &Annotations) -> Vec<ParamInfo> {
    if declared.is_empty() {
        return annotations.params.clone();
    }

    declared
        .iter()
        .map(|(ty, name)| ParamInfo {
            name: name.clone(),
            ty: ty.clone(),
            description: annotations
                .param_description(name)
                .unwrap_or_default()
                .to_string(),
        })
        .collect()
}
