//! Batch materialization into independent documents.

use crate::error::MaterializeResult;
use crate::node::{Document, Node};
use crate::vnode::VNode;

use super::{MaterializeConfig, Materializer};

fn materialize_one(vnode: &VNode, config: MaterializeConfig) -> MaterializeResult<Node> {
    Materializer::with_config(Document::new(), config).materialize(vnode)
}

/// Materialize each descriptor into its own fresh [`Document`].
///
/// Results keep input order. A failure only affects its own slot.
pub fn materialize_all(descriptors: &[VNode], config: MaterializeConfig) -> Vec<MaterializeResult<Node>> {
    descriptors.iter().map(|vnode| materialize_one(vnode, config)).collect()
}

/// Parallel [`materialize_all`] (requires `parallel` feature).
#[cfg(feature = "parallel")]
pub fn par_materialize_all(descriptors: &[VNode], config: MaterializeConfig) -> Vec<MaterializeResult<Node>> {
    use rayon::prelude::*;

    descriptors.par_iter().map(|vnode| materialize_one(vnode, config)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MaterializeError;
    use crate::vnode::h;

    fn inputs() -> Vec<VNode> {
        vec![
            h("p").text("one").into(),
            h("bad tag").into(),
            VNode::from(vec!["a", "b"]),
        ]
    }

    #[test]
    fn test_materialize_all_keeps_order_and_isolates_errors() {
        let results = materialize_all(&inputs(), MaterializeConfig::DEFAULT);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().text_content(), "one");
        assert!(matches!(results[1], Err(MaterializeError::InvalidTag { .. })));
        assert!(results[2].as_ref().unwrap().is_fragment());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_par_materialize_all_matches_sequential() {
        let inputs = inputs();
        let seq = materialize_all(&inputs, MaterializeConfig::DEFAULT);
        let par = par_materialize_all(&inputs, MaterializeConfig::DEFAULT);
        for (a, b) in seq.iter().zip(&par) {
            match (a, b) {
                (Ok(a), Ok(b)) => assert_eq!(a.fingerprint(), b.fingerprint()),
                (Err(a), Err(b)) => assert_eq!(a.to_string(), b.to_string()),
                _ => panic!("Sequential and parallel results differ"),
            }
        }
    }
}
