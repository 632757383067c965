#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod model {
    pub use rdf_graph_model::*;
}

pub mod storage {
    pub use rdf_graph_storage::*;
}
