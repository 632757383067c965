mod blank_node;
mod literal;
mod named_node;
mod node;
mod term;
mod triple;

pub use blank_node::BlankNode;
pub use blank_node::BlankNodeIdGenerator;
pub use literal::Literal;
pub use named_node::NamedNode;
pub use node::RdfNode;
pub use node::TermKind;
pub use term::GraphName;
pub use term::Subject;
pub use term::Term;
pub use triple::Quad;
pub use triple::Triple;
