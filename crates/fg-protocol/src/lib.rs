pub mod entity;
pub mod intent;
pub mod message;

pub use entity::{AnalysisSubtype, EntityKind, EntityRef};
pub use intent::{QueryIntent, SubResource};
pub use message::{CollectingSink, IncomingMessage, Reply, ReplySink};
