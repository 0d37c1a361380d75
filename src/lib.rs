pub mod bcp47;
pub mod config;
pub mod derive;
pub mod engine;
pub mod group;
pub mod host;
pub mod link;
pub mod lookup;
pub mod message;
pub mod names;
pub mod table;

pub use bcp47::Bcp47;
pub use config::{OverrideSpec, SpecError};
pub use derive::{DerivedFields, LinkFieldDeriver};
pub use engine::OverrideEngine;
pub use group::GroupResolver;
pub use host::{
    DiagnosticSink, EmptyRegistry, LanguageCodeNormalizer, LanguageNameProvider, LogSink,
    MessageProvider, RenderContext, RenderedMessage, SiteRecord, SiteRegistry,
};
pub use link::{INTERLANGUAGE_LINK_TARGET, LanguageLink, TargetReference};
pub use message::MessageStore;
pub use names::{LanguageName, StaticNames};
pub use table::OverrideTable;
