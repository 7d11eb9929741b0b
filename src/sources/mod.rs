//! Remote ref sources.
//!
//! Sources answer the two questions the resolver asks a forge: which tags
//! does a repository have, and which commit does a ref name point at.

pub mod github;
pub mod source;
pub mod transport;

pub use github::{GitHubSource, DEFAULT_API_URL};
pub use source::{ObjectKind, RefSource, TagRef};
pub use transport::{HttpResponse, HttpTransport, Transport, TransportError};
