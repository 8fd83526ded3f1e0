pub mod activity;
pub mod content;
pub mod export_format;
pub mod jellyfin;
pub mod media;
pub mod requests;
pub mod status;
pub mod user;
pub mod watched;

pub use activity::Activity;
pub use content::Content;
pub use export_format::DownloadFormat;
pub use jellyfin::JellyfinFoundContent;
pub use media::MediaType;
pub use requests::{AuthRequest, AuthResponse, WatchedAddRequest, WatchedUpdateRequest, WatchedUpdateResponse};
pub use status::WatchedStatus;
pub use user::UserType;
pub use watched::Watched;
