mod health;
mod redirect;
mod stats;
mod url;

pub use self::health::health_handler;
pub use self::redirect::redirect_handler;
pub use self::stats::stats_handler;
pub use self::url::{create_url_handler, delete_url_handler, get_url_handler};
