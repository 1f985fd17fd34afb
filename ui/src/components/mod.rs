mod footer;
pub use footer::Footer;

mod header;
pub use header::Header;

mod hero;
pub use hero::Hero;

mod layout;
pub use layout::SiteLayout;

mod site;
pub use site::{Preferences, Site};
