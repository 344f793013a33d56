mod home;
pub use home::Home;

mod page;
pub use page::SitePage;
