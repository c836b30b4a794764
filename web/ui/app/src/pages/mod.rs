mod detail;
mod home;
mod profile;

pub use detail::DetailPage;
pub use home::HomePage;
pub use profile::ProfilePage;
