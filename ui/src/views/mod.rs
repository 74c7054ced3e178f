//! One component per route.

mod about;
pub use about::{About, ABOUT_VIEW};

mod blog;
pub use blog::Blog;

mod create_project;
pub use create_project::CreateProject;

mod dashboard;
pub use dashboard::Dashboard;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod not_found;
pub use not_found::PageNotFound;

mod project_detail;
pub use project_detail::ProjectDetail;

mod projects;
pub use projects::Projects;

mod search;
pub use search::Search;

mod single_page;
pub use single_page::SinglePage;
