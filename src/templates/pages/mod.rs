pub mod blog;
pub mod home;
pub mod leads;
pub mod properties;
pub mod tools;

pub use blog::{blog_list_page, blog_post_page};
pub use home::home_page;
pub use leads::lead_thanks_page;
pub use properties::{properties_page, property_detail_page};
pub use tools::{calculator_page, tools_page};
