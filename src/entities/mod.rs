pub mod company;
pub mod job_post;

pub use company::Entity as Company;
pub use job_post::Entity as JobPost;
