mod article_client;

pub use article_client::{ArticleClient, DEFAULT_ENDPOINT};
