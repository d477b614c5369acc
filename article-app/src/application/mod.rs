mod process_article;

pub use process_article::ProcessArticle;
