mod article_processor;

pub use article_processor::ArticleProcessorPage;
