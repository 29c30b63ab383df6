pub(crate) mod query;
pub(crate) mod scrape;
pub(crate) mod serve;
