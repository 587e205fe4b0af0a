mod catalog;
mod entry_recorder;
mod rate_resolver;
mod report_aggregator;

#[rustfmt::skip]
pub use {
    catalog::CatalogServiceImpl,
    entry_recorder::EntryRecorderServiceImpl,
    rate_resolver::RateResolverServiceImpl,
    report_aggregator::ReportAggregatorServiceImpl,
};
