mod catalog;
mod entry_recorder;
mod rate_resolver;
mod report_aggregator;

#[rustfmt::skip]
pub use {
    catalog::CatalogService,
    entry_recorder::EntryRecorderService,
    rate_resolver::RateResolverService,
    report_aggregator::ReportAggregatorService,
};
