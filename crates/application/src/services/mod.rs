pub mod timestamp_resolver;

pub use timestamp_resolver::TimestampResolver;
