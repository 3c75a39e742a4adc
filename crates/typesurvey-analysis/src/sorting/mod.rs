//! Report ordering: per-bucket comparators and fixed bucket order.

pub mod comparator;
pub mod sorter;

pub use comparator::{parse_leading_int, ReportComparator};
pub use sorter::ReportSorter;
