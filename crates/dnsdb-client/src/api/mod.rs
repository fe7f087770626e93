//! API endpoint modules.

mod rdata;
mod rrset;

pub use rdata::RDataApi;
pub use rrset::RRSetApi;

/// Append `/{segment}` to `path` when a filter is set
fn push_segment(path: &mut String, segment: Option<&str>) -> bool {
    match segment {
        Some(segment) => {
            path.push('/');
            path.push_str(segment);
            true
        }
        None => false,
    }
}
