use portare_dns_domain::config::ZoneMatchOrder;
use portare_dns_domain::domain_name;
use smallvec::SmallVec;

pub type Candidates = SmallVec<[String; 8]>;

/// Every suffix of `name` as an FQDN, in the order the zone walk tries them.
///
/// `www.test.com.` yields `com.`, `test.com.`, `www.test.com.` for
/// `ShortestFirst` and the reverse for `LongestFirst`. The root name yields nothing.
pub fn zone_candidates(name: &str, order: ZoneMatchOrder) -> Candidates {
    let labels: SmallVec<[&str; 8]> = domain_name::labels(name).collect();

    let mut candidates = Candidates::with_capacity(labels.len());
    for start in (0..labels.len()).rev() {
        let mut zone = labels[start..].join(".");
        zone.push('.');
        candidates.push(zone);
    }

    if order == ZoneMatchOrder::LongestFirst {
        candidates.reverse();
    }
    candidates
}
