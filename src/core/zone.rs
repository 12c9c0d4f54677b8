//! Zone name handling shared by every provider.

/// Strips any trailing dots so `example.com.` and `example.com` address the
/// same zone.
pub fn normalize_zone(zone: &str) -> &str {
    zone.trim_end_matches('.')
}

/// Turns a fully-qualified name returned by a provider into a label relative
/// to `zone`. The apex becomes `"@"`; names outside the zone are returned as-is.
pub fn relative_name(fqdn: &str, zone: &str) -> String {
    let fqdn = fqdn.trim_end_matches('.');
    let zone = normalize_zone(zone);

    if fqdn.eq_ignore_ascii_case(zone) {
        return "@".to_string();
    }

    let split = fqdn.len().saturating_sub(zone.len());
    if split > 1 {
        if let (Some(label), Some(suffix)) = (fqdn.get(..split), fqdn.get(split..)) {
            if suffix.eq_ignore_ascii_case(zone) && label.ends_with('.') {
                return label.trim_end_matches('.').to_string();
            }
        }
    }

    fqdn.to_string()
}
